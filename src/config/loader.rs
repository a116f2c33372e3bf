//! Configuration file loading and saving

use super::file::{ConfigFile, CONFIG_FILE_NAME};
use crate::error::AnalyzerError;
use crate::infra::{FileSystem, RealFileSystem};
use std::path::Path;

/// Handles loading and saving configuration files
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load config from .mempro-analyzer.toml in the given directory
    ///
    /// A missing file yields the default configuration.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use mempro_analyzer::config::ConfigLoader;
    /// use std::path::Path;
    ///
    /// let config = ConfigLoader::load(Path::new("."))?;
    /// println!("Top leakers: {}", config.top_leakers_or_default());
    /// # Ok::<(), mempro_analyzer::error::AnalyzerError>(())
    /// ```
    pub fn load(project_root: &Path) -> Result<ConfigFile, AnalyzerError> {
        Self::load_with_fs(project_root, &RealFileSystem)
    }

    /// Load config with a custom filesystem implementation
    pub fn load_with_fs<FS: FileSystem>(
        project_root: &Path,
        fs: &FS,
    ) -> Result<ConfigFile, AnalyzerError> {
        let config_path = project_root.join(CONFIG_FILE_NAME);

        let contents = match fs.read_to_string(&config_path) {
            Ok(c) => c,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                log::debug!("no {} found, using defaults", CONFIG_FILE_NAME);
                return Ok(ConfigFile::default());
            }
            Err(e) => {
                return Err(AnalyzerError::Config {
                    path: config_path,
                    reason: e.to_string(),
                });
            }
        };

        let config: ConfigFile =
            toml_edit::de::from_str(&contents).map_err(|e| AnalyzerError::Config {
                path: config_path.clone(),
                reason: e.to_string(),
            })?;

        if config.json_path.as_deref() == Some("") {
            return Err(AnalyzerError::Config {
                path: config_path,
                reason: "json-path must not be empty".to_string(),
            });
        }

        Ok(config)
    }

    /// Save config to .mempro-analyzer.toml in the given directory
    pub fn save(config: &ConfigFile, project_root: &Path) -> Result<(), AnalyzerError> {
        Self::save_with_fs(config, project_root, &RealFileSystem)
    }

    /// Save config with a custom filesystem implementation
    pub fn save_with_fs<FS: FileSystem>(
        config: &ConfigFile,
        project_root: &Path,
        fs: &FS,
    ) -> Result<(), AnalyzerError> {
        let config_path = project_root.join(CONFIG_FILE_NAME);

        let contents =
            toml_edit::ser::to_string_pretty(config).map_err(|e| AnalyzerError::Config {
                path: config_path.clone(),
                reason: e.to_string(),
            })?;

        fs.write(&config_path, contents)
            .map_err(|e| AnalyzerError::Config {
                path: config_path,
                reason: e.to_string(),
            })
    }

    /// Check if config file exists in project
    pub fn exists(project_root: &Path) -> bool {
        Self::exists_with_fs(project_root, &RealFileSystem)
    }

    /// Check for a config file with a custom filesystem implementation
    pub fn exists_with_fs<FS: FileSystem>(project_root: &Path, fs: &FS) -> bool {
        fs.exists(&project_root.join(CONFIG_FILE_NAME))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;
    use std::sync::{Arc, Mutex};

    struct MockFileSystem {
        file_content: Option<String>,
        read_error: Option<io::ErrorKind>,
        written_content: Arc<Mutex<Option<String>>>,
    }

    impl MockFileSystem {
        fn new() -> Self {
            Self {
                file_content: None,
                read_error: None,
                written_content: Arc::new(Mutex::new(None)),
            }
        }

        fn with_content(content: &str) -> Self {
            Self {
                file_content: Some(content.to_string()),
                ..Self::new()
            }
        }

        fn with_read_error(kind: io::ErrorKind) -> Self {
            Self {
                read_error: Some(kind),
                ..Self::new()
            }
        }
    }

    impl FileSystem for MockFileSystem {
        fn read_to_string(&self, _path: &Path) -> io::Result<String> {
            if let Some(kind) = self.read_error {
                return Err(io::Error::new(kind, "mock read error"));
            }
            self.file_content
                .clone()
                .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "File not found"))
        }

        fn write(&self, _path: &Path, contents: impl AsRef<[u8]>) -> io::Result<()> {
            let text = String::from_utf8_lossy(contents.as_ref()).to_string();
            *self.written_content.lock().unwrap() = Some(text);
            Ok(())
        }

        fn exists(&self, _path: &Path) -> bool {
            self.file_content.is_some()
        }
    }

    #[test]
    fn test_load_missing_file_returns_default() {
        let fs = MockFileSystem::new();
        let config = ConfigLoader::load_with_fs(Path::new("/project"), &fs).unwrap();
        assert_eq!(config, ConfigFile::default());
    }

    #[test]
    fn test_load_valid_config() {
        let fs = MockFileSystem::with_content("json-path = \"nightly.json\"\ntop-leakers = 3\n");
        let config = ConfigLoader::load_with_fs(Path::new("/project"), &fs).unwrap();
        assert_eq!(config.json_path.as_deref(), Some("nightly.json"));
        assert_eq!(config.top_leakers_or_default(), 3);
    }

    #[test]
    fn test_load_malformed_config_is_config_error() {
        let fs = MockFileSystem::with_content("top-leakers = \"many\"");
        let err = ConfigLoader::load_with_fs(Path::new("/project"), &fs).unwrap_err();
        assert!(matches!(err, AnalyzerError::Config { .. }));
        assert_eq!(err.exit_code(), 78);
    }

    #[test]
    fn test_load_empty_json_path_is_rejected() {
        let fs = MockFileSystem::with_content("json-path = \"\"");
        let err = ConfigLoader::load_with_fs(Path::new("/project"), &fs).unwrap_err();
        assert!(err.to_string().contains("json-path must not be empty"));
    }

    #[test]
    fn test_load_permission_denied_is_config_error() {
        let fs = MockFileSystem::with_read_error(io::ErrorKind::PermissionDenied);
        let err = ConfigLoader::load_with_fs(Path::new("/project"), &fs).unwrap_err();
        assert!(matches!(err, AnalyzerError::Config { .. }));
    }

    #[test]
    fn test_save_writes_kebab_case() {
        let fs = MockFileSystem::new();
        let config = ConfigFile {
            json_path: Some("a.json".to_string()),
            top_leakers: Some(7),
        };
        ConfigLoader::save_with_fs(&config, Path::new("/project"), &fs).unwrap();

        let written = fs.written_content.lock().unwrap().clone().unwrap();
        assert!(written.contains("json-path = \"a.json\""));
        assert!(written.contains("top-leakers = 7"));
    }

    #[test]
    fn test_exists_with_fs_uses_seam() {
        assert!(!ConfigLoader::exists_with_fs(Path::new("/project"), &MockFileSystem::new()));
        let fs = MockFileSystem::with_content("top-leakers = 5");
        assert!(ConfigLoader::exists_with_fs(Path::new("/project"), &fs));
    }

    #[test]
    fn test_save_then_load_real_directory() {
        let dir = tempfile::TempDir::new().unwrap();
        assert!(!ConfigLoader::exists(dir.path()));

        ConfigLoader::save(&ConfigFile::starter(), dir.path()).unwrap();
        assert!(ConfigLoader::exists(dir.path()));

        let loaded = ConfigLoader::load(dir.path()).unwrap();
        assert_eq!(loaded, ConfigFile::starter());
    }
}
