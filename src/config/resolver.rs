//! Input path resolution
//!
//! The export to analyse comes from, in order: an explicit argument, the
//! `MEMPRO_JSON_PATH` environment variable, `json-path` in the config file,
//! and finally the MemPro reader's default output location. Empty values are
//! skipped.

use super::file::ConfigFile;
use std::path::PathBuf;

/// Environment variable naming the default export
pub const JSON_PATH_ENV: &str = "MEMPRO_JSON_PATH";

/// Where MemProReader writes its analysis export by default
pub const DEFAULT_JSON_PATH: &str =
    r"C:\Program Files\PureDevSoftware\MemPro\MemProReader\test_memory_analysis.json";

/// Which source supplied the resolved path
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathSource {
    /// `--json-path` argument
    Argument,
    /// `MEMPRO_JSON_PATH`
    Environment,
    /// `.mempro-analyzer.toml`
    ConfigFile,
    /// Built-in fallback
    Default,
}

/// A resolved input path and where it came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedPath {
    /// Path to the MemPro export
    pub path: PathBuf,
    /// Source of the path
    pub source: PathSource,
}

/// Resolve the input path from explicit values
///
/// # Examples
///
/// ```
/// use mempro_analyzer::config::{resolve_json_path, ConfigFile, PathSource};
///
/// let config = ConfigFile::default();
/// let resolved = resolve_json_path(None, Some("env.json".to_string()), &config);
/// assert_eq!(resolved.source, PathSource::Environment);
///
/// let resolved = resolve_json_path(Some("arg.json"), Some("env.json".to_string()), &config);
/// assert_eq!(resolved.source, PathSource::Argument);
/// ```
pub fn resolve_json_path(
    explicit: Option<&str>,
    env_value: Option<String>,
    config: &ConfigFile,
) -> ResolvedPath {
    let (path, source) = if let Some(path) = explicit.filter(|p| !p.is_empty()) {
        (PathBuf::from(path), PathSource::Argument)
    } else if let Some(path) = env_value.filter(|p| !p.is_empty()) {
        (PathBuf::from(path), PathSource::Environment)
    } else if let Some(path) = config.json_path.as_deref().filter(|p| !p.is_empty()) {
        (PathBuf::from(path), PathSource::ConfigFile)
    } else {
        (PathBuf::from(DEFAULT_JSON_PATH), PathSource::Default)
    };

    log::debug!("using MemPro export {} ({:?})", path.display(), source);
    ResolvedPath { path, source }
}

/// Resolve the input path, reading `MEMPRO_JSON_PATH` from the process environment
pub fn resolve_json_path_from_env(explicit: Option<&str>, config: &ConfigFile) -> ResolvedPath {
    resolve_json_path(explicit, std::env::var(JSON_PATH_ENV).ok(), config)
}
