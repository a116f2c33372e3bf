//! Snapshot loading from MemPro JSON exports

use super::types::Snapshot;
use crate::error::AnalyzerError;
use crate::infra::{FileSystem, RealFileSystem};
use std::path::Path;

/// Reads and parses MemPro exports
pub struct SnapshotLoader;

impl SnapshotLoader {
    /// Load a snapshot from a JSON file
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use mempro_analyzer::snapshot::SnapshotLoader;
    ///
    /// let snapshot = SnapshotLoader::load("test_memory_analysis.json")?;
    /// println!("{} leaks", snapshot.leaks.len());
    /// # Ok::<(), mempro_analyzer::error::AnalyzerError>(())
    /// ```
    pub fn load(path: impl AsRef<Path>) -> Result<Snapshot, AnalyzerError> {
        Self::load_with_fs(path, &RealFileSystem)
    }

    /// Load a snapshot with a custom filesystem implementation
    pub fn load_with_fs<FS: FileSystem>(
        path: impl AsRef<Path>,
        fs: &FS,
    ) -> Result<Snapshot, AnalyzerError> {
        let path = path.as_ref();
        log::debug!("loading MemPro export from {}", path.display());

        let contents = fs.read_to_string(path).map_err(|source| AnalyzerError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let snapshot: Snapshot =
            serde_json::from_str(&contents).map_err(|source| AnalyzerError::Parse {
                path: path.to_path_buf(),
                source,
            })?;

        log::debug!(
            "loaded session '{}': {} functions, {} leaks, {} call trees",
            snapshot.session_name,
            snapshot.functions.len(),
            snapshot.leaks.len(),
            snapshot.call_trees.len()
        );

        Ok(snapshot)
    }
}

impl Snapshot {
    /// Parse a snapshot from an in-memory JSON document
    pub fn from_json_str(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
