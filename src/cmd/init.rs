//! Init command implementation
//!
//! Handles the `mempro-analyzer init` command which writes a starter
//! `.mempro-analyzer.toml` into the current directory.

use anyhow::Result;
use console::style;
use std::env;
use std::path::Path;

use crate::config::{self, ConfigFile, ConfigLoader};
use crate::fmt::{CHECKMARK, INFO, WARNING};
use crate::infra::{FileSystem, RealFileSystem};

/// Initialize mempro-analyzer configuration in the current directory
pub fn cmd_init() -> Result<()> {
    let project_root = env::current_dir()?;
    init_in(&project_root)?;
    Ok(())
}

/// Write the starter config into `project_root`
///
/// Returns `false` without touching anything when a config already exists.
pub fn init_in(project_root: &Path) -> Result<bool> {
    init_in_with_fs(project_root, &RealFileSystem)
}

/// Write the starter config through a custom filesystem implementation
pub fn init_in_with_fs<FS: FileSystem>(project_root: &Path, fs: &FS) -> Result<bool> {
    if ConfigLoader::exists_with_fs(project_root, fs) {
        println!(
            "{} Config file already exists: {}",
            WARNING,
            style(config::CONFIG_FILE_NAME).cyan()
        );
        println!("   Delete it first or edit manually to update.");
        return Ok(false);
    }

    ConfigLoader::save_with_fs(&ConfigFile::starter(), project_root, fs)?;

    println!(
        "{} Created {}",
        CHECKMARK,
        style(config::CONFIG_FILE_NAME).cyan().bold()
    );
    println!(
        "{}  Add {} to point at your MemPro export, or set {}",
        INFO,
        style("json-path = \"...\"").green(),
        style(config::JSON_PATH_ENV).green()
    );
    Ok(true)
}
