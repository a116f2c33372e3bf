//! Configuration for mempro-analyzer
//!
//! This module provides:
//! - .mempro-analyzer.toml config file support
//! - Input path resolution (argument, environment, config, default)

pub mod file;
pub mod loader;
pub mod resolver;

pub use file::{ConfigFile, CONFIG_FILE_NAME};
pub use loader::ConfigLoader;
pub use resolver::{
    resolve_json_path, resolve_json_path_from_env, PathSource, ResolvedPath, DEFAULT_JSON_PATH,
    JSON_PATH_ENV,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_file_name_constant_is_correct() {
        assert_eq!(CONFIG_FILE_NAME, ".mempro-analyzer.toml");
    }

    #[test]
    fn test_env_var_name_matches_mempro_convention() {
        assert_eq!(JSON_PATH_ENV, "MEMPRO_JSON_PATH");
    }
}
