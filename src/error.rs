//! Error types with contextual suggestions
//!
//! Loading a snapshot can fail in exactly two ways: the file cannot be read, or
//! its contents are not a MemPro export. Once a snapshot is loaded every
//! analysis is infallible. The remaining variants belong to the command layer.
//!
//! # Examples
//!
//! ```no_run
//! use mempro_analyzer::snapshot::SnapshotLoader;
//!
//! match SnapshotLoader::load("session.json") {
//!     Ok(snapshot) => println!("Loaded {}", snapshot.session_name),
//!     Err(e) => {
//!         eprintln!("Load failed: {}", e);
//!         std::process::exit(e.exit_code());
//!     }
//! }
//! ```

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading snapshots or resolving command input
#[derive(Error, Debug)]
pub enum AnalyzerError {
    /// Input file could not be read
    #[error("failed to read JSON file {path}")]
    Read {
        /// Path that was read
        path: PathBuf,
        #[source]
        /// IO error source
        source: std::io::Error,
    },

    /// Input file is not a valid MemPro export
    #[error("failed to parse JSON in {path}")]
    Parse {
        /// Path that was parsed
        path: PathBuf,
        #[source]
        /// JSON error source
        source: serde_json::Error,
    },

    /// Top-leakers count could not be used
    #[error("invalid leaker count: {value}")]
    InvalidCount {
        /// Offending value
        value: String,
    },

    /// Configuration file could not be loaded
    #[error("invalid configuration in {path}: {reason}")]
    Config {
        /// Path to config file
        path: PathBuf,
        /// What went wrong
        reason: String,
    },
}

impl AnalyzerError {
    /// Get actionable suggestion for resolving this error.
    ///
    /// # Examples
    ///
    /// ```
    /// use mempro_analyzer::error::AnalyzerError;
    /// use std::path::PathBuf;
    ///
    /// let error = AnalyzerError::Read {
    ///     path: PathBuf::from("missing.json"),
    ///     source: std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
    /// };
    ///
    /// assert!(error.suggestion().contains("--json-path"));
    /// ```
    pub fn suggestion(&self) -> String {
        match self {
            Self::Read { path, .. } => format!(
                "Check that {} exists and is readable, or pass --json-path / set MEMPRO_JSON_PATH",
                path.display()
            ),
            Self::Parse { source, .. } => format!(
                "Re-export the session from MemProReader; the document is malformed at line {}, column {}",
                source.line(),
                source.column()
            ),
            Self::InvalidCount { .. } => "Pass a whole number, e.g. --count 10".to_string(),
            Self::Config { path, .. } => format!(
                "Fix or delete {} (run 'mempro-analyzer init' to regenerate it)",
                path.display()
            ),
        }
    }

    /// Get appropriate exit code for this error, following sysexits.h conventions.
    ///
    /// # Examples
    ///
    /// ```
    /// use mempro_analyzer::error::AnalyzerError;
    ///
    /// let error = AnalyzerError::InvalidCount { value: "ten".to_string() };
    /// assert_eq!(error.exit_code(), 64);
    /// ```
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Read { .. } => 66,         // EX_NOINPUT
            Self::Parse { .. } => 65,        // EX_DATAERR
            Self::InvalidCount { .. } => 64, // EX_USAGE
            Self::Config { .. } => 78,       // EX_CONFIG
        }
    }
}

/// Error formatter with colors and structured output
pub struct ErrorFormatter;

impl ErrorFormatter {
    /// Format error with its cause chain and suggestion
    pub fn format(error: &anyhow::Error) -> String {
        use console::style;

        let mut output = String::new();

        output.push_str(&format!("{} {}\n", style("error:").red().bold(), error));

        let mut source = error.source();
        let mut indent = 1;
        while let Some(err) = source {
            output.push_str(&format!(
                "{}{} {}\n",
                "  ".repeat(indent),
                style("caused by:").yellow(),
                err
            ));
            source = err.source();
            indent += 1;
        }

        if let Some(analyzer_error) = error.downcast_ref::<AnalyzerError>() {
            output.push_str(&format!(
                "\n{} {}\n",
                style("help:").cyan().bold(),
                analyzer_error.suggestion()
            ));
        }

        output
    }

    /// Get exit code from error
    pub fn exit_code(error: &anyhow::Error) -> i32 {
        if let Some(analyzer_error) = error.downcast_ref::<AnalyzerError>() {
            analyzer_error.exit_code()
        } else {
            1
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn read_error() -> AnalyzerError {
        AnalyzerError::Read {
            path: PathBuf::from("session.json"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
        }
    }

    fn parse_error() -> AnalyzerError {
        let source = serde_json::from_str::<serde_json::Value>("{\n  \"SessionName\": ")
            .unwrap_err();
        AnalyzerError::Parse {
            path: PathBuf::from("session.json"),
            source,
        }
    }

    #[test]
    fn test_read_error_names_path_and_fallbacks() {
        let err = read_error();
        assert!(err.to_string().contains("session.json"));
        let suggestion = err.suggestion();
        assert!(suggestion.contains("session.json"));
        assert!(suggestion.contains("MEMPRO_JSON_PATH"));
    }

    #[test]
    fn test_parse_error_reports_position() {
        let err = parse_error();
        assert!(err.to_string().starts_with("failed to parse JSON"));
        assert!(err.suggestion().contains("line 2"));
    }

    #[test]
    fn test_exit_codes_follow_conventions() {
        assert_eq!(read_error().exit_code(), 66);
        assert_eq!(parse_error().exit_code(), 65);
        assert_eq!(
            AnalyzerError::InvalidCount {
                value: "x".to_string()
            }
            .exit_code(),
            64
        );
        assert_eq!(
            AnalyzerError::Config {
                path: PathBuf::from(".mempro-analyzer.toml"),
                reason: "bad".to_string(),
            }
            .exit_code(),
            78
        );
    }

    #[test]
    fn test_formatter_includes_cause_and_help() {
        let err = anyhow::Error::new(read_error());
        let formatted = ErrorFormatter::format(&err);

        assert!(formatted.contains("failed to read JSON file"));
        assert!(formatted.contains("not found"));
        assert!(formatted.contains("MEMPRO_JSON_PATH"));
        assert_eq!(ErrorFormatter::exit_code(&err), 66);
    }

    #[test]
    fn test_formatter_generic_error_exit_code() {
        let err = anyhow::anyhow!("something else");
        assert_eq!(ErrorFormatter::exit_code(&err), 1);
        assert!(!ErrorFormatter::format(&err).contains("help:"));
    }
}
