//! Analysis command implementations
//!
//! Each command resolves the input path, loads a fresh snapshot and prints one
//! analysis:
//! - leaks / fragmentation / large-allocations: issue lists (console or JSON)
//! - summary / top-leakers: prose reports printed verbatim
//! - all / stats: JSON documents

use anyhow::{Context, Result};
use console::style;
use std::env;

use crate::analyzer::{self, Issue, MemoryAnalyzer};
use crate::config::{self, ConfigFile, ConfigLoader, PathSource};
use crate::error::AnalyzerError;
use crate::fmt::{MICROSCOPE, WARNING};

/// Load configuration from the working directory and the resolved snapshot
pub fn load_analyzer(json_path: Option<&str>) -> Result<(MemoryAnalyzer, ConfigFile)> {
    let project_root = env::current_dir()?;
    let config = ConfigLoader::load(&project_root)?;

    let resolved = config::resolve_json_path_from_env(json_path, &config);
    if resolved.source == PathSource::Default {
        log::warn!(
            "no --json-path, {} or config entry; falling back to {}",
            config::JSON_PATH_ENV,
            resolved.path.display()
        );
    }

    let analyzer = MemoryAnalyzer::from_path(&resolved.path)?;
    Ok((analyzer, config))
}

/// Parse a top-leakers count
///
/// Accepts whole numbers and, like JSON-number callers, decimal values which
/// are truncated toward zero.
///
/// # Examples
///
/// ```
/// use mempro_analyzer::cmd::analyze::parse_count;
///
/// assert_eq!(parse_count("5").unwrap(), 5);
/// assert_eq!(parse_count("7.9").unwrap(), 7);
/// assert!(parse_count("lots").is_err());
/// ```
pub fn parse_count(value: &str) -> Result<i64, AnalyzerError> {
    let trimmed = value.trim();
    if let Ok(n) = trimmed.parse::<i64>() {
        return Ok(n);
    }
    match trimmed.parse::<f64>() {
        Ok(n) if n.is_finite() => Ok(n.trunc() as i64),
        _ => Err(AnalyzerError::InvalidCount {
            value: value.to_string(),
        }),
    }
}

fn print_json<T: serde::Serialize>(value: &T, what: &str) -> Result<()> {
    let json = serde_json::to_string_pretty(value)
        .with_context(|| format!("Failed to serialize {} to JSON", what))?;
    println!("{}", json);
    Ok(())
}

fn run_issue_command(
    json_path: Option<&str>,
    json: bool,
    title: &str,
    analyze: impl FnOnce(&MemoryAnalyzer) -> Vec<Issue>,
) -> Result<()> {
    let (analyzer, _) = load_analyzer(json_path)?;
    let issues = analyze(&analyzer);

    if json {
        return print_json(&issues, "issues");
    }

    println!(
        "{} {} {}",
        MICROSCOPE,
        style("mempro-analyzer").bold(),
        style(&analyzer.snapshot().session_name).dim()
    );
    analyzer::print_issue_report(title, &issues)?;
    Ok(())
}

/// Ranked leak issues
pub fn cmd_leaks(json_path: Option<&str>, json: bool) -> Result<()> {
    run_issue_command(json_path, json, "Memory Leaks", MemoryAnalyzer::analyze_leaks)
}

/// Fragmentation issue, if any
pub fn cmd_fragmentation(json_path: Option<&str>, json: bool) -> Result<()> {
    run_issue_command(
        json_path,
        json,
        "Memory Fragmentation",
        MemoryAnalyzer::analyze_fragmentation,
    )
}

/// Large allocation issues
pub fn cmd_large_allocations(json_path: Option<&str>, json: bool) -> Result<()> {
    run_issue_command(
        json_path,
        json,
        "Large Allocations",
        MemoryAnalyzer::analyze_large_allocations,
    )
}

/// Print the summary report verbatim
pub fn cmd_summary(json_path: Option<&str>) -> Result<()> {
    let (analyzer, _) = load_analyzer(json_path)?;
    print!("{}", analyzer.summary());
    Ok(())
}

/// Print the top-leakers report verbatim
///
/// The count comes from `--count`, then `top-leakers` in the config file,
/// then the built-in default of 10.
pub fn cmd_top_leakers(json_path: Option<&str>, count: Option<&str>) -> Result<()> {
    let requested = count.map(parse_count).transpose()?;
    let (analyzer, config) = load_analyzer(json_path)?;

    let n = requested.unwrap_or_else(|| config.top_leakers_or_default());
    if n <= 0 {
        eprintln!(
            "{} {}",
            WARNING,
            style(format!("count {} requests no entries", n)).yellow()
        );
    }

    print!("{}", analyzer.top_leakers(n));
    Ok(())
}

/// Print every analysis as one JSON document
pub fn cmd_all(json_path: Option<&str>) -> Result<()> {
    let (analyzer, _) = load_analyzer(json_path)?;
    print_json(&analyzer.all_issues(), "combined report")
}

/// Print aggregate statistics as JSON
pub fn cmd_stats(json_path: Option<&str>) -> Result<()> {
    let (analyzer, _) = load_analyzer(json_path)?;
    print_json(&analyzer.stats(), "memory statistics")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_count_integers() {
        assert_eq!(parse_count("10").unwrap(), 10);
        assert_eq!(parse_count(" 3 ").unwrap(), 3);
        assert_eq!(parse_count("0").unwrap(), 0);
        assert_eq!(parse_count("-4").unwrap(), -4);
    }

    #[test]
    fn test_parse_count_truncates_decimals() {
        assert_eq!(parse_count("2.7").unwrap(), 2);
        assert_eq!(parse_count("-1.5").unwrap(), -1);
    }

    #[test]
    fn test_parse_count_rejects_garbage() {
        for value in ["ten", "", "NaN", "inf"] {
            let err = parse_count(value).unwrap_err();
            assert!(matches!(err, AnalyzerError::InvalidCount { .. }), "{}", value);
        }
    }
}
