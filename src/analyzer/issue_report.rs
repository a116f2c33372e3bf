//! Console formatting for issue lists

use crate::analyzer::issue::{Issue, Severity};
use crate::fmt::format_bytes;
use console::{style, StyledObject};
use std::fmt::{self, Write as _};

/// Format issues as a styled console report
pub fn render_issue_report(title: &str, issues: &[Issue]) -> Result<String, fmt::Error> {
    let mut output = String::new();

    writeln!(output)?;
    writeln!(output, "{}", style(title).bold().underlined())?;
    writeln!(output)?;

    if issues.is_empty() {
        writeln!(output, "  {}", style("No issues found.").green())?;
        writeln!(output)?;
        return Ok(output);
    }

    writeln!(
        output,
        "{}",
        style(format!("ISSUES ({} found):", issues.len())).bold()
    )?;
    writeln!(output, "{}", style("─".repeat(70)).dim())?;

    for (i, issue) in issues.iter().enumerate() {
        writeln!(output)?;
        writeln!(
            output,
            "  {:2}. {} {}",
            i + 1,
            severity_label(&issue.severity),
            style(issue.kind).bold()
        )?;
        if !issue.function_name.is_empty() {
            writeln!(
                output,
                "      {} {}",
                style("→").dim(),
                style(&issue.function_name).yellow()
            )?;
        }
        if !issue.file_name.is_empty() {
            writeln!(
                output,
                "      {} {}:{}",
                style("→").dim(),
                style(&issue.file_name).dim(),
                issue.line_number
            )?;
        }
        writeln!(
            output,
            "      {} {} across {} allocations",
            style("Size:").dim(),
            style(format_bytes(issue.size)).cyan(),
            issue.count
        )?;
        writeln!(output, "      {}", issue.description)?;
        writeln!(
            output,
            "      {} {}",
            style("Fix:").green().bold(),
            issue.suggestion
        )?;
    }

    writeln!(output)?;
    Ok(output)
}

/// Print issues as a styled console report
pub fn print_issue_report(title: &str, issues: &[Issue]) -> Result<(), fmt::Error> {
    print!("{}", render_issue_report(title, issues)?);
    Ok(())
}

fn severity_label(severity: &Severity) -> StyledObject<String> {
    let label = format!("[{}]", severity);
    match severity {
        Severity::Critical => style(label).red().bold(),
        Severity::High => style(label).red(),
        Severity::Medium => style(label).yellow(),
        Severity::Low => style(label).dim(),
        Severity::Other(_) => style(label),
    }
}
