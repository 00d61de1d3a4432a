//! Report formatting and printing utilities.
//!
//! This module displays diagnostics in cargo-style format. Separate from
//! the core pipeline so locgen can be used as a library without pulling in
//! any terminal output.

use std::io::{self, Write};

use colored::Colorize;
use unicode_width::UnicodeWidthStr;

use super::run::{RunResult, Summary};
use crate::issues::{Issue, Severity, error_count, warning_count};

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

/// Print a run's diagnostics and summary to stdout.
pub fn print(result: &RunResult, verbose: bool) {
    print_to(result, verbose, &mut io::stdout().lock());
}

/// Print to a custom writer. Useful for testing or redirecting output.
pub fn print_to<W: Write>(result: &RunResult, verbose: bool, writer: &mut W) {
    if verbose {
        for path in &result.candidates {
            let _ = writeln!(writer, "{} {}", "reading".dimmed(), path.display());
        }
    }

    let max_line_width = calculate_max_line_width(&result.issues);
    for issue in &result.issues {
        print_issue(issue, writer, max_line_width);
    }

    print_summary(result, writer);
}

fn print_issue<W: Write>(issue: &Issue, writer: &mut W, max_line_width: usize) {
    let severity_str = match issue.severity {
        Severity::Error => "error".bold().red(),
        Severity::Warning => "warning".bold().yellow(),
    };

    let _ = writeln!(
        writer,
        "{}: {}  {}",
        severity_str,
        issue.message,
        issue.rule.to_string().dimmed().cyan()
    );

    // Clickable location: --> path:line:col
    if let Some(file_path) = &issue.file_path {
        match (issue.line, issue.col) {
            (Some(line), Some(col)) => {
                let _ = writeln!(writer, "  {} {}:{}:{}", "-->".blue(), file_path, line, col);
            }
            _ => {
                let _ = writeln!(writer, "  {} {}", "-->".blue(), file_path);
            }
        }
    }

    // Source context with a caret pointing at the column.
    if let (Some(line), Some(col), Some(source_line)) =
        (issue.line, issue.col, issue.source_line.as_deref())
    {
        let caret_char = match issue.severity {
            Severity::Error => "^".red(),
            Severity::Warning => "^".yellow(),
        };

        let _ = writeln!(
            writer,
            "{:>width$} {}",
            "",
            "|".blue(),
            width = max_line_width
        );
        let _ = writeln!(
            writer,
            "{:>width$} {} {}",
            line.to_string().blue(),
            "|".blue(),
            source_line,
            width = max_line_width
        );

        // col is 1-based; pad the caret by the display width of the prefix.
        let prefix = if col > 1 {
            source_line.chars().take(col - 1).collect::<String>()
        } else {
            String::new()
        };
        let caret_padding = UnicodeWidthStr::width(prefix.as_str());
        let _ = writeln!(
            writer,
            "{:>width$} {} {:>padding$}{}",
            "",
            "|".blue(),
            "",
            caret_char,
            width = max_line_width,
            padding = caret_padding
        );
    }
}

fn print_summary<W: Write>(result: &RunResult, writer: &mut W) {
    let errors = error_count(&result.issues);
    let warnings = warning_count(&result.issues);
    let clean = errors == 0 && warnings == 0;

    if !clean {
        let _ = writeln!(
            writer,
            "{} {} {}, {} {}",
            FAILURE_MARK.red(),
            errors,
            if errors == 1 { "error" } else { "errors" },
            warnings,
            if warnings == 1 { "warning" } else { "warnings" },
        );
    }

    match &result.summary {
        Summary::Generated {
            output,
            resources,
            languages,
        } => {
            let message = format!(
                "Generated {} ({} {}, {} {})",
                output.display(),
                resources,
                if *resources == 1 {
                    "resource"
                } else {
                    "resources"
                },
                languages,
                if *languages == 1 {
                    "language"
                } else {
                    "languages"
                },
            );
            if clean {
                let _ = writeln!(writer, "{} {}", SUCCESS_MARK.green(), message.green());
            } else {
                let _ = writeln!(writer, "{}", message);
            }
        }
        Summary::Checked {
            resources,
            languages,
        } => {
            if clean {
                let _ = writeln!(
                    writer,
                    "{} {}",
                    SUCCESS_MARK.green(),
                    format!(
                        "Checked {} {} across {} {} - no issues found",
                        resources,
                        if *resources == 1 {
                            "resource"
                        } else {
                            "resources"
                        },
                        languages,
                        if *languages == 1 {
                            "language"
                        } else {
                            "languages"
                        },
                    )
                    .green()
                );
            }
        }
        Summary::NothingGenerated => {
            let _ = writeln!(writer, "{}", "No artifact was generated".red());
        }
        Summary::InitCreated => {
            let _ = writeln!(
                writer,
                "{} {}",
                SUCCESS_MARK.green(),
                "Created .locgenrc.json".green()
            );
        }
    }
}

/// Width of the widest line number among issues that render source context.
fn calculate_max_line_width(issues: &[Issue]) -> usize {
    issues
        .iter()
        .filter(|issue| issue.source_line.is_some())
        .filter_map(|issue| issue.line)
        .map(|line| line.to_string().len())
        .max()
        .unwrap_or(1)
}
