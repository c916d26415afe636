use crate::{Report, Severity};
use colored::*;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy)]
pub enum OutputFormat {
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!("Unknown format: {}", s)),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

pub fn print_report(
    source: &str,
    text: &str,
    report: &Report,
    colored_output: bool,
    format: &OutputFormat,
) {
    match format {
        OutputFormat::Text => print_text_report(source, text, report, colored_output),
        OutputFormat::Json => print_json_report(report),
    }
}

fn print_text_report(source: &str, text: &str, report: &Report, colored_output: bool) {
    if report.errors.is_empty() {
        return;
    }

    if colored_output {
        println!("\n{}", source.bold().underline());
    } else {
        println!("\n{}", source);
    }

    for finding in &report.errors {
        let (line, column) = line_column(text, finding.offset);
        let position = format!("{}:{}", line, column);
        let severity = severity_label(finding.severity, colored_output);

        if colored_output {
            println!(
                "  {} {} {}",
                position.blue().bold(),
                severity,
                finding.message
            );
        } else {
            println!("  {} {} {}", position, severity, finding.message);
        }

        println!("    {}", context_snippet(text, finding.offset, finding.length));

        if !finding.replacements.is_empty() {
            let replacements = finding
                .replacements
                .iter()
                .map(|r| {
                    if colored_output {
                        r.green().to_string()
                    } else {
                        r.to_string()
                    }
                })
                .collect::<Vec<_>>()
                .join(", ");
            println!("    → {}", replacements);
        }
    }
}

fn print_json_report(report: &Report) {
    println!("{}", serde_json::to_string_pretty(report).unwrap());
}

fn severity_label(severity: Severity, colored_output: bool) -> String {
    if !colored_output {
        return severity.to_string();
    }
    match severity {
        Severity::Error => severity.to_string().red().bold().to_string(),
        Severity::Warning => severity.to_string().yellow().bold().to_string(),
        Severity::Info => severity.to_string().cyan().to_string(),
    }
}

/// 1-indexed line and column (in bytes) for a byte offset, display only.
fn line_column(text: &str, offset: usize) -> (usize, usize) {
    let offset = offset.min(text.len());
    let prefix = &text[..offset];
    let line = prefix.matches('\n').count() + 1;
    let line_start = prefix.rfind('\n').map(|p| p + 1).unwrap_or(0);
    (line, offset - line_start + 1)
}

fn context_snippet(text: &str, offset: usize, length: usize) -> String {
    let start = floor_boundary(text, offset.saturating_sub(20));
    let end = ceil_boundary(text, (offset + length + 20).min(text.len()));
    let snippet = text[start..end].replace('\n', " ");

    match (start > 0, end < text.len()) {
        (true, true) => format!("...{}...", snippet),
        (true, false) => format!("...{}", snippet),
        (false, true) => format!("{}...", snippet),
        (false, false) => snippet,
    }
}

fn floor_boundary(s: &str, mut i: usize) -> usize {
    while !s.is_char_boundary(i) {
        i -= 1;
    }
    i
}

fn ceil_boundary(s: &str, mut i: usize) -> usize {
    while !s.is_char_boundary(i) {
        i += 1;
    }
    i
}

pub fn print_check_summary(total_errors: usize, sources: usize, colored: bool) {
    println!();
    if total_errors == 0 {
        if colored {
            println!("{}", "✓ No issues found!".green().bold());
        } else {
            println!("✓ No issues found!");
        }
    } else {
        let issue_word = if total_errors == 1 { "issue" } else { "issues" };
        if colored {
            println!(
                "{} {} {} found in {} {}",
                "✗".red().bold(),
                total_errors.to_string().red().bold(),
                issue_word,
                sources,
                if sources == 1 { "input" } else { "inputs" }
            );
        } else {
            println!(
                "✗ {} {} found in {} {}",
                total_errors,
                issue_word,
                sources,
                if sources == 1 { "input" } else { "inputs" }
            );
        }
    }
}

pub fn print_fix_summary(total_fixed: usize, sources: usize, colored: bool) {
    println!();
    if total_fixed == 0 {
        if colored {
            println!("{}", "No corrections needed!".green().bold());
        } else {
            println!("No corrections needed!");
        }
    } else {
        let fix_word = if total_fixed == 1 {
            "correction"
        } else {
            "corrections"
        };
        if colored {
            println!(
                "{} {} {} applied to {} {}",
                "✓".green().bold(),
                total_fixed.to_string().green().bold(),
                fix_word,
                sources,
                if sources == 1 { "file" } else { "files" }
            );
        } else {
            println!(
                "✓ {} {} applied to {} {}",
                total_fixed,
                fix_word,
                sources,
                if sources == 1 { "file" } else { "files" }
            );
        }
    }
}
