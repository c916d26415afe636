use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};
use clap_complete::{generate, Shell};
use grammarchk::cli::output::{self, OutputFormat};
use grammarchk::{Config, GrammarChecker};
use std::io::{self, Read, Write};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "grammarchk")]
#[command(version, about = "A fast rule-based grammar and style checker", long_about = None)]
struct Cli {
    /// Files to check (reads stdin if none provided)
    #[arg(value_name = "FILES")]
    files: Vec<PathBuf>,

    /// Apply corrections (in place for files, to stdout for stdin)
    #[arg(short, long)]
    fix: bool,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,

    /// Exit with code 0 even if issues are found
    #[arg(long)]
    no_fail: bool,

    /// Output format (text, json)
    #[arg(short = 'o', long, default_value = "text")]
    format: OutputFormat,

    /// Run only the named rule (repeatable)
    #[arg(long)]
    rule: Vec<String>,

    /// Generate shell completion script
    #[arg(long, value_name = "SHELL")]
    completion: Option<Shell>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Handle shell completion generation
    if let Some(shell) = cli.completion {
        let mut cmd = Cli::command();
        generate(shell, &mut cmd, "grammarchk", &mut io::stdout());
        return Ok(());
    }

    // Load configuration
    let config = Config::load(cli.rule.clone())?;

    // Initialize checker
    let checker = GrammarChecker::new(&config)?;

    // No files: check stdin
    if cli.files.is_empty() {
        return check_stdin(&checker, &cli);
    }

    // Process files
    let mut total_errors = 0;
    let mut total_fixed = 0;

    for file_path in &cli.files {
        if !file_path.exists() {
            eprintln!("Error: File not found: {}", file_path.display());
            continue;
        }

        if cli.fix {
            total_fixed += checker.fix_file(file_path)?;
        } else {
            let (text, report) = checker.check_file(file_path)?;
            output::print_report(
                &file_path.display().to_string(),
                &text,
                &report,
                !cli.no_color,
                &cli.format,
            );
            total_errors += report.statistics.total_errors;
        }
    }

    // Print summary
    if cli.fix {
        output::print_fix_summary(total_fixed, cli.files.len(), !cli.no_color);
    } else {
        output::print_check_summary(total_errors, cli.files.len(), !cli.no_color);
    }

    // Exit with appropriate code
    if total_errors > 0 && !cli.no_fail && !cli.fix {
        std::process::exit(1);
    }

    Ok(())
}

fn check_stdin(checker: &GrammarChecker, cli: &Cli) -> Result<()> {
    let mut input = String::new();
    io::stdin()
        .read_to_string(&mut input)
        .context("Failed to read stdin")?;

    let report = checker.check_text(&input);

    if cli.fix {
        let corrected = report.corrected_text.as_deref().unwrap_or(&input);
        io::stdout()
            .write_all(corrected.as_bytes())
            .context("Failed to write stdout")?;
        return Ok(());
    }

    output::print_report("<stdin>", &input, &report, !cli.no_color, &cli.format);

    if report.statistics.total_errors > 0 && !cli.no_fail {
        std::process::exit(1);
    }

    Ok(())
}
