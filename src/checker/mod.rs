pub mod rewrite;
pub mod rules;
pub mod stats;

use crate::{Config, Finding, Report};
use anyhow::{Context, Result};
use rules::Rule;
use std::fs;
use std::path::Path;

/// Runs the rule catalogue over text and assembles reports. Holds only
/// references into the static catalogue, so construction is cheap and
/// checking is a pure function of the input text.
pub struct GrammarChecker {
    rules: Vec<&'static Rule>,
}

impl GrammarChecker {
    pub fn new(config: &Config) -> Result<Self> {
        let rules = rules::select(&config.enabled_rules).context("Invalid rule selection")?;
        Ok(Self { rules })
    }

    /// Check raw text. Never fails: no matches just means an empty findings
    /// list and no corrected text.
    pub fn check_text(&self, text: &str) -> Report {
        let mut findings = Vec::new();

        for rule in &self.rules {
            // find_iter walks non-overlapping matches over the whole input,
            // with a fresh cursor per rule per invocation.
            for m in rule.pattern.find_iter(text) {
                if let Some(outcome) = (rule.check)(&m, text) {
                    findings.push(Finding {
                        message: outcome.message,
                        offset: m.start(),
                        length: m.as_str().len(),
                        replacements: outcome.replacements,
                        rule: rule.name.to_string(),
                        severity: outcome.severity,
                    });
                }
            }
        }

        let corrected_text = rewrite::apply(text, &findings);
        let statistics = stats::compute(text, findings.len());

        // Stable sort: ties keep rule-then-match discovery order.
        findings.sort_by_key(|f| f.offset);

        Report {
            errors: findings,
            corrected_text,
            statistics,
        }
    }

    /// Check a file, returning its content alongside the report so callers
    /// can render context snippets.
    pub fn check_file(&self, file_path: &Path) -> Result<(String, Report)> {
        let content = fs::read_to_string(file_path)
            .with_context(|| format!("Failed to read file: {}", file_path.display()))?;
        let report = self.check_text(&content);
        Ok((content, report))
    }

    /// Apply every primary replacement to a file in place. Returns the
    /// number of fixes applied (zero when the text was already clean).
    pub fn fix_file(&self, file_path: &Path) -> Result<usize> {
        let content = fs::read_to_string(file_path)
            .with_context(|| format!("Failed to read file: {}", file_path.display()))?;

        let report = self.check_text(&content);
        let Some(corrected) = report.corrected_text else {
            return Ok(0);
        };

        let fixed = report
            .errors
            .iter()
            .filter(|f| !f.replacements.is_empty())
            .count();

        fs::write(file_path, corrected)
            .with_context(|| format!("Failed to write file: {}", file_path.display()))?;

        Ok(fixed)
    }
}
