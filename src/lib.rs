pub mod checker;
pub mod cli;
pub mod config;

use serde::{Deserialize, Serialize};
use std::fmt;

pub use checker::GrammarChecker;
pub use config::Config;

/// How serious a finding is. Purely informational: it never affects whether
/// a replacement is applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
    Info,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
            Severity::Info => write!(f, "info"),
        }
    }
}

/// One detected defect. `offset` and `length` are byte positions into the
/// original input text; `offset + length` never exceeds the input length.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Finding {
    pub message: String,
    pub offset: usize,
    pub length: usize,
    /// Candidate fixes, best first. May be empty.
    pub replacements: Vec<String>,
    /// Name of the rule that produced this finding.
    pub rule: String,
    pub severity: Severity,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Statistics {
    pub total_errors: usize,
    pub word_count: usize,
    pub character_count: usize,
}

/// The full result of checking one piece of text. `corrected_text` is only
/// present when applying the findings' primary replacements actually changed
/// the input.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    pub errors: Vec<Finding>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub corrected_text: Option<String>,
    pub statistics: Statistics,
}
