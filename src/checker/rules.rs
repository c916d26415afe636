use crate::Severity;
use lazy_static::lazy_static;
use regex::{Match, Regex};
use std::collections::HashMap;
use thiserror::Error;

/// How many bytes of text after a match the confusion rules may inspect.
/// The window is truncated at the end of the input.
const CONTEXT_WINDOW: usize = 50;

/// What a rule decided about one accepted match.
pub struct Outcome {
    pub message: String,
    pub replacements: Vec<String>,
    pub severity: Severity,
}

type CheckFn = fn(&Match<'_>, &str) -> Option<Outcome>;

/// One independent detector: a pattern plus a disambiguation function that
/// turns raw matches into findings (or rejects them as false positives).
#[derive(Debug)]
pub struct Rule {
    pub name: &'static str,
    pub pattern: Regex,
    pub check: CheckFn,
}

#[derive(Debug, Error)]
pub enum RuleSelectError {
    #[error("unknown rule name: {0}")]
    UnknownRule(String),
}

lazy_static! {
    static ref RULES: Vec<Rule> = vec![
        Rule {
            name: "your_youre",
            pattern: Regex::new(r"(?i)\b(your|you're)\b").unwrap(),
            check: check_your_youre,
        },
        Rule {
            name: "there_their_theyre",
            pattern: Regex::new(r"(?i)\b(there|their|they're)\b").unwrap(),
            check: check_there_their_theyre,
        },
        Rule {
            name: "its_its",
            pattern: Regex::new(r"(?i)\b(its|it's)\b").unwrap(),
            check: check_its,
        },
        Rule {
            name: "multiple_spaces",
            pattern: Regex::new(r"\s{2,}").unwrap(),
            check: check_multiple_spaces,
        },
        Rule {
            name: "sentence_capitalization",
            pattern: Regex::new(r"[.!?]\s+[a-z]").unwrap(),
            check: check_sentence_capitalization,
        },
        Rule {
            name: "double_punctuation",
            pattern: Regex::new(r"[.!?]{2,}").unwrap(),
            check: check_double_punctuation,
        },
        Rule {
            name: "common_typos",
            pattern: Regex::new(
                r"(?i)\b(teh|adn|nad|thier|recieve|seperate|occured|begining|goverment|enviroment)\b",
            )
            .unwrap(),
            check: check_common_typos,
        },
    ];

    // Lookahead cues: whitespace, then a whole word from the cue list.
    static ref CUE_VERB_AFTER_YOUR: Regex =
        Regex::new(r"(?i)^\s+(are|going|being|doing|looking|coming|saying)\b").unwrap();
    static ref CUE_NOUN_AFTER_YOURE: Regex =
        Regex::new(r"(?i)^\s+(cat|dog|house|book|idea|friend|family|work|job|car|phone)\b").unwrap();
    static ref CUE_NOUN_AFTER_THERE: Regex =
        Regex::new(r"(?i)^\s+(cat|dog|house|book|car|phone|family|friend)\b").unwrap();
    static ref CUE_VERB_AFTER_THEIR: Regex =
        Regex::new(r"(?i)^\s+(are|going|being|doing)\b").unwrap();
    static ref CUE_VERB_AFTER_ITS: Regex =
        Regex::new(r"(?i)^\s+(been|going|time|important|necessary|obvious)\b").unwrap();
    static ref CUE_NOUN_AFTER_ITS_CONTRACTION: Regex =
        Regex::new(r"(?i)^\s+(color|size|shape|beauty|importance|value)\b").unwrap();

    static ref TYPO_CORRECTIONS: HashMap<&'static str, &'static str> = [
        ("teh", "the"),
        ("adn", "and"),
        ("nad", "and"),
        ("thier", "their"),
        ("recieve", "receive"),
        ("seperate", "separate"),
        ("occured", "occurred"),
        ("begining", "beginning"),
        ("goverment", "government"),
        ("enviroment", "environment"),
    ]
    .into_iter()
    .collect();
}

/// The full catalogue, in evaluation order.
pub fn catalogue() -> &'static [Rule] {
    &RULES
}

/// Resolve a set of rule names to rules, keeping catalogue order. An empty
/// selection means every rule.
pub fn select(names: &[String]) -> Result<Vec<&'static Rule>, RuleSelectError> {
    if names.is_empty() {
        return Ok(RULES.iter().collect());
    }
    for name in names {
        if !RULES.iter().any(|r| r.name == name) {
            return Err(RuleSelectError::UnknownRule(name.clone()));
        }
    }
    Ok(RULES
        .iter()
        .filter(|r| names.iter().any(|n| n == r.name))
        .collect())
}

/// The text immediately after `from`, at most `CONTEXT_WINDOW` bytes,
/// truncated to a char boundary so non-ASCII input cannot split a codepoint.
fn lookahead(text: &str, from: usize) -> &str {
    let mut end = (from + CONTEXT_WINDOW).min(text.len());
    while !text.is_char_boundary(end) {
        end -= 1;
    }
    &text[from..end]
}

/// Carry the matched word's leading capital over to the replacement, so
/// "Your going" corrects to "You're going" rather than "you're going".
fn match_case(replacement: &str, matched: &str) -> String {
    match matched.chars().next() {
        Some(c) if c.is_uppercase() => {
            let mut chars = replacement.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        }
        _ => replacement.to_string(),
    }
}

fn check_your_youre(m: &Match<'_>, text: &str) -> Option<Outcome> {
    let word = m.as_str().to_lowercase();
    let after = lookahead(text, m.end());

    if word == "your" && CUE_VERB_AFTER_YOUR.is_match(after) {
        return Some(Outcome {
            message: "Did you mean 'you're' (you are)?".to_string(),
            replacements: vec![match_case("you're", m.as_str())],
            severity: Severity::Error,
        });
    }

    if word == "you're" && CUE_NOUN_AFTER_YOURE.is_match(after) {
        return Some(Outcome {
            message: "Did you mean 'your' (possessive)?".to_string(),
            replacements: vec![match_case("your", m.as_str())],
            severity: Severity::Error,
        });
    }

    None
}

// Note: "they're" deliberately has no outbound check here; only the other
// two words are disambiguated.
fn check_there_their_theyre(m: &Match<'_>, text: &str) -> Option<Outcome> {
    let word = m.as_str().to_lowercase();
    let after = lookahead(text, m.end());

    if word == "there" && CUE_NOUN_AFTER_THERE.is_match(after) {
        return Some(Outcome {
            message: "Did you mean 'their' (possessive)?".to_string(),
            replacements: vec![match_case("their", m.as_str())],
            severity: Severity::Error,
        });
    }

    if word == "their" && CUE_VERB_AFTER_THEIR.is_match(after) {
        return Some(Outcome {
            message: "Did you mean 'they're' (they are)?".to_string(),
            replacements: vec![match_case("they're", m.as_str())],
            severity: Severity::Error,
        });
    }

    None
}

fn check_its(m: &Match<'_>, text: &str) -> Option<Outcome> {
    let word = m.as_str().to_lowercase();
    let after = lookahead(text, m.end());

    if word == "its" && CUE_VERB_AFTER_ITS.is_match(after) {
        return Some(Outcome {
            message: "Did you mean 'it's' (it is/it has)?".to_string(),
            replacements: vec![match_case("it's", m.as_str())],
            severity: Severity::Error,
        });
    }

    if word == "it's" && CUE_NOUN_AFTER_ITS_CONTRACTION.is_match(after) {
        return Some(Outcome {
            message: "Did you mean 'its' (possessive)?".to_string(),
            replacements: vec![match_case("its", m.as_str())],
            severity: Severity::Warning,
        });
    }

    None
}

fn check_multiple_spaces(_m: &Match<'_>, _text: &str) -> Option<Outcome> {
    Some(Outcome {
        message: "Multiple consecutive spaces found".to_string(),
        replacements: vec![" ".to_string()],
        severity: Severity::Info,
    })
}

fn check_sentence_capitalization(m: &Match<'_>, _text: &str) -> Option<Outcome> {
    // The pattern guarantees the match ends in an ASCII lowercase letter.
    let (head, last) = m.as_str().split_at(m.as_str().len() - 1);
    Some(Outcome {
        message: "Sentence should start with a capital letter".to_string(),
        replacements: vec![format!("{}{}", head, last.to_uppercase())],
        severity: Severity::Error,
    })
}

fn check_double_punctuation(m: &Match<'_>, _text: &str) -> Option<Outcome> {
    Some(Outcome {
        message: "Multiple punctuation marks found".to_string(),
        replacements: vec![m.as_str()[..1].to_string()],
        severity: Severity::Warning,
    })
}

fn check_common_typos(m: &Match<'_>, _text: &str) -> Option<Outcome> {
    let canonical = TYPO_CORRECTIONS.get(m.as_str().to_lowercase().as_str())?;
    Some(Outcome {
        message: format!("Possible typo: \"{}\"", m.as_str()),
        replacements: vec![(*canonical).to_string()],
        severity: Severity::Error,
    })
}
