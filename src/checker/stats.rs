use crate::Statistics;

/// Derive the report statistics. Word counting splits the trimmed input on
/// whitespace runs; a fully-whitespace or empty input still counts as one
/// word (splitting an empty string yields one empty segment).
pub fn compute(text: &str, total_errors: usize) -> Statistics {
    let trimmed = text.trim();
    let word_count = if trimmed.is_empty() {
        1
    } else {
        trimmed.split_whitespace().count()
    };

    Statistics {
        total_errors,
        word_count,
        character_count: text.len(),
    }
}
