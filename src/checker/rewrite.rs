use crate::Finding;

/// Build the corrected text by splicing each finding's primary replacement
/// over its span, highest offset first so pending offsets stay valid.
/// Returns `None` when nothing changed.
///
/// Overlapping findings are applied as-is: the lower-offset splice sees the
/// text already mutated by the higher-offset one, with its end index clamped
/// to whatever length the buffer has at that point.
pub fn apply(text: &str, findings: &[Finding]) -> Option<String> {
    let mut fixable: Vec<&Finding> = findings
        .iter()
        .filter(|f| !f.replacements.is_empty())
        .collect();
    if fixable.is_empty() {
        return None;
    }

    // Stable sort: equal offsets keep discovery order, same as the ascending
    // presentation order reversed.
    fixable.sort_by(|a, b| b.offset.cmp(&a.offset));

    let mut corrected = text.to_string();
    for finding in fixable {
        let start = clamp_boundary(&corrected, finding.offset);
        let end = clamp_boundary(&corrected, finding.offset + finding.length);
        corrected.replace_range(start..end, &finding.replacements[0]);
    }

    if corrected != text {
        Some(corrected)
    } else {
        None
    }
}

fn clamp_boundary(s: &str, index: usize) -> usize {
    let mut i = index.min(s.len());
    while !s.is_char_boundary(i) {
        i -= 1;
    }
    i
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Severity;

    fn finding(offset: usize, length: usize, replacements: &[&str]) -> Finding {
        Finding {
            message: String::new(),
            offset,
            length,
            replacements: replacements.iter().map(|s| s.to_string()).collect(),
            rule: "test".to_string(),
            severity: Severity::Error,
        }
    }

    #[test]
    fn no_fixable_findings_yields_none() {
        assert_eq!(apply("hello", &[]), None);
        assert_eq!(apply("hello", &[finding(0, 5, &[])]), None);
    }

    #[test]
    fn identity_replacement_yields_none() {
        assert_eq!(apply("hello", &[finding(0, 5, &["hello"])]), None);
    }

    #[test]
    fn earlier_offsets_survive_later_splices() {
        // Two fixes where the first grows the text: applying right-to-left
        // keeps the left offset valid.
        let text = "teh cat adn dog";
        let findings = vec![finding(0, 3, &["the"]), finding(8, 3, &["and"])];
        assert_eq!(apply(text, &findings).as_deref(), Some("the cat and dog"));
    }

    #[test]
    fn only_primary_replacement_is_used() {
        let findings = vec![finding(0, 3, &["the", "tech"])];
        assert_eq!(apply("teh", &findings).as_deref(), Some("the"));
    }

    #[test]
    fn overlapping_spans_clamp_instead_of_panicking() {
        // ".  a": capitalization covers 0..4, the space run covers 1..3. The
        // space fix shrinks the buffer to 3 bytes before the capitalization
        // fix's end of 4 is applied.
        let text = ".  a";
        let findings = vec![finding(0, 4, &[".  A"]), finding(1, 2, &[" "])];
        assert_eq!(apply(text, &findings).as_deref(), Some(".  A"));
    }

    #[test]
    fn multibyte_text_around_a_fix_is_preserved() {
        let text = "café teh café";
        let findings = vec![finding(6, 3, &["the"])];
        assert_eq!(apply(text, &findings).as_deref(), Some("café the café"));
    }
}
