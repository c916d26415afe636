use grammarchk::{Config, GrammarChecker, Severity};

fn check(text: &str) -> grammarchk::Report {
    GrammarChecker::new(&Config::default())
        .unwrap()
        .check_text(text)
}

#[test]
fn clean_text_yields_empty_report() {
    let report = check("The quick brown fox jumps over the lazy dog.");
    assert!(report.errors.is_empty());
    assert!(report.corrected_text.is_none());
    assert_eq!(report.statistics.total_errors, 0);
    assert_eq!(report.statistics.word_count, 9);
}

#[test]
fn mixed_defects_are_all_reported_in_offset_order() {
    let text = "Teh cat saw there dog.  its been raining!! your going now";
    let report = check(text);

    let rules: Vec<&str> = report.errors.iter().map(|f| f.rule.as_str()).collect();
    assert!(rules.contains(&"common_typos"));
    assert!(rules.contains(&"there_their_theyre"));
    assert!(rules.contains(&"multiple_spaces"));
    assert!(rules.contains(&"its_its"));
    assert!(rules.contains(&"double_punctuation"));
    assert!(rules.contains(&"your_youre"));

    for pair in report.errors.windows(2) {
        assert!(pair[0].offset <= pair[1].offset);
    }
    for f in &report.errors {
        assert!(f.offset + f.length <= text.len());
    }
    assert_eq!(report.statistics.character_count, text.len());
}

#[test]
fn corrected_text_applies_primary_replacements() {
    let report = check("Your going to love this  file.");
    assert_eq!(
        report.corrected_text.as_deref(),
        Some("You're going to love this file.")
    );
}

#[test]
fn severity_levels_match_rule_policy() {
    let report = check("it's value dropped  fast!!");
    let by_rule = |name: &str| {
        report
            .errors
            .iter()
            .find(|f| f.rule == name)
            .map(|f| f.severity)
    };
    assert_eq!(by_rule("its_its"), Some(Severity::Warning));
    assert_eq!(by_rule("multiple_spaces"), Some(Severity::Info));
    assert_eq!(by_rule("double_punctuation"), Some(Severity::Warning));
}

#[test]
fn confusion_cue_outside_window_is_not_flagged() {
    // The cue word sits beyond the 50-byte lookahead, so the match stays
    // undisambiguated and produces no finding.
    let text = format!("your {} going", "very ".repeat(11));
    let report = check(&text);
    assert!(report.errors.iter().all(|f| f.rule != "your_youre"));
}

#[test]
fn report_serializes_with_camel_case_keys() {
    let report = check("Teh  cat");
    let value = serde_json::to_value(&report).unwrap();

    assert!(value["errors"].is_array());
    assert!(value["correctedText"].is_string());
    assert!(value["statistics"]["totalErrors"].is_number());
    assert!(value["statistics"]["wordCount"].is_number());
    assert!(value["statistics"]["characterCount"].is_number());

    let first = &value["errors"][0];
    for key in ["message", "offset", "length", "replacements", "rule", "severity"] {
        assert!(!first[key].is_null(), "missing key {}", key);
    }
    assert_eq!(first["severity"], "error");
}

#[test]
fn clean_report_omits_corrected_text_key() {
    let value = serde_json::to_value(check("All good here.")).unwrap();
    assert!(value.get("correctedText").is_none());
}

#[test]
fn rechecking_corrected_text_does_not_reintroduce_typos() {
    let first = check("I recieve seperate letters from teh goverment.");
    let corrected = first.corrected_text.unwrap();
    let second = check(&corrected);
    assert!(second.errors.iter().all(|f| f.rule != "common_typos"));
}
