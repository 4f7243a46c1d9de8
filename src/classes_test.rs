use super::*;

// =============================================================
// Parsing
// =============================================================

#[test]
fn parse_splits_on_any_whitespace() {
    let tokens = ClassTokens::parse("  a\tb\n c  ");
    assert_eq!(tokens.iter().collect::<Vec<_>>(), vec!["a", "b", "c"]);
}

#[test]
fn parse_drops_duplicates_keeping_first_position() {
    let tokens = ClassTokens::parse("a b a c b");
    assert_eq!(tokens.to_string(), "a b c");
}

#[test]
fn parse_empty_attribute() {
    let tokens = ClassTokens::parse("");
    assert!(tokens.is_empty());
    assert_eq!(tokens.to_string(), "");
}

// =============================================================
// Membership
// =============================================================

#[test]
fn contains_matches_whole_tokens_only() {
    let tokens = ClassTokens::parse("inactive panel");
    assert!(!tokens.contains("active"));
    assert!(tokens.contains("inactive"));
}

// =============================================================
// Mutation
// =============================================================

#[test]
fn add_ignores_existing_and_blank_tokens() {
    let mut tokens = ClassTokens::parse("a");
    tokens.add("a");
    tokens.add("  ");
    tokens.add("b");
    assert_eq!(tokens.to_string(), "a b");
    assert_eq!(tokens.len(), 2);
}

#[test]
fn remove_reports_presence() {
    let mut tokens = ClassTokens::parse("a b");
    assert!(tokens.remove("a"));
    assert!(!tokens.remove("a"));
    assert_eq!(tokens.to_string(), "b");
}

#[test]
fn remove_all_leaves_substring_lookalikes() {
    let mut tokens = ClassTokens::parse("inactive active textSavedState");
    tokens.remove_all(&["active", "textSavedState"]);
    assert_eq!(tokens.to_string(), "inactive");
}

// =============================================================
// Label normalization
// =============================================================

#[test]
fn normalize_label_trims_and_rejects_non_tokens() {
    assert_eq!(normalize_label("  saved "), Some("saved"));
    assert_eq!(normalize_label("   "), None);
    assert_eq!(normalize_label("two words"), None);
}

#[test]
fn padded_label_matches_its_token_everywhere() {
    let mut tokens = ClassTokens::parse("panel");
    assert!(tokens.add(" saved"));
    assert!(tokens.contains(" saved"));
    assert!(tokens.contains("saved"));
    tokens.remove_all(&[" saved "]);
    assert_eq!(tokens.to_string(), "panel");
}

#[test]
fn add_rejects_label_with_inner_whitespace() {
    let mut tokens = ClassTokens::default();
    assert!(!tokens.add("text saved"));
    assert!(tokens.is_empty());
}

#[test]
fn borrowed_tokens_iterate_in_order() {
    let tokens = ClassTokens::parse("a b c");
    let mut seen = Vec::new();
    for token in &tokens {
        seen.push(token);
    }
    assert_eq!(seen, ["a", "b", "c"]);
}
