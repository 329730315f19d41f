use super::*;

#[test]
fn short_text_passes_through() {
    assert_eq!(preview_line("a short body", 80), "a short body");
}

#[test]
fn newlines_are_flattened() {
    assert_eq!(preview_line("line one\nline two", 80), "line one line two");
}

#[test]
fn long_text_is_ellipsized_within_the_limit() {
    let long = "x".repeat(120);
    let preview = preview_line(&long, 80);
    assert_eq!(preview.chars().count(), 80);
    assert!(preview.ends_with('…'));
}

#[test]
fn truncation_lands_on_char_boundaries() {
    let long = "é".repeat(100);
    let preview = preview_line(&long, 80);
    assert_eq!(preview.chars().count(), 80);
}
