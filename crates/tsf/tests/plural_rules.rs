//! Tests for CLDR plural category resolution and form selection.

use tsf::runtime::{category_count, form_index, plural_category};

#[test]
fn test_english_categories() {
    assert_eq!(plural_category("en", 1), "one");
    assert_eq!(plural_category("en", 0), "other");
    assert_eq!(plural_category("en", 2), "other");
    assert_eq!(category_count("en"), 2);
}

#[test]
fn test_spanish_categories() {
    assert_eq!(plural_category("es", 1), "one");
    assert_eq!(plural_category("es", 2), "other");
    assert_eq!(plural_category("es", 0), "other");
    // Qt writes two numerusforms for Spanish catalogs.
    assert_eq!(category_count("es"), 2);
}

#[test]
fn test_russian_categories() {
    assert_eq!(plural_category("ru", 1), "one");
    assert_eq!(plural_category("ru", 2), "few");
    assert_eq!(plural_category("ru", 5), "many");
    assert_eq!(plural_category("ru", 21), "one");
    assert_eq!(category_count("ru"), 3);
}

#[test]
fn test_japanese_has_single_form() {
    assert_eq!(plural_category("ja", 1), "other");
    assert_eq!(category_count("ja"), 1);
    assert_eq!(form_index("ja", 1, 1), Some(0));
    assert_eq!(form_index("ja", 99, 1), Some(0));
}

#[test]
fn test_unknown_language_falls_back_to_english() {
    assert_eq!(plural_category("xx", 1), "one");
    assert_eq!(category_count("xx"), 2);
}

#[test]
fn test_form_index_spanish_two_forms() {
    assert_eq!(form_index("es", 1, 2), Some(0));
    assert_eq!(form_index("es", 0, 2), Some(1));
    assert_eq!(form_index("es", 3, 2), Some(1));
    assert_eq!(form_index("es", 100, 2), Some(1));
}

#[test]
fn test_form_index_russian_three_forms() {
    assert_eq!(form_index("ru", 1, 3), Some(0));
    assert_eq!(form_index("ru", 3, 3), Some(1));
    assert_eq!(form_index("ru", 5, 3), Some(2));
    assert_eq!(form_index("ru", 21, 3), Some(0));
}

#[test]
fn test_form_index_clamps_to_available_forms() {
    // A Russian catalog carrying only two forms still resolves.
    assert_eq!(form_index("ru", 1, 2), Some(0));
    assert_eq!(form_index("ru", 5, 2), Some(1));
}

#[test]
fn test_form_index_without_forms() {
    assert_eq!(form_index("es", 1, 0), None);
}

#[test]
fn test_language_code_normalization_uses_primary_subtag_upstream() {
    // Callers pass the primary subtag; the resolver itself treats full
    // locale identifiers as unknown and falls back to English rules.
    assert_eq!(tsf::types::primary_subtag("es_ES"), "es");
    assert_eq!(tsf::types::primary_subtag("pt-BR"), "pt");
    assert_eq!(tsf::types::primary_subtag(""), "");
}
