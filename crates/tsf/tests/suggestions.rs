//! Tests for source-string suggestions.

use tsf::{compute_suggestions, parse_catalog};

#[test]
fn test_suggests_similar_source_strings() {
    let catalog = parse_catalog(
        r#"<TS>
<context>
    <name>Device</name>
    <message>
        <source>Refresh</source>
        <translation>Recargar</translation>
    </message>
    <message>
        <source>Enable</source>
        <translation>Habilitar</translation>
    </message>
</context>
</TS>"#,
    )
    .unwrap();
    let context = catalog.find_context("Device").unwrap();

    // A near-miss after an upstream string change.
    let suggestions = compute_suggestions(context, "Refres", 3);
    assert_eq!(suggestions, vec!["Refresh".to_string()]);
}

#[test]
fn test_no_suggestions_for_unrelated_input() {
    let catalog = parse_catalog(
        r#"<TS>
<context>
    <name>Device</name>
    <message>
        <source>Refresh</source>
        <translation>Recargar</translation>
    </message>
</context>
</TS>"#,
    )
    .unwrap();
    let context = catalog.find_context("Device").unwrap();
    assert!(compute_suggestions(context, "zzzzzz", 3).is_empty());
}

#[test]
fn test_limit_is_respected() {
    let catalog = parse_catalog(
        r#"<TS>
<context>
    <name>C</name>
    <message>
        <source>setting one</source>
        <translation>a</translation>
    </message>
    <message>
        <source>setting two</source>
        <translation>b</translation>
    </message>
    <message>
        <source>setting three</source>
        <translation>c</translation>
    </message>
</context>
</TS>"#,
    )
    .unwrap();
    let context = catalog.find_context("C").unwrap();
    let suggestions = compute_suggestions(context, "setting", 2);
    assert_eq!(suggestions.len(), 2);
}
