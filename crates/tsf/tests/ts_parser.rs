//! Integration tests for TS document parsing.

use tsf::parser::{ParseError, parse_catalog};
use tsf::types::{TranslationStatus, TranslationText};

#[test]
fn test_minimal_document() {
    let catalog = parse_catalog(
        r#"<?xml version="1.0" encoding="utf-8"?>
<!DOCTYPE TS>
<TS version="2.1" language="es_ES" sourcelanguage="en">
</TS>"#,
    )
    .unwrap();
    assert_eq!(catalog.version.as_deref(), Some("2.1"));
    assert_eq!(catalog.language.as_deref(), Some("es_ES"));
    assert_eq!(catalog.source_language.as_deref(), Some("en"));
    assert!(catalog.contexts.is_empty());
}

#[test]
fn test_document_without_prolog() {
    let catalog = parse_catalog("<TS></TS>").unwrap();
    assert!(catalog.version.is_none());
    assert!(catalog.language.is_none());
}

#[test]
fn test_bom_is_accepted() {
    let catalog = parse_catalog("\u{feff}<TS version=\"2.1\"></TS>").unwrap();
    assert_eq!(catalog.version.as_deref(), Some("2.1"));
}

#[test]
fn test_finished_message() {
    let catalog = parse_catalog(
        r#"<TS>
<context>
    <name>About</name>
    <message>
        <location filename="../qml/About.qml" line="55"/>
        <source>About</source>
        <translation>Acerca de</translation>
    </message>
</context>
</TS>"#,
    )
    .unwrap();
    assert_eq!(catalog.contexts.len(), 1);
    let context = &catalog.contexts[0];
    assert_eq!(context.name, "About");
    let message = &context.messages[0];
    assert_eq!(message.source, "About");
    assert_eq!(message.status, TranslationStatus::Finished);
    assert_eq!(message.translation.single(), Some("Acerca de"));
    assert_eq!(message.locations.len(), 1);
    assert_eq!(message.locations[0].filename, "../qml/About.qml");
    assert_eq!(message.locations[0].line, Some(55));
}

#[test]
fn test_translation_statuses() {
    let catalog = parse_catalog(
        r#"<TS>
<context>
    <name>C</name>
    <message>
        <source>a</source>
        <translation>x</translation>
    </message>
    <message>
        <source>b</source>
        <translation type="unfinished">y</translation>
    </message>
    <message>
        <source>c</source>
        <translation type="vanished">z</translation>
    </message>
    <message>
        <source>d</source>
        <translation type="obsolete">w</translation>
    </message>
</context>
</TS>"#,
    )
    .unwrap();
    let statuses: Vec<_> = catalog.contexts[0]
        .messages
        .iter()
        .map(|m| m.status)
        .collect();
    assert_eq!(
        statuses,
        vec![
            TranslationStatus::Finished,
            TranslationStatus::Unfinished,
            TranslationStatus::Vanished,
            TranslationStatus::Obsolete,
        ]
    );
}

#[test]
fn test_unknown_translation_type_is_error() {
    let result = parse_catalog(
        r#"<TS>
<context>
    <name>C</name>
    <message>
        <source>a</source>
        <translation type="draft">x</translation>
    </message>
</context>
</TS>"#,
    );
    assert!(result.is_err());
}

#[test]
fn test_entity_decoding() {
    let catalog = parse_catalog(
        r#"<TS>
<context>
    <name>C</name>
    <message>
        <source>Xiaomi &apos;Flower Care&apos; &amp; &quot;RoPot&quot;</source>
        <translation>&lt;b&gt;A&#x41;&#66;&lt;/b&gt;</translation>
    </message>
</context>
</TS>"#,
    )
    .unwrap();
    let message = &catalog.contexts[0].messages[0];
    assert_eq!(message.source, "Xiaomi 'Flower Care' & \"RoPot\"");
    assert_eq!(message.translation.single(), Some("<b>AAB</b>"));
}

#[test]
fn test_malformed_entity_is_error() {
    let result = parse_catalog(
        r#"<TS>
<context>
    <name>C</name>
    <message>
        <source>bad &unknown; entity</source>
        <translation></translation>
    </message>
</context>
</TS>"#,
    );
    assert!(matches!(result, Err(ParseError::Syntax { .. })));
}

#[test]
fn test_numerus_message() {
    let catalog = parse_catalog(
        r#"<TS language="es_ES">
<context>
    <name>DeviceList</name>
    <message numerus="yes">
        <location filename="../qml/DeviceList.qml" line="243"/>
        <source>%n device(s) selected</source>
        <translation>
            <numerusform>%n dispositivo seleccionado</numerusform>
            <numerusform>%n dispositivos seleccionados</numerusform>
        </translation>
    </message>
</context>
</TS>"#,
    )
    .unwrap();
    let message = &catalog.contexts[0].messages[0];
    assert!(message.numerus);
    assert_eq!(message.status, TranslationStatus::Finished);
    assert_eq!(
        message.translation.forms().unwrap(),
        &[
            "%n dispositivo seleccionado".to_string(),
            "%n dispositivos seleccionados".to_string(),
        ]
    );
}

#[test]
fn test_numerus_message_with_empty_forms() {
    let catalog = parse_catalog(
        r#"<TS>
<context>
    <name>Device</name>
    <message numerus="yes">
        <source>%n minute(s)</source>
        <translation type="unfinished">
            <numerusform></numerusform>
            <numerusform></numerusform>
        </translation>
    </message>
</context>
</TS>"#,
    )
    .unwrap();
    let message = &catalog.contexts[0].messages[0];
    assert!(message.numerus);
    assert_eq!(message.status, TranslationStatus::Unfinished);
    assert_eq!(
        message.translation.forms().unwrap(),
        &[String::new(), String::new()]
    );
    assert!(message.translation.is_empty());
}

#[test]
fn test_comments_and_old_source() {
    let catalog = parse_catalog(
        r#"<TS>
<context>
    <name>ItemAioLineCharts</name>
    <message>
        <source>at</source>
        <oldsource>on</oldsource>
        <comment>date separator</comment>
        <extracomment>&quot;at&quot; is used for DATE at HOUR</extracomment>
        <translation>a</translation>
    </message>
</context>
</TS>"#,
    )
    .unwrap();
    let message = &catalog.contexts[0].messages[0];
    assert_eq!(message.old_source.as_deref(), Some("on"));
    assert_eq!(message.comment.as_deref(), Some("date separator"));
    assert_eq!(
        message.extra_comment.as_deref(),
        Some("\"at\" is used for DATE at HOUR")
    );
}

#[test]
fn test_location_only_message() {
    // lupdate sometimes leaves a message holding nothing but a location.
    let catalog = parse_catalog(
        r#"<TS>
<context>
    <name>DeviceList</name>
    <message>
        <location filename="../qml/DeviceList.qml" line="316"/>
    </message>
</context>
</TS>"#,
    )
    .unwrap();
    let message = &catalog.contexts[0].messages[0];
    assert_eq!(message.source, "");
    assert_eq!(message.status, TranslationStatus::Unfinished);
    assert!(message.translation.is_empty());
    assert_eq!(message.locations[0].line, Some(316));
}

#[test]
fn test_message_without_location_line() {
    let catalog = parse_catalog(
        r#"<TS>
<context>
    <name>C</name>
    <message>
        <location filename="main.qml"/>
        <source>a</source>
        <translation>b</translation>
    </message>
</context>
</TS>"#,
    )
    .unwrap();
    assert_eq!(catalog.contexts[0].messages[0].locations[0].line, None);
}

#[test]
fn test_self_closing_translation() {
    let catalog = parse_catalog(
        r#"<TS>
<context>
    <name>C</name>
    <message>
        <source>a</source>
        <translation type="unfinished"/>
    </message>
</context>
</TS>"#,
    )
    .unwrap();
    let message = &catalog.contexts[0].messages[0];
    assert_eq!(message.status, TranslationStatus::Unfinished);
    assert_eq!(message.translation.single(), Some(""));
}

#[test]
fn test_xml_comments_are_skipped() {
    let catalog = parse_catalog(
        r#"<TS>
<!-- header comment -->
<context>
    <name>C</name>
    <!-- between messages -->
    <message>
        <source>a</source>
        <translation>b</translation>
    </message>
</context>
</TS>"#,
    )
    .unwrap();
    assert_eq!(catalog.contexts[0].messages.len(), 1);
}

#[test]
fn test_single_quoted_attributes() {
    let catalog = parse_catalog("<TS version='2.1'></TS>").unwrap();
    assert_eq!(catalog.version.as_deref(), Some("2.1"));
}

#[test]
fn test_unknown_element_is_error() {
    let result = parse_catalog(
        r#"<TS>
<context>
    <name>C</name>
    <message>
        <source>a</source>
        <bogus>x</bogus>
        <translation>b</translation>
    </message>
</context>
</TS>"#,
    );
    assert!(matches!(result, Err(ParseError::Syntax { .. })));
}

#[test]
fn test_truncated_document() {
    let result = parse_catalog("<TS>\n<context>\n    <name>C</name>\n");
    assert!(matches!(result, Err(ParseError::UnexpectedEof { .. })));
}

#[test]
fn test_trailing_garbage_is_error() {
    let result = parse_catalog("<TS></TS>\nleftover");
    match result {
        Err(ParseError::Syntax { line, .. }) => assert_eq!(line, 2),
        other => panic!("expected syntax error, got {:?}", other.err()),
    }
}

#[test]
fn test_error_position_points_at_offending_line() {
    let result = parse_catalog("<TS>\n<context>\n    <name>C</name>\n    <nope/>\n</context>\n</TS>");
    match result {
        Err(ParseError::Syntax { line, .. }) => assert!(line >= 4),
        other => panic!("expected syntax error, got {:?}", other.err()),
    }
}

#[test]
fn test_multiple_contexts_preserve_order() {
    let catalog = parse_catalog(
        r#"<TS>
<context>
    <name>About</name>
</context>
<context>
    <name>DesktopHeader</name>
</context>
<context>
    <name>Device</name>
</context>
</TS>"#,
    )
    .unwrap();
    let names: Vec<_> = catalog.contexts.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["About", "DesktopHeader", "Device"]);
}

#[test]
fn test_numerus_attr_other_value_is_plain() {
    let catalog = parse_catalog(
        r#"<TS>
<context>
    <name>C</name>
    <message numerus="no">
        <source>a</source>
        <translation>b</translation>
    </message>
</context>
</TS>"#,
    )
    .unwrap();
    let message = &catalog.contexts[0].messages[0];
    assert!(!message.numerus);
    assert!(matches!(message.translation, TranslationText::Single(_)));
}
