//! Canonical TS document writer.
//!
//! Emits the layout Qt Linguist tools write: XML declaration, `<!DOCTYPE TS>`,
//! four-space indentation per nesting level, and the five predefined entities
//! escaped in both text and attribute values. Parsing the output of
//! [`write_catalog`] yields a catalog equal to the one written, so loaded
//! documents round-trip without losing entries, statuses, or plural forms.

use crate::types::{Catalog, Context, Location, Message, TranslationText};

/// Serialize a catalog to TS document text.
pub fn write_catalog(catalog: &Catalog) -> String {
    let mut out = String::new();
    out.push_str("<?xml version=\"1.0\" encoding=\"utf-8\"?>\n");
    out.push_str("<!DOCTYPE TS>\n");

    out.push_str("<TS");
    push_attr(&mut out, "version", catalog.version.as_deref());
    push_attr(&mut out, "language", catalog.language.as_deref());
    push_attr(&mut out, "sourcelanguage", catalog.source_language.as_deref());
    out.push_str(">\n");

    for context in &catalog.contexts {
        write_context(&mut out, context);
    }

    out.push_str("</TS>\n");
    out
}

fn write_context(out: &mut String, context: &Context) {
    out.push_str("<context>\n");
    out.push_str("    <name>");
    push_escaped(out, &context.name);
    out.push_str("</name>\n");
    for message in &context.messages {
        write_message(out, message);
    }
    out.push_str("</context>\n");
}

fn write_message(out: &mut String, message: &Message) {
    if message.numerus {
        out.push_str("    <message numerus=\"yes\">\n");
    } else {
        out.push_str("    <message>\n");
    }

    for location in &message.locations {
        write_location(out, location);
    }

    out.push_str("        <source>");
    push_escaped(out, &message.source);
    out.push_str("</source>\n");

    if let Some(old_source) = &message.old_source {
        out.push_str("        <oldsource>");
        push_escaped(out, old_source);
        out.push_str("</oldsource>\n");
    }
    if let Some(comment) = &message.comment {
        out.push_str("        <comment>");
        push_escaped(out, comment);
        out.push_str("</comment>\n");
    }
    if let Some(extra_comment) = &message.extra_comment {
        out.push_str("        <extracomment>");
        push_escaped(out, extra_comment);
        out.push_str("</extracomment>\n");
    }

    out.push_str("        <translation");
    if let Some(type_attr) = message.status.type_attr() {
        out.push_str(" type=\"");
        out.push_str(type_attr);
        out.push('"');
    }
    out.push('>');
    match &message.translation {
        TranslationText::Single(text) => {
            push_escaped(out, text);
        }
        TranslationText::Plural(forms) => {
            out.push('\n');
            for form in forms {
                out.push_str("            <numerusform>");
                push_escaped(out, form);
                out.push_str("</numerusform>\n");
            }
            out.push_str("        ");
        }
    }
    out.push_str("</translation>\n");

    out.push_str("    </message>\n");
}

fn write_location(out: &mut String, location: &Location) {
    out.push_str("        <location filename=\"");
    push_escaped(out, &location.filename);
    out.push('"');
    if let Some(line) = location.line {
        out.push_str(" line=\"");
        out.push_str(&line.to_string());
        out.push('"');
    }
    out.push_str("/>\n");
}

/// Append ` name="value"` when the value is present.
fn push_attr(out: &mut String, name: &str, value: Option<&str>) {
    if let Some(value) = value {
        out.push(' ');
        out.push_str(name);
        out.push_str("=\"");
        push_escaped(out, value);
        out.push('"');
    }
}

/// Append text with the five predefined XML entities escaped.
fn push_escaped(out: &mut String, text: &str) {
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
}
