//! TS document parser.
//!
//! Parses the XML dialect Qt Linguist tools emit for `.ts` translation
//! source files. The grammar is closed: only the elements those tools write
//! are accepted, which keeps error reporting precise and the writer able to
//! reproduce every parsed document.

use winnow::combinator::{alt, delimited, opt, preceded, repeat};
use winnow::error::{ContextError, ErrMode};
use winnow::prelude::*;
use winnow::token::{literal, take_until, take_while};

use super::error::ParseError;
use crate::types::{Catalog, Context, Location, Message, TranslationStatus, TranslationText};

/// Parse a complete TS document into a catalog.
pub fn parse_catalog(input: &str) -> Result<Catalog, ParseError> {
    let mut remaining = input;
    match ts_document(&mut remaining) {
        Ok(catalog) => {
            let _ = skip_ws_and_comments(&mut remaining);
            if remaining.is_empty() {
                Ok(catalog)
            } else {
                let (line, column) = calculate_position(input, remaining);
                Err(ParseError::Syntax {
                    line,
                    column,
                    message: format!(
                        "unexpected character: '{}'",
                        remaining.chars().next().unwrap_or('?')
                    ),
                })
            }
        }
        Err(e) => {
            let (line, column) = calculate_position(input, remaining);
            if remaining.is_empty() {
                Err(ParseError::UnexpectedEof { line, column })
            } else {
                Err(ParseError::Syntax {
                    line,
                    column,
                    message: format!("parse error: {}", e),
                })
            }
        }
    }
}

/// Calculate line and column from original input and remaining input.
fn calculate_position(original: &str, remaining: &str) -> (usize, usize) {
    let consumed = original.len() - remaining.len();
    let consumed_str = &original[..consumed];
    let line = consumed_str.chars().filter(|&c| c == '\n').count() + 1;
    let last_newline = consumed_str.rfind('\n');
    let column = match last_newline {
        Some(pos) => consumed - pos,
        None => consumed + 1,
    };
    (line, column)
}

/// A semantic error at the current position that must not be backtracked.
fn cut<T>() -> ModalResult<T> {
    Err(ErrMode::Cut(ContextError::new()))
}

/// Parse the document: prolog, `<TS>` root, contexts.
fn ts_document(input: &mut &str) -> ModalResult<Catalog> {
    let _ = opt('\u{feff}').parse_next(input)?;
    skip_ws_and_comments(input)?;
    let _ = opt(xml_decl).parse_next(input)?;
    skip_ws_and_comments(input)?;
    let _ = opt(doctype).parse_next(input)?;
    skip_ws_and_comments(input)?;

    let root = start_tag(input)?;
    if root.name != "TS" {
        return cut();
    }
    let mut catalog = Catalog {
        version: root.attr("version").map(|s| s.to_string()),
        language: root.attr("language").map(|s| s.to_string()),
        source_language: root.attr("sourcelanguage").map(|s| s.to_string()),
        contexts: Vec::new(),
    };
    if root.self_closing {
        return Ok(catalog);
    }

    loop {
        skip_ws_and_comments(input)?;
        if input.starts_with("</") {
            break;
        }
        catalog.contexts.push(context_element(input)?);
    }
    end_tag(input, "TS")?;
    Ok(catalog)
}

/// Parse a `<context>` element: a name followed by messages.
fn context_element(input: &mut &str) -> ModalResult<Context> {
    let tag = start_tag(input)?;
    if tag.name != "context" || tag.self_closing {
        return cut();
    }

    let mut context = Context::new(String::new());
    loop {
        skip_ws_and_comments(input)?;
        if input.starts_with("</") {
            break;
        }
        let child = start_tag(input)?;
        match child.name.as_str() {
            "name" => context.name = child_text(input, &child)?,
            "message" => context.messages.push(message_element(input, &child)?),
            _ => return cut(),
        }
    }
    end_tag(input, "context")?;
    Ok(context)
}

/// Parse the children of a `<message>` element.
///
/// Children may appear in any order. A message with no `<translation>`
/// child (the extraction tools emit these for strings that vanished before
/// translation) is recorded as unfinished with empty text.
fn message_element(input: &mut &str, tag: &StartTag) -> ModalResult<Message> {
    let numerus = tag.attr("numerus") == Some("yes");
    let mut message = Message {
        numerus,
        status: TranslationStatus::Unfinished,
        translation: if numerus {
            TranslationText::Plural(Vec::new())
        } else {
            TranslationText::Single(String::new())
        },
        ..Message::default()
    };
    if tag.self_closing {
        return Ok(message);
    }

    loop {
        skip_ws_and_comments(input)?;
        if input.starts_with("</") {
            break;
        }
        let child = start_tag(input)?;
        match child.name.as_str() {
            "location" => {
                let line = match child.attr("line") {
                    Some(raw) => match raw.parse::<u32>() {
                        Ok(n) => Some(n),
                        Err(_) => return cut(),
                    },
                    None => None,
                };
                let filename = child.attr("filename").unwrap_or("").to_string();
                message.locations.push(Location::new(filename, line));
                if !child.self_closing {
                    end_tag(input, "location")?;
                }
            }
            "source" => message.source = child_text(input, &child)?,
            "oldsource" => message.old_source = Some(child_text(input, &child)?),
            "comment" => message.comment = Some(child_text(input, &child)?),
            "extracomment" => message.extra_comment = Some(child_text(input, &child)?),
            "translation" => {
                message.status = match child.attr("type") {
                    None => TranslationStatus::Finished,
                    Some(value) => match TranslationStatus::from_type_attr(value) {
                        Some(status) => status,
                        None => return cut(),
                    },
                };
                message.translation = if child.self_closing {
                    if numerus {
                        TranslationText::Plural(Vec::new())
                    } else {
                        TranslationText::Single(String::new())
                    }
                } else {
                    translation_body(input, numerus)?
                };
            }
            _ => return cut(),
        }
    }
    end_tag(input, "message")?;
    Ok(message)
}

/// Parse translation content up to and including `</translation>`.
fn translation_body(input: &mut &str, numerus: bool) -> ModalResult<TranslationText> {
    if numerus {
        let mut forms = Vec::new();
        loop {
            skip_ws_and_comments(input)?;
            if input.starts_with("</") {
                break;
            }
            let child = start_tag(input)?;
            if child.name != "numerusform" {
                return cut();
            }
            forms.push(child_text(input, &child)?);
        }
        end_tag(input, "translation")?;
        Ok(TranslationText::Plural(forms))
    } else {
        let text = element_text(input, "translation")?;
        Ok(TranslationText::Single(text))
    }
}

/// A parsed start tag with its attributes.
struct StartTag {
    name: String,
    attrs: Vec<(String, String)>,
    self_closing: bool,
}

impl StartTag {
    fn attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }
}

/// Parse a start tag: `<name attr="value" ...>` or `<name ... />`.
fn start_tag(input: &mut &str) -> ModalResult<StartTag> {
    '<'.parse_next(input)?;
    let name = xml_name(input)?;
    let attrs: Vec<(String, String)> = repeat(0.., preceded(ws1, attribute)).parse_next(input)?;
    ws(input)?;
    let self_closing = opt('/').parse_next(input)?.is_some();
    '>'.parse_next(input)?;
    Ok(StartTag {
        name,
        attrs,
        self_closing,
    })
}

/// Parse an end tag for a known element name: `</name>`.
fn end_tag(input: &mut &str, name: &str) -> ModalResult<()> {
    "</".parse_next(input)?;
    literal(name).parse_next(input)?;
    ws(input)?;
    '>'.parse_next(input)?;
    Ok(())
}

/// Parse an attribute: `name="value"` with either quote style.
fn attribute(input: &mut &str) -> ModalResult<(String, String)> {
    let name = xml_name(input)?;
    ws(input)?;
    '='.parse_next(input)?;
    ws(input)?;
    let raw: &str = alt((
        delimited('"', take_while(0.., |c| c != '"'), '"'),
        delimited('\'', take_while(0.., |c| c != '\''), '\''),
    ))
    .parse_next(input)?;
    let Some(value) = decode_entities(raw) else {
        return cut();
    };
    Ok((name, value))
}

/// Text content of an element the caller already opened, consuming the
/// matching end tag. Returns the empty string for self-closing tags.
fn child_text(input: &mut &str, tag: &StartTag) -> ModalResult<String> {
    if tag.self_closing {
        Ok(String::new())
    } else {
        element_text(input, &tag.name)
    }
}

/// Parse element character data followed by `</name>`.
fn element_text(input: &mut &str, name: &str) -> ModalResult<String> {
    let raw: &str = take_while(0.., |c| c != '<').parse_next(input)?;
    end_tag(input, name)?;
    match decode_entities(raw) {
        Some(text) => Ok(text),
        None => cut(),
    }
}

/// Parse an XML element or attribute name.
fn xml_name(input: &mut &str) -> ModalResult<String> {
    take_while(1.., |c: char| {
        c.is_ascii_alphanumeric() || matches!(c, ':' | '_' | '-' | '.')
    })
    .map(|s: &str| s.to_string())
    .parse_next(input)
}

/// Skip whitespace and XML comments.
fn skip_ws_and_comments(input: &mut &str) -> ModalResult<()> {
    let _: Vec<()> = repeat(0.., alt((ws1.void(), xml_comment))).parse_next(input)?;
    Ok(())
}

/// Parse whitespace (zero or more).
fn ws(input: &mut &str) -> ModalResult<()> {
    take_while(0.., |c: char| c.is_ascii_whitespace())
        .void()
        .parse_next(input)
}

/// Parse whitespace (one or more).
fn ws1<'i>(input: &mut &'i str) -> ModalResult<&'i str> {
    take_while(1.., |c: char| c.is_ascii_whitespace()).parse_next(input)
}

/// Parse an XML comment: `<!-- ... -->`.
fn xml_comment(input: &mut &str) -> ModalResult<()> {
    ("<!--", take_until(0.., "-->"), "-->")
        .void()
        .parse_next(input)
}

/// Parse the XML declaration: `<?xml ... ?>`.
fn xml_decl(input: &mut &str) -> ModalResult<()> {
    ("<?xml", take_until(0.., "?>"), "?>")
        .void()
        .parse_next(input)
}

/// Parse the document type declaration: `<!DOCTYPE TS>`.
fn doctype(input: &mut &str) -> ModalResult<()> {
    ("<!DOCTYPE", take_while(1.., |c| c != '>'), '>')
        .void()
        .parse_next(input)
}

/// Decode the XML entities Qt Linguist writes, plus numeric references.
///
/// Returns `None` for malformed or unknown entities.
fn decode_entities(raw: &str) -> Option<String> {
    if !raw.contains('&') {
        return Some(raw.to_string());
    }
    let mut out = String::with_capacity(raw.len());
    let mut rest = raw;
    while let Some(pos) = rest.find('&') {
        out.push_str(&rest[..pos]);
        rest = &rest[pos..];
        let end = rest.find(';')?;
        let entity = &rest[1..end];
        match entity {
            "amp" => out.push('&'),
            "lt" => out.push('<'),
            "gt" => out.push('>'),
            "quot" => out.push('"'),
            "apos" => out.push('\''),
            _ => {
                let code = if let Some(hex) = entity
                    .strip_prefix("#x")
                    .or_else(|| entity.strip_prefix("#X"))
                {
                    u32::from_str_radix(hex, 16).ok()?
                } else if let Some(dec) = entity.strip_prefix('#') {
                    dec.parse::<u32>().ok()?
                } else {
                    return None;
                };
                out.push(char::from_u32(code)?);
            }
        }
        rest = &rest[end + 1..];
    }
    out.push_str(rest);
    Some(out)
}
