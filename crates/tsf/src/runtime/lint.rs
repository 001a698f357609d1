//! Static lint rules for TS catalogs.
//!
//! Analyzes a parsed catalog for problems translators and release tooling
//! should know about: duplicate entries, placeholder drift between source
//! and translation, and numerus messages with the wrong number of forms.
//! Lints never reject a catalog; they produce warnings for the CLI.

use std::collections::{BTreeSet, HashSet};

use thiserror::Error;

use crate::runtime::plural::category_count;
use crate::types::{Catalog, Message, TranslationStatus, TranslationText};

/// A warning produced by catalog linting.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LintWarning {
    /// Two messages in one context share source string and comment.
    #[error("context '{context}': duplicate message for source '{source_text}'")]
    DuplicateMessage {
        context: String,
        source_text: String,
    },

    /// A finished translation lacks a positional marker the source has.
    #[error(
        "context '{context}': translation of '{source_text}' is missing placeholder %{placeholder}"
    )]
    MissingPlaceholder {
        context: String,
        source_text: String,
        placeholder: u32,
    },

    /// A finished translation has a positional marker the source lacks.
    #[error(
        "context '{context}': translation of '{source_text}' has unexpected placeholder %{placeholder}"
    )]
    UnexpectedPlaceholder {
        context: String,
        source_text: String,
        placeholder: u32,
    },

    /// A finished numerus message stores a different number of forms than
    /// the language distinguishes.
    #[error(
        "context '{context}': numerus message '{source_text}' has {got} form(s), language expects {expected}"
    )]
    FormCountMismatch {
        context: String,
        source_text: String,
        expected: usize,
        got: usize,
    },

    /// A finished numerus message has an empty plural form.
    #[error("context '{context}': numerus message '{source_text}' has an empty form")]
    EmptyNumerusForm {
        context: String,
        source_text: String,
    },

    /// A plain message's source contains the `%n` count marker.
    #[error("context '{context}': message '{source_text}' uses %n but is not numerus")]
    CountMarkerInPlainMessage {
        context: String,
        source_text: String,
    },
}

/// Run all lint rules over a catalog, returning warnings in document order.
///
/// `language` is the primary language subtag used for the expected plural
/// form count; pass the catalog's own language when available.
pub fn lint_catalog(catalog: &Catalog, language: &str) -> Vec<LintWarning> {
    let mut warnings = Vec::new();
    for context in &catalog.contexts {
        let mut seen: HashSet<(&str, Option<&str>)> = HashSet::new();
        for message in &context.messages {
            let key = (message.source.as_str(), message.comment.as_deref());
            if !seen.insert(key) {
                warnings.push(LintWarning::DuplicateMessage {
                    context: context.name.clone(),
                    source_text: message.source.clone(),
                });
            }
            lint_placeholders(&context.name, message, &mut warnings);
            lint_numerus(&context.name, message, language, &mut warnings);
        }
    }
    warnings
}

/// Compare positional markers between source and finished translation.
fn lint_placeholders(context: &str, message: &Message, warnings: &mut Vec<LintWarning>) {
    if message.status != TranslationStatus::Finished {
        return;
    }
    let Some(translation) = message.translation.single() else {
        return;
    };
    if translation.is_empty() {
        return;
    }

    let source_markers = positional_markers(&message.source);
    let translation_markers = positional_markers(translation);

    for marker in source_markers.difference(&translation_markers) {
        warnings.push(LintWarning::MissingPlaceholder {
            context: context.to_string(),
            source_text: message.source.clone(),
            placeholder: *marker,
        });
    }
    for marker in translation_markers.difference(&source_markers) {
        warnings.push(LintWarning::UnexpectedPlaceholder {
            context: context.to_string(),
            source_text: message.source.clone(),
            placeholder: *marker,
        });
    }
}

/// Numerus-specific rules: form counts, empty forms, stray `%n`.
fn lint_numerus(
    context: &str,
    message: &Message,
    language: &str,
    warnings: &mut Vec<LintWarning>,
) {
    match &message.translation {
        TranslationText::Plural(forms) => {
            if message.status != TranslationStatus::Finished {
                return;
            }
            let expected = category_count(language);
            if forms.len() != expected {
                warnings.push(LintWarning::FormCountMismatch {
                    context: context.to_string(),
                    source_text: message.source.clone(),
                    expected,
                    got: forms.len(),
                });
            }
            if forms.iter().any(String::is_empty) {
                warnings.push(LintWarning::EmptyNumerusForm {
                    context: context.to_string(),
                    source_text: message.source.clone(),
                });
            }
        }
        TranslationText::Single(_) => {
            if has_count_marker(&message.source) {
                warnings.push(LintWarning::CountMarkerInPlainMessage {
                    context: context.to_string(),
                    source_text: message.source.clone(),
                });
            }
        }
    }
}

/// Collect the positional markers (`%1`..`%9`) used in a string.
fn positional_markers(text: &str) -> BTreeSet<u32> {
    let mut markers = BTreeSet::new();
    let mut chars = text.chars().peekable();
    while let Some(c) = chars.next() {
        if c == '%' {
            if let Some(d) = chars.peek().and_then(|next| next.to_digit(10)) {
                markers.insert(d);
                chars.next();
            }
        }
    }
    markers
}

/// Whether a string contains the `%n` count marker.
fn has_count_marker(text: &str) -> bool {
    let mut chars = text.chars().peekable();
    while let Some(c) = chars.next() {
        if c == '%' && chars.peek() == Some(&'n') {
            return true;
        }
    }
    false
}
