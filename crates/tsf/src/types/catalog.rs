use serde::{Deserialize, Serialize};

use super::Message;

/// A named group of messages belonging to one UI surface.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Context {
    pub name: String,
    /// Messages in document order.
    pub messages: Vec<Message>,
}

impl Context {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            messages: Vec::new(),
        }
    }

    /// Find a message by source string and optional disambiguation comment.
    pub fn find_message(&self, source: &str, comment: Option<&str>) -> Option<&Message> {
        self.messages
            .iter()
            .find(|m| m.source == source && m.comment.as_deref() == comment)
    }
}

/// A complete TS translation catalog.
///
/// Contexts and their messages are kept in document order so that a loaded
/// catalog can be re-serialized without losing or reordering entries.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    /// TS format version from the root element (e.g., `2.1`).
    pub version: Option<String>,
    /// Target language code (e.g., `es_ES`).
    pub language: Option<String>,
    /// Source language code (e.g., `en`).
    pub source_language: Option<String>,
    pub contexts: Vec<Context>,
}

impl Catalog {
    /// Find a context by name.
    pub fn find_context(&self, name: &str) -> Option<&Context> {
        self.contexts.iter().find(|c| c.name == name)
    }

    /// Total number of messages across all contexts.
    pub fn message_count(&self) -> usize {
        self.contexts.iter().map(|c| c.messages.len()).sum()
    }

    /// Primary language subtag of the target language (e.g., `es` for
    /// `es_ES`), lowercased. Empty when no language is recorded.
    pub fn primary_language(&self) -> String {
        primary_subtag(self.language.as_deref().unwrap_or(""))
    }
}

/// Extract the lowercased primary subtag from a locale identifier.
///
/// Handles both underscore (`es_ES`) and hyphen (`es-ES`) separators.
pub fn primary_subtag(language: &str) -> String {
    language
        .split(['_', '-'])
        .next()
        .unwrap_or("")
        .to_ascii_lowercase()
}
