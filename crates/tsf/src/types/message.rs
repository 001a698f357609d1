use serde::{Deserialize, Serialize};

use super::{Location, TranslationStatus};

/// The translated text of a message.
///
/// Plain messages carry a single string. Messages declared with
/// `numerus="yes"` carry an ordered sequence of `<numerusform>` strings, one
/// per grammatical plural category of the target language. The order is
/// significant and preserved exactly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TranslationText {
    Single(String),
    Plural(Vec<String>),
}

impl TranslationText {
    /// The single translation text, or `None` for numerus messages.
    pub fn single(&self) -> Option<&str> {
        match self {
            Self::Single(text) => Some(text),
            Self::Plural(_) => None,
        }
    }

    /// The ordered plural forms, or `None` for plain messages.
    pub fn forms(&self) -> Option<&[String]> {
        match self {
            Self::Single(_) => None,
            Self::Plural(forms) => Some(forms),
        }
    }

    /// True when no usable text is present (empty string or all-empty forms).
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Single(text) => text.is_empty(),
            Self::Plural(forms) => forms.iter().all(String::is_empty),
        }
    }
}

impl Default for TranslationText {
    fn default() -> Self {
        Self::Single(String::new())
    }
}

/// One translation entry.
///
/// Within a context, `(source, comment)` plus the numerus flag identifies a
/// message. The source string is the lookup key and may embed positional
/// placeholders (`%1`..`%9`) or the count marker `%n`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    /// Canonical untranslated text, used as the lookup key.
    pub source: String,
    /// Whether the message is pluralized (`numerus="yes"`).
    pub numerus: bool,
    /// Where the extraction tool found the string.
    pub locations: Vec<Location>,
    /// Disambiguation comment. Part of the lookup key when present.
    pub comment: Option<String>,
    /// Free-form guidance for translators (`<extracomment>`).
    pub extra_comment: Option<String>,
    /// Previous source text after a string changed (`<oldsource>`).
    pub old_source: Option<String>,
    /// Translated text, possibly empty for unfinished entries.
    pub translation: TranslationText,
    /// Lifecycle state.
    pub status: TranslationStatus,
}

impl Message {
    /// A finished plain message.
    pub fn finished(source: impl Into<String>, translation: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            translation: TranslationText::Single(translation.into()),
            ..Self::default()
        }
    }

    /// Whether lookup may surface this entry to end users.
    ///
    /// Requires finished status and non-empty text: Qt treats a finished but
    /// empty translation the same as a missing one.
    pub fn is_displayable(&self) -> bool {
        self.status == TranslationStatus::Finished && !self.translation.is_empty()
    }
}
