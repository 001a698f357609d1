use serde::{Deserialize, Serialize};

/// Lifecycle state of a translation.
///
/// `Finished` corresponds to a `<translation>` element with no `type`
/// attribute. The other three states mirror the attribute values Qt Linguist
/// writes. Vanished and obsolete entries are historical: they are preserved
/// on round-trip but never surfaced by runtime lookup.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TranslationStatus {
    #[default]
    Finished,
    Unfinished,
    Vanished,
    Obsolete,
}

impl TranslationStatus {
    /// Parse the `type` attribute of a `<translation>` element.
    ///
    /// Returns `None` for unrecognized values.
    pub fn from_type_attr(value: &str) -> Option<Self> {
        match value {
            "unfinished" => Some(Self::Unfinished),
            "vanished" => Some(Self::Vanished),
            "obsolete" => Some(Self::Obsolete),
            _ => None,
        }
    }

    /// The `type` attribute value to write, or `None` for finished entries.
    pub fn type_attr(self) -> Option<&'static str> {
        match self {
            Self::Finished => None,
            Self::Unfinished => Some("unfinished"),
            Self::Vanished => Some("vanished"),
            Self::Obsolete => Some("obsolete"),
        }
    }

    /// Whether the entry is still referenced by the UI.
    ///
    /// Vanished and obsolete entries are kept for translators but excluded
    /// from coverage statistics and runtime lookup.
    pub fn is_active(self) -> bool {
        matches!(self, Self::Finished | Self::Unfinished)
    }
}

impl std::fmt::Display for TranslationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Finished => "finished",
            Self::Unfinished => "unfinished",
            Self::Vanished => "vanished",
            Self::Obsolete => "obsolete",
        };
        write!(f, "{}", s)
    }
}
