use serde::{Deserialize, Serialize};

/// Source location a message was extracted from.
///
/// Provenance only: locations identify the originating UI file and line so
/// translators can find the string in context. They play no part in lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    /// Path as recorded by the extraction tool (e.g., `../qml/About.qml`).
    pub filename: String,
    /// Line number within the file, when recorded.
    pub line: Option<u32>,
}

impl Location {
    pub fn new(filename: impl Into<String>, line: Option<u32>) -> Self {
        Self {
            filename: filename.into(),
            line,
        }
    }
}

impl std::fmt::Display for Location {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.line {
            Some(line) => write!(f, "{}:{}", self.filename, line),
            None => write!(f, "{}", self.filename),
        }
    }
}
