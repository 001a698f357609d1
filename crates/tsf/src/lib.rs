pub mod parser;
pub mod runtime;
pub mod types;
pub mod writer;

pub use parser::{ParseError, parse_catalog};
pub use runtime::{CatalogStats, LintWarning, LoadError, Translator, compute_suggestions};
pub use types::{
    Catalog, Context, Location, Message, TranslationStatus, TranslationText,
};
pub use writer::write_catalog;
