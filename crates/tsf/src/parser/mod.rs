//! TS document parser.
//!
//! This module parses the XML-based translation source format written by
//! Qt Linguist tools into [`crate::types::Catalog`] values.

pub mod error;
mod file;

pub use error::ParseError;
pub use file::parse_catalog;
