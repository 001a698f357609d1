//! Runtime lookup over loaded catalogs.
//!
//! This module provides the translation engine: per-language catalog
//! storage, finished-only lookup with source fallback, plural form
//! selection, and the lint and statistics passes used by tooling.

mod error;
mod lint;
mod plural;
mod stats;
mod suggest;
mod translator;

pub use error::LoadError;
pub use lint::{LintWarning, lint_catalog};
pub use plural::{category_count, form_index, plural_category};
pub use stats::{CatalogStats, ContextStats};
pub use suggest::compute_suggestions;
pub use translator::{Translator, substitute_args, substitute_count};
