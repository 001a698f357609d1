//! Coverage statistics over a catalog.

use serde::Serialize;

use crate::types::{Catalog, TranslationStatus};

/// Message counts for one context.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ContextStats {
    pub name: String,
    pub finished: usize,
    pub unfinished: usize,
    pub vanished: usize,
    pub obsolete: usize,
    /// Source strings of unfinished messages, in document order.
    pub unfinished_sources: Vec<String>,
}

impl ContextStats {
    /// Messages still referenced by the UI.
    pub fn active(&self) -> usize {
        self.finished + self.unfinished
    }
}

/// Aggregated coverage statistics for a catalog.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CatalogStats {
    pub contexts: Vec<ContextStats>,
    pub finished: usize,
    pub unfinished: usize,
    pub vanished: usize,
    pub obsolete: usize,
}

impl CatalogStats {
    /// Count message statuses per context and in total.
    pub fn collect(catalog: &Catalog) -> Self {
        let mut stats = Self::default();
        for context in &catalog.contexts {
            let mut context_stats = ContextStats {
                name: context.name.clone(),
                ..ContextStats::default()
            };
            for message in &context.messages {
                match message.status {
                    TranslationStatus::Finished => context_stats.finished += 1,
                    TranslationStatus::Unfinished => {
                        context_stats.unfinished += 1;
                        context_stats.unfinished_sources.push(message.source.clone());
                    }
                    TranslationStatus::Vanished => context_stats.vanished += 1,
                    TranslationStatus::Obsolete => context_stats.obsolete += 1,
                }
            }
            stats.finished += context_stats.finished;
            stats.unfinished += context_stats.unfinished;
            stats.vanished += context_stats.vanished;
            stats.obsolete += context_stats.obsolete;
            stats.contexts.push(context_stats);
        }
        stats
    }

    /// Messages still referenced by the UI.
    pub fn active(&self) -> usize {
        self.finished + self.unfinished
    }

    /// Fraction of active messages that are finished, in `0.0..=1.0`.
    ///
    /// An empty catalog counts as complete.
    pub fn completion(&self) -> f64 {
        let active = self.active();
        if active == 0 {
            return 1.0;
        }
        self.finished as f64 / active as f64
    }

    /// Whether every active message is finished.
    pub fn is_complete(&self) -> bool {
        self.unfinished == 0
    }
}
