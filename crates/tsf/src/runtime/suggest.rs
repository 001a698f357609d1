//! Source-string suggestions for failed lookups.

use crate::types::Context;

/// Similarity threshold below which candidates are not suggested.
const SIMILARITY_THRESHOLD: f64 = 0.7;

/// Compute up to `limit` source strings from a context that are similar to
/// the requested one, best match first.
///
/// Used by tooling to print "did you mean" hints when a `(context, source)`
/// pair has no entry, typically after a source string changed upstream.
pub fn compute_suggestions(context: &Context, source: &str, limit: usize) -> Vec<String> {
    let mut scored: Vec<(f64, &str)> = context
        .messages
        .iter()
        .map(|message| {
            (
                strsim::jaro_winkler(source, &message.source),
                message.source.as_str(),
            )
        })
        .filter(|(score, candidate)| *score >= SIMILARITY_THRESHOLD && *candidate != source)
        .collect();

    scored.sort_by(|a, b| b.0.partial_cmp(&a.0).unwrap_or(std::cmp::Ordering::Equal));
    scored.dedup_by(|a, b| a.1 == b.1);

    scored
        .into_iter()
        .take(limit)
        .map(|(_, candidate)| candidate.to_string())
        .collect()
}
