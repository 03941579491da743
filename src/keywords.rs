//! Keyword extraction against the fixed discussion vocabulary.
//!
//! Topic nodes only ever come from two places: this extractor (local scan of
//! a sent message) and the external agent (arbitrary keyword strings). The
//! vocabulary is deliberately small; matching is case-insensitive substring
//! containment.

/// The discussion vocabulary, in declared order.
///
/// Extraction results preserve this order, not the order terms appear in the
/// message text.
pub const VOCABULARY: [&str; 12] = [
    "Optimization",
    "Deployment",
    "Budget",
    "API",
    "Latency",
    "Model",
    "GPU",
    "Dataset",
    "Stakeholder",
    "Timeline",
    "Blocker",
    "Security",
];

/// Scan `text` for vocabulary terms.
///
/// Each term appears at most once in the result, in vocabulary order. Empty
/// input or no matches yields an empty vector, never an error.
pub fn extract_keywords(text: &str) -> Vec<String> {
    let lower = text.to_lowercase();
    VOCABULARY
        .iter()
        .filter(|kw| lower.contains(&kw.to_lowercase()))
        .map(|kw| kw.to_string())
        .collect()
}
