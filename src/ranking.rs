//! TF-IDF relevance ranking over session history
//!
//! Every call recomputes document frequencies over the full current
//! history; there is no persisted index. Cost is O(history * query terms)
//! per call, which is the intended trade for a fully stateless ranker.

use crate::types::HistoryEntry;

/// Score for one document, produced in document order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DocScore {
    pub index: usize,
    pub score: f64,
}

/// Lowercased alphanumeric tokens.
fn tokenize(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split(|c: char| !c.is_alphanumeric())
        .filter(|t| !t.is_empty())
        .map(|t| t.to_string())
        .collect()
}

/// Score each document against the query.
///
/// TF is the raw count of the query term in the document; IDF is
/// `1 + ln(N / (1 + df))` over the current corpus. Per-term scores are
/// summed over the query's token sequence, duplicates included. A query
/// with no tokens yields an empty vector.
pub fn tfidf_scores(docs: &[&str], query: &str) -> Vec<DocScore> {
    let terms = tokenize(query);
    if terms.is_empty() || docs.is_empty() {
        return Vec::new();
    }

    let doc_tokens: Vec<Vec<String>> = docs.iter().map(|d| tokenize(d)).collect();
    let corpus_size = doc_tokens.len() as f64;

    // Document frequency per query term
    let idfs: Vec<f64> = terms
        .iter()
        .map(|term| {
            let df = doc_tokens
                .iter()
                .filter(|tokens| tokens.iter().any(|t| t == term))
                .count() as f64;
            1.0 + (corpus_size / (1.0 + df)).ln()
        })
        .collect();

    doc_tokens
        .iter()
        .enumerate()
        .map(|(index, tokens)| {
            let score = terms
                .iter()
                .zip(&idfs)
                .map(|(term, idf)| {
                    let tf = tokens.iter().filter(|t| *t == term).count() as f64;
                    tf * idf
                })
                .sum();
            DocScore { index, score }
        })
        .collect()
}

/// Return the `top_n` history entries most similar to the query.
///
/// Deterministic: sorted descending by score with a stable sort, so equal
/// scores keep their chronological order. Entries with empty text are
/// dropped from the result. Empty history or an empty query yields an
/// empty vector.
pub fn rank(history: &[HistoryEntry], query: &str, top_n: usize) -> Vec<HistoryEntry> {
    if history.is_empty() {
        return Vec::new();
    }

    let docs: Vec<&str> = history.iter().map(|h| h.text.as_str()).collect();
    let mut scores = tfidf_scores(&docs, query);
    if scores.is_empty() {
        return Vec::new();
    }

    scores.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap());

    scores
        .into_iter()
        .take(top_n)
        .map(|s| history[s.index].clone())
        .filter(|entry| !entry.text.is_empty())
        .collect()
}
