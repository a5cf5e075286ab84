//! Cosine similarity between sparse TF-IDF weight vectors.
//!
//! Vectors are never materialized. The candidate dimensions are the union of
//! the two documents' distinct terms, weights are computed on the fly from
//! the corpus document-frequency table, and one pass accumulates the dot
//! product and both squared norms.

use crate::document::Document;
use crate::multiset::Multiset;

/// Cosine similarity between `document` and `query` under the corpus
/// document-frequency table `doc_frequencies`.
///
/// Terms with a document frequency of zero are skipped; they can only come
/// from the query side and carry no weight anywhere in the corpus. If either
/// accumulated norm is zero the result is 0 rather than a division by zero,
/// so empty documents and all-stopword queries score 0 against everything.
pub fn cosine_similarity(
    document: &Document,
    query: &Document,
    doc_frequencies: &Multiset<String>,
) -> f32 {
    let mut dot = 0.0f32;
    let mut document_sum_sq = 0.0f32;
    let mut query_sum_sq = 0.0f32;

    for term in document.terms().union_keys(query.terms()) {
        let df = doc_frequencies.count(term.as_str());
        if df == 0 {
            continue;
        }
        let document_weight = document.term_weight(term, df);
        let query_weight = query.term_weight(term, df);
        dot += document_weight * query_weight;
        document_sum_sq += document_weight * document_weight;
        query_sum_sq += query_weight * query_weight;
    }

    if document_sum_sq == 0.0 || query_sum_sq == 0.0 {
        return 0.0;
    }
    dot / (document_sum_sq.sqrt() * query_sum_sq.sqrt())
}
