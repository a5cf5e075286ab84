//! Scoring and stable top-K selection.
//!
//! Every corpus document is scored independently against the query, so the
//! scoring pass runs in parallel. The ordering pass is a stable descending
//! sort over the scores: equal scores keep their corpus order, and the corpus
//! itself is never reordered.

use crate::corpus::Corpus;
use crate::document::Document;
use crate::similarity::cosine_similarity;
use rayon::prelude::*;
use serde::Serialize;

/// One entry of a ranking: 1-based position, document name, and score.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedResult {
    pub rank: usize,
    pub name: String,
    pub score: f32,
}

/// Scores every corpus document against `query` and returns the best `k`.
///
/// Each document's score is attached to it via
/// [`Document::set_similarity`], so the corpus can be inspected afterwards.
/// Results are sorted by descending score with ties broken by corpus order,
/// and `k` larger than the corpus is clamped. The query must have been
/// tokenized with the same stopword set as the corpus documents for the
/// scores to be meaningful.
pub fn rank(query: &Document, corpus: &mut Corpus, k: usize) -> Vec<RankedResult> {
    let doc_frequencies = corpus.doc_frequencies();
    let scores: Vec<f32> = corpus
        .documents()
        .par_iter()
        .map(|document| cosine_similarity(document, query, doc_frequencies))
        .collect();

    for (document, score) in corpus.documents_mut().iter_mut().zip(&scores) {
        document.set_similarity(*score);
    }

    let mut order: Vec<(usize, f32)> = scores.into_iter().enumerate().collect();
    // Stable sort: equal scores keep ascending index order, which is corpus
    // order.
    order.sort_by(|a, b| b.1.total_cmp(&a.1));

    let take = k.min(order.len());
    let results: Vec<RankedResult> = order[..take]
        .iter()
        .enumerate()
        .map(|(position, &(index, score))| RankedResult {
            rank: position + 1,
            name: corpus.documents()[index].name().to_string(),
            score,
        })
        .collect();

    tracing::debug!(
        corpus_size = corpus.len(),
        requested = k,
        returned = results.len(),
        "ranked corpus"
    );
    results
}
