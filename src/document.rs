//! Per-document term statistics and TF-IDF weights.
//!
//! A [`Document`] owns its term counts and a similarity slot that starts
//! unset. Scoring fills the slot; reading it before then is a state error,
//! not a silent default. Document frequencies live at the corpus level and
//! are passed in where weights need them.

use crate::multiset::Multiset;
use crate::tokenizer::{self, StopwordSet};
use std::cmp::Ordering;
use thiserror::Error;

/// Errors from reading ranking state that has not been produced yet.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StateError {
    /// Similarity was read or compared before any scoring pass ran.
    #[error("similarity not yet computed for document '{0}'")]
    SimilarityUnset(String),
}

/// Scoring state of a document.
///
/// There is no magic sentinel score; a document is either unscored or scored.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Similarity {
    /// No scoring pass has touched this document.
    #[default]
    Unset,
    /// Cosine similarity against some query, in `[0, 1]` for non-degenerate
    /// inputs.
    Scored(f32),
}

/// A named bag of terms with an attached scoring slot.
#[derive(Debug, Clone)]
pub struct Document {
    name: String,
    terms: Multiset<String>,
    similarity: Similarity,
}

impl Document {
    /// Builds a document from an already-tokenized term sequence.
    pub fn from_terms<I, S>(name: impl Into<String>, terms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Document {
            name: name.into(),
            terms: terms.into_iter().map(Into::into).collect(),
            similarity: Similarity::Unset,
        }
    }

    /// Tokenizes `text` and builds a document from the result.
    ///
    /// The same normalization applies whether the document is a corpus member
    /// or a query; pass `None` to skip stopword filtering.
    pub fn from_text(name: impl Into<String>, text: &str, stopwords: Option<&StopwordSet>) -> Self {
        let terms = match stopwords {
            Some(stopwords) => tokenizer::tokenize_filtered(text, stopwords),
            None => tokenizer::tokenize(text),
        };
        Self::from_terms(name, terms)
    }

    /// The document's display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Term counts for this document.
    pub fn terms(&self) -> &Multiset<String> {
        &self.terms
    }

    /// Term frequency: `ln(1 + count(term) / count_all())`.
    ///
    /// Returns 0 for a document with no terms at all, which keeps zero-term
    /// documents scoreable instead of dividing by zero.
    pub fn term_frequency(&self, term: &str) -> f32 {
        let total = self.terms.count_all();
        if total == 0 {
            return 0.0;
        }
        let count = self.terms.count(term);
        (1.0 + count as f32 / total as f32).ln()
    }

    /// TF-IDF weight of `term` given its corpus document frequency.
    pub fn term_weight(&self, term: &str, document_frequency: usize) -> f32 {
        self.term_frequency(term) * inverse_document_frequency(document_frequency)
    }

    /// Attaches a similarity score, replacing any previous one.
    pub fn set_similarity(&mut self, score: f32) {
        self.similarity = Similarity::Scored(score);
    }

    /// The attached similarity score.
    pub fn similarity(&self) -> Result<f32, StateError> {
        match self.similarity {
            Similarity::Scored(score) => Ok(score),
            Similarity::Unset => Err(StateError::SimilarityUnset(self.name.clone())),
        }
    }

    /// Orders two scored documents by descending similarity.
    ///
    /// The document with the higher score compares as `Less`, so a sort with
    /// this comparator puts the best match first. Fails if either side is
    /// still unscored.
    pub fn compare_similarity(&self, other: &Self) -> Result<Ordering, StateError> {
        let own = self.similarity()?;
        let theirs = other.similarity()?;
        Ok(theirs.total_cmp(&own))
    }
}

/// Inverse document frequency: `1 / df`, or 0 when no corpus document
/// contains the term.
pub fn inverse_document_frequency(document_frequency: usize) -> f32 {
    if document_frequency == 0 {
        0.0
    } else {
        1.0 / document_frequency as f32
    }
}
