//! Ordered document collection with corpus-wide term statistics.
//!
//! The corpus keeps its documents in insertion order and maintains the
//! document-frequency table as they arrive: one increment per distinct term
//! per document, never one per occurrence. Queries are scored against a
//! corpus but never added to one, so they cannot inflate the table.

use crate::document::Document;
use crate::multiset::Multiset;

/// An insertion-ordered set of documents plus their document frequencies.
#[derive(Debug, Clone, Default)]
pub struct Corpus {
    documents: Vec<Document>,
    doc_frequencies: Multiset<String>,
}

impl Corpus {
    /// Creates an empty corpus.
    pub fn new() -> Self {
        Corpus {
            documents: Vec::new(),
            doc_frequencies: Multiset::new(),
        }
    }

    /// Adds a document, folding its distinct terms into the frequency table.
    pub fn push(&mut self, document: Document) {
        for term in document.terms().keys() {
            self.doc_frequencies.add(term.clone());
        }
        tracing::debug!(
            document = document.name(),
            distinct_terms = document.terms().len(),
            "indexed document"
        );
        self.documents.push(document);
    }

    /// The documents in insertion order.
    pub fn documents(&self) -> &[Document] {
        &self.documents
    }

    /// Mutable access to the documents, for attaching scores.
    pub fn documents_mut(&mut self) -> &mut [Document] {
        &mut self.documents
    }

    /// Number of corpus documents containing each term.
    pub fn doc_frequencies(&self) -> &Multiset<String> {
        &self.doc_frequencies
    }

    /// Number of documents.
    pub fn len(&self) -> usize {
        self.documents.len()
    }

    /// Returns true if the corpus holds no documents.
    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }
}

impl Extend<Document> for Corpus {
    fn extend<I: IntoIterator<Item = Document>>(&mut self, iter: I) {
        for document in iter {
            self.push(document);
        }
    }
}

impl FromIterator<Document> for Corpus {
    fn from_iter<I: IntoIterator<Item = Document>>(iter: I) -> Self {
        let mut corpus = Corpus::new();
        corpus.extend(iter);
        corpus
    }
}
