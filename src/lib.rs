//! TF-IDF weighted cosine-similarity ranking for document collections.
//!
//! Documents are bags of terms. Each term carries a TF-IDF weight, the
//! similarity between two documents is the cosine of their weight vectors,
//! and a query is just another document scored against every member of a
//! corpus.
//!
//! ```
//! use cosrank::{rank, Corpus, Document};
//!
//! let mut corpus: Corpus = [
//!     Document::from_text("1.txt", "the quick brown fox", None),
//!     Document::from_text("2.txt", "the lazy dog", None),
//! ]
//! .into_iter()
//! .collect();
//! let query = Document::from_text("query", "quick fox", None);
//!
//! let results = rank(&query, &mut corpus, 10);
//! assert_eq!(results[0].name, "1.txt");
//! ```

pub mod corpus;
pub mod document;
pub mod multiset;
pub mod rank;
pub mod similarity;
pub mod tokenizer;

pub use corpus::Corpus;
pub use document::{inverse_document_frequency, Document, Similarity, StateError};
pub use multiset::Multiset;
pub use rank::{rank, RankedResult};
pub use similarity::cosine_similarity;
pub use tokenizer::{tokenize, tokenize_filtered, StopwordSet};
