//! Ranking benchmarks.
//!
//! Covers the three hot paths: tokenization, a single cosine computation,
//! and a full rank pass over a synthetic corpus.
//!
//! ## Running
//!
//! ```bash
//! cargo bench --bench ranking
//! ```

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use cosrank::{cosine_similarity, rank, tokenize, Corpus, Document};

/// Deterministic corpus: `documents` docs of `terms_per_doc` terms drawn from
/// a `vocabulary`-sized term pool.
fn synthetic_corpus(documents: usize, terms_per_doc: usize, vocabulary: usize) -> Corpus {
    (0..documents)
        .map(|i| {
            let text: String = (0..terms_per_doc)
                .map(|j| format!("term{} ", (i * 31 + j * 7) % vocabulary))
                .collect();
            Document::from_text(format!("{i}.txt"), text.trim_end(), None)
        })
        .collect()
}

fn tokenize_benchmarks(c: &mut Criterion) {
    let mut group = c.benchmark_group("tokenize");

    let text = "The quick brown fox, jumps over the lazy dog! ".repeat(200);
    group.throughput(Throughput::Bytes(text.len() as u64));
    group.bench_function("paragraph", |b| b.iter(|| black_box(tokenize(&text))));

    group.finish();
}

fn similarity_benchmarks(c: &mut Criterion) {
    let mut group = c.benchmark_group("cosine_similarity");

    let corpus = synthetic_corpus(100, 200, 800);
    let query = Document::from_text("query", "term3 term44 term521", None);
    let document = corpus.documents()[0].clone();

    group.bench_function("single_pair", |b| {
        b.iter(|| black_box(cosine_similarity(&document, &query, corpus.doc_frequencies())))
    });

    group.finish();
}

fn rank_benchmarks(c: &mut Criterion) {
    let mut group = c.benchmark_group("rank");

    for &size in &[100usize, 1_000] {
        let mut corpus = synthetic_corpus(size, 40, 500);
        let query = Document::from_text("query", "term1 term7 term31 term99 term217", None);

        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, _| {
            b.iter(|| black_box(rank(&query, &mut corpus, 10)));
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    tokenize_benchmarks,
    similarity_benchmarks,
    rank_benchmarks
);
criterion_main!(benches);
