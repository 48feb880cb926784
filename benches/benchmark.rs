use criterion::{criterion_group, criterion_main, Criterion};
use doc_similarity::{cosine_similarity, CountVectorizer};

/// Deterministic pseudo-text over a vocabulary of `vocab` words
fn synthetic_corpus(docs: usize, words: usize, vocab: u32) -> Vec<String> {
    // xorshift32
    let mut state = 0x1234_5678u32;
    let mut next = move || {
        state ^= state << 13;
        state ^= state >> 17;
        state ^= state << 5;
        state
    };
    (0..docs)
        .map(|_| {
            (0..words)
                .map(|_| format!("w{}", next() % vocab))
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect()
}

fn build_and_rank_benchmark(c: &mut Criterion) {
    let texts = synthetic_corpus(60, 400, 3_000);

    c.bench_function("insert_documents", |b| {
        b.iter(|| {
            let mut vectorizer = CountVectorizer::new();
            for (i, text) in texts.iter().enumerate() {
                vectorizer.insert_text(format!("doc{i}"), text);
            }
            vectorizer.finalize().doc_num()
        })
    });

    let mut vectorizer = CountVectorizer::new();
    for (i, text) in texts.iter().enumerate() {
        vectorizer.insert_text(format!("doc{i}"), text);
    }
    vectorizer.finalize();

    c.bench_function("rank_all_pairs", |b| {
        b.iter(|| vectorizer.clone().rank(10).map(|r| r.len()))
    });

    let rows = vectorizer.table().rows();
    c.bench_function("cosine_similarity", |b| {
        b.iter(|| cosine_similarity(rows[0].counts.as_slice(), rows[1].counts.as_slice()))
    });
}

criterion_group!(benches, build_and_rank_benchmark);
criterion_main!(benches);
