use criterion::{black_box, criterion_group, criterion_main, Criterion};
use speller::checker::dictionary::Dictionary;
use speller::checker::suggestions::generate;

const WORDS: &str = "the quick brown fox jumps over lazy dog misspelled spelling \
    dictionary replacement candidate insertion deletion letter word line report";

fn bench_generate(c: &mut Criterion) {
    let dictionary = Dictionary::from_words([WORDS]).unwrap();

    c.bench_function("generate short", |b| {
        b.iter(|| generate(black_box("teh"), &dictionary))
    });
    c.bench_function("generate long", |b| {
        b.iter(|| generate(black_box("mispelled"), &dictionary))
    });
}

criterion_group!(benches, bench_generate);
criterion_main!(benches);
