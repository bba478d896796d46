#![allow(missing_docs)]

use divan::{Bencher, black_box, counter::BytesCount};
use wordscanner::{ScriptRangeTable, Tokenizer, TokenizerOptions};

#[global_allocator]
static ALLOC: divan::AllocProfiler = divan::AllocProfiler::system();

fn main() {
    divan::main();
}

static DIVERSE_CORPUS: &str = include_str!("data/multilingual.txt");
static ENGLISH_CORPUS: &str = include_str!("data/english.txt");

fn diverse_text() -> String {
    DIVERSE_CORPUS.repeat(10)
}

fn english_text() -> String {
    ENGLISH_CORPUS.repeat(10)
}

fn ascii_only_tokenizer() -> Tokenizer {
    Tokenizer::new(ScriptRangeTable::empty().into())
}

mod english {
    use super::*;

    #[divan::bench]
    fn default_scripts(bencher: Bencher) {
        let text = english_text();
        let tokenizer = Tokenizer::default();
        bencher
            .counter(BytesCount::new(text.len()))
            .bench(|| tokenizer.tokenize(black_box(&text)));
    }

    #[divan::bench]
    fn ascii_only(bencher: Bencher) {
        let text = english_text();
        let tokenizer = ascii_only_tokenizer();
        bencher
            .counter(BytesCount::new(text.len()))
            .bench(|| tokenizer.tokenize(black_box(&text)));
    }

    #[divan::bench]
    fn join(bencher: Bencher) {
        let text = english_text();
        let stream = Tokenizer::default().tokenize(&text);
        bencher
            .counter(BytesCount::new(text.len()))
            .bench(|| black_box(&stream).join());
    }
}

mod diverse {
    use super::*;

    #[divan::bench]
    fn default_scripts(bencher: Bencher) {
        let text = diverse_text();
        let tokenizer = Tokenizer::default();
        bencher
            .counter(BytesCount::new(text.len()))
            .bench(|| tokenizer.tokenize(black_box(&text)));
    }

    #[divan::bench]
    fn ascii_only(bencher: Bencher) {
        let text = diverse_text();
        let tokenizer = ascii_only_tokenizer();
        bencher
            .counter(BytesCount::new(text.len()))
            .bench(|| tokenizer.tokenize(black_box(&text)));
    }

    #[divan::bench]
    fn extra_ranges(bencher: Bencher) {
        let text = diverse_text();
        let tokenizer = TokenizerOptions::default()
            .with_extra_ranges([0x1F300u32..=0x1FAFF])
            .build();
        bencher
            .counter(BytesCount::new(text.len()))
            .bench(|| tokenizer.tokenize(black_box(&text)));
    }

    #[divan::bench]
    fn parse_bytes(bencher: Bencher) {
        let text = diverse_text();
        let bytes = text.as_bytes();
        let tokenizer = Tokenizer::default();
        bencher
            .counter(BytesCount::new(bytes.len()))
            .bench(|| tokenizer.parse(black_box(bytes)));
    }
}
