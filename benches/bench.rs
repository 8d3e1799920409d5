//! Criterion benchmarks for sarissa-jieba.
//!
//! Covers tokenization, the jieba filter in both segmentation modes, and
//! parallel analysis through the shared segmenter.

use std::hint::black_box;

use criterion::{Criterion, Throughput, criterion_group, criterion_main};
use rayon::prelude::*;
use sarissa_jieba::analysis::analyzer::Analyzer;
use sarissa_jieba::analysis::analyzer::chinese::ChineseAnalyzer;
use sarissa_jieba::analysis::token::Token;
use sarissa_jieba::analysis::token_filter::jieba::JiebaFilter;
use sarissa_jieba::analysis::tokenizer::Tokenizer;
use sarissa_jieba::analysis::tokenizer::unicode_word::UnicodeWordTokenizer;

/// Generate mixed Chinese and ASCII documents for benchmarking.
fn generate_test_documents(count: usize) -> Vec<String> {
    let words = [
        "我们", "在", "北京大学", "学习", "search", "engine", "中文", "分词", "科学院",
        "吃苦耐劳", "水果", "包括", "西瓜", "橙子", "index", "世界", "和平", "的", "，",
    ];

    let mut documents = Vec::with_capacity(count);
    for i in 0..count {
        let doc_length = 30 + (i % 50);
        let mut doc = String::new();

        for j in 0..doc_length {
            let word = words[(i * 7 + j * 13) % words.len()];
            if word.is_ascii() {
                doc.push(' ');
                doc.push_str(word);
                doc.push(' ');
            } else {
                doc.push_str(word);
            }
        }

        documents.push(doc);
    }

    documents
}

fn bench_tokenizer(c: &mut Criterion) {
    let mut group = c.benchmark_group("tokenizer");
    let tokenizer = UnicodeWordTokenizer::new();
    let texts = generate_test_documents(100);

    group.throughput(Throughput::Elements(texts.len() as u64));
    group.bench_function("unicode_word", |b| {
        b.iter(|| {
            for text in &texts {
                let tokens: Vec<Token> = tokenizer.tokenize(black_box(text)).unwrap().collect();
                black_box(tokens);
            }
        })
    });

    group.finish();
}

/// Benchmark the jieba filter alone on pre-tokenized input.
fn bench_jieba_filter(c: &mut Criterion) {
    let mut group = c.benchmark_group("jieba_filter");
    let tokenizer = UnicodeWordTokenizer::new();
    let inputs: Vec<Vec<Token>> = generate_test_documents(100)
        .iter()
        .map(|text| tokenizer.tokenize(text).unwrap().collect())
        .collect();

    for (label, search_mode) in [("precise", false), ("search", true)] {
        let filter = JiebaFilter::new(None, search_mode, true).unwrap();

        group.throughput(Throughput::Elements(inputs.len() as u64));
        group.bench_function(label, |b| {
            b.iter(|| {
                for input in &inputs {
                    black_box(filter.filter_tokens(black_box(input)).unwrap());
                }
            })
        });
    }

    group.finish();
}

/// Benchmark many threads analyzing through one shared segmenter.
fn bench_parallel_analysis(c: &mut Criterion) {
    let mut group = c.benchmark_group("parallel_analysis");
    let analyzer = ChineseAnalyzer::new().unwrap();
    let texts = generate_test_documents(1000);

    group.throughput(Throughput::Elements(texts.len() as u64));
    group.bench_function("analyze_batch_documents", |b| {
        b.iter(|| {
            let counts: Vec<usize> = texts
                .par_iter()
                .map(|text| analyzer.analyze(black_box(text)).unwrap().count())
                .collect();
            black_box(counts)
        })
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_tokenizer,
    bench_jieba_filter,
    bench_parallel_analysis
);
criterion_main!(benches);
