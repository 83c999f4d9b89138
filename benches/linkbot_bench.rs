// SPDX-License-Identifier: PMPL-1.0-or-later
//! Benchmarks for the linkbot pipeline

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use linkbot::{audit, report, Config, EntryParser};
use std::path::Path;

fn synthetic_directory(sections: usize, per_section: usize) -> String {
    let mut text = String::new();
    for s in 0..sections {
        text.push_str(&format!("## Section {}\n", s));
        for i in 0..per_section {
            text.push_str(&format!(
                "- [Entry {}](https://example.org/{}/{}): sample description {}\n",
                i % 50,
                s,
                i,
                i
            ));
        }
        text.push('\n');
    }
    text
}

fn bench_parse(c: &mut Criterion) {
    let parser = EntryParser::new().unwrap();
    let text = synthetic_directory(20, 100);

    c.bench_function("parse_entries", |b| b.iter(|| parser.parse(black_box(&text))));
}

fn bench_audit(c: &mut Criterion) {
    let config = Config::default();
    let entries = EntryParser::new()
        .unwrap()
        .parse(&synthetic_directory(20, 100));

    c.bench_function("audit_entries", |b| {
        b.iter(|| audit(black_box(&entries), black_box(&config)))
    });
}

fn bench_full_pipeline(c: &mut Criterion) {
    let config = Config::default();
    let parser = EntryParser::new().unwrap();
    let text = synthetic_directory(20, 100);

    c.bench_function("full_pipeline", |b| {
        b.iter(|| {
            let entries = parser.parse(black_box(&text));
            let result = audit(&entries, &config);
            report::render_markdown(&result, Path::new("llms.txt"))
        })
    });
}

criterion_group!(benches, bench_parse, bench_audit, bench_full_pipeline);
criterion_main!(benches);
