// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use std::hint::black_box;
use warden::hash::{MultiplyAddHasher, create_hash_code};
use warden::prelude::*;
use warden::text;

/// Builds a haystack of `len` bytes whose only match of "needle" is at the end.
fn haystack(len: usize) -> String {
    let mut s: String = "lorem ipsum dolor sit amet "
        .chars()
        .cycle()
        .take(len.saturating_sub(6))
        .collect();
    s.push_str("Needle");
    s
}

fn bench_find(c: &mut Criterion) {
    let mut group = c.benchmark_group("text_find");

    for len in [64_usize, 1024, 16 * 1024] {
        let hay = haystack(len);
        group.throughput(Throughput::Bytes(hay.len() as u64));

        for comparison in StringComparison::ALL {
            group.bench_with_input(
                BenchmarkId::new(comparison.to_string(), len),
                &hay,
                |b, hay| {
                    b.iter(|| {
                        let found =
                            text::find(black_box(hay.as_str()), black_box("needle"), comparison);
                        // Only the case-insensitive modes can match the capitalized needle.
                        assert_eq!(found.is_some(), comparison.ignores_case());
                    })
                },
            );
        }
    }
    group.finish();
}

fn bench_equals(c: &mut Criterion) {
    let a = "The Quick Brown Fox Jumps Over The Lazy Dog";
    let b = "the quick brown fox jumps over the lazy dog";
    let mut group = c.benchmark_group("text_equals");

    for comparison in StringComparison::ALL {
        group.bench_function(comparison.to_string(), |bench| {
            bench.iter(|| text::equals(black_box(a), black_box(b), comparison))
        });
    }
    group.finish();
}

fn bench_hash(c: &mut Criterion) {
    let values: Vec<u64> = (0..256).collect();
    let mut group = c.benchmark_group("hash");
    group.throughput(Throughput::Elements(values.len() as u64));

    group.bench_function("create_hash_code", |b| {
        b.iter(|| create_hash_code(black_box(&values)))
    });
    group.bench_function("combine_chain", |b| {
        b.iter(|| {
            values
                .iter()
                .fold(MultiplyAddHasher::new(), |h, v| h.combine(black_box(v)))
                .finish()
        })
    });
    group.finish();
}

fn bench_guards(c: &mut Criterion) {
    let mut group = c.benchmark_group("guards");
    let range = Range::inclusive_between(1, 65535);

    group.bench_function("passing_chain", |b| {
        b.iter(|| {
            let host = black_box("db.internal");
            let port = black_box(5432);
            let host = arg!(host)
                .must_not_be_blank()
                .and_then(|a| a.must_be_trimmed())
                .and_then(|a| a.must_be_shorter_than(256));
            let port = arg!(port).must_be_in(&range);
            host.is_ok() && port.is_ok()
        })
    });

    group.bench_function("failing_guard", |b| {
        b.iter(|| {
            let port = black_box(0);
            arg!(port).must_be_in(&range).is_err()
        })
    });
    group.finish();
}

criterion_group!(benches, bench_find, bench_equals, bench_hash, bench_guards);
criterion_main!(benches);
