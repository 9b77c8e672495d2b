//! Benchmarks for the coordinate codec.
//!
//! # Benchmarks
//!
//! - **`decode`**: Decodes notation strings of one, two and three dimensions,
//!   including the longest valid string.
//! - **`encode`**: Encodes the matching index sequences.
//! - **`reject`**: Decodes invalid strings that fail at different stages of the
//!   scan (length bound, first character, last component).
//!
//! # Running
//!
//! ```sh
//! cargo bench --bench codec
//! ```

use std::{hint, time::Duration};

use cellcoord_core::{decode, encode};
use criterion::{BenchmarkId, Criterion, PlottingBackend, criterion_group, criterion_main};

const VALID: [(&str, &[u8]); 4] = [
    ("e", &[4]),
    ("e4", &[4, 3]),
    ("a1A", &[0, 0, 0]),
    ("iv256IV", &[255, 255, 255]),
];

const INVALID: [&str; 4] = ["iv256IVaaaaaaaa", "1a", "a01", "a1IW"];

fn bench_decode(c: &mut Criterion) {
    for (text, _) in VALID {
        c.bench_with_input(BenchmarkId::new("decode", text), &text, |b, text| {
            b.iter(|| decode(hint::black_box(text)));
        });
    }
}

fn bench_encode(c: &mut Criterion) {
    for (text, indices) in VALID {
        c.bench_with_input(BenchmarkId::new("encode", text), &indices, |b, indices| {
            b.iter(|| encode(hint::black_box(indices)));
        });
    }
}

fn bench_reject(c: &mut Criterion) {
    for text in INVALID {
        c.bench_with_input(BenchmarkId::new("reject", text), &text, |b, text| {
            b.iter(|| decode(hint::black_box(text)));
        });
    }
}

criterion_group!(
    name = benches;
    config =
        Criterion::default()
            .plotting_backend(PlottingBackend::Plotters)
            .measurement_time(Duration::from_secs(5));
    targets =
        bench_decode,
        bench_encode,
        bench_reject
);
criterion_main!(benches);
