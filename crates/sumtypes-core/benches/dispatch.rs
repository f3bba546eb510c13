//! Dispatch cost of the combinators against a plain enum match.
//!
//! cargo bench -p sumtypes-core

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use sumtypes_core::{Either4, Outcome};

enum Plain {
    A(u32),
    B(u64),
    C(u16),
    D(u8),
}

fn either4_fold(c: &mut Criterion) {
    let values: Vec<Either4<u32, u64, u16, u8>> = (0..1024u32)
        .map(|i| match i % 4 {
            0 => Either4::first(i),
            1 => Either4::second(i as u64),
            2 => Either4::third(i as u16),
            _ => Either4::fourth(i as u8),
        })
        .collect();
    let plain: Vec<Plain> = (0..1024u32)
        .map(|i| match i % 4 {
            0 => Plain::A(i),
            1 => Plain::B(i as u64),
            2 => Plain::C(i as u16),
            _ => Plain::D(i as u8),
        })
        .collect();

    c.bench_function("either4_fold_1024", |b| {
        b.iter(|| {
            let mut sum = 0u64;
            for v in black_box(&values) {
                sum += v.fold(|a| a as u64, |b| b, |c| c as u64, |d| d as u64);
            }
            sum
        })
    });

    c.bench_function("plain_match_1024", |b| {
        b.iter(|| {
            let mut sum = 0u64;
            for v in black_box(&plain) {
                sum += match *v {
                    Plain::A(a) => a as u64,
                    Plain::B(b) => b,
                    Plain::C(c) => c as u64,
                    Plain::D(d) => d as u64,
                };
            }
            sum
        })
    });
}

fn outcome_map_fold(c: &mut Criterion) {
    c.bench_function("outcome_map_fold", |b| {
        b.iter(|| {
            let o: Outcome<u32, &str> = if black_box(true) {
                Outcome::success(black_box(41))
            } else {
                Outcome::failure("nope")
            };
            o.map(|n| n + 1, str::len).fold(|n| n as usize, |n| n)
        })
    });
}

criterion_group!(benches, either4_fold, outcome_map_fold);
criterion_main!(benches);
