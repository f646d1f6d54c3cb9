//! Benchmarks for stat classification and the level curve

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use kf2_stats::core::types::StatId;
use kf2_stats::stats::{aggregate, level_info, RawStats, PERK_XP_TABLE};

/// A profile with every perk touched plus a few hundred unrelated stats
fn busy_profile() -> RawStats {
    let mut raw = RawStats::new();
    for id in 0..600u32 {
        raw.insert(StatId(id).key(), u64::from(id) * 997);
    }
    for id in 2000..2008u32 {
        raw.insert(StatId(id).key(), u64::from(id));
    }
    raw
}

fn bench_aggregate(c: &mut Criterion) {
    let raw = busy_profile();
    c.bench_function("aggregate_busy_profile", |b| b.iter(|| aggregate(black_box(&raw))));

    let empty = RawStats::new();
    c.bench_function("aggregate_empty", |b| b.iter(|| aggregate(black_box(&empty))));
}

fn bench_level_curve(c: &mut Criterion) {
    let max = PERK_XP_TABLE.max_xp() + 1000;
    c.bench_function("level_info_sweep", |b| {
        b.iter(|| {
            let mut xp = 0;
            while xp < max {
                black_box(level_info(black_box(xp)));
                xp += 997;
            }
        })
    });
}

criterion_group!(benches, bench_aggregate, bench_level_curve);
criterion_main!(benches);
