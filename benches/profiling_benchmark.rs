// Profiling benchmark

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use rust_data_profiling_engine::{
    data::{Row, RowSet, Value},
    profiling::{Profiler, ProfilerConfig},
};

fn synthetic_row_set(rows: usize) -> RowSet {
    let data = (0..rows)
        .map(|i| {
            let mut row = Row::new();
            row.insert("id", Value::Integer(i as i64));
            row.insert("amount", Value::Float(i as f64 - 50.0));
            row.insert("status", Value::String(["open", "closed", "pending"][i % 3].to_string()));
            row.insert("created", Value::String(format!("2024-01-{:02}", (i % 28) + 1)));
            row.insert("code", Value::String(format!("ABC{}", i)));
            row
        })
        .collect();

    RowSet::new("benchmark", data)
}

fn bench_profile(c: &mut Criterion) {
    let rows = synthetic_row_set(1000);
    let profiler = Profiler::new(ProfilerConfig::default()).unwrap();

    c.bench_function("profile_1000_rows", |b| {
        b.iter(|| black_box(profiler.profile(&rows)))
    });
}

criterion_group!(benches, bench_profile);
criterion_main!(benches);
