// File: crates/phase-core/benches/grid_bench.rs
// Summary: Criterion benchmark for parsing and gridding the default synthetic dataset.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use phase_core::{build_phase_diagram, generate, parse_str, write_dataset, GridSpec};

fn bench_grid(c: &mut Criterion) {
    let data = generate(10, &GridSpec::default()).expect("generate");
    let mut buf = Vec::new();
    write_dataset(&mut buf, &data).expect("write");
    let text = String::from_utf8(buf).expect("utf8");

    c.bench_function("build_phase_diagram_301x101", |b| {
        b.iter(|| build_phase_diagram(black_box(&data)).expect("diagram"))
    });
    c.bench_function("parse_301x101", |b| {
        b.iter(|| parse_str(black_box(&text)).expect("parse"))
    });
}

criterion_group!(benches, bench_grid);
criterion_main!(benches);
