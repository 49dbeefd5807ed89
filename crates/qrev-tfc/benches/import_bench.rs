//! Benchmarks for TFC import
//!
//! Run with: cargo bench -p qrev-tfc

use std::fmt::Write;

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use qrev_tfc::parse;

/// Build a netlist over `n` lines: half inputs, half ancillae set to `1`,
/// followed by `layers` rounds of Toffoli and Fredkin gates.
fn netlist(n: usize, layers: usize) -> String {
    let names: Vec<String> = (0..n).map(|i| format!("x{i}")).collect();
    let inputs = &names[..n / 2];
    let mut out = String::new();

    writeln!(out, "# generated netlist").unwrap();
    writeln!(out, ".v {}", names.join(",")).unwrap();
    writeln!(out, ".i {}", inputs.join(",")).unwrap();
    writeln!(out, ".o {}", names[n / 2..].join(",")).unwrap();
    writeln!(out, ".c {}", vec!["1"; n - n / 2].join(",")).unwrap();
    writeln!(out, "BEGIN").unwrap();
    for _ in 0..layers {
        for i in 0..n - 2 {
            writeln!(out, "t3 {}',{},{}", names[i], names[i + 1], names[i + 2]).unwrap();
        }
        for i in (0..n - 1).step_by(2) {
            writeln!(out, "f2 {},{}", names[i], names[i + 1]).unwrap();
        }
    }
    writeln!(out, "END").unwrap();
    out
}

/// Benchmark parsing into a fresh circuit
fn bench_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("tfc_parse");

    for num_lines in &[4, 16, 64, 256] {
        let source = netlist(*num_lines, 10);
        group.throughput(Throughput::Bytes(source.len() as u64));
        group.bench_with_input(
            BenchmarkId::new("layers_10", num_lines),
            &source,
            |b, source| {
                b.iter(|| black_box(parse(black_box(source)).unwrap()));
            },
        );
    }

    group.finish();
}

/// Benchmark header processing alone
fn bench_header(c: &mut Criterion) {
    let mut group = c.benchmark_group("tfc_header");

    for num_lines in &[16, 256, 1024] {
        let source = netlist(*num_lines, 0);
        group.bench_with_input(
            BenchmarkId::new("declarations", num_lines),
            &source,
            |b, source| {
                b.iter(|| black_box(parse(black_box(source)).unwrap()));
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_parse, bench_header);

criterion_main!(benches);
