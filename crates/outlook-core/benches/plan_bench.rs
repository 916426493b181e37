// File: crates/outlook-core/benches/plan_bench.rs
// Summary: Criterion bench of table-to-plan over synthetic tables of increasing size.

use outlook_core::{build_plan, ChartConfig, Table};
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, black_box};

const HEADERS: [&str; 9] = ["Year", "Actually got", "pol", "2020", "2025", "2030", "2035", "2040", "2050"];

fn gen_table(n: usize) -> Table {
    let mut rows = Vec::with_capacity(n);
    for i in 0..n {
        let year = 1990 + (i % 60) as i32;
        let actual = if i % 3 == 0 { String::new() } else { format!("{}", 10.0 * 1.3f64.powi((i % 60) as i32)) };
        let track = if i % 4 == 0 { "stated" } else { " Cur " };
        let mut row = vec![year.to_string(), actual, track.to_string()];
        for k in 0..6 {
            row.push(if (i + k) % 5 == 0 { String::new() } else { format!("{}", 100 * (k + 1) + i) });
        }
        rows.push(row);
    }
    Table::new(HEADERS, rows)
}

fn bench_plan(c: &mut Criterion) {
    let cfg = ChartConfig::default();
    let mut group = c.benchmark_group("build_plan");
    for &n in &[100usize, 10_000usize] {
        let table = gen_table(n);
        group.bench_with_input(BenchmarkId::from_parameter(format!("rows{n}")), &table, |b, t| {
            b.iter(|| black_box(build_plan(t, &cfg).expect("plan")));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_plan);
criterion_main!(benches);
