// benches/report.rs
use criterion::{criterion_group, criterion_main, Criterion, black_box};

use callscan::loader::{ContentKind, Origin};
use callscan::process::{CallCounts, ProcessedRecord};
use callscan::report::build_report;

fn synthetic_records(pages: usize, scripts_per_page: usize, idents: usize) -> Vec<ProcessedRecord> {
    let mut out = Vec::new();
    for p in 0..pages {
        for s in 0..scripts_per_page {
            let mut calls = CallCounts::new();
            for i in 0..idents {
                calls.insert(format!("fn_{}", (p + s + i) % (idents * 2)), (i as u64) + 1);
            }
            out.push(ProcessedRecord {
                url: format!("http://bench.test/p{}/s{}.js", p, s),
                kind: ContentKind::Js,
                origin: Origin::Web,
                data: "function noop() {}".into(),
                calls,
            });
        }
        out.push(ProcessedRecord {
            url: format!("http://bench.test/p{}", p),
            kind: ContentKind::Html,
            origin: Origin::Web,
            data: "<html></html>".into(),
            calls: CallCounts::new(),
        });
    }
    out
}

fn bench_report(c: &mut Criterion) {
    let records = synthetic_records(50, 8, 24);

    c.bench_function("build_report_50_pages", |b| {
        b.iter(|| {
            let ds = build_report(black_box(&records));
            black_box(ds.rows.len())
        })
    });
}

criterion_group!(benches, bench_report);
criterion_main!(benches);
