// benches/status_page.rs
use criterion::{Criterion, black_box, criterion_group, criterion_main};
use scraper::Html;

use netgear_cm_exporter::specs::{self, NETGEAR_CM, PageScanner};

const PAGE: &str = include_str!("../tests/fixtures/DocsisStatus.htm");

fn bench_status_page(c: &mut Criterion) {
    c.bench_function("status_page_full", |b| {
        b.iter(|| {
            let page = specs::parse_status_page(black_box(PAGE), NETGEAR_CM).unwrap();
            black_box(page.downstream.len() + page.upstream.len())
        })
    });

    // Selectors compiled once, as the exporter does.
    let scanner = PageScanner::new(NETGEAR_CM).unwrap();
    c.bench_function("status_page_reused_scanner", |b| {
        b.iter(|| {
            let doc = Html::parse_document(black_box(PAGE));
            black_box(scanner.downstream(&doc).count() + scanner.upstream(&doc).count())
        })
    });

    let doc = Html::parse_document(PAGE);
    c.bench_function("status_page_extract_only", |b| {
        b.iter(|| black_box(scanner.downstream(black_box(&doc)).count()))
    });
}

criterion_group!(benches, bench_status_page);
criterion_main!(benches);
