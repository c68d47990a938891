//! Performance benchmarks for article-extract.
//!
//! Run with: `cargo bench`

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use article_extract::{extract, extract_bytes};

const SAMPLE_HTML: &str = r#"
<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <title>Sample Article</title>
    <style>body { font-family: serif; }</style>
</head>
<body>
    <nav>
        <a href="/">Home</a>
        <a href="/about">About</a>
    </nav>
    <article>
        <h1>Sample Article Title</h1>
        <p>This is the first paragraph of the article. It contains some meaningful
        content that should survive extraction.</p>
        <h2>Details</h2>
        <p>Here is a second paragraph with more content.</p>
        <ul>
            <li>First point</li>
            <li>Second point</li>
        </ul>
    </article>
    <footer>
        <p>Copyright 2024</p>
    </footer>
    <script>track();</script>
</body>
</html>
"#;

fn repeated_article(paragraphs: usize) -> String {
    let body: String = (0..paragraphs)
        .map(|i| format!("<h3>Section {i}</h3><p>Paragraph {i} with <b>inline</b> markup.</p><ul><li>item {i}</li></ul>"))
        .collect();
    format!("<html><body><div class=\"post-content\">{body}</div></body></html>")
}

fn bench_sample(c: &mut Criterion) {
    c.bench_function("extract_sample", |b| b.iter(|| extract(black_box(SAMPLE_HTML))));
    c.bench_function("extract_bytes_sample", |b| {
        b.iter(|| extract_bytes(black_box(SAMPLE_HTML.as_bytes())));
    });
}

fn bench_scaling(c: &mut Criterion) {
    let mut group = c.benchmark_group("extract_scaling");
    for paragraphs in [10, 100, 1000] {
        let html = repeated_article(paragraphs);
        group.throughput(Throughput::Bytes(html.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(paragraphs), &html, |b, html| {
            b.iter(|| extract(black_box(html)));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_sample, bench_scaling);
criterion_main!(benches);
