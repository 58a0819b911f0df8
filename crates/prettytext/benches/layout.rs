use criterion::{black_box, criterion_group, criterion_main, Criterion};
use prettytext::block::TableOptions;
use prettytext::style::Styler;
use prettytext::{strip_ansi, table, visible_width, wrap_text};

fn styled_paragraph() -> String {
    let styler = Styler::enabled(true);
    let mut text = String::new();
    for index in 0..64 {
        let word = match index % 4 {
            0 => styler.bold().paint("lorem").into_owned(),
            1 => styler.red().underline().paint("ipsum").into_owned(),
            2 => "dolor 你好".to_owned(),
            _ => styler.bg_blue().paint("sit amet").into_owned(),
        };
        text.push_str(&word);
        text.push(' ');
    }
    text
}

pub fn run_benchmarks(c: &mut Criterion) {
    let paragraph = styled_paragraph();

    let mut group = c.benchmark_group("measure");
    group.bench_function("visible-width", |b| {
        b.iter(|| visible_width(black_box(&paragraph)))
    });
    group.bench_function("strip-ansi", |b| b.iter(|| strip_ansi(black_box(&paragraph))));
    group.finish();

    let mut group = c.benchmark_group("wrap");
    for width in [20, 80] {
        group.bench_function(format!("width-{}", width), |b| {
            b.iter(|| wrap_text(black_box(&paragraph), width))
        });
    }
    group.finish();

    let rows: Vec<[String; 3]> = (0..100)
        .map(|n| [format!("row {}", n), "你好".repeat(n % 5), n.to_string()])
        .collect();
    let options = TableOptions::default();
    c.bench_function("table-100", |b| {
        b.iter(|| table(&["name", "glyphs", "count"], black_box(rows.as_slice()), &options))
    });
}

criterion_group!(benches, run_benchmarks);
criterion_main!(benches);
