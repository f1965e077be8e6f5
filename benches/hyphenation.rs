//! Benchmarks for the hyphenation paths.
//!
//! Run with: cargo bench

use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};

use tavutin::{break_positions, hyphenate_document};

const PARAGRAPH: &str = "Lentokonesuihkuturbiinimoottoriapumekaanikkoaliupseerioppilas \
    kirjoitti kirjoituskoneella pitkän kertomuksen pääkaupungin puutarhoista ja \
    niiden taivutusmuodoista.";

fn sample_html() -> String {
    let mut html = String::new();
    for i in 0..50 {
        html.push_str(&format!(
            "<p class=\"kappale-{i}\">{PARAGRAPH} <em>Puutarha</em> <a href=\"/sivu/{i}\">lisää</a></p>\n"
        ));
    }
    html
}

fn bench_word(c: &mut Criterion) {
    c.bench_function("break_positions", |b| {
        b.iter(|| break_positions(black_box("lentokonesuihkuturbiinimoottori")));
    });
}

fn bench_plain(c: &mut Criterion) {
    c.bench_function("hyphenate_plain", |b| {
        b.iter(|| hyphenate_document(black_box(PARAGRAPH)));
    });
}

fn bench_markup(c: &mut Criterion) {
    let html = sample_html();
    c.bench_function("hyphenate_markup", |b| {
        b.iter(|| hyphenate_document(black_box(&html)));
    });
}

criterion_group!(benches, bench_word, bench_plain, bench_markup);
criterion_main!(benches);
