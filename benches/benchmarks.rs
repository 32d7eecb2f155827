use chrono::{Days, NaiveDate};
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rusty_xe::engine::TrendEngine;
use rusty_xe::trend::{invert, order, slopes};
use rusty_xe::types::{observation, RateSeries};

fn year_of_rates() -> RateSeries {
    let start = NaiveDate::from_ymd_opt(2019, 1, 1).unwrap();
    (0..365u64)
        .map(|i| {
            let date = start + Days::new(i);
            let wobble = (i as f64 * 0.37).sin() * 0.01;
            (
                date.format("%Y-%m-%d").to_string(),
                observation([
                    ("EUR", 1.16 + wobble - i as f64 * 1e-5),
                    ("USD", 1.10 + wobble),
                    ("GBP", 0.85 - wobble),
                ]),
            )
        })
        .collect()
}

fn benchmark_order(c: &mut Criterion) {
    let series = year_of_rates();
    c.bench_function("order_365_days", |b| {
        b.iter(|| order(black_box(&series)));
    });
}

fn benchmark_recommend(c: &mut Criterion) {
    let series = year_of_rates();
    let engine = TrendEngine::default();
    c.bench_function("recommend_365_days", |b| {
        b.iter(|| engine.recommend(black_box(&series), "EUR"));
    });
}

fn benchmark_slopes(c: &mut Criterion) {
    let sequence = order(&year_of_rates());
    c.bench_function("slopes_3_currencies", |b| {
        b.iter(|| slopes(black_box(&sequence), &["EUR", "USD", "GBP"]));
    });
}

fn benchmark_invert(c: &mut Criterion) {
    let obs = observation([("EUR", 1.16), ("USD", 1.10), ("GBP", 0.85)]);
    c.bench_function("invert_observation", |b| {
        b.iter(|| invert(black_box(&obs)));
    });
}

criterion_group!(
    benches,
    benchmark_order,
    benchmark_recommend,
    benchmark_slopes,
    benchmark_invert
);
criterion_main!(benches);
