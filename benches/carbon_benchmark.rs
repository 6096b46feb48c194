use chrono::NaiveDate;
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use eco_tracker::models::{ActivityRecord, Category, EmissionsSummary};
use eco_tracker::services::CarbonCalculator;

fn benchmark_compute(c: &mut Criterion) {
    let calculator = CarbonCalculator::default();

    let mut group = c.benchmark_group("compute");

    group.bench_function("keyword_match", |b| {
        b.iter(|| {
            calculator.compute(
                black_box(Category::Food),
                black_box(Some("Grilled Chicken Salad")),
                black_box(0.4),
            )
        })
    });

    group.bench_function("category_default", |b| {
        b.iter(|| {
            calculator.compute(
                black_box(Category::Transport),
                black_box(Some("Electric scooter to the office and back")),
                black_box(12.0),
            )
        })
    });

    group.finish();
}

fn benchmark_aggregate(c: &mut Criterion) {
    // A full page of history, mixing emissions and credits
    let date = NaiveDate::from_ymd_opt(2024, 1, 1).expect("valid date");
    let records: Vec<ActivityRecord> = (0..100)
        .map(|i| {
            let category = Category::ALL[i % Category::ALL.len()];
            ActivityRecord {
                id: format!("{:012}", i),
                date,
                category,
                detail: String::new(),
                amount: i as f64,
                kg: if category == Category::Recycling {
                    -0.015 * i as f64
                } else {
                    i as f64
                },
            }
        })
        .collect();

    c.bench_function("aggregate_100_records", |b| {
        b.iter(|| EmissionsSummary::from_records(black_box(&records)))
    });
}

criterion_group!(benches, benchmark_compute, benchmark_aggregate);
criterion_main!(benches);
