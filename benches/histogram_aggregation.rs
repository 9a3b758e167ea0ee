use std::hint::black_box;

use chrono::Utc;
use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use interview_catalog::models::{Difficulty, InterviewRecord, JobType, Platform, Source};
use interview_catalog::stats::{CatalogSummary, Histogram, HistogramScope, aggregate};

fn generate_records(num_records: usize) -> Vec<InterviewRecord> {
    let date = Utc::now();
    (0..num_records)
        .map(|i| InterviewRecord {
            id: format!("q-{}", i),
            question: format!("Question {}", i),
            company: format!("Company {}", i % 40),
            post: None,
            category: "开发".to_string(),
            subcategory: "后端".to_string(),
            job_type: JobType::Social,
            difficulty: Difficulty::new((i * 7 % 9) as i64 + 1).unwrap(),
            asked_count: 0,
            sources: vec![Source::new(Platform::Zhihu, "")],
            date,
        })
        .collect()
}

fn bench_histogram_aggregation(c: &mut Criterion) {
    let mut group = c.benchmark_group("histogram_aggregation");

    for size in [1_000, 5_000, 20_000].iter() {
        let records = generate_records(*size);

        group.throughput(Throughput::Elements(*size as u64));
        group.bench_with_input(BenchmarkId::new("aggregate", size), size, |b, _| {
            b.iter(|| aggregate(black_box(&records)));
        });
        group.bench_with_input(BenchmarkId::new("histogram", size), size, |b, _| {
            b.iter(|| Histogram::from_records(black_box(&records), HistogramScope::Catalog));
        });
        group.bench_with_input(BenchmarkId::new("summary", size), size, |b, _| {
            b.iter(|| CatalogSummary::from_records(black_box(&records)));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_histogram_aggregation);
criterion_main!(benches);
