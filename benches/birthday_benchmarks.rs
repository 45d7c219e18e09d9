//! Performance benchmarks for the weekly birthday report.
//!
//! These benchmarks measure:
//! - The weekly scan over books of different sizes
//! - Rendering a book to the on-disk JSON document

use chrono::{Duration, NaiveDate};
use contact_book::models::{AddressBook, Record};
use contact_book::repositories::JsonFileStore;
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use std::hint::black_box;

/// Build a book of `size` contacts with birthdays spread over the year.
fn create_test_book(size: usize) -> AddressBook {
    let start = NaiveDate::from_ymd_opt(1990, 1, 1).unwrap();
    (0..size)
        .map(|i| {
            let mut record = Record::new(format!("Contact{}", i));
            record.add_phone(&format!("{:010}", i)).unwrap();
            let birthday = start + Duration::days((i * 37 % 365) as i64);
            record
                .add_birthday(&birthday.format("%d.%m.%Y").to_string())
                .unwrap();
            record
        })
        .collect()
}

/// Benchmark the weekly scan with different book sizes.
fn bench_weekly_birthdays(c: &mut Criterion) {
    let today = NaiveDate::from_ymd_opt(2024, 6, 10).unwrap();
    let mut group = c.benchmark_group("weekly_birthdays");

    for size in [10, 100, 1_000, 10_000] {
        let book = create_test_book(size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &book, |b, book| {
            b.iter(|| black_box(book.weekly_birthdays(black_box(today))));
        });
    }

    group.finish();
}

/// Benchmark the JSON rendering used by `save`.
fn bench_to_json(c: &mut Criterion) {
    let store = JsonFileStore::default();
    let book = create_test_book(1_000);

    c.bench_function("to_json_1000", |b| {
        b.iter(|| black_box(store.to_json(black_box(&book)).unwrap()));
    });
}

criterion_group!(benches, bench_weekly_birthdays, bench_to_json);
criterion_main!(benches);
