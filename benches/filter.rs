// benches/filter.rs
use criterion::{Criterion, black_box, criterion_group, criterion_main};

use dirview::filter::{self, FilterState};
use dirview::model::DisplayRow;

fn synthetic_rows(n: usize) -> Vec<DisplayRow> {
    (0..n)
        .map(|i| DisplayRow {
            name: format!("Student {i}"),
            grade: format!("{}", i % 8 + 1),
            email: format!("student{i}@school.example"),
            address: Some(format!("{} Main St", i)),
            ..DisplayRow::default()
        })
        .collect()
}

fn bench_filter(c: &mut Criterion) {
    let rows = synthetic_rows(10_000);

    let all = FilterState { grade: "All".into(), search: String::new() };
    c.bench_function("filter_pass_through", |b| {
        b.iter(|| {
            let view = filter::apply(black_box(&rows), black_box(&all));
            black_box(view.len())
        })
    });

    let grade = FilterState { grade: "3".into(), search: String::new() };
    c.bench_function("filter_by_grade", |b| {
        b.iter(|| {
            let view = filter::apply(black_box(&rows), black_box(&grade));
            black_box(view.len())
        })
    });

    let search = FilterState { grade: "All".into(), search: "student99".into() };
    c.bench_function("filter_by_search", |b| {
        b.iter(|| {
            let view = filter::apply(black_box(&rows), black_box(&search));
            black_box(view.len())
        })
    });

    c.bench_function("sort_by_grade", |b| {
        b.iter(|| {
            let mut view = rows.clone();
            filter::sort_rows(black_box(&mut view), 1, true);
            black_box(view.len())
        })
    });
}

criterion_group!(benches, bench_filter);
criterion_main!(benches);
