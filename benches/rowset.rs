use criterion::{black_box, criterion_group, criterion_main, Criterion};
use csv_rowset::{RowRange, RowSet};

fn structured_input(rows: usize) -> serde_json::Value {
    let elements: Vec<serde_json::Value> = (0..rows)
        .map(|i| {
            serde_json::json!({
                "id": i,
                "name": format!("row-{i}"),
                "score": (i % 97) as f64 / 3.0,
            })
        })
        .collect();
    serde_json::Value::Array(elements)
}

fn bench_rowset(c: &mut Criterion) {
    let input = structured_input(1_000);

    c.bench_function("parse_structured_1k", |b| {
        b.iter(|| {
            let mut rs = RowSet::default();
            rs.parse(black_box(input.clone())).unwrap();
            black_box(rs.row_count())
        })
    });

    let mut rs = RowSet::default();
    rs.parse(input).unwrap();

    c.bench_function("project_two_columns_500", |b| {
        b.iter(|| {
            rs.project(
                black_box(&["name".into(), "score".into()]),
                Some(RowRange::first(500)),
            )
            .unwrap()
        })
    });

    c.bench_function("sum_1k", |b| b.iter(|| rs.sum(black_box("score")).unwrap()));

    c.bench_function("to_csv_1k", |b| b.iter(|| rs.to_csv(&[], None).unwrap()));
}

criterion_group!(benches, bench_rowset);
criterion_main!(benches);
