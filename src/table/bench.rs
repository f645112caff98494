use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use tabstore::catalog::Database;
use tabstore::table::{Row, TableBuilder};
use tabstore::types::StoreConfig;

fn build_rows(count: usize) -> Vec<Row> {
    (0..count)
        .map(|i| {
            Row::new()
                .with("id", i.to_string())
                .with("name", format!("user_{}", i))
                .with("email", format!("user_{}@example.com", i))
        })
        .collect()
}

// Benchmark rendering tables of increasing size
pub fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render");

    for &count in &[100usize, 1_000, 10_000] {
        let mut table = TableBuilder::new("users")
            .columns(["id", "name", "email"])
            .build();
        for row in build_rows(count) {
            table.append_row(row);
        }

        group.bench_with_input(BenchmarkId::from_parameter(count), &table, |b, table| {
            b.iter(|| {
                let rendering = table.render().unwrap();
                black_box(rendering.to_text("\t"))
            });
        });
    }

    group.finish();
}

// Benchmark inserting rows through the database under both row policies
pub fn bench_add_row(c: &mut Criterion) {
    let mut group = c.benchmark_group("add_row");
    let rows = build_rows(1_000);

    for strict in [false, true] {
        let label = if strict { "strict" } else { "permissive" };
        group.bench_function(label, |b| {
            b.iter(|| {
                let mut config = StoreConfig::default();
                if strict {
                    config.row_policy = tabstore::types::RowPolicy::Strict;
                }
                let mut db = Database::new(config);
                db.create_table(
                    "users",
                    vec!["id".to_string(), "name".to_string(), "email".to_string()],
                )
                .unwrap();
                for row in &rows {
                    db.add_row("users", row.clone()).unwrap();
                }
                black_box(db.len())
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_render, bench_add_row);
criterion_main!(benches);
