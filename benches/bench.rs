// Criterion benchmarks for Car Catalog

use car_catalog::core::{
    categorize_transmission, Catalog, FilterCriteria, HorsepowerFilter, HorsepowerRange,
};
use car_catalog::models::{CarModel, Category, Manufacturer, Snapshot, Specifications};
use car_catalog::services::PreferenceTable;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

const TRANSMISSIONS: &[&str] = &["6-Speed Manual", "8-Speed Automatic", "eCVT", "Direct Drive"];

fn create_model(id: usize) -> CarModel {
    CarModel {
        id: id as i64,
        name: format!("Model {}", id),
        manufacturer_id: (id % 5) as i64,
        category_id: (id % 3) as i64,
        year: 2000 + (id % 25) as i32,
        specifications: Specifications {
            engine: "2.0L".to_string(),
            horsepower: 80 + (id % 500) as i32,
            transmission: TRANSMISSIONS[id % TRANSMISSIONS.len()].to_string(),
            drivetrain: if id % 2 == 0 { "FWD" } else { "AWD" }.to_string(),
        },
        image: String::new(),
    }
}

fn create_snapshot(model_count: usize) -> Snapshot {
    Snapshot {
        manufacturers: (0..5)
            .map(|i| Manufacturer {
                id: i,
                name: format!("Maker {}", i),
                country: "Nowhere".to_string(),
                founding_year: 1900 + i as i32,
            })
            .collect(),
        categories: (0..3)
            .map(|i| Category {
                id: i,
                name: format!("Category {}", i),
            })
            .collect(),
        car_models: (0..model_count).map(create_model).collect(),
    }
}

fn create_table(model_count: usize) -> PreferenceTable {
    let mut table = PreferenceTable::new();
    for i in (0..model_count).step_by(7) {
        table.increment(&format!("Model {}", i), (i % 11) as f64 * 0.5);
    }
    table
}

fn bench_categorize_transmission(c: &mut Criterion) {
    c.bench_function("categorize_transmission", |b| {
        b.iter(|| {
            for raw in TRANSMISSIONS {
                black_box(categorize_transmission(black_box(raw)));
            }
        });
    });
}

fn bench_filter(c: &mut Criterion) {
    let catalog = Catalog::with_default_weights();
    let criteria = FilterCriteria {
        manufacturer: Some("Maker 2".to_string()),
        transmission: Some("Manual".to_string()),
        horsepower: HorsepowerFilter::Range(HorsepowerRange { min: 100, max: 400 }),
        ..FilterCriteria::default()
    };

    let mut group = c.benchmark_group("filter");

    for model_count in [10, 100, 1000].iter() {
        let snapshot = create_snapshot(*model_count);

        group.bench_with_input(
            BenchmarkId::new("filter", model_count),
            model_count,
            |b, _| {
                b.iter(|| {
                    let mut table = PreferenceTable::new();
                    catalog.filter(black_box(snapshot.clone()), black_box(&criteria), &mut table)
                });
            },
        );
    }

    group.finish();
}

fn bench_rank(c: &mut Criterion) {
    let catalog = Catalog::with_default_weights();
    let mut group = c.benchmark_group("rank");

    for model_count in [10, 100, 1000].iter() {
        let snapshot = create_snapshot(*model_count);
        let table = create_table(*model_count);

        group.bench_with_input(
            BenchmarkId::new("rank", model_count),
            model_count,
            |b, _| {
                b.iter(|| {
                    let mut snapshot = snapshot.clone();
                    let mut table = table.clone();
                    catalog.rank(&mut snapshot, &mut table);
                    black_box(snapshot)
                });
            },
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_categorize_transmission,
    bench_filter,
    bench_rank
);

criterion_main!(benches);
