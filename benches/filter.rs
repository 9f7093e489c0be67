// benches/filter.rs
use criterion::{criterion_group, criterion_main, Criterion, black_box};

use datausa_catalog::{
    filter::FilterEngine,
    index::CatalogIndex,
    model::{Entity, EntityType},
};

const STATES: &[(&str, &str)] = &[
    ("Texas", "TX"), ("California", "CA"), ("New York", "NY"), ("Florida", "FL"), ("Ohio", "OH"),
];

// Roughly DataUSA-sized: a few states, thousands of counties and universities.
fn synthetic_index() -> CatalogIndex {
    let mut out = Vec::new();
    for (i, (name, _)) in STATES.iter().enumerate() {
        out.push(entity(format!("04000US{i:02}"), EntityType::State, name.to_string()));
    }
    for i in 0..3_200 {
        let (_, abbr) = STATES[i % STATES.len()];
        out.push(entity(format!("05000US{i:05}"), EntityType::County, format!("County {i}, {abbr}")));
    }
    for i in 0..6_000 {
        out.push(entity(format!("{}", 100_000 + i), EntityType::University, format!("University {i}")));
    }
    out.into_iter().collect()
}

fn entity(id: String, kind: EntityType, name: String) -> Entity {
    let slug = name.to_lowercase().replace([' ', ','], "-");
    Entity { id, kind, name, slug, url: String::new() }
}

fn bench_filter(c: &mut Criterion) {
    let idx = synthetic_index();
    let texas = idx.find_state("Texas").cloned().expect("synthetic Texas");

    c.bench_function("visible_unfiltered", |b| {
        let f = FilterEngine::new();
        b.iter(|| black_box(idx.iter().filter(|e| f.is_visible(e)).count()))
    });

    c.bench_function("visible_scoped", |b| {
        let mut f = FilterEngine::new();
        f.select_scope(&texas);
        b.iter(|| black_box(idx.iter().filter(|e| f.is_visible(e)).count()))
    });

    c.bench_function("visible_search", |b| {
        let mut f = FilterEngine::new();
        f.set_search(black_box("County 31"));
        b.iter(|| black_box(idx.iter().filter(|e| f.is_visible(e)).count()))
    });
}

criterion_group!(benches, bench_filter);
criterion_main!(benches);
