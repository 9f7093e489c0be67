// tests/catalog_sources.rs
//
// Loading the master index and the detail cache from files on disk.
//
use std::fs;

use datausa_catalog::detail::DetailCache;
use datausa_catalog::index::CatalogIndex;
use datausa_catalog::model::{DetailRecord, EntityType};
use datausa_catalog::source::Source;
use datausa_catalog::LoadError;
use tempfile::tempdir;

const MASTER: &str = r#"{
    "04000US48": {"id": "04000US48", "name": "Texas", "type": "State", "slug": "texas", "url": "https://datausa.io/profile/geo/texas"},
    "05000US48453": {"name": "Travis County, TX", "type": "County", "slug": "travis-county-tx"},
    "31000US12420": {"name": "Austin Metro Area", "type": "Msa", "slug": "austin-metro"},
    "04000US06": {"name": "California", "type": "State", "slug": "california"},
    "228778": {"name": "University of Texas at Austin", "type": "University", "slug": "ut-austin"},
    "nokind": {"name": "Mystery"}
}"#;

fn write(dir: &std::path::Path, name: &str, text: &str) -> Source {
    let path = dir.join(name);
    fs::write(&path, text).unwrap();
    Source::File(path)
}

#[test]
fn index_keeps_document_order_and_skips_unknown_types() {
    let dir = tempdir().unwrap();
    let idx = CatalogIndex::load(&write(dir.path(), "data-master.json", MASTER)).unwrap();

    assert_eq!(idx.len(), 4);
    let states: Vec<&str> = idx.by_type(EntityType::State).map(|e| e.name.as_str()).collect();
    assert_eq!(states, ["Texas", "California"]);
    assert_eq!(idx.count(EntityType::County), 1);
    assert!(idx.get("31000US12420").is_none());
    assert!(idx.get("nokind").is_none());
    assert_eq!(idx.find_state("California").map(|e| e.id.as_str()), Some("04000US06"));
}

#[test]
fn missing_or_malformed_master_is_an_error() {
    let dir = tempdir().unwrap();
    let missing = Source::File(dir.path().join("nope.json"));
    assert!(matches!(CatalogIndex::load(&missing), Err(LoadError::Io { .. })));

    let broken = write(dir.path(), "broken.json", "{\"a\": ");
    assert!(matches!(CatalogIndex::load(&broken), Err(LoadError::Parse { .. })));

    let list = write(dir.path(), "list.json", "[1, 2, 3]");
    assert!(matches!(CatalogIndex::load(&list), Err(LoadError::Shape { .. })));
}

#[test]
fn detail_cache_reads_tagged_records() {
    let dir = tempdir().unwrap();
    let src = write(
        dir.path(),
        "data.json",
        r#"{
            "04000US48": {"type": "State", "population": "30.5M", "median_age": 35.6},
            "228778": {"type": "University", "tuition": "$11,678"},
            "bad": {"type": "Metro"},
            "worse": 42
        }"#,
    );
    let cache = DetailCache::load(&src);

    assert!(cache.is_populated());
    assert_eq!(cache.len(), 2);
    assert_eq!(cache.lookup("04000US48").map(DetailRecord::kind), Some(EntityType::State));
    assert!(cache.lookup("bad").is_none());
    assert!(cache.lookup("worse").is_none());
}

#[test]
fn unusable_detail_document_is_just_empty() {
    let dir = tempdir().unwrap();
    assert!(DetailCache::load(&Source::File(dir.path().join("data.json"))).is_empty());
    assert!(DetailCache::load(&write(dir.path(), "a.json", "not json")).is_empty());
    assert!(DetailCache::load(&write(dir.path(), "b.json", "[]")).is_empty());
    assert!(DetailCache::load(&write(dir.path(), "c.json", "{}")).is_empty());
}
