// tests/filter_engine.rs
//
// Visibility rules of FilterEngine over a small hand-built index.
//
use datausa_catalog::filter::{FilterEngine, FilterScope};
use datausa_catalog::model::{Entity, EntityType};

fn entity(id: &str, kind: EntityType, name: &str, slug: &str) -> Entity {
    Entity {
        id: id.to_string(),
        kind,
        name: name.to_string(),
        slug: slug.to_string(),
        url: String::new(),
    }
}

fn texas() -> Entity { entity("04000US48", EntityType::State, "Texas", "texas") }
fn guam() -> Entity { entity("04000US66", EntityType::State, "Guam", "guam") }
fn atlantis() -> Entity { entity("04000US99", EntityType::State, "Atlantis", "atlantis") }
fn travis() -> Entity { entity("05000US48453", EntityType::County, "Travis County, TX", "travis-county-tx") }
fn orange() -> Entity { entity("05000US06059", EntityType::County, "Orange County, CA", "orange-county-ca") }
fn unsuffixed() -> Entity { entity("05000US00000", EntityType::County, "Unincorporated Area", "unincorporated") }
fn ut() -> Entity { entity("228778", EntityType::University, "University of Texas at Austin", "ut-austin") }

#[test]
fn everything_visible_by_default() {
    let f = FilterEngine::new();
    for e in [texas(), travis(), orange(), unsuffixed(), ut()] {
        assert!(f.is_visible(&e), "{} should be visible", e.name);
    }
}

#[test]
fn scope_restricts_counties_only() {
    let mut f = FilterEngine::new();
    assert!(f.select_scope(&texas()));
    assert_eq!(f.scope(), Some(&FilterScope::new("Texas", Some("TX"))));

    assert!(f.is_visible(&travis()));
    assert!(!f.is_visible(&orange()));
    // states and universities ignore the scope
    assert!(f.is_visible(&texas()));
    assert!(f.is_visible(&guam()));
    assert!(f.is_visible(&ut()));
}

#[test]
fn territories_resolve_to_postal_codes() {
    let mut f = FilterEngine::new();
    f.select_scope(&guam());
    assert_eq!(f.scope().and_then(|s| s.abbr), Some("GU"));
    assert!(!f.is_visible(&travis()));
    assert!(f.is_visible(&entity("05000US66010", EntityType::County, "Guam, GU", "guam-gu")));
}

#[test]
fn unknown_state_and_unsuffixed_county_fail_open() {
    let mut f = FilterEngine::new();
    f.select_scope(&atlantis());
    assert_eq!(f.scope().map(|s| s.abbr), Some(None));
    assert!(f.is_visible(&travis()));
    assert!(f.is_visible(&orange()));

    f.select_scope(&texas());
    assert!(f.is_visible(&unsuffixed()));
}

#[test]
fn only_states_can_scope() {
    let mut f = FilterEngine::new();
    assert!(!f.select_scope(&travis()));
    assert!(!f.select_scope(&ut()));
    assert!(f.scope().is_none());
}

#[test]
fn search_matches_name_or_slug_case_insensitively() {
    let mut f = FilterEngine::new();
    f.set_search("  TEXAS ");
    assert_eq!(f.search_text(), "texas");
    assert!(f.is_visible(&texas()));
    assert!(f.is_visible(&ut()));
    assert!(!f.is_visible(&travis()));
    assert!(!f.is_visible(&orange()));

    // slug only
    f.set_search("ut-aus");
    assert!(f.is_visible(&ut()));
    assert!(!f.is_visible(&texas()));
}

#[test]
fn search_clears_scope_and_ignores_it() {
    let mut f = FilterEngine::new();
    f.select_scope(&texas());
    f.set_search("orange");
    assert!(f.scope().is_none());
    assert!(f.is_visible(&orange()));

    // whitespace-only search is no search; scope stays cleared
    f.set_search("   ");
    assert!(!f.is_searching());
    assert!(f.is_visible(&travis()) && f.is_visible(&orange()));
}

#[test]
fn clearing_scope_restores_counties() {
    let mut f = FilterEngine::new();
    f.select_scope(&texas());
    assert!(!f.is_visible(&orange()));
    f.clear_scope();
    assert!(f.is_visible(&orange()));
}
