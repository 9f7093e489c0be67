// src/filter.rs
//
// Two-axis visibility filter over the master index.
//
// - Search text: trimmed + lower-cased; matches name or slug of any category.
// - Scope: one selected state; restricts counties only.
//
// The axes are exclusive: a non-empty search clears the scope. While searching,
// the scope is ignored anyway, and the view never offers state selection then.
//
// Fail-open rules: an unresolved state abbreviation, or a county name without
// a ", " separator, leaves the county visible.

use crate::{
    abbr::state_abbr,
    core::text::{contains_folded, normalize_search},
    model::{Entity, EntityType},
};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FilterScope {
    pub name: String,
    /// None when the state name is not in the abbreviation table.
    pub abbr: Option<&'static str>,
}

impl FilterScope {
    pub fn new(name: &str, abbr: Option<&'static str>) -> Self {
        Self { name: s!(name), abbr }
    }

    /// Scope for a state entity, abbreviation resolved from its name.
    pub fn for_state(state: &Entity) -> Self {
        Self::new(&state.name, state_abbr(&state.name))
    }
}

#[derive(Clone, Debug, Default)]
pub struct FilterEngine {
    search_text: String,
    scope: Option<FilterScope>,
}

impl FilterEngine {
    pub fn new() -> Self { Self::default() }

    pub fn search_text(&self) -> &str { &self.search_text }
    pub fn scope(&self) -> Option<&FilterScope> { self.scope.as_ref() }
    pub fn is_searching(&self) -> bool { !self.search_text.is_empty() }

    pub fn set_search(&mut self, text: &str) {
        self.search_text = normalize_search(text);
        if self.is_searching() {
            self.scope = None;
        }
    }

    /// Only states can scope; anything else is ignored (returns false).
    /// Does not touch the search text.
    pub fn select_scope(&mut self, state: &Entity) -> bool {
        if state.kind != EntityType::State {
            logd!("Filter: Ignoring scope request for {} {}", state.kind, state.id);
            return false;
        }
        let scope = FilterScope::for_state(state);
        if scope.abbr.is_none() {
            logw!("Filter: No abbreviation for {:?}, counties stay unfiltered", state.name);
        }
        self.scope = Some(scope);
        true
    }

    /// Direct scope assignment, bypassing name resolution.
    pub fn set_scope(&mut self, scope: Option<FilterScope>) {
        self.scope = scope;
    }

    pub fn clear_scope(&mut self) {
        self.scope = None;
    }

    pub fn is_visible(&self, entity: &Entity) -> bool {
        if self.is_searching() {
            return contains_folded(&entity.name, &self.search_text)
                || contains_folded(&entity.slug, &self.search_text);
        }

        match entity.kind {
            EntityType::State | EntityType::University => true,
            EntityType::County => {
                let Some(abbr) = self.scope.as_ref().and_then(|s| s.abbr) else {
                    return true;
                };
                match county_state_suffix(&entity.name) {
                    Some(suffix) => suffix == abbr,
                    None => true,
                }
            }
        }
    }
}

/// "Orange, CA" -> Some("CA"); the token after the first ", ".
pub fn county_state_suffix(name: &str) -> Option<&str> {
    name.split_once(", ").map(|(_, suffix)| suffix)
}
