// src/gui/actions/mod.rs
//
// Folder module facade: re-export public entrypoints.

mod copy;
mod export;

pub use copy::copy;
pub use export::export;

use crate::{model::EntityType, service::{CatalogService, Resolved}};

/// Everything currently visible, column by column, with detail attached.
pub(super) fn visible_items(svc: &CatalogService) -> Vec<Resolved<'_>> {
    EntityType::ALL
        .iter()
        .flat_map(|&k| svc.list_visible(k))
        .filter_map(|e| svc.lookup(&e.id))
        .collect()
}
