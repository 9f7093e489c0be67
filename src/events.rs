// src/events.rs
use crate::model::{DetailRecord, Entity, EntityType};

/// Notifications from the catalog core to whatever renders it.
///
/// Startup fires `on_acquisition_starting` at most once and `on_ready` exactly
/// once (unless the master index fails to load, in which case nothing fires).
/// Filter changes fire `on_visible_list_changed` once per category.
pub trait ViewEvents {
    fn on_ready(&mut self) {}
    fn on_acquisition_starting(&mut self) {}
    fn on_visible_list_changed(&mut self, _kind: EntityType) {}
    fn on_detail_resolved(&mut self, _id: &str, _entity: &Entity, _detail: Option<&DetailRecord>) {}
}

pub struct NullEvents;
impl ViewEvents for NullEvents {}
