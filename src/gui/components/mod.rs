// src/gui/components/mod.rs
pub mod action_bar;
pub mod detail_panel;
pub mod entity_lists;
pub mod search_bar;
pub mod state_panel;
