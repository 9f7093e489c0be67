// src/gui/components/state_panel.rs
//
// Left state list. Clicking a state scopes the county column to it and shows
// its detail. Scoping is unavailable while a search is active.

use eframe::egui;
use crate::{gui::app::App, model::EntityType};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.heading("States");

    let Some(svc) = app.service.as_mut() else { return };
    let searching = svc.filter().is_searching();
    let scoped_name = svc.scope().map(|s| s.name.clone());

    ui.add_enabled_ui(!searching, |ui| {
        if ui.button("All counties").clicked() {
            svc.clear_scope();
            logf!("UI: Scope cleared");
        }
    });

    ui.separator();

    // Owned copy so the list can mutate the service on click
    let states: Vec<(String, String)> = svc
        .list_visible(EntityType::State)
        .into_iter()
        .map(|e| (e.id.clone(), e.name.clone()))
        .collect();

    let mut clicked: Option<String> = None;

    egui::ScrollArea::vertical()
        .id_salt("states_panel_scroll")
        .show(ui, |ui| {
            let w = ui.available_width();
            ui.set_min_width(w);

            ui.add_enabled_ui(!searching, |ui| {
                for (id, name) in &states {
                    let is_selected = scoped_name.as_deref() == Some(name.as_str());
                    if ui.selectable_label(is_selected, name.as_str()).clicked() {
                        clicked = Some(id.clone());
                    }
                }
            });
        });

    if let Some(id) = clicked {
        if svc.select_scope(&id) {
            logf!("UI: Scope → {id}");
        }
        svc.get_detail(&id);
        app.state.gui.selected_id = Some(id);
    }
}
