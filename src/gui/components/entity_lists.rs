// src/gui/components/entity_lists.rs
//
// Three columns (states, counties, universities) of the currently visible
// entities. Clicking a name opens it in the detail panel.

use eframe::egui;
use crate::{gui::app::App, model::EntityType};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let Some(svc) = app.service.as_mut() else { return };

    // Owned rows per column; the service is mutated after drawing
    let columns: Vec<(EntityType, Vec<(String, String)>)> = EntityType::ALL
        .iter()
        .map(|&kind| {
            let rows = svc
                .list_visible(kind)
                .into_iter()
                .map(|e| (e.id.clone(), e.name.clone()))
                .collect();
            (kind, rows)
        })
        .collect();

    let selected = app.state.gui.selected_id.clone();
    let mut clicked: Option<String> = None;
    let row_h = ui.spacing().interact_size.y;

    ui.columns(columns.len(), |cols| {
        for (ui, (kind, rows)) in cols.iter_mut().zip(&columns) {
            ui.strong(format!("{} ({})", kind.plural(), rows.len()));
            ui.separator();

            if rows.is_empty() {
                ui.weak("Nothing matches");
                continue;
            }

            egui::ScrollArea::vertical()
                .id_salt(("entity_list", kind.label()))
                .auto_shrink([false, false])
                .show_rows(ui, row_h, rows.len(), |ui, range| {
                    for (id, name) in &rows[range] {
                        let is_selected = selected.as_deref() == Some(id.as_str());
                        if ui.selectable_label(is_selected, name.as_str()).clicked() {
                            clicked = Some(id.clone());
                        }
                    }
                });
        }
    });

    if let Some(id) = clicked {
        svc.get_detail(&id);
        app.state.gui.selected_id = Some(id);
    }
}
