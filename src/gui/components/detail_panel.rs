// src/gui/components/detail_panel.rs
//
// Detail view for the selected entity. Purely a view; absent statistics
// render as "N/A".

use eframe::egui;
use egui_extras::{Column, TableBuilder};

use crate::{gui::app::App, model::display_or_na};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.heading("Details");
    ui.separator();

    let (Some(svc), Some(id)) = (app.service.as_ref(), app.state.gui.selected_id.as_deref()) else {
        ui.weak("Select an entry to see its details.");
        return;
    };
    let Some(item) = svc.lookup(id) else {
        ui.weak("Select an entry to see its details.");
        return;
    };

    let e = item.entity;
    ui.label(egui::RichText::new(&e.name).strong().size(18.0));
    ui.label(format!("Type: {}", e.kind));
    ui.add_space(6.0);

    match item.detail {
        Some(detail) => {
            let fields = detail.fields();
            TableBuilder::new(ui)
                .id_salt("detail_table")
                .striped(true)
                .column(Column::auto().at_least(140.0))
                .column(Column::remainder())
                .body(|mut body| {
                    for f in &fields {
                        body.row(20.0, |mut row| {
                            row.col(|ui| { ui.label(f.label); });
                            row.col(|ui| { ui.label(display_or_na(f.value)); });
                        });
                    }
                });
        }
        None => {
            ui.label("No details found for this item.");
        }
    }

    if !e.url.is_empty() {
        ui.add_space(6.0);
        ui.hyperlink_to("Open on DataUSA", &e.url);
    }
}
