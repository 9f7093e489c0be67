// src/gui/components/action_bar.rs
//
// Copy / Export of the visible entities, plus the export path and format.

use eframe::egui;
use crate::{config::options::ExportFormat, gui::{actions, app::App}};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.horizontal(|ui| {
        if ui.button("Copy").on_hover_text("Copy visible entries as TSV").clicked() {
            actions::copy(app, ui.ctx());
        }

        ui.separator();

        let resp = ui.add(
            egui::TextEdit::singleline(&mut app.state.gui.out_path_text)
                .desired_width(240.0),
        );
        if resp.changed() {
            app.state.gui.out_path_dirty = true;
        }

        let export = &mut app.state.options.export;
        let before = export.format;
        ui.radio_value(&mut export.format, ExportFormat::Csv, "CSV");
        ui.radio_value(&mut export.format, ExportFormat::Tsv, "TSV");
        ui.checkbox(&mut export.include_headers, "Headers");

        // Keep the text box extension in step with the format unless the user is editing it
        if export.format != before && !app.state.gui.out_path_dirty {
            app.state.gui.out_path_text = export.out_path().to_string_lossy().into();
        }

        if ui.button("Export").clicked() {
            actions::export(app);
        }
    });
}
