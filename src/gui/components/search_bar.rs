// src/gui/components/search_bar.rs
//
// Search box + current county scope. Typing a non-empty search drops the scope.

use eframe::egui;
use crate::gui::app::App;

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let Some(svc) = app.service.as_mut() else { return };

    ui.horizontal(|ui| {
        ui.label("Search");
        let resp = ui.add(
            egui::TextEdit::singleline(&mut app.state.gui.search_text)
                .hint_text("name or slug")
                .desired_width(280.0),
        );
        if resp.changed() {
            svc.set_search(&app.state.gui.search_text);
        }

        if !app.state.gui.search_text.is_empty() && ui.small_button("Clear").clicked() {
            app.state.gui.search_text.clear();
            svc.set_search("");
        }

        let scope_text = svc.scope().map(|sc| match sc.abbr {
            Some(abbr) => format!("Counties in {} ({abbr})", sc.name),
            None => format!("{}: no abbreviation, showing all counties", sc.name),
        });

        if let Some(text) = scope_text {
            ui.separator();
            ui.label(text);
            if ui.small_button("✕").on_hover_text("Show all counties").clicked() {
                svc.clear_scope();
                logf!("UI: Scope cleared");
            }
        }
    });
}
