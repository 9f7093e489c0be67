// src/gui/actions/copy.rs
use eframe::egui;
use crate::{csv::to_export_string, gui::app::App};

pub fn copy(app: &mut App, ui_ctx: &egui::Context) {
    let Some(svc) = app.service.as_ref() else {
        app.status("Nothing to copy (catalog not loaded)");
        return;
    };

    let items = super::visible_items(svc);
    if items.is_empty() {
        logd!("Copy: Clicked, but there's nothing to copy");
        app.status("Nothing to copy");
        return;
    }

    let txt = to_export_string(&items, app.state.options.export.include_headers, '\t');
    logf!("Copy: rows={}", items.len());
    ui_ctx.copy_text(txt);
    app.status(format!("Copied {} entries to clipboard", items.len()));
}
