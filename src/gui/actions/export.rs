// src/gui/actions/export.rs
use crate::{file, gui::app::App};

pub fn export(app: &mut App) {
    // normalize out_path first (mutates app) before any &app borrows
    if app.state.gui.out_path_dirty {
        app.state.options.export.set_path(&app.state.gui.out_path_text);
        app.state.gui.out_path_text = app.state.options.export.out_path().to_string_lossy().into();
        logf!("Export: Out path set → {}", app.state.gui.out_path_text);
        app.state.gui.out_path_dirty = false;
    }

    let Some(svc) = app.service.as_ref() else {
        app.status("Nothing to export (catalog not loaded)");
        return;
    };

    let items = super::visible_items(svc);
    let msg = if items.is_empty() {
        logd!("Export: Clicked, but there's nothing to export");
        s!("Nothing to export")
    } else {
        match file::write_export(&app.state.options.export, &items) {
            Ok(path) => format!("Exported {} entries to {}", items.len(), path.display()),
            Err(e) => {
                loge!("Export: Error: {e}");
                format!("Export error: {e}")
            }
        }
    };
    app.status(msg);
}
