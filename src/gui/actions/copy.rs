// src/gui/actions/copy.rs
use eframe::egui;
use crate::gui::app::App;

pub fn copy(app: &mut App, ui_ctx: &egui::Context) {
    let rows = app.explorer.view_len();
    if rows == 0 {
        app.status("Nothing to copy");
        logd!("Copy: Clicked, but the view is empty");
        return;
    }

    let txt = app.explorer.copy_text();
    logf!("Copy: rows={}, format={:?}", rows, app.explorer.export.format);

    ui_ctx.copy_text(txt);
    app.status(format!("Copied {rows} products to clipboard"));
}
