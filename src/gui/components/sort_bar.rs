// src/gui/components/sort_bar.rs
//
// Sort buttons, export format, Export / Copy.

use eframe::egui;
use crate::{
    config::options::ExportFormat,
    gui::{actions, app::App},
    query::SortKey::{self, *},
};

const SORTS: [(SortKey, bool, &str); 4] = [
    (Price, true, "Sort by Price ↑"),
    (Price, false, "Sort by Price ↓"),
    (Rating, true, "Sort by Rating ↑"),
    (Rating, false, "Sort by Rating ↓"),
];

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.horizontal(|ui| {
        for (key, ascending, label) in SORTS {
            if ui.button(label).clicked() {
                actions::sort(app, key, ascending);
            }
        }

        ui.separator();

        let export = &mut app.explorer.export;
        let prev_fmt = export.format;
        ui.label("Format:");
        ui.selectable_value(&mut export.format, ExportFormat::Csv, "CSV");
        ui.selectable_value(&mut export.format, ExportFormat::Tsv, "TSV");
        if export.format != prev_fmt {
            logf!("UI: Export format → {:?}", export.format);
        }

        if ui.checkbox(&mut export.include_headers, "Include headers").changed() {
            logf!("UI: Include_headers → {}", export.include_headers);
        }

        if ui.button("Export 📄").clicked() {
            actions::export(app);
        }
        if ui.button("Copy").on_hover_text("Copy the current view").clicked() {
            actions::copy(app, ui.ctx());
        }
    });
}
