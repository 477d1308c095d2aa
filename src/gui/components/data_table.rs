// src/gui/components/data_table.rs
//
// Draws the current view. Purely a view: reads the explorer, never mutates.

use eframe::egui::{self, Align, Layout, RichText, TextWrapMode};
use egui_extras::{Column, TableBuilder};
use crate::gui::app::App;

const HEADERS: [&str; 4] = ["Name", "Price", "Rating", "Category"];
// Name and Category are text; Price and Rating are centred like numbers.
const NUMERIC: [bool; 4] = [false, true, true, false];

pub fn draw(ui: &mut egui::Ui, app: &App) {
    let explorer = &app.explorer;
    let nrows = explorer.view_len();

    if nrows == 0 {
        ui.centered_and_justified(|ui| {
            ui.label(RichText::new("No products match the current filter.").italics());
        });
        return;
    }

    {
        let s = &mut ui.style_mut().spacing.scroll;
        s.floating = false;           // reserve space instead of overlaying content
        s.bar_width = 10.0;
        s.handle_min_length = 48.0;
    }

    let max_h = ui.available_height();
    let mut table = TableBuilder::new(ui)
        .striped(true)
        .min_scrolled_height(0.0)
        .max_scroll_height(max_h);
    for _ in HEADERS {
        table = table.column(Column::remainder().at_least(80.0).clip(true));
    }

    table
        .header(24.0, |mut header| {
            for (ci, title) in HEADERS.iter().enumerate() {
                header.col(|ui| {
                    cell(ui, NUMERIC[ci], RichText::new(*title).strong());
                });
            }
        })
        .body(|body| {
            body.rows(20.0, nrows, |mut row| {
                let Some(p) = explorer.view_row(row.index()) else { return };
                let cells = [
                    p.name.clone(),
                    p.price_label(),
                    p.rating.to_string(),
                    p.category.clone(),
                ];
                for (ci, text) in cells.into_iter().enumerate() {
                    row.col(|ui| {
                        cell(ui, NUMERIC[ci], RichText::new(text));
                    });
                }
            });
        });
}

fn cell(ui: &mut egui::Ui, numeric: bool, text: RichText) {
    ui.scope(|ui| {
        ui.style_mut().wrap_mode = Some(TextWrapMode::Truncate);
        if numeric {
            ui.centered_and_justified(|ui| { ui.label(text); });
        } else {
            ui.with_layout(Layout::left_to_right(Align::Center), |ui| { ui.label(text); });
        }
    });
}
