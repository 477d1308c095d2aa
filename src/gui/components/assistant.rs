// src/gui/components/assistant.rs
//
// Robo-Assistant button + status line, and the message box shared by the
// deal of the day, assistant tips and export results.

use eframe::egui::{self, Color32, RichText};
use crate::gui::{actions, app::App};

const BLUE: Color32 = Color32::from_rgb(0x21, 0x96, 0xF3);

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.add_space(6.0);
    ui.horizontal(|ui| {
        let robo = egui::Button::new(
            RichText::new("🤖 Ask Robo-Assistant").color(Color32::WHITE).strong().size(15.0),
        )
        .fill(BLUE);
        if ui.add(robo).clicked() {
            actions::assistant(app);
        }

        ui.separator();
        ui.label(app.status.as_str());
    });
    ui.add_space(6.0);
}

pub fn draw_popup(ctx: &egui::Context, app: &mut App) {
    let Some(popup) = app.popup.as_ref() else { return };

    let mut open = true;
    let mut ok = false;
    egui::Window::new(popup.title.as_str())
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .open(&mut open)
        .show(ctx, |ui| {
            ui.add_space(4.0);
            ui.label(RichText::new(popup.body.as_str()).size(15.0));
            ui.add_space(8.0);
            ui.vertical_centered(|ui| {
                ok = ui.button("  OK  ").clicked();
            });
        });

    if !open || ok {
        app.popup = None;
    }
}
