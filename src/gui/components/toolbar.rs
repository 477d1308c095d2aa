// src/gui/components/toolbar.rs
//
// Search field + Search button + category picker.
// Enter in the field behaves like the button.

use eframe::egui::{self, Color32, RichText};
use crate::gui::{actions, app::App};

const GREEN: Color32 = Color32::from_rgb(0x4C, 0xAF, 0x50);

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.horizontal(|ui| {
        ui.label(RichText::new("🔎 Search:").size(15.0));

        let field = ui.add(
            egui::TextEdit::singleline(&mut app.search_text)
                .desired_width(240.0)
                .hint_text("product name"),
        );
        let enter = field.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));

        let button = ui.add(egui::Button::new(RichText::new("Search").color(Color32::WHITE)).fill(GREEN));
        if button.clicked() || enter {
            actions::search(app);
        }

        ui.add_space(12.0);
        ui.label(RichText::new("📂 Category:").size(15.0));

        let before = app.category_choice.clone();
        egui::ComboBox::from_id_salt("category_picker")
            .selected_text(app.category_choice.as_str())
            .width(160.0)
            .show_ui(ui, |ui| {
                for c in &app.categories {
                    ui.selectable_value(&mut app.category_choice, c.clone(), c.as_str());
                }
            });

        if app.category_choice != before {
            logd!("UI: Category picker → {}", app.category_choice);
            actions::select_category(app);
        }
    });
}
