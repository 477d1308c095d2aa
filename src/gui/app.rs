// src/gui/app.rs
use std::error::Error;

use eframe::egui;

use crate::{
    config::{consts::{ALL_CATEGORIES, APP_TITLE, DEAL_TITLE}, state::AppState},
    shell::Explorer,
};

pub fn run(options: eframe::NativeOptions, state: AppState, explorer: Explorer) -> Result<(), Box<dyn Error>> {
    eframe::run_native(
        APP_TITLE,
        options,
        Box::new(|_cc| Ok(Box::new(App::new(state, explorer)))),
    )?;
    Ok(())
}

/// A message box: title + body, closed by the user.
#[derive(Clone, Debug, PartialEq)]
pub struct Popup {
    pub title: String,
    pub body: String,
}

impl Popup {
    pub fn new(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self { title: title.into(), body: body.into() }
    }
}

pub struct App {
    pub state: AppState,

    // query engine + export options; the only owner of catalog/view
    pub explorer: Explorer,

    // widget-bound inputs (not applied until the user acts)
    pub search_text: String,
    pub category_choice: String,
    pub categories: Vec<String>,

    pub status: String,
    pub popup: Option<Popup>,
}

impl App {
    pub fn new(state: AppState, mut explorer: Explorer) -> Self {
        let categories = explorer.categories();

        logf!(
            "Init: products={}, categories={}",
            explorer.catalog().len(),
            categories.len() - 1
        );

        // Deal of the day: one pick at startup, from the full catalog.
        let popup = match explorer.deal_of_the_day() {
            Ok(deal) => Some(Popup::new(DEAL_TITLE, deal.to_string())),
            Err(e) => {
                loge!("Deal: {}", e);
                None
            }
        };

        let status = format!("Showing {} products", explorer.view_len());

        Self {
            state,
            explorer,
            search_text: s!(),
            category_choice: s!(ALL_CATEGORIES),
            categories,
            status,
            popup,
        }
    }

    #[inline]
    pub fn status<T: Into<String>>(&mut self, msg: T) {
        self.status = msg.into();
    }

    #[inline]
    pub fn show_popup(&mut self, title: impl Into<String>, body: impl Into<String>) {
        self.popup = Some(Popup::new(title, body));
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("controls").show(ctx, |ui| {
            ui.add_space(6.0);
            crate::gui::components::toolbar::draw(ui, self);
            ui.add_space(4.0);
            crate::gui::components::sort_bar::draw(ui, self);
            ui.add_space(6.0);
        });

        egui::TopBottomPanel::bottom("assistant").show(ctx, |ui| {
            crate::gui::components::assistant::draw(ui, self);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            crate::gui::components::data_table::draw(ui, self);
        });

        crate::gui::components::assistant::draw_popup(ctx, self);
    }
}
