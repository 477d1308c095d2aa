// src/bin/gui.rs
#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]
use std::path::{Path, PathBuf};

use clap::Parser;
use eframe::egui::{IconData, ViewportBuilder};
use rfd::{MessageDialog, MessageLevel};

use product_explorer::{
    catalog,
    config::{consts::{APP_TITLE, CATALOG_ENV, CATALOG_FILE}, settings, state::AppState},
    gui, log, loge, logf,
    shell::Explorer,
};

#[derive(Parser, Debug)]
#[command(name = "product_explorer", version, about = "Desktop product browser")]
struct Args {
    /// Catalog JSON (falls back to the settings file, then products.json)
    #[arg(env = CATALOG_ENV)]
    catalog: Option<PathBuf>,
}

fn app_icon() -> Option<IconData> {
    let rgba = image::load_from_memory(include_bytes!(concat!(
        env!("CARGO_MANIFEST_DIR"),
        "/assets/icon.png"
    )))
    .ok()?
    .to_rgba8();
    let (w, h) = rgba.dimensions();
    Some(IconData { rgba: rgba.into_raw(), width: w, height: h })
}

/// No console on Windows: show startup failures in a dialog too.
fn fatal(msg: &str) -> ! {
    loge!("Startup: {}", msg);
    eprintln!("Error: {msg}");
    MessageDialog::new()
        .set_level(MessageLevel::Error)
        .set_title(APP_TITLE)
        .set_description(msg)
        .show();
    std::process::exit(1);
}

fn main() {
    log::init(log::LogTarget::File);
    let args = Args::parse();

    let settings = settings::load(&settings::settings_path());
    let mut state = AppState::from_settings(&settings);
    state.options.catalog_path =
        settings::resolve_catalog_path(args.catalog.as_deref(), &settings, Path::new(CATALOG_FILE));

    let catalog = match catalog::load(&state.options.catalog_path) {
        Ok(c) => c,
        Err(e) => fatal(&e.to_string()),
    };
    let explorer = Explorer::new(catalog, state.options.export.clone());

    let mut viewport = ViewportBuilder::default()
        .with_title(APP_TITLE)
        .with_inner_size([state.gui.window_w as f32, state.gui.window_h as f32]);
    if let Some(icon) = app_icon() {
        viewport = viewport.with_icon(icon);
    }
    let options = eframe::NativeOptions { viewport, ..Default::default() };

    logf!("Startup: catalog={}", state.options.catalog_path.display());
    if let Err(e) = gui::run(options, state, explorer) {
        eprintln!("GUI failed: {}", e);
        std::process::exit(1);
    }
}
