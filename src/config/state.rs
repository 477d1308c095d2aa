// src/config/state.rs
use std::path::PathBuf;

use super::consts::{WINDOW_H, WINDOW_W};
use super::options::AppOptions;
use super::settings::Settings;

#[derive(Clone, Debug)]
pub struct GuiState {
    pub window_w: u32,
    pub window_h: u32,
    /// Folder the last successful export went to; seeds the next dialog.
    pub last_export_dir: Option<PathBuf>,
}

impl Default for GuiState {
    fn default() -> Self {
        Self {
            window_w: WINDOW_W,
            window_h: WINDOW_H,
            last_export_dir: None,
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct AppState {
    pub options: AppOptions,
    pub gui: GuiState,
}

impl AppState {
    /// Defaults, overlaid with whatever the settings file provided.
    pub fn from_settings(settings: &Settings) -> Self {
        let mut state = Self::default();
        settings.apply(&mut state);
        state
    }
}
