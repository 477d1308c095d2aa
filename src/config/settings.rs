// src/config/settings.rs
//
// Optional `key=value` settings file at `.store/explorer.cfg`.
// Read once at startup; the app never writes it back.
//
//   # comments and blank lines are skipped
//   catalog=data/products.json
//   format=tsv
//   include_headers=0
//   window_w=1100
//   window_h=700

use std::{fs, path::{Path, PathBuf}};

use super::consts::{SETTINGS_FILE, STORE_DIR};
use super::options::ExportFormat;
use super::state::AppState;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Settings {
    pub catalog: Option<PathBuf>,
    pub format: Option<ExportFormat>,
    pub include_headers: Option<bool>,
    pub window_w: Option<u32>,
    pub window_h: Option<u32>,
}

pub fn settings_path() -> PathBuf {
    Path::new(STORE_DIR).join(SETTINGS_FILE)
}

/// Missing or unreadable file → defaults.
pub fn load(path: &Path) -> Settings {
    if !path.exists() {
        return Settings::default();
    }
    match fs::read_to_string(path) {
        Ok(text) => {
            logd!("Settings: loaded {}", path.display());
            parse(&text)
        }
        Err(e) => {
            loge!("Settings: cannot read {}: {}", path.display(), e);
            Settings::default()
        }
    }
}

fn parse_bool(val: &str) -> bool {
    val == "1" || val.eq_ignore_ascii_case("true")
}

pub fn parse(text: &str) -> Settings {
    let mut cfg = Settings::default();
    for line in text.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') { continue; }
        let Some((key, val)) = line.split_once('=') else { continue };
        let val = val.trim();
        match key.trim() {
            "catalog" if !val.is_empty() => cfg.catalog = Some(PathBuf::from(val)),
            "format" => match val.parse() {
                Ok(fmt) => cfg.format = Some(fmt),
                Err(e) => logd!("Settings: {e}, ignoring"),
            },
            "include_headers" => cfg.include_headers = Some(parse_bool(val)),
            "window_w" => cfg.window_w = val.parse().ok(),
            "window_h" => cfg.window_h = val.parse().ok(),
            other => logd!("Settings: unknown key '{other}'"),
        }
    }
    cfg
}

impl Settings {
    /// Overlay the values that were present onto `state`.
    pub fn apply(&self, state: &mut AppState) {
        if let Some(p) = &self.catalog { state.options.catalog_path = p.clone(); }
        if let Some(f) = self.format { state.options.export.format = f; }
        if let Some(h) = self.include_headers { state.options.export.include_headers = h; }
        if let Some(w) = self.window_w { state.gui.window_w = w; }
        if let Some(h) = self.window_h { state.gui.window_h = h; }
    }
}

/// Catalog path precedence: flag (or `PRODUCT_CATALOG`, which clap folds
/// into the flag) > settings file > default.
pub fn resolve_catalog_path(flag: Option<&Path>, settings: &Settings, default: &Path) -> PathBuf {
    flag.map(Path::to_path_buf)
        .or_else(|| settings.catalog.clone())
        .unwrap_or_else(|| default.to_path_buf())
}
