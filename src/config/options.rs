// src/config/options.rs
use std::path::PathBuf;
use std::str::FromStr;

use super::consts::*;

#[derive(Clone, Debug, PartialEq)]
pub struct AppOptions {
    /// Where the catalog JSON lives.
    pub catalog_path: PathBuf,
    pub export: ExportOptions,
}

impl Default for AppOptions {
    fn default() -> Self {
        Self {
            catalog_path: PathBuf::from(CATALOG_FILE),
            export: ExportOptions::default(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Tsv,
}

impl ExportFormat {
    pub fn ext(&self) -> &'static str {
        match self { ExportFormat::Csv => "csv", ExportFormat::Tsv => "tsv" }
    }
    pub fn delim(&self) -> u8 {
        match self { ExportFormat::Csv => b',', ExportFormat::Tsv => b'\t' }
    }
    /// Label + extension list for native save dialogs.
    pub fn dialog_filter(&self) -> (&'static str, &'static [&'static str]) {
        match self {
            ExportFormat::Csv => ("CSV Files", &["csv"]),
            ExportFormat::Tsv => ("TSV Files", &["tsv"]),
        }
    }
}

impl FromStr for ExportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "csv" => Ok(ExportFormat::Csv),
            "tsv" => Ok(ExportFormat::Tsv),
            other => Err(format!("Unknown format: {other}")),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportOptions {
    pub format: ExportFormat,
    /// Emit the `name,price,rating,category` header row.
    pub include_headers: bool,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            format: ExportFormat::Csv,
            include_headers: true,
        }
    }
}

impl ExportOptions {
    /// Suggested file name for the save dialog, e.g. `products.csv`.
    pub fn default_file_name(&self) -> String {
        join!(DEFAULT_EXPORT_STEM, ".", self.format.ext())
    }
}
