// src/error.rs
//! Error types.
//!
//! Startup failures (`CatalogLoadError`) are fatal; everything raised while
//! the window is open is shown on the status line and the session goes on.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// The catalog could not be turned into a usable product list.
#[derive(Debug, Error)]
pub enum CatalogLoadError {
    /// Missing or unreadable file.
    #[error("cannot read catalog {}: {source}", path.display())]
    Io { path: PathBuf, #[source] source: io::Error },

    /// Readable, but not a list of `{name, price, rating, category}` records.
    #[error("catalog {} is not a product list: {source}", path.display())]
    Parse { path: PathBuf, #[source] source: serde_json::Error },

    #[error("catalog {} contains no products", path.display())]
    Empty { path: PathBuf },
}

/// A random pick was asked of an empty catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("cannot pick from an empty catalog")]
pub struct EmptyCatalogError;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("cannot write {}: {source}", path.display())]
    Io { path: PathBuf, #[source] source: io::Error },

    #[error("cannot write {}: {source}", path.display())]
    Csv { path: PathBuf, #[source] source: csv::Error },
}

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("cannot access {}: {source}", path.display())]
    Io { path: PathBuf, #[source] source: io::Error },

    #[error("bad selector {css:?}: {message}")]
    Selector { css: &'static str, message: String },

    /// Product block `index` (0-based) has no `field` element.
    #[error("product #{index} has no {field} element")]
    MissingField { index: usize, field: &'static str },

    #[error("product #{index}: no number in {field} text {text:?}")]
    BadNumber { index: usize, field: &'static str, text: String },

    #[error("cannot write {}: {source}", path.display())]
    Csv { path: PathBuf, #[source] source: csv::Error },

    #[error("cannot write {}: {source}", path.display())]
    Json { path: PathBuf, #[source] source: serde_json::Error },
}
