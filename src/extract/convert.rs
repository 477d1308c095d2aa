// src/extract/convert.rs
//! Scraped rows → catalog records.
//!
//! The listing page has no category, so every product gets the one passed
//! in. Price and rating take the first number in their text (`₹1,299` →
//! 1299, `4.5/5` → 4.5).

use std::{fs, io, path::Path};

use crate::catalog::Product;
use crate::core::sanitize::first_number;
use crate::error::ExtractError;
use crate::file::ensure_directory;

use super::ScrapedProduct;

pub fn to_catalog(rows: &[ScrapedProduct], category: &str) -> Result<Vec<Product>, ExtractError> {
    rows.iter()
        .enumerate()
        .map(|(index, r)| {
            let number = |field: &'static str, text: &str| {
                first_number(text).ok_or_else(|| ExtractError::BadNumber { index, field, text: s!(text) })
            };
            Ok(Product::new(
                r.name.clone(),
                number("price", &r.price)?,
                number("rating", &r.rating)?,
                category,
            ))
        })
        .collect()
}

/// Pretty-printed JSON array, the format the explorer loads. Creates
/// missing parent folders.
pub fn write_catalog_json(path: &Path, products: &[Product]) -> Result<(), ExtractError> {
    let io_err = |source: io::Error| ExtractError::Io { path: path.to_path_buf(), source };

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent).map_err(io_err)?;
        }
    }

    let json = serde_json::to_string_pretty(products)
        .map_err(|source| ExtractError::Json { path: path.to_path_buf(), source })?;
    fs::write(path, json + "\n").map_err(io_err)?;
    logf!("Extract: wrote catalog ({} products) → {}", products.len(), path.display());
    Ok(())
}
