// src/extract/products.rs
//! Parse product blocks out of a listing page and write them as
//! `Product Name,Price,Rating` rows. Text is kept as shown on the page
//! (whitespace-normalised); numbers are only parsed by `convert`.

use std::{fs, io, path::Path};

use scraper::{ElementRef, Html, Selector};

use crate::config::consts::SCRAPE_HEADERS;
use crate::core::sanitize::normalize_ws;
use crate::error::ExtractError;
use crate::progress::Progress;

const BLOCK: &str = "div.product";
const TITLE: &str = "h2.title";
const PRICE: &str = "p.price";
const RATING: &str = "p.rating";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScrapedProduct {
    pub name: String,
    pub price: String,
    pub rating: String,
}

fn selector(css: &'static str) -> Result<Selector, ExtractError> {
    Selector::parse(css).map_err(|e| ExtractError::Selector { css, message: e.to_string() })
}

/// Normalised text of the first `sel` match under `block`.
fn child_text(
    block: &ElementRef<'_>,
    sel: &Selector,
    index: usize,
    field: &'static str,
) -> Result<String, ExtractError> {
    let el = block.select(sel).next()
        .ok_or(ExtractError::MissingField { index, field })?;
    Ok(normalize_ws(&el.text().collect::<Vec<_>>().join(" ")))
}

/// Extract every product block, in document order.
pub fn parse_document(
    html: &str,
    mut progress: Option<&mut dyn Progress>,
) -> Result<Vec<ScrapedProduct>, ExtractError> {
    let doc = Html::parse_document(html);
    let block_sel = selector(BLOCK)?;
    let title_sel = selector(TITLE)?;
    let price_sel = selector(PRICE)?;
    let rating_sel = selector(RATING)?;

    let blocks: Vec<ElementRef<'_>> = doc.select(&block_sel).collect();
    logf!("Extract: found {} product blocks", blocks.len());
    if let Some(p) = progress.as_deref_mut() {
        p.begin(blocks.len());
    }

    let mut out = Vec::with_capacity(blocks.len());
    for (index, block) in blocks.iter().enumerate() {
        let item = ScrapedProduct {
            name: child_text(block, &title_sel, index, "title")?,
            price: child_text(block, &price_sel, index, "price")?,
            rating: child_text(block, &rating_sel, index, "rating")?,
        };
        logd!("Extract: #{} {:?}", index, item.name);
        out.push(item);
        if let Some(p) = progress.as_deref_mut() {
            p.item_done(index);
        }
    }

    if let Some(p) = progress.as_deref_mut() {
        p.finish();
    }
    Ok(out)
}

/// Read and parse a saved page.
pub fn parse_file(
    path: &Path,
    progress: Option<&mut dyn Progress>,
) -> Result<Vec<ScrapedProduct>, ExtractError> {
    let html = fs::read_to_string(path)
        .map_err(|source| ExtractError::Io { path: path.to_path_buf(), source })?;
    parse_document(&html, progress)
}

/// Header row first, then one row per product. Overwrites `path`.
pub fn write_delimited(path: &Path, rows: &[ScrapedProduct], sep: u8) -> Result<(), ExtractError> {
    let csv_err = |source: csv::Error| ExtractError::Csv { path: path.to_path_buf(), source };

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            crate::file::ensure_directory(parent)
                .map_err(|source| ExtractError::Io { path: path.to_path_buf(), source })?;
        }
    }

    let mut wtr = csv::WriterBuilder::new()
        .delimiter(sep)
        .has_headers(false)
        .from_path(path)
        .map_err(csv_err)?;

    wtr.write_record(SCRAPE_HEADERS).map_err(csv_err)?;
    for r in rows {
        wtr.write_record([&r.name, &r.price, &r.rating]).map_err(csv_err)?;
    }
    wtr.flush()
        .map_err(|source: io::Error| ExtractError::Io { path: path.to_path_buf(), source })?;

    logf!("Extract: wrote {} rows → {}", rows.len(), path.display());
    Ok(())
}
