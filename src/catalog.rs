// src/catalog.rs
//
// The product list loaded once at startup. Read-only afterwards: views are
// index lists into it (see query.rs), never copies that drift.

use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::config::consts::{ALL_CATEGORIES, CURRENCY};
use crate::error::CatalogLoadError;

/// One catalog record. Field order is the export column order.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub name: String,
    pub price: f64,
    pub rating: f64,
    pub category: String,
}

impl Product {
    pub fn new(name: impl Into<String>, price: f64, rating: f64, category: impl Into<String>) -> Self {
        Self { name: name.into(), price, rating, category: category.into() }
    }

    /// `₹120`
    pub fn price_label(&self) -> String {
        format!("{CURRENCY}{}", self.price)
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    pub fn new(products: Vec<Product>) -> Self { Self { products } }

    pub fn products(&self) -> &[Product] { &self.products }
    pub fn len(&self) -> usize { self.products.len() }
    pub fn is_empty(&self) -> bool { self.products.is_empty() }
    pub fn get(&self, ix: usize) -> Option<&Product> { self.products.get(ix) }

    /// Choices for the category picker: "All" first, then the distinct
    /// categories present, sorted.
    pub fn categories(&self) -> Vec<String> {
        let distinct: BTreeSet<&str> = self.products.iter()
            .map(|p| p.category.as_str())
            .filter(|c| *c != ALL_CATEGORIES)
            .collect();

        let mut out = Vec::with_capacity(distinct.len() + 1);
        out.push(s!(ALL_CATEGORIES));
        out.extend(distinct.into_iter().map(String::from));
        out
    }
}

/// Parse catalog JSON (an array of product objects). `path` is only used
/// for error messages.
pub fn from_json_str(text: &str, path: &Path) -> Result<Catalog, CatalogLoadError> {
    let products: Vec<Product> = serde_json::from_str(text)
        .map_err(|source| CatalogLoadError::Parse { path: path.to_path_buf(), source })?;

    if products.is_empty() {
        return Err(CatalogLoadError::Empty { path: path.to_path_buf() });
    }
    Ok(Catalog::new(products))
}

/// Read and parse the catalog file. The app refuses to start on any error,
/// including an empty list.
pub fn load(path: &Path) -> Result<Catalog, CatalogLoadError> {
    let text = fs::read_to_string(path)
        .map_err(|source| CatalogLoadError::Io { path: path.to_path_buf(), source })?;

    let catalog = from_json_str(&text, path)?;
    logf!(
        "Catalog: Loaded {} (rows={}, categories={})",
        path.display(),
        catalog.len(),
        catalog.categories().len() - 1
    );
    Ok(catalog)
}
