// src/extract/mod.rs
//! # Extractor
//!
//! Offline tool support: read a saved product listing page and turn it into
//! the flat file the catalog is built from.
//!
//! ## Typical call chain
//! ```text
//! product_scraper → products::parse_document()   (HTML → ScrapedProduct rows)
//!                 ↘ products::write_delimited()   (→ products.csv)
//!                 ↘ convert::to_catalog()         (optional → products.json)
//! ```
//!
//! ## Markup contract
//! Repeated `div.product` blocks, each with `h2.title`, `p.price` and
//! `p.rating`. A block missing any of the three is an error naming the block;
//! there is no partial recovery.
pub mod convert;
pub mod products;

pub use products::ScrapedProduct;
