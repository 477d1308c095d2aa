// tests/common/mod.rs
#![allow(dead_code)]

use product_explorer::catalog::{Catalog, Product};

/// Pen, Mug, Notebook: the three-product scenario used throughout.
pub fn scenario() -> Catalog {
    Catalog::new(vec![
        Product::new("Pen", 10.0, 4.5, "Stationery"),
        Product::new("Mug", 150.0, 4.0, "Kitchen"),
        Product::new("Notebook", 10.0, 4.8, "Stationery"),
    ])
}

pub fn wider() -> Catalog {
    Catalog::new(vec![
        Product::new("Gel Pen", 120.0, 4.4, "Stationery"),
        Product::new("Coffee Mug", 349.0, 4.1, "Kitchen"),
        Product::new("Notebook", 120.0, 4.7, "Stationery"),
        Product::new("Wireless Mouse", 799.0, 4.3, "Electronics"),
        Product::new("USB Cable", 299.0, 4.3, "Electronics"),
        Product::new("Frying Pan", 1299.0, 4.5, "Kitchen"),
        Product::new("Pen Stand", 199.0, 4.1, "Stationery"),
    ])
}

pub fn names<'a>(it: impl IntoIterator<Item = &'a Product>) -> Vec<&'a str> {
    it.into_iter().map(|p| p.name.as_str()).collect()
}
