// src/pick.rs
//
// Uniform random selection. One primitive, two callers: the deal of the day
// (a product from the full catalog) and the Robo-Assistant (a canned tip).

use std::fmt;

use rand::Rng;
use rand::seq::SliceRandom;

use crate::catalog::{Catalog, Product};
use crate::config::consts::{ASSISTANT_MESSAGES, CURRENCY};
use crate::error::EmptyCatalogError;

/// Uniformly pick one element; `None` only for an empty slice.
pub fn pick_uniform<'a, T, R: Rng + ?Sized>(candidates: &'a [T], rng: &mut R) -> Option<&'a T> {
    candidates.choose(rng)
}

/// Pick from the full catalog, whatever the current view shows.
pub fn pick_random<'a, R: Rng + ?Sized>(catalog: &'a Catalog, rng: &mut R) -> Result<&'a Product, EmptyCatalogError> {
    pick_uniform(catalog.products(), rng).ok_or(EmptyCatalogError)
}

pub fn assistant_message<R: Rng + ?Sized>(rng: &mut R) -> &'static str {
    pick_uniform(ASSISTANT_MESSAGES, rng).copied().unwrap_or_default()
}

/// Promotional pick, rendered for the "Deal of the Day" popup.
#[derive(Clone, Debug, PartialEq)]
pub struct Deal(pub Product);

impl fmt::Display for Deal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let p = &self.0;
        write!(f, "🔥 {} just at {CURRENCY}{} (Rating: {}⭐)", p.name, p.price, p.rating)
    }
}
