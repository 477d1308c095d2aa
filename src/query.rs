// src/query.rs
//
// Catalog query engine: filter, sort, and the state the shell keeps between
// user actions.
//
// - View: derived, zero-copy projection of the Catalog (row indices).
//         Every row index points into the catalog, so a view can only ever
//         select and reorder catalog products.
// - QueryState: the catalog plus the last-applied filter and sort, and the
//               view those produced.
//
// Composition rules:
// - filter always starts from the full catalog.
// - sort reorders the *current* view; it never re-expands to the catalog.
// - a new filter drops the previous sort order (the result is in catalog
//   order again). Callers that want a sticky sort must re-request it.

use std::cmp::Ordering;

use crate::catalog::{Catalog, Product};
use crate::config::consts::ALL_CATEGORIES;

/* ---------------- Parameters ---------------- */

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum CategoryFilter {
    #[default]
    All,
    /// Case-sensitive exact match on `Product::category`.
    Exact(String),
}

impl CategoryFilter {
    /// Map a picker choice to a filter; the "All" sentinel means no constraint.
    pub fn from_choice(choice: &str) -> Self {
        if choice == ALL_CATEGORIES { CategoryFilter::All } else { CategoryFilter::Exact(s!(choice)) }
    }

    pub fn label(&self) -> &str {
        match self {
            CategoryFilter::All => ALL_CATEGORIES,
            CategoryFilter::Exact(c) => c,
        }
    }

    pub fn matches(&self, p: &Product) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Exact(c) => p.category == *c,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FilterParams {
    /// Case-insensitive substring of the product name; empty matches all.
    pub search_term: String,
    pub category: CategoryFilter,
}

impl FilterParams {
    pub fn new(search_term: impl Into<String>, category: CategoryFilter) -> Self {
        Self { search_term: search_term.into(), category }
    }

    /// Predicate with the search term already lowercased.
    fn matcher(&self) -> impl Fn(&Product) -> bool + '_ {
        let needle = self.search_term.to_lowercase();
        move |p: &Product| {
            (needle.is_empty() || p.name.to_lowercase().contains(&needle))
                && self.category.matches(p)
        }
    }

    pub fn matches(&self, p: &Product) -> bool {
        (self.matcher())(p)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SortKey {
    Price,
    Rating,
}

impl SortKey {
    pub fn label(&self) -> &'static str {
        match self { SortKey::Price => "Price", SortKey::Rating => "Rating" }
    }

    fn value(&self, p: &Product) -> f64 {
        match self { SortKey::Price => p.price, SortKey::Rating => p.rating }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SortParams {
    pub key: SortKey,
    pub ascending: bool,
}

impl SortParams {
    pub fn new(key: SortKey, ascending: bool) -> Self { Self { key, ascending } }
}

/* ---------------- View ---------------- */

/// Ordered projection of a catalog for display and export.
#[derive(Clone, Debug)]
pub struct View<'a> {
    catalog: &'a Catalog,
    row_ix: Vec<usize>,
}

impl<'a> View<'a> {
    /// Every product, catalog order.
    pub fn full(catalog: &'a Catalog) -> Self {
        Self { catalog, row_ix: (0..catalog.len()).collect() }
    }

    /// Indices past the end of the catalog are dropped.
    pub fn from_indices(catalog: &'a Catalog, mut row_ix: Vec<usize>) -> Self {
        row_ix.retain(|&ix| ix < catalog.len());
        Self { catalog, row_ix }
    }

    pub fn len(&self) -> usize { self.row_ix.len() }
    pub fn is_empty(&self) -> bool { self.row_ix.is_empty() }

    /// Positions of the viewed rows in the catalog.
    pub fn row_ix(&self) -> &[usize] { &self.row_ix }
    pub fn into_indices(self) -> Vec<usize> { self.row_ix }

    /// Borrow a product by view position.
    pub fn get(&self, i: usize) -> Option<&'a Product> {
        let catalog = self.catalog;
        self.row_ix.get(i).and_then(|&ix| catalog.get(ix))
    }

    pub fn iter(&self) -> impl Iterator<Item = &'a Product> + '_ {
        let catalog = self.catalog;
        self.row_ix.iter().filter_map(move |&ix| catalog.get(ix))
    }
}

/* ---------------- Operations ---------------- */

/// Products matching both the name and category predicates, in catalog order.
/// No match is an empty view, never an error.
pub fn filter<'a>(catalog: &'a Catalog, params: &FilterParams) -> View<'a> {
    let keep = params.matcher();
    let row_ix = catalog.products().iter()
        .enumerate()
        .filter(|(_, p)| keep(*p))
        .map(|(ix, _)| ix)
        .collect();
    View { catalog, row_ix }
}

/// Reorder `view` by `params.key`. Stable in both directions: products with
/// equal keys keep their order from `view`.
pub fn sort(mut view: View<'_>, params: SortParams) -> View<'_> {
    let catalog = view.catalog;
    // `+ 0.0` folds -0.0 into 0.0 so the two compare equal under `total_cmp`.
    let key = |ix: usize| catalog.get(ix).map(|p| params.key.value(p) + 0.0).unwrap_or(f64::NAN);

    // `sort_by` is stable; reversing the comparator (not the output) keeps
    // ties in input order for descending sorts too.
    view.row_ix.sort_by(|&a, &b| {
        let ord: Ordering = key(a).total_cmp(&key(b));
        if params.ascending { ord } else { ord.reverse() }
    });
    view
}

/* ---------------- State ---------------- */

/// The catalog plus the last-applied filter/sort and the resulting view.
/// These fields fully determine what the shell displays.
#[derive(Clone, Debug)]
pub struct QueryState {
    catalog: Catalog,
    filter: FilterParams,
    sort: Option<SortParams>,
    row_ix: Vec<usize>,
}

impl QueryState {
    /// Initial view is the whole catalog, unsorted.
    pub fn new(catalog: Catalog) -> Self {
        let row_ix = (0..catalog.len()).collect();
        Self { catalog, filter: FilterParams::default(), sort: None, row_ix }
    }

    pub fn catalog(&self) -> &Catalog { &self.catalog }
    pub fn filter_params(&self) -> &FilterParams { &self.filter }

    /// `None` until a sort is requested, and again after every filter.
    pub fn sort_params(&self) -> Option<SortParams> { self.sort }

    pub fn categories(&self) -> Vec<String> { self.catalog.categories() }

    pub fn view(&self) -> View<'_> {
        View { catalog: &self.catalog, row_ix: self.row_ix.clone() }
    }

    /// Row indices of the current view without cloning.
    pub fn row_ix(&self) -> &[usize] { &self.row_ix }

    /// Recompute the view from the full catalog. Any previous sort is dropped.
    pub fn apply_filter(&mut self, params: FilterParams) -> usize {
        self.row_ix = filter(&self.catalog, &params).into_indices();
        self.filter = params;
        self.sort = None;
        self.row_ix.len()
    }

    /// Reorder the current (last-filtered) view.
    pub fn apply_sort(&mut self, params: SortParams) {
        let current = View { catalog: &self.catalog, row_ix: std::mem::take(&mut self.row_ix) };
        self.row_ix = sort(current, params).into_indices();
        self.sort = Some(params);
    }
}
