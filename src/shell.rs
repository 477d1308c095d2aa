// src/shell.rs
//
// The presentation contract, with no UI toolkit in sight. The GUI and CLI
// both translate their events into `Action`s (or call the named handlers
// directly) and render `current_view()`.

use std::path::PathBuf;

use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::catalog::{Catalog, Product};
use crate::config::options::ExportOptions;
use crate::error::{EmptyCatalogError, ExportError};
use crate::file;
use crate::pick::{self, Deal};
use crate::query::{CategoryFilter, FilterParams, QueryState, SortKey, SortParams, View};

/// Named UI actions.
#[derive(Clone, Debug, PartialEq)]
pub enum Action {
    SearchSubmit(String),
    CategorySelect(String),
    SortRequest(SortKey, bool),
    /// `None` = the user cancelled the destination dialog.
    ExportRequest(Option<PathBuf>),
    AssistantRequest,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Outcome {
    ViewChanged { rows: usize },
    Exported(PathBuf),
    ExportCancelled,
    Message(&'static str),
}

pub struct Explorer {
    query: QueryState,
    /// Category currently chosen in the picker; applied on the next search
    /// submit or immediately on category select.
    category: CategoryFilter,
    pub export: ExportOptions,
    rng: StdRng,
}

impl Explorer {
    pub fn new(catalog: Catalog, export: ExportOptions) -> Self {
        Self::with_rng(catalog, export, StdRng::from_entropy())
    }

    /// Deterministic picks (tests, reproducible demos).
    pub fn with_seed(catalog: Catalog, export: ExportOptions, seed: u64) -> Self {
        Self::with_rng(catalog, export, StdRng::seed_from_u64(seed))
    }

    fn with_rng(catalog: Catalog, export: ExportOptions, rng: StdRng) -> Self {
        Self {
            query: QueryState::new(catalog),
            category: CategoryFilter::All,
            export,
            rng,
        }
    }

    /* ---------- read side ---------- */

    pub fn current_view(&self) -> View<'_> { self.query.view() }
    pub fn query(&self) -> &QueryState { &self.query }
    pub fn catalog(&self) -> &Catalog { self.query.catalog() }
    pub fn categories(&self) -> Vec<String> { self.query.categories() }
    pub fn selected_category(&self) -> &CategoryFilter { &self.category }
    /// Last submitted search term.
    pub fn search_term(&self) -> &str { &self.query.filter_params().search_term }

    /// Product at a view position (table rows).
    pub fn view_row(&self, i: usize) -> Option<&Product> {
        self.query.row_ix().get(i).and_then(|&ix| self.query.catalog().get(ix))
    }

    pub fn view_len(&self) -> usize { self.query.row_ix().len() }

    /* ---------- handlers ---------- */

    pub fn dispatch(&mut self, action: Action) -> Result<Outcome, ExportError> {
        match action {
            Action::SearchSubmit(term) => Ok(Outcome::ViewChanged { rows: self.on_search_submit(&term) }),
            Action::CategorySelect(c) => Ok(Outcome::ViewChanged { rows: self.on_category_select(&c) }),
            Action::SortRequest(key, asc) => {
                self.on_sort_request(key, asc);
                Ok(Outcome::ViewChanged { rows: self.view_len() })
            }
            Action::ExportRequest(dest) => Ok(match self.on_export_request(dest)? {
                Some(path) => Outcome::Exported(path),
                None => Outcome::ExportCancelled,
            }),
            Action::AssistantRequest => Ok(Outcome::Message(self.on_assistant_request())),
        }
    }

    /// Filter by `term` and the currently selected category. Returns row count.
    pub fn on_search_submit(&mut self, term: &str) -> usize {
        self.refilter(s!(term))
    }

    /// Select a category ("All" clears it) and re-filter with the last
    /// submitted search term. Returns row count.
    pub fn on_category_select(&mut self, choice: &str) -> usize {
        self.category = CategoryFilter::from_choice(choice);
        let term = s!(self.search_term());
        self.refilter(term)
    }

    fn refilter(&mut self, term: String) -> usize {
        let rows = self.query.apply_filter(FilterParams::new(term, self.category.clone()));
        logf!(
            "Filter: term={:?} category={} → rows={}",
            self.search_term(),
            self.category.label(),
            rows
        );
        rows
    }

    /// Sort whatever the last filter left on screen.
    pub fn on_sort_request(&mut self, key: SortKey, ascending: bool) {
        self.query.apply_sort(SortParams::new(key, ascending));
        logf!(
            "Sort: key={} ascending={} rows={}",
            key.label(),
            ascending,
            self.view_len()
        );
    }

    /// `Ok(None)` when no destination was chosen.
    pub fn on_export_request(&self, dest: Option<PathBuf>) -> Result<Option<PathBuf>, ExportError> {
        let Some(dest) = dest else {
            logd!("Export: destination dialog cancelled");
            return Ok(None);
        };

        logf!(
            "Export: Begin rows={} format={:?} headers={} → {}",
            self.view_len(),
            self.export.format,
            self.export.include_headers,
            dest.display()
        );
        match file::export_view(&self.current_view(), &dest, &self.export) {
            Ok(path) => {
                logf!("Export: OK → {}", path.display());
                Ok(Some(path))
            }
            Err(e) => {
                loge!("Export: Error: {}", e);
                Err(e)
            }
        }
    }

    pub fn on_assistant_request(&mut self) -> &'static str {
        let msg = pick::assistant_message(&mut self.rng);
        logd!("Assistant: {}", msg);
        msg
    }

    /// Random product from the full catalog, regardless of the current view.
    pub fn deal_of_the_day(&mut self) -> Result<Deal, EmptyCatalogError> {
        let product = pick::pick_random(self.query.catalog(), &mut self.rng)?;
        logd!("Deal: {}", product.name);
        Ok(Deal(product.clone()))
    }

    /// Current view in export format, for the clipboard.
    pub fn copy_text(&self) -> String {
        file::to_export_string(&self.current_view(), &self.export)
    }
}
