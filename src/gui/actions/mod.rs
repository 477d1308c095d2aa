// src/gui/actions/mod.rs
//
// Folder module facade: re-export public entrypoints.
// Each action turns one UI event into a shell `Action`, then writes the
// status line. Nothing here closes the window on error.

mod assistant; // src/gui/actions/assistant.rs
mod copy;      // src/gui/actions/copy.rs
mod export;    // src/gui/actions/export.rs
mod query;     // src/gui/actions/query.rs

pub use assistant::assistant;
pub use copy::copy;
pub use export::export;
pub use query::{search, select_category, sort};

use crate::{gui::app::App, shell::Outcome};

#[inline]
pub(super) fn report_rows(app: &mut App, outcome: Outcome) {
    if let Outcome::ViewChanged { rows } = outcome {
        let total = app.explorer.catalog().len();
        app.status(format!("Showing {rows} of {total} products"));
    }
}
