// src/gui/actions/query.rs
use crate::{
    gui::app::App,
    query::SortKey,
    shell::{Action, Outcome},
};

use super::report_rows;

/// Search button / Enter: apply the typed term. The picker commits its
/// category on change, so the explorer already holds the current one.
pub fn search(app: &mut App) {
    let term = app.search_text.clone();
    logf!("UI: Search submit {:?} (category={})", term, app.category_choice);
    dispatch(app, Action::SearchSubmit(term));
}

/// Picker changed: re-filter with the last submitted term.
pub fn select_category(app: &mut App) {
    let choice = app.category_choice.clone();
    dispatch(app, Action::CategorySelect(choice));
}

pub fn sort(app: &mut App, key: SortKey, ascending: bool) {
    logf!("UI: Sort {} {}", key.label(), if ascending { "↑" } else { "↓" });
    dispatch(app, Action::SortRequest(key, ascending));
}

fn dispatch(app: &mut App, action: Action) {
    match app.explorer.dispatch(action) {
        Ok(outcome @ Outcome::ViewChanged { .. }) => report_rows(app, outcome),
        Ok(other) => logd!("UI: unexpected outcome {:?}", other),
        Err(e) => {
            loge!("UI: {}", e);
            app.status(format!("Error: {e}"));
        }
    }
}
