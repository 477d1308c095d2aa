// src/gui/actions/assistant.rs
use crate::{
    config::consts::ASSISTANT_TITLE,
    gui::app::App,
    shell::{Action, Outcome},
};

pub fn assistant(app: &mut App) {
    if let Ok(Outcome::Message(msg)) = app.explorer.dispatch(Action::AssistantRequest) {
        app.show_popup(ASSISTANT_TITLE, msg);
    }
}
