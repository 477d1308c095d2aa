// src/gui/actions/export.rs
use rfd::FileDialog;

use crate::{
    gui::app::App,
    shell::{Action, Outcome},
};

/// Ask for a destination, then write the current view there.
/// A cancelled dialog does nothing.
pub fn export(app: &mut App) {
    let export = &app.explorer.export;
    let (label, exts) = export.format.dialog_filter();

    let mut dialog = FileDialog::new()
        .add_filter(label, exts)
        .set_file_name(export.default_file_name());
    if let Some(dir) = &app.state.gui.last_export_dir {
        dialog = dialog.set_directory(dir);
    }
    let dest = dialog.save_file();

    match app.explorer.dispatch(Action::ExportRequest(dest)) {
        Ok(Outcome::Exported(path)) => {
            app.state.gui.last_export_dir = path.parent().map(|p| p.to_path_buf());
            let msg = format!("Data saved to {}", path.display());
            app.status(msg.clone());
            app.show_popup("Export Success", msg);
        }
        Ok(Outcome::ExportCancelled) => {}
        Ok(other) => logd!("Export: unexpected outcome {:?}", other),
        Err(e) => {
            app.status(format!("Export error: {e}"));
            app.show_popup("Export Failed", e.to_string());
        }
    }
}
