// src/file.rs
//
// Export of the current view to CSV/TSV, and the same bytes as a string
// for Copy-to-clipboard. Column order is fixed: name, price, rating, category.

use std::{
    fs::{self, File},
    io::{self, Write},
    path::{Path, PathBuf},
};

use crate::catalog::Product;
use crate::config::consts::EXPORT_COLUMNS;
use crate::config::options::ExportOptions;
use crate::error::ExportError;
use crate::query::View;

/// One export row. Numbers use their shortest display form (`120`, `4.5`).
pub fn product_record(p: &Product) -> [String; 4] {
    [p.name.clone(), p.price.to_string(), p.rating.to_string(), p.category.clone()]
}

/// Write header (optional) + one record per viewed product to any writer.
pub fn write_view<W: Write>(w: W, view: &View<'_>, opts: &ExportOptions) -> csv::Result<()> {
    let mut wtr = csv::WriterBuilder::new()
        .delimiter(opts.format.delim())
        .has_headers(false)
        .from_writer(w);

    // Header goes out even for an empty view.
    if opts.include_headers {
        wtr.write_record(EXPORT_COLUMNS)?;
    }
    for p in view.iter() {
        wtr.write_record(product_record(p))?;
    }
    wtr.flush()?;
    Ok(())
}

/// Write `view` to `dest`, creating missing parent folders.
/// Returns the path written.
pub fn export_view(view: &View<'_>, dest: &Path, opts: &ExportOptions) -> Result<PathBuf, ExportError> {
    let io_err = |source: io::Error| ExportError::Io { path: dest.to_path_buf(), source };

    if let Some(parent) = dest.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent).map_err(io_err)?;
        }
    }

    let file = File::create(dest).map_err(io_err)?; // truncate/overwrite
    write_view(io::BufWriter::new(file), view, opts)
        .map_err(|source| ExportError::Csv { path: dest.to_path_buf(), source })?;

    Ok(dest.to_path_buf())
}

/// The export payload as text (clipboard path).
pub fn to_export_string(view: &View<'_>, opts: &ExportOptions) -> String {
    let mut buf: Vec<u8> = Vec::new();
    if let Err(e) = write_view(&mut buf, view, opts) {
        loge!("Copy: serialize failed: {}", e);
    }
    match String::from_utf8(buf) {
        Ok(s) => s,
        Err(e) => String::from_utf8_lossy(&e.into_bytes()).into_owned(),
    }
}

pub fn ensure_directory(dir: &Path) -> io::Result<()> {
    if dir.exists() && !dir.is_dir() {
        return Err(io::Error::new(
            io::ErrorKind::AlreadyExists,
            format!("Path exists but is not a directory: {}", dir.display()),
        ));
    }
    if !dir.exists() { fs::create_dir_all(dir)?; }
    Ok(())
}
