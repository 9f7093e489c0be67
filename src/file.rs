// src/file.rs

use std::{
    error::Error,
    fs,
    path::{Path, PathBuf},
};

use crate::{config::options::ExportOptions, csv::to_export_string, service::Resolved};

/// Write the given entities to the file `export.out_path()` names.
/// Returns the final path written to.
pub fn write_export(export: &ExportOptions, items: &[Resolved<'_>]) -> Result<PathBuf, Box<dyn Error>> {
    let path = export.out_path();

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent)?;
        }
    }

    let contents = to_export_string(items, export.include_headers, export.format.delim());
    fs::write(&path, contents)?;
    logf!("Export: Wrote {} rows to {}", items.len(), path.display());
    Ok(path)
}

pub fn ensure_directory(dir: &Path) -> Result<(), Box<dyn Error>> {
    if dir.exists() && !dir.is_dir() {
        return Err(format!("Path exists but is not a directory: {}", dir.display()).into());
    }
    if !dir.exists() { fs::create_dir_all(dir)?; }
    Ok(())
}
