// src/file.rs

use std::{
    fs::{self, File},
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};

use tracing::info;

use crate::config::consts::{EXTRACTED_HEADERS, PAIRS_HEADERS};
use crate::config::options::ExportOptions;
use crate::csv::write_table;
use crate::error::ExportError;
use crate::extract::Entry;
use crate::pair::PairRecord;

/// Write the extracted-entry table. Returns the path written to.
pub fn export_entries(export: &ExportOptions, entries: &[Entry]) -> Result<PathBuf, ExportError> {
    let rows: Vec<Vec<String>> = entries.iter().map(Entry::to_row).collect();
    let path = export.extracted_path();
    write_table_file(&path, &EXTRACTED_HEADERS, &rows, export.format.delim())?;
    info!(path = %path.display(), rows = rows.len(), "extracted values written");
    Ok(path)
}

/// Write the pair table. Returns the path written to.
pub fn export_pairs(export: &ExportOptions, pairs: &[&PairRecord]) -> Result<PathBuf, ExportError> {
    let rows: Vec<Vec<String>> = pairs.iter().map(|p| p.to_row()).collect();
    let path = export.pairs_path();
    write_table_file(&path, &PAIRS_HEADERS, &rows, export.format.delim())?;
    info!(path = %path.display(), rows = rows.len(), "value pairs written");
    Ok(path)
}

/// Ensure parent dir exists; create/truncate file; header then rows.
pub fn write_table_file(
    path: &Path,
    headers: &[&str],
    rows: &[Vec<String>],
    sep: char,
) -> Result<(), ExportError> {
    let wrap = |source: std::io::Error| ExportError { path: path.to_path_buf(), source };

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent).map_err(wrap)?;
        }
    }
    let file = File::create(path).map_err(wrap)?; // truncate/overwrite
    let mut out = BufWriter::new(file);
    write_table(&mut out, headers, rows, sep).map_err(wrap)?;
    out.flush().map_err(wrap)?;
    Ok(())
}

pub fn ensure_directory(dir: &Path) -> std::io::Result<()> {
    if dir.exists() && !dir.is_dir() {
        return Err(std::io::Error::new(
            std::io::ErrorKind::AlreadyExists,
            format!("path exists but is not a directory: {}", dir.display()),
        ));
    }
    if !dir.exists() { fs::create_dir_all(dir)?; }
    Ok(())
}
