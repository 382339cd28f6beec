// src/file.rs

use std::{
    fs::{self, File},
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};

use chrono::Local;

use crate::csv::{write_row, Delim};
use crate::report::DataSet;

pub fn ensure_directory(dir: &Path) -> Result<(), Box<dyn std::error::Error>> {
    if dir.exists() && !dir.is_dir() {
        return Err(format!("Path exists but is not a directory: {}", dir.display()).into());
    }
    if !dir.exists() { fs::create_dir_all(dir)?; }
    Ok(())
}

/// Default report path: `<dir>/<local timestamp>.<ext>`.
/// The timestamp keeps the RFC 3339 shape but swaps `:` for `-` so the
/// name is valid everywhere.
pub fn default_report_path(dir: &Path, delim: Delim) -> PathBuf {
    let stamp = Local::now().format("%Y-%m-%dT%H-%M-%S");
    dir.join(format!("{}.{}", stamp, delim.ext()))
}

/// Write the report table to `path`, header line first when present.
pub fn write_report(path: &Path, ds: &DataSet, delim: Delim) -> Result<(), Box<dyn std::error::Error>> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent)?;
        }
    }

    let file = File::create(path)?; // truncate/overwrite
    let mut out = BufWriter::new(file);
    if let Some(h) = &ds.headers {
        write_row(&mut out, h, delim)?;
    }
    for row in &ds.rows {
        write_row(&mut out, row, delim)?;
    }
    out.flush()?;
    Ok(())
}
