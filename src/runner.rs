// src/runner.rs
use std::error::Error;
use std::path::{Path, PathBuf};

use crate::{
    file::{default_report_path, ensure_directory, write_report},
    loader::{FileLoader, Loader, RawContent, WebLoader},
    params::{Params, REPORTS_DIR},
    process::{self, ProcessedRecord},
    progress::Progress,
    report,
};

/// Summary of what was produced.
#[derive(Debug)]
pub struct RunSummary {
    pub report_path: PathBuf,
    pub rows_written: usize,
    pub columns: usize,
}

/// Top-level pipeline: load → process → aggregate → write.
/// `progress` can be None (no console updates) or Some(&mut impl Progress).
pub fn run(
    params: &Params,
    mut progress: Option<&mut dyn Progress>,
) -> Result<RunSummary, Box<dyn Error>> {
    // The reports dir doubles as the debug-log home, so set it up first
    // when we are going to write there.
    if params.out.is_none() {
        ensure_directory(Path::new(REPORTS_DIR))?;
    }

    // Loaders in a fixed order: web sources first, then local files.
    // Each loader's output stays contiguous so page/script adjacency
    // survives into the record list.
    let mut loaders: Vec<Box<dyn Loader>> = Vec::new();
    if !params.urls.is_empty() {
        loaders.push(Box::new(WebLoader::new(params.urls.clone())));
    }
    if !params.files.is_empty() {
        loaders.push(Box::new(FileLoader::new(params.files.clone())));
    }

    let mut raw: Vec<RawContent> = Vec::new();
    for loader in &loaders {
        raw.extend(loader.load(progress.as_deref_mut())?);
    }

    let mut records: Vec<ProcessedRecord> = Vec::with_capacity(raw.len());
    for content in raw {
        if let Some(p) = progress.as_deref_mut() {
            p.log(&format!("Processing {}", content.url));
        }
        logf!("Processing {}", content.url);
        records.push(process::process(content));
    }

    let ds = report::build_report(&records);

    let path = match &params.out {
        Some(p) => p.clone(),
        None => default_report_path(Path::new(REPORTS_DIR), params.format),
    };
    write_report(&path, &ds, params.format)?;
    logf!("Wrote {} ({} rows)", path.display(), ds.rows.len());

    Ok(RunSummary {
        report_path: path,
        rows_written: ds.rows.len(),
        columns: ds.headers.as_ref().map_or(0, |h| h.len().saturating_sub(2)),
    })
}
