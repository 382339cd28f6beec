// src/report/mod.rs
//! # Report engine
//!
//! The aggregation-and-tabulation core. Consumes an ordered list of
//! processed records and produces one rectangular table.
//!
//! ## What lives here
//! - **Column discovery** (`columns`): the ordered, deduplicated set of
//!   identifier names that become report columns, first-seen order
//!   across the full input.
//! - **Row reduction** (`reduce`): the single reverse pass that merges
//!   script counts into their page, resets at page boundaries, and
//!   emits one row per record.
//!
//! ## What does **not** live here
//! - **Fetching/reading content**: loaders hand us finished records.
//! - **Script parsing**: counts arrive precomputed from `process`.
//! - **Serialization and file naming**: `csv` and `file` take the
//!   table from here.
//!
//! ## Conventions & invariants
//! - Pure, synchronous, total: every input shape has a defined value,
//!   nothing here errors or suspends.
//! - Every row has exactly `2 + columns` cells, so the writer can rely
//!   on the shape.
//! - The input list must already have pages following their scripts;
//!   that adjacency is the caller's job (the web loader guarantees it).

pub mod columns;
pub mod reduce;

pub use columns::discover_columns;
pub use reduce::{build_rows, format_counts, Accumulator, RecordClass};

use crate::process::ProcessedRecord;

/// Tabular result: optional header row + data rows.
pub struct DataSet {
    pub headers: Option<Vec<String>>,
    pub rows: Vec<Vec<String>>,
}

/// Build the full report table: header `[link, raw, ...identifiers]`,
/// one row per record.
pub fn build_report(records: &[ProcessedRecord]) -> DataSet {
    let columns = discover_columns(records);
    let rows = build_rows(records, &columns);

    let mut headers = Vec::with_capacity(2 + columns.len());
    headers.push(s!("link"));
    headers.push(s!("raw"));
    headers.extend(columns);

    DataSet { headers: Some(headers), rows }
}
