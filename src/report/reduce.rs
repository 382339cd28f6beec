// src/report/reduce.rs
//
// The row reduction. Walks the record list from last to first carrying
// an Accumulator of in-progress counts: a page's scripts sit *before*
// the page in the record list, so the reverse walk sees the scripts
// first and the page collects their sum. Emitting a page row resets
// the accumulator for the next page out.

use crate::loader::{ContentKind, Origin};
use crate::process::{CallCounts, ProcessedRecord};

/// How a record takes part in the reduction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RecordClass {
    /// Web-origin script: counts flow into the enclosing page's row.
    WebScript,
    /// Web-origin page: emits the accumulated counts, then resets them.
    WebPage,
    /// Everything else: emitted as-is with its own counts.
    Standalone,
}

impl RecordClass {
    pub fn of(rec: &ProcessedRecord) -> Self {
        match (rec.origin, rec.kind) {
            (Origin::Web, ContentKind::Js) => RecordClass::WebScript,
            (Origin::Web, ContentKind::Html) => RecordClass::WebPage,
            (Origin::File, _) => RecordClass::Standalone,
        }
    }
}

/// Running per-identifier totals for the page currently being folded.
#[derive(Clone, Debug, Default)]
pub struct Accumulator {
    counters: CallCounts,
}

impl Accumulator {
    pub fn new() -> Self {
        Self { counters: CallCounts::new() }
    }

    /// Add `calls` into the running totals, creating counters at 0.
    pub fn absorb(&mut self, calls: &CallCounts) {
        for (name, n) in calls {
            *self.counters.entry(name.clone()).or_insert(0) += n;
        }
    }

    /// Current totals.
    pub fn counters(&self) -> &CallCounts {
        &self.counters
    }

    /// Clear the totals; a page has consumed them.
    pub fn reset(&mut self) {
        self.counters.clear();
    }
}

/// Fold records into report rows, one per record, input order preserved.
///
/// Scripts with no page left of them in the record list accumulate
/// counts that nothing ever reads; those counts vanish when the walk
/// ends or a page resets the state. That mirrors the tool's historical
/// behavior and is pinned down in tests rather than changed here.
pub fn build_rows(records: &[ProcessedRecord], columns: &[String]) -> Vec<Vec<String>> {
    let mut acc = Accumulator::new();
    let mut rows: Vec<Vec<String>> = Vec::with_capacity(records.len());

    for rec in records.iter().rev() {
        let class = RecordClass::of(rec);

        if class == RecordClass::WebScript {
            acc.absorb(&rec.calls);
        }

        // A page row shows the accumulated script counts; every other
        // row shows the record's own.
        let counts = match class {
            RecordClass::WebPage => format_counts(columns, acc.counters()),
            _ => format_counts(columns, &rec.calls),
        };

        // Script rows keep their raw content but no link; their counts
        // already flowed into their page.
        let link = match class {
            RecordClass::WebScript => s!(),
            _ => rec.url.clone(),
        };

        let mut row = Vec::with_capacity(2 + columns.len());
        row.push(link);
        row.push(rec.data.clone());
        row.extend(counts);
        rows.push(row);

        if class == RecordClass::WebPage {
            acc.reset();
        }
    }

    // Rows were produced back-to-front; restore input order.
    rows.reverse();
    rows
}

/// Render counts positionally against the full column list.
/// Absent identifiers render as 0.
pub fn format_counts(columns: &[String], calls: &CallCounts) -> Vec<String> {
    columns
        .iter()
        .map(|name| calls.get(name).copied().unwrap_or(0).to_string())
        .collect()
}
