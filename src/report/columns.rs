// src/report/columns.rs
use indexmap::IndexSet;

use crate::process::ProcessedRecord;

/// Collect the report's identifier columns: every identifier name seen
/// in any record's counts, first-seen order, no duplicates.
///
/// No filtering by origin or kind: even records that never merge still
/// contribute to the schema. Record order and per-record key order are
/// both insertion-ordered, so the result is reproducible.
pub fn discover_columns(records: &[ProcessedRecord]) -> Vec<String> {
    let mut seen: IndexSet<String> = IndexSet::new();

    for rec in records {
        for name in rec.calls.keys() {
            if !seen.contains(name) {
                seen.insert(name.clone());
            }
        }
    }

    seen.into_iter().collect()
}
