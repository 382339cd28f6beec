// src/process.rs
//
// Per-content-type processing: raw content in, invocation counts out.
// The dispatch is an exhaustive match on ContentKind so adding a kind
// forces a decision here.

use indexmap::IndexMap;

use crate::core::script;
use crate::loader::{ContentKind, Origin, RawContent};

/// Identifier name → invocation count.
/// Insertion-ordered: column discovery depends on reproducible key order.
pub type CallCounts = IndexMap<String, u64>;

/// One content unit annotated with its invocation counts.
/// The unit the report engine consumes. An empty `calls` map means
/// "no identifiers observed".
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProcessedRecord {
    pub url: String,
    pub kind: ContentKind,
    pub origin: Origin,
    pub data: String,
    pub calls: CallCounts,
}

/// Process one raw content item. `data` is carried through verbatim;
/// it becomes the report's `raw` cell.
///
/// Html carries no counts of its own; a page's numbers come from the
/// scripts merged into it by the report reduction.
pub fn process(raw: RawContent) -> ProcessedRecord {
    let calls = match raw.kind {
        ContentKind::Js => script::count_invocations(&raw.data),
        ContentKind::Html => CallCounts::new(),
    };

    ProcessedRecord {
        url: raw.url,
        kind: raw.kind,
        origin: raw.origin,
        data: raw.data,
        calls,
    }
}
