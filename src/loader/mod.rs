// src/loader/mod.rs
//
// Content loading layer. Loaders fetch or read raw content and tag it
// with an origin and kind; they do no counting and no report logic.

use std::error::Error;

use crate::progress::Progress;

pub mod file;
pub mod web;

pub use file::FileLoader;
pub use web::WebLoader;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContentKind {
    Html,
    Js,
    // TODO: Css? counts would stay empty, but the raw cell is useful
}

/// Which loader produced a record. Only Web content takes part in
/// page/script merging downstream.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Origin {
    Web,
    File,
}

/// One loaded content unit, text carried verbatim.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RawContent {
    pub url: String,
    pub kind: ContentKind,
    pub origin: Origin,
    pub data: String,
}

pub trait Loader {
    /// Produce content records in report order. For web pages this means
    /// each page's scripts come immediately before the page itself.
    fn load<'p>(
        &self,
        progress: Option<&mut (dyn Progress + 'p)>,
    ) -> Result<Vec<RawContent>, Box<dyn Error>>;
}
