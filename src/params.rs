// src/params.rs
use std::path::PathBuf;
use crate::csv::Delim;

// Output
pub const REPORTS_DIR: &str = "reports";
pub const LOG_FILE: &str = "reports/debug.log";

// Net
pub const HTTP_PORT: u16 = 80;
pub const HTTP_TIMEOUT_SECS: u64 = 15;
pub const USER_AGENT: &str = "callscan/0.4";

// Concurrency
pub const WORKERS: usize = 4;
pub const REQUEST_PAUSE_MS: u64 = 75; // be polite
pub const JITTER_MS: u64 = 50; // extra 0..50 ms

#[derive(Clone)]
pub struct Params {
    pub urls: Vec<String>,       // pages to fetch (web origin)
    pub files: Vec<PathBuf>,     // local scripts/pages (file origin)
    pub out: Option<PathBuf>,    // output path override
    pub format: Delim,
    pub quiet: bool,             // suppress per-item console lines
}

impl Params {
    pub fn new() -> Self {
        Self {
            urls: Vec::new(),
            files: Vec::new(),
            out: None,
            format: Delim::Csv,
            quiet: false,
        }
    }
}
