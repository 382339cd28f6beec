// src/loader/web.rs
use std::{
    error::Error, thread, time::Duration,
    sync::{ mpsc, Arc, atomic::{ AtomicUsize, Ordering }}
};

use crate::{
    core::{ html, html::ScriptBlock, net },
    params::{ WORKERS, REQUEST_PAUSE_MS, JITTER_MS },
    progress::Progress,
};

use super::{ContentKind, Loader, Origin, RawContent};

/// Fetches whole pages plus the scripts they reference.
pub struct WebLoader {
    pages: Vec<String>,
}

impl WebLoader {
    pub fn new(pages: Vec<String>) -> Self {
        Self { pages }
    }
}

impl Loader for WebLoader {
    fn load<'p>(
        &self,
        mut progress: Option<&mut (dyn Progress + 'p)>,
    ) -> Result<Vec<RawContent>, Box<dyn Error>> {
        if self.pages.is_empty() {
            return Ok(Vec::new());
        }

        if let Some(p) = progress.as_deref_mut() {
            p.begin(self.pages.len());
        }

        // Concurrency
        type FetchOk = (usize, Vec<RawContent>);
        type FetchErr = (usize, String);

        let pages = Arc::new(self.pages.clone());
        let counter = Arc::new(AtomicUsize::new(0));
        let (res_tx, res_rx) = mpsc::channel::<Result<FetchOk, FetchErr>>();

        let workers = WORKERS.min(pages.len()).max(1);

        for _ in 0..workers {
            let pages = Arc::clone(&pages);
            let idx = Arc::clone(&counter);
            let tx = res_tx.clone();

            thread::spawn(move || {
                loop {
                    let i = idx.fetch_add(1, Ordering::Relaxed);
                    if i >= pages.len() {
                        break;
                    }
                    let result = match fetch_page(&pages[i]) {
                        Ok(bundle) => Ok((i, bundle)),
                        Err(e) => Err((i, e.to_string())),
                    };
                    let _ = tx.send(result);
                    let jitter = (i as u64) % JITTER_MS;
                    thread::sleep(Duration::from_millis(REQUEST_PAUSE_MS + jitter)); // be polite
                }
            });
        }
        drop(res_tx); // main thread is sole receiver now

        // Collect, then restore request order: the caller's page order
        // decides the report's row order.
        let mut per_page: Vec<(usize, Vec<RawContent>)> = Vec::new();

        for _ in 0..pages.len() {
            match res_rx.recv() {
                Ok(Ok((i, bundle))) => {
                    if let Some(p) = progress.as_deref_mut() {
                        p.item_done(&pages[i]);
                    }
                    per_page.push((i, bundle));
                }
                Ok(Err((i, msg))) => {
                    if let Some(p) = progress.as_deref_mut() {
                        p.item_failed(&pages[i]);
                    }
                    loge!("Page {}: {}", pages[i], msg);
                }
                Err(_) => break, // workers ended early; bail gracefully
            }
        }

        if let Some(p) = progress.as_deref_mut() {
            p.finish();
        }

        per_page.sort_by_key(|(i, _)| *i);
        let mut out = Vec::new();
        for (_, mut bundle) in per_page {
            out.append(&mut bundle);
        }
        Ok(out)
    }
}

/// Fetch one page and everything it runs.
/// Records come back in report order: the page's scripts in document
/// order, then the page itself. A script that fails to fetch is logged
/// and skipped; it never sinks the whole page.
fn fetch_page(url: &str) -> Result<Vec<RawContent>, Box<dyn Error>> {
    let doc = net::http_get(url)?;

    let mut out = Vec::new();
    let mut inline_n = 0usize;

    for block in html::script_blocks(&doc) {
        match block {
            ScriptBlock::External(src) => {
                let script_url = net::resolve_href(url, &src);
                match net::http_get(&script_url) {
                    Ok(body) => out.push(RawContent {
                        url: script_url,
                        kind: ContentKind::Js,
                        origin: Origin::Web,
                        data: body,
                    }),
                    Err(e) => loge!("Script {}: {}", script_url, e),
                }
            }
            ScriptBlock::Inline(body) => {
                inline_n += 1;
                out.push(RawContent {
                    url: format!("{}#inline-{}", url, inline_n),
                    kind: ContentKind::Js,
                    origin: Origin::Web,
                    data: body,
                });
            }
        }
    }

    out.push(RawContent {
        url: url.to_string(),
        kind: ContentKind::Html,
        origin: Origin::Web,
        data: doc,
    });

    Ok(out)
}
