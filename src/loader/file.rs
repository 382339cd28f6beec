// src/loader/file.rs
use std::{error::Error, fs, path::{Path, PathBuf}};

use crate::progress::Progress;

use super::{ContentKind, Loader, Origin, RawContent};

/// Reads user-named local files. File records stand alone in the
/// report; they never merge.
pub struct FileLoader {
    paths: Vec<PathBuf>,
}

impl FileLoader {
    pub fn new(paths: Vec<PathBuf>) -> Self {
        Self { paths }
    }
}

/// Kind by extension: .html/.htm are page markup, everything else is
/// treated as script text.
fn kind_of(path: &Path) -> ContentKind {
    match path.extension().and_then(|s| s.to_str()) {
        Some(ext) if ext.eq_ignore_ascii_case("html") || ext.eq_ignore_ascii_case("htm") => {
            ContentKind::Html
        }
        _ => ContentKind::Js,
    }
}

impl Loader for FileLoader {
    fn load<'p>(
        &self,
        mut progress: Option<&mut (dyn Progress + 'p)>,
    ) -> Result<Vec<RawContent>, Box<dyn Error>> {
        let mut out = Vec::with_capacity(self.paths.len());

        for path in &self.paths {
            // The user named this file; failing to read it is fatal.
            let data = fs::read_to_string(path)
                .map_err(|e| format!("{}: {}", path.display(), e))?;

            if let Some(p) = progress.as_deref_mut() {
                p.item_done(&path.to_string_lossy());
            }

            out.push(RawContent {
                url: path.to_string_lossy().into_owned(),
                kind: kind_of(path),
                origin: Origin::File,
                data,
            });
        }

        Ok(out)
    }
}
