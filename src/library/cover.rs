use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use super::model::CoverRef;

const COVER_STEMS: [&str; 4] = ["cover", "folder", "front", "album"];
const COVER_EXTENSIONS: [&str; 3] = ["jpg", "jpeg", "png"];

fn is_cover_file(path: &Path) -> bool {
    let lower = |s: Option<&std::ffi::OsStr>| s.and_then(|s| s.to_str()).map(str::to_ascii_lowercase);
    match (lower(path.file_stem()), lower(path.extension())) {
        (Some(stem), Some(ext)) => {
            COVER_STEMS.contains(&stem.as_str()) && COVER_EXTENSIONS.contains(&ext.as_str())
        }
        _ => false,
    }
}

/// Find a sidecar cover image in `dir`, preferring the stem order of `COVER_STEMS`.
pub fn find_sidecar(dir: &Path) -> Option<PathBuf> {
    let mut candidates: Vec<PathBuf> = fs::read_dir(dir)
        .ok()?
        .filter_map(Result::ok)
        .map(|e| e.path())
        .filter(|p| p.is_file() && is_cover_file(p))
        .collect();

    candidates.sort_by_key(|p| {
        let stem = p
            .file_stem()
            .and_then(|s| s.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();
        COVER_STEMS.iter().position(|s| *s == stem).unwrap_or(usize::MAX)
    });
    candidates.into_iter().next()
}

/// Memoizes sidecar lookups per directory during a scan.
#[derive(Default)]
pub struct CoverFinder {
    by_dir: HashMap<PathBuf, Option<PathBuf>>,
}

impl CoverFinder {
    /// Cover for the audio file at `audio`: sidecar first, then embedded art.
    pub fn cover_for(&mut self, audio: &Path, has_embedded: bool) -> CoverRef {
        let dir = audio.parent().map(Path::to_path_buf).unwrap_or_default();
        let sidecar = self
            .by_dir
            .entry(dir)
            .or_insert_with_key(|dir| find_sidecar(dir))
            .clone();

        match sidecar {
            Some(p) => CoverRef::File(p),
            None if has_embedded => CoverRef::Embedded,
            None => CoverRef::None,
        }
    }
}
