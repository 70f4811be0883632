use std::path::{Path, PathBuf};

use crate::config::{LibrarySettings, TrackEntry};

use super::cover::CoverFinder;
use super::display::display_from_fields;
use super::model::{AudioRef, CoverRef, Track};
use super::scan::{read_tags, scan};

/// The ordered, immutable list of tracks shown in the carousel.
///
/// Page `i` of the carousel and item `i` of the player queue are the same track.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    tracks: Vec<Track>,
}

fn resolve(root: &Path, p: &Path) -> PathBuf {
    if p.is_absolute() {
        p.to_path_buf()
    } else {
        root.join(p)
    }
}

impl Catalog {
    pub fn new(tracks: Vec<Track>) -> Self {
        Self { tracks }
    }

    /// Build the catalog from the configured fixed list, or scan `root` when
    /// no tracks are configured.
    pub fn load(root: &Path, settings: &LibrarySettings) -> Self {
        if settings.tracks.is_empty() {
            Self::new(scan(root, settings))
        } else {
            Self::from_entries(root, &settings.tracks, settings)
        }
    }

    /// Build from fixed entries, keeping their order. Relative paths resolve
    /// against `root`.
    pub fn from_entries(root: &Path, entries: &[TrackEntry], settings: &LibrarySettings) -> Self {
        let mut covers = CoverFinder::default();
        let tracks = entries
            .iter()
            .map(|entry| {
                let path = resolve(root, &entry.audio);
                let tags = read_tags(&path);
                let cover = match &entry.cover {
                    Some(c) => CoverRef::File(resolve(root, c)),
                    None => covers.cover_for(&path, tags.has_picture),
                };
                let display = display_from_fields(
                    &path,
                    &entry.title,
                    tags.artist.as_deref(),
                    tags.album.as_deref(),
                    &settings.display_fields,
                    &settings.display_separator,
                );
                Track {
                    title: entry.title.clone(),
                    artist: tags.artist,
                    album: tags.album,
                    display,
                    audio: AudioRef {
                        path,
                        duration: tags.duration,
                    },
                    cover,
                }
            })
            .collect();
        Self { tracks }
    }

    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Track> {
        self.tracks.get(index)
    }

    pub fn tracks(&self) -> &[Track] {
        &self.tracks
    }
}
