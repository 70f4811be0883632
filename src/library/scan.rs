use std::path::Path;
use std::time::Duration;

use lofty::prelude::*;
use walkdir::WalkDir;

use crate::config::LibrarySettings;

use super::cover::CoverFinder;
use super::display::display_from_fields;
use super::model::{AudioRef, Track};

/// Metadata read from an audio file's tags.
#[derive(Debug, Default)]
pub(super) struct TagInfo {
    pub title: Option<String>,
    pub artist: Option<String>,
    pub album: Option<String>,
    pub duration: Option<Duration>,
    pub has_picture: bool,
}

fn non_blank(s: Option<std::borrow::Cow<'_, str>>) -> Option<String> {
    s.map(|v| v.trim().to_string()).filter(|v| !v.is_empty())
}

/// Read tags with `lofty`. Unreadable files yield an empty `TagInfo`.
pub(super) fn read_tags(path: &Path) -> TagInfo {
    let tagged = match lofty::read_from_path(path) {
        Ok(t) => t,
        Err(e) => {
            log::debug!("no tags for {}: {e}", path.display());
            return TagInfo::default();
        }
    };

    let mut info = TagInfo {
        duration: Some(tagged.properties().duration()).filter(|d| !d.is_zero()),
        ..TagInfo::default()
    };

    if let Some(tag) = tagged.primary_tag().or_else(|| tagged.first_tag()) {
        info.title = non_blank(tag.title());
        info.artist = non_blank(tag.artist());
        info.album = non_blank(tag.album());
        info.has_picture = !tag.pictures().is_empty();
    }
    info
}

fn is_audio_file(path: &Path, settings: &LibrarySettings) -> bool {
    let Some(ext) = path.extension().and_then(|s| s.to_str()) else {
        return false;
    };
    let ext = ext.to_ascii_lowercase();
    settings
        .extensions
        .iter()
        .map(|e| e.trim().trim_start_matches('.').to_ascii_lowercase())
        .any(|e| !e.is_empty() && e == ext)
}

fn is_hidden(path: &Path) -> bool {
    path.file_name()
        .and_then(|s| s.to_str())
        .is_some_and(|name| name.starts_with('.'))
}

fn track_from_file(path: &Path, settings: &LibrarySettings, covers: &mut CoverFinder) -> Track {
    let tags = read_tags(path);
    let title = tags.title.clone().unwrap_or_else(|| {
        path.file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("UNKNOWN")
            .to_string()
    });

    let display = display_from_fields(
        path,
        &title,
        tags.artist.as_deref(),
        tags.album.as_deref(),
        &settings.display_fields,
        &settings.display_separator,
    );

    Track {
        title,
        artist: tags.artist,
        album: tags.album,
        display,
        audio: AudioRef {
            path: path.to_path_buf(),
            duration: tags.duration,
        },
        cover: covers.cover_for(path, tags.has_picture),
    }
}

/// Walk `dir` and build a track for every audio file, sorted by display string.
pub fn scan(dir: &Path, settings: &LibrarySettings) -> Vec<Track> {
    let mut walker = WalkDir::new(dir).follow_links(settings.follow_links);

    // Non-recursive = only the root directory.
    let depth_cap = if settings.recursive {
        settings.max_depth
    } else {
        Some(1)
    };
    if let Some(d) = depth_cap {
        walker = walker.max_depth(d);
    }

    let mut covers = CoverFinder::default();
    let mut tracks: Vec<Track> = walker
        .into_iter()
        .filter_entry(|e| settings.include_hidden || e.depth() == 0 || !is_hidden(e.path()))
        .filter_map(Result::ok)
        .filter(|e| e.path().is_file() && is_audio_file(e.path(), settings))
        .map(|e| track_from_file(e.path(), settings, &mut covers))
        .collect();

    tracks.sort_by_cached_key(|t| t.display.to_lowercase());
    tracks
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TrackDisplayField;
    use crate::library::CoverRef;
    use std::fs;
    use tempfile::tempdir;

    fn by_filename() -> LibrarySettings {
        LibrarySettings {
            display_fields: vec![TrackDisplayField::Filename],
            ..LibrarySettings::default()
        }
    }

    #[test]
    fn is_audio_file_matches_configured_extensions_case_insensitive() {
        let settings = LibrarySettings::default();
        assert!(is_audio_file(Path::new("/tmp/a.mp3"), &settings));
        assert!(is_audio_file(Path::new("/tmp/a.MP3"), &settings));
        assert!(is_audio_file(Path::new("/tmp/a.flac"), &settings));
        assert!(is_audio_file(Path::new("/tmp/a.ogg"), &settings));
        assert!(!is_audio_file(Path::new("/tmp/a.txt"), &settings));
        assert!(!is_audio_file(Path::new("/tmp/a"), &settings));

        let dotted = LibrarySettings {
            extensions: vec![".OPUS".into(), "  ".into()],
            ..LibrarySettings::default()
        };
        assert!(is_audio_file(Path::new("/tmp/a.opus"), &dotted));
        assert!(!is_audio_file(Path::new("/tmp/a.mp3"), &dotted));
    }

    #[test]
    fn scan_filters_non_audio_and_sorts_by_display_case_insensitive() {
        let dir = tempdir().unwrap();

        fs::write(dir.path().join("b.MP3"), b"not a real mp3").unwrap();
        fs::write(dir.path().join("A.ogg"), b"not a real ogg").unwrap();
        fs::write(dir.path().join("c.txt"), b"ignore me").unwrap();

        let settings = LibrarySettings {
            display_fields: vec![TrackDisplayField::Title],
            ..LibrarySettings::default()
        };
        let tracks = scan(dir.path(), &settings);
        assert_eq!(tracks.len(), 2);
        assert_eq!(tracks[0].title, "A");
        assert_eq!(tracks[0].display, "A");
        assert_eq!(tracks[1].title, "b");
        assert_eq!(tracks[0].audio.path, dir.path().join("A.ogg"));
        // Garbage files have no readable duration.
        assert!(tracks[0].audio.duration.is_none());
    }

    #[test]
    fn scan_respects_include_hidden_false() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join(".hidden.mp3"), b"not real").unwrap();
        fs::write(dir.path().join("visible.mp3"), b"not real").unwrap();

        let settings = LibrarySettings {
            include_hidden: false,
            ..by_filename()
        };
        let tracks = scan(dir.path(), &settings);

        assert_eq!(tracks.len(), 1);
        assert_eq!(tracks[0].display, "visible");
    }

    #[test]
    fn scan_respects_recursive_false() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("root.mp3"), b"not real").unwrap();
        let sub = dir.path().join("sub");
        fs::create_dir_all(&sub).unwrap();
        fs::write(sub.join("child.mp3"), b"not real").unwrap();

        let settings = LibrarySettings {
            recursive: false,
            ..by_filename()
        };
        let tracks = scan(dir.path(), &settings);
        assert_eq!(tracks.len(), 1);
        assert_eq!(tracks[0].display, "root");
    }

    #[test]
    fn scan_respects_max_depth() {
        let dir = tempdir().unwrap();
        let d1 = dir.path().join("d1");
        let d2 = d1.join("d2");
        fs::create_dir_all(&d2).unwrap();
        fs::write(dir.path().join("root.mp3"), b"not real").unwrap();
        fs::write(d1.join("one.mp3"), b"not real").unwrap();
        fs::write(d2.join("two.mp3"), b"not real").unwrap();

        // Root is depth 0, so max_depth=2 reaches d1/* but not d1/d2/*.
        let settings = LibrarySettings {
            max_depth: Some(2),
            ..by_filename()
        };
        let names: Vec<String> = scan(dir.path(), &settings)
            .into_iter()
            .map(|t| t.display)
            .collect();
        assert!(names.contains(&"root".to_string()));
        assert!(names.contains(&"one".to_string()));
        assert!(!names.contains(&"two".to_string()));
    }

    #[test]
    fn scan_picks_up_sidecar_covers_per_folder() {
        let dir = tempdir().unwrap();
        let album = dir.path().join("album");
        fs::create_dir_all(&album).unwrap();
        fs::write(album.join("song.mp3"), b"not real").unwrap();
        fs::write(album.join("Folder.JPG"), b"img").unwrap();
        fs::write(album.join("cover.png"), b"img").unwrap();
        fs::write(dir.path().join("loose.mp3"), b"not real").unwrap();

        let tracks = scan(dir.path(), &by_filename());
        let song = tracks.iter().find(|t| t.display == "song").unwrap();
        assert_eq!(song.cover, CoverRef::File(album.join("cover.png")));
        let loose = tracks.iter().find(|t| t.display == "loose").unwrap();
        assert_eq!(loose.cover, CoverRef::None);
    }
}
