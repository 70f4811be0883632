use std::path::Path;

use crate::config::TrackDisplayField;

fn non_blank(s: Option<&str>) -> Option<&str> {
    s.map(str::trim).filter(|s| !s.is_empty())
}

/// Build a display string for a track from `fields`, joined with `sep`.
///
/// Missing or blank fields are skipped; when nothing is left the title is used.
pub fn display_from_fields(
    path: &Path,
    title: &str,
    artist: Option<&str>,
    album: Option<&str>,
    fields: &[TrackDisplayField],
    sep: &str,
) -> String {
    let stem = path.file_stem().and_then(|s| s.to_str());
    let full_path = path.display().to_string();

    let mut parts: Vec<&str> = Vec::new();
    for field in fields {
        match field {
            TrackDisplayField::Display => {
                parts.extend(non_blank(artist));
                parts.extend(non_blank(Some(title)));
            }
            TrackDisplayField::Title => parts.extend(non_blank(Some(title))),
            TrackDisplayField::Artist => parts.extend(non_blank(artist)),
            TrackDisplayField::Album => parts.extend(non_blank(album)),
            TrackDisplayField::Filename => parts.extend(non_blank(stem)),
            TrackDisplayField::Path => parts.push(&full_path),
        }
    }

    if parts.is_empty() {
        title.to_string()
    } else {
        parts.join(sep)
    }
}
