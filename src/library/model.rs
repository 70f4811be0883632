use std::path::PathBuf;
use std::time::Duration;

/// Handle the player uses to open a track's audio.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AudioRef {
    pub path: PathBuf,
    /// Duration from the file's tags, when they could be read.
    pub duration: Option<Duration>,
}

/// Where a track's cover art lives.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CoverRef {
    #[default]
    None,
    /// A sidecar image file.
    File(PathBuf),
    /// A picture embedded in the audio file's tags.
    Embedded,
}

#[derive(Debug, Clone)]
pub struct Track {
    pub title: String,
    pub artist: Option<String>,
    pub album: Option<String>,
    pub display: String,
    pub audio: AudioRef,
    pub cover: CoverRef,
}
