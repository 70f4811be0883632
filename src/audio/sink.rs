//! Utilities for creating `rodio` sinks from queue items.
//!
//! The helper here encapsulates opening/decoding a file and preparing a
//! paused `Sink` at the requested start position.

use std::fs::File;
use std::io::BufReader;
use std::time::Duration;

use anyhow::Context;
use rodio::{Decoder, OutputStream, Sink, Source};

use crate::library::AudioRef;

/// Create a paused `Sink` for `item` that starts playback at `start_at`.
///
/// Also returns the item's length: the tagged duration if the library had
/// one, else whatever the decoder reports.
pub(super) fn create_sink_at(
    stream: &OutputStream,
    item: &AudioRef,
    start_at: Duration,
) -> anyhow::Result<(Sink, Option<Duration>)> {
    let file = File::open(&item.path).with_context(|| format!("failed to open {:?}", item.path))?;

    let decoder = Decoder::new(BufReader::new(file))
        .with_context(|| format!("failed to decode {:?}", item.path))?;
    let duration = item.duration.or_else(|| decoder.total_duration());

    // `skip_duration` is our seeking primitive; even Duration::ZERO is fine.
    let source = decoder.skip_duration(start_at);

    let sink = Sink::connect_new(stream.mixer());
    sink.append(source);
    sink.pause();
    Ok((sink, duration))
}
