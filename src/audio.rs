//! Audio playback module.
//!
//! A dedicated thread owns the `rodio` output stream and a queue of items.
//! [`AudioPlayer`] is the handle the runtime talks to: it implements
//! [`crate::playback::Player`] by sending commands over a channel and reads
//! the shared playback state back.

mod player;
mod queue;
mod sink;
mod thread;
mod types;

pub use player::AudioPlayer;
