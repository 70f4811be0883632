//! Application module: the store the screen renders from.
//!
//! The `App` model lives in `app::model` and holds the catalog, the mirrored
//! playback state, the carousel and the ambient colors.

mod model;

pub use model::*;

#[cfg(test)]
mod tests;
