//! Track catalog: scanning a music folder or taking a fixed list from the
//! config, reading tags and locating cover art.

mod catalog;
mod cover;
mod display;
mod model;
mod scan;

pub use catalog::Catalog;
pub use model::{AudioRef, CoverRef, Track};
