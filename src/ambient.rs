//! Ambient background colors.
//!
//! A perpetual timer walks two parallel palettes and the output colors
//! cross-fade to each new entry. The UI paints a gradient between the two
//! animated colors and picks a readable text color from the first one.

mod color;
mod cycler;

pub use color::{AmbientColorPair, Palette, Rgb};
pub use cycler::{AmbientColors, AmbientCycler, text_color_for};
