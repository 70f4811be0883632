//! RGB colors and the two parallel ambient palettes.

use ratatui::style::Color;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const WHITE: Rgb = Rgb::new(0xFF, 0xFF, 0xFF);
    /// Text and icon color used on light backgrounds.
    pub const DARK_GRAY: Rgb = Rgb::from_u32(0x414141);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Build from a packed `0xRRGGBB` value.
    pub const fn from_u32(rgb: u32) -> Self {
        Self {
            r: ((rgb >> 16) & 0xFF) as u8,
            g: ((rgb >> 8) & 0xFF) as u8,
            b: (rgb & 0xFF) as u8,
        }
    }

    /// Parse `#RRGGBB`, `RRGGBB` or `#AARRGGBB` (alpha is ignored).
    pub fn from_hex(s: &str) -> Option<Self> {
        let hex = s.trim().trim_start_matches('#');
        if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return None;
        }
        let rgb = match hex.len() {
            6 => hex,
            8 => &hex[2..],
            _ => return None,
        };
        u32::from_str_radix(rgb, 16).ok().map(Self::from_u32)
    }

    /// Per-channel linear interpolation, `t` clamped to `[0, 1]`.
    pub fn lerp(self, other: Rgb, t: f32) -> Rgb {
        let t = t.clamp(0.0, 1.0);
        let mix = |a: u8, b: u8| -> u8 {
            let v = a as f32 + (b as f32 - a as f32) * t;
            v.round().clamp(0.0, 255.0) as u8
        };
        Rgb::new(mix(self.r, other.r), mix(self.g, other.g), mix(self.b, other.b))
    }

    /// Relative luminance in `[0, 1]` (sRGB transfer undone, Rec. 709 weights).
    pub fn luminance(self) -> f32 {
        fn linear(channel: u8) -> f32 {
            let c = channel as f32 / 255.0;
            if c <= 0.04045 {
                c / 12.92
            } else {
                ((c + 0.055) / 1.055).powf(2.4)
            }
        }
        0.2126 * linear(self.r) + 0.7152 * linear(self.g) + 0.0722 * linear(self.b)
    }
}

impl From<Rgb> for Color {
    fn from(c: Rgb) -> Self {
        Color::Rgb(c.r, c.g, c.b)
    }
}

/// Foreground/background gradient stops for one palette slot.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct AmbientColorPair {
    pub foreground: Rgb,
    pub background: Rgb,
}

const LIGHT: [u32; 9] = [
    0xFF5A5A, 0xFFBD5A, 0xDBFF5A, 0x65FF5A, 0x17DBBE, 0x5A9CFF, 0x031E7E, 0xFF5AF7, 0xFF5A5A,
];

const DARK: [u32; 9] = [
    0xB31818, 0xDD8C12, 0xADDA0D, 0x14CE07, 0x04AC93, 0x5A9CFF, 0x03175F, 0xA5009D, 0x9C0000,
];

/// Two parallel, equally long, non-empty color lists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    light: Vec<Rgb>,
    dark: Vec<Rgb>,
}

impl Palette {
    /// Returns `None` unless both lists are non-empty and of equal length.
    pub fn new(light: Vec<Rgb>, dark: Vec<Rgb>) -> Option<Self> {
        if light.is_empty() || light.len() != dark.len() {
            return None;
        }
        Some(Self { light, dark })
    }

    pub fn len(&self) -> usize {
        self.light.len()
    }

    /// Colors at `index`, wrapped into range.
    pub fn pair(&self, index: usize) -> AmbientColorPair {
        let i = index % self.len();
        AmbientColorPair {
            foreground: self.light[i],
            background: self.dark[i],
        }
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            light: LIGHT.iter().copied().map(Rgb::from_u32).collect(),
            dark: DARK.iter().copied().map(Rgb::from_u32).collect(),
        }
    }
}
