//! RGB colors for entities and the draw surface

use serde::{Deserialize, Serialize};

/// An opaque 8-bit RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const WHITE: Color = Color::rgb(0xff, 0xff, 0xff);
    /// Play-area background (#0f172a)
    pub const BACKGROUND: Color = Color::rgb(0x0f, 0x17, 0x2a);
    /// Ground band (#1e293b)
    pub const GROUND: Color = Color::rgb(0x1e, 0x29, 0x3b);
    /// Cannon barrel (#38bdf8)
    pub const BARREL: Color = Color::rgb(0x38, 0xbd, 0xf8);
    /// Cannon base (#475569)
    pub const CANNON_BASE: Color = Color::rgb(0x47, 0x55, 0x69);
    /// Projectile fill and glow (#f472b6)
    pub const PROJECTILE: Color = Color::rgb(0xf4, 0x72, 0xb6);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Build a color from hue (degrees), saturation and lightness (0-1)
    pub fn from_hsl(hue: f32, saturation: f32, lightness: f32) -> Self {
        let h = hue.rem_euclid(360.0) / 60.0;
        let s = saturation.clamp(0.0, 1.0);
        let l = lightness.clamp(0.0, 1.0);

        let chroma = (1.0 - (2.0 * l - 1.0).abs()) * s;
        let x = chroma * (1.0 - (h % 2.0 - 1.0).abs());
        let (r, g, b) = match h as u32 {
            0 => (chroma, x, 0.0),
            1 => (x, chroma, 0.0),
            2 => (0.0, chroma, x),
            3 => (0.0, x, chroma),
            4 => (x, 0.0, chroma),
            _ => (chroma, 0.0, x),
        };
        let m = l - chroma / 2.0;
        let channel = |v: f32| ((v + m) * 255.0).round().clamp(0.0, 255.0) as u8;

        Self::rgb(channel(r), channel(g), channel(b))
    }

    /// CSS hex form (`#rrggbb`) for canvas fill/stroke styles
    pub fn to_css(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::WHITE
    }
}
