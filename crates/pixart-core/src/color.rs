//! RGBA color value with compositing and inversion.

use serde::{Deserialize, Serialize};

/// Tolerance used when comparing alpha values.
pub const ALPHA_EPSILON: f32 = 0.01;

/// An RGBA color: 8-bit RGB channels and a real alpha in `[0, 1]`.
///
/// Equality is exact on RGB and approximate on alpha (see [`ALPHA_EPSILON`]),
/// so colors survive float round trips through blending and 8-bit export.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f32,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    /// The color of an erased or never-painted pixel.
    pub const TRANSPARENT: Color = Color::new(255, 255, 255, 0.0);

    pub const fn new(r: u8, g: u8, b: u8, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Fully opaque color.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 1.0)
    }

    /// Build from 8-bit RGBA, mapping alpha `0..=255` onto `0.0..=1.0`.
    pub fn from_rgba8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self::new(r, g, b, a as f32 / 255.0)
    }

    /// Convert to 8-bit RGBA.
    pub fn to_rgba8(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.alpha8()]
    }

    /// Alpha quantized to 8 bits.
    pub fn alpha8(self) -> u8 {
        (self.a.clamp(0.0, 1.0) * 255.0).round() as u8
    }

    /// True when the color has no coverage at all.
    pub fn is_transparent(self) -> bool {
        self.a == 0.0
    }

    /// Alpha-over compositing of `top` onto `bottom`.
    ///
    /// Painting an opaque color replaces what is underneath; translucent
    /// colors accumulate.
    pub fn blend(top: Color, bottom: Color) -> Color {
        let alpha = top.a + bottom.a * (1.0 - top.a);
        if alpha <= 0.0 {
            return Color::new(0, 0, 0, 0.0);
        }

        let channel = |t: u8, b: u8| -> u8 {
            let value = (t as f32 * top.a + b as f32 * bottom.a * (1.0 - top.a)) / alpha;
            value.round().clamp(0.0, 255.0) as u8
        };

        Color {
            r: channel(top.r, bottom.r),
            g: channel(top.g, bottom.g),
            b: channel(top.b, bottom.b),
            a: alpha.clamp(0.0, 1.0),
        }
    }

    /// Invert the RGB channels, keeping alpha.
    pub fn invert(self) -> Color {
        Color {
            r: 255 - self.r,
            g: 255 - self.g,
            b: 255 - self.b,
            a: self.a,
        }
    }
}

impl PartialEq for Color {
    fn eq(&self, other: &Self) -> bool {
        self.r == other.r
            && self.g == other.g
            && self.b == other.b
            && (self.a - other.a).abs() < ALPHA_EPSILON
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}

impl From<Color> for peniko::Color {
    fn from(color: Color) -> Self {
        peniko::Color::from_rgba8(color.r, color.g, color.b, color.alpha8())
    }
}

impl From<peniko::Color> for Color {
    fn from(color: peniko::Color) -> Self {
        let rgba = color.to_rgba8();
        Color::from_rgba8(rgba.r, rgba.g, rgba.b, rgba.a)
    }
}
