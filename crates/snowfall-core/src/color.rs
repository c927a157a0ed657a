//! Straight-alpha RGBA color and source-over compositing.

use image::Rgba;

/// An 8-bit straight-alpha RGBA color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const TRANSPARENT: Self = Self::rgba(0, 0, 0, 0);
    pub const WHITE: Self = Self::rgb(0xFF, 0xFF, 0xFF);
    /// Mid gray used for the sprite shadow.
    pub const GRAY: Self = Self::rgb(0x88, 0x88, 0x88);

    /// Create an opaque color.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 0xFF }
    }

    /// Create a color with explicit alpha.
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Multiply alpha by `factor` (clamped to 0.0-1.0).
    pub fn scale_alpha(self, factor: f32) -> Self {
        let factor = factor.clamp(0.0, 1.0);
        Self {
            a: (self.a as f32 * factor).round() as u8,
            ..self
        }
    }

    /// Composite `self` over `dst` (Porter-Duff source-over).
    pub fn over(self, dst: Self) -> Self {
        if self.a == 0xFF {
            return self;
        }
        if self.a == 0 {
            return dst;
        }

        let sa = self.a as f32 / 255.0;
        let da = dst.a as f32 / 255.0;
        let out_a = sa + da * (1.0 - sa);
        if out_a <= 0.0 {
            return Self::TRANSPARENT;
        }

        let channel = |s: u8, d: u8| -> u8 {
            let v = (s as f32 * sa + d as f32 * da * (1.0 - sa)) / out_a;
            v.round().clamp(0.0, 255.0) as u8
        };

        Self {
            r: channel(self.r, dst.r),
            g: channel(self.g, dst.g),
            b: channel(self.b, dst.b),
            a: (out_a * 255.0).round() as u8,
        }
    }
}

impl From<Rgba<u8>> for Color {
    fn from(px: Rgba<u8>) -> Self {
        let [r, g, b, a] = px.0;
        Self { r, g, b, a }
    }
}

impl From<Color> for Rgba<u8> {
    fn from(c: Color) -> Self {
        Rgba([c.r, c.g, c.b, c.a])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opaque_source_replaces_destination() {
        assert_eq!(Color::WHITE.over(Color::GRAY), Color::WHITE);
    }

    #[test]
    fn test_transparent_source_keeps_destination() {
        assert_eq!(Color::TRANSPARENT.over(Color::GRAY), Color::GRAY);
    }

    #[test]
    fn test_half_white_over_black() {
        let half = Color::WHITE.scale_alpha(0.5);
        let out = half.over(Color::rgb(0, 0, 0));
        assert_eq!(out.a, 255);
        assert!((127..=129).contains(&out.r));
    }

    #[test]
    fn test_over_transparent_keeps_source_color() {
        let src = Color::rgba(0x88, 0x88, 0x88, 64);
        let out = src.over(Color::TRANSPARENT);
        assert_eq!(out, src);
    }

    #[test]
    fn test_scale_alpha_clamps() {
        assert_eq!(Color::WHITE.scale_alpha(2.0).a, 255);
        assert_eq!(Color::WHITE.scale_alpha(-1.0).a, 0);
    }
}
