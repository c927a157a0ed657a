//! Shared sprite bitmap.

use image::RgbaImage;

use crate::color::Color;
use crate::geometry::PixelRect;

/// An immutable RGBA bitmap drawn once per particle per frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sprite {
    image: RgbaImage,
}

impl Sprite {
    /// Wrap a finished bitmap.
    pub fn new(image: RgbaImage) -> Self {
        Self { image }
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    /// The full bitmap as a source rectangle.
    pub fn bounds(&self) -> PixelRect {
        PixelRect::new(0, 0, self.width(), self.height())
    }

    /// Pixel at `(x, y)`, transparent outside the bitmap.
    pub fn pixel(&self, x: u32, y: u32) -> Color {
        self.image
            .get_pixel_checked(x, y)
            .map_or(Color::TRANSPARENT, |px| Color::from(*px))
    }

    pub fn image(&self) -> &RgbaImage {
        &self.image
    }
}
