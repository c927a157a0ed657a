//! CPU drawing surface over an RGBA bitmap.

use image::{GrayImage, Luma, RgbaImage, imageops};
use snowfall_core::{
    Affine2, Color, PixelRect, Rect, Sprite, Stroke, Surface, Vec2, rotation_about,
};
use tracing::warn;

/// Convert a blur radius to a Gaussian sigma.
pub fn blur_sigma(radius: f32) -> f32 {
    if radius > 0.0 {
        0.57735 * radius + 0.5
    } else {
        0.0
    }
}

/// A software drawing surface.
#[derive(Debug, Clone)]
pub struct Raster {
    image: RgbaImage,
    transform: Affine2,
    stack: Vec<Affine2>,
}

impl Raster {
    /// Create a transparent raster.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            image: RgbaImage::new(width, height),
            transform: Affine2::IDENTITY,
            stack: Vec::new(),
        }
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    /// Current transform.
    pub fn transform(&self) -> Affine2 {
        self.transform
    }

    /// Fill every pixel with `color` and reset the transform stack.
    pub fn clear(&mut self, color: Color) {
        let px = color.into();
        for p in self.image.pixels_mut() {
            *p = px;
        }
        self.transform = Affine2::IDENTITY;
        self.stack.clear();
    }

    /// Reallocate the bitmap if the size differs. Contents become transparent.
    pub fn resize(&mut self, width: u32, height: u32) {
        if self.image.dimensions() != (width, height) {
            self.image = RgbaImage::new(width, height);
        }
        self.transform = Affine2::IDENTITY;
        self.stack.clear();
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

    /// Freeze the raster into an immutable sprite.
    pub fn into_sprite(self) -> Sprite {
        Sprite::new(self.image)
    }

    fn blend(&mut self, x: u32, y: u32, color: Color, coverage: f32) {
        let src = color.scale_alpha(coverage);
        if src.a == 0 {
            return;
        }
        let px = self.image.get_pixel_mut(x, y);
        *px = src.over(Color::from(*px)).into();
    }

    /// Uniform scale factor of the current transform.
    fn scale(&self) -> f32 {
        self.transform.matrix2.determinant().abs().sqrt()
    }

    fn stroke_solid(&mut self, a: Vec2, b: Vec2, half_width: f32, color: Color) {
        let Some((xs, ys)) = self.segment_bounds(a, b, half_width) else {
            return;
        };
        for y in ys.0..ys.1 {
            for x in xs.0..xs.1 {
                let center = Vec2::new(x as f32 + 0.5, y as f32 + 0.5);
                let coverage = segment_coverage(center, a, b, half_width);
                if coverage > 0.0 {
                    self.blend(x, y, color, coverage);
                }
            }
        }
    }

    fn stroke_blurred(&mut self, a: Vec2, b: Vec2, half_width: f32, color: Color, sigma: f32) {
        let (width, height) = self.image.dimensions();
        let mut mask = GrayImage::new(width, height);
        if let Some((xs, ys)) = self.segment_bounds(a, b, half_width) {
            for y in ys.0..ys.1 {
                for x in xs.0..xs.1 {
                    let center = Vec2::new(x as f32 + 0.5, y as f32 + 0.5);
                    let coverage = segment_coverage(center, a, b, half_width);
                    mask.put_pixel(x, y, Luma([(coverage * 255.0).round() as u8]));
                }
            }
        }

        let blurred = imageops::blur(&mask, sigma);
        for (x, y, Luma([v])) in blurred.enumerate_pixels() {
            if *v > 0 {
                self.blend(x, y, color, *v as f32 / 255.0);
            }
        }
    }

    /// Pixel ranges covering the stroke of segment `a`-`b`, clipped to the bitmap.
    fn segment_bounds(&self, a: Vec2, b: Vec2, half_width: f32) -> Option<PixelSpans> {
        let pad = half_width + 1.0;
        let lo = a.min(b) - Vec2::splat(pad);
        let hi = a.max(b) + Vec2::splat(pad);
        Some((
            pixel_span(lo.x, hi.x, self.width())?,
            pixel_span(lo.y, hi.y, self.height())?,
        ))
    }
}

type PixelSpans = ((u32, u32), (u32, u32));

/// Half-open pixel range covering `[lo, hi]`, clipped to `[0, limit)`.
fn pixel_span(lo: f32, hi: f32, limit: u32) -> Option<(u32, u32)> {
    let start = lo.floor().max(0.0);
    let end = hi.ceil().min(limit as f32);
    if !(start < end) {
        return None;
    }
    Some((start as u32, end as u32))
}

/// Anti-aliased coverage of pixel center `p` by a butt-capped stroke.
fn segment_coverage(p: Vec2, a: Vec2, b: Vec2, half_width: f32) -> f32 {
    let ab = b - a;
    let len = ab.length();
    if len <= f32::EPSILON {
        return 0.0;
    }
    let dir = ab / len;
    let ap = p - a;
    let along = ap.dot(dir);
    let across = ap.perp_dot(dir).abs();

    let side = (half_width + 0.5 - across).clamp(0.0, 1.0);
    let ends = (along + 0.5).clamp(0.0, 1.0) * (len - along + 0.5).clamp(0.0, 1.0);
    side * ends
}

impl Surface for Raster {
    fn save(&mut self) {
        self.stack.push(self.transform);
    }

    fn restore(&mut self) {
        match self.stack.pop() {
            Some(t) => self.transform = t,
            None => warn!("restore called without a matching save"),
        }
    }

    fn translate(&mut self, dx: f32, dy: f32) {
        self.transform = self.transform * Affine2::from_translation(Vec2::new(dx, dy));
    }

    fn rotate(&mut self, degrees: f32, pivot: Vec2) {
        self.transform = self.transform * rotation_about(degrees, pivot);
    }

    fn draw_line(&mut self, from: Vec2, to: Vec2, stroke: &Stroke) {
        let a = self.transform.transform_point2(from);
        let b = self.transform.transform_point2(to);
        let half_width = stroke.width * self.scale() * 0.5;
        if !(half_width > 0.0) || !a.is_finite() || !b.is_finite() {
            return;
        }

        let sigma = stroke
            .blur_radius
            .map(|r| blur_sigma(r * self.scale()))
            .unwrap_or(0.0);
        if sigma > 0.0 {
            self.stroke_blurred(a, b, half_width, stroke.color, sigma);
        } else {
            self.stroke_solid(a, b, half_width, stroke.color);
        }
    }

    fn draw_image(&mut self, sprite: &Sprite, src: PixelRect, dst: Rect) {
        if dst.is_degenerate() || src.width == 0 || src.height == 0 {
            return;
        }
        let det = self.transform.matrix2.determinant();
        if det == 0.0 || !det.is_finite() {
            return;
        }
        let inverse = self.transform.inverse();

        let corners = dst.corners().map(|c| self.transform.transform_point2(c));
        let lo = corners.iter().fold(Vec2::splat(f32::INFINITY), |m, c| m.min(*c));
        let hi = corners
            .iter()
            .fold(Vec2::splat(f32::NEG_INFINITY), |m, c| m.max(*c));
        let (Some(xs), Some(ys)) = (
            pixel_span(lo.x, hi.x, self.width()),
            pixel_span(lo.y, hi.y, self.height()),
        ) else {
            return;
        };

        let max_sx = src.x + src.width - 1;
        let max_sy = src.y + src.height - 1;
        for y in ys.0..ys.1 {
            for x in xs.0..xs.1 {
                let local = inverse.transform_point2(Vec2::new(x as f32 + 0.5, y as f32 + 0.5));
                if !dst.contains(local) {
                    continue;
                }
                let u = (local.x - dst.x) / dst.width;
                let v = (local.y - dst.y) / dst.height;
                let sx = (src.x + (u * src.width as f32) as u32).min(max_sx);
                let sy = (src.y + (v * src.height as f32) as u32).min(max_sy);
                let color = sprite.pixel(sx, sy);
                if color.a > 0 {
                    self.blend(x, y, color, 1.0);
                }
            }
        }
    }
}
