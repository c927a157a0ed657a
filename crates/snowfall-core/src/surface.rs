//! Host-facing drawing and scheduling capabilities.

use glam::Vec2;

use crate::color::Color;
use crate::geometry::{PixelRect, Rect};
use crate::sprite::Sprite;

/// Paint used for line strokes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stroke {
    pub color: Color,
    pub width: f32,
    /// Normal (two-sided) blur radius applied to the stroke coverage.
    pub blur_radius: Option<f32>,
}

impl Stroke {
    /// An unblurred stroke.
    pub const fn solid(color: Color, width: f32) -> Self {
        Self {
            color,
            width,
            blur_radius: None,
        }
    }

    pub const fn with_blur(self, radius: f32) -> Self {
        Self {
            blur_radius: Some(radius),
            ..self
        }
    }
}

/// A 2D drawing surface with a transform stack.
///
/// Transform operations post-multiply the current transform, so the most
/// recently applied operation is the first one applied to geometry.
pub trait Surface {
    /// Push the current transform.
    fn save(&mut self);

    /// Pop the transform pushed by the matching [`Surface::save`].
    fn restore(&mut self);

    fn translate(&mut self, dx: f32, dy: f32);

    /// Rotate by `degrees` about `pivot` in local coordinates.
    fn rotate(&mut self, degrees: f32, pivot: Vec2);

    fn draw_line(&mut self, from: Vec2, to: Vec2, stroke: &Stroke);

    /// Draw the `src` region of `sprite` scaled into `dst`.
    fn draw_image(&mut self, sprite: &Sprite, src: PixelRect, dst: Rect);
}

/// Lets the kernel ask the host for another animation frame.
pub trait FrameScheduler {
    fn request_frame(&mut self);
}
