//! Test doubles for the host capabilities.

use snowfall_core::{FrameScheduler, PixelRect, Rect, Sprite, Stroke, Surface, Vec2};

/// One recorded surface call.
#[derive(Debug, Clone, PartialEq)]
pub enum Op {
    Save,
    Restore,
    Translate(f32, f32),
    Rotate(f32, Vec2),
    Line(Vec2, Vec2),
    Image { src: PixelRect, dst: Rect },
}

/// Surface that records calls instead of drawing.
#[derive(Debug, Default)]
pub struct Recorder {
    pub ops: Vec<Op>,
    depth: usize,
    pub max_depth: usize,
}

impl Recorder {
    pub fn translations(&self) -> Vec<(f32, f32)> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                Op::Translate(x, y) => Some((*x, *y)),
                _ => None,
            })
            .collect()
    }

    pub fn images(&self) -> usize {
        self.ops
            .iter()
            .filter(|op| matches!(op, Op::Image { .. }))
            .count()
    }

    pub fn is_balanced(&self) -> bool {
        self.depth == 0
    }
}

impl Surface for Recorder {
    fn save(&mut self) {
        self.depth += 1;
        self.max_depth = self.max_depth.max(self.depth);
        self.ops.push(Op::Save);
    }

    fn restore(&mut self) {
        self.depth = self.depth.saturating_sub(1);
        self.ops.push(Op::Restore);
    }

    fn translate(&mut self, dx: f32, dy: f32) {
        self.ops.push(Op::Translate(dx, dy));
    }

    fn rotate(&mut self, degrees: f32, pivot: Vec2) {
        self.ops.push(Op::Rotate(degrees, pivot));
    }

    fn draw_line(&mut self, from: Vec2, to: Vec2, _stroke: &Stroke) {
        self.ops.push(Op::Line(from, to));
    }

    fn draw_image(&mut self, _sprite: &Sprite, src: PixelRect, dst: Rect) {
        self.ops.push(Op::Image { src, dst });
    }
}

/// Counts frame requests.
#[derive(Debug, Default)]
pub struct FrameCounter(pub usize);

impl FrameScheduler for FrameCounter {
    fn request_frame(&mut self) {
        self.0 += 1;
    }
}
