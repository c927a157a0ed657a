//! A single snowflake.

use std::f32::consts::TAU;

use rand::Rng;
use snowfall_core::{
    BASE_SIZE, BASE_SPEED, ROTATION_SPEED, Rect, SWAY_AMPLITUDE, Sprite, Surface, TIME_STEP,
    Vec2, Viewport,
};

/// State for a single snowflake.
#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    /// Horizontal position before sway.
    pub x: f32,
    /// Vertical position, growing until wraparound.
    pub y: f32,
    /// Pixels fallen per update.
    pub fall_speed: f32,
    /// Drawn edge length; also the depth key.
    pub size: f32,
    /// Current rotation in degrees.
    pub angle: f32,
    /// Degrees added per update, signed.
    pub rotation_speed: f32,
    pub sway_amplitude: f32,
    pub sway_phase: f32,
    /// Sway clock, reset on respawn.
    pub elapsed: f32,
}

impl Particle {
    /// Spawn a particle somewhere inside `viewport`.
    pub fn spawn<R: Rng + ?Sized>(rng: &mut R, viewport: Viewport) -> Self {
        let scale = rng.random_range(0.5f32..1.5);
        let x = viewport.width * rng.random::<f32>();
        let y = viewport.height * rng.random::<f32>();
        let fall_speed = rng.random_range(BASE_SPEED..BASE_SPEED * 2.0);
        let angle = 360.0 * rng.random::<f32>();
        let mut rotation_speed = rng.random_range(0.5f32..1.5) * ROTATION_SPEED;
        if rng.random_bool(0.5) {
            rotation_speed = -rotation_speed;
        }
        let sway_phase = rng.random_range(0.0..TAU);

        Self {
            x,
            y,
            fall_speed,
            size: scale * BASE_SIZE,
            angle,
            rotation_speed,
            sway_amplitude: scale * SWAY_AMPLITUDE,
            sway_phase,
            elapsed: 0.0,
        }
    }

    /// Advance one frame. Returns true if the particle wrapped to the top.
    pub fn update<R: Rng + ?Sized>(&mut self, rng: &mut R, viewport: Viewport) -> bool {
        self.y += self.fall_speed;
        self.angle = (self.angle + self.rotation_speed).rem_euclid(360.0);
        self.elapsed += TIME_STEP;

        if self.y > viewport.height {
            self.y = 0.0;
            self.x = viewport.width * rng.random::<f32>();
            self.elapsed = 0.0;
            return true;
        }
        false
    }

    /// Current horizontal sway, within `±sway_amplitude`.
    pub fn sway_offset(&self) -> f32 {
        (self.elapsed + self.sway_phase).sin() * self.sway_amplitude
    }

    /// Draw the sprite scaled to `size`, rotated about its own center.
    pub fn draw<S: Surface + ?Sized>(&self, surface: &mut S, sprite: &Sprite) {
        surface.save();
        surface.translate(self.x + self.sway_offset(), self.y);
        surface.rotate(self.angle, Vec2::splat(self.size / 2.0));
        surface.draw_image(sprite, sprite.bounds(), Rect::square(self.size));
        surface.restore();
    }
}
