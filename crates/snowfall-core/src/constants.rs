//! Fixed simulation and sprite constants.

/// Base snowflake size in pixels, before the per-particle scale factor.
pub const BASE_SIZE: f32 = 20.0;

/// Integer form of [`BASE_SIZE`] used for sprite canvas arithmetic.
pub const BASE_SIZE_PX: u32 = 20;

/// Minimum fall speed in pixels per frame. Fall speed is drawn from
/// `[BASE_SPEED, 2 * BASE_SPEED)`.
pub const BASE_SPEED: f32 = 2.0;

/// Rotation speed multiplier in degrees per frame.
pub const ROTATION_SPEED: f32 = 1.0;

/// Number of particles in a seeded field.
pub const SNOWFLAKE_COUNT: usize = 100;

/// Sway amplitude in pixels for a particle of scale 1.0.
pub const SWAY_AMPLITUDE: f32 = 15.0;

/// Sway clock advance per update.
pub const TIME_STEP: f32 = 0.05;

/// Stroke width of the sprite spokes.
pub const STROKE_WIDTH: f32 = 2.0;

/// Number of spokes in the sprite shape.
pub const SPOKE_COUNT: u32 = 6;

/// Shadow margin around the sprite shape, also the shadow blur radius.
pub const SHADOW_MARGIN_PX: u32 = BASE_SIZE_PX / 5;

/// Edge length of the square sprite canvas.
pub const SPRITE_CANVAS_PX: u32 = BASE_SIZE_PX + SHADOW_MARGIN_PX * 2;
