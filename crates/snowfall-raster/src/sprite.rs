//! Procedural snowflake sprite.

use snowfall_core::{
    BASE_SIZE_PX, Color, SHADOW_MARGIN_PX, SPOKE_COUNT, SPRITE_CANVAS_PX, STROKE_WIDTH, Sprite,
    Stroke, Surface, Vec2,
};
use tracing::debug;

use crate::raster::Raster;

/// Rasterize the shared snowflake sprite: white spokes over a blurred gray shadow.
///
/// The result depends only on fixed constants, so repeated calls produce
/// identical bitmaps.
pub fn generate_snowflake_sprite() -> Sprite {
    let mut raster = Raster::new(SPRITE_CANVAS_PX, SPRITE_CANVAS_PX);
    let center = Vec2::splat(SPRITE_CANVAS_PX as f32 / 2.0);
    let length = BASE_SIZE_PX as f32 / 2.0;

    let shadow = Stroke::solid(Color::GRAY, STROKE_WIDTH).with_blur(SHADOW_MARGIN_PX as f32);
    draw_spokes(&mut raster, center, length, &shadow);

    let foreground = Stroke::solid(Color::WHITE, STROKE_WIDTH);
    draw_spokes(&mut raster, center, length, &foreground);

    debug!(
        size = SPRITE_CANVAS_PX,
        shadow_margin = SHADOW_MARGIN_PX,
        "generated snowflake sprite"
    );
    raster.into_sprite()
}

/// Draw the six-spoke snowflake shape radiating from `center`.
pub fn draw_spokes<S: Surface + ?Sized>(
    surface: &mut S,
    center: Vec2,
    length: f32,
    stroke: &Stroke,
) {
    let step = 360.0 / SPOKE_COUNT as f32;
    for i in 0..SPOKE_COUNT {
        let angle = (i as f32 * step).to_radians();
        let tip = center + Vec2::new(angle.cos(), angle.sin()) * length;
        surface.draw_line(center, tip, stroke);
    }
}
