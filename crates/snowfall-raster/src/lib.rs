//! Software rasterization for the snowfall kernel.
//!
//! [`Raster`] is a CPU [`Surface`](snowfall_core::Surface) backed by an
//! [`image::RgbaImage`]. It is used to build the snowflake sprite and by
//! hosts that have no drawing surface of their own.

mod raster;
mod sprite;

pub use raster::{Raster, blur_sigma};
pub use sprite::{draw_spokes, generate_snowflake_sprite};
