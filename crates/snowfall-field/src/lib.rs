//! Falling snowflake particle field.
//!
//! [`ParticleField`] owns the particles and advances them once per frame.
//! [`Snowfall`] is what a host embeds: it owns the sprite and the field and
//! exposes the size-changed and draw callbacks.

mod field;
mod particle;
#[cfg(test)]
mod testing;
mod view;

pub use field::{FrameStats, ParticleField};
pub use particle::Particle;
pub use view::Snowfall;
