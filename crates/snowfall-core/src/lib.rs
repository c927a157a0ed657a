//! Core types shared by the snowfall crates.
//!
//! The animation kernel never talks to a concrete toolkit. Everything it
//! needs from the host is expressed here: the drawing [`Surface`], the
//! [`FrameScheduler`] used to ask for the next frame, and the [`Viewport`]
//! the host reports whenever its size changes.

pub mod color;
pub mod constants;
pub mod geometry;
pub mod sprite;
pub mod surface;

pub use color::Color;
pub use constants::*;
pub use geometry::{PixelRect, Rect, Viewport, rotation_about};
pub use glam::{Affine2, Vec2};
pub use sprite::Sprite;
pub use surface::{FrameScheduler, Stroke, Surface};
