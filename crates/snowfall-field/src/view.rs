//! Host-embeddable snowfall view.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use snowfall_core::{FrameScheduler, Sprite, Surface, Viewport};
use snowfall_raster::generate_snowflake_sprite;
use tracing::{debug, trace};

use crate::field::{FrameStats, ParticleField};

/// Snowfall animation state: the shared sprite plus the particle field.
///
/// The host owns the drawing surface. It reports size changes through
/// [`Snowfall::on_size_changed`] (or [`Snowfall::sync_viewport`]) and calls
/// [`Snowfall::on_draw`] once per frame.
#[derive(Debug)]
pub struct Snowfall<R = StdRng> {
    /// Generated once at construction, never on resize.
    sprite: Sprite,
    field: ParticleField<R>,
    /// Last viewport reported by the host.
    viewport: Viewport,
    /// Whether any size notification has been received.
    seeded: bool,
}

impl Default for Snowfall<StdRng> {
    fn default() -> Self {
        Self::from_entropy()
    }
}

impl Snowfall<StdRng> {
    /// Create a view seeded from the operating system.
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_os_rng())
    }

    /// Create a reproducible view.
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> Snowfall<R> {
    pub fn new(rng: R) -> Self {
        Self {
            sprite: generate_snowflake_sprite(),
            field: ParticleField::new(rng),
            viewport: Viewport::ZERO,
            seeded: false,
        }
    }

    /// Size-changed notification. Always reseeds the particles.
    pub fn on_size_changed(&mut self, new: Viewport, old: Viewport) {
        let new = new.sanitized();
        debug!(
            old_width = old.width,
            old_height = old.height,
            width = new.width,
            height = new.height,
            "viewport changed, reseeding snowflakes"
        );
        self.viewport = new;
        self.field.on_viewport_resize(new.width, new.height);
        self.seeded = true;
    }

    /// Reseed only if `viewport` differs from the last reported size.
    ///
    /// Returns true if the field was reseeded.
    pub fn sync_viewport(&mut self, viewport: Viewport) -> bool {
        let viewport = viewport.sanitized();
        if self.seeded && viewport == self.viewport {
            return false;
        }
        let old = self.viewport;
        self.on_size_changed(viewport, old);
        true
    }

    /// Per-frame notification: update and draw, then ask for the next frame.
    pub fn on_draw<S, F>(&mut self, surface: &mut S, scheduler: &mut F) -> FrameStats
    where
        S: Surface + ?Sized,
        F: FrameScheduler + ?Sized,
    {
        let stats = self.field.tick(
            surface,
            &self.sprite,
            self.viewport.width,
            self.viewport.height,
        );
        trace!(drawn = stats.drawn, wrapped = stats.wrapped, "snowfall frame");
        scheduler.request_frame();
        stats
    }

    pub fn sprite(&self) -> &Sprite {
        &self.sprite
    }

    pub fn field(&self) -> &ParticleField<R> {
        &self.field
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }
}
