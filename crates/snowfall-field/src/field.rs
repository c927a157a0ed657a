//! Particle collection and per-frame simulation.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use snowfall_core::{SNOWFLAKE_COUNT, Sprite, Surface, Viewport};

use crate::particle::Particle;

/// Counters for one [`ParticleField::tick`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameStats {
    /// Particles drawn this frame.
    pub drawn: usize,
    /// Particles that fell past the bottom and respawned at the top.
    pub wrapped: usize,
}

/// A fixed-size set of snowflakes, sorted so larger flakes draw last.
#[derive(Debug)]
pub struct ParticleField<R = StdRng> {
    particles: Vec<Particle>,
    rng: R,
}

impl Default for ParticleField<StdRng> {
    fn default() -> Self {
        Self::new(StdRng::from_os_rng())
    }
}

impl<R: Rng> ParticleField<R> {
    /// Create an empty field. Particles appear on the first resize.
    pub fn new(rng: R) -> Self {
        Self {
            particles: Vec::with_capacity(SNOWFLAKE_COUNT),
            rng,
        }
    }

    /// Discard every particle and seed a fresh set for the new viewport.
    ///
    /// Negative or non-finite extents are treated as zero.
    pub fn on_viewport_resize(&mut self, width: f32, height: f32) {
        let viewport = Viewport::new(width, height).sanitized();

        self.particles.clear();
        for _ in 0..SNOWFLAKE_COUNT {
            self.particles.push(Particle::spawn(&mut self.rng, viewport));
        }
        // Stable, so equal sizes keep spawn order
        self.particles.sort_by(|a, b| b.size.total_cmp(&a.size));
    }

    /// Advance and draw every particle, back to front.
    pub fn tick<S: Surface + ?Sized>(
        &mut self,
        surface: &mut S,
        sprite: &Sprite,
        width: f32,
        height: f32,
    ) -> FrameStats {
        let viewport = Viewport::new(width, height).sanitized();
        let mut stats = FrameStats::default();

        for particle in &mut self.particles {
            if particle.update(&mut self.rng, viewport) {
                stats.wrapped += 1;
            }
            particle.draw(surface, sprite);
            stats.drawn += 1;
        }
        stats
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;
    use snowfall_core::{Rect, Vec2};
    use snowfall_raster::generate_snowflake_sprite;

    use super::*;
    use crate::testing::{Op, Recorder};

    fn seeded(seed: u64) -> ParticleField {
        ParticleField::new(StdRng::seed_from_u64(seed))
    }

    fn assert_seeded(field: &ParticleField, width: f32, height: f32) {
        assert_eq!(field.len(), SNOWFLAKE_COUNT);
        for p in field.particles() {
            assert!(p.x >= 0.0 && p.x < width, "x = {}", p.x);
            assert!(p.y >= 0.0 && p.y < height, "y = {}", p.y);
            assert!(p.size >= 10.0 && p.size < 30.0, "size = {}", p.size);
            assert!(p.fall_speed >= 2.0 && p.fall_speed < 4.0);
        }
        assert!(
            field.particles().windows(2).all(|w| w[0].size >= w[1].size),
            "particles not sorted by size"
        );
    }

    #[test]
    fn test_empty_before_first_resize() {
        let mut field = seeded(0);
        let sprite = generate_snowflake_sprite();
        let mut recorder = Recorder::default();

        assert!(field.is_empty());
        let stats = field.tick(&mut recorder, &sprite, 100.0, 100.0);
        assert_eq!(stats, FrameStats::default());
        assert!(recorder.ops.is_empty());
    }

    #[test]
    fn test_resize_seeds_full_sorted_field() {
        let mut field = seeded(42);
        field.on_viewport_resize(300.0, 500.0);
        assert_seeded(&field, 300.0, 500.0);
    }

    #[test]
    fn test_resize_replaces_particles() {
        let mut field = seeded(7);
        field.on_viewport_resize(300.0, 500.0);
        let first = field.particles().to_vec();

        field.on_viewport_resize(640.0, 480.0);
        assert_seeded(&field, 640.0, 480.0);
        assert_ne!(field.particles(), first.as_slice());
    }

    #[test]
    fn test_same_seed_same_field() {
        let mut a = seeded(99);
        let mut b = seeded(99);
        a.on_viewport_resize(300.0, 500.0);
        b.on_viewport_resize(300.0, 500.0);
        assert_eq!(a.particles(), b.particles());
    }

    #[test]
    fn test_ticks_keep_per_particle_constants() {
        let mut field = seeded(11);
        let sprite = generate_snowflake_sprite();
        field.on_viewport_resize(200.0, 150.0);
        let before = field.particles().to_vec();

        for _ in 0..250 {
            field.tick(&mut Recorder::default(), &sprite, 200.0, 150.0);
        }

        assert_eq!(field.len(), SNOWFLAKE_COUNT);
        for (a, b) in before.iter().zip(field.particles()) {
            assert_eq!(a.size, b.size);
            assert_eq!(a.fall_speed, b.fall_speed);
            assert_eq!(a.sway_amplitude, b.sway_amplitude);
            assert_eq!(a.sway_phase, b.sway_phase);
            assert_eq!(a.rotation_speed, b.rotation_speed);
        }
    }

    #[test]
    fn test_wraparound_resets_position_and_clock() {
        let (width, height) = (300.0, 500.0);
        let mut field = seeded(5);
        let sprite = generate_snowflake_sprite();
        field.on_viewport_resize(width, height);
        field.particles[0].y = height + 1.0;
        field.particles[0].elapsed = 4.2;

        let stats = field.tick(&mut Recorder::default(), &sprite, width, height);

        let p = &field.particles()[0];
        assert!(stats.wrapped >= 1);
        assert_eq!(p.y, 0.0);
        assert_eq!(p.elapsed, 0.0);
        assert!(p.x >= 0.0 && p.x < width);
    }

    #[test]
    fn test_draw_calls_per_particle() {
        let mut field = seeded(3);
        let sprite = generate_snowflake_sprite();
        field.on_viewport_resize(300.0, 500.0);

        let mut recorder = Recorder::default();
        let stats = field.tick(&mut recorder, &sprite, 300.0, 500.0);

        assert_eq!(stats.drawn, SNOWFLAKE_COUNT);
        assert_eq!(recorder.ops.len(), SNOWFLAKE_COUNT * 5);
        assert_eq!(recorder.images(), SNOWFLAKE_COUNT);
        assert_eq!(recorder.max_depth, 1);
        assert!(recorder.is_balanced());

        for (p, chunk) in field.particles().iter().zip(recorder.ops.chunks(5)) {
            assert_eq!(chunk[0], Op::Save);
            assert_eq!(chunk[2], Op::Rotate(p.angle, Vec2::splat(p.size / 2.0)));
            assert_eq!(
                chunk[3],
                Op::Image {
                    src: sprite.bounds(),
                    dst: Rect::square(p.size),
                }
            );
            assert_eq!(chunk[4], Op::Restore);
        }
    }

    #[test]
    fn test_sway_stays_within_amplitude() {
        let mut field = seeded(8);
        let sprite = generate_snowflake_sprite();
        field.on_viewport_resize(300.0, 500.0);

        for _ in 0..200 {
            let mut recorder = Recorder::default();
            field.tick(&mut recorder, &sprite, 300.0, 500.0);
            for (p, (tx, _)) in field.particles().iter().zip(recorder.translations()) {
                let sway = tx - p.x;
                assert!(sway.abs() <= p.sway_amplitude + 1e-3, "sway {sway}");
            }
        }
    }

    #[test]
    fn test_drawn_y_never_exceeds_viewport() {
        let (width, height) = (300.0, 500.0);
        let mut field = seeded(2024);
        let sprite = generate_snowflake_sprite();
        field.on_viewport_resize(width, height);

        let mut wrapped = 0;
        for _ in 0..100 {
            let mut recorder = Recorder::default();
            wrapped += field.tick(&mut recorder, &sprite, width, height).wrapped;
            for (_, y) in recorder.translations() {
                assert!((0.0..=height).contains(&y), "drawn at y = {y}");
            }
        }
        // 100 frames at >= 2 px each move every flake at least 200 px
        assert!(wrapped > 0);
    }

    #[test]
    fn test_zero_viewport_is_degenerate_not_fatal() {
        let mut field = seeded(1);
        let sprite = generate_snowflake_sprite();
        field.on_viewport_resize(0.0, 0.0);
        assert_eq!(field.len(), SNOWFLAKE_COUNT);
        assert!(field.particles().iter().all(|p| p.x == 0.0 && p.y == 0.0));

        let stats = field.tick(&mut Recorder::default(), &sprite, 0.0, 0.0);
        assert_eq!(stats.wrapped, SNOWFLAKE_COUNT);
    }

    #[test]
    fn test_negative_viewport_clamped() {
        let mut field = seeded(1);
        field.on_viewport_resize(-20.0, -1.0);
        assert!(field.particles().iter().all(|p| p.x == 0.0 && p.y == 0.0));
    }

    proptest! {
        #[test]
        fn prop_resize_invariants(
            seed in any::<u64>(),
            width in 1.0f32..4096.0,
            height in 1.0f32..4096.0,
        ) {
            let mut field = seeded(seed);
            field.on_viewport_resize(width, height);
            assert_seeded(&field, width, height);
        }

        #[test]
        fn prop_tick_keeps_y_in_viewport(
            seed in any::<u64>(),
            width in 1.0f32..2048.0,
            height in 1.0f32..2048.0,
            frames in 1usize..60,
        ) {
            let mut field = seeded(seed);
            let sprite = generate_snowflake_sprite();
            field.on_viewport_resize(width, height);
            for _ in 0..frames {
                field.tick(&mut Recorder::default(), &sprite, width, height);
                prop_assert_eq!(field.len(), SNOWFLAKE_COUNT);
                for p in field.particles() {
                    prop_assert!(p.y >= 0.0 && p.y <= height);
                }
            }
        }
    }
}
