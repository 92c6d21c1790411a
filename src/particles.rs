//! Decorative particle field for the hero header.
//!
//! Cosmetic only. Generated once at start-up; a fixed seed makes the field
//! reproducible.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::time::Duration;

/// One rising streak
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    /// Horizontal position, percent of the area width (0..100)
    pub left: f32,
    /// Start offset in seconds (0..5)
    pub delay: f32,
    /// Seconds to rise through the full height (6..10)
    pub duration: f32,
}

impl Particle {
    /// Progress through the current rise, 0.0 (bottom) to 1.0 (top)
    pub fn phase(&self, elapsed: Duration) -> f32 {
        let t = elapsed.as_secs_f32() + self.delay;
        (t % self.duration) / self.duration
    }
}

#[derive(Debug, Clone, Default)]
pub struct Particles {
    particles: Vec<Particle>,
}

impl Particles {
    pub fn generate(count: usize, seed: Option<u64>) -> Self {
        let mut rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        let particles = (0..count)
            .map(|_| Particle {
                left: rng.gen_range(0.0..100.0),
                delay: rng.gen_range(0.0..5.0),
                duration: rng.gen_range(6.0..10.0),
            })
            .collect();

        Self { particles }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Particle> {
        self.particles.iter()
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }
}
