//! Decorative particles
//!
//! Particles never feed back into gameplay: they are spawned by catches,
//! misses, level-ups and snippet trails, fall under a little gravity, and
//! expire after an integer number of ticks.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::palette::Rgba;

/// A single particle
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    pub color: Rgba,
    /// Remaining ticks
    pub life: u32,
    /// Lifetime used to normalize fading (alpha = life / max_life)
    pub max_life: u32,
}

impl Particle {
    /// Age by one tick. Returns false once expired.
    ///
    /// Gravity is added to the velocity before the position moves.
    pub fn step(&mut self) -> bool {
        self.life = self.life.saturating_sub(1);
        if self.life == 0 {
            return false;
        }
        self.vel.y += PARTICLE_GRAVITY;
        self.pos += self.vel;
        true
    }

    /// Remaining life as a fraction in [0, 1]
    pub fn life_fraction(&self) -> f32 {
        if self.max_life == 0 {
            return 0.0;
        }
        (self.life as f32 / self.max_life as f32).clamp(0.0, 1.0)
    }
}

/// Age every particle and keep the survivors, preserving order
pub fn age_particles(particles: &mut Vec<Particle>) {
    let survivors: Vec<Particle> = particles
        .drain(..)
        .filter_map(|mut p| p.step().then_some(p))
        .collect();
    *particles = survivors;
}

/// Radial burst, used for catches, misses and level-up fireworks.
///
/// `lively` bursts fly faster. Everything gets an initial upward kick.
/// Stops adding once `cap` particles are live.
pub fn burst<R: Rng + ?Sized>(
    particles: &mut Vec<Particle>,
    rng: &mut R,
    center: Vec2,
    color: Rgba,
    count: usize,
    lively: bool,
    cap: usize,
) {
    let room = cap.saturating_sub(particles.len());
    for _ in 0..count.min(room) {
        let speed = if lively {
            rng.random_range(1.0..3.0)
        } else {
            rng.random_range(0.5..2.0)
        };
        let angle: f32 = rng.random_range(0.0..std::f32::consts::TAU);
        particles.push(Particle {
            pos: center,
            vel: Vec2::new(speed * angle.cos(), speed * angle.sin() - 2.0),
            radius: rng.random_range(2..=6) as f32,
            color,
            life: rng.random_range(20..=BURST_MAX_LIFE),
            max_life: BURST_MAX_LIFE,
        });
    }
}

/// A single trail droplet shed from the bottom edge of a falling snippet
pub fn trail_droplet<R: Rng + ?Sized>(rng: &mut R, x: f32, y: f32, color: Rgba) -> Particle {
    Particle {
        pos: Vec2::new(x, y),
        vel: Vec2::new(rng.random_range(-0.5..0.5), rng.random_range(0.5..1.5)),
        radius: rng.random_range(1.0..3.0),
        color,
        life: rng.random_range(10..=TRAIL_MAX_LIFE),
        max_life: TRAIL_MAX_LIFE,
    }
}
