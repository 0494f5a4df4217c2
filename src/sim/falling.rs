//! Falling code snippets

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::geometry::Rect;
use super::particles::{Particle, age_particles, trail_droplet};
use super::snippets;
use crate::consts::*;
use crate::palette::{self, Rgba};

/// Side-to-side drift of a snippet
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Oscillation {
    /// Signed horizontal velocity (pixels/tick)
    pub h_speed: f32,
    /// Distance covered since the last direction flip
    pub traveled: f32,
    /// Distance after which the direction flips
    pub max_distance: f32,
}

/// Cosmetic animation state; never affects collisions
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Decoration {
    pub wobble: f32,
    pub wobble_speed: f32,
    pub wobble_amount: f32,
    /// Rotation in degrees
    pub angle: f32,
    pub rotation_speed: f32,
    /// Shine sweep position, cycles through [SHINE_MIN, SHINE_MAX]
    pub shine: f32,
    pub shine_speed: f32,
}

impl Decoration {
    /// Horizontal wobble offset for drawing
    pub fn wobble_offset(&self) -> f32 {
        self.wobble.sin() * self.wobble_amount
    }

    /// Shine is visible while its sweep is over the box
    pub fn shine_visible(&self) -> bool {
        self.shine > 0.0 && self.shine < 1.0
    }

    fn advance(&mut self) {
        self.wobble += self.wobble_speed;
        self.angle += self.rotation_speed;
        self.shine += self.shine_speed;
        if self.shine > SHINE_MAX {
            self.shine = SHINE_MIN;
        }
    }
}

/// A falling snippet: either correct code or a bug
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FallingObject {
    pub rect: Rect,
    /// Vertical speed (pixels/tick), always positive
    pub speed: f32,
    pub oscillation: Option<Oscillation>,
    pub is_correct: bool,
    pub text: String,
    pub decoration: Decoration,
    /// Trail particles, oldest first
    pub particles: Vec<Particle>,
}

impl FallingObject {
    /// Spawn a snippet just above the top edge.
    ///
    /// `speed_scale` comes from the difficulty setting (1.0 on Normal).
    pub fn spawn<R: Rng + ?Sized>(rng: &mut R, level: u32, speed_scale: f32) -> Self {
        let width = rng.random_range(OBJECT_MIN_WIDTH..=OBJECT_MAX_WIDTH) as f32;
        let max_x = (SCREEN_WIDTH - width) as u32;
        let x = rng.random_range(0..=max_x) as f32;

        let base = OBJECT_BASE_SPEED + level as f32 * OBJECT_SPEED_PER_LEVEL;
        let speed = rng.random_range(base..base + OBJECT_SPEED_SPREAD) * speed_scale;

        let oscillation = rng.random_bool(OSCILLATION_CHANCE).then(|| {
            let direction = if rng.random_bool(0.5) { 1.0 } else { -1.0 };
            Oscillation {
                h_speed: direction
                    * rng.random_range(OSCILLATION_MIN_SPEED..OSCILLATION_MAX_SPEED),
                traveled: 0.0,
                max_distance: rng
                    .random_range(OSCILLATION_MIN_DISTANCE..=OSCILLATION_MAX_DISTANCE)
                    as f32,
            }
        });

        let is_correct = rng.random_bool(0.5);
        let text = snippets::pick(rng, level, is_correct).to_string();

        let decoration = Decoration {
            wobble: 0.0,
            wobble_speed: rng.random_range(0.05..0.15),
            wobble_amount: rng.random_range(0.5..1.5),
            angle: rng.random_range(-5.0..5.0),
            rotation_speed: rng.random_range(-0.2..0.2),
            shine: 0.0,
            shine_speed: rng.random_range(0.01..0.03),
        };

        Self {
            rect: Rect::new(x, -OBJECT_HEIGHT, width, OBJECT_HEIGHT),
            speed,
            oscillation,
            is_correct,
            text,
            decoration,
            particles: Vec::new(),
        }
    }

    /// Advance one tick: fall, drift, animate, age and shed trail particles
    pub fn update<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.rect.y += self.speed;

        if let Some(osc) = self.oscillation.as_mut() {
            osc.traveled += osc.h_speed.abs();
            if osc.traveled >= osc.max_distance {
                osc.h_speed = -osc.h_speed;
                osc.traveled = 0.0;
            }
            self.rect.x += osc.h_speed;

            // Reflect off the side walls
            if self.rect.left() < 0.0 {
                self.rect.x = 0.0;
                osc.h_speed = osc.h_speed.abs();
            } else if self.rect.right() > SCREEN_WIDTH {
                self.rect.x = SCREEN_WIDTH - self.rect.w;
                osc.h_speed = -osc.h_speed.abs();
            }
        }

        self.decoration.advance();

        age_particles(&mut self.particles);
        if rng.random_bool(TRAIL_EMIT_CHANCE) {
            self.shed_trail_particle(rng);
        }
    }

    fn shed_trail_particle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        let x = self.rect.x + rng.random_range(0.0..=self.rect.w);
        let droplet = trail_droplet(rng, x, self.rect.bottom(), self.accent_light());
        self.particles.push(droplet);
        if self.particles.len() > OBJECT_TRAIL_CAP {
            self.particles.remove(0);
        }
    }

    /// Border/icon color: green family for correct code, red for bugs
    pub fn accent(&self) -> Rgba {
        if self.is_correct {
            palette::GREEN
        } else {
            palette::RED
        }
    }

    /// Fill/trail color
    pub fn accent_light(&self) -> Rgba {
        if self.is_correct {
            palette::LIGHT_GREEN
        } else {
            palette::LIGHT_RED
        }
    }

    /// Gone past the bottom edge of the screen
    pub fn is_off_screen(&self) -> bool {
        self.rect.top() > SCREEN_HEIGHT
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn oscillating(x: f32, h_speed: f32, max_distance: f32) -> FallingObject {
        let mut rng = Pcg32::seed_from_u64(3);
        let mut obj = FallingObject::spawn(&mut rng, 1, 1.0);
        obj.rect.x = x;
        obj.oscillation = Some(Oscillation {
            h_speed,
            traveled: 0.0,
            max_distance,
        });
        obj
    }

    #[test]
    fn test_spawn_parameters_in_range() {
        let mut rng = Pcg32::seed_from_u64(11);
        for level in 1..10 {
            for _ in 0..100 {
                let obj = FallingObject::spawn(&mut rng, level, 1.0);
                assert!(obj.rect.w >= 120.0 && obj.rect.w <= 220.0);
                assert_eq!(obj.rect.h, OBJECT_HEIGHT);
                assert!(obj.rect.left() >= 0.0);
                assert!(obj.rect.right() <= SCREEN_WIDTH);
                assert_eq!(obj.rect.y, -OBJECT_HEIGHT);

                let base = 2.0 + level as f32 * 0.5;
                assert!(obj.speed >= base && obj.speed < base + 3.0);

                if let Some(osc) = obj.oscillation {
                    assert!(osc.h_speed.abs() >= 0.5 && osc.h_speed.abs() < 1.5);
                    assert!(osc.max_distance >= 30.0 && osc.max_distance <= 80.0);
                }

                let (good, bad) = snippets::SnippetTier::for_level(level).pools();
                let pool = if obj.is_correct { good } else { bad };
                assert!(pool.contains(&obj.text.as_str()));
            }
        }
    }

    #[test]
    fn test_mean_speed_grows_with_level() {
        let mut rng = Pcg32::seed_from_u64(5);
        let mean = |rng: &mut Pcg32, level| {
            (0..400)
                .map(|_| FallingObject::spawn(rng, level, 1.0).speed)
                .sum::<f32>()
                / 400.0
        };
        let l1 = mean(&mut rng, 1);
        let l3 = mean(&mut rng, 3);
        let l6 = mean(&mut rng, 6);
        assert!(l1 < l3 && l3 < l6);
    }

    #[test]
    fn test_oscillation_mix_and_coin_flip() {
        let mut rng = Pcg32::seed_from_u64(9);
        let objs: Vec<_> = (0..2000)
            .map(|_| FallingObject::spawn(&mut rng, 1, 1.0))
            .collect();
        let drifting = objs.iter().filter(|o| o.oscillation.is_some()).count();
        let correct = objs.iter().filter(|o| o.is_correct).count();
        assert!((450..750).contains(&drifting), "drifting = {drifting}");
        assert!((850..1150).contains(&correct), "correct = {correct}");
    }

    #[test]
    fn test_update_always_falls() {
        let mut rng = Pcg32::seed_from_u64(4);
        let mut obj = FallingObject::spawn(&mut rng, 2, 1.0);
        for _ in 0..50 {
            let before = obj.rect.y;
            obj.update(&mut rng);
            assert!((obj.rect.y - before - obj.speed).abs() < 1e-4);
        }
    }

    #[test]
    fn test_direction_flips_at_max_distance() {
        let mut rng = Pcg32::seed_from_u64(8);
        let mut obj = oscillating(300.0, 1.0, 3.0);
        obj.update(&mut rng);
        obj.update(&mut rng);
        assert!((obj.rect.x - 302.0).abs() < 1e-4);
        // Third tick reaches the max distance and reverses before moving
        obj.update(&mut rng);
        assert!((obj.rect.x - 301.0).abs() < 1e-4);
        let osc = obj.oscillation.unwrap();
        assert!(osc.h_speed < 0.0);
        assert!(osc.traveled <= osc.max_distance);
    }

    #[test]
    fn test_reflects_off_walls() {
        let mut rng = Pcg32::seed_from_u64(8);
        let mut left = oscillating(0.5, -1.5, 80.0);
        left.update(&mut rng);
        assert_eq!(left.rect.x, 0.0);
        assert!(left.oscillation.unwrap().h_speed > 0.0);

        let mut right = oscillating(0.0, 1.5, 80.0);
        right.rect.x = SCREEN_WIDTH - right.rect.w - 0.5;
        right.update(&mut rng);
        assert_eq!(right.rect.right(), SCREEN_WIDTH);
        assert!(right.oscillation.unwrap().h_speed < 0.0);
    }

    #[test]
    fn test_stays_in_bounds_while_drifting() {
        let mut rng = Pcg32::seed_from_u64(12);
        for _ in 0..50 {
            let mut obj = FallingObject::spawn(&mut rng, 6, 1.0);
            obj.oscillation = Some(Oscillation {
                h_speed: 1.5,
                traveled: 0.0,
                max_distance: 80.0,
            });
            for _ in 0..300 {
                obj.update(&mut rng);
                assert!(obj.rect.left() >= 0.0 && obj.rect.right() <= SCREEN_WIDTH);
                let osc = obj.oscillation.unwrap();
                assert!(osc.traveled < osc.max_distance);
            }
        }
    }

    #[test]
    fn test_shine_wraps() {
        let mut rng = Pcg32::seed_from_u64(1);
        let mut obj = FallingObject::spawn(&mut rng, 1, 1.0);
        obj.decoration.shine = 1.49;
        obj.decoration.shine_speed = 0.02;
        obj.update(&mut rng);
        assert_eq!(obj.decoration.shine, SHINE_MIN);
        for _ in 0..500 {
            obj.update(&mut rng);
            assert!(obj.decoration.shine >= SHINE_MIN && obj.decoration.shine <= SHINE_MAX);
        }
    }

    #[test]
    fn test_trail_is_capped_oldest_first() {
        let mut rng = Pcg32::seed_from_u64(21);
        let mut obj = FallingObject::spawn(&mut rng, 1, 1.0);
        for _ in 0..10 {
            obj.shed_trail_particle(&mut rng);
            assert!(obj.particles.len() <= OBJECT_TRAIL_CAP);
        }
        assert_eq!(obj.particles.len(), OBJECT_TRAIL_CAP);

        for _ in 0..2000 {
            obj.update(&mut rng);
            assert!(obj.particles.len() <= OBJECT_TRAIL_CAP);
            assert!(obj.particles.iter().all(|p| p.life > 0));
        }
    }

    #[test]
    fn test_trail_eviction_drops_oldest() {
        let mut rng = Pcg32::seed_from_u64(22);
        let mut obj = FallingObject::spawn(&mut rng, 1, 1.0);
        for i in 0..OBJECT_TRAIL_CAP {
            obj.shed_trail_particle(&mut rng);
            obj.particles[i].radius = i as f32 + 10.0;
        }
        obj.shed_trail_particle(&mut rng);
        assert_eq!(obj.particles.len(), OBJECT_TRAIL_CAP);
        // The first-shed droplet (radius 10) is gone, the second is now oldest
        assert_eq!(obj.particles[0].radius, 11.0);
    }
}
