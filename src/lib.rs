//! Code Catcher - catch the correct code snippets, dodge the bugs
//!
//! Core modules:
//! - `sim`: Deterministic simulation (falling snippets, catcher, particles, screen flow)
//! - `ui`: Menu/game-over buttons
//! - `renderer`: Vertex generation and the WebGPU pipeline
//! - `settings`: Player preferences and quality presets
//! - `assets`: Optional sprites with procedural fallbacks

pub mod assets;
#[cfg(target_arch = "wasm32")]
pub mod audio;
pub mod renderer;
pub mod settings;
pub mod sim;
pub mod ui;

pub use settings::{Difficulty, QualityPreset, Settings};

/// Game configuration constants
pub mod consts {
    /// Logical canvas size (pixels)
    pub const SCREEN_WIDTH: f32 = 800.0;
    pub const SCREEN_HEIGHT: f32 = 600.0;

    /// Fixed simulation rate
    pub const TICK_RATE: u32 = 60;
    pub const SIM_DT: f32 = 1.0 / TICK_RATE as f32;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 4;

    /// Catcher
    pub const PLAYER_WIDTH: f32 = 120.0;
    pub const PLAYER_HEIGHT: f32 = 30.0;
    pub const PLAYER_Y: f32 = SCREEN_HEIGHT - 80.0;
    pub const PLAYER_SPEED: f32 = 8.0;
    pub const PLAYER_TRAIL_LENGTH: usize = 5;
    /// Animation phase advance per tick, wraps at `PLAYER_ANIM_FRAMES`
    pub const PLAYER_ANIM_SPEED: f32 = 0.2;
    pub const PLAYER_ANIM_FRAMES: f32 = 4.0;

    /// Falling snippets
    pub const OBJECT_MIN_WIDTH: u32 = 120;
    pub const OBJECT_MAX_WIDTH: u32 = 220;
    pub const OBJECT_HEIGHT: f32 = 50.0;
    pub const OBJECT_BASE_SPEED: f32 = 2.0;
    pub const OBJECT_SPEED_PER_LEVEL: f32 = 0.5;
    pub const OBJECT_SPEED_SPREAD: f32 = 3.0;
    pub const OSCILLATION_CHANCE: f64 = 0.3;
    pub const OSCILLATION_MIN_DISTANCE: u32 = 30;
    pub const OSCILLATION_MAX_DISTANCE: u32 = 80;
    pub const OSCILLATION_MIN_SPEED: f32 = 0.5;
    pub const OSCILLATION_MAX_SPEED: f32 = 1.5;
    /// Shine sweep phase wraps from `SHINE_MAX` back to `SHINE_MIN`
    pub const SHINE_MIN: f32 = -0.5;
    pub const SHINE_MAX: f32 = 1.5;
    /// Per-tick chance that a snippet sheds a trail particle
    pub const TRAIL_EMIT_CHANCE: f64 = 0.1;
    /// Upper bound on live trail particles per snippet (oldest evicted)
    pub const OBJECT_TRAIL_CAP: usize = 8;

    /// Particles
    pub const PARTICLE_GRAVITY: f32 = 0.1;
    pub const CATCH_BURST: usize = 30;
    pub const MISS_BURST: usize = 10;
    pub const LEVEL_UP_BURSTS: usize = 5;
    pub const LEVEL_UP_BURST_SIZE: usize = 20;
    /// Lifetime used to normalize burst particle fade
    pub const BURST_MAX_LIFE: u32 = 40;
    /// Lifetime used to normalize trail particle fade
    pub const TRAIL_MAX_LIFE: u32 = 30;

    /// Scoring and progression
    pub const POINTS_PER_LEVEL: u32 = 10;
    pub const MAX_MISSED: u32 = 5;
    pub const MAX_BUGS: u32 = 5;
    pub const SPAWN_INTERVAL_BASE: u32 = 60;
    pub const SPAWN_INTERVAL_STEP: u32 = 5;
    pub const SPAWN_INTERVAL_MIN: u32 = 20;

    /// Screen flash
    pub const FLASH_ALPHA: u8 = 100;
    pub const FLASH_DECAY: u8 = 15;

    /// HUD header height
    pub const HEADER_HEIGHT: f32 = 70.0;
}

/// Colors (RGBA, 0-1)
pub mod palette {
    pub type Rgba = [f32; 4];

    /// Build a color from 8-bit channels
    pub const fn rgba8(r: u8, g: u8, b: u8, a: u8) -> Rgba {
        [
            r as f32 / 255.0,
            g as f32 / 255.0,
            b as f32 / 255.0,
            a as f32 / 255.0,
        ]
    }

    /// Same color with a different alpha
    pub const fn with_alpha(c: Rgba, a: f32) -> Rgba {
        [c[0], c[1], c[2], a]
    }

    /// Linear blend between two colors (alpha taken from `a`)
    pub fn mix(a: Rgba, b: Rgba, t: f32) -> Rgba {
        let t = t.clamp(0.0, 1.0);
        [
            a[0] * (1.0 - t) + b[0] * t,
            a[1] * (1.0 - t) + b[1] * t,
            a[2] * (1.0 - t) + b[2] * t,
            a[3],
        ]
    }

    pub const WHITE: Rgba = rgba8(255, 255, 255, 255);
    pub const BLACK: Rgba = rgba8(0, 0, 0, 255);
    pub const BLUE: Rgba = rgba8(30, 144, 255, 255);
    pub const LIGHT_BLUE: Rgba = rgba8(173, 216, 230, 255);
    pub const GREEN: Rgba = rgba8(50, 205, 50, 255);
    pub const LIGHT_GREEN: Rgba = rgba8(144, 238, 144, 255);
    pub const RED: Rgba = rgba8(220, 20, 60, 255);
    pub const LIGHT_RED: Rgba = rgba8(255, 182, 193, 255);
    pub const GRAY: Rgba = rgba8(128, 128, 128, 255);
    pub const DARK_GRAY: Rgba = rgba8(50, 50, 50, 255);
    pub const LIGHT_GRAY: Rgba = rgba8(200, 200, 200, 255);

    pub const HEADER: Rgba = rgba8(240, 248, 255, 255);

    /// Flash overlay tints (alpha supplied by the flash state)
    pub const FLASH_CORRECT: Rgba = rgba8(0, 255, 0, 255);
    pub const FLASH_BUG: Rgba = rgba8(255, 0, 0, 255);
}
