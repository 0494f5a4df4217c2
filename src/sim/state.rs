//! Game session state and the screen state machine
//!
//! Everything the loop mutates during a tick lives in `GameState`.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::falling::FallingObject;
use super::particles::Particle;
use super::player::Player;
use crate::consts::*;
use crate::palette::{self, Rgba};
use crate::settings::Settings;
use crate::ui::{self, Button};

/// Which screen is showing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Screen {
    /// Title with START GAME / HOW TO PLAY / QUIT
    Menu,
    /// Instructions, any confirm/back key returns to the menu
    Tutorial,
    /// Active play (see `GameState::paused` for the pause overlay)
    Game,
    /// Final score with PLAY AGAIN / BACK TO MENU
    GameOver,
}

/// Things the shell reacts to (sounds, logging)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    GameStarted,
    CaughtCorrect,
    CaughtBug,
    MissedCorrect,
    LevelUp { level: u32 },
    GameOver { score: u32, level: u32 },
    ButtonHover,
    ButtonClick,
}

/// Full-screen color overlay cueing the outcome of a catch
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Flash {
    pub color: Rgba,
    /// 0-255, fades by FLASH_DECAY each tick
    pub alpha: u8,
}

impl Default for Flash {
    fn default() -> Self {
        Self {
            color: palette::BLACK,
            alpha: 0,
        }
    }
}

impl Flash {
    pub fn trigger(&mut self, color: Rgba) {
        self.color = color;
        self.alpha = FLASH_ALPHA;
    }

    pub fn fade(&mut self) {
        self.alpha = self.alpha.saturating_sub(FLASH_DECAY);
    }
}

/// Knobs derived from `Settings` for a session
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SessionTuning {
    /// Falling speed multiplier (difficulty)
    pub speed_scale: f32,
    /// Cap on live burst particles
    pub max_particles: usize,
    /// Whether catches flash the screen
    pub flash: bool,
}

impl Default for SessionTuning {
    fn default() -> Self {
        Self::from_settings(&Settings::default())
    }
}

impl SessionTuning {
    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            speed_scale: settings.difficulty.speed_multiplier(),
            max_particles: settings.max_particles(),
            flash: settings.effective_screen_flash(),
        }
    }
}

/// Faint code symbol scattered over the background
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BackdropGlyph {
    pub x: f32,
    pub y: f32,
    pub symbol: &'static str,
}

const BACKDROP_SYMBOLS: [&str; 8] = ["{ }", "[ ]", "( )", "< >", ";", "==", "+=", "->"];
const BACKDROP_GLYPHS: usize = 50;

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    /// Seed for reproducibility
    pub seed: u64,
    pub rng: Pcg32,
    pub screen: Screen,
    /// Pause overlay, only meaningful on `Screen::Game`
    pub paused: bool,
    /// Latched by the end-of-tick check, acted on at the start of the next tick
    pub game_over: bool,
    pub score: u32,
    /// Starts at 1, never decreases within a session
    pub level: u32,
    pub missed_correct: u32,
    pub caught_bugs: u32,
    /// Ticks since the last spawn
    pub spawn_timer: u32,
    pub player: Player,
    /// Active snippets (order is spawn order, membership changes every tick)
    pub objects: Vec<FallingObject>,
    /// Burst particles (catches, misses, level-ups)
    pub particles: Vec<Particle>,
    pub flash: Flash,
    pub menu_buttons: Vec<Button>,
    pub game_over_buttons: Vec<Button>,
    pub backdrop: Vec<BackdropGlyph>,
    pub tuning: SessionTuning,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Set by the QUIT button; the shell stops after this tick
    pub quit_requested: bool,
    /// Events raised since the shell last drained them
    pub events: Vec<GameEvent>,
}

impl GameState {
    /// Create a new game state on the menu screen
    pub fn new(seed: u64) -> Self {
        Self::with_tuning(seed, SessionTuning::default())
    }

    pub fn with_tuning(seed: u64, tuning: SessionTuning) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let backdrop = (0..BACKDROP_GLYPHS)
            .map(|_| BackdropGlyph {
                x: rng.random_range(0.0..SCREEN_WIDTH - 30.0),
                y: rng.random_range(0.0..SCREEN_HEIGHT - 30.0),
                symbol: BACKDROP_SYMBOLS[rng.random_range(0..BACKDROP_SYMBOLS.len())],
            })
            .collect();

        Self {
            seed,
            rng,
            screen: Screen::Menu,
            paused: false,
            game_over: false,
            score: 0,
            level: 1,
            missed_correct: 0,
            caught_bugs: 0,
            spawn_timer: 0,
            player: Player::new(),
            objects: Vec::new(),
            particles: Vec::new(),
            flash: Flash::default(),
            menu_buttons: ui::menu_buttons(),
            game_over_buttons: ui::game_over_buttons(),
            backdrop,
            tuning,
            time_ticks: 0,
            quit_requested: false,
            events: Vec::new(),
        }
    }

    /// Ticks between spawns at the current level
    pub fn spawn_interval(&self) -> u32 {
        spawn_interval_for_level(self.level)
    }

    /// Reset counters for a fresh run (START GAME)
    pub fn start_game(&mut self) {
        self.score = 0;
        self.level = 1;
        self.missed_correct = 0;
        self.caught_bugs = 0;
        self.game_over = false;
        self.paused = false;
        self.events.push(GameEvent::GameStarted);
        log::info!("Game started");
    }

    /// Rebuild the catcher and clear the playfield (PLAY AGAIN)
    pub fn reset_session(&mut self) {
        self.player = Player::new();
        self.objects.clear();
        self.particles.clear();
        self.spawn_timer = 0;
    }

    /// Lives left before the miss limit ends the run
    pub fn lives(&self) -> u32 {
        MAX_MISSED.saturating_sub(self.missed_correct)
    }

    /// Progress toward the next level, in [0, 1)
    pub fn level_progress(&self) -> f32 {
        (self.score % POINTS_PER_LEVEL) as f32 / POINTS_PER_LEVEL as f32
    }

    /// Take all pending events
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}

/// `max(20, 60 - level * 5)` ticks
pub fn spawn_interval_for_level(level: u32) -> u32 {
    SPAWN_INTERVAL_BASE
        .saturating_sub(level.saturating_mul(SPAWN_INTERVAL_STEP))
        .max(SPAWN_INTERVAL_MIN)
}
