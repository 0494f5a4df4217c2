//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - Stable iteration order (spawn order)
//! - No rendering or platform dependencies

pub mod falling;
pub mod geometry;
pub mod particles;
pub mod player;
pub mod snippets;
pub mod state;
pub mod tick;

pub use falling::{Decoration, FallingObject, Oscillation};
pub use geometry::Rect;
pub use particles::{Particle, age_particles, burst};
pub use player::{MoveIntent, Player};
pub use snippets::SnippetTier;
pub use state::{
    BackdropGlyph, Flash, GameEvent, GameState, Screen, SessionTuning, spawn_interval_for_level,
};
pub use tick::{TickInput, tick};
