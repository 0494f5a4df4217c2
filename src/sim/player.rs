//! The catcher paddle

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use super::geometry::Rect;
use crate::consts::*;

/// Held movement keys for one tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MoveIntent {
    pub left: bool,
    pub right: bool,
}

/// The player's catcher
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub rect: Rect,
    pub speed: f32,
    /// Recent pre-move boxes, oldest first
    pub trail: VecDeque<Rect>,
    /// Indicator animation, cycles through [0, PLAYER_ANIM_FRAMES)
    pub anim_phase: f32,
}

impl Default for Player {
    fn default() -> Self {
        Self {
            rect: Rect::new(
                (SCREEN_WIDTH / 2.0 - PLAYER_WIDTH / 2.0).floor(),
                PLAYER_Y,
                PLAYER_WIDTH,
                PLAYER_HEIGHT,
            ),
            speed: PLAYER_SPEED,
            trail: VecDeque::with_capacity(PLAYER_TRAIL_LENGTH + 1),
            anim_phase: 0.0,
        }
    }
}

impl Player {
    pub fn new() -> Self {
        Self::default()
    }

    /// Move by the held keys, clamp to the screen and record the trail.
    ///
    /// Left and right are applied independently, so holding both cancels out.
    pub fn update(&mut self, intent: MoveIntent) {
        let prev = self.rect;

        let mut x = self.rect.x;
        if intent.left {
            x -= self.speed;
        }
        if intent.right {
            x += self.speed;
        }
        self.rect.x = x.clamp(0.0, SCREEN_WIDTH - self.rect.w);

        self.anim_phase += PLAYER_ANIM_SPEED;
        if self.anim_phase >= PLAYER_ANIM_FRAMES {
            self.anim_phase = 0.0;
        }

        if prev.x != self.rect.x {
            self.trail.push_back(prev);
            if self.trail.len() > PLAYER_TRAIL_LENGTH {
                self.trail.pop_front();
            }
        }
    }

    /// Which row of the reception indicator is lit
    pub fn indicator_frame(&self) -> usize {
        (self.anim_phase as usize).min(PLAYER_ANIM_FRAMES as usize - 1)
    }
}
