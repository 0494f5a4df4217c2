//! Fixed timestep simulation tick
//!
//! Order within a tick: key edges, buttons, gameplay (only on an unpaused
//! game screen), then cosmetic particles and flash, which run on every screen.

use glam::Vec2;
use rand::Rng;

use super::falling::FallingObject;
use super::particles::{age_particles, burst};
use super::player::MoveIntent;
use super::state::{GameEvent, GameState, Screen};
use crate::consts::*;
use crate::palette;
use crate::ui::{self, ButtonAction, Pointer};

/// Input commands for a single tick
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Held movement keys
    pub left: bool,
    pub right: bool,
    /// Pause toggle (one-shot)
    pub pause: bool,
    /// Confirm key, e.g. Enter (one-shot)
    pub confirm: bool,
    /// Back/cancel key, e.g. Escape (one-shot)
    pub back: bool,
    /// Pointer position and button
    pub pointer: Pointer,
    /// Attract mode - the catcher steers itself
    pub autopilot: bool,
}

impl TickInput {
    /// Drop the edge-triggered inputs once a tick has consumed them
    pub fn clear_one_shots(&mut self) {
        self.pause = false;
        self.confirm = false;
        self.back = false;
        self.pointer.pressed = false;
    }

    fn movement(&self) -> MoveIntent {
        MoveIntent {
            left: self.left,
            right: self.right,
        }
    }
}

/// Advance the game state by one fixed timestep
pub fn tick(state: &mut GameState, input: &TickInput) {
    state.time_ticks += 1;

    handle_keys(state, input);
    handle_buttons(state, input.pointer);

    if state.screen == Screen::Game && !state.paused {
        play(state, input);
    }

    // Cosmetics keep running on every screen, paused or not
    age_particles(&mut state.particles);
    state.flash.fade();
}

fn handle_keys(state: &mut GameState, input: &TickInput) {
    match state.screen {
        Screen::Game if input.pause => {
            state.paused = !state.paused;
            log::info!("{}", if state.paused { "Paused" } else { "Resumed" });
        }
        Screen::Tutorial if input.back || input.confirm => {
            state.screen = Screen::Menu;
        }
        _ => {}
    }
}

fn handle_buttons(state: &mut GameState, pointer: Pointer) {
    let buttons = match state.screen {
        Screen::Menu => &mut state.menu_buttons,
        Screen::GameOver => &mut state.game_over_buttons,
        Screen::Tutorial | Screen::Game => return,
    };

    for button in buttons.iter_mut() {
        button.animate();
    }
    let (hovers, fired) = ui::update_group(buttons, pointer);

    for _ in 0..hovers {
        state.events.push(GameEvent::ButtonHover);
    }
    if let Some(action) = fired {
        state.events.push(GameEvent::ButtonClick);
        apply_action(state, action);
    }
}

fn apply_action(state: &mut GameState, action: ButtonAction) {
    log::debug!("Button action: {:?}", action);
    match action {
        ButtonAction::StartGame | ButtonAction::PlayAgain => {
            state.screen = Screen::Game;
            state.reset_session();
            state.start_game();
        }
        ButtonAction::Tutorial => state.screen = Screen::Tutorial,
        ButtonAction::BackToMenu => state.screen = Screen::Menu,
        ButtonAction::Quit => {
            log::info!("Quit requested");
            state.quit_requested = true;
        }
    }
}

/// One tick of active play
fn play(state: &mut GameState, input: &TickInput) {
    // The end-of-tick check latched game over last tick; switch screens first
    if state.game_over {
        state.screen = Screen::GameOver;
        state.events.push(GameEvent::GameOver {
            score: state.score,
            level: state.level,
        });
        log::info!(
            "Game over: score {}, level {}, missed {}, bugs {}",
            state.score,
            state.level,
            state.missed_correct,
            state.caught_bugs
        );
        return;
    }

    let intent = if input.autopilot {
        autopilot(state)
    } else {
        input.movement()
    };
    state.player.update(intent);

    state.spawn_timer += 1;
    if state.spawn_timer > state.spawn_interval() {
        let obj = FallingObject::spawn(&mut state.rng, state.level, state.tuning.speed_scale);
        log::debug!("Spawned {:?} (correct: {})", obj.text, obj.is_correct);
        state.objects.push(obj);
        state.spawn_timer = 0;
    }

    resolve_objects(state);
    check_level_up(state);

    if state.missed_correct >= MAX_MISSED || state.caught_bugs >= MAX_BUGS {
        state.game_over = true;
    }
}

/// Move every snippet, then settle its fate: caught, fell through, or still falling
fn resolve_objects(state: &mut GameState) {
    let catcher = state.player.rect;
    let objects = std::mem::take(&mut state.objects);
    let mut survivors = Vec::with_capacity(objects.len());

    for mut obj in objects {
        obj.update(&mut state.rng);

        if obj.rect.intersects(&catcher) {
            on_catch(state, &obj);
        } else if obj.is_off_screen() {
            on_fall_through(state, &obj);
        } else {
            survivors.push(obj);
        }
    }

    state.objects = survivors;
}

fn on_catch(state: &mut GameState, obj: &FallingObject) {
    if state.tuning.flash {
        state.flash.trigger(if obj.is_correct {
            palette::FLASH_CORRECT
        } else {
            palette::FLASH_BUG
        });
    }
    burst(
        &mut state.particles,
        &mut state.rng,
        obj.rect.center(),
        obj.accent(),
        CATCH_BURST,
        obj.is_correct,
        state.tuning.max_particles,
    );

    if obj.is_correct {
        state.score += 1;
        state.events.push(GameEvent::CaughtCorrect);
    } else {
        state.caught_bugs += 1;
        state.events.push(GameEvent::CaughtBug);
    }
}

/// Missed bugs vanish without penalty; missed correct code costs a life
fn on_fall_through(state: &mut GameState, obj: &FallingObject) {
    if !obj.is_correct {
        return;
    }
    state.missed_correct += 1;
    state.events.push(GameEvent::MissedCorrect);
    burst(
        &mut state.particles,
        &mut state.rng,
        Vec2::new(obj.rect.center().x, SCREEN_HEIGHT - 10.0),
        palette::LIGHT_RED,
        MISS_BURST,
        false,
        state.tuning.max_particles,
    );
}

fn check_level_up(state: &mut GameState) {
    if state.score < state.level * POINTS_PER_LEVEL {
        return;
    }
    state.level += 1;
    state.events.push(GameEvent::LevelUp { level: state.level });
    log::info!("Level up! Now level {}", state.level);

    for _ in 0..LEVEL_UP_BURSTS {
        let at = Vec2::new(
            state.rng.random_range(0.0..=SCREEN_WIDTH),
            state.rng.random_range(SCREEN_HEIGHT / 2.0..=SCREEN_HEIGHT),
        );
        let color = palette::rgba8(
            state.rng.random_range(100..=255),
            state.rng.random_range(100..=255),
            state.rng.random_range(100..=255),
            255,
        );
        burst(
            &mut state.particles,
            &mut state.rng,
            at,
            color,
            LEVEL_UP_BURST_SIZE,
            true,
            state.tuning.max_particles,
        );
    }
}

/// Steer toward the lowest correct snippet, sidestepping bugs about to land
fn autopilot(state: &GameState) -> MoveIntent {
    let catcher = state.player.rect;
    let center = catcher.center().x;
    let deadzone = state.player.speed;

    let threat = state
        .objects
        .iter()
        .filter(|o| !o.is_correct)
        .filter(|o| o.rect.bottom() > catcher.top() - 120.0 && o.rect.top() < catcher.bottom())
        .filter(|o| o.rect.right() > catcher.left() - 10.0 && o.rect.left() < catcher.right() + 10.0)
        .max_by(|a, b| a.rect.y.total_cmp(&b.rect.y));

    if let Some(bug) = threat {
        let go_right = bug.rect.center().x < center;
        let blocked = if go_right {
            catcher.right() >= SCREEN_WIDTH
        } else {
            catcher.left() <= 0.0
        };
        let right = go_right != blocked;
        return MoveIntent { left: !right, right };
    }

    let target = state
        .objects
        .iter()
        .filter(|o| o.is_correct && o.rect.top() < catcher.bottom())
        .max_by(|a, b| a.rect.y.total_cmp(&b.rect.y))
        .map(|o| o.rect.center().x);

    match target {
        Some(x) if x < center - deadzone => MoveIntent {
            left: true,
            right: false,
        },
        Some(x) if x > center + deadzone => MoveIntent {
            left: false,
            right: true,
        },
        _ => MoveIntent::default(),
    }
}
