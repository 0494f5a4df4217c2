//! End-to-end sessions driven through the public tick API

use code_catcher::assets::Assets;
use code_catcher::consts::*;
use code_catcher::renderer::{self, SceneOptions};
use code_catcher::sim::{
    FallingObject, GameEvent, GameState, Rect, Screen, SessionTuning, TickInput, tick,
};
use code_catcher::ui::Pointer;
use code_catcher::{Difficulty, Settings};
use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;

fn click(at: Vec2) -> TickInput {
    TickInput {
        pointer: Pointer {
            pos: Some(at),
            pressed: true,
        },
        ..Default::default()
    }
}

fn idle() -> TickInput {
    TickInput::default()
}

/// A straight-falling snippet placed at (x, y)
fn snippet(correct: bool, x: f32, y: f32) -> FallingObject {
    let mut rng = Pcg32::seed_from_u64(9);
    let mut obj = FallingObject::spawn(&mut rng, 1, 1.0);
    obj.is_correct = correct;
    obj.rect = Rect::new(x, y, 140.0, OBJECT_HEIGHT);
    obj.speed = 3.0;
    obj.oscillation = None;
    obj
}

fn start_from_menu(state: &mut GameState) {
    let start = state.menu_buttons[0].rect.center();
    tick(state, &click(start));
    tick(state, &idle());
    assert_eq!(state.screen, Screen::Game);
}

#[test]
fn test_full_session_menu_to_game_over_and_back() {
    let mut state = GameState::new(2024);
    start_from_menu(&mut state);
    assert!(state.drain_events().contains(&GameEvent::GameStarted));

    // Five correct snippets slip past the far-left edge
    for _ in 0..MAX_MISSED {
        state.objects.push(snippet(true, 0.0, SCREEN_HEIGHT - 1.0));
        tick(&mut state, &idle());
    }
    assert_eq!(state.missed_correct, MAX_MISSED);
    assert_eq!(state.lives(), 0);
    assert!(state.game_over);
    assert_eq!(state.screen, Screen::Game);

    tick(&mut state, &idle());
    assert_eq!(state.screen, Screen::GameOver);
    let events = state.drain_events();
    assert_eq!(
        events.iter().filter(|e| **e == GameEvent::MissedCorrect).count(),
        MAX_MISSED as usize
    );
    assert!(events.contains(&GameEvent::GameOver { score: 0, level: 1 }));

    let back = state.game_over_buttons[1].rect.center();
    tick(&mut state, &click(back));
    assert_eq!(state.screen, Screen::Menu);
}

#[test]
fn test_click_held_across_screens_fires_once() {
    let mut state = GameState::new(31);
    state.screen = Screen::GameOver;

    // Lower half of BACK TO MENU, which sits over the menu's QUIT button
    let spot = Vec2::new(400.0, 460.0);
    assert!(state.game_over_buttons[1].rect.contains(spot));
    assert!(state.menu_buttons[2].rect.contains(spot));

    tick(&mut state, &click(spot));
    assert_eq!(state.screen, Screen::Menu);

    let held = TickInput {
        pointer: Pointer {
            pos: Some(spot),
            pressed: false,
        },
        ..Default::default()
    };
    for _ in 0..10 {
        tick(&mut state, &held);
    }
    assert_eq!(state.screen, Screen::Menu);
    assert!(!state.quit_requested);
    let clicks = state
        .drain_events()
        .iter()
        .filter(|e| **e == GameEvent::ButtonClick)
        .count();
    assert_eq!(clicks, 1);
}

#[test]
fn test_caught_bugs_end_the_run() {
    let mut state = GameState::new(7);
    start_from_menu(&mut state);

    let catcher_x = state.player.rect.x;
    for _ in 0..MAX_BUGS {
        state
            .objects
            .push(snippet(false, catcher_x, PLAYER_Y - OBJECT_HEIGHT));
        tick(&mut state, &idle());
    }
    assert_eq!(state.caught_bugs, MAX_BUGS);
    assert_eq!(state.score, 0);
    tick(&mut state, &idle());
    assert_eq!(state.screen, Screen::GameOver);
}

#[test]
fn test_start_game_resets_previous_run() {
    let mut state = GameState::new(11);
    start_from_menu(&mut state);
    state.score = 23;
    state.level = 3;
    state.missed_correct = 2;
    state.caught_bugs = 4;
    state.objects.push(snippet(true, 0.0, 100.0));
    state.screen = Screen::Menu;

    start_from_menu(&mut state);
    assert_eq!(state.score, 0);
    assert_eq!(state.level, 1);
    assert_eq!(state.missed_correct, 0);
    assert_eq!(state.caught_bugs, 0);
    assert_eq!(state.spawn_interval(), SPAWN_INTERVAL_BASE - SPAWN_INTERVAL_STEP);
}

#[test]
fn test_level_curve_tightens_spawns() {
    let mut state = GameState::new(5);
    start_from_menu(&mut state);
    state.score = POINTS_PER_LEVEL - 1;

    let catcher_x = state.player.rect.x;
    state
        .objects
        .push(snippet(true, catcher_x, PLAYER_Y - OBJECT_HEIGHT));
    tick(&mut state, &idle());

    assert_eq!(state.level, 2);
    assert_eq!(state.spawn_interval(), 50);
    assert!(
        state
            .drain_events()
            .contains(&GameEvent::LevelUp { level: 2 })
    );
}

#[test]
fn test_pause_round_trip_keeps_playfield() {
    let mut state = GameState::new(3);
    start_from_menu(&mut state);
    state.objects.push(snippet(true, 0.0, 200.0));

    let pause = TickInput {
        pause: true,
        ..Default::default()
    };
    tick(&mut state, &pause);
    assert!(state.paused);
    for _ in 0..30 {
        tick(&mut state, &idle());
    }
    assert_eq!(state.objects[0].rect.y, 200.0);

    tick(&mut state, &pause);
    assert!(!state.paused);
    assert_eq!(state.objects[0].rect.y, 203.0);
}

#[test]
fn test_play_again_starts_fresh() {
    let mut state = GameState::new(8);
    start_from_menu(&mut state);
    state.score = 14;
    state.missed_correct = MAX_MISSED;
    tick(&mut state, &idle());
    tick(&mut state, &idle());
    assert_eq!(state.screen, Screen::GameOver);

    let again = state.game_over_buttons[0].rect.center();
    tick(&mut state, &click(again));
    assert_eq!(state.screen, Screen::Game);
    assert_eq!(state.score, 0);
    assert_eq!(state.missed_correct, 0);
    assert!(state.objects.is_empty());
    assert!(!state.game_over);
}

#[test]
fn test_tutorial_enter_and_leave() {
    let mut state = GameState::new(1);
    let how_to = state.menu_buttons[1].rect.center();
    tick(&mut state, &click(how_to));
    assert_eq!(state.screen, Screen::Tutorial);

    // Movement keys do nothing here
    let left = TickInput {
        left: true,
        ..Default::default()
    };
    let x = state.player.rect.x;
    tick(&mut state, &left);
    assert_eq!(state.player.rect.x, x);

    let back = TickInput {
        back: true,
        ..Default::default()
    };
    tick(&mut state, &back);
    assert_eq!(state.screen, Screen::Menu);
}

#[test]
fn test_settings_shape_the_session() {
    let settings = Settings {
        difficulty: Difficulty::Easy,
        particles: false,
        reduced_motion: true,
        ..Default::default()
    };
    let tuning = SessionTuning::from_settings(&settings);
    assert_eq!(tuning.max_particles, 0);
    assert!(!tuning.flash);

    let mut state = GameState::with_tuning(4, tuning);
    start_from_menu(&mut state);
    let catcher_x = state.player.rect.x;
    state
        .objects
        .push(snippet(true, catcher_x, PLAYER_Y - OBJECT_HEIGHT));
    tick(&mut state, &idle());
    assert_eq!(state.score, 1);
    assert!(state.particles.is_empty());
    assert_eq!(state.flash.alpha, 0);
}

#[test]
fn test_every_screen_of_a_session_renders() {
    let assets = Assets::none();
    let options = SceneOptions::from_settings(&Settings::default());
    let mut state = GameState::new(99);
    assert!(!renderer::build(&state, &assets, options).is_empty());

    start_from_menu(&mut state);
    let autopilot = TickInput {
        autopilot: true,
        ..Default::default()
    };
    for _ in 0..300 {
        tick(&mut state, &autopilot);
    }
    assert!(!renderer::build(&state, &assets, options).is_empty());

    state.missed_correct = MAX_MISSED;
    tick(&mut state, &idle());
    tick(&mut state, &idle());
    assert_eq!(state.screen, Screen::GameOver);
    assert!(!renderer::build(&state, &assets, options).is_empty());
}
