//! Menu and game-over buttons, plus keyboard bindings
//!
//! Buttons are plain state machines: the sim feeds them the pointer each tick
//! and they report hover starts and fired actions. Drawing lives in
//! `renderer::scene`.

use glam::Vec2;

use crate::consts::{SCREEN_HEIGHT, SCREEN_WIDTH};
use crate::palette::{self, Rgba};
use crate::sim::Rect;

/// What a button does when clicked
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonAction {
    StartGame,
    Tutorial,
    Quit,
    PlayAgain,
    BackToMenu,
}

/// What a key does
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyCommand {
    MoveLeft,
    MoveRight,
    /// Escape: pause toggle in game, back out of the tutorial
    Back,
    Confirm,
    ToggleAutopilot,
    ToggleMute,
}

impl KeyCommand {
    /// Map a `KeyboardEvent::key()` value
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "ArrowLeft" | "a" | "A" => Some(Self::MoveLeft),
            "ArrowRight" | "d" | "D" => Some(Self::MoveRight),
            "Escape" => Some(Self::Back),
            "Enter" => Some(Self::Confirm),
            "i" | "I" => Some(Self::ToggleAutopilot),
            "m" | "M" => Some(Self::ToggleMute),
            _ => None,
        }
    }

    /// Movement is held; everything else acts once per press
    pub fn is_held(self) -> bool {
        matches!(self, Self::MoveLeft | Self::MoveRight)
    }
}

/// Command for a keydown, ignoring auto-repeats of one-shot keys
pub fn key_down(key: &str, repeat: bool) -> Option<KeyCommand> {
    KeyCommand::from_key(key).filter(|cmd| !repeat || cmd.is_held())
}

/// Pointer state sampled once per tick
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Pointer {
    /// Position in logical canvas coordinates (None when outside the canvas)
    pub pos: Option<Vec2>,
    /// Primary button went down since the last tick (one-shot)
    pub pressed: bool,
}

/// Result of feeding a pointer sample to a button
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ButtonResponse {
    /// The pointer just started hovering this tick
    pub hover_started: bool,
    pub fired: Option<ButtonAction>,
}

#[derive(Debug, Clone)]
pub struct Button {
    pub rect: Rect,
    pub label: &'static str,
    pub color: Rgba,
    pub hover_color: Rgba,
    pub text_color: Rgba,
    pub action: ButtonAction,
    pub hovered: bool,
    /// Glow pulse, ping-pongs through [0, 1]
    pub glow: f32,
    glow_dir: f32,
}

impl Button {
    pub fn new(
        rect: Rect,
        label: &'static str,
        color: Rgba,
        hover_color: Rgba,
        text_color: Rgba,
        action: ButtonAction,
    ) -> Self {
        Self {
            rect,
            label,
            color,
            hover_color,
            text_color,
            action,
            hovered: false,
            glow: 0.0,
            glow_dir: 1.0,
        }
    }

    /// Update hover and click state.
    ///
    /// Fires only on the tick that carries the press edge, so holding the
    /// pointer never fires again, here or on another screen's buttons.
    pub fn update(&mut self, pointer: Pointer) -> ButtonResponse {
        let was_hovered = self.hovered;
        self.hovered = pointer.pos.is_some_and(|p| self.rect.contains(p));

        let mut response = ButtonResponse {
            hover_started: self.hovered && !was_hovered,
            fired: None,
        };

        if self.hovered && pointer.pressed {
            response.fired = Some(self.action);
        }

        response
    }

    /// Advance the glow pulse by one tick
    pub fn animate(&mut self) {
        self.glow += 0.05 * self.glow_dir;
        if self.glow > 1.0 {
            self.glow = 1.0;
            self.glow_dir = -1.0;
        } else if self.glow < 0.0 {
            self.glow = 0.0;
            self.glow_dir = 1.0;
        }
    }

    /// Fill for the current hover state
    pub fn fill(&self) -> Rgba {
        if self.hovered {
            self.hover_color
        } else {
            self.color
        }
    }
}

/// Feed one pointer sample to a group of buttons.
///
/// Returns how many hovers started and the first action fired, if any.
pub fn update_group(buttons: &mut [Button], pointer: Pointer) -> (usize, Option<ButtonAction>) {
    let mut hovers = 0;
    let mut fired = None;
    for button in buttons.iter_mut() {
        let response = button.update(pointer);
        if response.hover_started {
            hovers += 1;
        }
        if fired.is_none() {
            fired = response.fired;
        }
    }
    (hovers, fired)
}

/// START GAME / HOW TO PLAY / QUIT, stacked below the title
pub fn menu_buttons() -> Vec<Button> {
    let x = SCREEN_WIDTH / 2.0 - 100.0;
    let y = SCREEN_HEIGHT / 2.0;
    vec![
        Button::new(
            Rect::new(x, y, 200.0, 50.0),
            "START GAME",
            palette::GREEN,
            palette::LIGHT_GREEN,
            palette::DARK_GRAY,
            ButtonAction::StartGame,
        ),
        Button::new(
            Rect::new(x, y + 70.0, 200.0, 50.0),
            "HOW TO PLAY",
            palette::BLUE,
            palette::LIGHT_BLUE,
            palette::WHITE,
            ButtonAction::Tutorial,
        ),
        Button::new(
            Rect::new(x, y + 140.0, 200.0, 50.0),
            "QUIT",
            palette::LIGHT_RED,
            palette::RED,
            palette::WHITE,
            ButtonAction::Quit,
        ),
    ]
}

/// PLAY AGAIN / BACK TO MENU, under the final score
pub fn game_over_buttons() -> Vec<Button> {
    let x = SCREEN_WIDTH / 2.0 - 120.0;
    let y = SCREEN_HEIGHT / 2.0;
    vec![
        Button::new(
            Rect::new(x, y + 50.0, 240.0, 50.0),
            "PLAY AGAIN",
            palette::GREEN,
            palette::LIGHT_GREEN,
            palette::DARK_GRAY,
            ButtonAction::PlayAgain,
        ),
        Button::new(
            Rect::new(x, y + 120.0, 240.0, 50.0),
            "BACK TO MENU",
            palette::BLUE,
            palette::LIGHT_BLUE,
            palette::WHITE,
            ButtonAction::BackToMenu,
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(x: f32, y: f32, pressed: bool) -> Pointer {
        Pointer {
            pos: Some(Vec2::new(x, y)),
            pressed,
        }
    }

    fn start_button() -> Button {
        menu_buttons().remove(0)
    }

    #[test]
    fn test_hover_cue_fires_once() {
        let mut b = start_button();
        let inside = b.rect.center();
        assert!(b.update(at(inside.x, inside.y, false)).hover_started);
        assert!(!b.update(at(inside.x, inside.y, false)).hover_started);
        b.update(at(0.0, 0.0, false));
        assert!(!b.hovered);
        assert!(b.update(at(inside.x, inside.y, false)).hover_started);
    }

    #[test]
    fn test_click_is_edge_triggered() {
        let mut b = start_button();
        let c = b.rect.center();
        assert_eq!(b.update(at(c.x, c.y, true)).fired, Some(ButtonAction::StartGame));
        // Still held: the edge is gone, no repeat
        assert_eq!(b.update(at(c.x, c.y, false)).fired, None);
        assert_eq!(b.update(at(c.x, c.y, false)).fired, None);
        // Next press
        assert_eq!(b.update(at(c.x, c.y, true)).fired, Some(ButtonAction::StartGame));
    }

    #[test]
    fn test_click_outside_does_nothing() {
        let mut b = start_button();
        assert_eq!(b.update(at(5.0, 5.0, true)).fired, None);
        assert_eq!(
            b.update(Pointer {
                pos: None,
                pressed: true
            })
            .fired,
            None
        );
    }

    #[test]
    fn test_glow_ping_pongs() {
        let mut b = start_button();
        for _ in 0..200 {
            b.animate();
            assert!((0.0..=1.0).contains(&b.glow));
        }
    }

    #[test]
    fn test_layouts() {
        let menu = menu_buttons();
        assert_eq!(menu.len(), 3);
        assert_eq!(menu[0].rect, Rect::new(300.0, 300.0, 200.0, 50.0));
        assert_eq!(menu[2].action, ButtonAction::Quit);

        let over = game_over_buttons();
        assert_eq!(over[0].rect, Rect::new(280.0, 350.0, 240.0, 50.0));
        assert_eq!(over[1].action, ButtonAction::BackToMenu);
    }

    #[test]
    fn test_key_repeat_only_moves() {
        assert_eq!(key_down("ArrowLeft", true), Some(KeyCommand::MoveLeft));
        assert_eq!(key_down("d", true), Some(KeyCommand::MoveRight));
        assert_eq!(key_down("Escape", false), Some(KeyCommand::Back));
        assert_eq!(key_down("Escape", true), None);
        assert_eq!(key_down("Enter", true), None);
        assert_eq!(key_down("M", false), Some(KeyCommand::ToggleMute));
        assert_eq!(key_down("m", true), None);
        assert_eq!(key_down("i", true), None);
        assert_eq!(key_down("q", false), None);
    }

    #[test]
    fn test_group_reports_first_action() {
        let mut menu = menu_buttons();
        let c = menu[1].rect.center();
        let (hovers, fired) = update_group(&mut menu, at(c.x, c.y, true));
        assert_eq!(hovers, 1);
        assert_eq!(fired, Some(ButtonAction::Tutorial));
    }
}
