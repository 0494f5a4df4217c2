//! Scene assembly: game state in, one ordered triangle list out
//!
//! Draw order follows painter's rules: background, burst particles, catch
//! flash, then the active screen on top.

use glam::Vec2;

use super::font::{self, FontStyle, size};
use super::shapes;
use super::vertex::Vertex;
use crate::assets::{Assets, LOGO_PIXEL_SCALE, Sprite};
use crate::consts::*;
use crate::palette::{self, Rgba, with_alpha};
use crate::settings::Settings;
use crate::sim::{FallingObject, GameState, Player, Rect, Screen};
use crate::ui::Button;

const TITLE: &str = "CODE CATCHER";
const SUBTITLE: &str = "Catch correct code snippets, avoid bugs!";
const VERSION: &str = "v1.0";
const CATCHER_CAPTION: &str = "def catch():";

const TUTORIAL_STEPS: [&str; 6] = [
    "1. Use LEFT and RIGHT arrow keys to move your code catcher",
    "2. Catch correct code snippets (green) to score points",
    "3. Avoid catching buggy code (red)",
    "4. Missing 5 correct snippets or catching 5 bugs ends the game",
    "5. Level up after every 10 points",
    "6. Press ESC during gameplay to pause",
];
const TUTORIAL_EXAMPLES: [(&str, &str, bool); 2] = [
    ("print('Hello')", "CORRECT - Valid syntax", true),
    ("pront('Hello')", "BUG - Invalid function name", false),
];

/// Render-side switches taken from `Settings`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SceneOptions {
    /// Catcher afterimages and snippet droplets
    pub trails: bool,
    /// Faint code symbols behind everything
    pub backdrop: bool,
}

impl Default for SceneOptions {
    fn default() -> Self {
        Self {
            trails: true,
            backdrop: true,
        }
    }
}

impl SceneOptions {
    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            trails: settings.trails,
            backdrop: settings.quality.backdrop_enabled(),
        }
    }
}

/// Side margin kept clear between snippet text and its box edge
const SNIPPET_TEXT_PAD: f32 = 8.0;

/// Mono text scale for a snippet: TINY, shrunk until the text fits the box
fn snippet_text_scale(text: &str, box_width: f32) -> f32 {
    let room = (box_width - 2.0 * SNIPPET_TEXT_PAD).max(1.0);
    let natural = font::text_width(text, FontStyle::Mono, size::TINY);
    if natural <= room {
        size::TINY
    } else {
        size::TINY * room / natural
    }
}

/// 8-bit alpha to a 0-1 float
fn a8(alpha: u8) -> f32 {
    alpha as f32 / 255.0
}

/// Build the full frame for the current screen
pub fn build(state: &GameState, assets: &Assets, options: SceneOptions) -> Vec<Vertex> {
    let mut out = Vec::with_capacity(16 * 1024);

    draw_background(&mut out, state, options);
    draw_particles(&mut out, state);
    if state.flash.alpha > 0 {
        out.extend(shapes::rect(
            Rect::new(0.0, 0.0, SCREEN_WIDTH, SCREEN_HEIGHT),
            with_alpha(state.flash.color, a8(state.flash.alpha)),
        ));
    }

    match state.screen {
        Screen::Menu => draw_menu(&mut out, state, assets),
        Screen::Tutorial => draw_tutorial(&mut out),
        Screen::Game => {
            draw_game(&mut out, state, assets, options);
            if state.paused {
                draw_pause(&mut out);
            }
        }
        Screen::GameOver => draw_game_over(&mut out, state, assets, options),
    }

    out
}

fn draw_background(out: &mut Vec<Vertex>, state: &GameState, options: SceneOptions) {
    out.extend(shapes::vertical_gradient(
        Rect::new(0.0, 0.0, SCREEN_WIDTH, SCREEN_HEIGHT),
        palette::rgba8(200, 220, 240, 255),
        palette::rgba8(50, 70, 90, 255),
    ));

    if options.backdrop {
        let color = with_alpha(palette::WHITE, a8(20));
        for glyph in &state.backdrop {
            font::draw_text(
                out,
                glyph.symbol,
                Vec2::new(glyph.x, glyph.y),
                FontStyle::Mono,
                size::TINY,
                color,
            );
        }
    }
}

/// Burst particles shrink and fade with age
fn draw_particles(out: &mut Vec<Vertex>, state: &GameState) {
    for p in &state.particles {
        let t = p.life_fraction();
        let radius = p.radius * t;
        if radius < 0.5 {
            continue;
        }
        out.extend(shapes::circle(p.pos, radius, with_alpha(p.color, t), 10));
    }
}

fn draw_button(out: &mut Vec<Vertex>, button: &Button) {
    if button.hovered {
        let grow = 10.0 + 5.0 * button.glow;
        out.extend(shapes::rounded_rect(
            button.rect.inflate(grow, grow),
            10.0,
            with_alpha(button.hover_color, a8(100)),
        ));
    }

    out.extend(shapes::rounded_rect(button.rect, 8.0, button.fill()));
    out.extend(shapes::rounded_rect_outline(
        button.rect,
        8.0,
        2.0,
        palette::WHITE,
    ));

    let center = button.rect.center();
    font::draw_text_centered(
        out,
        button.label,
        center.x,
        center.y - font::text_height(size::MEDIUM) / 2.0,
        FontStyle::Regular,
        size::MEDIUM,
        button.text_color,
    );
}

/// Text drawn over offset copies of itself in a translucent tint
fn draw_glowing_title(
    out: &mut Vec<Vertex>,
    text: &str,
    y: f32,
    color: Rgba,
    glows: &[(f32, u8)],
) {
    let cx = SCREEN_WIDTH / 2.0;
    for &(offset, alpha) in glows {
        let tint = with_alpha(color, a8(alpha));
        for sign in [1.0, -1.0] {
            font::draw_text_centered(
                out,
                text,
                cx + sign * offset,
                y + sign * offset,
                FontStyle::Bold,
                size::XL,
                tint,
            );
        }
    }
    font::draw_text_centered(out, text, cx, y, FontStyle::Bold, size::XL, color);
}

/// Opaque pixels as quads, merging horizontal runs of equal color
fn draw_sprite(out: &mut Vec<Vertex>, sprite: &Sprite, top_left: Vec2, scale: f32) {
    for (y, row) in sprite.rows().enumerate() {
        let pixels: Vec<[u8; 4]> = row
            .chunks_exact(4)
            .map(|p| [p[0], p[1], p[2], p[3]])
            .collect();
        let mut x = 0;
        while x < pixels.len() {
            let px = pixels[x];
            let start = x;
            while x < pixels.len() && pixels[x] == px {
                x += 1;
            }
            if px[3] == 0 {
                continue;
            }
            shapes::push_rect(
                out,
                Rect::new(
                    top_left.x + start as f32 * scale,
                    top_left.y + y as f32 * scale,
                    (x - start) as f32 * scale,
                    scale,
                ),
                palette::rgba8(px[0], px[1], px[2], px[3]),
            );
        }
    }
}

fn draw_menu(out: &mut Vec<Vertex>, state: &GameState, assets: &Assets) {
    if let Some(logo) = &assets.logo {
        let width = logo.width() as f32 * LOGO_PIXEL_SCALE;
        draw_sprite(
            out,
            logo,
            Vec2::new(SCREEN_WIDTH / 2.0 - width / 2.0, 50.0),
            LOGO_PIXEL_SCALE,
        );
    } else {
        draw_glowing_title(
            out,
            TITLE,
            SCREEN_HEIGHT / 4.0,
            palette::BLUE,
            &[(4.0, 20), (3.0, 40), (2.0, 60), (1.0, 80)],
        );
        font::draw_text_centered(
            out,
            SUBTITLE,
            SCREEN_WIDTH / 2.0,
            SCREEN_HEIGHT / 3.0,
            FontStyle::Regular,
            size::MEDIUM,
            palette::DARK_GRAY,
        );
    }

    for button in &state.menu_buttons {
        draw_button(out, button);
    }

    let w = font::text_width(VERSION, FontStyle::Regular, size::TINY);
    let h = font::text_height(size::TINY);
    font::draw_text(
        out,
        VERSION,
        Vec2::new(SCREEN_WIDTH - w - 10.0, SCREEN_HEIGHT - h - 10.0),
        FontStyle::Regular,
        size::TINY,
        palette::GRAY,
    );
}

fn draw_hud(out: &mut Vec<Vertex>, state: &GameState) {
    out.extend(shapes::rect(
        Rect::new(0.0, 0.0, SCREEN_WIDTH, HEADER_HEIGHT),
        palette::HEADER,
    ));

    // Dotted pattern, reusing the seeded backdrop positions
    let dot = with_alpha(palette::LIGHT_BLUE, a8(30));
    for glyph in state.backdrop.iter().take(10) {
        out.extend(shapes::circle(
            Vec2::new(glyph.x, glyph.y % (HEADER_HEIGHT - 10.0)),
            5.0,
            dot,
            10,
        ));
    }

    out.extend(shapes::rect(
        Rect::new(0.0, HEADER_HEIGHT - 1.0, SCREEN_WIDTH, 2.0),
        palette::BLUE,
    ));

    let stats = [
        format!("SCORE {}", state.score),
        format!("LEVEL {}", state.level),
        format!("LIVES {}", state.lives()),
        format!("BUGS {}/{}", state.caught_bugs, MAX_BUGS),
    ];
    let text_y = 25.0 - font::text_height(size::SMALL) / 2.0;
    for (i, stat) in stats.iter().enumerate() {
        let x = 20.0 + i as f32 * 170.0;
        out.extend(shapes::rounded_rect(
            Rect::new(x, 10.0, 150.0, 30.0),
            5.0,
            with_alpha(palette::WHITE, a8(180)),
        ));
        font::draw_text(
            out,
            stat,
            Vec2::new(x + 10.0, text_y),
            FontStyle::Mono,
            size::SMALL,
            palette::DARK_GRAY,
        );
    }

    // Progress toward the next level
    let bar = Rect::new(20.0, 50.0, SCREEN_WIDTH - 40.0, 10.0);
    out.extend(shapes::rounded_rect(
        bar,
        5.0,
        with_alpha(palette::WHITE, a8(100)),
    ));
    let filled = (bar.w * state.level_progress()).floor();
    if filled > 0.0 {
        out.extend(shapes::horizontal_gradient(
            Rect::new(bar.x, bar.y, filled, bar.h),
            palette::GREEN,
            palette::LIGHT_GREEN,
        ));
    }
    out.extend(shapes::rounded_rect_outline(bar, 5.0, 2.0, palette::GREEN));

    font::draw_text_centered(
        out,
        &format!("Level {}", state.level),
        SCREEN_WIDTH / 2.0,
        40.0,
        FontStyle::Mono,
        size::TINY,
        palette::DARK_GRAY,
    );
}

fn draw_player(out: &mut Vec<Vertex>, player: &Player, assets: &Assets, options: SceneOptions) {
    if options.trails {
        let n = player.trail.len() as f32;
        for (i, ghost) in player.trail.iter().enumerate() {
            let alpha = 128.0 * (i as f32 + 1.0) / n / 255.0;
            out.extend(shapes::rect(*ghost, with_alpha(palette::BLUE, alpha)));
        }
    }

    let r = player.rect;
    if let Some(sprite) = &assets.catcher {
        draw_sprite(out, sprite, Vec2::new(r.x - 15.0, r.y - 15.0), 1.0);
        return;
    }

    out.extend(shapes::vertical_gradient(
        r,
        palette::BLUE,
        with_alpha(palette::BLUE, a8(105)),
    ));
    out.extend(shapes::rounded_rect_outline(r, 5.0, 2.0, palette::BLUE));

    // Reception indicator: one row of dots, stepping down as the phase advances
    let dot_y = r.y + 5.0 + 3.0 * player.indicator_frame() as f32;
    for fx in [0.25, 0.5, 0.75] {
        out.extend(shapes::circle(
            Vec2::new(r.x + (r.w * fx).floor(), dot_y),
            3.0,
            palette::LIGHT_BLUE,
            10,
        ));
    }

    font::draw_text(
        out,
        CATCHER_CAPTION,
        Vec2::new(r.x + 10.0, r.y + 8.0),
        FontStyle::Mono,
        size::TINY,
        palette::WHITE,
    );
}

fn draw_object(out: &mut Vec<Vertex>, obj: &FallingObject, options: SceneOptions) {
    // Droplets stay upright, behind the box
    if options.trails {
        for p in &obj.particles {
            out.extend(shapes::circle(
                p.pos,
                p.radius,
                with_alpha(p.color, p.life_fraction()),
                8,
            ));
        }
    }

    let r = obj.rect;
    let mut local = Vec::with_capacity(2048);

    local.extend(shapes::rounded_rect(
        r.translate(3.0, 3.0),
        8.0,
        with_alpha(palette::DARK_GRAY, a8(100)),
    ));
    local.extend(shapes::rounded_rect(r, 8.0, obj.accent_light()));
    local.extend(shapes::rounded_rect_outline(r, 8.0, 2.0, obj.accent()));

    let center = r.center();
    let scale = snippet_text_scale(&obj.text, r.w);
    let text_y = center.y - font::text_height(scale) / 2.0;
    font::draw_text_centered(
        &mut local,
        &obj.text,
        center.x + 1.0,
        text_y + 1.0,
        FontStyle::Mono,
        scale,
        with_alpha(palette::DARK_GRAY, a8(120)),
    );
    font::draw_text_centered(
        &mut local,
        &obj.text,
        center.x,
        text_y,
        FontStyle::Mono,
        scale,
        palette::DARK_GRAY,
    );

    if obj.decoration.shine_visible() {
        const SHINE_WIDTH: usize = 20;
        let shine_x = r.x + obj.decoration.shine * r.w;
        for i in 0..SHINE_WIDTH {
            let t = i as f32 / SHINE_WIDTH as f32;
            let alpha = (t * std::f32::consts::PI).sin() * 0.5;
            shapes::push_rect(
                &mut local,
                Rect::new(
                    shine_x - (SHINE_WIDTH / 2) as f32 + i as f32,
                    r.y + 2.0,
                    1.0,
                    r.h - 4.0,
                ),
                with_alpha(palette::WHITE, alpha),
            );
        }
    }

    // Check mark or cross badge in the top-right corner
    let icon = Vec2::new(r.right() - 14.0, r.top() + 11.0);
    local.extend(shapes::circle(icon, 6.0, obj.accent(), 12));
    let strokes: [(Vec2, Vec2); 2] = if obj.is_correct {
        [
            (Vec2::new(-4.0, 0.0), Vec2::new(-1.0, 3.0)),
            (Vec2::new(-1.0, 3.0), Vec2::new(4.0, -3.0)),
        ]
    } else {
        [
            (Vec2::new(-3.0, -3.0), Vec2::new(3.0, 3.0)),
            (Vec2::new(3.0, -3.0), Vec2::new(-3.0, 3.0)),
        ]
    };
    for (a, b) in strokes {
        local.extend(shapes::line(icon + a, icon + b, 2.0, palette::WHITE));
    }

    shapes::rotate_about(
        &mut local,
        center,
        obj.decoration.angle,
        Vec2::new(obj.decoration.wobble_offset(), 0.0),
    );
    out.extend(local);
}

fn draw_game(out: &mut Vec<Vertex>, state: &GameState, assets: &Assets, options: SceneOptions) {
    draw_hud(out, state);
    draw_player(out, &state.player, assets, options);
    for obj in &state.objects {
        draw_object(out, obj, options);
    }
}

fn draw_pause(out: &mut Vec<Vertex>) {
    out.extend(shapes::rect(
        Rect::new(0.0, 0.0, SCREEN_WIDTH, SCREEN_HEIGHT),
        with_alpha(palette::BLACK, a8(180)),
    ));
    font::draw_text_centered(
        out,
        "PAUSED",
        SCREEN_WIDTH / 2.0,
        SCREEN_HEIGHT / 2.0 - 50.0,
        FontStyle::Bold,
        size::XL,
        palette::WHITE,
    );
    font::draw_text_centered(
        out,
        "Press ESC to Resume",
        SCREEN_WIDTH / 2.0,
        SCREEN_HEIGHT / 2.0 + 20.0,
        FontStyle::Regular,
        size::MEDIUM,
        palette::LIGHT_BLUE,
    );
}

fn draw_game_over(
    out: &mut Vec<Vertex>,
    state: &GameState,
    assets: &Assets,
    options: SceneOptions,
) {
    draw_game(out, state, assets, options);

    // Navy veil with a gentle horizontal ripple in its opacity
    const BAND: f32 = 5.0;
    let mut y = 0.0;
    while y < SCREEN_HEIGHT {
        let alpha = (180.0 + 20.0 * (y / 30.0).sin()) / 255.0;
        out.extend(shapes::rect(
            Rect::new(0.0, y, SCREEN_WIDTH, BAND),
            with_alpha(palette::rgba8(0, 0, 30, 255), alpha),
        ));
        y += BAND;
    }

    draw_glowing_title(
        out,
        "GAME OVER",
        SCREEN_HEIGHT / 3.0,
        palette::RED,
        &[(3.0, 50), (2.0, 100), (1.0, 150)],
    );
    font::draw_text_centered(
        out,
        &format!("Final Score: {}", state.score),
        SCREEN_WIDTH / 2.0,
        SCREEN_HEIGHT / 2.0 - 30.0,
        FontStyle::Regular,
        size::LARGE,
        palette::WHITE,
    );
    font::draw_text_centered(
        out,
        &format!("Level Reached: {}", state.level),
        SCREEN_WIDTH / 2.0,
        SCREEN_HEIGHT / 2.0 + 10.0,
        FontStyle::Regular,
        size::LARGE,
        palette::LIGHT_BLUE,
    );

    for button in &state.game_over_buttons {
        draw_button(out, button);
    }
}

fn draw_tutorial(out: &mut Vec<Vertex>) {
    let cx = SCREEN_WIDTH / 2.0;
    out.extend(shapes::rect(
        Rect::new(0.0, 0.0, SCREEN_WIDTH, SCREEN_HEIGHT),
        palette::rgba8(0, 0, 40, 220),
    ));

    font::draw_text_centered(
        out,
        "HOW TO PLAY",
        cx,
        50.0,
        FontStyle::Bold,
        size::LARGE,
        palette::WHITE,
    );

    for (i, step) in TUTORIAL_STEPS.iter().enumerate() {
        font::draw_text_centered(
            out,
            step,
            cx,
            120.0 + i as f32 * 40.0,
            FontStyle::Regular,
            size::MEDIUM,
            palette::LIGHT_BLUE,
        );
    }

    font::draw_text_centered(
        out,
        "EXAMPLES:",
        cx,
        380.0,
        FontStyle::Regular,
        size::MEDIUM,
        palette::WHITE,
    );

    for (i, (code, description, correct)) in TUTORIAL_EXAMPLES.iter().enumerate() {
        let y = 420.0 + i as f32 * 70.0;
        let fill = if *correct { palette::GREEN } else { palette::RED };
        let chip = Rect::new(cx - 200.0, y, 400.0, 30.0);
        out.extend(shapes::rounded_rect(chip, 5.0, fill));
        font::draw_text_centered(
            out,
            code,
            cx,
            chip.center().y - font::text_height(size::SMALL) / 2.0,
            FontStyle::Mono,
            size::SMALL,
            palette::WHITE,
        );
        font::draw_text_centered(
            out,
            description,
            cx,
            y + 35.0,
            FontStyle::Mono,
            size::SMALL,
            palette::LIGHT_GRAY,
        );
    }

    font::draw_text_centered(
        out,
        "Press ESC or ENTER to return to menu",
        cx,
        SCREEN_HEIGHT - 50.0,
        FontStyle::Regular,
        size::MEDIUM,
        palette::GREEN,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::{CATCHER_SIZE, LOGO_SIZE};
    use crate::sim::SnippetTier;
    use image::{Rgba, RgbaImage};
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn solid_sprite((w, h): (u32, u32)) -> Sprite {
        Sprite::from_image(RgbaImage::from_pixel(w, h, Rgba([10, 20, 30, 255])), w, h)
    }

    fn in_game() -> GameState {
        let mut state = GameState::new(42);
        state.screen = Screen::Game;
        state.start_game();
        let mut rng = Pcg32::seed_from_u64(1);
        let mut obj = FallingObject::spawn(&mut rng, 1, 1.0);
        obj.rect.y = 200.0;
        state.objects.push(obj);
        state
    }

    fn triangles_ok(v: &[Vertex]) -> bool {
        v.len() % 3 == 0 && v.iter().all(|v| v.position.iter().all(|c| c.is_finite()))
    }

    #[test]
    fn test_every_screen_draws() {
        let assets = Assets::none();
        let mut state = in_game();
        for screen in [Screen::Menu, Screen::Tutorial, Screen::Game, Screen::GameOver] {
            state.screen = screen;
            let v = build(&state, &assets, SceneOptions::default());
            assert!(v.len() > 6, "{:?} drew nothing", screen);
            assert!(triangles_ok(&v));
        }
    }

    #[test]
    fn test_pause_adds_overlay() {
        let assets = Assets::none();
        let mut state = in_game();
        let playing = build(&state, &assets, SceneOptions::default()).len();
        state.paused = true;
        let paused = build(&state, &assets, SceneOptions::default()).len();
        assert!(paused > playing);
    }

    #[test]
    fn test_flash_only_when_active() {
        let assets = Assets::none();
        let mut state = GameState::new(3);
        let idle = build(&state, &assets, SceneOptions::default());
        state.flash.trigger(palette::FLASH_BUG);
        let flashing = build(&state, &assets, SceneOptions::default());
        assert_eq!(flashing.len(), idle.len() + 6);
    }

    #[test]
    fn test_solid_sprite_collapses_to_row_runs() {
        let sprite = solid_sprite(CATCHER_SIZE);
        let mut out = Vec::new();
        draw_sprite(&mut out, &sprite, Vec2::ZERO, 1.0);
        assert_eq!(out.len(), CATCHER_SIZE.1 as usize * 6);
    }

    #[test]
    fn test_transparent_pixels_skipped() {
        let img = RgbaImage::from_pixel(4, 4, Rgba([0, 0, 0, 0]));
        let sprite = Sprite::from_image(img, 4, 4);
        let mut out = Vec::new();
        draw_sprite(&mut out, &sprite, Vec2::ZERO, 1.0);
        assert!(out.is_empty());
    }

    #[test]
    fn test_logo_replaces_title_text() {
        let state = GameState::new(5);
        let with_logo = Assets {
            catcher: None,
            logo: Some(solid_sprite(LOGO_SIZE)),
        };
        let v = build(&state, &with_logo, SceneOptions::default());
        // Logo rows are drawn at double scale starting at y = 50
        let top = Vec2::new(SCREEN_WIDTH / 2.0 - LOGO_SIZE.0 as f32, 50.0);
        assert!(v.iter().any(|v| v.pos() == top));
        assert!(triangles_ok(&v));
    }

    #[test]
    fn test_catcher_sprite_drawn_offset() {
        let mut state = in_game();
        state.objects.clear();
        let assets = Assets {
            catcher: Some(solid_sprite(CATCHER_SIZE)),
            logo: None,
        };
        let v = build(&state, &assets, SceneOptions::default());
        let corner = Vec2::new(state.player.rect.x - 15.0, state.player.rect.y - 15.0);
        assert!(v.iter().any(|v| v.pos() == corner));
    }

    #[test]
    fn test_object_geometry_stays_near_box() {
        let state = in_game();
        let obj = &state.objects[0];
        let mut out = Vec::new();
        let no_trails = SceneOptions {
            trails: false,
            backdrop: false,
        };
        draw_object(&mut out, obj, no_trails);
        let reach = obj.rect.w.hypot(obj.rect.h) / 2.0 + 20.0;
        for v in &out {
            assert!(v.pos().distance(obj.rect.center()) <= reach);
        }
    }

    #[test]
    fn test_every_snippet_fits_the_narrowest_box() {
        let width = OBJECT_MIN_WIDTH as f32;
        for tier in [
            SnippetTier::Basic,
            SnippetTier::Intermediate,
            SnippetTier::Advanced,
        ] {
            let (good, bad) = tier.pools();
            for text in good.iter().chain(bad.iter()) {
                let scale = snippet_text_scale(text, width);
                assert!(scale <= size::TINY);
                let w = font::text_width(text, FontStyle::Mono, scale);
                assert!(w + 1.0 <= width - SNIPPET_TEXT_PAD, "{text:?} is {w}px wide");
            }
        }
        // Short text keeps the normal size
        assert_eq!(snippet_text_scale("x = 5", width), size::TINY);
    }

    #[test]
    fn test_options_from_settings() {
        let mut settings = Settings::default();
        settings.trails = false;
        settings.quality = crate::QualityPreset::Low;
        let options = SceneOptions::from_settings(&settings);
        assert!(!options.trails);
        assert!(!options.backdrop);
    }
}
