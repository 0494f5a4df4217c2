//! Code Catcher entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;

    use glam::Vec2;
    use wasm_bindgen::prelude::*;
    use web_sys::{HtmlCanvasElement, KeyboardEvent, MouseEvent};

    use code_catcher::Settings;
    use code_catcher::assets::Assets;
    use code_catcher::audio::AudioManager;
    use code_catcher::consts::*;
    use code_catcher::renderer::{self, RenderState, SceneOptions};
    use code_catcher::sim::{GameState, Screen, SessionTuning, TickInput, tick};
    use code_catcher::ui::{self, KeyCommand};

    /// Game instance holding all state
    struct Game {
        state: GameState,
        render_state: Option<RenderState>,
        assets: Assets,
        audio: AudioManager,
        settings: Settings,
        scene: SceneOptions,
        accumulator: f32,
        last_time: f64,
        input: TickInput,
        /// Backing pixels per CSS pixel
        dpr: f64,
        /// QUIT was pressed; no more frames are scheduled
        stopped: bool,
    }

    impl Game {
        fn new(seed: u64, settings: Settings, assets: Assets) -> Self {
            Self {
                state: GameState::with_tuning(seed, SessionTuning::from_settings(&settings)),
                render_state: None,
                assets,
                audio: AudioManager::new(&settings),
                scene: SceneOptions::from_settings(&settings),
                settings,
                accumulator: 0.0,
                last_time: 0.0,
                input: TickInput::default(),
                dpr: 1.0,
                stopped: false,
            }
        }

        /// Run simulation ticks
        fn update(&mut self, dt: f32) {
            let dt = dt.min(0.1);
            self.accumulator += dt;

            let mut substeps = 0;
            while self.accumulator >= SIM_DT && substeps < MAX_SUBSTEPS {
                tick(&mut self.state, &self.input);
                self.accumulator -= SIM_DT;
                substeps += 1;

                self.input.clear_one_shots();

                for event in self.state.drain_events() {
                    self.audio.play_event(event);
                }

                if self.state.quit_requested {
                    self.stopped = true;
                    log::info!("Quit - stopping the game loop");
                    break;
                }
            }
        }

        /// Render the current frame
        fn render(&mut self) {
            let vertices = renderer::build(&self.state, &self.assets, self.scene);
            if let Some(ref mut render_state) = self.render_state {
                match render_state.render(&vertices) {
                    Ok(_) => {}
                    Err(wgpu::SurfaceError::Lost) => {
                        render_state.resize(render_state.size.0, render_state.size.1);
                    }
                    Err(wgpu::SurfaceError::OutOfMemory) => {
                        log::error!("Out of memory!");
                    }
                    Err(e) => log::warn!("Render error: {:?}", e),
                }
            }
        }

        /// Map a CSS-pixel offset on the canvas to logical coordinates
        fn set_pointer(&mut self, offset_x: i32, offset_y: i32) {
            let px = Vec2::new(
                (offset_x as f64 * self.dpr) as f32,
                (offset_y as f64 * self.dpr) as f32,
            );
            self.input.pointer.pos = self
                .render_state
                .as_ref()
                .and_then(|rs| rs.letterbox.to_logical(px));
        }

        fn toggle_mute(&mut self) {
            self.settings.muted = !self.settings.muted;
            self.audio.set_muted(self.settings.muted);
            self.settings.save();
            log::info!("Sound {}", if self.settings.muted { "muted" } else { "on" });
        }

        /// Pause a running game when the page loses focus
        fn auto_pause(&mut self, reason: &str) {
            self.input.left = false;
            self.input.right = false;
            if self.state.screen == Screen::Game && !self.state.paused {
                self.input.pause = true;
                log::info!("Auto-paused ({})", reason);
            }
        }
    }

    fn js_err(e: impl std::fmt::Display) -> JsValue {
        JsValue::from_str(&e.to_string())
    }

    fn size_canvas(window: &web_sys::Window, canvas: &HtmlCanvasElement) -> (u32, u32, f64) {
        let dpr = window.device_pixel_ratio();
        let width = ((canvas.client_width() as f64 * dpr) as u32).max(1);
        let height = ((canvas.client_height() as f64 * dpr) as u32).max(1);
        canvas.set_width(width);
        canvas.set_height(height);
        (width, height, dpr)
    }

    pub async fn run() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).map_err(js_err)?;

        log::info!("Code Catcher starting...");

        let window = web_sys::window().ok_or_else(|| js_err("no window"))?;
        let document = window.document().ok_or_else(|| js_err("no document"))?;

        // Hide loading indicator
        if let Some(loading) = document.get_element_by_id("loading") {
            let _ = loading.set_attribute("class", "hidden");
        }

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("canvas")
            .ok_or_else(|| js_err("no canvas"))?
            .dyn_into()
            .map_err(|_| js_err("#canvas is not a canvas"))?;
        let (width, height, dpr) = size_canvas(&window, &canvas);

        let settings = Settings::load();
        log::info!(
            "Quality {}, difficulty {}",
            settings.quality.as_str(),
            settings.difficulty.as_str()
        );
        let assets = Assets::fetch("assets").await;

        let seed = js_sys::Date::now() as u64;
        let game = Rc::new(RefCell::new(Game::new(seed, settings, assets)));
        game.borrow_mut().dpr = dpr;
        log::info!("Game initialized with seed: {}", seed);

        // Initialize WebGPU, falling back to WebGL2
        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::BROWSER_WEBGPU | wgpu::Backends::GL,
            ..Default::default()
        });

        let surface = instance
            .create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))
            .map_err(js_err)?;

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .map_err(js_err)?;

        log::info!("Using adapter: {:?}", adapter.get_info().name);

        let render_state = RenderState::new(surface, &adapter, width, height)
            .await
            .map_err(js_err)?;
        game.borrow_mut().render_state = Some(render_state);

        setup_input_handlers(&canvas, game.clone())?;
        setup_resize(&canvas, game.clone())?;
        setup_auto_pause(game.clone())?;

        request_animation_frame(game);

        log::info!("Code Catcher running!");
        Ok(())
    }

    fn setup_input_handlers(
        canvas: &HtmlCanvasElement,
        game: Rc<RefCell<Game>>,
    ) -> Result<(), JsValue> {
        let window = web_sys::window().ok_or_else(|| js_err("no window"))?;

        // Mouse move - absolute position in logical coordinates
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                game.borrow_mut()
                    .set_pointer(event.offset_x(), event.offset_y());
            });
            canvas.add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        // Mouse press, recorded as an edge so a click shorter than a tick still lands
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                if event.button() != 0 {
                    return;
                }
                let mut g = game.borrow_mut();
                g.audio.resume();
                g.set_pointer(event.offset_x(), event.offset_y());
                g.input.pointer.pressed = true;
            });
            canvas.add_event_listener_with_callback("mousedown", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                game.borrow_mut().input.pointer.pos = None;
            });
            canvas.add_event_listener_with_callback("mouseleave", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        // Keyboard
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                let Some(command) = ui::key_down(&event.key(), event.repeat()) else {
                    return;
                };
                let mut g = game.borrow_mut();
                match command {
                    KeyCommand::MoveLeft => {
                        event.prevent_default();
                        g.input.left = true;
                    }
                    KeyCommand::MoveRight => {
                        event.prevent_default();
                        g.input.right = true;
                    }
                    KeyCommand::Back => {
                        g.input.pause = true;
                        g.input.back = true;
                    }
                    KeyCommand::Confirm => g.input.confirm = true,
                    KeyCommand::ToggleAutopilot => {
                        g.input.autopilot = !g.input.autopilot;
                        log::info!("Autopilot: {}", g.input.autopilot);
                    }
                    KeyCommand::ToggleMute => g.toggle_mute(),
                }
            });
            window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                let mut g = game.borrow_mut();
                match KeyCommand::from_key(&event.key()) {
                    Some(KeyCommand::MoveLeft) => g.input.left = false,
                    Some(KeyCommand::MoveRight) => g.input.right = false,
                    _ => {}
                }
            });
            window.add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        Ok(())
    }

    fn setup_resize(canvas: &HtmlCanvasElement, game: Rc<RefCell<Game>>) -> Result<(), JsValue> {
        let window = web_sys::window().ok_or_else(|| js_err("no window"))?;
        let canvas = canvas.clone();
        let target = window.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
            let (width, height, dpr) = size_canvas(&window, &canvas);
            let mut g = game.borrow_mut();
            g.dpr = dpr;
            if let Some(rs) = g.render_state.as_mut() {
                rs.resize(width, height);
            }
        });
        target.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref())?;
        closure.forget();
        Ok(())
    }

    fn setup_auto_pause(game: Rc<RefCell<Game>>) -> Result<(), JsValue> {
        let window = web_sys::window().ok_or_else(|| js_err("no window"))?;
        let document = window.document().ok_or_else(|| js_err("no document"))?;

        // Visibility change (tab switch, minimize)
        {
            let game = game.clone();
            let document_clone = document.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
                if document_clone.visibility_state() == web_sys::VisibilityState::Hidden {
                    game.borrow_mut().auto_pause("tab hidden");
                }
            });
            document.add_event_listener_with_callback("visibilitychange", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        // Window blur (click outside)
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::FocusEvent| {
            game.borrow_mut().auto_pause("window blur");
        });
        window.add_event_listener_with_callback("blur", closure.as_ref().unchecked_ref())?;
        closure.forget();
        Ok(())
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let closure = Closure::once(move |time: f64| {
            game_loop(game, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(game: Rc<RefCell<Game>>, time: f64) {
        let stopped = {
            let mut g = game.borrow_mut();

            // Calculate delta time
            let dt = if g.last_time > 0.0 {
                ((time - g.last_time) / 1000.0) as f32
            } else {
                SIM_DT
            };
            g.last_time = time;

            g.update(dt);
            g.render();
            g.stopped
        };

        if !stopped {
            request_animation_frame(game);
        }
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub async fn wasm_main() {
    if let Err(e) = wasm_game::run().await {
        log::error!("Startup failed: {:?}", e);
        web_sys::console::error_1(&e);
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use code_catcher::Settings;
    use code_catcher::assets::Assets;
    use code_catcher::consts::TICK_RATE;
    use code_catcher::renderer::{self, SceneOptions};
    use code_catcher::sim::{GameEvent, GameState, Screen, SessionTuning, TickInput, tick};
    use code_catcher::ui::Pointer;

    /// Ten minutes of play at 60 Hz
    const MAX_TICKS: u64 = 10 * 60 * TICK_RATE as u64;

    env_logger::init();
    log::info!("Code Catcher (native) starting...");
    log::info!("Native mode runs a headless autopilot session - run with `trunk serve` to play");

    let seed = std::env::args()
        .nth(1)
        .and_then(|s| s.parse::<u64>().ok())
        .unwrap_or(0xC0DE);
    let settings = Settings::load();
    let assets = Assets::load_dir(std::path::Path::new("assets"));
    log::info!(
        "Sprites: catcher {}, logo {}",
        if assets.catcher.is_some() { "loaded" } else { "procedural" },
        if assets.logo.is_some() { "loaded" } else { "text" },
    );

    let mut state = GameState::with_tuning(seed, SessionTuning::from_settings(&settings));

    // Press START GAME like a player would
    let start = TickInput {
        pointer: Pointer {
            pos: Some(state.menu_buttons[0].rect.center()),
            pressed: true,
        },
        ..Default::default()
    };
    tick(&mut state, &start);

    let input = TickInput {
        autopilot: true,
        ..Default::default()
    };
    while state.screen == Screen::Game && state.time_ticks < MAX_TICKS {
        tick(&mut state, &input);
        for event in state.drain_events() {
            match event {
                GameEvent::LevelUp { level } => log::info!("Reached level {}", level),
                other => log::debug!("{:?}", other),
            }
        }
    }

    let frame = renderer::build(&state, &assets, SceneOptions::from_settings(&settings));
    log::debug!("Final frame: {} vertices", frame.len());

    println!(
        "seed {}: score {}, level {}, missed {}, bugs {} after {:.1}s{}",
        seed,
        state.score,
        state.level,
        state.missed_correct,
        state.caught_bugs,
        state.time_ticks as f64 / TICK_RATE as f64,
        if state.screen == Screen::GameOver {
            " (game over)"
        } else {
            ""
        },
    );
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
