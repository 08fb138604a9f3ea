//! Flag Dash entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{Document, HtmlCanvasElement, KeyboardEvent};

    use flag_dash::consts::{CANVAS_HEIGHT, CANVAS_WIDTH};
    use flag_dash::renderer::{RenderState, build_scene};
    use flag_dash::sim::{GamePhase, InputState, Key, LevelCatalog};
    use flag_dash::{Command, Session, Settings, Tuning};

    /// Game instance holding all state
    struct Game {
        session: Session,
        input: InputState,
        settings: Settings,
        render_state: Option<RenderState>,
        /// Pending animation frame, if the loop is scheduled
        raf_id: Option<i32>,
        // FPS tracking
        frame_times: [f64; 60],
        frame_index: usize,
        fps: u32,
    }

    impl Game {
        fn new(session: Session, settings: Settings) -> Self {
            Self {
                session,
                input: InputState::new(),
                settings,
                render_state: None,
                raf_id: None,
                frame_times: [0.0; 60],
                frame_index: 0,
                fps: 0,
            }
        }

        /// One display frame = one simulation tick
        fn step(&mut self, time: f64) {
            let input = self.input.take_tick_input();
            self.session.frame(&input);

            self.frame_times[self.frame_index] = time;
            self.frame_index = (self.frame_index + 1) % 60;
            let oldest_time = self.frame_times[self.frame_index];
            if oldest_time > 0.0 {
                let elapsed = time - oldest_time;
                if elapsed > 0.0 {
                    self.fps = (59_000.0 / elapsed).round() as u32;
                }
            }
        }

        /// Render the current frame
        fn render(&mut self) {
            let vertices = build_scene(self.session.world(), &self.settings.scene_options());
            if let Some(ref mut render_state) = self.render_state {
                match render_state.render(&vertices) {
                    Ok(_) => {}
                    Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                        render_state.resize(render_state.size.0, render_state.size.1);
                    }
                    Err(wgpu::SurfaceError::OutOfMemory) => {
                        log::error!("Out of memory!");
                    }
                    Err(e) => log::warn!("Render error: {:?}", e),
                }
            }
        }

        /// Update HUD and overlays in DOM
        fn update_hud(&self) {
            let Some(document) = web_sys::window().and_then(|w| w.document()) else {
                return;
            };
            let hud = self.session.hud();

            set_text(&document, "#hud-score .hud-value", &hud.score.to_string());
            set_text(&document, "#hud-level .hud-value", &hud.level.to_string());
            set_text(&document, "#hud-lives .hud-value", &hud.lives.to_string());
            set_text(&document, "#hud-fps .hud-value", &self.fps.to_string());
            set_visible(&document, "hud-fps", self.settings.show_fps);

            set_visible(&document, "start-overlay", hud.phase == GamePhase::Start);
            set_visible(&document, "game-over", hud.phase == GamePhase::GameOver);
            set_visible(&document, "won", hud.phase == GamePhase::Won);

            match hud.phase {
                GamePhase::Start => set_text(&document, "#start-level", &hud.level.to_string()),
                GamePhase::GameOver => {
                    set_text(&document, "#final-score", &hud.score.to_string())
                }
                GamePhase::Won => set_text(&document, "#won-score", &hud.score.to_string()),
                GamePhase::Playing => {}
            }
        }
    }

    fn set_text(document: &Document, selector: &str, text: &str) {
        if let Some(el) = document.query_selector(selector).ok().flatten() {
            el.set_text_content(Some(text));
        }
    }

    /// Toggle only the `hidden` token so layout classes like `overlay` stay
    fn set_visible(document: &Document, id: &str, visible: bool) {
        if let Some(el) = document.get_element_by_id(id) {
            let _ = el.class_list().toggle_with_force("hidden", !visible);
        }
    }

    fn show_error(message: &str) {
        log::error!("{message}");
        let el = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id("error"));
        if let Some(el) = el {
            el.set_text_content(Some(message));
            let _ = el.class_list().remove_1("hidden");
        }
    }

    pub async fn run() {
        console_error_panic_hook::set_once();
        if let Err(e) = console_log::init_with_level(log::Level::Info) {
            web_sys::console::error_1(&format!("Logger init failed: {e}").into());
        }

        log::info!("Flag Dash starting...");

        if let Err(message) = start().await {
            show_error(&message);
        }
    }

    async fn start() -> Result<(), String> {
        let window = web_sys::window().ok_or("no window")?;
        let document = window.document().ok_or("no document")?;

        let tuning = Tuning::load().map_err(|e| format!("Bad tuning: {e}"))?;
        let catalog = LevelCatalog::builtin().map_err(|e| format!("Bad level data: {e}"))?;
        let session =
            Session::new(catalog, tuning).map_err(|e| format!("Bad configuration: {e}"))?;
        let settings = Settings::load();

        set_visible(&document, "loading", false);

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("canvas")
            .ok_or("no canvas")?
            .dyn_into()
            .map_err(|_| "#canvas is not a canvas")?;

        // Logical canvas is fixed; the backing store follows device pixel ratio
        let dpr = window.device_pixel_ratio();
        let width = (CANVAS_WIDTH as f64 * dpr) as u32;
        let height = (CANVAS_HEIGHT as f64 * dpr) as u32;
        canvas.set_width(width);
        canvas.set_height(height);

        let game = Rc::new(RefCell::new(Game::new(session, settings)));

        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::BROWSER_WEBGPU | wgpu::Backends::GL,
            ..Default::default()
        });

        let surface = instance
            .create_surface(wgpu::SurfaceTarget::Canvas(canvas))
            .map_err(|e| format!("Failed to create surface: {e}"))?;

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .map_err(|e| format!("Failed to get adapter: {e}"))?;

        log::info!("Using adapter: {:?}", adapter.get_info().name);

        let render_state = RenderState::new(surface, &adapter, width, height)
            .await
            .map_err(|e| format!("Failed to create device: {e}"))?;

        {
            let mut g = game.borrow_mut();
            g.render_state = Some(render_state);
            g.render();
            g.update_hud();
        }

        setup_input_handlers(&document, game.clone());
        setup_buttons(&document, game.clone());
        setup_teardown(game);

        set_visible(&document, "hud", true);

        log::info!("Flag Dash ready");
        Ok(())
    }

    fn setup_input_handlers(document: &Document, game: Rc<RefCell<Game>>) {
        // Key down
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                let mut g = game.borrow_mut();
                if let Some(key) = Key::from_dom_key(&event.key(), g.settings.wasd_keys) {
                    event.prevent_default();
                    let airborne = g.session.world().player.is_airborne();
                    g.input.press(key, airborne);
                } else if event.key() == "f" && !event.repeat() {
                    g.settings.show_fps = !g.settings.show_fps;
                    g.settings.save();
                    g.update_hud();
                }
            });
            let _ = document
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Key up
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                let mut g = game.borrow_mut();
                if let Some(key) = Key::from_dom_key(&event.key(), g.settings.wasd_keys) {
                    event.prevent_default();
                    g.input.release(key);
                }
            });
            let _ = document
                .add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn setup_buttons(document: &Document, game: Rc<RefCell<Game>>) {
        if let Some(btn) = document.get_element_by_id("start-btn") {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::MouseEvent| {
                let accepted = {
                    let mut g = game.borrow_mut();
                    let accepted = g.session.handle(Command::Start);
                    if accepted {
                        g.input.reset();
                        g.update_hud();
                    }
                    accepted
                };
                if accepted {
                    request_animation_frame(game.clone());
                }
            });
            let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        for id in ["restart-btn", "play-again-btn"] {
            if let Some(btn) = document.get_element_by_id(id) {
                let game = game.clone();
                let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::MouseEvent| {
                    let mut g = game.borrow_mut();
                    if g.session.handle(Command::Restart) {
                        g.input.reset();
                        g.render();
                        g.update_hud();
                    }
                });
                let _ =
                    btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
                closure.forget();
            }
        }
    }

    /// Drop any pending frame when the page goes away
    fn setup_teardown(game: Rc<RefCell<Game>>) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
            let Some(window) = web_sys::window() else {
                return;
            };
            if let Some(id) = game.borrow_mut().raf_id.take() {
                let _ = window.cancel_animation_frame(id);
                log::info!("Cancelled pending frame on pagehide");
            }
        });
        let _ = window.add_event_listener_with_callback("pagehide", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let Some(window) = web_sys::window() else {
            return;
        };
        if game.borrow().raf_id.is_some() {
            return;
        }
        let loop_game = game.clone();
        let closure = Closure::once(move |time: f64| {
            game_loop(loop_game, time);
        });
        match window.request_animation_frame(closure.as_ref().unchecked_ref()) {
            Ok(id) => game.borrow_mut().raf_id = Some(id),
            Err(e) => log::error!("requestAnimationFrame failed: {:?}", e),
        }
        closure.forget();
    }

    fn game_loop(game: Rc<RefCell<Game>>, time: f64) {
        let keep_running = {
            let mut g = game.borrow_mut();
            g.raf_id = None;
            g.step(time);
            g.render();
            g.update_hud();
            g.session.wants_frames()
        };

        // Phase left Playing: the frame above was the last one drawn
        if keep_running {
            request_animation_frame(game);
        }
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub async fn wasm_main() {
    wasm_game::run().await;
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Flag Dash (native) starting...");
    log::info!("Native mode is headless - run with `trunk serve` for the web version");

    if let Err(e) = attract_run() {
        log::error!("{e}");
        std::process::exit(1);
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

/// Headless demo: hold right, hop every so often, report what happened
#[cfg(not(target_arch = "wasm32"))]
fn attract_run() -> Result<(), flag_dash::ConfigError> {
    use flag_dash::sim::{GamePhase, InputState, Key};
    use flag_dash::{Command, Session};

    const MAX_TICKS: u32 = 60 * 60;
    const HOP_EVERY: u32 = 40;

    let mut session = Session::builtin()?;
    let mut input = InputState::new();
    session.handle(Command::Start);
    input.press(Key::ArrowRight, false);

    for t in 0..MAX_TICKS {
        if t % HOP_EVERY == 0 {
            input.press(Key::Space, session.world().player.is_airborne());
        } else {
            input.release(Key::Space);
        }

        for event in session.frame(&input.take_tick_input()) {
            log::info!("tick {t}: {event:?}");
        }

        match session.phase() {
            GamePhase::Playing => {}
            GamePhase::Start => {
                log::info!("Level {} reached", session.level());
                session.handle(Command::Start);
                input.reset();
                input.press(Key::ArrowRight, false);
            }
            GamePhase::GameOver | GamePhase::Won => break,
        }
    }

    let hud = session.hud();
    println!(
        "Finished: phase={:?} level={} score={} lives={}",
        hud.phase, hud.level, hud.score, hud.lives
    );
    Ok(())
}
