//! Cannon Burst entry point
//!
//! Browser build: binds the canvas, pointer and buttons, then runs one tick
//! and one draw per animation frame. Native build: headless autopilot run.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;

    use glam::Vec2;
    use wasm_bindgen::prelude::*;
    use web_sys::{CanvasRenderingContext2d, Document, HtmlCanvasElement, HtmlElement, MouseEvent, TouchEvent};

    use cannon_burst::Settings;
    use cannon_burst::renderer::{CanvasSurface, draw_frame};
    use cannon_burst::sim::{GamePhase, GameState, PlayArea, TickInput, tick};

    /// Game instance holding all state
    struct Game {
        state: GameState,
        surface: CanvasSurface,
        canvas: HtmlCanvasElement,
        settings: Settings,
        input: TickInput,
        // FPS tracking
        frame_times: [f64; 60],
        frame_index: usize,
        fps: u32,
        // Track phase for screen switching
        last_phase: GamePhase,
    }

    impl Game {
        fn new(seed: u64, canvas: HtmlCanvasElement, ctx: CanvasRenderingContext2d, settings: Settings) -> Self {
            Self {
                state: GameState::new(seed),
                surface: CanvasSurface::new(ctx),
                canvas,
                settings,
                input: TickInput::default(),
                frame_times: [0.0; 60],
                frame_index: 0,
                fps: 0,
                last_phase: GamePhase::Start,
            }
        }

        /// Current play area, read fresh every frame
        fn play_area(&self) -> PlayArea {
            PlayArea::new(self.canvas.width() as f32, self.canvas.height() as f32)
        }

        /// Run one simulation tick
        fn update(&mut self, time: f64) {
            let area = self.play_area();
            let input = self.input.clone();
            tick(&mut self.state, &input, area);

            // Clear one-shot inputs after processing
            self.input.charge_begin = false;
            self.input.charge_end = false;
            self.input.start = false;
            self.input.restart = false;
            self.input.end = false;

            // Track frame times for FPS
            self.frame_times[self.frame_index] = time;
            self.frame_index = (self.frame_index + 1) % 60;
            let oldest_time = self.frame_times[self.frame_index];
            if oldest_time > 0.0 {
                let elapsed = time - oldest_time;
                if elapsed > 0.0 {
                    self.fps = (60000.0 / elapsed).round() as u32;
                }
            }
        }

        /// Render the current frame
        fn render(&mut self) {
            let area = self.play_area();
            draw_frame(&self.state, self.input.pointer, area, &self.settings, &mut self.surface);
        }

        /// Update HUD elements in DOM
        fn update_hud(&mut self) {
            let Some(document) = web_sys::window().and_then(|w| w.document()) else {
                return;
            };

            if let Some(el) = document.get_element_by_id("score") {
                el.set_text_content(Some(&self.state.score.to_string()));
            }
            if let Some(el) = document.get_element_by_id("final-score") {
                el.set_text_content(Some(&self.state.score.to_string()));
            }

            if self.settings.show_power_bar {
                let fraction = self.state.charge.power_fraction(self.state.tuning.max_power);
                if let Some(fill) = html_element(&document, "power-bar-fill") {
                    let _ = fill
                        .style()
                        .set_property("width", &format!("{}%", fraction * 100.0));
                }
            }

            if self.settings.show_fps {
                if let Some(el) = document.get_element_by_id("fps") {
                    el.set_text_content(Some(&self.fps.to_string()));
                }
            }

            // Screen switching on phase transitions
            let phase = self.state.phase;
            if phase != self.last_phase {
                set_visible(&document, "start-screen", phase == GamePhase::Start);
                set_visible(&document, "hud", phase == GamePhase::Playing);
                set_visible(&document, "game-over-screen", phase == GamePhase::GameOver);
                log::info!("Phase {:?} -> {:?}", self.last_phase, phase);
                self.last_phase = phase;
            }
        }
    }

    fn html_element(document: &Document, id: &str) -> Option<HtmlElement> {
        document.get_element_by_id(id)?.dyn_into::<HtmlElement>().ok()
    }

    fn set_visible(document: &Document, id: &str, visible: bool) {
        if let Some(el) = document.get_element_by_id(id) {
            let classes = el.class_list();
            if visible {
                let _ = classes.remove_1("hidden");
                let _ = classes.add_1("active");
            } else {
                let _ = classes.remove_1("active");
                let _ = classes.add_1("hidden");
            }
        }
    }

    /// Match the canvas backing store to the window
    fn resize_canvas(canvas: &HtmlCanvasElement) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let width = window.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(800.0);
        let height = window.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(600.0);
        canvas.set_width(width as u32);
        canvas.set_height(height as u32);
    }

    /// Pointer position in canvas coordinates
    fn canvas_point(canvas: &HtmlCanvasElement, client_x: i32, client_y: i32) -> Vec2 {
        let rect = canvas.get_bounding_client_rect();
        Vec2::new(
            client_x as f32 - rect.left() as f32,
            client_y as f32 - rect.top() as f32,
        )
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        if let Err(e) = console_log::init_with_level(log::Level::Info) {
            web_sys::console::error_1(&format!("Logger init failed: {e}").into());
        }

        log::info!("Cannon Burst starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("gameCanvas")
            .expect("no canvas")
            .dyn_into()
            .expect("not a canvas");
        resize_canvas(&canvas);

        let ctx: CanvasRenderingContext2d = canvas
            .get_context("2d")
            .ok()
            .flatten()
            .expect("no 2d context")
            .dyn_into()
            .expect("not a 2d context");

        let settings = window
            .location()
            .search()
            .map(|query| Settings::from_query(&query))
            .unwrap_or_default();
        log::info!("Quality: {}", settings.quality.as_str());

        // Initialize game
        let seed = js_sys::Date::now() as u64;
        let game = Rc::new(RefCell::new(Game::new(seed, canvas.clone(), ctx, settings)));
        log::info!("Game initialized with seed: {}", seed);

        setup_input_handlers(&canvas, game.clone());
        setup_buttons(game.clone());
        setup_resize(canvas);

        // Start game loop
        request_animation_frame(game);

        log::info!("Cannon Burst running!");
    }

    fn setup_input_handlers(canvas: &HtmlCanvasElement, game: Rc<RefCell<Game>>) {
        let window = web_sys::window().expect("no window");

        // Pointer position
        {
            let game = game.clone();
            let canvas_clone = canvas.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                game.borrow_mut().input.pointer =
                    canvas_point(&canvas_clone, event.client_x(), event.client_y());
            });
            let _ = window
                .add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Charge begin
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                game.borrow_mut().input.charge_begin = true;
            });
            let _ = window
                .add_event_listener_with_callback("mousedown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Charge end (fire)
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                game.borrow_mut().input.charge_end = true;
            });
            let _ = window
                .add_event_listener_with_callback("mouseup", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Touch start: aim and begin charging
        {
            let game = game.clone();
            let canvas_clone = canvas.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
                event.prevent_default();
                let mut g = game.borrow_mut();
                if let Some(touch) = event.touches().get(0) {
                    g.input.pointer = canvas_point(&canvas_clone, touch.client_x(), touch.client_y());
                }
                g.input.charge_begin = true;
            });
            let _ = canvas
                .add_event_listener_with_callback("touchstart", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Touch move
        {
            let game = game.clone();
            let canvas_clone = canvas.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
                event.prevent_default();
                if let Some(touch) = event.touches().get(0) {
                    game.borrow_mut().input.pointer =
                        canvas_point(&canvas_clone, touch.client_x(), touch.client_y());
                }
            });
            let _ = canvas
                .add_event_listener_with_callback("touchmove", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Touch end: fire
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
                event.prevent_default();
                game.borrow_mut().input.charge_end = true;
            });
            let _ = canvas
                .add_event_listener_with_callback("touchend", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn setup_buttons(game: Rc<RefCell<Game>>) {
        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };

        if let Some(btn) = document.get_element_by_id("start-btn") {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                // The press also reaches the window listeners; tick ignores
                // charge input on the tick a session begins
                event.stop_propagation();
                game.borrow_mut().input.start = true;
            });
            let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        if let Some(btn) = document.get_element_by_id("restart-btn") {
            let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                event.stop_propagation();
                game.borrow_mut().input.restart = true;
            });
            let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn setup_resize(canvas: HtmlCanvasElement) {
        let window = web_sys::window().expect("no window");
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::UiEvent| {
            resize_canvas(&canvas);
        });
        let _ = window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
        closure.forget();
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
        {
            let mut g = game.borrow_mut();
            g.update(time);
            g.render();
            g.update_hud();
        }

        request_animation_frame(game);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_game::run();
}

#[cfg(not(target_arch = "wasm32"))]
mod native {
    use std::path::PathBuf;

    use anyhow::Context;
    use clap::Parser;

    use cannon_burst::Tuning;
    use cannon_burst::headless::run_session;
    use cannon_burst::sim::PlayArea;

    /// Run an autopiloted Cannon Burst session without a window
    #[derive(Debug, Parser)]
    #[command(name = "cannon-burst", version)]
    pub struct Args {
        /// Tuning overrides (JSON)
        pub tuning: Option<PathBuf>,
        /// Number of frames to simulate
        #[arg(long, default_value_t = 3600)]
        pub ticks: u64,
        /// RNG seed
        #[arg(long, default_value_t = 1)]
        pub seed: u64,
        /// Play-area width in pixels
        #[arg(long, default_value_t = 800.0)]
        pub width: f32,
        /// Play-area height in pixels
        #[arg(long, default_value_t = 600.0)]
        pub height: f32,
    }

    fn load_tuning(path: Option<&PathBuf>) -> anyhow::Result<Tuning> {
        let Some(path) = path else {
            return Ok(Tuning::default());
        };
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("reading tuning file {}", path.display()))?;
        let tuning = Tuning::from_json(&json)
            .with_context(|| format!("parsing tuning file {}", path.display()))?;
        log::info!("Loaded tuning from {}", path.display());
        Ok(tuning)
    }

    pub fn run() -> anyhow::Result<()> {
        env_logger::init();
        let args = Args::parse();
        log::info!("Cannon Burst (native) starting...");
        log::info!("Native mode is headless - build for wasm32 to play in a browser");

        let tuning = load_tuning(args.tuning.as_ref())?;
        let area = PlayArea::new(args.width, args.height);
        let summary = run_session(args.seed, tuning, area, args.ticks);

        println!("{}", serde_json::to_string_pretty(&summary)?);
        Ok(())
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> anyhow::Result<()> {
    native::run()
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
