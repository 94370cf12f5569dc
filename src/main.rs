//! Flap Gap entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;

    use wasm_bindgen::prelude::*;
    use wasm_bindgen_futures::spawn_local;
    use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

    use flap_gap::ScoreBoard;
    use flap_gap::platform::Assets;
    use flap_gap::renderer::CanvasRenderer;
    use flap_gap::sim::{GameState, Mode, SimClock, tick};

    /// Game instance holding all state
    struct Game {
        state: GameState,
        clock: SimClock,
        renderer: CanvasRenderer,
        scores: ScoreBoard,
        canvas: HtmlCanvasElement,
        last_time: f64,
        was_playing: bool,
    }

    impl Game {
        fn new(canvas: HtmlCanvasElement, ctx: CanvasRenderingContext2d) -> Self {
            Self {
                state: GameState::new(),
                clock: SimClock::new(),
                renderer: CanvasRenderer::new(ctx),
                scores: ScoreBoard::load(),
                canvas,
                last_time: 0.0,
                was_playing: false,
            }
        }

        /// Primary action input (click/tap/space)
        fn primary_action(&mut self) {
            let entropy = js_sys::Date::now() as u64;
            self.state.primary_action(entropy);
        }

        /// Run due simulation ticks, then persist scores if a run just ended
        fn update(&mut self, dt: f32) {
            let ticks = self.clock.advance(dt);
            for _ in 0..ticks {
                tick(&mut self.state);
            }

            let playing = matches!(self.state.mode, Mode::Playing(_));
            if self.was_playing && !playing {
                if let Mode::Menu {
                    best_score,
                    last_score,
                } = self.state.mode
                {
                    self.scores.best = best_score;
                    self.scores.last = last_score;
                    self.scores.save();
                }
            }
            self.was_playing = playing;
        }

        /// Match the backing store to the displayed size and draw one frame
        fn render(&mut self) {
            let width = self.canvas.client_width().max(1) as u32;
            let height = self.canvas.client_height().max(1) as u32;
            if self.canvas.width() != width {
                self.canvas.set_width(width);
            }
            if self.canvas.height() != height {
                self.canvas.set_height(height);
            }
            self.state.set_viewport_height(height as f32);

            if let Err(e) = self
                .renderer
                .render(&self.state, width as f64, height as f64)
            {
                log::warn!("render error: {e:?}");
            }
        }
    }

    pub async fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("failed to init logger");

        log::info!("Flap Gap starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("canvas")
            .expect("no canvas")
            .dyn_into()
            .expect("not a canvas");

        let ctx: CanvasRenderingContext2d = canvas
            .get_context("2d")
            .expect("failed to get 2d context")
            .expect("no 2d context")
            .dyn_into()
            .expect("not a 2d context");

        let game = Rc::new(RefCell::new(Game::new(canvas.clone(), ctx)));

        // Resolve assets in the background; the loop renders `Loading`
        // (or `LoadFailed`) until this settles
        {
            let game = game.clone();
            spawn_local(async move {
                match Assets::load().await {
                    Ok(assets) => {
                        let mut g = game.borrow_mut();
                        g.renderer.set_assets(assets);
                        let scores = g.scores;
                        g.state.assets_ready(&scores);
                    }
                    Err(e) => {
                        log::error!("{e}");
                        game.borrow_mut().state.load_failed();
                    }
                }
            });
        }

        setup_input_handlers(&canvas, game.clone());

        // Start game loop
        request_animation_frame(game);

        log::info!("Flap Gap running!");
    }

    fn setup_input_handlers(canvas: &HtmlCanvasElement, game: Rc<RefCell<Game>>) {
        // Mouse click
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::MouseEvent| {
                game.borrow_mut().primary_action();
            });
            let _ = canvas
                .add_event_listener_with_callback("mousedown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Touch
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: web_sys::TouchEvent| {
                event.prevent_default();
                game.borrow_mut().primary_action();
            });
            let _ = canvas
                .add_event_listener_with_callback("touchstart", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Keyboard
        {
            let window = web_sys::window().expect("no window");
            let closure = Closure::<dyn FnMut(_)>::new(move |event: web_sys::KeyboardEvent| {
                match event.key().as_str() {
                    " " | "Enter" => game.borrow_mut().primary_action(),
                    _ => {}
                }
            });
            let _ = window
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().expect("no window");
        let closure = Closure::once(move |time: f64| {
            game_loop(game, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(game: Rc<RefCell<Game>>, time: f64) {
        {
            let mut g = game.borrow_mut();

            let dt = if g.last_time > 0.0 {
                ((time - g.last_time) / 1000.0) as f32
            } else {
                0.0
            };
            g.last_time = time;

            g.update(dt);
            g.render();
        }

        request_animation_frame(game);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub async fn wasm_main() {
    wasm_game::run().await;
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use flap_gap::ScoreBoard;
    use flap_gap::consts::TICK_DT;
    use flap_gap::sim::{GameState, Mode, SimClock, tick};

    env_logger::init();
    log::info!("Flap Gap (native) starting...");
    log::info!("Native mode is a headless demo - run with `trunk serve` for the web version");

    // Drive one unboosted run to completion as a smoke test
    let mut state = GameState::new();
    state.set_viewport_height(600.0);
    state.assets_ready(&ScoreBoard::load());
    state.primary_action(0xF1AB_6A9);

    let mut clock = SimClock::new();
    let mut frames = 0u32;
    while matches!(state.mode, Mode::Playing(_)) && frames < 100_000 {
        for _ in 0..clock.advance(TICK_DT) {
            tick(&mut state);
        }
        frames += 1;
    }

    match state.mode {
        Mode::Menu {
            best_score,
            last_score,
        } => {
            log::info!("demo run ended: last={last_score:?} best={best_score:?}");
        }
        other => log::warn!("demo run did not finish: {other:?}"),
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
