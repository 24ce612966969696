//! Bramble Dash entry point
//!
//! Handles platform-specific initialization and runs the game loop: a
//! requestAnimationFrame loop in the browser, a headless demo run on native.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{CustomEvent, CustomEventInit, Document};

    use bramble_dash::consts::*;
    use bramble_dash::sim::{GameState, RunEvent, RunPhase, TickInput, tick};

    /// Game instance holding all host-side state
    struct Game {
        state: GameState,
        accumulator: f32,
        last_time: f64,
        input: TickInput,
        /// Cleared by the teardown event; a frame that finds this false
        /// neither ticks nor reschedules.
        active: bool,
    }

    impl Game {
        fn new(seed: u64) -> Self {
            Self {
                state: GameState::new(seed),
                accumulator: 0.0,
                last_time: 0.0,
                input: TickInput::default(),
                active: true,
            }
        }

        /// Run fixed simulation steps for one animation frame
        fn update(&mut self, dt: f32) -> Vec<RunEvent> {
            let dt = dt.min(0.1);
            self.accumulator += dt;

            let mut events = Vec::new();
            let mut substeps = 0;
            while self.accumulator >= SIM_DT && substeps < MAX_SUBSTEPS {
                let input = self.input;
                events.extend(tick(&mut self.state, &input));
                self.accumulator -= SIM_DT;
                substeps += 1;

                // Clear one-shot inputs after processing
                self.input.jump = false;
            }
            events
        }

        /// Replace the run with a freshly seeded one
        fn restart(&mut self, seed: u64) {
            self.state = GameState::new(seed);
            self.accumulator = 0.0;
            self.input = TickInput::default();
        }
    }

    /// Buffer a jump, or start over if the last run already ended
    fn jump_or_restart(g: &mut Game) {
        if g.state.phase == RunPhase::GameOver {
            let seed = js_sys::Date::now() as u64;
            g.restart(seed);
            log::info!("Run restarted with seed: {}", seed);
        } else {
            g.input.jump = true;
        }
    }

    /// DOM event name for a simulation event
    fn event_name(event: &RunEvent) -> &'static str {
        match event {
            RunEvent::Jumped => "runner:jump",
            RunEvent::CoinCollected { .. } => "runner:coin",
            RunEvent::Hit { .. } => "runner:hit",
            RunEvent::GameOver => "runner:gameover",
        }
    }

    /// Dispatch a CustomEvent on the document; detail is a JSON string.
    fn dispatch(document: &Document, name: &str, detail: Option<&str>) {
        let init = CustomEventInit::new();
        if let Some(json) = detail {
            init.set_detail(&JsValue::from_str(json));
        }
        if let Ok(ev) = CustomEvent::new_with_event_init_dict(name, &init) {
            let _ = document.dispatch_event(&ev);
        }
    }

    /// Forward this frame's simulation events to the page for sound and
    /// visual feedback.
    fn dispatch_run_events(document: &Document, events: &[RunEvent]) {
        for event in events {
            let detail = serde_json::to_string(event).ok();
            dispatch(document, event_name(event), detail.as_deref());
        }
    }

    /// Update HUD elements in DOM
    fn update_hud(document: &Document, state: &GameState) {
        // Update distance
        if let Some(el) = document.query_selector("#hud-score .hud-value").ok().flatten() {
            el.set_text_content(Some(&state.score_meters().to_string()));
        }

        // Update coins
        if let Some(el) = document.query_selector("#hud-coins .hud-value").ok().flatten() {
            el.set_text_content(Some(&state.coin_count.to_string()));
        }

        // Show/hide game over
        if let Some(el) = document.get_element_by_id("game-over") {
            if state.phase == RunPhase::GameOver {
                let _ = el.set_attribute("class", "");
                // Update final stats
                if let Some(score_el) = document.get_element_by_id("final-score") {
                    score_el.set_text_content(Some(&state.score_meters().to_string()));
                }
                if let Some(coins_el) = document.get_element_by_id("final-coins") {
                    coins_el.set_text_content(Some(&state.coin_count.to_string()));
                }
            } else {
                let _ = el.set_attribute("class", "hidden");
            }
        }
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Bramble Dash starting...");

        let document = web_sys::window()
            .expect("no window")
            .document()
            .expect("no document");

        // Hide loading indicator
        if let Some(loading) = document.get_element_by_id("loading") {
            let _ = loading.set_attribute("class", "hidden");
        }

        // Initialize game
        let seed = js_sys::Date::now() as u64;
        let game = Rc::new(RefCell::new(Game::new(seed)));

        log::info!("Run initialized with seed: {}", seed);

        // Set up input handlers
        setup_input_handlers(game.clone());

        // Set up restart button
        setup_restart_button(game.clone());

        // Let the page stop the loop when it swaps the game out
        setup_teardown_listener(game.clone());

        // Show HUD
        if let Some(hud) = document.get_element_by_id("hud") {
            let _ = hud.set_attribute("class", "");
        }

        // Start game loop
        request_animation_frame(game);

        log::info!("Bramble Dash running!");
    }

    fn setup_input_handlers(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().unwrap();
        let document = window.document().unwrap();

        // Keyboard: Space or ArrowUp jumps, Enter restarts a finished run
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: web_sys::KeyboardEvent| {
                let mut g = game.borrow_mut();
                match event.key().as_str() {
                    " " | "ArrowUp" => {
                        event.prevent_default();
                        jump_or_restart(&mut g);
                    }
                    "Enter" => {
                        if g.state.phase == RunPhase::GameOver {
                            let seed = js_sys::Date::now() as u64;
                            g.restart(seed);
                            log::info!("Run restarted with seed: {}", seed);
                        }
                    }
                    _ => {}
                }
            });
            let _ = window
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Mouse click anywhere on the page
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::MouseEvent| {
                jump_or_restart(&mut game.borrow_mut());
            });
            let _ = document
                .add_event_listener_with_callback("mousedown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Touch start (tap to jump)
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |event: web_sys::TouchEvent| {
                event.prevent_default();
                jump_or_restart(&mut game.borrow_mut());
            });
            let _ = document
                .add_event_listener_with_callback("touchstart", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn setup_restart_button(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().unwrap();
        let document = window.document().unwrap();

        if let Some(btn) = document.get_element_by_id("restart-btn") {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::MouseEvent| {
                let seed = js_sys::Date::now() as u64;
                game.borrow_mut().restart(seed);
                log::info!("Run restarted with seed: {}", seed);
            });
            let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn setup_teardown_listener(game: Rc<RefCell<Game>>) {
        let document = web_sys::window().unwrap().document().unwrap();

        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
            game.borrow_mut().active = false;
            log::info!("Game loop stopped");
        });
        let _ = document
            .add_event_listener_with_callback("runner:teardown", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().unwrap();
        let closure = Closure::once(move |time: f64| {
            game_loop(game, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(game: Rc<RefCell<Game>>, time: f64) {
        let document = web_sys::window().unwrap().document().unwrap();

        let events;
        let frame_json;
        {
            let mut g = game.borrow_mut();
            if !g.active {
                return;
            }

            // Calculate delta time
            let dt = if g.last_time > 0.0 {
                ((time - g.last_time) / 1000.0) as f32
            } else {
                SIM_DT
            };
            g.last_time = time;

            events = g.update(dt);
            frame_json = serde_json::to_string(&g.state).ok();
            update_hud(&document, &g.state);

            if events.contains(&RunEvent::GameOver) {
                log::info!(
                    "Run over: {} m, {} coins",
                    g.state.score_meters(),
                    g.state.coin_count
                );
            }
        }

        // Dispatch after releasing the borrow: CustomEvent listeners run
        // synchronously and may call straight back into the game.
        dispatch_run_events(&document, &events);
        dispatch(&document, "runner:frame", frame_json.as_deref());

        request_animation_frame(game);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_game::run();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use bramble_dash::sim::{GameState, RunEvent, RunPhase, TickInput, tick};

    // Headless demo run parameters
    const DEMO_SEED: u64 = 1414;
    const DEMO_TICKS: u32 = 20_000;

    env_logger::init();
    log::info!("Bramble Dash (native) starting...");
    log::info!("Headless demo run - use `trunk serve` for the browser version");

    let mut state = GameState::new(DEMO_SEED);
    let mut jumps = 0u32;

    for _ in 0..DEMO_TICKS {
        let input = TickInput {
            jump: should_jump(&state),
        };
        for event in tick(&mut state, &input) {
            match event {
                RunEvent::Jumped => jumps += 1,
                RunEvent::CoinCollected { id } => log::debug!("collected coin {}", id),
                RunEvent::Hit { id } => log::info!("clipped obstacle {}", id),
                RunEvent::GameOver => log::info!("run over"),
            }
        }
        if state.phase == RunPhase::GameOver {
            break;
        }
    }

    println!(
        "distance {} m, coins {}, jumps {}, final speed {:.1} px/tick",
        state.score_meters(),
        state.coin_count,
        jumps,
        state.scroll_speed
    );
}

/// Demo pilot: jump when the nearest obstacle ahead would reach the player
/// within roughly half a jump's airtime.
#[cfg(not(target_arch = "wasm32"))]
fn should_jump(state: &bramble_dash::sim::GameState) -> bool {
    use bramble_dash::consts::{PLAYER_WIDTH, PLAYER_X};

    let lead = state.scroll_speed * 20.0;
    state
        .obstacles
        .iter()
        .any(|o| o.x > PLAYER_X && o.x < PLAYER_X + PLAYER_WIDTH + lead)
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
