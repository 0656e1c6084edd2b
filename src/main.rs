//! Falldown entry point
//!
//! Platform wiring: canvas setup, interval-driven simulation, rAF-driven
//! rendering, and keyboard listeners on the web build; a headless seeded
//! run on native.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

    use falldown::consts::TICK_INTERVAL_MS;
    use falldown::renderer::CanvasRenderer;
    use falldown::sim::{GameSession, tick};
    use falldown::{Settings, input};

    /// Interval handle for the simulation timer, shared so the tick closure
    /// can cancel itself on game over and the restart path can re-arm it
    type SimTimer = Rc<Cell<Option<i32>>>;

    pub fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("failed to init logger");

        log::info!("Falldown starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("canvas")
            .expect("no canvas")
            .dyn_into()
            .expect("not a canvas");

        // Size the backing store to the displayed size
        let width = canvas.client_width();
        let height = canvas.client_height();
        canvas.set_width(width as u32);
        canvas.set_height(height as u32);

        let ctx: CanvasRenderingContext2d = canvas
            .get_context("2d")
            .expect("failed to get 2d context")
            .expect("no 2d context")
            .dyn_into()
            .expect("not a 2d context");

        let seed = js_sys::Date::now() as u64;
        let session = Rc::new(RefCell::new(GameSession::new(width, height, seed)));
        log::info!("playfield {}x{}, seed {}", width, height, seed);

        let settings = Settings::load();
        let renderer = Rc::new(CanvasRenderer::new(ctx, width, height, settings));

        let timer: SimTimer = Rc::new(Cell::new(None));
        setup_keyboard(session.clone(), timer.clone());
        schedule_sim(session.clone(), timer);
        schedule_render(renderer, session);

        log::info!("Falldown running!");
    }

    /// Arm the fixed-cadence simulation timer
    ///
    /// Each firing runs one full tick inside a single borrow, so render
    /// passes never observe partial-tick state. Reaching the terminal state
    /// cancels the timer; rendering keeps going on its own.
    fn schedule_sim(session: Rc<RefCell<GameSession>>, timer: SimTimer) {
        if timer.get().is_some() {
            return;
        }

        let window = web_sys::window().expect("no window");
        let timer_in_tick = timer.clone();
        let closure = Closure::<dyn FnMut()>::new(move || {
            let mut s = session.borrow_mut();
            tick(&mut s);
            if s.is_over() {
                if let Some(handle) = timer_in_tick.take() {
                    if let Some(window) = web_sys::window() {
                        window.clear_interval_with_handle(handle);
                    }
                }
                log::info!("game over after {} ticks, final score {}", s.ticks, s.score);
            }
        });

        let handle = window
            .set_interval_with_callback_and_timeout_and_arguments_0(
                closure.as_ref().unchecked_ref(),
                TICK_INTERVAL_MS,
            )
            .expect("failed to schedule simulation interval");
        timer.set(Some(handle));
        closure.forget();
    }

    /// Self-rescheduling render loop, one draw per animation frame
    fn schedule_render(renderer: Rc<CanvasRenderer>, session: Rc<RefCell<GameSession>>) {
        let window = web_sys::window().expect("no window");
        let closure = Closure::once(move |_time: f64| {
            renderer.draw(&session.borrow());
            schedule_render(renderer, session);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    /// Keyboard wiring: movement while running, restart once over
    fn setup_keyboard(session: Rc<RefCell<GameSession>>, timer: SimTimer) {
        let window = web_sys::window().expect("no window");
        let closure = Closure::<dyn FnMut(_)>::new(move |event: web_sys::KeyboardEvent| {
            let key = event.key();
            let mut s = session.borrow_mut();
            if s.is_over() {
                if matches!(key.as_str(), "Enter" | "r" | "R") {
                    let seed = js_sys::Date::now() as u64;
                    let (width, height) = (s.width, s.height);
                    *s = GameSession::new(width, height, seed);
                    log::info!("restarted with seed {}", seed);
                    drop(s);
                    schedule_sim(session.clone(), timer.clone());
                }
            } else {
                input::handle_key(&mut s, &key);
            }
        });
        let _ = window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_game::run();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use falldown::format_thousands;
    use falldown::sim::{GameSession, tick};

    env_logger::init();
    log::info!("Falldown (native) starting...");

    // Headless run: fixed seed, no input, bounded tick count
    let mut session = GameSession::new(400, 600, 0xFA11D0);
    while !session.is_over() && session.ticks < 1_000_000 {
        tick(&mut session);
    }

    if session.is_over() {
        log::info!("session ended after {} ticks", session.ticks);
    } else {
        log::info!("session still running after {} ticks, stopping", session.ticks);
    }
    println!("Final score: {}", format_thousands(session.score));
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
