//! Browser host for the Pong game
//!
//! Draws on a `<canvas>` through its 2D context, drives the game loop with
//! `setTimeout` and listens for key presses on the window. Wiring the
//! start button to [`press_start`] is left to the page.

#![cfg(target_arch = "wasm32")]

mod error;
mod input;
mod surface;

use std::cell::RefCell;

use error::ClientError;
use game_core::{Config, Engine, Key, TaskId, TimerQueue, TimerRequest};
use surface::CanvasSurface;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, KeyboardEvent, Window};

/// Everything the page session owns
struct App {
    engine: Engine<TimerQueue>,
    surface: CanvasSurface,
    window: Window,
    timeout: Option<(TaskId, i32)>, // (task, setTimeout handle)
}

impl App {
    /// Turn the engine's timer requests into real browser timers
    fn sync_timers(&mut self) -> Result<(), ClientError> {
        for request in self.engine.scheduler_mut().drain_requests() {
            match request {
                TimerRequest::Cancel(task) => {
                    if let Some((pending, handle)) = self.timeout {
                        if pending == task {
                            self.window.clear_timeout_with_handle(handle);
                            self.timeout = None;
                        }
                    }
                }
                TimerRequest::Schedule { task, delay } => {
                    let callback = Closure::once_into_js(move || on_timeout(task));
                    let handle = self
                        .window
                        .set_timeout_with_callback_and_timeout_and_arguments_0(
                            callback.unchecked_ref(),
                            delay.as_millis().min(i32::MAX as u128) as i32,
                        )?;
                    self.timeout = Some((task, handle));
                }
            }
        }
        Ok(())
    }
}

thread_local! {
    static APP: RefCell<Option<App>> = const { RefCell::new(None) };
}

fn with_app<T>(f: impl FnOnce(&mut App) -> Result<T, ClientError>) -> Result<T, ClientError> {
    APP.with(|cell| {
        let mut slot = cell.borrow_mut();
        let app = slot.as_mut().ok_or(ClientError::NotInitialized)?;
        f(app)
    })
}

fn on_timeout(task: TaskId) {
    let result = with_app(|app| {
        app.engine.scheduler_mut().fired(task);
        if app.timeout.map(|(pending, _)| pending) == Some(task) {
            app.timeout = None;
        }
        app.engine.on_timer(task, &mut app.surface)?;
        app.sync_timers()
    });
    if let Err(err) = result {
        log::error!("tick failed: {}", err);
    }
}

fn on_key_down(event: KeyboardEvent) {
    let key = input::key_from_event(&event);
    if key == Key::Other {
        return;
    }
    if input::should_prevent_default(key) {
        event.prevent_default();
    }
    if let Err(err) = with_app(|app| Ok(app.engine.key_down(key))) {
        log::warn!("key ignored: {}", err);
    }
}

fn canvas_context(
    window: &Window,
    canvas_id: &str,
) -> Result<(HtmlCanvasElement, CanvasRenderingContext2d), ClientError> {
    let document = window.document().ok_or(ClientError::NoDocument)?;
    let canvas = document
        .get_element_by_id(canvas_id)
        .and_then(|el| el.dyn_into::<HtmlCanvasElement>().ok())
        .ok_or_else(|| ClientError::CanvasNotFound(canvas_id.to_owned()))?;
    let ctx = canvas
        .get_context("2d")?
        .and_then(|ctx| ctx.dyn_into::<CanvasRenderingContext2d>().ok())
        .ok_or(ClientError::NoContext)?;
    Ok((canvas, ctx))
}

fn init_app(canvas_id: &str) -> Result<(), ClientError> {
    let window = web_sys::window().ok_or(ClientError::NoWindow)?;
    let (canvas, ctx) = canvas_context(&window, canvas_id)?;

    let config = Config::with_board(canvas.width() as f32, canvas.height() as f32);
    let seed = (js_sys::Math::random() * u32::MAX as f64) as u64;
    let engine = Engine::new(config, seed, TimerQueue::new())?;
    let mut surface = CanvasSurface::new(ctx);
    engine.init(&mut surface)?;

    let listener = Closure::<dyn FnMut(KeyboardEvent)>::new(on_key_down);
    window.add_event_listener_with_callback("keydown", listener.as_ref().unchecked_ref())?;
    // Subscribed for the whole session
    listener.forget();

    APP.with(|cell| {
        *cell.borrow_mut() = Some(App {
            engine,
            surface,
            window,
            timeout: None,
        });
    });
    log::info!(
        "pong ready on #{} ({}x{})",
        canvas_id,
        canvas.width(),
        canvas.height()
    );
    Ok(())
}

/// Set up the game on the canvas with the given id and draw the idle board
#[wasm_bindgen]
pub fn init_game(canvas_id: &str) -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    // Already installed on a second init
    let _ = console_log::init_with_level(log::Level::Info);
    init_app(canvas_id).map_err(JsValue::from)
}

/// Start/restart button: the first press starts play, later presses reset
#[wasm_bindgen]
pub fn press_start() -> Result<(), JsValue> {
    with_app(|app| {
        let action = app.engine.press_start();
        log::info!("start control: {:?}", action);
        app.sync_timers()
    })
    .map_err(JsValue::from)
}
