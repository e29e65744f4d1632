//! Browser client for Flappy
//!
//! Wires the `game_core` controller to the DOM: metrics from CSS variables,
//! elements positioned from the simulation, `requestAnimationFrame` for the
//! frame loop, and `localStorage` for the high score.

mod dom;
mod input;
mod logger;
mod metrics;
mod platform;
mod storage;

use game_core::{FsmState, GameController, GameRng};
use input::{get_code_from_event, is_jump_key};
use metrics::DomMetrics;
use platform::DomPlatform;
use std::cell::RefCell;
use storage::LocalStorageStore;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{KeyboardEvent, MouseEvent};

const APP_ID: &str = "app";
const START_BUTTON_ID: &str = "start-button";
const PLAY_AGAIN_BUTTON_ID: &str = "play-again-button";

type BrowserController = GameController<DomPlatform, LocalStorageStore, DomMetrics>;

thread_local! {
    static CONTROLLER: RefCell<Option<BrowserController>> = const { RefCell::new(None) };
}

/// Run `f` against the live controller, if there is one and it is not
/// already borrowed by an outer callback.
pub(crate) fn with_controller<R>(f: impl FnOnce(&mut BrowserController) -> R) -> Option<R> {
    CONTROLLER.with(|cell| match cell.try_borrow_mut() {
        Ok(mut guard) => guard.as_mut().map(f),
        Err(_) => {
            log::warn!("Controller busy, dropping event");
            None
        }
    })
}

fn not_initialised() -> JsValue {
    JsValue::from_str("Game not initialised, call init_game() first")
}

#[wasm_bindgen(start)]
pub fn wasm_start() {
    console_error_panic_hook::set_once();
    logger::init(log::LevelFilter::Info);
}

/// Build the controller, hook up the menu buttons and show the menu
#[wasm_bindgen]
pub fn init_game() -> Result<(), JsValue> {
    if with_controller(|_| ()).is_some() {
        return Ok(());
    }

    let window = dom::window()?;
    let document = dom::document()?;
    let platform = DomPlatform::new(window, document.clone())?;
    let controller = GameController::new(
        platform,
        LocalStorageStore::new(),
        DomMetrics::new(APP_ID),
        GameRng::from_entropy(),
    );
    CONTROLLER.with(|cell| *cell.borrow_mut() = Some(controller));

    // Menu and game-over buttons live for the whole page
    for (id, play_again) in [(START_BUTTON_ID, false), (PLAY_AGAIN_BUTTON_ID, true)] {
        let button = dom::html_element(&document, id)?;
        let closure = Closure::wrap(Box::new(move |_event: MouseEvent| {
            with_controller(|c| {
                if play_again {
                    c.play_again();
                } else {
                    c.start();
                }
            });
        }) as Box<dyn FnMut(_)>);
        button.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
        closure.forget();
    }

    // Space on the menu starts a game
    {
        let closure = Closure::wrap(Box::new(move |event: KeyboardEvent| {
            if !is_jump_key(&get_code_from_event(&event)) {
                return;
            }
            with_controller(|c| {
                if c.state() == FsmState::Menu {
                    event.prevent_default();
                    c.start();
                }
            });
        }) as Box<dyn FnMut(_)>);
        document.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref())?;
        closure.forget();
    }

    with_controller(|c| c.init());
    log::info!("Flappy ready");
    Ok(())
}

/// Start a game from the menu. Returns false if not in the menu.
#[wasm_bindgen]
pub fn start_game() -> Result<bool, JsValue> {
    with_controller(|c| c.start().success()).ok_or_else(not_initialised)
}

/// Start another game from the game-over screen
#[wasm_bindgen]
pub fn play_again() -> Result<bool, JsValue> {
    with_controller(|c| c.play_again().success()).ok_or_else(not_initialised)
}

/// Apply a jump, for hosts that deliver input themselves. Ignored unless playing.
#[wasm_bindgen]
pub fn jump() -> Result<(), JsValue> {
    with_controller(|c| c.on_jump()).ok_or_else(not_initialised)
}

/// Current state as "Menu", "Playing" or "GameOver"
#[wasm_bindgen]
pub fn game_state() -> Result<String, JsValue> {
    with_controller(|c| format!("{:?}", c.state())).ok_or_else(not_initialised)
}

#[wasm_bindgen]
pub fn current_score() -> Result<u32, JsValue> {
    with_controller(|c| c.score()).ok_or_else(not_initialised)
}

#[wasm_bindgen]
pub fn high_score() -> Result<u32, JsValue> {
    with_controller(|c| c.high_score()).ok_or_else(not_initialised)
}
