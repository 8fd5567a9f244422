//! Keyboard wiring

use std::cell::RefCell;
use std::rc::Rc;

use rand::Rng;
use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use wasm_bindgen::closure::Closure;
use web_sys::KeyboardEvent;

use super::FrameHandle;
use crate::sim::{GameController, Key};

/// Listen for key presses on the document and forward them to the controller.
///
/// Pausing also cancels the pending animation frame so the loop stops
/// immediately.
pub fn attach_keyboard<R: Rng + 'static>(
    game: Rc<RefCell<GameController<R>>>,
    frames: FrameHandle,
) -> Result<(), JsValue> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| JsValue::from_str("no document"))?;

    // Key down
    {
        let game = game.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
            let Some(key) = Key::from_dom(&event.key()) else {
                return;
            };
            // Keep arrows and space from scrolling the page
            event.prevent_default();

            let paused = {
                let mut g = game.borrow_mut();
                g.key_down(key);
                g.is_paused()
            };
            if key == Key::Pause && paused {
                frames.cancel();
            }
        });
        document.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref())?;
        closure.forget();
    }

    // Key up
    {
        let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
            if let Some(key) = Key::from_dom(&event.key()) {
                game.borrow_mut().key_up(key);
            }
        });
        document.add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref())?;
        closure.forget();
    }

    Ok(())
}
