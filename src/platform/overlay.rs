//! Live pointer-coordinate readout next to the canvas (debug aid)

use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use wasm_bindgen::closure::Closure;
use web_sys::{HtmlCanvasElement, HtmlElement, MouseEvent};

use super::readout_text;

/// Place a readout at the canvas's top-right corner and keep it updated
/// with the pointer position in logical canvas coordinates.
pub fn attach_coordinate_readout(canvas: &HtmlCanvasElement) -> Result<(), JsValue> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| JsValue::from_str("no document"))?;
    let body = document
        .body()
        .ok_or_else(|| JsValue::from_str("no body"))?;

    let display: HtmlElement = document.create_element("div")?.dyn_into()?;
    let style = display.style();
    style.set_property("position", "absolute")?;
    style.set_property("top", &format!("{}px", canvas.offset_top()))?;
    style.set_property(
        "left",
        &format!("{}px", canvas.offset_left() + canvas.offset_width()),
    )?;
    body.append_child(&display)?;

    let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
        display.set_text_content(Some(&readout_text(event.offset_x(), event.offset_y())));
    });
    canvas.add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref())?;
    closure.forget();

    log::debug!("Coordinate readout attached");
    Ok(())
}
