//! Bridge between the page's `<canvas>` and the `canvas` crate renderer.

use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlCanvasElement};

use crate::components::MountError;
use crate::consts::CANVAS_ID;
use crate::util::dom::{element_by_id, js_message};

/// Draw the banner once. `Ok(false)` when the surface cannot be drawn on.
pub fn mount(doc: &Document) -> Result<bool, MountError> {
    let el = element_by_id(doc, CANVAS_ID)?;
    let surface = el
        .dyn_into::<HtmlCanvasElement>()
        .map_err(|_| MountError::WrongElement { id: CANVAS_ID, expected: "canvas" })?;
    canvas::render::draw_on(&surface).map_err(|err| MountError::Js(js_message(&err)))
}
