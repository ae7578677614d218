//! Thin `web-sys` helpers used by the component bindings.
//!
//! Every DOM mutation here is best-effort: failures are logged at `warn`
//! and never abort the calling component.

use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use wasm_bindgen::closure::Closure;
use web_sys::{Document, Element, Event, EventTarget, HtmlElement, NodeList, Window};

use crate::components::MountError;

/// Render a thrown JS value for logs.
pub fn js_message(err: &JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{err:?}"))
}

pub fn window() -> Result<Window, MountError> {
    web_sys::window().ok_or(MountError::NoDocument)
}

pub fn document(window: &Window) -> Result<Document, MountError> {
    window.document().ok_or(MountError::NoDocument)
}

/// Look up a required element by id.
pub fn element_by_id(doc: &Document, id: &'static str) -> Result<Element, MountError> {
    doc.get_element_by_id(id).ok_or(MountError::MissingElement(id))
}

/// All elements matching `selector`, in document order.
pub fn query_all(doc: &Document, selector: &'static str) -> Result<Vec<Element>, MountError> {
    let list = doc
        .query_selector_all(selector)
        .map_err(|err| MountError::Js(js_message(&err)))?;
    Ok(elements(&list))
}

fn elements(list: &NodeList) -> Vec<Element> {
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_ref::<Element>().cloned())
        .collect()
}

/// Add or remove one class.
pub fn set_class(el: &Element, class: &str, enabled: bool) {
    let classes = el.class_list();
    let result = if enabled { classes.add_1(class) } else { classes.remove_1(class) };
    if let Err(err) = result {
        log::warn!("class '{class}' update failed: {}", js_message(&err));
    }
}

/// Set one inline style property on an element that supports styling.
pub fn set_style(el: &Element, property: &str, value: &str) {
    let Some(html) = el.dyn_ref::<HtmlElement>() else {
        log::debug!("element without inline style; skipped {property}");
        return;
    };
    if let Err(err) = html.style().set_property(property, value) {
        log::warn!("style '{property}' update failed: {}", js_message(&err));
    }
}

/// An attached DOM event listener. Dropping it detaches the callback.
pub struct Listener {
    target: EventTarget,
    kind: &'static str,
    callback: Closure<dyn FnMut(Event)>,
}

impl Listener {
    /// Attach `handler` for `kind` events on `target`.
    pub fn attach(
        target: &EventTarget,
        kind: &'static str,
        handler: impl FnMut(Event) + 'static,
    ) -> Result<Self, MountError> {
        let callback = Closure::<dyn FnMut(Event)>::new(handler);
        target
            .add_event_listener_with_callback(kind, callback.as_ref().unchecked_ref())
            .map_err(|err| MountError::Js(js_message(&err)))?;
        Ok(Self { target: target.clone(), kind, callback })
    }
}

impl Drop for Listener {
    fn drop(&mut self) {
        if let Err(err) = self
            .target
            .remove_event_listener_with_callback(self.kind, self.callback.as_ref().unchecked_ref())
        {
            log::warn!("detaching {} listener failed: {}", self.kind, js_message(&err));
        }
    }
}
