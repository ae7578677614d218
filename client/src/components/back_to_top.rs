//! Back to top control bound to [`BackToTop`].

use std::cell::RefCell;

use web_sys::{Document, ScrollBehavior, ScrollToOptions, Window};

use crate::components::MountError;
use crate::config::PageConfig;
use crate::consts::{BACK_TO_TOP_ID, VISIBLE_CLASS};
use crate::state::scroll::BackToTop;
use crate::util::dom::{Listener, element_by_id, js_message, set_class};

pub struct BackToTopControl {
    _scroll: Listener,
    _click: Listener,
}

pub fn mount(doc: &Document, window: &Window, config: &PageConfig) -> Result<BackToTopControl, MountError> {
    let button = element_by_id(doc, BACK_TO_TOP_ID)?;
    let visibility = RefCell::new(BackToTop::new(config.back_to_top_offset));

    let scroller = window.clone();
    let toggled = button.clone();
    let scroll = Listener::attach(window, "scroll", move |_event| match scroller.scroll_y() {
        Ok(offset) => {
            if let Some(visible) = visibility.borrow_mut().on_scroll(offset) {
                set_class(&toggled, VISIBLE_CLASS, visible);
            }
        }
        Err(err) => log::warn!("reading scroll offset failed: {}", js_message(&err)),
    })?;

    let scroller = window.clone();
    let click = Listener::attach(&button, "click", move |_event| {
        let options = ScrollToOptions::new();
        options.set_top(0.0);
        options.set_behavior(ScrollBehavior::Smooth);
        scroller.scroll_to_with_scroll_to_options(&options);
    })?;

    Ok(BackToTopControl { _scroll: scroll, _click: click })
}
