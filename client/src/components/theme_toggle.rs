//! Theme toggle button bound to [`ThemeStore`].

use std::cell::RefCell;
use std::rc::Rc;

use web_sys::{Document, Element};

use crate::components::MountError;
use crate::config::PageConfig;
use crate::consts::{LIGHT_MODE_CLASS, THEME_ICON_SELECTOR, THEME_TOGGLE_ID};
use crate::state::theme::{Appearance, ThemeStore, ThemeSurface};
use crate::util::dom::{Listener, js_message, set_class};
use crate::util::storage::KeyValueStore;

/// `<body>` class plus the toggle's icon.
struct PageTheme {
    root: Element,
    icon: Option<Element>,
}

impl ThemeSurface for PageTheme {
    fn show(&self, appearance: Appearance) {
        set_class(&self.root, LIGHT_MODE_CLASS, appearance.light_mode);
        if let Some(icon) = &self.icon {
            set_class(icon, appearance.hidden_icon, false);
            set_class(icon, appearance.icon, true);
        }
    }
}

pub struct ThemeToggle {
    _click: Listener,
}

/// Apply the stored theme, then wire the toggle button.
///
/// The stored theme is applied even when the button is missing.
pub fn mount(doc: &Document, store: Rc<dyn KeyValueStore>, config: &PageConfig) -> Result<ThemeToggle, MountError> {
    let root: Element = doc.body().ok_or(MountError::NoDocument)?.into();
    let button = doc.get_element_by_id(THEME_TOGGLE_ID);
    let icon = match &button {
        Some(button) => button
            .query_selector(THEME_ICON_SELECTOR)
            .map_err(|err| MountError::Js(js_message(&err)))?,
        None => None,
    };

    let surface = PageTheme { root, icon };
    let themes = ThemeStore::open(store, config.theme_key.clone());
    themes.apply(&surface);
    log::debug!("theme applied: {}", themes.current().as_str());

    let Some(button) = button else {
        return Err(MountError::MissingElement(THEME_TOGGLE_ID));
    };
    let themes = RefCell::new(themes);
    let click = Listener::attach(&button, "click", move |_event| {
        let now = themes.borrow_mut().toggle(&surface);
        log::debug!("theme toggled to {}", now.as_str());
    })?;

    Ok(ThemeToggle { _click: click })
}
