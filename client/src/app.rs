//! Page entry point: mounts every component once, independently.
//!
//! Components never call into each other. A component that fails to mount
//! is logged and left out; the rest of the page still works.

#[cfg(test)]
#[path = "app_test.rs"]
mod app_test;

use crate::components::MountError;

/// Keep a mounted component, or log why it is absent.
///
/// Missing markup is an expected page variation (logged at `debug`); any
/// other failure is logged at `warn`.
pub fn settle<T>(component: &'static str, result: Result<T, MountError>) -> Option<T> {
    match result {
        Ok(mounted) => {
            log::debug!("{component} mounted");
            Some(mounted)
        }
        Err(err) if err.is_missing_markup() => {
            log::debug!("{component} skipped: {err}");
            None
        }
        Err(err) => {
            log::warn!("{component} failed to mount: {err}");
            None
        }
    }
}

#[cfg(feature = "hydrate")]
pub use browser::{Portfolio, dispose, start};

#[cfg(feature = "hydrate")]
mod browser {
    use std::cell::RefCell;

    use wasm_bindgen::prelude::wasm_bindgen;
    use web_sys::Document;

    use super::settle;
    use crate::components::{
        MountError, back_to_top, banner_canvas, contact_form, footer_year, form_details, image_slider, project_cards,
        skill_bars, theme_toggle,
    };
    use crate::config::{ConfigError, PageConfig};
    use crate::consts::CONFIG_ELEMENT_ID;
    use crate::util::dom;
    use crate::util::storage::browser_store;

    thread_local! {
        static PAGE: RefCell<Option<Portfolio>> = const { RefCell::new(None) };
    }

    /// Every long-lived handle the page owns. Dropping it detaches all
    /// listeners, stops the slider timer, and disconnects the observer.
    pub struct Portfolio {
        _skills: Option<skill_bars::SkillBars>,
        _contact: Option<contact_form::ContactForm>,
        _cards: Option<project_cards::ProjectCards>,
        _slider: Option<image_slider::ImageSlider>,
        _theme: Option<theme_toggle::ThemeToggle>,
        _back_to_top: Option<back_to_top::BackToTopControl>,
    }

    impl Portfolio {
        /// Mount all components against the current document.
        ///
        /// # Errors
        ///
        /// Fails only when there is no window or document at all.
        pub fn mount(config: &PageConfig) -> Result<Self, MountError> {
            let window = dom::window()?;
            let doc = dom::document(&window)?;
            let store = browser_store();

            let skills = settle("skill bars", skill_bars::mount(&doc, config));
            let contact = settle("contact form", contact_form::mount(&doc, &window, store.clone(), config));
            if let Some(false) = settle("form details", form_details::mount(&doc, store.clone(), config)) {
                log::debug!("no stored contact submission to show");
            }
            let cards = settle("project cards", project_cards::mount(&doc, &window));
            if let Some(false) = settle("banner canvas", banner_canvas::mount(&doc)) {
                log::debug!("banner canvas not drawable");
            }
            let slider = settle("image slider", image_slider::mount(&doc, config)).flatten();
            let theme = settle("theme toggle", theme_toggle::mount(&doc, store, config));
            let back_to_top = settle("back to top", back_to_top::mount(&doc, &window, config));
            settle("footer year", footer_year::mount(&doc));

            Ok(Self {
                _skills: skills,
                _contact: contact,
                _cards: cards,
                _slider: slider,
                _theme: theme,
                _back_to_top: back_to_top,
            })
        }
    }

    /// Read the optional inline config block.
    fn page_config(doc: &Document) -> (PageConfig, Option<ConfigError>) {
        let raw = doc.get_element_by_id(CONFIG_ELEMENT_ID).and_then(|el| el.text_content());
        match raw.as_deref().map(PageConfig::from_json) {
            None => (PageConfig::default(), None),
            Some(Ok(config)) => (config, None),
            Some(Err(err)) => (PageConfig::default(), Some(err)),
        }
    }

    /// WASM entry point, run once when the module loads.
    #[wasm_bindgen(start)]
    pub fn start() {
        console_error_panic_hook::set_once();

        let doc = web_sys::window().and_then(|w| w.document());
        let (config, config_err) = doc.as_ref().map_or_else(|| (PageConfig::default(), None), page_config);

        if let Err(err) = console_log::init_with_level(config.log_level()) {
            web_sys::console::warn_1(&format!("console logger already set: {err}").into());
        }
        if let Some(err) = config_err {
            log::warn!("ignoring #{CONFIG_ELEMENT_ID}: {err}");
        }

        match Portfolio::mount(&config) {
            Ok(page) => PAGE.with(|slot| *slot.borrow_mut() = Some(page)),
            Err(err) => log::error!("portfolio enhancements disabled: {err}"),
        }
    }

    /// Release every listener, timer, and observer the page holds.
    #[wasm_bindgen]
    pub fn dispose() {
        let released = PAGE.with(|slot| slot.borrow_mut().take());
        if released.is_some() {
            log::debug!("portfolio enhancements disposed");
        }
    }
}
