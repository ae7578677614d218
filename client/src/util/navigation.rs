//! Browsing-context navigation behind a trait.

/// Moves the visitor to another page.
pub trait Navigator {
    /// Replace the current page with `url`.
    fn navigate(&self, url: &str);

    /// Open `url` in a new browsing context, leaving the current page intact.
    fn open_new_context(&self, url: &str);
}

/// Navigation through `window.location` and `window.open`.
///
/// Failures are browser-level concerns; they are logged and dropped.
#[cfg(feature = "hydrate")]
pub struct WindowNavigator {
    window: web_sys::Window,
}

#[cfg(feature = "hydrate")]
impl WindowNavigator {
    pub fn new(window: web_sys::Window) -> Self {
        Self { window }
    }
}

#[cfg(feature = "hydrate")]
impl Navigator for WindowNavigator {
    fn navigate(&self, url: &str) {
        if let Err(err) = self.window.location().set_href(url) {
            log::warn!("navigation to {url} failed: {}", crate::util::dom::js_message(&err));
        }
    }

    fn open_new_context(&self, url: &str) {
        match self.window.open_with_url_and_target(url, "_blank") {
            Ok(Some(_)) => {}
            Ok(None) => log::warn!("popup for {url} was blocked"),
            Err(err) => log::warn!("opening {url} failed: {}", crate::util::dom::js_message(&err)),
        }
    }
}
