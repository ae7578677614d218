//! DOM bindings for each page feature.
//!
//! ARCHITECTURE
//! ============
//! Each submodule exposes a `mount` function that looks up its elements
//! once, wires listeners/timers/observers around the matching `state` model,
//! and returns a handle. Dropping the handle releases everything it wired.
//! Submodules only exist with the `hydrate` feature; [`MountError`] is
//! always available so callers can classify failures.

#[cfg(feature = "hydrate")]
pub mod back_to_top;
#[cfg(feature = "hydrate")]
pub mod banner_canvas;
#[cfg(feature = "hydrate")]
pub mod contact_form;
#[cfg(feature = "hydrate")]
pub mod footer_year;
#[cfg(feature = "hydrate")]
pub mod form_details;
#[cfg(feature = "hydrate")]
pub mod image_slider;
#[cfg(feature = "hydrate")]
pub mod project_cards;
#[cfg(feature = "hydrate")]
pub mod skill_bars;
#[cfg(feature = "hydrate")]
pub mod theme_toggle;

/// Why a component could not be mounted.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MountError {
    #[error("no window or document")]
    NoDocument,

    #[error("element #{0} not found")]
    MissingElement(&'static str),

    #[error("element #{id} is not a {expected}")]
    WrongElement { id: &'static str, expected: &'static str },

    #[error("browser call failed: {0}")]
    Js(String),
}

impl MountError {
    /// Absent markup is an expected page variation, not a fault.
    pub fn is_missing_markup(&self) -> bool {
        matches!(self, Self::MissingElement(_))
    }
}
