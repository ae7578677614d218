//! # client
//!
//! WASM enhancement layer for the static portfolio page.
//!
//! The page markup and styling ship as plain files; this crate binds
//! behavior onto them at load: skill bars that fill when scrolled into view,
//! a validated contact form, clickable project cards, the banner canvas, an
//! auto-advancing image slider, a persisted light/dark theme, and a back to
//! top control.
//!
//! Each feature is split in two. The [`state`] modules hold the behavior as
//! plain Rust (no browser needed, unit tested on the host). The
//! [`components`] modules, compiled with the `hydrate` feature, bind that
//! behavior to the DOM through `web-sys`. [`app`] mounts every component
//! independently so one missing element never disables the rest.

pub mod app;
pub mod components;
pub mod config;
pub mod consts;
pub mod state;
pub mod util;
