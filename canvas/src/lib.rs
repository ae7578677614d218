//! Decorative banner drawing for the portfolio page.
//!
//! This crate is compiled to WebAssembly and runs in the browser. It owns the
//! single imperative 2D drawing on the page: a gradient banner with a label,
//! a circle, and a bar. Geometry is computed by the pure [`layout`] module so
//! it can be tested on the host; [`render`] is the only place that touches
//! [`web_sys::CanvasRenderingContext2d`].
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`layout`] | Banner geometry derived from the surface size |
//! | [`render`] | Draws a [`layout::BannerLayout`] onto a 2D context |
//! | [`consts`] | Colors, font, and fixed offsets |

pub mod consts;
pub mod layout;
pub mod render;
