//! Feature models, free of browser types.
//!
//! DESIGN
//! ======
//! One module per page feature. Each owns its state as plain fields and
//! reaches the page only through a small trait (`*Surface`, `FormView`,
//! `Navigator`, `KeyValueStore`), so every rule is testable on the host.

pub mod cards;
pub mod contact;
pub mod progress;
pub mod scroll;
pub mod slider;
pub mod theme;
