//! Utility helpers shared across client modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns (storage, navigation,
//! DOM access) from the feature models in `state`, which only see traits.

#[cfg(feature = "hydrate")]
pub mod dom;
pub mod navigation;
pub mod storage;
