//! Key-value persistence behind a small trait.
//!
//! SYSTEM CONTEXT
//! ==============
//! Feature models persist through [`KeyValueStore`] so they can be tested
//! against [`MemoryStore`]. In the browser the store is `localStorage`
//! ([`LocalStore`]); when that is unavailable (privacy mode, sandboxed
//! iframe) [`browser_store`] falls back to a page-lifetime [`MemoryStore`].

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use serde::Serialize;
use serde::de::DeserializeOwned;

/// Errors produced by a [`KeyValueStore`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StorageError {
    #[error("storage unavailable")]
    Unavailable,

    #[error("storage call failed: {0}")]
    Js(String),

    #[error("encode failed: {0}")]
    Encode(String),

    #[error("decode failed: {0}")]
    Decode(String),
}

/// String key-value storage with `localStorage` semantics.
pub trait KeyValueStore {
    /// Read `key`; `Ok(None)` when it was never written.
    ///
    /// # Errors
    ///
    /// Returns an error when the backing store cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Write `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns an error when the backing store rejects the write.
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for Rc<T> {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).set(key, value)
    }
}

/// In-memory store. Clones share the same entries, like two tabs sharing
/// one origin's storage.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    entries: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries.borrow_mut().insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}

/// Load a JSON value stored under `key`.
///
/// # Errors
///
/// Returns the store's read error, or [`StorageError::Decode`] when the
/// stored text is not a valid `T`.
pub fn load_json<T: DeserializeOwned>(store: &impl KeyValueStore, key: &str) -> Result<Option<T>, StorageError> {
    let Some(raw) = store.get(key)? else {
        return Ok(None);
    };
    serde_json::from_str(&raw)
        .map(Some)
        .map_err(|err| StorageError::Decode(err.to_string()))
}

/// Save `value` as JSON under `key`.
///
/// # Errors
///
/// Returns [`StorageError::Encode`] if `value` cannot be serialized, or the
/// store's write error.
pub fn save_json<T: Serialize>(store: &impl KeyValueStore, key: &str, value: &T) -> Result<(), StorageError> {
    let raw = serde_json::to_string(value).map_err(|err| StorageError::Encode(err.to_string()))?;
    store.set(key, &raw)
}

/// `window.localStorage`.
#[cfg(feature = "hydrate")]
pub struct LocalStore {
    storage: web_sys::Storage,
}

#[cfg(feature = "hydrate")]
impl LocalStore {
    /// Open the window's local storage.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Unavailable`] when there is no window or the
    /// browser exposes no local storage, and [`StorageError::Js`] when the
    /// access itself throws (e.g. blocked by privacy settings).
    pub fn open() -> Result<Self, StorageError> {
        let window = web_sys::window().ok_or(StorageError::Unavailable)?;
        let storage = window
            .local_storage()
            .map_err(|err| StorageError::Js(crate::util::dom::js_message(&err)))?
            .ok_or(StorageError::Unavailable)?;
        Ok(Self { storage })
    }
}

#[cfg(feature = "hydrate")]
impl KeyValueStore for LocalStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.storage
            .get_item(key)
            .map_err(|err| StorageError::Js(crate::util::dom::js_message(&err)))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.storage
            .set_item(key, value)
            .map_err(|err| StorageError::Js(crate::util::dom::js_message(&err)))
    }
}

/// Local storage when the browser grants it, otherwise a page-lifetime
/// memory store.
#[cfg(feature = "hydrate")]
pub fn browser_store() -> Rc<dyn KeyValueStore> {
    match LocalStore::open() {
        Ok(store) => Rc::new(store),
        Err(err) => {
            log::warn!("local storage unavailable, preferences will not persist: {err}");
            Rc::new(MemoryStore::new())
        }
    }
}
