//! Contact form validation and submission.
//!
//! Every field rule runs on every submit, so the visitor sees all problems
//! at once. A valid submission is persisted as one JSON snapshot (the
//! details page reads it back) and only then does the page navigate away.

#[cfg(test)]
#[path = "contact_test.rs"]
mod contact_test;

use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::util::navigation::Navigator;
use crate::util::storage::{KeyValueStore, StorageError, load_json, save_json};

pub const NAME_REQUIRED: &str = "Name is required";
pub const EMAIL_REQUIRED: &str = "Email is required";
pub const EMAIL_INVALID: &str = "Please enter a valid email address";
pub const MESSAGE_TOO_SHORT: &str = "Message must be at least 10 characters long";
pub const FIX_ERRORS_BANNER: &str = "Please fix the errors above";

/// The browser's `\s` class: ECMAScript white space plus line terminators.
///
/// Differs from [`char::is_whitespace`]: U+FEFF is included, U+0085 is not.
const JS_WHITESPACE: &str = r"\t\n\x0B\x0C\r \u{A0}\u{1680}\u{2000}-\u{200A}\u{2028}\u{2029}\u{202F}\u{205F}\u{3000}\u{FEFF}";

static EMAIL_PATTERN: LazyLock<Result<Regex, regex::Error>> = LazyLock::new(|| {
    Regex::new(&format!(
        "^[^{JS_WHITESPACE}@]+@[^{JS_WHITESPACE}@]+\\.[^{JS_WHITESPACE}@]+$"
    ))
});

/// Minimum trimmed message length, in UTF-16 code units like a browser
/// string's `length`.
pub const MIN_MESSAGE_LEN: usize = 10;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Name,
    Email,
    Message,
}

impl Field {
    pub const ALL: [Self; 3] = [Self::Name, Self::Email, Self::Message];

    /// Id of the element that shows this field's error.
    pub fn error_element_id(self) -> &'static str {
        match self {
            Self::Name => "nameError",
            Self::Email => "emailError",
            Self::Message => "messageError",
        }
    }

    /// Id of the element that shows this field on the details page.
    pub fn detail_element_id(self) -> &'static str {
        match self {
            Self::Name => "detail-name",
            Self::Email => "detail-email",
            Self::Message => "detail-message",
        }
    }
}

/// Raw input values as typed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactFields {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactFields {
    /// The record that gets persisted: every value trimmed.
    pub fn to_submission(&self) -> ContactSubmission {
        ContactSubmission {
            name: js_trim(&self.name).to_owned(),
            email: js_trim(&self.email).to_owned(),
            message: js_trim(&self.message).to_owned(),
        }
    }
}

/// The persisted snapshot.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactSubmission {
    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Message => &self.message,
        }
    }
}

/// Outcome of [`validate`]: per-field messages, empty when valid.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Validation {
    errors: BTreeMap<Field, &'static str>,
}

impl Validation {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn error(&self, field: Field) -> Option<&'static str> {
        self.errors.get(&field).copied()
    }

    pub fn errors(&self) -> impl Iterator<Item = (Field, &'static str)> + '_ {
        self.errors.iter().map(|(field, message)| (*field, *message))
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Check all three fields independently.
pub fn validate(fields: &ContactFields) -> Validation {
    let mut errors = BTreeMap::new();

    if js_trim(&fields.name).is_empty() {
        errors.insert(Field::Name, NAME_REQUIRED);
    }

    if js_trim(&fields.email).is_empty() {
        errors.insert(Field::Email, EMAIL_REQUIRED);
    } else if !is_basic_email(&fields.email) {
        errors.insert(Field::Email, EMAIL_INVALID);
    }

    if js_trim(&fields.message).encode_utf16().count() < MIN_MESSAGE_LEN {
        errors.insert(Field::Message, MESSAGE_TOO_SHORT);
    }

    Validation { errors }
}

/// Whole-string match of `local@domain.tld`, where each part is one or more
/// characters other than `@` and browser whitespace.
///
/// Deliberately permissive: `a@b.c` passes, and so does `a@b..c`.
pub fn is_basic_email(raw: &str) -> bool {
    match &*EMAIL_PATTERN {
        Ok(pattern) => pattern.is_match(raw),
        Err(err) => {
            log::error!("email pattern failed to compile: {err}");
            false
        }
    }
}

/// Whether `c` is in the browser's `\s` class.
pub fn is_js_whitespace(c: char) -> bool {
    matches!(
        c,
        '\t' | '\n' | '\u{0B}' | '\u{0C}' | '\r' | ' ' | '\u{A0}' | '\u{1680}' | '\u{2000}'..='\u{200A}'
            | '\u{2028}' | '\u{2029}' | '\u{202F}' | '\u{205F}' | '\u{3000}' | '\u{FEFF}'
    )
}

/// `String.prototype.trim` as the browser does it.
pub fn js_trim(raw: &str) -> &str {
    raw.trim_matches(is_js_whitespace)
}

/// Where validation feedback is rendered.
pub trait FormView {
    /// Blank every field error and the banner.
    fn clear_messages(&self);
    fn show_field_error(&self, field: Field, message: &str);
    fn show_banner_error(&self, message: &str);
}

/// The persisted submission slot.
pub struct ContactStore<S> {
    store: S,
    key: String,
}

impl<S: KeyValueStore> ContactStore<S> {
    pub fn new(store: S, key: impl Into<String>) -> Self {
        Self { store, key: key.into() }
    }

    /// Overwrite the stored submission.
    ///
    /// # Errors
    ///
    /// Returns the underlying storage error.
    pub fn save(&self, submission: &ContactSubmission) -> Result<(), StorageError> {
        save_json(&self.store, &self.key, submission)
    }

    /// The last stored submission, if any.
    ///
    /// # Errors
    ///
    /// Returns the underlying storage error, or [`StorageError::Decode`]
    /// when the slot holds something else.
    pub fn load(&self) -> Result<Option<ContactSubmission>, StorageError> {
        load_json(&self.store, &self.key)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Feedback was shown; nothing persisted, no navigation.
    Rejected(Validation),
    /// The submission was stored and navigation to the details page started.
    Redirected(ContactSubmission),
}

/// Validate, persist, navigate.
pub struct ContactFlow<S> {
    store: ContactStore<S>,
    details_page: String,
}

impl<S: KeyValueStore> ContactFlow<S> {
    pub fn new(store: ContactStore<S>, details_page: impl Into<String>) -> Self {
        Self { store, details_page: details_page.into() }
    }

    /// Handle one submit.
    ///
    /// Clears old feedback, then either shows every error plus the banner,
    /// or saves the trimmed record and navigates to the details page. The
    /// save completes before navigation starts.
    ///
    /// # Errors
    ///
    /// A failed save returns the storage error and does not navigate.
    pub fn submit(
        &self,
        fields: &ContactFields,
        view: &impl FormView,
        navigator: &impl Navigator,
    ) -> Result<SubmitOutcome, StorageError> {
        view.clear_messages();

        let validation = validate(fields);
        if !validation.is_valid() {
            for (field, message) in validation.errors() {
                view.show_field_error(field, message);
            }
            view.show_banner_error(FIX_ERRORS_BANNER);
            return Ok(SubmitOutcome::Rejected(validation));
        }

        let submission = fields.to_submission();
        self.store.save(&submission)?;
        navigator.navigate(&self.details_page);
        Ok(SubmitOutcome::Redirected(submission))
    }
}
