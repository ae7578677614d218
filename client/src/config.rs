//! Page-level tuning knobs.
//!
//! Defaults match the shipped page. A page may override any subset by
//! embedding JSON in the element named by [`crate::consts::CONFIG_ELEMENT_ID`];
//! missing keys keep their defaults.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::{Deserialize, Serialize};

pub const DEFAULT_THEME_KEY: &str = "theme";
pub const DEFAULT_CONTACT_KEY: &str = "formData";
pub const DEFAULT_DETAILS_PAGE: &str = "form-details.html";
pub const DEFAULT_SLIDE_INTERVAL_MS: u32 = 5_000;
pub const DEFAULT_REVEAL_DELAY_MS: u32 = 100;
pub const DEFAULT_REVEAL_THRESHOLD: f64 = 0.5;
pub const DEFAULT_BACK_TO_TOP_OFFSET: f64 = 300.0;

/// Errors produced while reading a page config override.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config parse failed: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid {field}: {reason}")]
    Invalid { field: &'static str, reason: String },
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct PageConfig {
    /// Storage key of the persisted theme preference.
    pub theme_key: String,
    /// Storage key of the last contact submission.
    pub contact_key: String,
    /// Page opened after a successful submission.
    pub details_page: String,
    pub slide_interval_ms: u32,
    pub reveal_delay_ms: u32,
    /// Visible fraction (0, 1] at which a skill bar fills.
    pub reveal_threshold: f64,
    /// Scroll offset in pixels past which the back to top control shows.
    pub back_to_top_offset: f64,
    pub log_level: String,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            theme_key: DEFAULT_THEME_KEY.to_owned(),
            contact_key: DEFAULT_CONTACT_KEY.to_owned(),
            details_page: DEFAULT_DETAILS_PAGE.to_owned(),
            slide_interval_ms: DEFAULT_SLIDE_INTERVAL_MS,
            reveal_delay_ms: DEFAULT_REVEAL_DELAY_MS,
            reveal_threshold: DEFAULT_REVEAL_THRESHOLD,
            back_to_top_offset: DEFAULT_BACK_TO_TOP_OFFSET,
            log_level: "info".to_owned(),
        }
    }
}

impl PageConfig {
    /// Parse and validate a JSON override.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed JSON or unknown keys and
    /// [`ConfigError::Invalid`] for out-of-range values.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.theme_key.trim().is_empty() {
            return Err(invalid("themeKey", "must not be empty"));
        }
        if self.contact_key.trim().is_empty() {
            return Err(invalid("contactKey", "must not be empty"));
        }
        if self.details_page.trim().is_empty() {
            return Err(invalid("detailsPage", "must not be empty"));
        }
        if self.slide_interval_ms == 0 {
            return Err(invalid("slideIntervalMs", "must be positive"));
        }
        if !(self.reveal_threshold > 0.0 && self.reveal_threshold <= 1.0) {
            return Err(invalid("revealThreshold", format!("{} is outside (0, 1]", self.reveal_threshold)));
        }
        if !self.back_to_top_offset.is_finite() || self.back_to_top_offset < 0.0 {
            return Err(invalid("backToTopOffset", "must be a non-negative number"));
        }
        Ok(())
    }

    /// Console log level; unknown names fall back to `info`.
    pub fn log_level(&self) -> log::Level {
        self.log_level.parse().unwrap_or(log::Level::Info)
    }
}

fn invalid(field: &'static str, reason: impl Into<String>) -> ConfigError {
    ConfigError::Invalid { field, reason: reason.into() }
}
