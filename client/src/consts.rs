//! DOM contract shared with the static page markup.

// ── Element ids ─────────────────────────────────────────────────

pub const CONTACT_FORM_ID: &str = "contactForm";
pub const NAME_INPUT_ID: &str = "name";
pub const EMAIL_INPUT_ID: &str = "email";
pub const MESSAGE_INPUT_ID: &str = "message";
pub const FORM_MESSAGE_ID: &str = "form-message";
pub const CANVAS_ID: &str = "myCanvas";
pub const PREV_BUTTON_ID: &str = "prevBtn";
pub const NEXT_BUTTON_ID: &str = "nextBtn";
pub const THEME_TOGGLE_ID: &str = "themeToggle";
pub const BACK_TO_TOP_ID: &str = "backToTop";
pub const CURRENT_YEAR_ID: &str = "current-year";

/// Optional `<script type="application/json">` holding a [`crate::config::PageConfig`].
pub const CONFIG_ELEMENT_ID: &str = "folio-config";

// ── Selectors ───────────────────────────────────────────────────

pub const PROGRESS_FILL_SELECTOR: &str = ".progress-fill";
pub const PROJECT_CARD_SELECTOR: &str = ".project-card";
pub const SLIDE_SELECTOR: &str = ".slider-slide";
pub const INDICATOR_SELECTOR: &str = ".dot";
pub const ERROR_MESSAGE_SELECTOR: &str = ".error-message";
pub const THEME_ICON_SELECTOR: &str = ".theme-icon";

// ── Classes ─────────────────────────────────────────────────────

pub const ACTIVE_CLASS: &str = "active";
pub const VISIBLE_CLASS: &str = "visible";
pub const LIGHT_MODE_CLASS: &str = "light-mode";
pub const PROJECT_LINK_CLASS: &str = "project-link";
pub const LIGHT_ICON_CLASS: &str = "fa-lightbulb-o";
pub const DARK_ICON_CLASS: &str = "fa-moon-o";
pub const FORM_MESSAGE_CLASS: &str = "form-message";
pub const FORM_MESSAGE_ERROR_CLASS: &str = "form-message error";

// ── Attributes ──────────────────────────────────────────────────

pub const DATA_PROGRESS: &str = "data-progress";
pub const DATA_PROJECT_URL: &str = "data-project-url";
pub const DATA_GITHUB_URL: &str = "data-github-url";
