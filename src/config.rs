//! Page configuration: element ids, selectors, class names, messages, delays.
//!
//! Every field has a default matching the shipped markup, so an empty JSON
//! object (or no config at all) yields a working page. Sections can be
//! overridden piecemeal from the `folio-config` JSON island.

use serde::Deserialize;

use crate::state::theme::Theme;

pub const DEFAULT_SUBMIT_DELAY_MS: u32 = 1500;
pub const DEFAULT_STATUS_CLEAR_MS: u32 = 5000;
pub const DEFAULT_HEADER_OFFSET: f64 = 120.0;
pub const DEFAULT_SCROLL_THRESHOLD: f64 = 50.0;
pub const DEFAULT_STORAGE_KEY: &str = "theme";

/// Errors produced while loading page configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The JSON document could not be parsed.
    #[error("config parse failed: {0}")]
    Parse(String),

    /// A value parsed but is unusable.
    #[error("invalid config value for {field}: {reason}")]
    Invalid { field: &'static str, reason: String },
}

/// Full page configuration.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    pub nav: NavConfig,
    pub theme: ThemeConfig,
    pub projects: ProjectsConfig,
    pub contact: ContactConfig,
    pub scroll: ScrollConfig,
    pub header: HeaderConfig,
    pub footer: FooterConfig,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct NavConfig {
    pub trigger_id: String,
    pub panel_selector: String,
    pub link_selector: String,
    pub trigger_open_class: String,
    pub panel_open_class: String,
}

impl Default for NavConfig {
    fn default() -> Self {
        Self {
            trigger_id: "hamburger-menu".to_owned(),
            panel_selector: ".header__menu-mobile".to_owned(),
            link_selector: "a".to_owned(),
            trigger_open_class: "hamburger--open".to_owned(),
            panel_open_class: "active".to_owned(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    pub toggle_id: String,
    pub icon_selector: String,
    pub storage_key: String,
    pub root_attribute: String,
    pub default_theme: Theme,
    pub dark_icon_class: String,
    pub light_icon_class: String,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            toggle_id: "theme-toggle".to_owned(),
            icon_selector: "i".to_owned(),
            storage_key: DEFAULT_STORAGE_KEY.to_owned(),
            root_attribute: "data-theme".to_owned(),
            default_theme: Theme::Dark,
            dark_icon_class: "fas fa-moon".to_owned(),
            light_icon_class: "fas fa-sun".to_owned(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ProjectsConfig {
    pub item_selector: String,
    pub preview_selector: String,
    pub id_attribute: String,
    pub active_class: String,
}

impl Default for ProjectsConfig {
    fn default() -> Self {
        Self {
            item_selector: ".project-list-item".to_owned(),
            preview_selector: ".project-preview".to_owned(),
            id_attribute: "data-project".to_owned(),
            active_class: "active".to_owned(),
        }
    }
}

/// Ids of one input and its inline error element.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct FieldIds {
    pub input: String,
    pub error: String,
}

impl FieldIds {
    fn new(input: &str, error: &str) -> Self {
        Self { input: input.to_owned(), error: error.to_owned() }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ContactConfig {
    pub form_id: String,
    pub status_id: String,
    pub name: FieldIds,
    pub email: FieldIds,
    pub message: FieldIds,
    pub submit_selector: String,
    pub control_selector: String,
    pub busy_label_html: String,
    pub required_message: String,
    pub invalid_email_message: String,
    pub summary_message: String,
    pub success_message: String,
    pub error_color: String,
    pub success_color: String,
    pub submit_delay_ms: u32,
    pub status_clear_ms: u32,
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            form_id: "contact-form".to_owned(),
            status_id: "form-status".to_owned(),
            name: FieldIds::new("contact-name", "name-error"),
            email: FieldIds::new("contact-email", "email-error"),
            message: FieldIds::new("contact-message", "message-error"),
            submit_selector: "button[type=\"submit\"]".to_owned(),
            control_selector: "input, textarea".to_owned(),
            busy_label_html: "<i class=\"fas fa-spinner fa-spin\" aria-hidden=\"true\"></i> Sending...".to_owned(),
            required_message: "This field is required".to_owned(),
            invalid_email_message: "Please enter a valid email address".to_owned(),
            summary_message: "Please fix the errors above before submitting.".to_owned(),
            success_message: "Message sent successfully! I'll get back to you soon.".to_owned(),
            error_color: "#ef4444".to_owned(),
            success_color: "var(--accent-color)".to_owned(),
            submit_delay_ms: DEFAULT_SUBMIT_DELAY_MS,
            status_clear_ms: DEFAULT_STATUS_CLEAR_MS,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ScrollConfig {
    pub anchor_selector: String,
    pub header_offset: f64,
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self { anchor_selector: "a[href^=\"#\"]".to_owned(), header_offset: DEFAULT_HEADER_OFFSET }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct HeaderConfig {
    pub selector: String,
    pub scrolled_class: String,
    pub threshold: f64,
}

impl Default for HeaderConfig {
    fn default() -> Self {
        Self {
            selector: ".header".to_owned(),
            scrolled_class: "header--scrolled".to_owned(),
            threshold: DEFAULT_SCROLL_THRESHOLD,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct FooterConfig {
    pub year_id: String,
}

impl Default for FooterConfig {
    fn default() -> Self {
        Self { year_id: "current-year".to_owned() }
    }
}

impl PageConfig {
    /// Parse and validate configuration from a JSON document.
    ///
    /// Missing sections and fields take their defaults.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let cfg: Self = serde_json::from_str(raw).map_err(|e| ConfigError::Parse(e.to_string()))?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Check values that would silently break a component if accepted.
    ///
    /// Ids and selectors must be non-blank. Classes toggled with
    /// `classList` must be a single token.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let nav = &self.nav;
        non_empty("nav.trigger_id", &nav.trigger_id)?;
        non_empty("nav.panel_selector", &nav.panel_selector)?;
        non_empty("nav.link_selector", &nav.link_selector)?;
        class_token("nav.trigger_open_class", &nav.trigger_open_class)?;
        class_token("nav.panel_open_class", &nav.panel_open_class)?;

        let theme = &self.theme;
        non_empty("theme.toggle_id", &theme.toggle_id)?;
        non_empty("theme.icon_selector", &theme.icon_selector)?;
        non_empty("theme.storage_key", &theme.storage_key)?;
        non_empty("theme.root_attribute", &theme.root_attribute)?;
        non_empty("theme.dark_icon_class", &theme.dark_icon_class)?;
        non_empty("theme.light_icon_class", &theme.light_icon_class)?;

        let projects = &self.projects;
        non_empty("projects.item_selector", &projects.item_selector)?;
        non_empty("projects.preview_selector", &projects.preview_selector)?;
        non_empty("projects.id_attribute", &projects.id_attribute)?;
        class_token("projects.active_class", &projects.active_class)?;

        let contact = &self.contact;
        non_empty("contact.form_id", &contact.form_id)?;
        non_empty("contact.status_id", &contact.status_id)?;
        non_empty("contact.name.input", &contact.name.input)?;
        non_empty("contact.name.error", &contact.name.error)?;
        non_empty("contact.email.input", &contact.email.input)?;
        non_empty("contact.email.error", &contact.email.error)?;
        non_empty("contact.message.input", &contact.message.input)?;
        non_empty("contact.message.error", &contact.message.error)?;
        non_empty("contact.submit_selector", &contact.submit_selector)?;
        non_empty("contact.control_selector", &contact.control_selector)?;

        non_empty("scroll.anchor_selector", &self.scroll.anchor_selector)?;
        non_negative("scroll.header_offset", self.scroll.header_offset)?;

        non_empty("header.selector", &self.header.selector)?;
        class_token("header.scrolled_class", &self.header.scrolled_class)?;
        non_negative("header.threshold", self.header.threshold)?;

        non_empty("footer.year_id", &self.footer.year_id)?;
        Ok(())
    }
}

fn non_negative(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::Invalid { field, reason: format!("expected a finite non-negative number, got {value}") })
    }
}

fn non_empty(field: &'static str, value: &str) -> Result<(), ConfigError> {
    if value.trim().is_empty() {
        Err(ConfigError::Invalid { field, reason: "must not be empty".to_owned() })
    } else {
        Ok(())
    }
}

fn class_token(field: &'static str, value: &str) -> Result<(), ConfigError> {
    non_empty(field, value)?;
    if value.chars().any(char::is_whitespace) {
        Err(ConfigError::Invalid { field, reason: format!("'{value}' is not a single class name") })
    } else {
        Ok(())
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
