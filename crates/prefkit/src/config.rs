// File: src/config.rs
// Purpose: Page configuration parsing from prefkit.toml

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Page configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageConfig {
    #[serde(default = "default_brand_name")]
    pub brand_name: String,

    /// Debounce window for re-rendering a touched field on rapid input
    #[serde(default = "default_input_debounce_ms")]
    pub input_debounce_ms: u64,

    #[serde(default)]
    pub submit: SubmitConfig,

    #[serde(default)]
    pub redirect: RedirectConfig,

    #[serde(default)]
    pub feedback: FeedbackConfig,

    #[serde(default)]
    pub notifications: NotificationConfig,
}

/// Submission flow configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmitConfig {
    /// Delay before a submission is considered settled
    #[serde(default = "default_submit_settle_ms")]
    pub settle_ms: u64,
}

/// Post-submit redirect configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RedirectConfig {
    /// Destination after a successful submission; no redirect when unset
    #[serde(default)]
    pub url: Option<String>,

    #[serde(default = "default_redirect_delay_ms")]
    pub delay_ms: u64,
}

/// Feedback prompt configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedbackConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// Delay before the feedback bar appears
    #[serde(default = "default_feedback_show_delay_ms")]
    pub show_delay_ms: u64,

    /// Delay before a feedback submission is considered settled
    #[serde(default = "default_feedback_settle_ms")]
    pub settle_ms: u64,
}

/// Notification configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotificationConfig {
    /// Auto-dismiss window; zero or negative means sticky
    #[serde(default = "default_notification_duration_ms")]
    pub default_duration_ms: i64,
}

// Default values
fn default_brand_name() -> String {
    "Truestory".to_string()
}

fn default_input_debounce_ms() -> u64 {
    150
}

fn default_submit_settle_ms() -> u64 {
    1500
}

fn default_redirect_delay_ms() -> u64 {
    2000
}

fn default_feedback_show_delay_ms() -> u64 {
    3000
}

fn default_feedback_settle_ms() -> u64 {
    1000
}

fn default_notification_duration_ms() -> i64 {
    5000
}

fn default_true() -> bool {
    true
}

// Default implementations
impl Default for PageConfig {
    fn default() -> Self {
        Self {
            brand_name: default_brand_name(),
            input_debounce_ms: default_input_debounce_ms(),
            submit: SubmitConfig::default(),
            redirect: RedirectConfig::default(),
            feedback: FeedbackConfig::default(),
            notifications: NotificationConfig::default(),
        }
    }
}

impl Default for SubmitConfig {
    fn default() -> Self {
        Self {
            settle_ms: default_submit_settle_ms(),
        }
    }
}

impl Default for RedirectConfig {
    fn default() -> Self {
        Self {
            url: None,
            delay_ms: default_redirect_delay_ms(),
        }
    }
}

impl Default for FeedbackConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            show_delay_ms: default_feedback_show_delay_ms(),
            settle_ms: default_feedback_settle_ms(),
        }
    }
}

impl Default for NotificationConfig {
    fn default() -> Self {
        Self {
            default_duration_ms: default_notification_duration_ms(),
        }
    }
}

impl PageConfig {
    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        // Missing or empty file means defaults
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;

        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: PageConfig = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {:?}", path))?;

        Ok(config)
    }

    /// Load configuration from the default path (./prefkit.toml)
    pub fn load_default() -> Result<Self> {
        Self::load("prefkit.toml")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = PageConfig::default();
        assert_eq!(config.brand_name, "Truestory");
        assert_eq!(config.input_debounce_ms, 150);
        assert_eq!(config.submit.settle_ms, 1500);
        assert_eq!(config.redirect.url, None);
        assert_eq!(config.redirect.delay_ms, 2000);
        assert!(config.feedback.enabled);
        assert_eq!(config.feedback.show_delay_ms, 3000);
        assert_eq!(config.feedback.settle_ms, 1000);
        assert_eq!(config.notifications.default_duration_ms, 5000);
    }

    #[test]
    fn test_parse_partial_config() {
        let toml_str = r#"
            brand_name = "Acme"

            [redirect]
            url = "https://example.com/thanks"

            [feedback]
            enabled = false
        "#;

        let config: PageConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.brand_name, "Acme");
        assert_eq!(config.redirect.url.as_deref(), Some("https://example.com/thanks"));
        assert_eq!(config.redirect.delay_ms, 2000); // untouched default
        assert!(!config.feedback.enabled);
        assert_eq!(config.submit.settle_ms, 1500);
    }

    #[test]
    fn test_parse_empty_config_uses_defaults() {
        let config: PageConfig = toml::from_str("").unwrap();
        assert_eq!(config.brand_name, "Truestory");
        assert!(config.feedback.enabled);
    }
}
