use serde::{
    Deserialize,
    Serialize,
};

use crate::{
    core::models::Range,
    persistence::{
        load_json_or_default,
        save_json,
    },
};

pub const SETTINGS_FILE: &str = "settings.json";
pub const API_URL_ENV: &str = "WORDSHEET_API_URL";
pub const DEFAULT_API_URL: &str = "http://localhost:5000";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SettingsData {
    pub api_base_url: String,
    pub default_quiz_count: u32,
    pub default_range: Range,
    pub shuffle_questions: bool,
    pub offline_check: bool,
    pub dark_mode: bool,
    pub font_path: Option<String>,
}

impl Default for SettingsData {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_URL.to_string(),
            default_quiz_count: 10,
            default_range: Range::default(),
            shuffle_questions: false,
            offline_check: false,
            dark_mode: true,
            font_path: None,
        }
    }
}

impl SettingsData {
    /// Loads saved settings, then lets `WORDSHEET_API_URL` override the API location.
    pub fn load() -> Self {
        let settings = load_json_or_default::<SettingsData>(SETTINGS_FILE);
        settings.with_env_override(std::env::var(API_URL_ENV).ok())
    }

    pub fn save(&self) {
        if let Err(e) = save_json(self, SETTINGS_FILE) {
            log::error!("Failed to save settings: {e}");
        }
    }

    pub fn with_env_override(mut self, api_url: Option<String>) -> Self {
        if let Some(url) = api_url.filter(|url| !url.trim().is_empty()) {
            log::info!("{API_URL_ENV} overrides API URL with {url}");
            self.api_base_url = url;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_file_fills_in_defaults() {
        let settings: SettingsData =
            serde_json::from_str(r#"{"api_base_url": "http://vocab.local", "offline_check": true}"#)
                .unwrap();
        assert_eq!(settings.api_base_url, "http://vocab.local");
        assert!(settings.offline_check);
        assert_eq!(settings.default_quiz_count, 10);
        assert_eq!(settings.default_range, Range::new(1, 500));
    }

    #[test]
    fn env_override_replaces_url_unless_blank() {
        let settings = SettingsData::default().with_env_override(Some("http://10.0.0.2:8080".into()));
        assert_eq!(settings.api_base_url, "http://10.0.0.2:8080");

        let settings = SettingsData::default().with_env_override(Some("  ".into()));
        assert_eq!(settings.api_base_url, DEFAULT_API_URL);
    }
}
