use std::path::PathBuf;

use crate::core::config::data::{Config, Settings};

pub const DEFAULT_BASE_URL: &str = "http://localhost:5001";
pub const DEFAULT_ASK_PATH: &str = "api/ask";
pub const DEFAULT_TITLE: &str = "Nimdie Legal";

/// Environment variable overriding the configured base URL.
pub const BASE_URL_ENV: &str = "NIMDIE_BASE_URL";

/// Keys accepted by `nimdie set` / `nimdie unset`.
pub const SETTABLE_KEYS: [&str; 4] = ["base-url", "ask-path", "session-file", "title"];

/// Command-line values that take precedence over the config file.
#[derive(Debug, Default, Clone)]
pub struct Overrides {
    pub base_url: Option<String>,
    pub session_file: Option<PathBuf>,
}

impl Config {
    /// Resolve effective settings: command line, then environment, then the
    /// config file, then built-in defaults.
    pub fn settings(&self, overrides: &Overrides) -> Settings {
        self.settings_with_env(overrides, std::env::var(BASE_URL_ENV).ok())
    }

    pub(crate) fn settings_with_env(
        &self,
        overrides: &Overrides,
        env_base_url: Option<String>,
    ) -> Settings {
        let base_url = non_empty(overrides.base_url.clone())
            .or_else(|| non_empty(env_base_url))
            .or_else(|| non_empty(self.base_url.clone()))
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        let ask_path = self
            .ask_path
            .clone()
            .unwrap_or_else(|| DEFAULT_ASK_PATH.to_string());

        let session_file = overrides
            .session_file
            .clone()
            .or_else(|| self.session_file.clone())
            .or_else(Config::default_session_path);

        let title = non_empty(self.title.clone()).unwrap_or_else(|| DEFAULT_TITLE.to_string());

        Settings {
            base_url,
            ask_path,
            session_file,
            title,
        }
    }

    /// Set a value by its command-line key. Returns false for unknown keys.
    pub fn set_value(&mut self, key: &str, value: String) -> bool {
        match key {
            "base-url" => self.base_url = Some(value),
            "ask-path" => self.ask_path = Some(value),
            "session-file" => self.session_file = Some(PathBuf::from(value)),
            "title" => self.title = Some(value),
            _ => return false,
        }
        true
    }

    pub fn unset_value(&mut self, key: &str) -> bool {
        match key {
            "base-url" => self.base_url = None,
            "ask-path" => self.ask_path = None,
            "session-file" => self.session_file = None,
            "title" => self.title = None,
            _ => return false,
        }
        true
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
