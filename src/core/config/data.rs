use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Serialize, Deserialize, Default, Clone, PartialEq, Eq)]
pub struct Config {
    /// Base URL of the assistant service (e.g., "http://localhost:5001")
    pub base_url: Option<String>,
    /// Path of the question endpoint, appended to `base_url`
    pub ask_path: Option<String>,
    /// File holding the session identifier; defaults to the data directory
    pub session_file: Option<PathBuf>,
    /// Heading shown at the top of the chat screen
    pub title: Option<String>,
}

/// Values the client actually runs with, after defaults and overrides.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub base_url: String,
    pub ask_path: String,
    pub session_file: Option<PathBuf>,
    pub title: String,
}

/// Get a user-friendly display string for a path
/// Converts absolute paths to use ~ notation on Unix-like systems when possible
///
/// # Examples
/// - Unix: `/home/user/.local/share/nimdie/session.toml` → `~/.local/share/nimdie/session.toml`
/// - Windows: `C:\\Users\\user\\AppData\\Roaming\\nimdie\\data\\session.toml` (unchanged)
pub fn path_display<P: AsRef<Path>>(path: P) -> String {
    let path = path.as_ref();

    #[cfg(unix)]
    {
        if let Some(home) = std::env::var_os("HOME") {
            let home_path = PathBuf::from(home);
            if let Ok(relative) = path.strip_prefix(&home_path) {
                return format!("~/{}", relative.display());
            }
        }
    }

    path.display().to_string()
}
