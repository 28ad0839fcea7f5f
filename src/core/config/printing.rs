use crate::core::config::data::{path_display, Config, Settings};

impl Config {
    pub fn print_all(&self, settings: &Settings) {
        println!("Current configuration:");
        print_value("base-url", self.base_url.as_deref(), &settings.base_url);
        print_value("ask-path", self.ask_path.as_deref(), &settings.ask_path);

        let configured_session = self.session_file.as_ref().map(path_display);
        let effective_session = settings
            .session_file
            .as_ref()
            .map(path_display)
            .unwrap_or_else(|| "(memory only)".to_string());
        print_value(
            "session-file",
            configured_session.as_deref(),
            &effective_session,
        );

        print_value("title", self.title.as_deref(), &settings.title);
    }
}

fn print_value(key: &str, configured: Option<&str>, effective: &str) {
    match configured {
        Some(value) if value == effective => println!("  {key}: {value}"),
        Some(value) => println!("  {key}: {value} (overridden: {effective})"),
        None => println!("  {key}: {effective} (default)"),
    }
}
