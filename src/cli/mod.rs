//! Command-line interface parsing and handling
//!
//! This module handles parsing command-line arguments and executing the appropriate commands.

pub mod say;

use std::error::Error;
use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use tracing::warn;

use crate::api::HttpAssistant;
use crate::cli::say::run_say;
use crate::core::config::data::path_display;
use crate::core::config::defaults::SETTABLE_KEYS;
use crate::core::config::{Config, Overrides, Settings};
use crate::core::controller::ConversationController;
use crate::core::session::SessionContext;
use crate::core::storage::{FileSessionStore, MemorySessionStore, SessionStore};
use crate::ui::chat_loop::run_chat;
use crate::utils::diagnostics::{init_tracing, LogTarget};

#[derive(Parser)]
#[command(name = "nimdie", version)]
#[command(about = "A terminal chat client for the Nimdie Legal assistant")]
#[command(
    long_about = "Nimdie is a full-screen terminal chat client for the Nimdie Legal assistant \
service. Each question is sent with a session identifier that is created once and \
kept in your data directory, so the service can follow the conversation across runs.\n\n\
Environment Variables:\n\
  NIMDIE_BASE_URL   Assistant service URL (defaults to http://localhost:5001)\n\
  NIMDIE_LOG        Log filter, e.g. 'debug' (logs go to --trace-log in chat mode)\n\n\
Controls:\n\
  Type              Enter your message in the input field\n\
  Enter             Send the message\n\
  Alt+Enter         Insert a new line\n\
  PgUp/PgDn         Scroll through the conversation\n\
  Ctrl+C            Quit the application"
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Base URL of the assistant service
    #[arg(long, global = true, value_name = "URL")]
    pub base_url: Option<String>,

    /// Read configuration from this file instead of the default location
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Keep the session identifier in this file
    #[arg(long, global = true, value_name = "PATH")]
    pub session_file: Option<PathBuf>,

    /// Write diagnostic logs to this file
    #[arg(long, global = true, value_name = "PATH")]
    pub trace_log: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the chat interface (default)
    Chat,
    /// Send a single prompt and print the reply
    Say {
        /// Prompt text (multiple words are joined with spaces)
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        prompt: Vec<String>,
    },
    /// Show the session identifier and where it is stored
    Session,
    /// Show the effective configuration
    Config,
    /// Set a configuration value
    Set {
        /// Configuration key (base-url, ask-path, session-file, title)
        key: String,
        /// Value to set (multiple words are joined with spaces)
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        value: Vec<String>,
    },
    /// Unset a configuration value
    Unset {
        /// Configuration key to unset
        key: String,
    },
}

pub fn main() -> Result<(), Box<dyn Error>> {
    tokio::runtime::Runtime::new()?.block_on(async_main())
}

async fn async_main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();
    let command = args.command.unwrap_or(Commands::Chat);

    let interactive = matches!(command, Commands::Chat);
    init_tracing(LogTarget::for_command(
        args.trace_log.as_deref(),
        interactive,
    ))?;

    let config_path = args.config.clone().or_else(Config::get_config_path);
    let config = match &config_path {
        Some(path) => Config::load_from_path(path)?,
        None => Config::default(),
    };
    let overrides = Overrides {
        base_url: args.base_url.clone(),
        session_file: args.session_file.clone(),
    };
    let settings = config.settings(&overrides);

    match command {
        Commands::Chat => {
            let controller = build_controller(&settings);
            run_chat(controller, settings.title.clone()).await
        }
        Commands::Say { prompt } => run_say(prompt, build_controller(&settings)).await,
        Commands::Session => {
            let mut store = open_store(&settings);
            let session = SessionContext::initialize(store.as_mut());
            println!("{}", session.session_id());
            println!("  storage: {}", store.describe());
            if !session.is_persisted() {
                println!("  ⚠️  could not be saved; valid for this run only");
            }
            Ok(())
        }
        Commands::Config => {
            if let Some(path) = &config_path {
                println!("Config file: {}", path_display(path));
            }
            config.print_all(&settings);
            Ok(())
        }
        Commands::Set { key, value } => {
            let path = require_config_path(config_path)?;
            let value = value.join(" ");
            if value.trim().is_empty() {
                eprintln!("⚠️  Specify a value to set.");
                eprintln!("Example: nimdie set base-url http://localhost:5001");
                std::process::exit(1);
            }
            let mut config = config;
            if !config.set_value(&key, value.clone()) {
                print_unknown_key(&key);
                std::process::exit(1);
            }
            config.save_to_path(&path)?;
            println!("✅ Set {key} to: {value}");
            Ok(())
        }
        Commands::Unset { key } => {
            let path = require_config_path(config_path)?;
            let mut config = config;
            if !config.unset_value(&key) {
                print_unknown_key(&key);
                std::process::exit(1);
            }
            config.save_to_path(&path)?;
            println!("✅ Unset {key}");
            Ok(())
        }
    }
}

fn open_store(settings: &Settings) -> Box<dyn SessionStore> {
    match &settings.session_file {
        Some(path) => Box::new(FileSessionStore::new(path)),
        None => {
            warn!("no data directory available; the session id will not persist");
            Box::new(MemorySessionStore::new())
        }
    }
}

fn build_controller(settings: &Settings) -> ConversationController {
    let mut store = open_store(settings);
    let session = SessionContext::initialize(store.as_mut());
    let backend = HttpAssistant::new(
        reqwest::Client::new(),
        &settings.base_url,
        &settings.ask_path,
    );
    ConversationController::new(session, Arc::new(backend))
}

fn require_config_path(path: Option<PathBuf>) -> Result<PathBuf, Box<dyn Error>> {
    path.ok_or_else(|| "Could not determine the config directory; pass --config <PATH>".into())
}

fn print_unknown_key(key: &str) {
    eprintln!("❌ Unknown config key: {key}");
    eprintln!("   Known keys: {}", SETTABLE_KEYS.join(", "));
}
