//! Nimdie is a terminal chat client for the Nimdie Legal assistant service.
//!
//! The crate is organized around a small set of collaborating layers:
//! - [`core`] owns the conversation state machine, the controller that sends
//!   prompts, the persistent session identity, and configuration.
//! - [`api`] defines the request/reply payloads and the HTTP backend.
//! - [`ui`] renders the terminal interface and runs the interactive event loop.
//!
//! Runtime entrypoints live in the binary crate (`src/main.rs`) and route
//! through [`crate::cli::main`], which builds a
//! [`core::controller::ConversationController`] and dispatches into
//! [`ui::chat_loop`] for interactive sessions.

pub mod api;
pub mod cli;
pub mod core;
pub mod ui;
pub mod utils;
