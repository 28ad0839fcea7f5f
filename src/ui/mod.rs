//! Terminal UI layer for interactive chat sessions.
//!
//! - [`chat_loop`]: terminal setup and the event loop that feeds keys to the
//!   controller and applies request outcomes.
//! - [`renderer`], [`transcript`] and [`wrap`]: frame composition.
//! - [`view`]: input widget and scroll state.
//!
//! Ownership boundary: this layer presents and captures interaction state, while
//! [`crate::core`] owns the conversation and talks to the backend.

pub mod chat_loop;
pub mod renderer;
pub mod transcript;
pub mod view;
pub mod wrap;
