//! Interactive chat mode for translation sessions.
//!
//! Provides a REPL-style interface with slash commands for switching and
//! swapping languages.

/// Slash command parsing and autocomplete.
pub mod command;
mod session;
mod state;
mod ui;

pub use session::{ChatSession, SessionConfig};
pub use state::TranslatorState;
