//! # tl-relay - Translation relay with provider fallback
//!
//! `tl-relay` translates text by trying a configured chain of translation
//! services in order and returning the first success. It can be used as a
//! one-shot CLI, an interactive chat, or an HTTP service.
//!
//! ## Quick Start
//!
//! ```bash
//! # Translate a file
//! tl-relay --from en --to ja ./notes.txt
//!
//! # Translate from stdin
//! echo "Hello" | tl-relay -t fr
//!
//! # Run the HTTP service
//! tl-relay serve --bind 127.0.0.1:3000
//!
//! # Interactive chat mode
//! tl-relay chat
//! ```
//!
//! ## Configuration
//!
//! Settings are stored in `~/.config/tl-relay/config.toml`:
//!
//! ```toml
//! [relay]
//! chain = ["libretranslate", "mymemory"]
//! timeout_secs = 10
//! from = "en"
//! to = "es"
//!
//! [providers.libretranslate]
//! kind = "libretranslate"
//! endpoint = "https://libretranslate.com/translate"
//! api_key_env = "LIBRETRANSLATE_API_KEY"
//! ```

/// Interactive chat mode for translation sessions.
pub mod chat;

/// Command-line interface definitions and handlers.
pub mod cli;

/// Configuration file management and provider chain construction.
pub mod config;

/// Input reading from files and stdin.
pub mod input;

/// Global output configuration and log setup.
pub mod output;

/// XDG-style path utilities for configuration.
pub mod paths;

/// HTTP service exposing the translation endpoint.
pub mod server;

/// Translation providers and the fallback orchestrator.
pub mod translation;

/// Terminal UI components (spinner, colors).
pub mod ui;
