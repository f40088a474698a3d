//! Subcommand implementations.

/// Chat mode command handler.
pub mod chat;

/// Configure command handler.
pub mod configure;

/// Provider listing command handler.
pub mod providers;

/// HTTP service command handler.
pub mod serve;

/// One-shot translation command handler.
pub mod translate;
