//! Subcommand implementations.

/// Configure command handler.
pub mod configure;

/// Language and pair listing handlers.
pub mod languages;

/// Non-interactive lookup handler.
pub mod lookup;

/// Interactive wizard handler.
pub mod translate;
