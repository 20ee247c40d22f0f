//! Error types for the bot
//!
//! Defines session-level errors and wire-line parse errors.
//! Uses thiserror for ergonomic error definitions.

use thiserror::Error;

/// Session-level errors
///
/// Everything here except `Config`/`ConfigRead` is raised by the
/// connection itself and ends the read loop.
#[derive(Debug, Error)]
pub enum BotError {
    /// Could not dial the IRC server (fatal)
    #[error("failed to connect to {addr}: {source}")]
    Connect {
        addr: String,
        #[source]
        source: std::io::Error,
    },

    /// IO error on the transport (fatal)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The server closed the connection (fatal)
    #[error("connection closed by server")]
    ConnectionClosed,

    /// Config file could not be read
    #[error("failed to read config {path}: {source}")]
    ConfigRead {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Config file is not valid TOML for `BotConfig`
    #[error("invalid config: {0}")]
    Config(#[from] toml::de::Error),
}

/// Wire-line parse errors
///
/// Raised only for lines that look like a command for us but whose
/// envelope is too short to name a target channel.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The middle colon-segment has fewer than three space-separated tokens
    #[error("no target channel in '{segment}'")]
    MissingChannel { segment: String },
}
