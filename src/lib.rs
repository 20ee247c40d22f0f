//! Minimal IRC Bot Library
//!
//! Connects to an IRC server over plain TCP, registers, joins a fixed set
//! of channels and answers prefixed chat commands in the channel they
//! came from.
//!
//! # Features
//! - USER/NICK registration and fire-and-forget JOINs
//! - PING keep-alive answering
//! - `>>echo` and `>>count` built-in commands
//! - Pluggable command table injected at construction
//!
//! # Architecture
//! One task owns the connection and handles one line at a time:
//! - `Session` reads a line, answers PINGs, parses everything else
//! - `message::parse_command` turns a chat line into an `Invocation`
//! - `Commands` maps the command name to a handler and produces the reply
//!
//! # Example
//! ```ignore
//! use ircbot::{BotConfig, Commands, Session};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), ircbot::BotError> {
//!     let config = BotConfig::default();
//!     let mut session = Session::connect(&config, Commands::builtin()).await?;
//!     session.read_and_respond().await
//! }
//! ```

pub mod config;
pub mod error;
pub mod handler;
pub mod message;
pub mod session;
pub mod types;

// Re-export main types for convenience
pub use config::BotConfig;
pub use error::{BotError, ParseError};
pub use handler::{CommandFn, Commands, CommandsBuilder};
pub use message::{ClientMessage, Invocation};
pub use session::Session;
pub use types::{Channel, Nick};
