//! Basic type definitions for the bot
//!
//! Provides newtype wrappers for type safety:
//! - `Nick`: the display name the bot registers with
//! - `Channel`: a channel name such as `#rust`

use serde::Deserialize;

/// Bot nickname (newtype pattern)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
#[serde(transparent)]
pub struct Nick(pub String);

impl From<&str> for Nick {
    fn from(nick: &str) -> Self {
        Self(nick.to_string())
    }
}

impl std::fmt::Display for Nick {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Channel name
///
/// Taken verbatim from config or from the PRIVMSG target field;
/// no case folding or validation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
#[serde(transparent)]
pub struct Channel(pub String);

impl From<&str> for Channel {
    fn from(name: &str) -> Self {
        Self(name.to_string())
    }
}

impl std::fmt::Display for Channel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
