//! Bot configuration
//!
//! Every field has a default, so an empty or missing config file gives
//! the stock bot.

use std::path::Path;

use serde::Deserialize;

use crate::error::BotError;
use crate::types::{Channel, Nick};

/// Default IRC server address
pub const DEFAULT_SERVER: &str = "irc.freenode.net:6667";

/// Default command trigger prefix
pub const DEFAULT_PREFIX: &str = ">>";

/// Default nickname
pub const DEFAULT_NICK: &str = "carnelianbot";

/// Construction-time settings for a `Session`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct BotConfig {
    /// `host:port` to dial
    pub server: String,
    /// Nickname to register with
    pub nick: Nick,
    /// Channels joined after registration, in order
    pub channels: Vec<Channel>,
    /// Text a chat message must start with to be a command
    pub command_prefix: String,
}

impl Default for BotConfig {
    fn default() -> Self {
        Self {
            server: DEFAULT_SERVER.to_string(),
            nick: Nick::from(DEFAULT_NICK),
            channels: vec![
                Channel::from("#carneliantest"),
                Channel::from("#carneliantest2"),
            ],
            command_prefix: DEFAULT_PREFIX.to_string(),
        }
    }
}

impl BotConfig {
    /// Parse a TOML document
    pub fn from_toml_str(contents: &str) -> Result<Self, BotError> {
        Ok(toml::from_str(contents)?)
    }

    /// Read and parse a TOML config file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, BotError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|source| BotError::ConfigRead {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml_str(&contents)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn test_defaults() {
        let config = BotConfig::default();
        assert_eq!(config.server, "irc.freenode.net:6667");
        assert_eq!(config.command_prefix, ">>");
        assert_eq!(
            config.channels,
            vec![Channel::from("#carneliantest"), Channel::from("#carneliantest2")]
        );
    }

    #[test]
    fn test_empty_document_is_default() {
        assert_eq!(BotConfig::from_toml_str("").unwrap(), BotConfig::default());
    }

    #[test]
    fn test_partial_override() {
        let config = BotConfig::from_toml_str(
            r##"
            nick = "rustbot"
            channels = ["#rust"]
            "##,
        )
        .unwrap();

        assert_eq!(config.nick, Nick::from("rustbot"));
        assert_eq!(config.channels, vec![Channel::from("#rust")]);
        assert_eq!(config.server, DEFAULT_SERVER);
        assert_eq!(config.command_prefix, DEFAULT_PREFIX);
    }

    #[test]
    fn test_invalid_toml() {
        let err = BotConfig::from_toml_str("channels = 3").unwrap_err();
        assert!(matches!(err, BotError::Config(_)));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "server = \"127.0.0.1:6667\"").unwrap();
        writeln!(file, "command_prefix = \"!\"").unwrap();

        let config = BotConfig::load(file.path()).unwrap();
        assert_eq!(config.server, "127.0.0.1:6667");
        assert_eq!(config.command_prefix, "!");
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = BotConfig::load(dir.path().join("nope.toml")).unwrap_err();
        assert!(matches!(err, BotError::ConfigRead { .. }));
    }
}
