//! Wire protocol definitions
//!
//! Newline-delimited plain-text IRC lines. Outbound lines are rendered
//! from `ClientMessage`; of inbound lines only PINGs and prefixed chat
//! commands are recognized.

use std::fmt;

use crate::error::ParseError;
use crate::types::{Channel, Nick};

/// Reply sent for every PING
pub const PONG_LINE: &str = "PONG :pingis\n";

/// Bot → Server line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClientMessage<'a> {
    /// Registration: `USER <nick> <nick> <nick> : bot loaded!`
    User { nick: &'a Nick },
    /// `NICK <nick>`
    Nick { nick: &'a Nick },
    /// `JOIN <channel> ` (trailing space kept)
    Join { channel: &'a Channel },
    /// Keep-alive answer
    Pong,
    /// Reply to a command in its channel
    Privmsg { channel: &'a Channel, text: &'a str },
}

impl ClientMessage<'_> {
    /// Render as a complete wire line, `\n` included
    pub fn to_wire(&self) -> String {
        format!("{self}\n")
    }
}

impl fmt::Display for ClientMessage<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClientMessage::User { nick } => write!(f, "USER {nick} {nick} {nick} : bot loaded!"),
            ClientMessage::Nick { nick } => write!(f, "NICK {nick}"),
            ClientMessage::Join { channel } => write!(f, "JOIN {channel} "),
            ClientMessage::Pong => f.write_str(PONG_LINE.trim_end()),
            ClientMessage::Privmsg { channel, text } => write!(f, "PRIVMSG {channel} :{text}"),
        }
    }
}

/// A prefixed command addressed to a channel
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    /// Where the reply goes (the PRIVMSG target)
    pub channel: Channel,
    /// Command name with the trigger prefix removed
    pub command: String,
    /// Argument tokens; empty tokens from repeated spaces are kept
    pub args: Vec<String>,
}

/// Remove one trailing `\n` or `\r\n`, nothing more
pub fn strip_terminator(line: &str) -> &str {
    let line = line.strip_suffix('\n').unwrap_or(line);
    line.strip_suffix('\r').unwrap_or(line)
}

/// Literal `PING` at the very start of the line
pub fn is_ping(line: &str) -> bool {
    line.starts_with("PING")
}

/// Parse `:<source> PRIVMSG <channel> :<prefix><command> <args...>`
///
/// The line is split on every `:`; anything that does not yield exactly
/// three parts is `Ok(None)`, which also drops chat text containing a
/// colon. The channel is the third space-separated token of the middle
/// part; a middle part with fewer tokens is a `ParseError`.
pub fn parse_command(line: &str, prefix: &str) -> Result<Option<Invocation>, ParseError> {
    let line = strip_terminator(line);

    let parts: Vec<&str> = line.split(':').collect();
    if parts.len() != 3 {
        return Ok(None);
    }

    let Some(body) = parts[2].strip_prefix(prefix) else {
        return Ok(None);
    };

    let words: Vec<&str> = body.split(' ').collect();
    let Some((command, args)) = words.split_first() else {
        return Ok(None);
    };

    let channel = parts[1]
        .split(' ')
        .nth(2)
        .ok_or_else(|| ParseError::MissingChannel {
            segment: parts[1].to_string(),
        })?;

    Ok(Some(Invocation {
        channel: Channel::from(channel),
        command: command.to_string(),
        args: args.iter().map(ToString::to_string).collect(),
    }))
}
