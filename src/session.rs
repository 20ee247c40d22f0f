//! Session: one live connection to an IRC server
//!
//! Owns the transport exclusively. A single task registers, joins the
//! configured channels, then reads and fully handles one line at a time,
//! so outbound lines keep the order they were produced in.

use tokio::io::{AsyncBufReadExt, AsyncRead, AsyncWrite, AsyncWriteExt, BufReader};
use tokio::net::TcpStream;
use tracing::{debug, error, info, warn};

use crate::config::BotConfig;
use crate::error::BotError;
use crate::handler::Commands;
use crate::message::{is_ping, parse_command, strip_terminator, ClientMessage};
use crate::types::{Channel, Nick};

/// Connected bot state
///
/// Nick, channels, prefix and command table are fixed at construction.
/// Only the transport cursor moves afterwards.
#[derive(Debug)]
pub struct Session<S> {
    nick: Nick,
    channels: Vec<Channel>,
    command_prefix: String,
    commands: Commands,
    stream: BufReader<S>,
}

impl Session<TcpStream> {
    /// Dial `config.server`, then register and join
    ///
    /// No acknowledgement from the server is awaited.
    pub async fn connect(config: &BotConfig, commands: Commands) -> Result<Self, BotError> {
        let stream = TcpStream::connect(&config.server)
            .await
            .map_err(|source| BotError::Connect {
                addr: config.server.clone(),
                source,
            })?;
        info!("Connected to {}", config.server);

        let mut session = Self::new(stream, config, commands);
        session.register().await?;
        Ok(session)
    }
}

impl<S> Session<S>
where
    S: AsyncRead + AsyncWrite + Unpin,
{
    /// Wrap an already-open transport
    pub fn new(stream: S, config: &BotConfig, commands: Commands) -> Self {
        Self {
            nick: config.nick.clone(),
            channels: config.channels.clone(),
            command_prefix: config.command_prefix.clone(),
            commands,
            stream: BufReader::new(stream),
        }
    }

    /// Send USER, NICK and one JOIN per channel
    pub async fn register(&mut self) -> Result<(), BotError> {
        write_message(&mut self.stream, ClientMessage::User { nick: &self.nick }).await?;
        write_message(&mut self.stream, ClientMessage::Nick { nick: &self.nick }).await?;

        for channel in &self.channels {
            write_message(&mut self.stream, ClientMessage::Join { channel }).await?;
            info!("joining... {}", channel);
        }
        Ok(())
    }

    /// Main loop: read, echo and handle lines until the transport fails
    ///
    /// Only returns on a fatal error; EOF is `BotError::ConnectionClosed`.
    pub async fn read_and_respond(&mut self) -> Result<(), BotError> {
        loop {
            let line = self.read_line().await?;
            info!("{}", strip_terminator(&line));
            self.handle_line(&line).await?;
        }
    }

    /// Read one `\n`-terminated line, terminator included
    pub async fn read_line(&mut self) -> Result<String, BotError> {
        let mut buf = Vec::new();
        let n = self.stream.read_until(b'\n', &mut buf).await?;
        if n == 0 {
            return Err(BotError::ConnectionClosed);
        }
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }

    /// Answer a PING, otherwise try the line as a command
    pub async fn handle_line(&mut self, line: &str) -> Result<(), BotError> {
        if is_ping(line) {
            return self.pong().await;
        }
        self.handle_command(line).await;
        Ok(())
    }

    /// Write the keep-alive reply
    pub async fn pong(&mut self) -> Result<(), BotError> {
        write_message(&mut self.stream, ClientMessage::Pong).await?;
        Ok(())
    }

    /// Parse a chat line and reply to a known command in its channel
    ///
    /// Unrecognized lines and unknown commands are dropped silently. A
    /// failed reply write is logged and otherwise ignored.
    pub async fn handle_command(&mut self, line: &str) {
        let invocation = match parse_command(line, &self.command_prefix) {
            Ok(Some(invocation)) => invocation,
            Ok(None) => return,
            Err(e) => {
                warn!("Dropping line: {}", e);
                return;
            }
        };

        let Some(reply) = self.commands.dispatch(&invocation.command, &invocation.args) else {
            debug!("Unknown command '{}'", invocation.command);
            return;
        };

        let msg = ClientMessage::Privmsg {
            channel: &invocation.channel,
            text: &reply,
        };
        if let Err(e) = write_message(&mut self.stream, msg).await {
            error!("Failed to reply in {}: {}", invocation.channel, e);
        }
    }
}

async fn write_message<W>(writer: &mut W, msg: ClientMessage<'_>) -> std::io::Result<()>
where
    W: AsyncWrite + Unpin,
{
    writer.write_all(msg.to_wire().as_bytes()).await?;
    writer.flush().await
}
