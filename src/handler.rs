//! Command handlers and dispatch table
//!
//! Handlers are plain functions from argument tokens to a reply.
//! The table is built once and never changes afterwards.

use std::collections::HashMap;
use std::fmt;

/// A command handler: total, pure, no side effects
pub type CommandFn = fn(&[String]) -> String;

/// Immutable command name → handler table
#[derive(Clone, Default)]
pub struct Commands {
    handlers: HashMap<String, CommandFn>,
}

impl Commands {
    /// Start an empty table
    pub fn builder() -> CommandsBuilder {
        CommandsBuilder::default()
    }

    /// The stock table: `echo` and `count`
    pub fn builtin() -> Self {
        Self::builder()
            .register("echo", echo)
            .register("count", count)
            .build()
    }

    /// Run the handler registered under `name`
    ///
    /// Exact, case-sensitive lookup. Returns None on a miss.
    pub fn dispatch(&self, name: &str, args: &[String]) -> Option<String> {
        self.handlers.get(name).map(|handler| handler(args))
    }
}

impl fmt::Debug for Commands {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut names: Vec<&str> = self.handlers.keys().map(String::as_str).collect();
        names.sort_unstable();
        f.debug_struct("Commands").field("names", &names).finish()
    }
}

/// Builder for `Commands`
#[derive(Default)]
pub struct CommandsBuilder {
    handlers: HashMap<String, CommandFn>,
}

impl CommandsBuilder {
    /// Register a handler; a later registration under the same name wins
    pub fn register(mut self, name: impl Into<String>, handler: CommandFn) -> Self {
        self.handlers.insert(name.into(), handler);
        self
    }

    pub fn build(self) -> Commands {
        Commands {
            handlers: self.handlers,
        }
    }
}

/// Arguments rejoined with single spaces
pub fn echo(args: &[String]) -> String {
    args.join(" ")
}

/// Number of arguments, in decimal
pub fn count(args: &[String]) -> String {
    args.len().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(tokens: &[&str]) -> Vec<String> {
        tokens.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn test_echo() {
        assert_eq!(echo(&args(&["hello", "world"])), "hello world");
        assert_eq!(echo(&[]), "");
        assert_eq!(echo(&args(&["a", "", "b"])), "a  b");
    }

    #[test]
    fn test_count() {
        assert_eq!(count(&args(&["x", "y", "z"])), "3");
        assert_eq!(count(&[]), "0");
        assert_eq!(count(&args(&["a", "", "b"])), "3");
    }

    #[test]
    fn test_builtin_dispatch() {
        let commands = Commands::builtin();
        assert_eq!(
            commands.dispatch("echo", &args(&["hi", "there"])),
            Some("hi there".to_string())
        );
        assert_eq!(commands.dispatch("count", &args(&["a"])), Some("1".to_string()));
    }

    #[test]
    fn test_dispatch_miss_and_case_sensitive() {
        let commands = Commands::builtin();
        assert_eq!(commands.dispatch("bogus", &[]), None);
        assert_eq!(commands.dispatch("ECHO", &[]), None);
        assert_eq!(commands.dispatch("Echo", &[]), None);
    }

    #[test]
    fn test_last_registration_wins() {
        let commands = Commands::builder()
            .register("say", echo)
            .register("say", count)
            .build();
        assert_eq!(commands.dispatch("say", &args(&["a", "b"])), Some("2".to_string()));
    }

    #[test]
    fn test_custom_handler() {
        let commands = Commands::builder()
            .register("shout", |args| args.join(" ").to_uppercase())
            .build();
        assert_eq!(
            commands.dispatch("shout", &args(&["hey", "you"])),
            Some("HEY YOU".to_string())
        );
        assert_eq!(commands.dispatch("echo", &[]), None);
    }

    #[test]
    fn test_debug_lists_names() {
        let debug = format!("{:?}", Commands::builtin());
        assert_eq!(debug, r#"Commands { names: ["count", "echo"] }"#);
    }
}
