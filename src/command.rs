//! Recognizing commands in the account's own outgoing messages.

use crate::quote::QuoteCommand;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `.ask …`; arguments are interpreted by [`crate::ask::prepare`].
    Ask(String),
    Quote(QuoteCommand),
    /// `.wordle …` / `.w …`; the transcript, possibly empty.
    Wordle(String),
}

impl Command {
    pub fn parse(text: &str) -> Option<Self> {
        let text = text.trim_start();
        if let Some(args) = strip_prefix(text, ".ask") {
            return Some(Command::Ask(args.trim().to_string()));
        }
        if let Some(args) = strip_prefix(text, ".q") {
            return QuoteCommand::parse(args).map(Command::Quote);
        }
        if let Some(args) = strip_prefix(text, ".wordle").or_else(|| strip_prefix(text, ".w")) {
            return Some(Command::Wordle(args.trim().to_string()));
        }
        None
    }
}

/// `prefix` must end the text or be followed by whitespace.
fn strip_prefix<'a>(text: &'a str, prefix: &str) -> Option<&'a str> {
    let rest = text.strip_prefix(prefix)?;
    match rest.chars().next() {
        None => Some(rest),
        Some(c) if c.is_whitespace() => Some(rest),
        Some(_) => None,
    }
}
