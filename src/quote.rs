//! Quote-image automation.
//!
//! Quotes are produced by an external bot: the agent sends it an optional
//! `/qcolor` request followed by the text, then reposts whatever it replies
//! in the original chat. This module decides what to send; delivery and
//! waiting for the reply belong to the chat client.

use tracing::info;

use crate::state::{BotState, DEFAULT_COLOR};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuoteCommand {
    Start,
    Stop,
    /// `.q <color>`: color for future quotes.
    SetColor(String),
    /// `.q <color> <text>`: quote once with this color.
    QuoteWith { color: String, text: String },
}

impl QuoteCommand {
    /// Parse the arguments after `.q`. Empty arguments are not a command.
    pub fn parse(args: &str) -> Option<Self> {
        let args = args.trim();
        if args.is_empty() {
            return None;
        }
        let (head, rest) = match args.split_once(' ') {
            Some((head, rest)) => (head, Some(rest)),
            None => (args, None),
        };
        let command = match (head.to_lowercase().as_str(), rest) {
            ("start", _) => QuoteCommand::Start,
            ("stop", _) => QuoteCommand::Stop,
            (_, Some(text)) => QuoteCommand::QuoteWith {
                color: head.to_string(),
                text: text.to_string(),
            },
            (_, None) => QuoteCommand::SetColor(head.to_string()),
        };
        Some(command)
    }
}

/// Where a quote request came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuoteKind {
    /// `.q <color> <text>`.
    Explicit,
    /// An ordinary own message replaced by its quote. `reply_to` is the
    /// message it answered, if any.
    Auto { reply_to: Option<i64> },
}

/// Messages to send to the quote bot, in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuotePlan {
    pub color: Option<String>,
    pub text: String,
    pub kind: QuoteKind,
}

/// What to post in the chat when the quote bot does not deliver.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuoteFailure {
    Notice(String),
    /// Put the deleted message back, answering the same message it did.
    Restore { text: String, reply_to: Option<i64> },
}

impl QuotePlan {
    /// An explicit one-off color is always sent.
    pub fn with_color(color: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            color: Some(color.into()),
            text: text.into(),
            kind: QuoteKind::Explicit,
        }
    }

    /// Auto-quote: the configured color, skipped when it is the default.
    pub fn auto(state: &BotState, text: impl Into<String>, reply_to: Option<i64>) -> Self {
        let color = (state.current_color != DEFAULT_COLOR).then(|| state.current_color.clone());
        Self {
            color,
            text: text.into(),
            kind: QuoteKind::Auto { reply_to },
        }
    }

    pub fn requests(&self) -> Vec<String> {
        let mut out = Vec::with_capacity(2);
        if let Some(color) = &self.color {
            out.push(format!("/qcolor {color}"));
        }
        out.push(self.text.clone());
        out
    }

    pub fn on_failure(&self) -> QuoteFailure {
        match self.kind {
            QuoteKind::Explicit => QuoteFailure::Notice(format!("❌ Quote failed: {}", self.text)),
            QuoteKind::Auto { reply_to } => QuoteFailure::Restore {
                text: self.text.clone(),
                reply_to,
            },
        }
    }

    /// Line for the error report sent to the account's saved messages.
    pub fn failure_log(&self, cause: &str) -> String {
        match self.kind {
            QuoteKind::Explicit => format!("Quote with color failed: {cause}"),
            QuoteKind::Auto { .. } => format!("Auto-quote failed, message restored: {cause}"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuoteEffect {
    /// State changed; tell the account owner. The caller persists the state.
    Notice(String),
    Quote(QuotePlan),
}

/// Apply a `.q` command to the bot state.
pub fn apply(state: &mut BotState, command: QuoteCommand) -> QuoteEffect {
    match command {
        QuoteCommand::Start => {
            state.auto_quote_enabled = true;
            info!("auto-quote enabled");
            QuoteEffect::Notice(
                "✅ **Auto-quote mode enabled**\nAll your messages will now be automatically quoted."
                    .to_string(),
            )
        }
        QuoteCommand::Stop => {
            state.auto_quote_enabled = false;
            info!("auto-quote disabled");
            QuoteEffect::Notice(
                "⏹️ **Auto-quote mode disabled**\nMessages will no longer be automatically quoted."
                    .to_string(),
            )
        }
        QuoteCommand::SetColor(color) => {
            info!(%color, "quote color set");
            let notice = format!("🎨 **Color set to: {color}**\nFuture quotes will use this color.");
            state.current_color = color;
            QuoteEffect::Notice(notice)
        }
        QuoteCommand::QuoteWith { color, text } => {
            QuoteEffect::Quote(QuotePlan::with_color(color, text))
        }
    }
}

/// Whether an ordinary own message should be replaced by its quote.
pub fn should_auto_quote(state: &BotState, text: &str, from_bot: bool) -> bool {
    state.auto_quote_enabled && !from_bot && !text.is_empty() && !text.starts_with('.')
}
