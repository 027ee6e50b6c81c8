//! The `.ask` command: turn chat arguments into a prompt for the generative
//! service, and shape its answer for the chat.

use thiserror::Error;

use crate::rank::CompletionError;

/// Longest text message the chat accepts; longer replies go out as a file.
pub const MESSAGE_LIMIT: usize = 4096;

pub const RESPONSE_FILE_NAME: &str = "envo_response.txt";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AskRequest {
    /// `.ask g [text]`
    Grammar { text: String },
    /// `.ask t <language> [text]`
    Translate { language: String, text: String },
    /// `.ask [question]`
    General { question: String },
}

impl AskRequest {
    /// Split the text after `.ask` into a sub-command.
    pub fn parse(args: &str) -> Self {
        let args = args.trim();
        if let Some(rest) = strip_subcommand(args, 'g') {
            return AskRequest::Grammar {
                text: rest.trim().to_string(),
            };
        }
        if let Some(rest) = strip_subcommand(args, 't') {
            let mut parts = rest.trim().splitn(2, char::is_whitespace);
            let language = parts.next().unwrap_or_default().trim().to_string();
            let text = parts.next().unwrap_or_default().trim().to_string();
            return AskRequest::Translate { language, text };
        }
        AskRequest::General {
            question: args.to_string(),
        }
    }
}

fn strip_subcommand(args: &str, letter: char) -> Option<&str> {
    let mut chars = args.chars();
    let first = chars.next()?;
    let rest = chars.as_str();
    (first.eq_ignore_ascii_case(&letter) && rest.starts_with(' ')).then_some(rest)
}

/// What the command needs to know about the message it came from.
#[derive(Debug, Clone, Default)]
pub struct AskContext {
    pub reply_text: Option<String>,
    pub forwarded: bool,
    pub configured: bool,
}

impl AskContext {
    fn reply(&self) -> Option<&str> {
        self.reply_text
            .as_deref()
            .map(str::trim)
            .filter(|t| !t.is_empty())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AskError {
    #[error("I cannot process forwarded messages for Envo queries.")]
    Forwarded,
    #[error("Envo AI is not configured. Please set GEMINI_API_KEY.")]
    NotConfigured,
    #[error("Please provide text to fix grammar after .ask g or reply to a message.")]
    MissingGrammarText,
    #[error("Please specify a target language for translation (e.g., .ask t French I love this).")]
    MissingLanguage,
    #[error("Please provide text to translate after .ask t <lang> or reply to a message.")]
    MissingTranslateText,
    #[error("Please provide a question, a text to fix/translate, or reply to a message.")]
    Empty,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AskAction {
    FixGrammar,
    Translate,
    Answer,
}

impl AskAction {
    pub fn description(self) -> &'static str {
        match self {
            AskAction::FixGrammar => "fixing grammar and general text issues",
            AskAction::Translate => "translating text",
            AskAction::Answer => "answering your question",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AskPrompt {
    pub action: AskAction,
    pub prompt: String,
}

impl AskPrompt {
    /// Shown in place of the command while the service works.
    pub fn status_line(&self) -> String {
        format!("Envo is {}...", self.action.description())
    }
}

/// Build the prompt for `.ask <args>`, falling back to the replied-to text.
pub fn prepare(args: &str, ctx: &AskContext) -> Result<AskPrompt, AskError> {
    prepare_request(AskRequest::parse(args), ctx)
}

pub fn prepare_request(request: AskRequest, ctx: &AskContext) -> Result<AskPrompt, AskError> {
    if ctx.forwarded {
        return Err(AskError::Forwarded);
    }
    if !ctx.configured {
        return Err(AskError::NotConfigured);
    }

    let reply = ctx.reply();
    match request {
        AskRequest::Grammar { text } => {
            let text = non_empty(&text)
                .or(reply)
                .ok_or(AskError::MissingGrammarText)?;
            Ok(AskPrompt {
                action: AskAction::FixGrammar,
                prompt: format!(
                    "Correct the grammar, spelling, punctuation, and improve the overall \
                     readability of the following text. Provide only the corrected text, \
                     no additional explanations:\n\n'{text}'"
                ),
            })
        }
        AskRequest::Translate { language, text } => {
            let language = non_empty(&language).ok_or(AskError::MissingLanguage)?;
            let text = non_empty(&text)
                .or(reply)
                .ok_or(AskError::MissingTranslateText)?;
            Ok(AskPrompt {
                action: AskAction::Translate,
                prompt: format!(
                    "Translate the following text to {language}. Provide only the translated \
                     text, no additional explanations:\n\n'{text}'"
                ),
            })
        }
        AskRequest::General { question } => {
            let prompt = match (non_empty(&question), reply) {
                (Some(q), Some(r)) => format!("{q}\n\nContext from replied message: '{r}'"),
                (Some(q), None) => q.to_string(),
                (None, Some(r)) => {
                    format!("Please explain or summarize the following text: '{r}'")
                }
                (None, None) => return Err(AskError::Empty),
            };
            Ok(AskPrompt {
                action: AskAction::Answer,
                prompt,
            })
        }
    }
}

fn non_empty(s: &str) -> Option<&str> {
    let s = s.trim();
    (!s.is_empty()).then_some(s)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AskReply {
    Inline(String),
    Document {
        file_name: &'static str,
        caption: &'static str,
        contents: String,
    },
}

impl AskReply {
    /// Replaces the "Envo is ..." status before the file goes out. Inline
    /// replies overwrite the status themselves.
    pub fn status_line(&self) -> Option<&'static str> {
        match self {
            AskReply::Inline(_) => None,
            AskReply::Document { .. } => Some("`Envo response is too long. Sending as a file...`"),
        }
    }
}

pub fn format_reply(response: &str) -> AskReply {
    if response.chars().count() > MESSAGE_LIMIT {
        AskReply::Document {
            file_name: RESPONSE_FILE_NAME,
            caption: "Envo Response",
            contents: response.to_string(),
        }
    } else {
        AskReply::Inline(format!("**Envo Response:**\n\n`{response}`"))
    }
}

/// Error report text for a failed service call.
pub fn service_error(err: &CompletionError) -> String {
    format!("Error communicating with Envo AI: {err}")
}

/// The same failure as shown in the chat, in place of the status line.
pub fn format_service_error(err: &CompletionError) -> String {
    format!("`{}`", service_error(err))
}
