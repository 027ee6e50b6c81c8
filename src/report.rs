//! Error reports sent to the account's own saved messages.

use std::fmt;

/// The chat message that triggered a failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageOrigin {
    pub chat: String,
    pub text: String,
}

impl MessageOrigin {
    /// Group chats are named by title, private chats by first name.
    pub fn new(title: Option<&str>, first_name: Option<&str>, text: Option<&str>) -> Self {
        Self {
            chat: title.or(first_name).unwrap_or("unknown").to_string(),
            text: text.unwrap_or_default().to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorReport {
    pub error: String,
    pub origin: Option<MessageOrigin>,
}

impl ErrorReport {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            origin: None,
        }
    }

    pub fn with_origin(mut self, origin: MessageOrigin) -> Self {
        self.origin = Some(origin);
        self
    }
}

impl fmt::Display for ErrorReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "🚨 **Userbot Error**\n\n{}", self.error)?;
        if let Some(origin) = &self.origin {
            write!(
                f,
                "\n\n**Original Message:**\nChat: {}\nText: {}",
                origin.chat, origin.text
            )?;
        }
        Ok(())
    }
}
