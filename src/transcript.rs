//! Parsing pasted game transcripts.
//!
//! Each line is a block of five colored squares, whitespace, then the guessed
//! word. Lines that don't fit are skipped; parsing never fails.

use tracing::trace;

use crate::dictionary::Word;
use crate::feedback::FeedbackRow;

/// One historical attempt and the feedback it received.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Guess {
    pub word: Word,
    pub feedback: FeedbackRow,
}

impl Guess {
    pub fn new(word: Word, feedback: FeedbackRow) -> Self {
        Self { word, feedback }
    }

    /// A single transcript line, or `None` if it is malformed.
    pub fn parse_line(line: &str) -> Option<Self> {
        let (glyphs, word) = line.trim().split_once(char::is_whitespace)?;
        let feedback = FeedbackRow::from_glyphs(glyphs)?;
        let word = Word::parse(&word.trim().to_uppercase()).ok()?;
        Some(Self { word, feedback })
    }
}

impl std::fmt::Display for Guess {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.feedback, self.word)
    }
}

/// Parse every well-formed line of `text`, in order.
pub fn parse(text: &str) -> Vec<Guess> {
    text.lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .filter_map(|(n, line)| {
            let guess = Guess::parse_line(line);
            if guess.is_none() {
                trace!(line = n + 1, text = line, "skipping malformed transcript line");
            }
            guess
        })
        .collect()
}
