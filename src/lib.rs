//! # Envo Bot
//!
//! Building blocks for a chat userbot: a Wordle transcript solver, quote-image
//! automation and a relay for generative-AI commands.
//!
//! The solver narrows an embedded five-letter dictionary using colored-square
//! feedback rows. It is pure and deterministic; picking one word among the
//! survivors is left to a pluggable [`rank::Ranker`].

pub mod ask;
pub mod command;
pub mod config;
pub mod dictionary;
pub mod feedback;
pub mod quote;
pub mod rank;
pub mod report;
pub mod solver;
pub mod state;
pub mod transcript;
pub mod wordle;

pub use dictionary::{Dictionary, Word};
pub use feedback::{Feedback, FeedbackRow};
pub use solver::{CandidateSet, Session, Solver};
pub use transcript::Guess;

/// Word length for Wordle
pub const WORD_LENGTH: usize = 5;

/// Solve a transcript against the embedded dictionary.
pub fn solve(transcript_text: &str) -> Vec<Word> {
    Solver::embedded().solve(transcript_text)
}
