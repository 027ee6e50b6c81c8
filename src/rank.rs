//! Picking one word out of several survivors.
//!
//! Every ranker must return a member of the list it was given. The solver
//! only certifies its own output, so anything else would present a word
//! that contradicts the transcript.

use rayon::prelude::*;
use thiserror::Error;
use tracing::{debug, warn};

use crate::dictionary::Word;
use crate::feedback::FeedbackRow;

pub trait Ranker: Send + Sync {
    fn name(&self) -> &'static str;

    /// `None` only when `candidates` is empty.
    fn rank(&self, candidates: &[Word]) -> Option<Word>;
}

/// Deterministic default: the first candidate.
#[derive(Debug, Clone, Copy, Default)]
pub struct FirstCandidate;

impl Ranker for FirstCandidate {
    fn name(&self) -> &'static str {
        "first"
    }

    fn rank(&self, candidates: &[Word]) -> Option<Word> {
        candidates.first().copied()
    }
}

/// Picks the candidate whose feedback best splits the rest.
///
/// Guessing a word with high entropy over the candidate list maximizes the
/// expected information from the reply, minimizing the expected number of
/// words left afterwards.
#[derive(Debug, Clone, Copy, Default)]
pub struct EntropyRanker;

impl EntropyRanker {
    /// Shannon entropy (bits) of the feedback rows `guess` would get across `candidates`.
    pub fn entropy(guess: &Word, candidates: &[Word]) -> f64 {
        let n = candidates.len() as f64;
        if n <= 1.0 {
            return 0.0;
        }

        let mut row_counts = [0u32; FeedbackRow::NUM_ROWS];
        for secret in candidates {
            let row = FeedbackRow::calculate(guess, secret);
            row_counts[row.0 as usize] += 1;
        }

        let mut entropy = 0.0;
        for &count in &row_counts {
            if count > 0 {
                let p = count as f64 / n;
                entropy -= p * p.log2();
            }
        }
        entropy
    }
}

impl Ranker for EntropyRanker {
    fn name(&self) -> &'static str {
        "entropy"
    }

    fn rank(&self, candidates: &[Word]) -> Option<Word> {
        if candidates.len() <= 2 {
            return candidates.first().copied();
        }

        let scores: Vec<f64> = candidates
            .par_iter()
            .map(|word| Self::entropy(word, candidates))
            .collect();

        // Strictly greater keeps the earliest word on ties.
        let mut best = 0;
        for (i, &score) in scores.iter().enumerate().skip(1) {
            if score > scores[best] {
                best = i;
            }
        }
        debug!(word = %candidates[best], entropy = scores[best], "entropy pick");
        Some(candidates[best])
    }
}

#[derive(Debug, Error)]
pub enum CompletionError {
    #[error("generative service is not configured")]
    NotConfigured,
    #[error("request failed: {0}")]
    Request(String),
    #[error("empty response")]
    Empty,
}

/// A text-completion service.
pub trait Completion: Send + Sync {
    fn complete(&self, prompt: &str) -> Result<String, CompletionError>;
}

/// Asks a completion service to choose, and validates what comes back.
#[derive(Debug, Clone)]
pub struct CompletionRanker<C> {
    client: C,
}

impl<C: Completion> CompletionRanker<C> {
    pub fn new(client: C) -> Self {
        Self { client }
    }

    pub fn prompt(candidates: &[Word]) -> String {
        let list = candidates
            .iter()
            .map(Word::as_str)
            .collect::<Vec<_>>()
            .join(", ");
        format!(
            "These five-letter words all fit the clues of a Wordle game: {list}.\n\
             Which one is most likely to be the answer? \
             Reply with exactly one word from the list and nothing else."
        )
    }

    fn pick(&self, candidates: &[Word]) -> Result<Option<Word>, CompletionError> {
        let reply = self.client.complete(&Self::prompt(candidates))?;
        if reply.trim().is_empty() {
            return Err(CompletionError::Empty);
        }
        Ok(reply
            .split(|c: char| !c.is_ascii_alphabetic())
            .filter_map(|token| Word::parse(token).ok())
            .find(|word| candidates.contains(word)))
    }
}

impl<C: Completion> Ranker for CompletionRanker<C> {
    fn name(&self) -> &'static str {
        "completion"
    }

    fn rank(&self, candidates: &[Word]) -> Option<Word> {
        let fallback = candidates.first().copied()?;
        if candidates.len() == 1 {
            return Some(fallback);
        }
        match self.pick(candidates) {
            Ok(Some(word)) => Some(word),
            Ok(None) => {
                warn!(%fallback, "completion picked a word outside the candidates");
                Some(fallback)
            }
            Err(err) => {
                warn!(%err, %fallback, "completion ranking failed");
                Some(fallback)
            }
        }
    }
}
