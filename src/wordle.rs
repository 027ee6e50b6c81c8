//! The `.wordle` chat command: solve a pasted transcript and describe the result.

use std::fmt::Write as _;

use crate::dictionary::Word;
use crate::rank::Ranker;
use crate::solver::Solver;
use crate::transcript;

/// Candidates listed in a reply besides the pick.
const LIST_LIMIT: usize = 20;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordleOutcome {
    /// Nothing parseable; the whole dictionary is still possible.
    NoConstraints { dictionary_size: usize },
    /// No word satisfies every line.
    Contradiction,
    Solved(Word),
    Ambiguous { pick: Word, candidates: Vec<Word> },
}

/// The text to solve: the command argument, or the replied-to message if it is blank.
pub fn source_text<'a>(argument: &'a str, reply_text: Option<&'a str>) -> Option<&'a str> {
    let argument = argument.trim();
    if !argument.is_empty() {
        return Some(argument);
    }
    reply_text.map(str::trim).filter(|t| !t.is_empty())
}

pub fn run(solver: &Solver<'_>, ranker: &dyn Ranker, text: &str) -> WordleOutcome {
    let guesses = transcript::parse(text);
    if guesses.is_empty() {
        return WordleOutcome::NoConstraints {
            dictionary_size: solver.dictionary().len(),
        };
    }

    let candidates = solver.solve_transcript(&guesses);
    match candidates.as_slice() {
        [] => WordleOutcome::Contradiction,
        [only] => WordleOutcome::Solved(*only),
        _ => {
            let pick = ranker
                .rank(&candidates)
                .filter(|w| candidates.contains(w))
                .unwrap_or(candidates[0]);
            WordleOutcome::Ambiguous { pick, candidates }
        }
    }
}

impl WordleOutcome {
    pub fn render(&self) -> String {
        match self {
            WordleOutcome::NoConstraints { dictionary_size } => format!(
                "🤔 Need more input. Paste the game rows like `🟩🟨🟥🟥🟥 CRANE`.\n\
                 {dictionary_size} words are still possible."
            ),
            WordleOutcome::Contradiction => "❌ No word matches every row. \
                 Double-check the colored squares for a typo."
                .to_string(),
            WordleOutcome::Solved(word) => format!("✅ The answer is **{word}**"),
            WordleOutcome::Ambiguous { pick, candidates } => {
                let mut out = format!(
                    "🎯 Try **{pick}** ({} possible words)",
                    candidates.len()
                );
                let others: Vec<&str> = candidates
                    .iter()
                    .filter(|w| *w != pick)
                    .take(LIST_LIMIT)
                    .map(Word::as_str)
                    .collect();
                if !others.is_empty() {
                    let _ = write!(out, "\nOthers: {}", others.join(", "));
                    let hidden = candidates.len() - 1 - others.len();
                    if hidden > 0 {
                        let _ = write!(out, " and {hidden} more");
                    }
                }
                out
            }
        }
    }
}
