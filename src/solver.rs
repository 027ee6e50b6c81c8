//! Narrowing the dictionary from a transcript.
//!
//! Each guess is applied in order against the survivors of the previous one.
//! The set never regrows, and once it is empty later guesses are ignored.

use tracing::debug;

use crate::dictionary::{Dictionary, Word};
use crate::feedback::Feedback;
use crate::transcript::{self, Guess};
use crate::WORD_LENGTH;

impl Guess {
    /// Whether `candidate` could be the secret given this guess's feedback.
    pub fn admits(&self, candidate: &Word) -> bool {
        let guess = self.word.letters();
        let cand = candidate.letters();
        let feedbacks = self.feedback.to_feedbacks();

        let mut remaining = [0u8; 26];
        for &c in cand {
            remaining[Word::slot(c)] += 1;
        }

        for i in 0..WORD_LENGTH {
            if feedbacks[i] == Feedback::Hit {
                if cand[i] != guess[i] {
                    return false;
                }
                remaining[Word::slot(guess[i])] -= 1;
            }
        }

        for i in 0..WORD_LENGTH {
            if feedbacks[i] == Feedback::Present {
                let idx = Word::slot(guess[i]);
                if cand[i] == guess[i] || remaining[idx] == 0 {
                    return false;
                }
                remaining[idx] -= 1;
            }
        }

        for i in 0..WORD_LENGTH {
            if feedbacks[i] == Feedback::Absent {
                let letter = guess[i];
                let confirmed = (0..WORD_LENGTH)
                    .filter(|&k| guess[k] == letter && feedbacks[k] != Feedback::Absent)
                    .count();
                if candidate.count(letter) > confirmed {
                    return false;
                }
            }
        }

        true
    }
}

/// Words still consistent with every guess applied so far.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateSet {
    words: Vec<Word>,
}

impl CandidateSet {
    pub fn new(dictionary: &Dictionary) -> Self {
        Self {
            words: dictionary.all_words().copied().collect(),
        }
    }

    pub fn apply(&mut self, guess: &Guess) {
        self.words.retain(|word| guess.admits(word));
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn words(&self) -> &[Word] {
        &self.words
    }

    pub fn into_words(self) -> Vec<Word> {
        self.words
    }
}

/// Interactive solving state: the dictionary, survivors and applied guesses.
#[derive(Debug, Clone)]
pub struct Session<'d> {
    dictionary: &'d Dictionary,
    candidates: CandidateSet,
    history: Vec<Guess>,
}

impl<'d> Session<'d> {
    pub fn new(dictionary: &'d Dictionary) -> Self {
        Self {
            dictionary,
            candidates: CandidateSet::new(dictionary),
            history: Vec::new(),
        }
    }

    pub fn apply(&mut self, guess: Guess) {
        self.candidates.apply(&guess);
        self.history.push(guess);
    }

    pub fn reset(&mut self) {
        self.candidates = CandidateSet::new(self.dictionary);
        self.history.clear();
    }

    pub fn remaining_count(&self) -> usize {
        self.candidates.len()
    }

    pub fn candidates(&self) -> &[Word] {
        self.candidates.words()
    }

    pub fn history(&self) -> &[Guess] {
        &self.history
    }

    pub fn dictionary(&self) -> &'d Dictionary {
        self.dictionary
    }
}

/// Stateless front end: transcript in, surviving words out.
#[derive(Debug, Clone, Copy)]
pub struct Solver<'d> {
    dictionary: &'d Dictionary,
}

impl Solver<'static> {
    pub fn embedded() -> Self {
        Self::new(Dictionary::embedded())
    }
}

impl<'d> Solver<'d> {
    pub fn new(dictionary: &'d Dictionary) -> Self {
        Self { dictionary }
    }

    pub fn dictionary(&self) -> &'d Dictionary {
        self.dictionary
    }

    /// Parse `text` and return every word consistent with it.
    pub fn solve(&self, text: &str) -> Vec<Word> {
        self.solve_transcript(&transcript::parse(text))
    }

    pub fn solve_transcript(&self, guesses: &[Guess]) -> Vec<Word> {
        let mut candidates = CandidateSet::new(self.dictionary);
        for guess in guesses {
            if candidates.is_empty() {
                break;
            }
            candidates.apply(guess);
        }
        candidates.into_words()
    }

    /// Candidate count after each guess, stopping once nothing is left.
    pub fn narrowing(&self, guesses: &[Guess]) -> Vec<usize> {
        let mut candidates = CandidateSet::new(self.dictionary);
        let mut counts = Vec::with_capacity(guesses.len());
        for guess in guesses {
            if candidates.is_empty() {
                break;
            }
            let before = candidates.len();
            candidates.apply(guess);
            debug!(%guess, before, after = candidates.len(), "applied guess");
            counts.push(candidates.len());
        }
        counts
    }
}
