//! The candidate word store.
//!
//! Words are fixed-length, uppercase ASCII. The embedded list is loaded once
//! and never mutated; malformed entries in it are dropped at construction.

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use once_cell::sync::Lazy;
use thiserror::Error;
use tracing::{debug, warn};

use crate::WORD_LENGTH;

static EMBEDDED: Lazy<Dictionary> =
    Lazy::new(|| Dictionary::from_tokens(include_str!("../dictionary/dictionary.txt").lines()));

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WordError {
    #[error("expected 5 letters, got {0}")]
    Length(usize),
    #[error("non-alphabetic character {0:?}")]
    NotAlphabetic(char),
}

/// A five-letter uppercase word.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Word([u8; WORD_LENGTH]);

impl Word {
    /// Uppercases `s` and checks it is exactly five ASCII letters.
    pub fn parse(s: &str) -> Result<Self, WordError> {
        let count = s.chars().count();
        if count != WORD_LENGTH {
            return Err(WordError::Length(count));
        }
        let mut letters = [0u8; WORD_LENGTH];
        for (slot, c) in letters.iter_mut().zip(s.chars()) {
            if !c.is_ascii_alphabetic() {
                return Err(WordError::NotAlphabetic(c));
            }
            *slot = c.to_ascii_uppercase() as u8;
        }
        Ok(Self(letters))
    }

    pub fn letters(&self) -> &[u8; WORD_LENGTH] {
        &self.0
    }

    pub fn as_str(&self) -> &str {
        // Only ever built from ASCII letters.
        std::str::from_utf8(&self.0).unwrap_or_default()
    }

    /// Number of occurrences of `letter` in this word.
    pub fn count(&self, letter: u8) -> usize {
        self.0.iter().filter(|&&b| b == letter).count()
    }

    /// Index of a letter in a 26-slot table.
    pub(crate) fn slot(letter: u8) -> usize {
        (letter - b'A') as usize
    }
}

impl FromStr for Word {
    type Err = WordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl fmt::Debug for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Word({})", self.as_str())
    }
}

/// Immutable set of known words.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dictionary {
    words: BTreeSet<Word>,
}

impl Dictionary {
    /// Builds a dictionary, skipping any token that is not a valid word.
    pub fn from_tokens<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut words = BTreeSet::new();
        let mut dropped = 0usize;
        for token in tokens {
            let token = token.as_ref().trim();
            if token.is_empty() {
                continue;
            }
            match Word::parse(token) {
                Ok(word) => {
                    words.insert(word);
                }
                Err(err) => {
                    debug!(token, %err, "dropping dictionary token");
                    dropped += 1;
                }
            }
        }
        if dropped > 0 {
            warn!(dropped, kept = words.len(), "dictionary contained malformed tokens");
        }
        Self { words }
    }

    /// The compiled-in word list, built on first use.
    pub fn embedded() -> &'static Dictionary {
        &EMBEDDED
    }

    pub fn all_words(&self) -> impl Iterator<Item = &Word> + '_ {
        self.words.iter()
    }

    pub fn contains(&self, word: &Word) -> bool {
        self.words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl<'a> FromIterator<&'a str> for Dictionary {
    fn from_iter<T: IntoIterator<Item = &'a str>>(iter: T) -> Self {
        Self::from_tokens(iter)
    }
}
