//! Feedback symbols and rows.
//!
//! A row is the oracle's answer to one guess: one symbol per letter position.
//! Rows are packed into a single `u8` so they can index flat count tables.

use crate::dictionary::Word;
use crate::WORD_LENGTH;

/// Feedback for a single letter position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Feedback {
    /// Correct letter in this exact position.
    Hit,
    /// Letter occurs in the secret, but not here.
    Present,
    /// No occurrences beyond those already marked Hit/Present in the same guess.
    Absent,
}

impl Feedback {
    pub fn glyph(self) -> char {
        match self {
            Feedback::Hit => '🟩',
            Feedback::Present => '🟨',
            Feedback::Absent => '🟥',
        }
    }

    /// Parse a colored square as pasted from the game.
    pub fn from_glyph(c: char) -> Option<Self> {
        match c {
            '🟩' => Some(Feedback::Hit),
            '🟨' => Some(Feedback::Present),
            '🟥' => Some(Feedback::Absent),
            _ => None,
        }
    }

    /// Parse typed shorthand (g=green, y=yellow, b/x/r=miss) or a glyph.
    pub fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_lowercase() {
            'g' | '2' => Some(Feedback::Hit),
            'y' | '1' => Some(Feedback::Present),
            'b' | 'x' | 'r' | '0' => Some(Feedback::Absent),
            _ => Self::from_glyph(c),
        }
    }

    fn digit(self) -> u8 {
        match self {
            Feedback::Absent => 0,
            Feedback::Present => 1,
            Feedback::Hit => 2,
        }
    }
}

/// A complete feedback row for a five-letter guess.
/// Encoded base-3 as `f0 + 3*f1 + 9*f2 + 27*f3 + 81*f4` (0-242).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FeedbackRow(pub u8);

impl FeedbackRow {
    /// Every position a hit.
    pub const ALL_HIT: Self = Self(2 + 2 * 3 + 2 * 9 + 2 * 27 + 2 * 81);

    /// 3^5
    pub const NUM_ROWS: usize = 243;

    pub fn new(feedbacks: [Feedback; WORD_LENGTH]) -> Self {
        let mut row: u8 = 0;
        let mut multiplier: u8 = 1;
        for fb in feedbacks {
            row += fb.digit() * multiplier;
            multiplier *= 3;
        }
        Self(row)
    }

    /// The row a guess would receive against `secret`.
    ///
    /// Hits are assigned first; remaining guess letters become Present while
    /// unmatched secret letters of the same kind are left, scanning left to
    /// right. Everything else is Absent.
    pub fn calculate(guess: &Word, secret: &Word) -> Self {
        let guess = guess.letters();
        let secret = secret.letters();

        let mut feedback = [Feedback::Absent; WORD_LENGTH];
        let mut secret_remaining = [0u8; 26];

        for i in 0..WORD_LENGTH {
            if guess[i] == secret[i] {
                feedback[i] = Feedback::Hit;
            } else {
                secret_remaining[Word::slot(secret[i])] += 1;
            }
        }

        for i in 0..WORD_LENGTH {
            if feedback[i] != Feedback::Hit {
                let idx = Word::slot(guess[i]);
                if secret_remaining[idx] > 0 {
                    feedback[i] = Feedback::Present;
                    secret_remaining[idx] -= 1;
                }
            }
        }

        Self::new(feedback)
    }

    pub fn to_feedbacks(self) -> [Feedback; WORD_LENGTH] {
        let mut row = self.0;
        let mut feedbacks = [Feedback::Absent; WORD_LENGTH];
        for feedback in feedbacks.iter_mut() {
            *feedback = match row % 3 {
                0 => Feedback::Absent,
                1 => Feedback::Present,
                _ => Feedback::Hit,
            };
            row /= 3;
        }
        feedbacks
    }

    pub fn is_solved(self) -> bool {
        self == Self::ALL_HIT
    }

    /// Parse exactly five glyphs, as they appear in a pasted transcript.
    pub fn from_glyphs(s: &str) -> Option<Self> {
        Self::collect(s, Feedback::from_glyph)
    }

    /// Parse a row like "gybbb", "21000" or glyphs.
    pub fn parse(s: &str) -> Option<Self> {
        Self::collect(s, Feedback::from_char)
    }

    fn collect(s: &str, symbol: impl Fn(char) -> Option<Feedback>) -> Option<Self> {
        let mut feedbacks = [Feedback::Absent; WORD_LENGTH];
        let mut chars = s.chars();
        for slot in feedbacks.iter_mut() {
            *slot = symbol(chars.next()?)?;
        }
        if chars.next().is_some() {
            return None;
        }
        Some(Self::new(feedbacks))
    }

    pub fn to_glyphs(self) -> String {
        self.to_feedbacks().iter().map(|f| f.glyph()).collect()
    }
}

impl std::fmt::Display for FeedbackRow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_glyphs())
    }
}
