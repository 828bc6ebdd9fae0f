//! Per-letter scoring of a guess against the secret word.

use std::{fmt, str::FromStr};

use hashbrown::HashMap;

use crate::WORD_LENGTH;

/// The outcome for a single guessed letter.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Color {
    Absent,
    Present,
    Exact,
}

impl Color {
    pub fn as_char(self) -> char {
        match self {
            Color::Exact => 'G',
            Color::Present => 'Y',
            Color::Absent => 'B',
        }
    }

    pub fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_uppercase() {
            'G' => Some(Color::Exact),
            'Y' => Some(Color::Present),
            'B' => Some(Color::Absent),
            _ => None,
        }
    }
}

/// The color code of a whole guess, e.g. `GYBBB`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Feedback([Color; WORD_LENGTH]);

impl Feedback {
    pub const WIN: Self = Self([Color::Exact; WORD_LENGTH]);

    /// Scores `guess` against `secret`.
    ///
    /// Exact matches are settled first. The secret letters they leave unmatched form a per-letter
    /// budget, and the remaining guess positions claim that budget left to right: a letter is
    /// marked present only while unmatched copies of it remain, so surplus duplicates are absent.
    /// Both words must be five bytes of the same case.
    pub fn evaluate(guess: &str, secret: &str) -> Self {
        let guess = guess.as_bytes();
        let secret = secret.as_bytes();

        debug_assert_eq!(guess.len(), WORD_LENGTH);
        debug_assert_eq!(secret.len(), WORD_LENGTH);

        let mut colors = [Color::Absent; WORD_LENGTH];
        let mut unmatched = HashMap::new();

        for (idx, (&g, &s)) in guess.iter().zip(secret).enumerate() {
            if g == s {
                colors[idx] = Color::Exact;
            } else {
                *unmatched.entry(s).or_insert(0usize) += 1;
            }
        }

        for (color, g) in colors.iter_mut().zip(guess) {
            if *color == Color::Exact {
                continue;
            }

            if let Some(remaining) = unmatched.get_mut(g).filter(|remaining| **remaining > 0) {
                *remaining -= 1;
                *color = Color::Present;
            }
        }

        Self(colors)
    }

    pub fn colors(&self) -> &[Color; WORD_LENGTH] {
        &self.0
    }

    pub fn is_win(&self) -> bool {
        *self == Self::WIN
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0
            .iter()
            .try_for_each(|color| write!(f, "{}", color.as_char()))
    }
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("feedback must be five characters of G, Y or B - {0} is not valid")]
pub struct ParseFeedbackError(String);

impl FromStr for Feedback {
    type Err = ParseFeedbackError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let colors: Option<Vec<_>> = s.chars().map(Color::from_char).collect();
        colors
            .and_then(|colors| colors.try_into().ok())
            .map(Feedback)
            .ok_or_else(|| ParseFeedbackError(s.into()))
    }
}
