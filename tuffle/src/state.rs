use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::{feedback::Color, Feedback, GameSnapshot, WORD_LENGTH};

pub const MAX_GUESSES: usize = 6;

pub const NOT_ENOUGH_LETTERS: &str = "Not enough letters, try again.";
pub const INVALID_GUESS: &str = "Invalid guess. Try again.";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub enum Status {
    #[serde(rename = "active")]
    Active,
    #[serde(rename = "win")]
    Won,
    #[serde(rename = "lose")]
    Lost,
}

/// One row of the board: the letters typed into it and, once submitted, their colors.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Entry {
    text: String,
    feedback: Option<Feedback>,
}

impl Entry {
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn feedback(&self) -> Option<Feedback> {
        self.feedback
    }
}

/// The board for a single game.
///
/// Rejected actions leave the board untouched and explain themselves through the error message.
/// Once the game is won or lost every mutation is ignored until the state is reset.
#[derive(Clone, Debug)]
pub struct GameState {
    secret: String,
    status: Status,
    entries: Vec<Entry>,
    current: usize,
    error_message: String,
}

impl GameState {
    pub fn new(secret: impl Into<String>) -> Self {
        let mut secret = secret.into();
        secret.make_ascii_lowercase();
        Self {
            secret,
            status: Status::Active,
            entries: vec![Entry::default()],
            current: 0,
            error_message: String::new(),
        }
    }

    pub fn reset(&mut self, secret: impl Into<String>) {
        *self = Self::new(secret);
    }

    pub fn secret(&self) -> &str {
        &self.secret
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn is_over(&self) -> bool {
        self.status != Status::Active
    }

    pub fn error_message(&self) -> &str {
        &self.error_message
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    /// The text of the row being edited.
    pub fn current_entry(&self) -> &str {
        &self.entries[self.current].text
    }

    pub fn submitted(&self) -> impl Iterator<Item = (&str, Feedback)> {
        self.entries
            .iter()
            .filter_map(|entry| entry.feedback.map(|feedback| (entry.text(), feedback)))
    }

    /// Appends a letter to the current row. Full rows and non-letters are ignored.
    pub fn add_letter(&mut self, c: char) {
        if self.is_over() || !c.is_ascii_alphabetic() {
            return;
        }

        let entry = &mut self.entries[self.current];
        if entry.text.len() < WORD_LENGTH {
            entry.text.push(c.to_ascii_lowercase());
            self.error_message.clear();
        }
    }

    pub fn delete_letter(&mut self) {
        if self.is_over() {
            return;
        }

        if self.entries[self.current].text.pop().is_some() {
            self.error_message.clear();
        }
    }

    /// Submits the current row. `is_valid` reports whether the dictionary accepts the word.
    pub fn submit_guess(&mut self, is_valid: bool) {
        if self.is_over() {
            return;
        }

        if self.current_entry().len() < WORD_LENGTH {
            self.error_message = NOT_ENOUGH_LETTERS.into();
            return;
        }

        if !is_valid {
            self.error_message = INVALID_GUESS.into();
            return;
        }

        self.error_message.clear();

        let entry = &mut self.entries[self.current];
        let feedback = Feedback::evaluate(&entry.text, &self.secret);
        entry.feedback = Some(feedback);
        log::debug!("scored {} as {}", entry.text, feedback);

        if entry.text == self.secret {
            self.status = Status::Won;
        } else if self.current + 1 >= MAX_GUESSES {
            self.status = Status::Lost;
        } else {
            self.entries.push(Entry::default());
            self.current += 1;
        }
    }

    /// The strongest color each guessed letter has earned so far.
    pub fn letter_colors(&self) -> BTreeMap<char, Color> {
        let mut colors = BTreeMap::new();
        for (text, feedback) in self.submitted() {
            for (letter, &color) in text.chars().zip(feedback.colors()) {
                let best = colors.entry(letter).or_insert(color);
                *best = (*best).max(color);
            }
        }
        colors
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut guessed_words: Vec<String> =
            self.submitted().map(|(text, _)| text.to_owned()).collect();
        let board_colors = self
            .submitted()
            .map(|(_, feedback)| feedback.to_string())
            .collect();

        if !self.is_over() && !self.current_entry().is_empty() {
            guessed_words.push(self.current_entry().to_owned());
        }

        GameSnapshot {
            answer: self.secret.clone(),
            board_colors,
            guessed_words,
            game_status: self.status,
            error_message: self.error_message.clone(),
            letter_colors: self
                .letter_colors()
                .into_iter()
                .map(|(letter, color)| (letter.to_string(), color.as_char().to_string()))
                .collect(),
        }
    }
}
