use std::{collections::BTreeMap, io, path::PathBuf};

use serde::{Deserialize, Serialize};

mod dictionary;
mod feedback;
mod game;
mod random;
mod state;

pub use dictionary::Dictionary;
pub use feedback::{Color, Feedback, ParseFeedbackError};
pub use game::TuffleGame;
pub use random::RandomSource;
pub use state::{Entry, GameState, Status, INVALID_GUESS, MAX_GUESSES, NOT_ENOUGH_LETTERS};

pub const WORD_LENGTH: usize = 5;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("unable to read word list {path:?}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("no five letter words found in {0}")]
    EmptyWordList(String),
}

/// The view of a game handed to the frontend.
///
/// Field names are part of the frontend contract.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct GameSnapshot {
    pub answer: String,
    pub board_colors: Vec<String>,
    pub guessed_words: Vec<String>,
    pub game_status: Status,
    pub error_message: String,
    #[serde(default)]
    pub letter_colors: BTreeMap<String, String>,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct LetterRequest {
    pub letter: String,
}
