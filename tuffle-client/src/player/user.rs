use read_input::{shortcut::input, InputBuild};
use tuffle::{Feedback, WORD_LENGTH};

use super::Player;

pub struct UserInputPlayer;

impl Player for UserInputPlayer {
    fn next_guess(&mut self, board: &[(String, Feedback)]) -> Option<String> {
        println!("(Guesses so far: {})", board.len());
        let guess: String = input()
            .msg("Guess: ")
            .repeat_msg("Guess: ")
            .add_test(|word: &String| {
                word.len() == WORD_LENGTH && word.bytes().all(|u| u.is_ascii_alphabetic())
            })
            .err("Try entering a five letter word")
            .get();
        Some(guess.to_ascii_lowercase())
    }
}
