use rand::seq::SliceRandom;
use squirrel_rng::SquirrelRng;
use tuffle::Feedback;

use super::Player;

/// Only guesses words that could still be the answer given every row on the board.
#[derive(Debug)]
pub struct StrategicPlayer {
    candidates: Vec<String>,
    rng: SquirrelRng,
}

impl StrategicPlayer {
    pub fn new(words: Vec<String>) -> Self {
        Self {
            candidates: words,

            // Chosen by mashing keyboard. Plenty random.
            rng: SquirrelRng::with_seed(3408509824),
        }
    }

    #[cfg(test)]
    fn with_candidates(words: &[&str]) -> Self {
        Self::new(words.iter().map(|&word| word.to_owned()).collect())
    }
}

impl Player for StrategicPlayer {
    fn next_guess(&mut self, board: &[(String, Feedback)]) -> Option<String> {
        self.candidates.retain(|candidate| is_consistent(candidate, board));
        log::debug!("{} candidates remain", self.candidates.len());
        self.candidates.choose(&mut self.rng).cloned()
    }

    fn rejected(&mut self, guess: &str) {
        self.candidates.retain(|candidate| candidate != guess);
    }
}

/// True if `candidate` as the secret would have produced every row on the board.
fn is_consistent(candidate: &str, board: &[(String, Feedback)]) -> bool {
    board
        .iter()
        .all(|(guess, feedback)| Feedback::evaluate(guess, candidate) == *feedback)
}
