use rand::Rng;
use squirrel_rng::SquirrelRng;
use tuffle::Feedback;

use super::Player;

/// Guesses words from its dictionary in random order, ignoring the board.
pub struct RandomPlayer {
    words: Vec<String>,
    rng: SquirrelRng,
}

impl RandomPlayer {
    pub fn new(words: Vec<String>) -> Self {
        Self {
            words,
            rng: SquirrelRng::new(),
        }
    }
}

impl Player for RandomPlayer {
    fn next_guess(&mut self, _board: &[(String, Feedback)]) -> Option<String> {
        if self.words.is_empty() {
            return None;
        }

        let idx = self.rng.gen_range(0..self.words.len());
        Some(self.words.swap_remove(idx))
    }
}
