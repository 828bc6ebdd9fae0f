use std::sync::Arc;

use crate::{Dictionary, GameSnapshot, GameState, RandomSource};

/// Routes key presses to the current game and deals new ones from the dictionary.
#[derive(Debug)]
pub struct TuffleGame<R> {
    dictionary: Arc<Dictionary>,
    rng: R,
    state: GameState,
}

impl<R: RandomSource> TuffleGame<R> {
    /// Creates a controller with a game already in progress.
    pub fn new(dictionary: Arc<Dictionary>, mut rng: R) -> Self {
        let state = GameState::new(dictionary.pick_secret(&mut rng));
        log::info!("new game started");
        log::debug!("secret word is {}", state.secret());
        Self {
            dictionary,
            rng,
            state,
        }
    }

    pub fn new_game(&mut self) {
        let secret = self.dictionary.pick_secret(&mut self.rng);
        self.state.reset(secret);
        log::info!("new game started");
        log::debug!("secret word is {}", self.state.secret());
    }

    pub fn on_letter(&mut self, c: char) {
        log::debug!("letter {c:?}");
        self.state.add_letter(c);
    }

    pub fn on_enter(&mut self) {
        let is_valid = self.dictionary.is_valid_guess(self.state.current_entry());
        self.state.submit_guess(is_valid);

        if !self.state.error_message().is_empty() {
            log::warn!(
                "rejected guess {:?}: {}",
                self.state.current_entry(),
                self.state.error_message()
            );
        } else if self.state.is_over() {
            log::info!(
                "game over ({:?}) after {} guesses",
                self.state.status(),
                self.state.submitted().count()
            );
        }
    }

    pub fn on_delete(&mut self) {
        self.state.delete_letter();
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn dictionary(&self) -> &Dictionary {
        &self.dictionary
    }

    pub fn snapshot(&self) -> GameSnapshot {
        self.state.snapshot()
    }
}
