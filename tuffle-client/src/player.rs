mod random;
mod strategic;
mod user;

pub use random::RandomPlayer;
pub use strategic::StrategicPlayer;
pub use user::UserInputPlayer;

use tuffle::Feedback;

pub trait Player {
    /// Picks the next word to type, or `None` when the player has nothing left to try.
    fn next_guess(&mut self, board: &[(String, Feedback)]) -> Option<String>;

    /// Called when the server refused `guess`.
    fn rejected(&mut self, _guess: &str) {}
}
