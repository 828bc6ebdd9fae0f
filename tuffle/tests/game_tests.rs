use std::sync::Arc;

use squirrel_rng::SquirrelRng;
use tuffle::{
    Dictionary, RandomSource, Status, TuffleGame, INVALID_GUESS, MAX_GUESSES, NOT_ENOUGH_LETTERS,
};

/// Hands out scripted indices in order, repeating the last one.
struct Script {
    picks: Vec<usize>,
    next: usize,
}

impl Script {
    fn new(picks: &[usize]) -> Self {
        Self {
            picks: picks.to_vec(),
            next: 0,
        }
    }
}

impl RandomSource for Script {
    fn next_in_range(&mut self, n: usize) -> usize {
        let idx = self.picks[self.next.min(self.picks.len() - 1)];
        self.next += 1;
        idx % n
    }
}

const SECRETS: [&str; 2] = ["light", "tuffy"];
const GUESSES: [&str; 8] = [
    "drawn", "plays", "gloss", "hello", "night", "yummy", "staff", "heart",
];

fn game_with(secret: &str) -> TuffleGame<Script> {
    let dictionary = Dictionary::new(SECRETS, GUESSES).unwrap();
    let idx = SECRETS.iter().position(|&s| s == secret).unwrap();
    TuffleGame::new(Arc::new(dictionary), Script::new(&[idx]))
}

fn type_word<R: RandomSource>(game: &mut TuffleGame<R>, word: &str) {
    word.chars().for_each(|c| game.on_letter(c));
}

fn submit<R: RandomSource>(game: &mut TuffleGame<R>, word: &str) {
    type_word(game, word);
    game.on_enter();
}

fn board_after(secret: &str, guess: &str) -> String {
    let mut game = game_with(secret);
    submit(&mut game, guess);
    game.snapshot().board_colors.concat()
}

#[test]
fn drawn_against_light() {
    assert_eq!(board_after("light", "drawn"), "BBBBB");
}

#[test]
fn plays_against_light() {
    assert_eq!(board_after("light", "plays"), "BYBBB");
}

#[test]
fn gloss_against_light() {
    assert_eq!(board_after("light", "gloss"), "YYBBB");
}

#[test]
fn light_against_light_wins() {
    let mut game = game_with("light");
    submit(&mut game, "light");
    let snapshot = game.snapshot();
    assert_eq!(snapshot.board_colors, ["GGGGG"]);
    assert_eq!(snapshot.game_status, Status::Won);
}

#[test]
fn yummy_against_tuffy() {
    assert_eq!(board_after("tuffy", "yummy"), "BGBBG");
}

#[test]
fn staff_against_tuffy() {
    assert_eq!(board_after("tuffy", "staff"), "BYBGY");
}

#[test]
fn extra_letters_before_winning_are_ignored() {
    let mut game = game_with("light");
    submit(&mut game, "lighttttttt");
    assert_eq!(game.snapshot().game_status, Status::Won);
}

#[test]
fn six_misses_lose_and_seventh_is_ignored() {
    let mut game = game_with("light");
    for _ in 0..MAX_GUESSES {
        submit(&mut game, "hello");
    }
    let lost = game.snapshot();
    assert_eq!(lost.game_status, Status::Lost);
    assert_eq!(lost.board_colors.len(), MAX_GUESSES);

    submit(&mut game, "light");
    assert_eq!(game.snapshot(), lost);
}

#[test]
fn new_game_after_win_resets() {
    let mut game = game_with("light");
    submit(&mut game, "light");
    game.new_game();
    let snapshot = game.snapshot();
    assert_eq!(snapshot.game_status, Status::Active);
    assert!(snapshot.board_colors.is_empty());
    assert!(snapshot.guessed_words.is_empty());
}

#[test]
fn new_game_after_loss_resets() {
    let mut game = game_with("light");
    for _ in 0..MAX_GUESSES {
        submit(&mut game, "hello");
    }
    game.new_game();
    let snapshot = game.snapshot();
    assert_eq!(snapshot.game_status, Status::Active);
    assert!(snapshot.board_colors.is_empty());
    assert!(snapshot.guessed_words.is_empty());
    assert_eq!(snapshot.error_message, "");
}

#[test]
fn guessed_words_track_rows() {
    let mut game = game_with("light");
    assert!(game.snapshot().guessed_words.is_empty());

    game.on_letter('d');
    assert_eq!(game.snapshot().guessed_words.len(), 1);
    game.on_delete();

    submit(&mut game, "hello");
    type_word(&mut game, "h");
    assert_eq!(game.snapshot().guessed_words, ["hello", "h"]);

    game.new_game();
    assert!(game.snapshot().guessed_words.is_empty());
}

#[test]
fn deleting_then_retyping_rewrites_row() {
    let mut game = game_with("light");
    type_word(&mut game, "hello");
    (0..3).for_each(|_| game.on_delete());
    type_word(&mut game, "artsy");
    assert_eq!(game.snapshot().guessed_words, ["heart"]);

    game.on_enter();
    submit(&mut game, "night");
    game.on_letter('t');
    game.on_delete();
    type_word(&mut game, "cpp");
    assert_eq!(game.snapshot().guessed_words, ["heart", "night", "cpp"]);
}

#[test]
fn error_messages() {
    let mut game = game_with("light");
    assert_eq!(game.snapshot().error_message, "");

    submit(&mut game, "zz");
    assert_eq!(game.snapshot().error_message, NOT_ENOUGH_LETTERS);

    type_word(&mut game, "zzz");
    assert_eq!(game.snapshot().error_message, "");
    game.on_enter();
    assert_eq!(game.snapshot().error_message, INVALID_GUESS);
    assert_eq!(game.snapshot().guessed_words, ["zzzzz"]);
    assert!(game.snapshot().board_colors.is_empty());
}

#[test]
fn valid_submission_then_short_submission() {
    let mut game = game_with("light");
    submit(&mut game, "hello");
    assert_eq!(game.snapshot().error_message, "");
    submit(&mut game, "h");
    assert_eq!(game.snapshot().error_message, NOT_ENOUGH_LETTERS);
}

#[test]
fn snapshot_serializes_frontend_fields() {
    let mut game = game_with("light");
    submit(&mut game, "gloss");
    type_word(&mut game, "ni");

    let json = serde_json::to_value(game.snapshot()).unwrap();
    assert_eq!(json["answer"], "light");
    assert_eq!(json["boardColors"], serde_json::json!(["YYBBB"]));
    assert_eq!(json["guessedWords"], serde_json::json!(["gloss", "ni"]));
    assert_eq!(json["gameStatus"], "active");
    assert_eq!(json["errorMessage"], "");
    assert_eq!(json["letterColors"]["g"], "Y");
    assert_eq!(json["letterColors"]["s"], "B");
}

#[test]
fn finished_games_report_win_and_lose() {
    let mut game = game_with("light");
    submit(&mut game, "light");
    let json = serde_json::to_value(game.snapshot()).unwrap();
    assert_eq!(json["gameStatus"], "win");

    game.new_game();
    for _ in 0..MAX_GUESSES {
        submit(&mut game, "hello");
    }
    let json = serde_json::to_value(game.snapshot()).unwrap();
    assert_eq!(json["gameStatus"], "lose");
}

#[test]
fn seeded_draws_come_from_secret_list() {
    let words = [
        "light", "tuffy", "night", "crane", "plays", "gloss", "heart", "drawn", "staff", "hello",
    ];
    let dictionary = Arc::new(Dictionary::new(words, words).unwrap());
    let mut game = TuffleGame::new(dictionary, SquirrelRng::with_seed(3408509824));

    let mut answers = Vec::new();
    for _ in 0..20 {
        let answer = game.snapshot().answer;
        assert_eq!(answer.len(), 5);
        assert!(words.contains(&answer.as_str()));
        answers.push(answer);
        game.new_game();
    }

    answers.dedup();
    assert!(answers.len() > 1);
}
