use std::process;

use anyhow::Context;
use clap::{Parser, Subcommand};
use player::{Player, RandomPlayer, StrategicPlayer, UserInputPlayer};
use reqwest::blocking::Client;
use serde::Serialize;
use tuffle::{Dictionary, Feedback, GameSnapshot, LetterRequest, Status};

mod player;

#[derive(Debug, Parser)]
struct Args {
    /// tuffle server url
    server: String,

    #[clap(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    Random(PlayerConfig),
    Strategic(PlayerConfig),
    User,
}

#[derive(Debug, Parser)]
struct PlayerConfig {
    /// path to dictionary
    dictionary: String,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    if let Err(e) = run(&Args::parse()) {
        eprintln!("{e:#}");
        process::exit(1);
    }
}

fn run(args: &Args) -> anyhow::Result<()> {
    let session = Session::new(&args.server)?;
    let mut player = build_player(&args.command)?;
    let mut snapshot = session.post("new_game", None::<&()>)?;

    while snapshot.game_status == Status::Active {
        let rows = board(&snapshot)?;
        let guess = player
            .next_guess(&rows)
            .context("out of words to guess")?;

        for letter in guess.chars().map(String::from) {
            session.post("letter", Some(&LetterRequest { letter }))?;
        }
        snapshot = session.post("enter", None::<&()>)?;

        if !snapshot.error_message.is_empty() {
            println!("{guess}: {}", snapshot.error_message);
            player.rejected(&guess);

            // Clear the row so the next guess starts from an empty entry.
            for _ in 0..guess.len() {
                snapshot = session.post("delete", None::<&()>)?;
            }
            continue;
        }

        if let Some((word, feedback)) = board(&snapshot)?.last() {
            println!("{word} {feedback}");
        }
    }

    let GameSnapshot { answer, .. } = &snapshot;
    match snapshot.game_status {
        Status::Won => println!("The word was: {answer}\nWe win!"),
        _ => println!("The word was: {answer}\nWe lose. :("),
    }

    Ok(())
}

struct Session {
    client: Client,
    server: String,
}

impl Session {
    fn new(server: &str) -> anyhow::Result<Self> {
        let client = Client::builder()
            .user_agent(concat!("tuffle-client v", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            client,
            server: server.trim_end_matches('/').to_owned(),
        })
    }

    fn post<T: Serialize>(&self, route: &str, body: Option<&T>) -> anyhow::Result<GameSnapshot> {
        let mut request = self.client.post(format!("{}/{}", self.server, route));
        if let Some(body) = body {
            request = request.json(body);
        }

        let snapshot = request.send()?.error_for_status()?.json()?;
        Ok(snapshot)
    }
}

/// Pairs each submitted word with its parsed color code.
fn board(snapshot: &GameSnapshot) -> anyhow::Result<Vec<(String, Feedback)>> {
    snapshot
        .guessed_words
        .iter()
        .zip(&snapshot.board_colors)
        .map(|(word, colors)| -> anyhow::Result<_> { Ok((word.clone(), colors.parse()?)) })
        .collect()
}

fn build_player(command: &Command) -> anyhow::Result<Box<dyn Player>> {
    match command {
        Command::Random(config) => Ok(Box::new(RandomPlayer::new(load_words(config)?))),
        Command::Strategic(config) => Ok(Box::new(StrategicPlayer::new(load_words(config)?))),
        Command::User => Ok(Box::new(UserInputPlayer)),
    }
}

fn load_words(config: &PlayerConfig) -> anyhow::Result<Vec<String>> {
    let dictionary = Dictionary::from_paths(&config.dictionary, &config.dictionary)
        .with_context(|| format!("unable to load dictionary {}", config.dictionary))?;
    Ok(dictionary.secrets().to_vec())
}
