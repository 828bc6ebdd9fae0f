use std::{
    io,
    path::PathBuf,
    process,
    sync::{Arc, Mutex, MutexGuard},
};

use actix_web::{
    http::StatusCode,
    middleware::Logger,
    web::{self, Data},
    App, HttpServer, Responder, ResponseError,
};
use clap::Parser;
use squirrel_rng::SquirrelRng;
use tuffle::{Dictionary, LetterRequest, TuffleGame};

type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
enum Error {
    #[error("letters must consist of a single ASCII letter - {0:?} is not valid")]
    IllegalLetter(String),
    #[error("game state is unavailable")]
    Poisoned,
}

impl ResponseError for Error {
    fn status_code(&self) -> StatusCode {
        match self {
            Error::IllegalLetter(_) => StatusCode::BAD_REQUEST,
            Error::Poisoned => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

#[derive(Clone, Debug, Parser)]
struct Args {
    /// path to the list of secret words
    secrets: PathBuf,

    /// path to the list of valid guesses
    guesses: PathBuf,

    /// address to listen on
    #[clap(long, default_value = "127.0.0.1")]
    host: String,

    /// port to listen on
    #[clap(short, long, default_value_t = 8080)]
    port: u16,
}

struct AppState {
    game: Mutex<TuffleGame<SquirrelRng>>,
}

impl AppState {
    fn new(dictionary: Dictionary, rng: SquirrelRng) -> Self {
        Self {
            game: Mutex::new(TuffleGame::new(Arc::new(dictionary), rng)),
        }
    }

    fn game(&self) -> Result<MutexGuard<'_, TuffleGame<SquirrelRng>>> {
        self.game.lock().map_err(|_| Error::Poisoned)
    }
}

#[actix_web::main]
async fn main() -> io::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let dictionary = match Dictionary::from_paths(&args.secrets, &args.guesses) {
        Ok(dictionary) => dictionary,
        Err(e) => {
            log::error!("{e}");
            process::exit(1);
        }
    };

    let data = Data::new(AppState::new(dictionary, SquirrelRng::new()));

    log::info!("listening on {}:{}", args.host, args.port);
    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(data.clone())
            .configure(configure)
    })
    .bind((args.host.as_str(), args.port))?
    .run()
    .await
}

fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(read_game))
        .route("/new_game", web::post().to(new_game))
        .route("/letter", web::post().to(letter_pressed))
        .route("/enter", web::post().to(enter_pressed))
        .route("/delete", web::post().to(delete_pressed));
}

async fn read_game(data: Data<AppState>) -> Result<impl Responder> {
    Ok(web::Json(data.game()?.snapshot()))
}

async fn new_game(data: Data<AppState>) -> Result<impl Responder> {
    let mut game = data.game()?;
    game.new_game();
    Ok(web::Json(game.snapshot()))
}

async fn letter_pressed(
    request: web::Json<LetterRequest>,
    data: Data<AppState>,
) -> Result<impl Responder> {
    // A key press must be exactly one ASCII letter.

    let LetterRequest { letter } = request.into_inner();
    let c = parse_letter(&letter).ok_or_else(|| Error::IllegalLetter(letter))?;

    let mut game = data.game()?;
    game.on_letter(c);
    Ok(web::Json(game.snapshot()))
}

async fn enter_pressed(data: Data<AppState>) -> Result<impl Responder> {
    let mut game = data.game()?;
    game.on_enter();
    Ok(web::Json(game.snapshot()))
}

async fn delete_pressed(data: Data<AppState>) -> Result<impl Responder> {
    let mut game = data.game()?;
    game.on_delete();
    Ok(web::Json(game.snapshot()))
}

fn parse_letter(letter: &str) -> Option<char> {
    let mut chars = letter.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) if c.is_ascii_alphabetic() => Some(c),
        _ => None,
    }
}
