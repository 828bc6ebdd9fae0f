use std::{fs, path::Path};

use hashbrown::HashSet;

use crate::{random::RandomSource, Error, Result, WORD_LENGTH};

/// The words a game may be played with.
///
/// Secret words are kept in order so that a draw is a uniform pick by index. Valid guesses are a
/// superset of the secret words.
#[derive(Clone, Debug)]
pub struct Dictionary {
    secrets: Vec<String>,
    guesses: HashSet<String>,
}

impl Dictionary {
    pub fn new<S, G>(secrets: S, guesses: G) -> Result<Self>
    where
        S: IntoIterator,
        S::Item: AsRef<str>,
        G: IntoIterator,
        G::Item: AsRef<str>,
    {
        Self::build(secrets, guesses, "secret words")
    }

    /// Reads whitespace-separated word lists from disk.
    pub fn from_paths(secrets: impl AsRef<Path>, guesses: impl AsRef<Path>) -> Result<Self> {
        let secrets = secrets.as_ref();
        let secret_text = read_list(secrets)?;
        let guess_text = read_list(guesses.as_ref())?;

        let dictionary = Self::build(
            secret_text.split_whitespace(),
            guess_text.split_whitespace(),
            &secrets.display().to_string(),
        )?;

        log::info!(
            "loaded {} secret words and {} valid guesses",
            dictionary.secrets.len(),
            dictionary.guesses.len()
        );

        Ok(dictionary)
    }

    fn build<S, G>(secrets: S, guesses: G, source: &str) -> Result<Self>
    where
        S: IntoIterator,
        S::Item: AsRef<str>,
        G: IntoIterator,
        G::Item: AsRef<str>,
    {
        let secrets: Vec<_> = secrets
            .into_iter()
            .filter_map(|word| normalize(word.as_ref()))
            .collect();

        if secrets.is_empty() {
            return Err(Error::EmptyWordList(source.into()));
        }

        let mut guesses: HashSet<_> = guesses
            .into_iter()
            .filter_map(|word| normalize(word.as_ref()))
            .collect();
        guesses.extend(secrets.iter().cloned());

        Ok(Self { secrets, guesses })
    }

    /// Draws a secret word uniformly at random.
    pub fn pick_secret(&self, rng: &mut impl RandomSource) -> &str {
        &self.secrets[rng.next_in_range(self.secrets.len())]
    }

    /// True iff `word` is exactly five letters long and appears in the guess list.
    pub fn is_valid_guess(&self, word: &str) -> bool {
        word.len() == WORD_LENGTH && self.guesses.contains(word)
    }

    pub fn is_secret(&self, word: &str) -> bool {
        self.secrets.iter().any(|secret| secret == word)
    }

    pub fn secrets(&self) -> &[String] {
        &self.secrets
    }
}

fn read_list(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|source| Error::Io {
        path: path.to_owned(),
        source,
    })
}

fn normalize(word: &str) -> Option<String> {
    let word = word.trim();
    (word.len() == WORD_LENGTH && word.bytes().all(|u| u.is_ascii_alphabetic()))
        .then(|| word.to_ascii_lowercase())
}
