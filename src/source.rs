use clap::ValueEnum;
use include_dir::{include_dir, Dir};
use rand::{seq::SliceRandom, Rng};
use serde::{Deserialize, Serialize};
use std::{
    fs, io,
    path::{Path, PathBuf},
};
use thiserror::Error;
use tracing::{debug, warn};

static LIST_DIR: Dir = include_dir!("src/lists");

/// Which list the player is copying from.
#[derive(
    Debug,
    Default,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    ValueEnum,
    strum_macros::Display,
)]
#[serde(rename_all = "lowercase")]
pub enum Source {
    #[default]
    Words,
    Sentences,
}

impl Source {
    /// Maps a radio control value to a source: "1" is the word list,
    /// anything else the sentence list.
    pub fn from_radio_value(value: &str) -> Self {
        if value == "1" {
            Source::Words
        } else {
            Source::Sentences
        }
    }

    pub fn radio_value(&self) -> &'static str {
        match self {
            Source::Words => "1",
            Source::Sentences => "2",
        }
    }

    fn builtin_file(&self) -> &'static str {
        match self {
            Source::Words => "words.json",
            Source::Sentences => "sentences.json",
        }
    }
}

#[derive(Debug, Error)]
pub enum ListError {
    #[error("could not read item list {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("could not parse item list {origin}: {source}")]
    Json {
        origin: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("item list {0} has no items")]
    Empty(String),
    #[error("built-in item list {0} is missing")]
    MissingBuiltin(String),
}

#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
pub struct ItemList {
    pub name: String,
    pub items: Vec<String>,
}

impl ItemList {
    pub fn builtin(source: Source) -> Result<Self, ListError> {
        let file_name = source.builtin_file();
        let contents = LIST_DIR
            .get_file(file_name)
            .and_then(|f| f.contents_utf8())
            .ok_or_else(|| ListError::MissingBuiltin(file_name.to_string()))?;

        Self::from_json(contents, file_name)
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, ListError> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|source| ListError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        Self::from_json(&contents, &path.display().to_string())
    }

    /// Parses a list and drops blank entries; a list left empty is rejected.
    pub fn from_json(contents: &str, origin: &str) -> Result<Self, ListError> {
        let mut list: ItemList =
            serde_json::from_str(contents).map_err(|source| ListError::Json {
                origin: origin.to_string(),
                source,
            })?;

        let before = list.items.len();
        list.items.retain(|item| !item.trim().is_empty());
        if list.items.len() != before {
            warn!(
                list = %origin,
                dropped = before - list.items.len(),
                "dropped blank items"
            );
        }

        if list.items.is_empty() {
            return Err(ListError::Empty(origin.to_string()));
        }

        debug!(list = %origin, items = list.items.len(), "loaded item list");
        Ok(list)
    }
}

/// The two item sequences a session can draw from.
#[derive(Debug, Clone, PartialEq)]
pub struct ItemLists {
    words: Vec<String>,
    sentences: Vec<String>,
}

impl ItemLists {
    /// Blank items are dropped: an empty item would count as typed on an
    /// empty input.
    pub fn new(mut words: Vec<String>, mut sentences: Vec<String>) -> Self {
        words.retain(|item| !item.trim().is_empty());
        sentences.retain(|item| !item.trim().is_empty());
        Self { words, sentences }
    }

    /// Toggling between lists of different lengths can leave the position
    /// past the end of the shorter one.
    pub fn lengths_match(&self) -> bool {
        self.words.len() == self.sentences.len()
    }

    pub fn builtin() -> Result<Self, ListError> {
        Self::load(None, None)
    }

    /// Loads the lists, preferring the given files over the built-in ones.
    pub fn load(words_file: Option<&Path>, sentences_file: Option<&Path>) -> Result<Self, ListError> {
        let words = match words_file {
            Some(path) => ItemList::from_path(path)?,
            None => ItemList::builtin(Source::Words)?,
        };
        let sentences = match sentences_file {
            Some(path) => ItemList::from_path(path)?,
            None => ItemList::builtin(Source::Sentences)?,
        };

        let lists = Self::new(words.items, sentences.items);
        if !lists.lengths_match() {
            warn!(
                words = lists.words.len(),
                sentences = lists.sentences.len(),
                "word and sentence lists differ in length; switching lists may end the game early"
            );
        }
        Ok(lists)
    }

    pub fn get(&self, source: Source) -> &[String] {
        match source {
            Source::Words => &self.words,
            Source::Sentences => &self.sentences,
        }
    }

    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.words.shuffle(rng);
        self.sentences.shuffle(rng);
    }
}
