use include_dir::{include_dir, Dir};
use serde::{Deserialize, Serialize};
use std::{
    fs,
    io::Read,
    path::{Path, PathBuf},
};
use thiserror::Error;
use tracing::{debug, warn};

use crate::lesson::{LESSON_COUNT, LESSON_SIZE};

static DATA_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/src/data");

const ITALIAN_1K: &str = "italian1k.json";

/// Number of records every dataset must carry: one full lesson per catalog entry.
pub const DATASET_SIZE: usize = LESSON_SIZE * LESSON_COUNT as usize;

/// A single ranked word with its translation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordRecord {
    pub rank: u32,
    pub source: String,
    pub target: String,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ShapeViolation {
    #[error("expected {expected} words, found {found}")]
    WrongCount { expected: usize, found: usize },
    #[error("word at position {position} has rank {found}, expected {expected}")]
    RankMismatch {
        position: usize,
        expected: u32,
        found: u32,
    },
}

#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("embedded dataset {0} is missing")]
    MissingEmbedded(&'static str),
    #[error("unable to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("unable to deserialize dataset json: {0}")]
    Json(#[from] serde_json::Error),
    #[error("unable to deserialize dataset csv: {0}")]
    Csv(#[from] csv::Error),
    #[error("unsupported dataset format {0} (expected .json or .csv)")]
    UnsupportedFormat(PathBuf),
    #[error("dataset shape violation: {0}")]
    ShapeViolation(#[from] ShapeViolation),
}

#[derive(Deserialize)]
struct DatasetFile {
    name: String,
    source_language: String,
    target_language: String,
    words: Vec<WordRecord>,
}

/// Immutable, validated word list shared by every lesson
#[derive(Debug, Clone)]
pub struct WordStore {
    name: String,
    source_language: String,
    target_language: String,
    words: Vec<WordRecord>,
}

impl WordStore {
    /// Builds a store after checking the dataset has exactly [`DATASET_SIZE`]
    /// records ranked `1..=DATASET_SIZE` in order.
    pub fn from_records(
        name: impl Into<String>,
        source_language: impl Into<String>,
        target_language: impl Into<String>,
        words: Vec<WordRecord>,
    ) -> Result<Self, DatasetError> {
        validate_shape(&words)?;

        let store = Self {
            name: name.into(),
            source_language: source_language.into(),
            target_language: target_language.into(),
            words,
        };
        debug!(name = %store.name, words = store.words.len(), "loaded word store");

        Ok(store)
    }

    /// The bundled Italian/English list of the 1000 most common words.
    pub fn italian_1k() -> Result<Self, DatasetError> {
        let file = DATA_DIR
            .get_file(ITALIAN_1K)
            .ok_or(DatasetError::MissingEmbedded(ITALIAN_1K))?;
        let contents = file
            .contents_utf8()
            .ok_or(DatasetError::MissingEmbedded(ITALIAN_1K))?;

        Self::from_json_str(contents)
    }

    pub fn from_json_str(json: &str) -> Result<Self, DatasetError> {
        let file: DatasetFile = serde_json::from_str(json)?;
        Self::from_records(
            file.name,
            file.source_language,
            file.target_language,
            file.words,
        )
    }

    /// Reads `rank,source,target` rows. CSV carries no language names, so the
    /// generic "Source"/"Target" labels are used.
    pub fn from_csv_reader<R: Read>(name: &str, reader: R) -> Result<Self, DatasetError> {
        let mut rdr = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);
        let words = rdr
            .deserialize::<WordRecord>()
            .collect::<Result<Vec<_>, _>>()?;

        Self::from_records(name, "Source", "Target", words)
    }

    /// Loads a custom dataset, picking the parser from the file extension.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, DatasetError> {
        let path = path.as_ref();
        let io_err = |source| DatasetError::Io {
            path: path.to_path_buf(),
            source,
        };

        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => {
                let contents = fs::read_to_string(path).map_err(io_err)?;
                Self::from_json_str(&contents)
            }
            Some(ext) if ext.eq_ignore_ascii_case("csv") => {
                let file = fs::File::open(path).map_err(io_err)?;
                let name = path
                    .file_stem()
                    .and_then(|stem| stem.to_str())
                    .unwrap_or("custom");
                Self::from_csv_reader(name, file)
            }
            _ => Err(DatasetError::UnsupportedFormat(path.to_path_buf())),
        }
    }

    /// Half-open range `[start, end)` of the backing list.
    ///
    /// Lesson descriptors always produce valid bounds. Anything outside
    /// `0 <= start <= end <= len` yields an empty slice instead of panicking.
    pub fn slice(&self, start: usize, end: usize) -> &[WordRecord] {
        match self.words.get(start..end) {
            Some(words) => words,
            None => {
                warn!(start, end, len = self.words.len(), "word slice out of range");
                &[]
            }
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn source_language(&self) -> &str {
        &self.source_language
    }

    pub fn target_language(&self) -> &str {
        &self.target_language
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

fn validate_shape(words: &[WordRecord]) -> Result<(), ShapeViolation> {
    if words.len() != DATASET_SIZE {
        return Err(ShapeViolation::WrongCount {
            expected: DATASET_SIZE,
            found: words.len(),
        });
    }

    // Dense, unique and increasing all collapse to "rank == position + 1".
    for (position, word) in words.iter().enumerate() {
        let expected = position as u32 + 1;
        if word.rank != expected {
            return Err(ShapeViolation::RankMismatch {
                position,
                expected,
                found: word.rank,
            });
        }
    }

    Ok(())
}

/// Well-formed synthetic records for tests: `parola{rank}` / `word{rank}`.
#[cfg(test)]
pub(crate) fn synthetic_records(count: usize) -> Vec<WordRecord> {
    (1..=count as u32)
        .map(|rank| WordRecord {
            rank,
            source: format!("parola{rank}"),
            target: format!("word{rank}"),
        })
        .collect()
}

#[cfg(test)]
pub(crate) fn synthetic_store() -> WordStore {
    WordStore::from_records("synthetic", "Italian", "English", synthetic_records(DATASET_SIZE))
        .unwrap()
}
