use clap::ValueEnum;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::{shuffle::shuffle, words::WordRecord};

/// Which language a flashcard shows first
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
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum Direction {
    #[default]
    SourceToTarget,
    TargetToSource,
}

impl Direction {
    /// Human label such as "Italian → English"
    pub fn label(&self, source_language: &str, target_language: &str) -> String {
        match self {
            Direction::SourceToTarget => format!("{source_language} → {target_language}"),
            Direction::TargetToSource => format!("{target_language} → {source_language}"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardSide {
    Front,
    Back,
}

/// Flashcard drill over one lesson.
///
/// `order` is always a full permutation of the lesson's words; the session
/// is rebuilt rather than edited when the lesson changes.
#[derive(Debug, Clone)]
pub struct StudySession {
    order: Vec<WordRecord>,
    cursor: usize,
    flipped: bool,
    direction: Direction,
}

impl StudySession {
    pub fn new<R: Rng + ?Sized>(words: &[WordRecord], direction: Direction, rng: &mut R) -> Self {
        Self {
            order: shuffle(words, rng),
            cursor: 0,
            flipped: false,
            direction,
        }
    }

    pub fn flip(&mut self) {
        self.flipped = !self.flipped;
    }

    /// Moves to the next card. Returns false at the last card.
    pub fn advance(&mut self) -> bool {
        if !self.has_next() {
            return false;
        }
        self.cursor += 1;
        self.flipped = false;
        true
    }

    /// Moves to the previous card. Returns false at the first card.
    pub fn retreat(&mut self) -> bool {
        if !self.has_previous() {
            return false;
        }
        self.cursor -= 1;
        self.flipped = false;
        true
    }

    pub fn set_direction(&mut self, direction: Direction) {
        self.direction = direction;
        self.flipped = false;
    }

    pub fn reshuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.order = shuffle(&self.order, rng);
        self.cursor = 0;
        self.flipped = false;
    }

    pub fn current(&self) -> Option<&WordRecord> {
        self.order.get(self.cursor)
    }

    /// `(front, back)` for the current card. Flipping never changes the pair.
    pub fn current_pair(&self) -> Option<(&str, &str)> {
        self.current().map(|word| match self.direction {
            Direction::SourceToTarget => (word.source.as_str(), word.target.as_str()),
            Direction::TargetToSource => (word.target.as_str(), word.source.as_str()),
        })
    }

    pub fn visible_side(&self) -> CardSide {
        if self.flipped {
            CardSide::Back
        } else {
            CardSide::Front
        }
    }

    pub fn visible_text(&self) -> Option<&str> {
        self.current_pair().map(|(front, back)| match self.visible_side() {
            CardSide::Front => front,
            CardSide::Back => back,
        })
    }

    pub fn has_previous(&self) -> bool {
        self.cursor > 0
    }

    pub fn has_next(&self) -> bool {
        self.cursor + 1 < self.order.len()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn is_flipped(&self) -> bool {
        self.flipped
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn order(&self) -> &[WordRecord] {
        &self.order
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}
