//! Character catalog: the ordered table every quiz and writing session draws from.
//!
//! Row order is difficulty order. A level `n` unlocks the first `n * 10`
//! rows, so every level's slice is a prefix of the next one.

use std::collections::HashSet;
use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

use crate::error::{CatalogError, LevelError};

mod data;

pub const MAX_LEVEL: u32 = 10;
pub const CHARS_PER_LEVEL: usize = 10;

/// Difficulty tier, always within `1..=MAX_LEVEL`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct Level(u32);

impl Level {
    pub const FIRST: Level = Level(1);

    pub fn new(n: u32) -> Result<Self, LevelError> {
        if (1..=MAX_LEVEL).contains(&n) {
            Ok(Level(n))
        } else {
            Err(LevelError::OutOfRange(n))
        }
    }

    pub fn get(self) -> u32 {
        self.0
    }

    /// Number of characters unlocked at this level before clamping.
    pub fn char_count(self) -> usize {
        self.0 as usize * CHARS_PER_LEVEL
    }

    pub fn all() -> impl Iterator<Item = Level> {
        (1..=MAX_LEVEL).map(Level)
    }
}

impl TryFrom<u32> for Level {
    type Error = LevelError;
    fn try_from(n: u32) -> Result<Self, Self::Error> {
        Level::new(n)
    }
}

impl From<Level> for u32 {
    fn from(level: Level) -> u32 {
        level.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Example {
    pub chinese: String,
    pub pinyin: String,
    pub meaning: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharacterRecord {
    #[serde(rename = "char")]
    pub glyph: String,
    pub pinyin: String,
    /// `/` separated alternatives, e.g. `"persona/gente"`.
    pub meaning: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub example: Option<Example>,
}

impl CharacterRecord {
    pub fn new(glyph: &str, pinyin: &str, meaning: &str) -> Self {
        Self {
            glyph: glyph.to_string(),
            pinyin: pinyin.to_string(),
            meaning: meaning.to_string(),
            example: None,
        }
    }

    pub fn with_example(mut self, chinese: &str, pinyin: &str, meaning: &str) -> Self {
        self.example = Some(Example {
            chinese: chinese.to_string(),
            pinyin: pinyin.to_string(),
            meaning: meaning.to_string(),
        });
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    records: Vec<CharacterRecord>,
}

impl Catalog {
    /// Builds a catalog, rejecting empty tables and repeated glyphs.
    pub fn new(records: Vec<CharacterRecord>) -> Result<Self, CatalogError> {
        if records.is_empty() {
            return Err(CatalogError::Empty);
        }
        let mut seen = HashSet::new();
        for r in &records {
            if !seen.insert(r.glyph.as_str()) {
                return Err(CatalogError::DuplicateGlyph(r.glyph.clone()));
            }
        }
        Ok(Self { records })
    }

    /// The bundled table of the 100 most frequent characters.
    pub fn builtin() -> &'static Catalog {
        static BUILTIN: OnceLock<Catalog> = OnceLock::new();
        BUILTIN.get_or_init(|| {
            let records = data::CHARACTER_TABLE
                .iter()
                .map(|&(glyph, pinyin, meaning, example)| {
                    let rec = CharacterRecord::new(glyph, pinyin, meaning);
                    match example {
                        Some((zh, py, es)) => rec.with_example(zh, py, es),
                        None => rec,
                    }
                })
                .collect();
            Catalog { records }
        })
    }

    /// Parses a JSON array of records (`char`, `pinyin`, `meaning`, optional `example`).
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let records: Vec<CharacterRecord> =
            serde_json::from_str(json).map_err(|e| CatalogError::Malformed(e.to_string()))?;
        Self::new(records)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[CharacterRecord] {
        &self.records
    }

    /// Prefix of `level * 10` records. Clamped to the full catalog when the
    /// table is shorter than the level asks for.
    pub fn characters_for_level(&self, level: Level) -> &[CharacterRecord] {
        let end = level.char_count().min(self.records.len());
        &self.records[..end]
    }

    /// The ten records a level adds on top of the previous one, clamped.
    pub fn level_window(&self, level: Level) -> &[CharacterRecord] {
        let end = level.char_count().min(self.records.len());
        let start = (level.char_count() - CHARS_PER_LEVEL).min(end);
        &self.records[start..end]
    }

    pub fn find(&self, glyph: &str) -> Option<&CharacterRecord> {
        self.records.iter().find(|r| r.glyph == glyph)
    }
}
