//! Level and song value types.
use serde::{Deserialize, Serialize};
use std::convert::TryFrom;
use std::fmt;
use std::hash::{Hash, Hasher};

use crate::difficulty::{DemonDifficulty, Difficulty, DifficultyName, Tier};
use crate::error::{ReportError, Result};

/// Music attached to a level.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Song {
    pub id: i64,
    pub title: String,
    pub artist: String,
    /// `false` for the built-in soundtrack, `true` for uploaded songs
    #[serde(default)]
    pub is_custom: bool,
}

impl Song {
    #[must_use]
    pub fn official(id: i64, title: impl Into<String>, artist: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            artist: artist.into(),
            is_custom: false,
        }
    }

    #[must_use]
    pub fn custom(id: i64, title: impl Into<String>, artist: impl Into<String>) -> Self {
        Self {
            is_custom: true,
            ..Self::official(id, title, artist)
        }
    }
}

/// One rated level.
///
/// Identity is the level id alone: two values with the same id compare equal
/// and hash the same even when a stale copy disagrees on every other field.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "LevelRecord", into = "LevelRecord")]
pub struct Level {
    pub id: i64,
    pub name: String,
    pub creator: String,
    pub difficulty: Difficulty,
    pub stars: i16,
    /// Featured score; `<= 0` means the level is not featured
    pub featured_score: i32,
    pub epic: bool,
    pub downloads: i64,
    pub likes: i64,
    pub description: String,
    pub song: Song,
}

impl Level {
    #[must_use]
    pub fn builder(
        id: i64,
        name: impl Into<String>,
        creator: impl Into<String>,
        difficulty: Difficulty,
    ) -> LevelBuilder {
        LevelBuilder::new(id, name.into(), creator.into(), difficulty)
    }

    #[must_use]
    pub const fn tier(&self) -> Tier {
        Tier::of(self.difficulty)
    }

    #[must_use]
    pub const fn is_featured(&self) -> bool {
        self.featured_score > 0
    }

    #[must_use]
    pub const fn is_awarded(&self) -> bool {
        self.stars > 0
    }

    #[must_use]
    pub const fn is_demon(&self) -> bool {
        self.difficulty.is_demon()
    }

    /// Description length in characters, the key of the longest-description list.
    #[must_use]
    pub fn description_len(&self) -> usize {
        self.description.chars().count()
    }
}

impl PartialEq for Level {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Level {}

impl Hash for Level {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "\"{}\" by {} ({}) — likes: {}, downloads: {}",
            self.name, self.creator, self.id, self.likes, self.downloads
        )
    }
}

/// Fluent constructor, mostly for sources and fixtures.
#[derive(Debug, Clone)]
pub struct LevelBuilder {
    level: Level,
}

impl LevelBuilder {
    fn new(id: i64, name: String, creator: String, difficulty: Difficulty) -> Self {
        Self {
            level: Level {
                id,
                name,
                creator,
                difficulty,
                stars: 0,
                featured_score: 0,
                epic: false,
                downloads: 0,
                likes: 0,
                description: String::new(),
                song: Song::official(0, "Unknown", "Unknown"),
            },
        }
    }

    #[must_use]
    pub fn stars(mut self, stars: i16) -> Self {
        self.level.stars = stars;
        self
    }

    #[must_use]
    pub fn featured_score(mut self, score: i32) -> Self {
        self.level.featured_score = score;
        self
    }

    #[must_use]
    pub fn epic(mut self, epic: bool) -> Self {
        self.level.epic = epic;
        self
    }

    #[must_use]
    pub fn downloads(mut self, downloads: i64) -> Self {
        self.level.downloads = downloads;
        self
    }

    #[must_use]
    pub fn likes(mut self, likes: i64) -> Self {
        self.level.likes = likes;
        self
    }

    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.level.description = description.into();
        self
    }

    #[must_use]
    pub fn song(mut self, song: Song) -> Self {
        self.level.song = song;
        self
    }

    #[must_use]
    pub fn build(self) -> Level {
        self.level
    }
}

/// Wire shape of a level in exported JSON.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelRecord {
    pub id: i64,
    pub name: String,
    pub creator: String,
    pub difficulty: DifficultyName,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub demon_difficulty: Option<DemonDifficulty>,
    #[serde(default)]
    pub stars: i16,
    #[serde(default)]
    pub featured_score: i32,
    #[serde(default)]
    pub epic: bool,
    #[serde(default)]
    pub downloads: i64,
    #[serde(default)]
    pub likes: i64,
    #[serde(default)]
    pub description: String,
    pub song: Song,
}

impl TryFrom<LevelRecord> for Level {
    type Error = ReportError;

    fn try_from(record: LevelRecord) -> Result<Self> {
        let difficulty = Difficulty::from_parts(record.difficulty, record.demon_difficulty)
            .map_err(|reason| ReportError::InvalidLevel {
                id: record.id,
                reason,
            })?;
        Ok(Self {
            id: record.id,
            name: record.name,
            creator: record.creator,
            difficulty,
            stars: record.stars,
            featured_score: record.featured_score,
            epic: record.epic,
            downloads: record.downloads,
            likes: record.likes,
            description: record.description,
            song: record.song,
        })
    }
}

impl From<Level> for LevelRecord {
    fn from(level: Level) -> Self {
        Self {
            id: level.id,
            name: level.name,
            creator: level.creator,
            difficulty: level.difficulty.name(),
            demon_difficulty: level.difficulty.demon(),
            stars: level.stars,
            featured_score: level.featured_score,
            epic: level.epic,
            downloads: level.downloads,
            likes: level.likes,
            description: level.description,
            song: level.song,
        }
    }
}

/// Container accepted by [`levels_from_json`] when the export is an object.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LevelData {
    pub levels: Vec<Level>,
}

/// Parse an export that is either a bare array of levels or `{ "levels": [...] }`.
///
/// # Errors
///
/// Returns an error if the JSON is malformed or a record fails validation.
pub fn levels_from_json(json: &str) -> Result<Vec<Level>> {
    if json.trim_start().starts_with('[') {
        Ok(serde_json::from_str(json)?)
    } else {
        let data: LevelData = serde_json::from_str(json)?;
        Ok(data.levels)
    }
}
