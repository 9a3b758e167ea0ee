use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CatalogError;

/// Fixed display labels, indexed by `difficulty - 1`
const LEVEL_LABELS: [&str; 9] = [
    "easy-1", "easy-2", "easy-3", "medium-1", "medium-2", "medium-3", "hard-1", "hard-2", "hard-3",
];

/// One of the three difficulty bands
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    Easy,
    Medium,
    Hard,
}

impl Tier {
    pub const ALL: [Tier; 3] = [Tier::Easy, Tier::Medium, Tier::Hard];

    pub fn of(difficulty: Difficulty) -> Self {
        match difficulty.get() {
            1..=3 => Tier::Easy,
            4..=6 => Tier::Medium,
            _ => Tier::Hard,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Tier::Easy => "easy",
            Tier::Medium => "medium",
            Tier::Hard => "hard",
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Question difficulty, always within `1..=9`
///
/// Out-of-range values are unrepresentable: construction goes through
/// [`Difficulty::new`], and deserialization rejects anything outside the range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u8")]
pub struct Difficulty(u8);

impl Difficulty {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 9;
    /// Number of difficulty levels
    pub const LEVELS: usize = 9;

    pub fn new(value: i64) -> Result<Self, CatalogError> {
        if (Self::MIN as i64..=Self::MAX as i64).contains(&value) {
            Ok(Self(value as u8))
        } else {
            Err(CatalogError::DifficultyOutOfRange(value))
        }
    }

    /// All levels in ascending order
    pub fn all() -> impl Iterator<Item = Difficulty> {
        (Self::MIN..=Self::MAX).map(Difficulty)
    }

    /// Level at a zero-based position; `index` must be below [`Self::LEVELS`]
    pub(crate) fn from_index(index: usize) -> Self {
        debug_assert!(index < Self::LEVELS);
        Self(index as u8 + Self::MIN)
    }

    pub fn get(self) -> u8 {
        self.0
    }

    /// Zero-based position, for fixed-length bucket arrays
    pub fn index(self) -> usize {
        (self.0 - Self::MIN) as usize
    }

    pub fn tier(self) -> Tier {
        Tier::of(self)
    }

    /// Ordinal sub-level within the tier (1, 2 or 3)
    pub fn sub_level(self) -> u8 {
        (self.0 - 1) % 3 + 1
    }

    pub fn label(self) -> &'static str {
        LEVEL_LABELS[self.index()]
    }
}

impl TryFrom<i64> for Difficulty {
    type Error = CatalogError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Difficulty::new(value)
    }
}

impl From<Difficulty> for u8 {
    fn from(difficulty: Difficulty) -> Self {
        difficulty.0
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Accepts a plain number (`"4"`) or a level label (`"medium-1"`)
impl FromStr for Difficulty {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if let Ok(value) = trimmed.parse::<i64>() {
            return Difficulty::new(value).map_err(|e| e.to_string());
        }
        let lower = trimmed.to_lowercase();
        LEVEL_LABELS
            .iter()
            .position(|label| *label == lower)
            .map(|pos| Difficulty(pos as u8 + Self::MIN))
            .ok_or_else(|| format!("Invalid difficulty: '{}' (expected 1-9 or easy-1..hard-3)", s))
    }
}
