use serde::{Deserialize, Serialize};

use super::difficulty::Difficulty;

/// Count of records at a single difficulty level
///
/// The label always follows the difficulty; any label present in serialized input
/// is ignored and recomputed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "BucketCount")]
pub struct DifficultyBucket {
    pub difficulty: Difficulty,
    pub count: usize,
    pub label: String,
}

impl DifficultyBucket {
    pub fn new(difficulty: Difficulty, count: usize) -> Self {
        Self { difficulty, count, label: difficulty.label().to_string() }
    }
}

#[derive(Deserialize)]
struct BucketCount {
    difficulty: Difficulty,
    count: usize,
}

impl From<BucketCount> for DifficultyBucket {
    fn from(raw: BucketCount) -> Self {
        DifficultyBucket::new(raw.difficulty, raw.count)
    }
}
