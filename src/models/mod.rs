//! Data models for the interview catalog.
//!
//! - [`InterviewRecord`] - One question with company, category, difficulty and sources
//! - [`Difficulty`] / [`Tier`] - The 1-9 difficulty scale and its easy/medium/hard bands
//! - [`DifficultyBucket`] - One bar of the difficulty histogram
//!
//! Records are immutable once they enter a [`Catalog`](crate::catalog::Catalog).

pub mod bucket;
pub mod difficulty;
pub mod record;

pub use bucket::DifficultyBucket;
pub use difficulty::{Difficulty, Tier};
pub use record::{InterviewRecord, JobType, Platform, Source};
