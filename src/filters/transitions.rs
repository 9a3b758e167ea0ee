//! Filter-state transition rules.
//!
//! [`FilterSpec`] is changed one [`FilterAction`] at a time:
//!
//! - Selecting the value a single-choice field already holds clears it (toggle-off)
//! - Any change to `category` clears `subcategory`
//! - Companies form a set: add, remove, or toggle by value
//! - `ClearAll` resets every field at once

use super::spec::{FilterField, FilterSpec, TimeRange};
use crate::models::{Difficulty, JobType};

/// A single user interaction with the filter controls
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterAction {
    SelectJobType(JobType),
    SelectCategory(String),
    SelectSubcategory(String),
    SelectTimeRange(TimeRange),
    SelectDifficulty(Difficulty),
    /// Slider drag: set exactly, no toggle; `None` clears
    SetDifficulty(Option<Difficulty>),
    AddCompany(String),
    RemoveCompany(String),
    /// Checkbox click: add if absent, remove if present
    ToggleCompany(String),
    /// Free-text search; blank input unsets it
    SetSearch(String),
    /// Dismiss one filter chip
    Remove(FilterField),
    ClearAll,
}

/// Set `slot` to `value`, or unset it when it already holds `value`
fn toggle<T: PartialEq>(slot: &mut Option<T>, value: T) {
    if slot.as_ref() == Some(&value) {
        *slot = None;
    } else {
        *slot = Some(value);
    }
}

impl FilterSpec {
    /// Apply one transition in place
    pub fn apply(&mut self, action: FilterAction) {
        match action {
            FilterAction::SelectJobType(job_type) => toggle(&mut self.job_type, job_type),
            FilterAction::SelectCategory(category) => {
                toggle(&mut self.category, category);
                self.subcategory = None;
            }
            FilterAction::SelectSubcategory(subcategory) => {
                toggle(&mut self.subcategory, subcategory)
            }
            FilterAction::SelectTimeRange(range) => toggle(&mut self.time_range, range),
            FilterAction::SelectDifficulty(difficulty) => toggle(&mut self.difficulty, difficulty),
            FilterAction::SetDifficulty(difficulty) => self.difficulty = difficulty,
            FilterAction::AddCompany(company) => {
                self.companies.insert(company);
            }
            FilterAction::RemoveCompany(company) => {
                self.companies.remove(&company);
            }
            FilterAction::ToggleCompany(company) => {
                if !self.companies.remove(&company) {
                    self.companies.insert(company);
                }
            }
            FilterAction::SetSearch(term) => {
                self.search_term = if term.trim().is_empty() { None } else { Some(term) };
            }
            FilterAction::Remove(field) => self.remove(field),
            FilterAction::ClearAll => *self = FilterSpec::default(),
        }
    }

    /// Builder-style [`apply`](Self::apply)
    pub fn with(mut self, action: FilterAction) -> Self {
        self.apply(action);
        self
    }

    fn remove(&mut self, field: FilterField) {
        match field {
            FilterField::JobType => self.job_type = None,
            FilterField::Category => {
                self.category = None;
                self.subcategory = None;
            }
            FilterField::Subcategory => self.subcategory = None,
            FilterField::Companies => self.companies.clear(),
            FilterField::TimeRange => self.time_range = None,
            FilterField::Difficulty => self.difficulty = None,
            FilterField::Search => self.search_term = None,
        }
    }
}
