use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::catalog::Catalog;
use crate::error::BrowserError;
use crate::filters::{FilterAction, FilterSpec, filter_refs};
use crate::models::InterviewRecord;
use crate::stats::{Histogram, HistogramScope};

/// Everything a front-end can ask the browser to do
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Filter(FilterAction),
    SetHistogramScope(HistogramScope),
    /// Select a record and show its analysis
    OpenAnalysis(String),
    /// Hide the analysis and drop the selection
    CloseAnalysis,
}

#[derive(Debug, Clone)]
pub struct Browser {
    catalog: Arc<Catalog>,
    spec: FilterSpec,
    scope: HistogramScope,
    selected_id: Option<String>,
    analysis_open: bool,
}

impl Browser {
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self::with_scope(catalog, HistogramScope::default())
    }

    pub fn with_scope(catalog: Arc<Catalog>, scope: HistogramScope) -> Self {
        Self {
            catalog,
            spec: FilterSpec::default(),
            scope,
            selected_id: None,
            analysis_open: false,
        }
    }

    /// Start from an already built spec, e.g. one parsed from command-line flags
    pub fn with_spec(mut self, spec: FilterSpec) -> Self {
        self.spec = spec;
        self
    }

    /// Apply one action
    ///
    /// Only [`Action::OpenAnalysis`] can fail, and a failed action leaves the state
    /// untouched.
    pub fn dispatch(&mut self, action: Action) -> Result<(), BrowserError> {
        match action {
            Action::Filter(filter_action) => {
                log::debug!("Filter action: {:?}", filter_action);
                self.spec.apply(filter_action);
            }
            Action::SetHistogramScope(scope) => self.scope = scope,
            Action::OpenAnalysis(id) => {
                if self.catalog.get(&id).is_none() {
                    return Err(BrowserError::UnknownRecord(id));
                }
                self.selected_id = Some(id);
                self.analysis_open = true;
            }
            Action::CloseAnalysis => {
                self.analysis_open = false;
                self.selected_id = None;
            }
        }
        Ok(())
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn spec(&self) -> &FilterSpec {
        &self.spec
    }

    pub fn scope(&self) -> HistogramScope {
        self.scope
    }

    /// Matching records in catalog order
    pub fn visible(&self, now: DateTime<Utc>) -> Vec<&InterviewRecord> {
        filter_refs(self.catalog.records(), &self.spec, now)
    }

    pub fn result_count(&self, now: DateTime<Utc>) -> usize {
        self.visible(now).len()
    }

    pub fn histogram(&self, now: DateTime<Utc>) -> Histogram {
        match self.scope {
            HistogramScope::Catalog => Histogram::from_records(self.catalog.records(), self.scope),
            HistogramScope::Matches => {
                Histogram::from_records(self.visible(now).into_iter(), self.scope)
            }
        }
    }

    /// Bucket count at the selected difficulty, for the slider readout
    pub fn selected_difficulty_count(&self, now: DateTime<Utc>) -> Option<usize> {
        let difficulty = self.spec.difficulty?;
        Some(self.histogram(now).count_for(difficulty))
    }

    pub fn selected(&self) -> Option<&InterviewRecord> {
        self.selected_id.as_deref().and_then(|id| self.catalog.get(id))
    }

    pub fn is_analysis_open(&self) -> bool {
        self.analysis_open
    }
}
