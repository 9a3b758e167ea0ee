use std::collections::HashMap;
use std::thread;
use std::time::Duration;

use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::Serialize;

use super::markup::{AnalysisBlock, parse_analysis};
use super::templates::TemplateKind;
use crate::models::InterviewRecord;

/// A generated explanation for one record
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Analysis {
    pub record_id: String,
    pub template: TemplateKind,
    pub text: String,
    pub generated_at: DateTime<Utc>,
}

impl Analysis {
    pub fn blocks(&self) -> Vec<AnalysisBlock> {
        parse_analysis(&self.text)
    }
}

/// Source of analyses; implementations may block
pub trait AnalysisProvider {
    fn analyze(&self, record: &InterviewRecord) -> Result<Analysis>;
}

/// Canned analyses chosen by subcategory
///
/// Stands in for a real model-backed provider. Unknown subcategories get the
/// [`TemplateKind::FALLBACK`] template.
#[derive(Debug, Clone)]
pub struct TemplateAnalysisProvider {
    keys: HashMap<String, TemplateKind>,
    simulated_latency: Duration,
}

impl TemplateAnalysisProvider {
    pub fn new() -> Self {
        let keys = [TemplateKind::Frontend, TemplateKind::Backend, TemplateKind::Algorithm]
            .into_iter()
            .flat_map(|kind| kind.default_keys().iter().map(move |key| (key.to_string(), kind)))
            .collect();
        Self { keys, simulated_latency: Duration::ZERO }
    }

    /// Sleep this long before each answer
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.simulated_latency = latency;
        self
    }

    /// Route another subcategory name to `kind`
    pub fn with_key(mut self, subcategory: impl Into<String>, kind: TemplateKind) -> Self {
        self.keys.insert(subcategory.into().to_lowercase(), kind);
        self
    }

    pub fn template_for(&self, subcategory: &str) -> TemplateKind {
        self.keys
            .get(subcategory.trim().to_lowercase().as_str())
            .copied()
            .unwrap_or(TemplateKind::FALLBACK)
    }
}

impl Default for TemplateAnalysisProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl AnalysisProvider for TemplateAnalysisProvider {
    fn analyze(&self, record: &InterviewRecord) -> Result<Analysis> {
        if !self.simulated_latency.is_zero() {
            log::debug!("Simulating {:?} of analysis latency", self.simulated_latency);
            thread::sleep(self.simulated_latency);
        }

        let template = self.template_for(&record.subcategory);
        Ok(Analysis {
            record_id: record.id.clone(),
            template,
            text: template.text().to_string(),
            generated_at: Utc::now(),
        })
    }
}
