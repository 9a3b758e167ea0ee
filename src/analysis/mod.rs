//! Question analysis.
//!
//! [`AnalysisProvider`] is the seam a model-backed implementation would plug into.
//! The crate ships [`TemplateAnalysisProvider`], which answers from a fixed set of
//! templates after an optional simulated delay.

pub mod markup;
pub mod provider;
pub mod templates;

pub use markup::{AnalysisBlock, parse_analysis};
pub use provider::{Analysis, AnalysisProvider, TemplateAnalysisProvider};
pub use templates::TemplateKind;
