//! Output formatters for kinscan command results.
//!
//! Provides two output modes:
//! - **Human** (default): one line per finding plus a summary
//! - **JSON** (`--json`): machine-readable structured output

pub mod human;
pub(crate) mod human_helpers;
pub mod json;

use kinscan_detect::types::{AnalysisResult, AncestorResult, FindResult, HomeResult};

pub trait OutputFormatter {
    fn format_analysis(&self, result: &AnalysisResult) -> String;
    fn format_ancestors(&self, result: &AncestorResult) -> String;
    fn format_find(&self, result: &FindResult) -> String;
    fn format_home(&self, result: &HomeResult) -> String;
}
