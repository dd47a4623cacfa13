use crate::OutputFormatter;
use kinscan_detect::types::{AnalysisResult, AncestorResult, FindResult, HomeResult};

pub struct JsonFormatter;

impl OutputFormatter for JsonFormatter {
    fn format_analysis(&self, result: &AnalysisResult) -> String {
        serde_json::to_string_pretty(result).unwrap_or_default()
    }
    fn format_ancestors(&self, result: &AncestorResult) -> String {
        serde_json::to_string_pretty(result).unwrap_or_default()
    }
    fn format_find(&self, result: &FindResult) -> String {
        serde_json::to_string_pretty(result).unwrap_or_default()
    }
    fn format_home(&self, result: &HomeResult) -> String {
        serde_json::to_string_pretty(result).unwrap_or_default()
    }
}
