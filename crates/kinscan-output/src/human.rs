use crate::human_helpers::{format_anomaly_human, format_person};
use crate::OutputFormatter;
use kinscan_detect::types::{AnalysisResult, AncestorResult, FindResult, HomeResult};

pub struct HumanFormatter;

impl OutputFormatter for HumanFormatter {
    fn format_analysis(&self, result: &AnalysisResult) -> String {
        let mut out = String::new();

        match (&result.home, result.scan.as_str()) {
            (Some(home), "home") => out.push_str(&format!("Home: {}\n", format_person(home))),
            (Some(home), "individual") => {
                out.push_str(&format!("Individual: {}\n", format_person(home)))
            }
            (None, "home") => out.push_str("No home individual found.\n"),
            _ => {}
        }

        for a in &result.anomalies {
            out.push_str(&format_anomaly_human(a));
        }

        // Summary line
        if result.anomalies.is_empty() {
            out.push_str(&format!(
                "No anomalies in {} individual(s) scanned\n",
                result.individuals_scanned,
            ));
        } else {
            out.push_str(&format!(
                "\n{} anomaly(ies) in {} individual(s) scanned\n",
                result.anomalies.len(),
                result.individuals_scanned,
            ));
        }

        out
    }

    fn format_ancestors(&self, result: &AncestorResult) -> String {
        let mut out = format!(
            "{} ancestors of {}\n",
            capitalize(&result.line),
            format_person(&result.root),
        );
        if result.ancestors.is_empty() {
            out.push_str("  (none)\n");
        }
        for a in &result.ancestors {
            out.push_str(&format!("  {}\n", format_person(a)));
        }
        out
    }

    fn format_find(&self, result: &FindResult) -> String {
        match &result.found {
            Some(info) => format!("{}\n", format_person(info)),
            None => format!("No individual matches \"{}\".\n", result.criteria),
        }
    }

    fn format_home(&self, result: &HomeResult) -> String {
        match &result.home {
            Some(info) => format!("Home: {}\n", format_person(info)),
            None => "No home individual found.\n".to_string(),
        }
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) => c.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
