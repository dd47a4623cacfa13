use kinscan_core::config::ScanMode;
use kinscan_output::OutputFormatter;

use super::session::{self, Source};

/// Run `kinscan analyze`: exit 0 when clean, 1 when anomalies were found.
pub fn run(
    formatter: &dyn OutputFormatter,
    source: &Source,
    person: Option<String>,
    all: bool,
    threshold: Option<u8>,
) -> i32 {
    let mut config = match session::load_config("analyze", source) {
        Ok(c) => c,
        Err(code) => return code,
    };
    if let Some(t) = threshold {
        config.similarity_threshold = t;
    }
    if all {
        config.scan = ScanMode::FullTree;
    }

    let oracle = match session::open_oracle("analyze", source, &config) {
        Ok(o) => o,
        Err(code) => return code,
    };

    let report = match person.as_deref() {
        Some(id) => match session::resolve_person("analyze", &oracle, Some(id)) {
            Ok(p) => oracle.report_for(&p),
            Err(code) => return code,
        },
        None => oracle.report(),
    };

    match report {
        Ok(result) => {
            tracing::info!(
                scanned = result.individuals_scanned,
                anomalies = result.anomalies.len(),
                "analysis finished"
            );
            let output = formatter.format_analysis(&result);
            if !output.is_empty() {
                print!("{}", output);
            }
            if result.anomalies.is_empty() {
                0
            } else {
                1
            }
        }
        Err(e) => {
            eprintln!("kinscan analyze: {}", e);
            2
        }
    }
}
