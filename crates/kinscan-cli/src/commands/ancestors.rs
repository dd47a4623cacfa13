use kinscan_detect::ancestors::Lineage;
use kinscan_detect::types::{AncestorResult, IndividualInfo};
use kinscan_output::OutputFormatter;

use super::session::{self, Source};

/// Run `kinscan ancestors`: list one single-gender ancestor line.
pub fn run(
    formatter: &dyn OutputFormatter,
    source: &Source,
    person: Option<String>,
    line: Lineage,
) -> i32 {
    let config = match session::load_config("ancestors", source) {
        Ok(c) => c,
        Err(code) => return code,
    };
    let oracle = match session::open_oracle("ancestors", source, &config) {
        Ok(o) => o,
        Err(code) => return code,
    };
    let root = match session::resolve_person("ancestors", &oracle, person.as_deref()) {
        Ok(p) => p,
        Err(code) => return code,
    };

    match oracle.find_ancestor_by_gender(&root, line.gender()) {
        Ok(ancestors) => {
            let result = AncestorResult {
                version: env!("CARGO_PKG_VERSION").to_string(),
                command: "ancestors".to_string(),
                line: line.as_str().to_string(),
                root: IndividualInfo::from(&root),
                ancestors: ancestors.iter().map(IndividualInfo::from).collect(),
            };
            print!("{}", formatter.format_ancestors(&result));
            0
        }
        Err(e) => {
            eprintln!("kinscan ancestors: {}", e);
            2
        }
    }
}
