use kinscan_detect::types::{FindResult, IndividualInfo};
use kinscan_output::OutputFormatter;

use super::session::{self, Source};

/// Run `kinscan find <criteria>`: first match in file order; exit 1 if none.
pub fn run(formatter: &dyn OutputFormatter, source: &Source, criteria: String) -> i32 {
    let config = match session::load_config("find", source) {
        Ok(c) => c,
        Err(code) => return code,
    };
    let oracle = match session::open_oracle("find", source, &config) {
        Ok(o) => o,
        Err(code) => return code,
    };

    let found = match oracle.find_individual(&criteria) {
        Ok(f) => f,
        Err(e) => {
            eprintln!("kinscan find: {}", e);
            eprintln!("hint: criteria look like `surname=Miller:birthrange=1850-1860`");
            return 2;
        }
    };

    let exit_code = if found.is_some() { 0 } else { 1 };
    let result = FindResult {
        version: env!("CARGO_PKG_VERSION").to_string(),
        command: "find".to_string(),
        criteria,
        found: found.as_ref().map(IndividualInfo::from),
    };
    print!("{}", formatter.format_find(&result));
    exit_code
}
