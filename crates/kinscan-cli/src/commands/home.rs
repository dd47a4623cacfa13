use kinscan_detect::types::{HomeResult, IndividualInfo};
use kinscan_output::OutputFormatter;

use super::session::{self, Source};

/// Run `kinscan home`: print the individual the tree belongs to.
pub fn run(formatter: &dyn OutputFormatter, source: &Source) -> i32 {
    let config = match session::load_config("home", source) {
        Ok(c) => c,
        Err(code) => return code,
    };
    let oracle = match session::open_oracle("home", source, &config) {
        Ok(o) => o,
        Err(code) => return code,
    };

    let result = HomeResult {
        version: env!("CARGO_PKG_VERSION").to_string(),
        command: "home".to_string(),
        home: oracle.find_home_individual().as_ref().map(IndividualInfo::from),
    };
    print!("{}", formatter.format_home(&result));
    0
}
