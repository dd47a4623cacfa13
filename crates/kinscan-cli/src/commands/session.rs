//! Shared loading for commands that read a tree: configuration, then the
//! GEDCOM file, then an `Oracle` over it.

use std::path::{Path, PathBuf};

use kinscan_core::config::KinscanConfig;
use kinscan_core::types::{Individual, PersonId};
use kinscan_detect::Oracle;
use kinscan_parsers::GedcomParser;

/// Where a command reads its inputs from (global `--gedcom` / `--config`).
#[derive(Debug, Clone, Default)]
pub struct Source {
    pub gedcom: Option<PathBuf>,
    pub config: Option<PathBuf>,
}

/// Explicit `--config` must exist; otherwise `.kinscan/kinscan.json` in the
/// working directory, or defaults when that is absent.
pub fn load_config(cmd: &str, source: &Source) -> Result<KinscanConfig, i32> {
    if let Some(path) = &source.config {
        if !path.is_file() {
            eprintln!("kinscan {}: config file not found: {}", cmd, path.display());
            return Err(2);
        }
        return Ok(KinscanConfig::load_file(path));
    }
    match std::env::current_dir() {
        Ok(cwd) => Ok(KinscanConfig::load(&cwd.join(".kinscan"))),
        Err(e) => {
            eprintln!("kinscan {}: failed to get current directory: {}", cmd, e);
            Err(2)
        }
    }
}

/// Parse the GEDCOM file and wrap it in an oracle built from `config`.
pub fn open_oracle(cmd: &str, source: &Source, config: &KinscanConfig) -> Result<Oracle, i32> {
    let Some(path) = source.gedcom.as_deref() else {
        eprintln!("kinscan {}: no GEDCOM file given", cmd);
        eprintln!("hint: pass --gedcom <FILE> or set KINSCAN_GEDCOM");
        return Err(2);
    };
    let store = load_gedcom(cmd, path)?;
    Ok(Oracle::with_config(Box::new(store), config))
}

fn load_gedcom(cmd: &str, path: &Path) -> Result<kinscan_core::memory::MemoryRecordStore, i32> {
    GedcomParser::parse_file(path).map_err(|e| {
        eprintln!("kinscan {}: {}", cmd, e);
        2
    })
}

/// `--person ID` if given, else the home individual.
pub fn resolve_person(cmd: &str, oracle: &Oracle, person: Option<&str>) -> Result<Individual, i32> {
    match person {
        Some(id) => oracle.store().get_individual(&PersonId::from(id)).ok_or_else(|| {
            eprintln!("kinscan {}: no individual with id {}", cmd, id);
            2
        }),
        None => oracle.find_home_individual().ok_or_else(|| {
            eprintln!("kinscan {}: no home individual in tree", cmd);
            2
        }),
    }
}
