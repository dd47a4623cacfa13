//! Configuration file loading for kinscan.
//!
//! Reads `.kinscan/kinscan.json` (or an explicit file) and provides typed access
//! to all settings. Falls back to defaults when the file is missing or incomplete.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::types::PersonId;

/// Minimum similarity score (inclusive) for two surnames to count as variants.
pub const DEFAULT_SIMILARITY_THRESHOLD: u8 = 75;

/// File name looked up inside the `.kinscan` directory.
pub const CONFIG_FILE_NAME: &str = "kinscan.json";

/// Top-level kinscan configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KinscanConfig {
    #[serde(default = "default_threshold")]
    pub similarity_threshold: u8,
    #[serde(default)]
    pub home: HomeStrategy,
    #[serde(default)]
    pub scan: ScanMode,
    #[serde(default)]
    pub detectors: DetectorConfig,
}

/// How the home individual of a tree is chosen.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "strategy", rename_all = "snake_case")]
pub enum HomeStrategy {
    /// First individual in file order. A heuristic: GEDCOM exporters usually
    /// write the tree owner first, but nothing guarantees it.
    #[default]
    First,
    /// A fixed cross-reference id.
    Id { id: PersonId },
}

/// Which individuals `analyze` runs detectors against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScanMode {
    #[default]
    Home,
    FullTree,
}

/// Detector toggles.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DetectorConfig {
    #[serde(default = "default_true")]
    pub surname_variants: bool,
}

fn default_true() -> bool {
    true
}
fn default_threshold() -> u8 {
    DEFAULT_SIMILARITY_THRESHOLD
}

impl Default for DetectorConfig {
    fn default() -> Self {
        Self {
            surname_variants: true,
        }
    }
}

impl Default for KinscanConfig {
    fn default() -> Self {
        Self {
            similarity_threshold: DEFAULT_SIMILARITY_THRESHOLD,
            home: HomeStrategy::default(),
            scan: ScanMode::default(),
            detectors: DetectorConfig::default(),
        }
    }
}

impl KinscanConfig {
    /// Load configuration from `kinscan.json` inside the given `.kinscan` directory.
    /// Returns defaults if the file doesn't exist or can't be parsed.
    pub fn load(kinscan_dir: &Path) -> Self {
        Self::load_file(&kinscan_dir.join(CONFIG_FILE_NAME))
    }

    /// Load configuration from an explicit file path.
    pub fn load_file(config_path: &Path) -> Self {
        let content = match std::fs::read_to_string(config_path) {
            Ok(c) => c,
            Err(_) => return Self::default(),
        };
        match serde_json::from_str::<Self>(&content) {
            Ok(mut cfg) => {
                if cfg.similarity_threshold > 100 {
                    tracing::warn!(
                        path = %config_path.display(),
                        threshold = cfg.similarity_threshold,
                        "similarity_threshold above 100, clamping"
                    );
                    cfg.similarity_threshold = 100;
                }
                cfg
            }
            Err(e) => {
                tracing::warn!(
                    path = %config_path.display(),
                    error = %e,
                    "failed to parse config, using defaults"
                );
                Self::default()
            }
        }
    }
}
