use serde::{Deserialize, Serialize};

use kinscan_core::types::{Gender, Individual, PersonId, StoreError};

use crate::anomaly::Anomaly;

/// Errors raised while analyzing a tree.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DetectError {
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("Parent links form a cycle through {id}")]
    CycleDetected { id: PersonId },

    #[error("Ancestor lines can only be followed by male or female, not {0}")]
    UnsupportedGender(Gender),
}

/// Compact individual summary for command output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndividualInfo {
    pub id: String,
    pub given_name: String,
    pub surname: String,
    pub gender: Gender,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub birth_year: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub death_year: Option<i32>,
}

impl From<&Individual> for IndividualInfo {
    fn from(i: &Individual) -> Self {
        Self {
            id: i.id.to_string(),
            given_name: i.given_name.clone(),
            surname: i.surname.clone(),
            gender: i.gender,
            birth_year: i.birth_year,
            death_year: i.death_year,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub version: String,
    pub command: String,
    pub status: String, // "clean" | "anomalies"
    pub scan: String,   // "home" | "individual" | "full_tree"
    pub home: Option<IndividualInfo>,
    pub individuals_scanned: u32,
    pub anomalies: Vec<Anomaly>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AncestorResult {
    pub version: String,
    pub command: String,
    pub line: String, // "paternal" | "maternal"
    pub root: IndividualInfo,
    pub ancestors: Vec<IndividualInfo>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FindResult {
    pub version: String,
    pub command: String,
    pub criteria: String,
    pub found: Option<IndividualInfo>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HomeResult {
    pub version: String,
    pub command: String,
    pub home: Option<IndividualInfo>,
}
