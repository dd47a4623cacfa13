//! Anomaly model: structured findings produced by detectors.
//!
//! An anomaly points at the individual whose record looks wrong and carries
//! the typed evidence for it. The human-readable description is rendered from
//! that evidence by `Display`.

use serde::{Deserialize, Serialize};

use kinscan_core::types::{Individual, PersonId};

/// Category tag of an anomaly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnomalyKind {
    SurnameVariant,
}

impl AnomalyKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            AnomalyKind::SurnameVariant => "surname_variant",
        }
    }
}

impl std::fmt::Display for AnomalyKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Anomaly {
    SurnameVariant(SurnameVariant),
}

/// A paternal ancestor whose surname is close to, but not the same as, the
/// surname of the individual being analyzed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SurnameVariant {
    /// The ancestor carrying the variant spelling.
    pub individual: Individual,
    /// The individual whose paternal line was walked.
    pub target: PersonId,
    pub target_surname: String,
    pub ancestor_surname: String,
    pub score: u8,
}

impl Anomaly {
    pub fn kind(&self) -> AnomalyKind {
        match self {
            Anomaly::SurnameVariant(_) => AnomalyKind::SurnameVariant,
        }
    }

    /// The individual the anomaly was raised against.
    pub fn individual(&self) -> &Individual {
        match self {
            Anomaly::SurnameVariant(v) => &v.individual,
        }
    }

    pub fn description(&self) -> String {
        self.to_string()
    }
}

impl std::fmt::Display for Anomaly {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Anomaly::SurnameVariant(v) => write!(
                f,
                "Surname variation: {} vs. {}",
                v.target_surname, v.ancestor_surname
            ),
        }
    }
}
