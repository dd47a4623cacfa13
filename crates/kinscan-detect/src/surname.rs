//! Surname variants along the paternal line.
//!
//! Surnames pass from father to son, so every paternal ancestor is expected
//! to carry the target's surname. A surname that scores at or above the
//! threshold but is not the same name ignoring case is likely a spelling
//! variant worth reviewing. Case-only differences are not reported.

use kinscan_core::config::DEFAULT_SIMILARITY_THRESHOLD;
use kinscan_core::store::RecordStore;
use kinscan_core::types::Individual;

use crate::ancestors::find_paternal_ancestors;
use crate::anomaly::{Anomaly, SurnameVariant};
use crate::detector::Detector;
use crate::similarity::{IndelRatio, SimilarityScorer};
use crate::types::DetectError;

pub struct SurnameVariantDetector {
    threshold: u8,
    scorer: Box<dyn SimilarityScorer + Send + Sync>,
}

impl SurnameVariantDetector {
    pub fn new(threshold: u8) -> Self {
        Self::with_scorer(threshold, Box::new(IndelRatio))
    }

    pub fn with_scorer(threshold: u8, scorer: Box<dyn SimilarityScorer + Send + Sync>) -> Self {
        Self { threshold, scorer }
    }

    pub fn threshold(&self) -> u8 {
        self.threshold
    }
}

impl Default for SurnameVariantDetector {
    fn default() -> Self {
        Self::new(DEFAULT_SIMILARITY_THRESHOLD)
    }
}

/// Surname variants on the paternal line of `individual` at the default threshold.
pub fn detect_surname_anomalies(
    store: &dyn RecordStore,
    individual: &Individual,
) -> Result<Vec<Anomaly>, DetectError> {
    SurnameVariantDetector::default().detect(store, individual)
}

fn same_ignoring_case(a: &str, b: &str) -> bool {
    a.to_uppercase() == b.to_uppercase()
}

impl Detector for SurnameVariantDetector {
    fn name(&self) -> &'static str {
        "surname_variant"
    }

    fn detect(
        &self,
        store: &dyn RecordStore,
        individual: &Individual,
    ) -> Result<Vec<Anomaly>, DetectError> {
        let target_surname = &individual.surname;
        let mut anomalies = Vec::new();

        for ancestor in find_paternal_ancestors(store, individual)? {
            let score = self.scorer.score(target_surname, &ancestor.surname);
            if score < self.threshold || same_ignoring_case(target_surname, &ancestor.surname) {
                continue;
            }
            tracing::debug!(
                target = %individual.id,
                ancestor = %ancestor.id,
                score,
                "surname variant"
            );
            anomalies.push(Anomaly::SurnameVariant(SurnameVariant {
                target: individual.id.clone(),
                target_surname: target_surname.clone(),
                ancestor_surname: ancestor.surname.clone(),
                score,
                individual: ancestor,
            }));
        }

        Ok(anomalies)
    }
}

#[cfg(test)]
#[path = "surname_tests.rs"]
mod tests;
