//! The `Oracle`: entry point that runs detectors over a record store.

use rayon::prelude::*;

use kinscan_core::config::{HomeStrategy, KinscanConfig, ScanMode};
use kinscan_core::store::RecordStore;
use kinscan_core::types::{Element, Gender, Individual, StoreError};

use crate::ancestors;
use crate::anomaly::Anomaly;
use crate::detector::Detector;
use crate::surname::SurnameVariantDetector;
use crate::types::{AnalysisResult, DetectError, IndividualInfo};

/// Owns a record store and the registered detectors.
pub struct Oracle {
    store: Box<dyn RecordStore + Send + Sync>,
    config: KinscanConfig,
    detectors: Vec<Box<dyn Detector>>,
}

impl Oracle {
    /// Oracle with default configuration and the default detector set.
    pub fn new(store: Box<dyn RecordStore + Send + Sync>) -> Self {
        Self::with_config(store, &KinscanConfig::default())
    }

    /// Create an oracle configured from a `KinscanConfig`.
    pub fn with_config(store: Box<dyn RecordStore + Send + Sync>, config: &KinscanConfig) -> Self {
        let mut oracle = Self {
            store,
            config: config.clone(),
            detectors: Vec::new(),
        };
        if config.detectors.surname_variants {
            oracle.register(Box::new(SurnameVariantDetector::new(
                config.similarity_threshold,
            )));
        }
        oracle
    }

    /// Add a detector. Detectors run in registration order.
    pub fn register(&mut self, detector: Box<dyn Detector>) {
        self.detectors.push(detector);
    }

    pub fn detector_names(&self) -> Vec<&'static str> {
        self.detectors.iter().map(|d| d.name()).collect()
    }

    pub fn store(&self) -> &dyn RecordStore {
        self.store.as_ref()
    }

    pub fn config(&self) -> &KinscanConfig {
        &self.config
    }

    /// Best guess at whose tree this is.
    ///
    /// With [`HomeStrategy::First`] this is the first individual in the file,
    /// which is only a heuristic. With [`HomeStrategy::Id`] it is that record,
    /// or `None` if the id does not resolve.
    pub fn find_home_individual(&self) -> Option<Individual> {
        match &self.config.home {
            HomeStrategy::First => self.store.individuals().next().cloned(),
            HomeStrategy::Id { id } => self.store.get_individual(id),
        }
    }

    pub fn find_ancestor_by_gender(
        &self,
        individual: &Individual,
        gender: Gender,
    ) -> Result<Vec<Individual>, DetectError> {
        ancestors::find_ancestors(self.store(), individual, gender)
    }

    pub fn find_maternal_ancestors(
        &self,
        individual: &Individual,
    ) -> Result<Vec<Individual>, DetectError> {
        self.find_ancestor_by_gender(individual, Gender::Female)
    }

    pub fn find_paternal_ancestors(
        &self,
        individual: &Individual,
    ) -> Result<Vec<Individual>, DetectError> {
        self.find_ancestor_by_gender(individual, Gender::Male)
    }

    /// First individual matching a criteria expression, in file order.
    ///
    /// The store parses the expression; malformed input is its error.
    pub fn find_individual(&self, criteria: &str) -> Result<Option<Individual>, StoreError> {
        let criteria = self.store.parse_criteria(criteria)?;
        Ok(self
            .store
            .element_list()
            .iter()
            .find(|e| e.criteria_match(&criteria))
            .and_then(Element::as_individual)
            .cloned())
    }

    /// Surname variants on the paternal line of `individual`, using the
    /// configured threshold regardless of which detectors are registered.
    pub fn analyze_fraternal_surnames(
        &self,
        individual: &Individual,
    ) -> Result<Vec<Anomaly>, DetectError> {
        SurnameVariantDetector::new(self.config.similarity_threshold)
            .detect(self.store(), individual)
    }

    /// Every registered detector against one individual, in registration order.
    pub fn analyze_individual(&self, individual: &Individual) -> Result<Vec<Anomaly>, DetectError> {
        let mut anomalies = Vec::new();
        for detector in &self.detectors {
            let found = detector.detect(self.store(), individual)?;
            tracing::debug!(
                detector = detector.name(),
                target = %individual.id,
                found = found.len(),
                "detector pass"
            );
            anomalies.extend(found);
        }
        Ok(anomalies)
    }

    /// Run all detectors per the configured scan mode.
    ///
    /// `ScanMode::Home` analyzes the home individual only; no home individual
    /// means nothing to analyze and an empty result. `ScanMode::FullTree`
    /// analyzes every individual in file order.
    pub fn analyze(&self) -> Result<Vec<Anomaly>, DetectError> {
        match self.config.scan {
            ScanMode::Home => match self.find_home_individual() {
                Some(home) => self.analyze_individual(&home),
                None => {
                    tracing::debug!("no home individual, nothing to analyze");
                    Ok(Vec::new())
                }
            },
            ScanMode::FullTree => self.analyze_all(),
        }
    }

    /// Every individual in file order, fanned out over the rayon pool.
    pub fn analyze_all(&self) -> Result<Vec<Anomaly>, DetectError> {
        let people: Vec<&Individual> = self.store.individuals().collect();
        let per_person: Vec<Vec<Anomaly>> = people
            .par_iter()
            .map(|p| self.analyze_individual(p))
            .collect::<Result<_, _>>()?;
        Ok(per_person.into_iter().flatten().collect())
    }

    /// Run `analyze` and wrap the outcome for output.
    pub fn report(&self) -> Result<AnalysisResult, DetectError> {
        let home = self.find_home_individual();
        let anomalies = self.analyze()?;
        let (scan, scanned) = match self.config.scan {
            ScanMode::Home => ("home", u32::from(home.is_some())),
            ScanMode::FullTree => ("full_tree", self.store.individuals().count() as u32),
        };
        Ok(analysis_result(scan, home.as_ref(), scanned, anomalies))
    }

    /// Run all detectors against one chosen individual and wrap the outcome.
    pub fn report_for(&self, individual: &Individual) -> Result<AnalysisResult, DetectError> {
        let anomalies = self.analyze_individual(individual)?;
        Ok(analysis_result("individual", Some(individual), 1, anomalies))
    }
}

fn analysis_result(
    scan: &str,
    home: Option<&Individual>,
    individuals_scanned: u32,
    anomalies: Vec<Anomaly>,
) -> AnalysisResult {
    AnalysisResult {
        version: env!("CARGO_PKG_VERSION").to_string(),
        command: "analyze".to_string(),
        status: if anomalies.is_empty() { "clean" } else { "anomalies" }.to_string(),
        scan: scan.to_string(),
        home: home.map(IndividualInfo::from),
        individuals_scanned,
        anomalies,
    }
}

#[cfg(test)]
#[path = "oracle_tests.rs"]
mod tests;
