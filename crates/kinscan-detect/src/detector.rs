use kinscan_core::store::RecordStore;
use kinscan_core::types::Individual;

use crate::anomaly::Anomaly;
use crate::types::DetectError;

/// A single anomaly check run against one target individual.
///
/// Detectors are stateless between calls and may be run from several threads
/// over the same store.
pub trait Detector: Send + Sync {
    /// Stable identifier, used in logs.
    fn name(&self) -> &'static str;

    fn detect(
        &self,
        store: &dyn RecordStore,
        individual: &Individual,
    ) -> Result<Vec<Anomaly>, DetectError>;
}
