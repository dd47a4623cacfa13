//! Anomaly detection over a genealogical record store.
//!
//! Walks ancestor lines and reports records that look inconsistent:
//! - surname_variant: a paternal ancestor whose surname is a near miss of the
//!   target's surname (e.g. Smith vs. Smyth)
//!
//! [`oracle::Oracle`] is the entry point; detectors implement
//! [`detector::Detector`] and run in registration order.

pub mod types;
pub mod anomaly;
pub mod similarity;
pub mod ancestors;
pub mod detector;
pub mod surname;
pub mod oracle;

pub use anomaly::{Anomaly, AnomalyKind, SurnameVariant};
pub use surname::{detect_surname_anomalies, SurnameVariantDetector};
pub use detector::Detector;
pub use oracle::Oracle;
pub use types::DetectError;
