//! Record-format readers for kinscan.
//!
//! - [`gedcom`]: GEDCOM 5.5 lines into a
//!   [`MemoryRecordStore`](kinscan_core::memory::MemoryRecordStore)

pub mod gedcom;

pub use gedcom::{GedcomError, GedcomParser};
