//! Core types, record storage, and configuration for kinscan.
//!
//! This crate provides the foundational data structures used across all kinscan crates:
//! - [`types`]: Individuals, families, elements, and error types
//! - [`store`]: The [`RecordStore`](store::RecordStore) trait consumed by analysis
//! - [`memory`]: petgraph-backed in-memory implementation of `RecordStore`
//! - [`criteria`]: The `key=value:key=value` search grammar
//! - [`config`]: Configuration loading from `.kinscan/kinscan.json`

pub mod config;
pub mod criteria;
pub mod memory;
pub mod store;
pub mod types;
