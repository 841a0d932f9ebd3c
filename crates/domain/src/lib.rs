//! Domain layer for Traffic Buddy stats.
//!
//! This crate contains:
//! - Domain models (ActivityRecord, division roster, derived statistics)
//! - The pure aggregation services that turn raw activity records into
//!   chartable view-models

pub mod models;
pub mod services;
