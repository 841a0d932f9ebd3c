//! Shared utilities and common types for Traffic Buddy stats.
//!
//! This crate provides common functionality used across all other crates:
//! - Page-numbered pagination types for draining list endpoints
//! - Common validation logic

pub mod pagination;
pub mod validation;
