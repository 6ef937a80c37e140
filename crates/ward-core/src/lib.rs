//! # ward-core
//!
//! Core types and error types for Ward.
//!
//! This crate provides the types shared across all Ward crates:
//! - Patient and appointment records
//! - Audit actions and the pipe-delimited audit record line format
//! - Appointment slot validation
//! - Cross-cutting error types
//! - CLI response types (listings, reports, rollback summaries)

pub mod entities;
pub mod enums;
pub mod errors;
pub mod responses;
