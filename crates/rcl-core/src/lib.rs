//! # rcl-core
//!
//! Core types, participant IDs, and error types for recall.
//!
//! This crate provides the foundational types shared across all recall crates:
//! - Phase, condition, source-type, and policy enums
//! - Participant ID parsing and log file naming
//! - Named records for every decoded event-log phase, and the parsed aggregate
//! - Derived score types (buckets, scorecards, metrics reports)
//! - CLI response types
//! - Cross-cutting error types

pub mod enums;
pub mod errors;
pub mod ids;
pub mod records;
pub mod responses;
pub mod scores;
