//! # rcl-schema
//!
//! JSON Schema registry for recall.
//!
//! Record, report, and reference types derive `JsonSchema` where they are
//! defined (`rcl-core`, `rcl-reference`). This crate collects them under
//! stable snake_case names, validates JSON against them with `jsonschema`,
//! and backs the `rcl schema` command.

mod error;
mod registry;

pub use error::SchemaError;
pub use registry::SchemaRegistry;
