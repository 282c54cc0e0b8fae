//! # pact-schema
//!
//! JSON Schema registry for every persisted record, every store result, and
//! every analysis input and output.
//!
//! Types derive `JsonSchema` where they are defined (`pact-core`,
//! `pact-analysis`); this crate collects them under stable names for export
//! (`pact schema`) and validates caller-supplied JSON before it is parsed.

pub mod error;
pub mod registry;

pub use error::SchemaError;
pub use registry::SchemaRegistry;
