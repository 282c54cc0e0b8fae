//! # pact-core
//!
//! Core types, content fingerprinting, and validation errors for pact.
//!
//! This crate provides the foundational types shared across all pact crates:
//! - Record structs for partners, research entries, and history entries
//! - Submission types that validate caller-supplied JSON objects
//! - Pool, operation, and data-type enums
//! - Persisted document envelopes for the three collections
//! - Content fingerprints (canonical JSON + SHA-256)
//! - The tagged `OpResult` envelope returned across the caller boundary

pub mod documents;
pub mod entities;
pub mod enums;
pub mod errors;
pub mod fingerprint;
pub mod responses;

pub use errors::ValidationError;
