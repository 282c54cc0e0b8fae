//! # pact-store
//!
//! Durable record store for partners, partner research, and the history of
//! every addition.
//!
//! Each collection is one JSON document in the data directory. Mutations are
//! serialized through a single writer (an in-process mutex plus an optional
//! lock file shared with other processes) and committed through a journal so
//! a collection and its history are always updated together.
//!
//! Duplicates and failed lookups are returned as error-status
//! [`OpResult`](pact_core::responses::OpResult)s; only malformed input and
//! I/O failures are [`StoreError`]s.

pub mod error;
pub mod files;
pub mod journal;
pub mod repos;
pub mod service;
pub mod write_lock;

pub use error::StoreError;
pub use service::RecordStore;
