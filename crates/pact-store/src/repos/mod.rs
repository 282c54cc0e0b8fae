//! Repository modules implementing the record store operations.
//!
//! Each module adds methods to `RecordStore` via `impl RecordStore` blocks.

pub mod history;
pub mod partner;
pub mod research;
