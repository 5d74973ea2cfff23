//! Deterministic, pure logic shared by the catalog store.
//!
//! Core modules must be free of I/O side effects. They operate on in-memory
//! records and return deterministic outputs suitable for tests.

pub mod field;
pub mod invariants;
pub mod matcher;
pub mod resolve;
