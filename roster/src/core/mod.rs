//! Deterministic, pure logic for the worker collection.
//!
//! Core modules must be free of I/O side effects. They operate on in-memory
//! data structures and return deterministic outputs suitable for tests.

pub mod model;
pub mod script;
pub mod store;
pub mod validate;
