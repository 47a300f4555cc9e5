//! Interactive manager for a collection of workers.
//!
//! A session reads command lines, dispatches them through a case-insensitive
//! registry, and applies them to an in-memory collection that can be saved to
//! and loaded from XML. Scripts replay command lines while answering every
//! prompt from the script's own data lines.
//!
//! - **[`core`]**: pure logic (entity model, field validators, collection
//!   store, script split pass). No I/O.
//! - **[`io`]**: side-effecting adapters (configuration, input sources, the
//!   field prompter, XML persistence).
//! - **[`command`]**: the command trait, registry and built-in handlers.
//! - **[`session`]**: the read/dispatch loop that binds them together.

pub mod command;
pub mod core;
pub mod error;
pub mod exit_codes;
pub mod io;
pub mod logging;
pub mod session;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;
