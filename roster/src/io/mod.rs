//! I/O adapters: configuration, input sources, prompting, XML persistence.

pub mod config;
pub mod input;
pub mod prompt;
pub mod xml;
