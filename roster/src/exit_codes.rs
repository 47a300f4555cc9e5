//! Process exit codes for the `roster` binary.

/// Session ended through `exit` or end of standard input.
pub const OK: i32 = 0;
/// Startup failed before a session could begin (e.g. invalid configuration).
pub const INVALID: i32 = 1;
