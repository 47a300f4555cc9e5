//! Command system.
//!
//! - `registry.rs` - name → handler mapping, line resolution and dispatch
//! - `builtin/` - the built-in handlers, grouped by what they touch
//!
//! # Adding a New Command
//!
//! 1. Define a unit struct and implement [`Command`] for it in `builtin/`
//! 2. Add it to `builtin::builtin_commands`

use std::io::Write;

use crate::core::store::WorkerStore;
use crate::error::CommandError;
use crate::io::config::RosterConfig;
use crate::io::input::InputSource;
use crate::io::prompt::Prompter;

pub mod builtin;
pub mod registry;

pub use registry::Registry;

/// What the session loop should do after a command returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

/// Everything a handler may read or mutate while it runs.
pub struct CommandContext<'a> {
    pub store: &'a mut WorkerStore,
    pub registry: &'a Registry,
    pub config: &'a RosterConfig,
    /// Active line source: the terminal, or a script's data stream.
    pub input: &'a mut InputSource,
    pub out: &'a mut dyn Write,
    pub err: &'a mut dyn Write,
}

impl CommandContext<'_> {
    /// Field prompter bound to the active input source.
    pub fn prompter(&mut self) -> Prompter<'_> {
        Prompter::new(
            &mut *self.input,
            &mut *self.out,
            &mut *self.err,
            &self.config.limits,
        )
    }
}

/// A named, self-validating action invoked with the raw argument text.
pub trait Command {
    /// Primary command name; lookup is case-insensitive.
    fn name(&self) -> &'static str;

    /// Short description (shown by `help`).
    fn description(&self) -> &'static str;

    /// Invocation shape shown by `help`, e.g. `save <path>`.
    fn usage(&self) -> &'static str {
        self.name()
    }

    /// Run with the argument text after the command name (possibly empty).
    fn execute(&self, arg: &str, ctx: &mut CommandContext<'_>) -> Result<Flow, CommandError>;
}

pub fn expect_no_argument(command: &'static str, arg: &str) -> Result<(), CommandError> {
    if arg.is_empty() {
        Ok(())
    } else {
        Err(CommandError::WrongArgumentCount {
            command,
            expected: "takes no arguments",
        })
    }
}

pub fn expect_argument<'s>(command: &'static str, arg: &'s str) -> Result<&'s str, CommandError> {
    if arg.is_empty() {
        Err(CommandError::WrongArgumentCount {
            command,
            expected: "requires an argument",
        })
    } else {
        Ok(arg)
    }
}

/// Required integer id argument.
pub fn expect_id(command: &'static str, arg: &str) -> Result<u32, CommandError> {
    let raw = expect_argument(command, arg)?;
    raw.parse().map_err(|_| CommandError::InvalidArgumentFormat {
        command,
        value: raw.to_string(),
    })
}
