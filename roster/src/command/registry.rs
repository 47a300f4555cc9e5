//! Command registry: case-insensitive lookup and dispatch.

use std::collections::BTreeMap;
use std::io::Write;

use tracing::{debug, warn};

use crate::command::{Command, CommandContext, Flow};
use crate::error::CommandError;

/// Mapping from lowercased command name to handler.
///
/// Built once at startup and only read afterwards.
#[derive(Default)]
pub struct Registry {
    commands: BTreeMap<String, Box<dyn Command>>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a command. A later registration under the same
    /// (case-insensitive) name replaces the earlier one, which is returned.
    pub fn register(&mut self, command: Box<dyn Command>) -> Option<Box<dyn Command>> {
        let key = command.name().to_ascii_lowercase();
        let replaced = self.commands.insert(key, command);
        if let Some(old) = &replaced {
            debug!(command = old.name(), "replaced command registration");
        }
        replaced
    }

    pub fn get(&self, name: &str) -> Option<&dyn Command> {
        self.commands
            .get(&name.to_ascii_lowercase())
            .map(|command| command.as_ref())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.commands.contains_key(&name.to_ascii_lowercase())
    }

    /// All commands, ordered by name.
    pub fn commands(&self) -> impl Iterator<Item = &dyn Command> + '_ {
        self.commands.values().map(|command| command.as_ref())
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Split a line into its command and the (trimmed) rest of the line.
    pub fn resolve<'l>(&self, line: &'l str) -> Result<(&dyn Command, &'l str), CommandError> {
        let line = line.trim();
        let (name, arg) = match line.split_once(char::is_whitespace) {
            Some((name, rest)) => (name, rest.trim()),
            None => (line, ""),
        };
        let command = self
            .get(name)
            .ok_or_else(|| CommandError::UnknownCommand(name.to_string()))?;
        Ok((command, arg))
    }

    /// Resolve and run one line, returning the command's own result.
    /// Blank lines do nothing.
    pub fn run_line(&self, line: &str, ctx: &mut CommandContext<'_>) -> Result<Flow, CommandError> {
        if line.trim().is_empty() {
            return Ok(Flow::Continue);
        }
        let (command, arg) = self.resolve(line)?;
        debug!(command = command.name(), arg, "dispatch");
        command.execute(arg, ctx)
    }

    /// Resolve and run one line. Command failures are reported on `ctx.err`
    /// and never end the session; only a command returning [`Flow::Exit`] does.
    pub fn dispatch(&self, line: &str, ctx: &mut CommandContext<'_>) -> Flow {
        match self.run_line(line, ctx) {
            Ok(flow) => flow,
            Err(err) => {
                debug!(error = %err, "command failed");
                report(ctx.err, &err);
                Flow::Continue
            }
        }
    }
}

/// Write a one-line error for the user.
pub fn report(err: &mut dyn Write, error: &CommandError) {
    if let Err(io_err) = writeln!(err, "Error: {error}") {
        warn!(error = %io_err, "failed to report command error");
    }
}
