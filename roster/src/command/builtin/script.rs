//! `execute_script`: replay a file of commands and their answers.
//!
//! The file is split into a command stream and a data stream. Commands are
//! dispatched in order against a context whose input is the data stream, so
//! every prompt a command issues consumes the next data line instead of
//! waiting on the terminal. A command that fails also gives up the rest of
//! the data lines written under it, so the next command starts on its own
//! answers. The session's own input source is never touched; when replay
//! ends (normally or not) the data stream is dropped and later commands read
//! from the terminal again.

use std::fs;
use std::io::ErrorKind;

use tracing::{debug, info, warn};

use crate::command::registry::report;
use crate::command::{Command, CommandContext, Flow, expect_argument};
use crate::core::script::{ScriptPlan, first_token, split_script};
use crate::error::CommandError;
use crate::io::input::InputSource;

pub struct ExecuteScript;

impl ExecuteScript {
    const NAME: &'static str = "execute_script";
}

impl Command for ExecuteScript {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn description(&self) -> &'static str {
        "run the commands in a script file, answering prompts from the file"
    }

    fn usage(&self) -> &'static str {
        "execute_script <path>"
    }

    fn execute(&self, arg: &str, ctx: &mut CommandContext<'_>) -> Result<Flow, CommandError> {
        let path = expect_argument(self.name(), arg)?;
        if ctx.input.is_script() {
            writeln!(ctx.out, "Skipping nested execute_script {path}")?;
            return Ok(Flow::Continue);
        }
        let text = fs::read_to_string(path).map_err(|err| CommandError::FileAccess {
            path: path.to_string(),
            reason: match err.kind() {
                ErrorKind::NotFound => "file not found".to_string(),
                _ => err.to_string(),
            },
        })?;

        let registry = ctx.registry;
        let plan = split_script(&text, |token| registry.contains(token));
        info!(
            path,
            commands = plan.commands.len(),
            data_lines = plan.data.len(),
            "replaying script"
        );
        let ScriptPlan {
            commands,
            data,
            blocks,
        } = plan;

        let mut data = InputSource::script(data);
        let flow = {
            let mut replay = CommandContext {
                store: &mut *ctx.store,
                registry,
                config: ctx.config,
                input: &mut data,
                out: &mut *ctx.out,
                err: &mut *ctx.err,
            };
            replay_commands(&commands, &blocks, &mut replay)?
        };

        let unused = data.remaining();
        if unused > 0 {
            warn!(path, unused, "script left data lines unconsumed");
            writeln!(ctx.err, "Warning: {unused} unused data line(s) in {path}")?;
        }
        writeln!(ctx.out, "Script {path} finished")?;
        Ok(flow)
    }
}

/// Run each command line in order. Nested scripts are skipped. After a
/// failed command, whatever is left of its data block is dropped.
fn replay_commands(
    commands: &[String],
    blocks: &[usize],
    ctx: &mut CommandContext<'_>,
) -> Result<Flow, CommandError> {
    let registry = ctx.registry;
    for (line, &block) in commands.iter().zip(blocks) {
        let is_nested = first_token(line)
            .is_some_and(|token| token.eq_ignore_ascii_case(ExecuteScript::NAME));
        if is_nested {
            debug!(line = %line, "skipping nested script");
            writeln!(ctx.out, "Skipping nested {line}")?;
            continue;
        }
        writeln!(ctx.out, "{}{}", ctx.config.prompt, line)?;
        let before = ctx.input.remaining();
        match registry.run_line(line, ctx) {
            Ok(Flow::Exit) => return Ok(Flow::Exit),
            Ok(Flow::Continue) => {}
            Err(err) => {
                report(ctx.err, &err);
                let consumed = before - ctx.input.remaining();
                let dropped = ctx.input.skip(block.saturating_sub(consumed));
                debug!(line = %line, dropped, "dropped answers of failed command");
            }
        }
    }
    Ok(Flow::Continue)
}
