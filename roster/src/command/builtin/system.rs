//! Persistence and session control.

use std::path::Path;

use tracing::info;

use crate::command::{Command, CommandContext, Flow, expect_argument, expect_no_argument};
use crate::error::CommandError;
use crate::io::xml::save_workers;

pub struct Save;

impl Command for Save {
    fn name(&self) -> &'static str {
        "save"
    }

    fn description(&self) -> &'static str {
        "write the collection to an XML file"
    }

    fn usage(&self) -> &'static str {
        "save <path>"
    }

    fn execute(&self, arg: &str, ctx: &mut CommandContext<'_>) -> Result<Flow, CommandError> {
        let path = expect_argument(self.name(), arg)?;
        save_workers(Path::new(path), ctx.store.workers())
            .map_err(|err| CommandError::file_access(path, &err))?;
        info!(path, workers = ctx.store.len(), "collection saved");
        writeln!(ctx.out, "Saved {} worker(s) to {}", ctx.store.len(), path)?;
        Ok(Flow::Continue)
    }
}

pub struct Exit;

impl Command for Exit {
    fn name(&self) -> &'static str {
        "exit"
    }

    fn description(&self) -> &'static str {
        "end the session without saving"
    }

    fn execute(&self, arg: &str, ctx: &mut CommandContext<'_>) -> Result<Flow, CommandError> {
        expect_no_argument(self.name(), arg)?;
        writeln!(ctx.out, "Terminating the program")?;
        Ok(Flow::Exit)
    }
}
