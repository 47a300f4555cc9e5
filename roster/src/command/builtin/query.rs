//! Read-only commands.

use crate::command::{Command, CommandContext, Flow, expect_no_argument};
use crate::error::CommandError;

pub struct Help;

impl Command for Help {
    fn name(&self) -> &'static str {
        "help"
    }

    fn description(&self) -> &'static str {
        "list available commands"
    }

    fn execute(&self, arg: &str, ctx: &mut CommandContext<'_>) -> Result<Flow, CommandError> {
        expect_no_argument(self.name(), arg)?;
        let width = ctx
            .registry
            .commands()
            .map(|command| command.usage().len())
            .max()
            .unwrap_or(0);
        for command in ctx.registry.commands() {
            writeln!(
                ctx.out,
                "{:width$} : {}",
                command.usage(),
                command.description()
            )?;
        }
        Ok(Flow::Continue)
    }
}

pub struct Info;

impl Command for Info {
    fn name(&self) -> &'static str {
        "info"
    }

    fn description(&self) -> &'static str {
        "print collection type, initialization time and element count"
    }

    fn execute(&self, arg: &str, ctx: &mut CommandContext<'_>) -> Result<Flow, CommandError> {
        expect_no_argument(self.name(), arg)?;
        let info = ctx.store.info();
        writeln!(ctx.out, "Type: {}", info.element_type)?;
        writeln!(
            ctx.out,
            "Initialized: {}",
            info.initialized_at.format("%Y-%m-%d %H:%M:%S")
        )?;
        writeln!(ctx.out, "Elements: {}", info.len)?;
        Ok(Flow::Continue)
    }
}

pub struct Show;

impl Command for Show {
    fn name(&self) -> &'static str {
        "show"
    }

    fn description(&self) -> &'static str {
        "print every worker"
    }

    fn execute(&self, arg: &str, ctx: &mut CommandContext<'_>) -> Result<Flow, CommandError> {
        expect_no_argument(self.name(), arg)?;
        if ctx.store.is_empty() {
            writeln!(ctx.out, "Collection is empty")?;
        }
        for worker in ctx.store.workers() {
            writeln!(ctx.out, "{worker}")?;
        }
        Ok(Flow::Continue)
    }
}

pub struct FilterGreaterThanStatus;

impl Command for FilterGreaterThanStatus {
    fn name(&self) -> &'static str {
        "filter_greater_than_status"
    }

    fn description(&self) -> &'static str {
        "print workers whose status comes after the given status"
    }

    fn usage(&self) -> &'static str {
        "filter_greater_than_status <status>"
    }

    fn execute(&self, arg: &str, ctx: &mut CommandContext<'_>) -> Result<Flow, CommandError> {
        let status = if arg.is_empty() {
            ctx.prompter()
                .line("status", "Enter the status to compare with")?
        } else {
            arg.to_string()
        };
        let matches = ctx.store.filter_greater_than_status(&status)?;
        if matches.is_empty() {
            writeln!(ctx.out, "No workers with status greater than {status}")?;
        }
        for worker in matches {
            writeln!(ctx.out, "{worker}")?;
        }
        Ok(Flow::Continue)
    }
}

pub struct GroupCountingByStatus;

impl Command for GroupCountingByStatus {
    fn name(&self) -> &'static str {
        "group_counting_by_status"
    }

    fn description(&self) -> &'static str {
        "print how many workers have each status"
    }

    fn execute(&self, arg: &str, ctx: &mut CommandContext<'_>) -> Result<Flow, CommandError> {
        expect_no_argument(self.name(), arg)?;
        let counts = ctx.store.count_by_status();
        if counts.is_empty() {
            writeln!(ctx.out, "Collection is empty")?;
        }
        for (status, count) in counts {
            writeln!(ctx.out, "Workers with status '{status}': {count}")?;
        }
        Ok(Flow::Continue)
    }
}

pub struct PrintFieldAscendingPerson;

impl Command for PrintFieldAscendingPerson {
    fn name(&self) -> &'static str {
        "print_field_ascending_person"
    }

    fn description(&self) -> &'static str {
        "print the person of every worker, oldest first"
    }

    fn execute(&self, arg: &str, ctx: &mut CommandContext<'_>) -> Result<Flow, CommandError> {
        expect_no_argument(self.name(), arg)?;
        for person in ctx.store.persons_ascending() {
            writeln!(ctx.out, "{person}")?;
        }
        Ok(Flow::Continue)
    }
}
