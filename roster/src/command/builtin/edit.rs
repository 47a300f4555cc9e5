//! Commands that change the collection.

use crate::command::{Command, CommandContext, Flow, expect_id, expect_no_argument};
use crate::error::CommandError;

pub struct AddElement;

impl Command for AddElement {
    fn name(&self) -> &'static str {
        "addElement"
    }

    fn description(&self) -> &'static str {
        "add a new worker to the collection"
    }

    fn execute(&self, arg: &str, ctx: &mut CommandContext<'_>) -> Result<Flow, CommandError> {
        expect_no_argument(self.name(), arg)?;
        let draft = ctx.prompter().worker_draft()?;
        let id = ctx.store.add(draft);
        writeln!(ctx.out, "Worker added with id {id}")?;
        Ok(Flow::Continue)
    }
}

pub struct AddIfMin;

impl Command for AddIfMin {
    fn name(&self) -> &'static str {
        "add_if_min"
    }

    fn description(&self) -> &'static str {
        "add a new worker if its salary is below the smallest salary in the collection"
    }

    fn execute(&self, arg: &str, ctx: &mut CommandContext<'_>) -> Result<Flow, CommandError> {
        expect_no_argument(self.name(), arg)?;
        writeln!(ctx.out, "Describe the candidate worker:")?;
        let draft = ctx.prompter().worker_draft()?;
        let salary = draft.salary;
        if ctx.store.add_if_smaller_salary(draft) {
            writeln!(ctx.out, "Worker added: salary {salary} is the new minimum")?;
        } else {
            writeln!(
                ctx.out,
                "Worker not added: salary {} is not below the minimum {}",
                salary,
                ctx.store.min_salary().unwrap_or_default()
            )?;
        }
        Ok(Flow::Continue)
    }
}

pub struct Clear;

impl Command for Clear {
    fn name(&self) -> &'static str {
        "clear"
    }

    fn description(&self) -> &'static str {
        "remove every worker from the collection"
    }

    fn execute(&self, arg: &str, ctx: &mut CommandContext<'_>) -> Result<Flow, CommandError> {
        expect_no_argument(self.name(), arg)?;
        if ctx.config.confirm_clear
            && !ctx
                .prompter()
                .confirm("Are you sure you want to clear the collection?")?
        {
            writeln!(ctx.out, "Clear cancelled")?;
            return Ok(Flow::Continue);
        }
        ctx.store.clear();
        writeln!(ctx.out, "Collection cleared")?;
        Ok(Flow::Continue)
    }
}

pub struct Sort;

impl Command for Sort {
    fn name(&self) -> &'static str {
        "sort"
    }

    fn description(&self) -> &'static str {
        "sort the collection by name"
    }

    fn execute(&self, arg: &str, ctx: &mut CommandContext<'_>) -> Result<Flow, CommandError> {
        expect_no_argument(self.name(), arg)?;
        ctx.store.sort();
        writeln!(ctx.out, "Collection sorted")?;
        Ok(Flow::Continue)
    }
}

pub struct RemoveGreater;

impl Command for RemoveGreater {
    fn name(&self) -> &'static str {
        "remove_greater"
    }

    fn description(&self) -> &'static str {
        "remove every worker whose name sorts before the given worker's name"
    }

    fn execute(&self, arg: &str, ctx: &mut CommandContext<'_>) -> Result<Flow, CommandError> {
        expect_no_argument(self.name(), arg)?;
        writeln!(ctx.out, "Describe the worker to compare with:")?;
        let pivot = ctx.prompter().worker_draft()?;
        let removed = ctx.store.remove_greater(&pivot);
        writeln!(ctx.out, "Removed {removed} worker(s)")?;
        Ok(Flow::Continue)
    }
}

pub struct RemoveElementById;

impl Command for RemoveElementById {
    fn name(&self) -> &'static str {
        "remove_element_by_id"
    }

    fn description(&self) -> &'static str {
        "remove the worker with the given id"
    }

    fn usage(&self) -> &'static str {
        "remove_element_by_id <id>"
    }

    fn execute(&self, arg: &str, ctx: &mut CommandContext<'_>) -> Result<Flow, CommandError> {
        let id = expect_id(self.name(), arg)?;
        let removed = ctx.store.remove_by_id(id)?;
        writeln!(ctx.out, "Removed worker {} ({})", id, removed.name)?;
        Ok(Flow::Continue)
    }
}

pub struct UpdateById;

impl Command for UpdateById {
    fn name(&self) -> &'static str {
        "update_by_id"
    }

    fn description(&self) -> &'static str {
        "replace the fields of the worker with the given id"
    }

    fn usage(&self) -> &'static str {
        "update_by_id <id>"
    }

    fn execute(&self, arg: &str, ctx: &mut CommandContext<'_>) -> Result<Flow, CommandError> {
        let id = expect_id(self.name(), arg)?;
        ctx.store.ensure_exists(id)?;
        let draft = ctx.prompter().worker_draft()?;
        ctx.store.update_by_id(id, draft)?;
        writeln!(ctx.out, "Worker {id} updated")?;
        Ok(Flow::Continue)
    }
}
