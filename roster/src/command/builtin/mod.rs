//! Built-in command implementations.

use crate::command::{Command, Registry};

pub mod edit;
pub mod query;
pub mod script;
pub mod system;

pub use edit::{AddElement, AddIfMin, Clear, RemoveElementById, RemoveGreater, Sort, UpdateById};
pub use query::{FilterGreaterThanStatus, GroupCountingByStatus, Help, Info, PrintFieldAscendingPerson, Show};
pub use script::ExecuteScript;
pub use system::{Exit, Save};

/// Every built-in command, in no particular order.
pub fn builtin_commands() -> Vec<Box<dyn Command>> {
    vec![
        Box::new(AddElement),
        Box::new(AddIfMin),
        Box::new(Clear),
        Box::new(ExecuteScript),
        Box::new(Exit),
        Box::new(FilterGreaterThanStatus),
        Box::new(GroupCountingByStatus),
        Box::new(Help),
        Box::new(Info),
        Box::new(PrintFieldAscendingPerson),
        Box::new(RemoveElementById),
        Box::new(RemoveGreater),
        Box::new(Save),
        Box::new(Show),
        Box::new(Sort),
        Box::new(UpdateById),
    ]
}

/// Registry holding every built-in command.
pub fn default_registry() -> Registry {
    let mut registry = Registry::new();
    for command in builtin_commands() {
        registry.register(command);
    }
    registry
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_registry_has_all_commands() {
        let registry = default_registry();
        let names: Vec<&str> = registry.commands().map(|command| command.name()).collect();
        assert_eq!(
            names,
            vec![
                "add_if_min",
                "addElement",
                "clear",
                "execute_script",
                "exit",
                "filter_greater_than_status",
                "group_counting_by_status",
                "help",
                "info",
                "print_field_ascending_person",
                "remove_element_by_id",
                "remove_greater",
                "save",
                "show",
                "sort",
                "update_by_id",
            ]
        );
    }
}
