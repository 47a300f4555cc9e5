//! Split pass for script files.
//!
//! A script interleaves command lines with the answers those commands would
//! prompt for. Splitting is a pure function of the text and of the set of
//! known command names.

/// The two ordered streams of a script.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScriptPlan {
    /// Lines whose first token names a registered command.
    pub commands: Vec<String>,
    /// Everything else: answers consumed by prompts, in file order.
    pub data: Vec<String>,
    /// For each command, how many data lines follow it before the next
    /// command. Lines ahead of the first command belong to no block.
    pub blocks: Vec<usize>,
}

/// Classify each line of `text` as a command line or a data line.
///
/// Command lines are stored trimmed. Data lines are kept verbatim (minus the
/// line terminator) because an answer's exact text is the prompt's input.
/// A line never fails classification; anything unrecognised is data.
pub fn split_script<F>(text: &str, is_command: F) -> ScriptPlan
where
    F: Fn(&str) -> bool,
{
    let mut plan = ScriptPlan::default();
    for line in text.lines() {
        match first_token(line) {
            Some(token) if is_command(token) => {
                plan.commands.push(line.trim().to_string());
                plan.blocks.push(0);
            }
            _ => {
                plan.data.push(line.to_string());
                if let Some(block) = plan.blocks.last_mut() {
                    *block += 1;
                }
            }
        }
    }
    plan
}

/// First whitespace-delimited token of `line`, if any.
pub fn first_token(line: &str) -> Option<&str> {
    line.split_whitespace().next()
}
