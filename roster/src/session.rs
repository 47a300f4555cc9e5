//! Interactive session: the read → dispatch loop over one collection.

use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing::{info, warn};

use crate::command::builtin::default_registry;
use crate::command::{CommandContext, Flow, Registry};
use crate::core::store::WorkerStore;
use crate::core::validate::FieldLimits;
use crate::io::config::RosterConfig;
use crate::io::input::InputSource;
use crate::io::xml::load_workers;

/// Why [`Session::run`] returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    /// The `exit` command ran.
    Exit,
    /// The interactive source reached end of input.
    EndOfInput,
}

pub struct Session {
    store: WorkerStore,
    registry: Registry,
    config: RosterConfig,
    input: InputSource,
}

impl Session {
    pub fn new(store: WorkerStore, config: RosterConfig, input: InputSource) -> Self {
        Self {
            store,
            registry: default_registry(),
            config,
            input,
        }
    }

    pub fn store(&self) -> &WorkerStore {
        &self.store
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Dispatch a single command line against the session state.
    pub fn execute(&mut self, line: &str, out: &mut dyn Write, err: &mut dyn Write) -> Flow {
        let mut ctx = CommandContext {
            store: &mut self.store,
            registry: &self.registry,
            config: &self.config,
            input: &mut self.input,
            out,
            err,
        };
        self.registry.dispatch(line, &mut ctx)
    }

    /// Prompt, read and dispatch lines until `exit` or end of input.
    pub fn run(&mut self, out: &mut dyn Write, err: &mut dyn Write) -> Result<SessionEnd> {
        loop {
            write!(out, "{}", self.config.prompt).context("write prompt")?;
            out.flush().context("flush prompt")?;
            let Some(line) = self.input.next_line().context("read command line")? else {
                writeln!(out).context("write newline")?;
                info!("end of input");
                return Ok(SessionEnd::EndOfInput);
            };
            if self.execute(&line, out, err) == Flow::Exit {
                return Ok(SessionEnd::Exit);
            }
        }
    }
}

/// Build the startup collection from the command-line file arguments.
///
/// Exactly one file is expected. Any other count, or a file that cannot be
/// loaded, is reported on `err` and yields an empty collection.
pub fn load_initial_store(
    files: &[PathBuf],
    limits: &FieldLimits,
    err: &mut dyn Write,
) -> Result<WorkerStore> {
    let [path] = files else {
        writeln!(
            err,
            "Error: expected exactly one collection file argument, got {}",
            files.len()
        )
        .context("write startup error")?;
        return Ok(WorkerStore::new());
    };
    match load_workers(path, limits) {
        Ok(drafts) => {
            info!(path = %path.display(), workers = drafts.len(), "collection loaded");
            Ok(WorkerStore::from_drafts(drafts))
        }
        Err(load_err) => {
            warn!(path = %path.display(), error = %format!("{:#}", load_err), "collection load failed");
            writeln!(
                err,
                "Warning: could not load collection ({:#}); starting with an empty collection",
                load_err
            )
            .context("write startup warning")?;
            Ok(WorkerStore::new())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::io::Cursor;

    use crate::core::model::{Position, Status};
    use crate::io::xml::save_workers;
    use crate::test_support::{answers, draft, draft_with_salary, draft_with_status, script_text};

    struct Harness {
        session: Session,
        out: Vec<u8>,
        err: Vec<u8>,
    }

    impl Harness {
        fn new(store: WorkerStore, stdin: &str) -> Self {
            let config = RosterConfig {
                prompt: "> ".to_string(),
                ..RosterConfig::default()
            };
            Self {
                session: Session::new(
                    store,
                    config,
                    InputSource::interactive(Cursor::new(stdin.to_string())),
                ),
                out: Vec::new(),
                err: Vec::new(),
            }
        }

        fn exec(&mut self, line: &str) -> Flow {
            self.session.execute(line, &mut self.out, &mut self.err)
        }

        fn run(&mut self) -> SessionEnd {
            self.session
                .run(&mut self.out, &mut self.err)
                .expect("session run")
        }

        fn out(&self) -> String {
            String::from_utf8_lossy(&self.out).into_owned()
        }

        fn err(&self) -> String {
            String::from_utf8_lossy(&self.err).into_owned()
        }

        fn names(&self) -> Vec<String> {
            self.session
                .store()
                .workers()
                .iter()
                .map(|w| w.name.clone())
                .collect()
        }
    }

    #[test]
    fn script_replay_adds_workers_and_restores_terminal() {
        let first = draft("Ann");
        let mut second = draft_with_status("Bob", Status::Probation);
        second.position = Position::ManagerOfCleaning;
        let temp = tempfile::tempdir().expect("tempdir");
        let script = temp.path().join("add.txt");
        fs::write(
            &script,
            script_text(&[("addElement", Some(&first)), ("addElement", Some(&second))]),
        )
        .expect("write script");

        let mut h = Harness::new(WorkerStore::new(), "show\nexit\n");
        let flow = h.exec(&format!("execute_script {}", script.display()));
        assert_eq!(flow, Flow::Continue);
        assert_eq!(h.err(), "");

        let drafts: Vec<_> = h.session.store().workers().iter().map(|w| w.to_draft()).collect();
        assert_eq!(drafts, vec![first, second]);
        let ids: Vec<u32> = h.session.store().workers().iter().map(|w| w.id).collect();
        assert_eq!(ids, vec![1, 2]);

        assert_eq!(h.run(), SessionEnd::Exit);
        let out = h.out();
        assert!(out.contains("Worker [id=2, name=Bob"));
        assert!(out.ends_with("Terminating the program\n"));
    }

    #[test]
    fn script_with_missing_answers_aborts_only_that_command() {
        let temp = tempfile::tempdir().expect("tempdir");
        let script = temp.path().join("short.txt");
        let mut lines = answers(&draft("Ann"));
        lines.truncate(7);
        fs::write(&script, format!("addElement\n{}\nshow\n", lines.join("\n"))).expect("write");

        let mut h = Harness::new(WorkerStore::new(), "");
        assert_eq!(h.exec(&format!("execute_script {}", script.display())), Flow::Continue);
        assert!(h.session.store().is_empty());
        assert!(h.err().contains("invalid data: input ended while reading"));
        assert!(h.out().contains("Collection is empty"));
    }

    #[test]
    fn invalid_script_answer_fails_its_command_and_spares_the_next() {
        let mut bad = answers(&draft("Ann"));
        bad[3] = "abc".to_string();
        let bob = draft("Bob");
        let temp = tempfile::tempdir().expect("tempdir");
        let script = temp.path().join("bad.txt");
        fs::write(
            &script,
            format!(
                "addElement\n{}\n{}",
                bad.join("\n"),
                script_text(&[("addElement", Some(&bob)), ("show", None)])
            ),
        )
        .expect("write script");

        let mut h = Harness::new(WorkerStore::new(), "");
        h.exec(&format!("execute_script {}", script.display()));

        let drafts: Vec<_> = h.session.store().workers().iter().map(|w| w.to_draft()).collect();
        assert_eq!(drafts, vec![bob]);
        let err = h.err();
        assert_eq!(err.lines().count(), 1, "{err}");
        assert!(err.contains("salary must be a number, got 'abc'"));
        assert!(h.out().contains("Worker [id=1, name=Bob"));
    }

    #[test]
    fn nested_scripts_are_skipped() {
        let temp = tempfile::tempdir().expect("tempdir");
        let inner = temp.path().join("inner.txt");
        let outer = temp.path().join("outer.txt");
        fs::write(&inner, script_text(&[("addElement", Some(&draft("Inner")))])).expect("write");
        fs::write(
            &outer,
            format!(
                "execute_script {}\n{}",
                inner.display(),
                script_text(&[("addElement", Some(&draft("Outer")))])
            ),
        )
        .expect("write");

        let mut h = Harness::new(WorkerStore::new(), "");
        h.exec(&format!("execute_script {}", outer.display()));
        assert_eq!(h.names(), vec!["Outer"]);
        assert!(h.out().contains("Skipping nested execute_script"));
    }

    #[test]
    fn self_referencing_script_terminates() {
        let temp = tempfile::tempdir().expect("tempdir");
        let script = temp.path().join("loop.txt");
        fs::write(&script, format!("execute_script {}\nsort\n", script.display())).expect("write");

        let mut h = Harness::new(WorkerStore::new(), "");
        assert_eq!(h.exec(&format!("execute_script {}", script.display())), Flow::Continue);
        assert!(h.out().contains("Collection sorted"));
    }

    #[test]
    fn exit_inside_script_ends_session() {
        let temp = tempfile::tempdir().expect("tempdir");
        let script = temp.path().join("exit.txt");
        fs::write(&script, "exit\nclear\n").expect("write");

        let mut h = Harness::new(WorkerStore::from_drafts([draft("Ann")]), "");
        assert_eq!(h.exec(&format!("execute_script {}", script.display())), Flow::Exit);
        assert_eq!(h.session.store().len(), 1);
    }

    #[test]
    fn unused_data_lines_are_reported() {
        let temp = tempfile::tempdir().expect("tempdir");
        let script = temp.path().join("extra.txt");
        fs::write(&script, "show\nleftover\n").expect("write");

        let mut h = Harness::new(WorkerStore::new(), "");
        h.exec(&format!("execute_script {}", script.display()));
        assert!(h.err().contains("1 unused data line(s)"));
    }

    #[test]
    fn missing_script_reports_file_not_found_and_session_continues() {
        let mut h = Harness::new(WorkerStore::new(), "info\nexit\n");
        assert_eq!(h.exec("execute_script /definitely/not/here.txt"), Flow::Continue);
        assert!(h.err().contains("file not found"));
        assert_eq!(h.run(), SessionEnd::Exit);
        assert!(h.out().contains("Elements: 0"));
    }

    #[test]
    fn execute_script_requires_argument() {
        let mut h = Harness::new(WorkerStore::new(), "");
        h.exec("execute_script");
        assert!(h.err().contains("execute_script: requires an argument"));
    }

    #[test]
    fn interactive_add_reprompts_invalid_fields() {
        let expected = draft("Ann");
        let mut lines = answers(&expected);
        lines.insert(3, "-10".to_string());
        let stdin = format!("addElement\n{}\nexit\n", lines.join("\n"));

        let mut h = Harness::new(WorkerStore::new(), &stdin);
        assert_eq!(h.run(), SessionEnd::Exit);
        assert_eq!(h.session.store().workers()[0].to_draft(), expected);
        assert!(h.err().contains("salary"));
    }

    #[test]
    fn add_if_min_compares_against_minimum_salary() {
        let store = WorkerStore::from_drafts([draft_with_salary("Ann", 1000.0)]);
        let rejected = answers(&draft_with_salary("Bob", 1000.0)).join("\n");
        let accepted = answers(&draft_with_salary("Cid", 999.0)).join("\n");
        let stdin = format!("add_if_min\n{rejected}\nadd_if_min\n{accepted}\n");

        let mut h = Harness::new(store, &stdin);
        assert_eq!(h.run(), SessionEnd::EndOfInput);
        assert_eq!(h.names(), vec!["Ann", "Cid"]);
        assert!(h.out().contains("Worker not added"));
    }

    #[test]
    fn remove_and_update_by_id() {
        let store = WorkerStore::from_drafts(["One", "Two", "Three"].map(draft));
        let replacement = answers(&draft("Zed")).join("\n");
        let stdin = format!("remove_element_by_id 2\nupdate_by_id 2\n{replacement}\n");

        let mut h = Harness::new(store, &stdin);
        h.run();
        assert_eq!(h.names(), vec!["One", "Zed"]);
        assert_eq!(h.err(), "");
    }

    #[test]
    fn id_commands_validate_arguments() {
        let mut h = Harness::new(WorkerStore::from_drafts([draft("One")]), "");
        h.exec("remove_element_by_id");
        h.exec("remove_element_by_id two");
        h.exec("update_by_id 5");
        let err = h.err();
        assert!(err.contains("requires an argument"));
        assert!(err.contains("'two' is not a valid integer id"));
        assert!(err.contains("no worker with id 5"));
        assert_eq!(h.session.store().len(), 1);
    }

    #[test]
    fn no_argument_commands_reject_arguments() {
        let mut h = Harness::new(WorkerStore::new(), "");
        for line in ["show all", "info x", "sort now", "help me", "exit please"] {
            assert_eq!(h.exec(line), Flow::Continue);
        }
        assert_eq!(h.err().lines().count(), 5);
        assert!(h.err().lines().all(|line| line.contains("takes no arguments")));
    }

    #[test]
    fn clear_asks_for_confirmation_interactively() {
        let store = WorkerStore::from_drafts(["One", "Two"].map(draft));
        let mut h = Harness::new(store, "clear\nn\nclear\ny\n");
        h.run();
        assert!(h.out().contains("Clear cancelled"));
        assert!(h.session.store().is_empty());
    }

    #[test]
    fn filter_and_group_by_status() {
        let store = WorkerStore::from_drafts([
            draft_with_status("Hal", Status::Hired),
            draft_with_status("Reg", Status::Regular),
            draft_with_status("Rec", Status::RecommendedForPromotion),
            draft_with_status("Pro", Status::Probation),
        ]);
        let mut h = Harness::new(store, "regular\n");
        h.exec("filter_greater_than_status hired");
        h.exec("filter_greater_than_status");
        h.exec("filter_greater_than_status chief");
        h.exec("group_counting_by_status");
        let out = h.out();
        assert_eq!(out.matches("name=Pro").count(), 2);
        assert_eq!(out.matches("name=Rec").count(), 1);
        assert!(h.err().contains("'chief' is not a Status"));
        assert!(out.contains("Workers with status 'HIRED': 1"));
        assert!(out.contains("Workers with status 'PROBATION': 1"));
    }

    #[test]
    fn save_then_load_round_trips_through_commands() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = temp.path().join("saved.xml");
        let mut h = Harness::new(WorkerStore::from_drafts(["Bob", "Ann"].map(draft)), "");
        h.exec(&format!("save {}", path.display()));
        assert!(h.out().contains("Saved 2 worker(s)"));

        let mut err = Vec::new();
        let store = load_initial_store(&[path], &FieldLimits::default(), &mut err).expect("load");
        assert_eq!(store.len(), 2);
        assert!(err.is_empty());
    }

    #[test]
    fn save_to_unwritable_path_is_file_access_error() {
        let mut h = Harness::new(WorkerStore::new(), "");
        h.exec("save /definitely/not/here/out.xml");
        assert!(h.err().starts_with("Error: /definitely/not/here/out.xml:"));
    }

    #[test]
    fn startup_requires_exactly_one_file() {
        let mut err = Vec::new();
        let store = load_initial_store(&[], &FieldLimits::default(), &mut err).expect("load");
        assert!(store.is_empty());
        assert!(String::from_utf8_lossy(&err).contains("got 0"));

        let temp = tempfile::tempdir().expect("tempdir");
        let good = temp.path().join("good.xml");
        save_workers(&good, WorkerStore::from_drafts([draft("Ann")]).workers()).expect("save");
        let mut err = Vec::new();
        let store =
            load_initial_store(&[good.clone(), good], &FieldLimits::default(), &mut err).expect("load");
        assert!(store.is_empty());
        assert!(String::from_utf8_lossy(&err).contains("got 2"));
    }

    #[test]
    fn startup_falls_back_to_empty_on_bad_file() {
        let temp = tempfile::tempdir().expect("tempdir");
        let bad = temp.path().join("bad.xml");
        fs::write(&bad, "<workers><worker><name>1</name></worker></workers>").expect("write");
        let mut err = Vec::new();
        let store = load_initial_store(&[bad], &FieldLimits::default(), &mut err).expect("load");
        assert!(store.is_empty());
        assert!(String::from_utf8_lossy(&err).starts_with("Warning: could not load collection"));
    }

    #[test]
    fn help_lists_every_command() {
        let mut h = Harness::new(WorkerStore::new(), "");
        h.exec("HELP");
        let out = h.out();
        assert_eq!(out.lines().count(), h.session.registry().len());
        assert!(out.contains("save <path>"));
        assert!(out.contains("execute_script <path>"));
    }
}
