//! Test-only helpers for building workers, prompt answers and scripts.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{Days, NaiveDate};
use tempfile::TempDir;

use crate::core::model::{
    Coordinates, DATE_FORMAT, Location, Person, Position, Status, WorkerDraft,
};
use crate::core::store::WorkerStore;
use crate::io::xml::save_workers;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

/// A valid draft with deterministic field values.
pub fn draft(name: &str) -> WorkerDraft {
    WorkerDraft {
        name: name.to_string(),
        coordinates: Coordinates { x: 10, y: -20 },
        salary: 1500.5,
        position: Position::Director,
        status: Status::Regular,
        person: Person {
            birthday: date(1990, 4, 12),
            height: 180,
            passport_id: "123456".to_string(),
            location: Location {
                x: 1.5,
                y: 2,
                z: 3,
                name: "Office".to_string(),
            },
        },
    }
}

pub fn draft_with_salary(name: &str, salary: f64) -> WorkerDraft {
    WorkerDraft {
        salary,
        ..draft(name)
    }
}

pub fn draft_with_status(name: &str, status: Status) -> WorkerDraft {
    WorkerDraft {
        status,
        ..draft(name)
    }
}

/// The prompt answers that reproduce `draft`, in prompt order.
pub fn answers(draft: &WorkerDraft) -> Vec<String> {
    let person = &draft.person;
    vec![
        draft.name.clone(),
        draft.coordinates.x.to_string(),
        draft.coordinates.y.to_string(),
        draft.salary.to_string(),
        draft.position.to_string(),
        draft.status.to_string(),
        person.birthday.format(DATE_FORMAT).to_string(),
        person.height.to_string(),
        person.passport_id.clone(),
        person.location.x.to_string(),
        person.location.y.to_string(),
        person.location.z.to_string(),
        person.location.name.clone(),
    ]
}

/// Script text for `(command, answers-for)` pairs, one line each.
pub fn script_text(steps: &[(&str, Option<&WorkerDraft>)]) -> String {
    let mut text = String::new();
    for (command, draft) in steps {
        text.push_str(command);
        text.push('\n');
        for line in draft.map(answers).unwrap_or_default() {
            text.push_str(&line);
            text.push('\n');
        }
    }
    text
}

/// Letters-only name for index `i` (`Worker`, `WorkerB`, ..., `WorkerBA`).
fn letters(mut i: usize) -> String {
    let mut suffix = Vec::new();
    while i > 0 {
        suffix.push(char::from(b'A' + (i % 26) as u8));
        i /= 26;
    }
    suffix.reverse();
    format!("Worker{}", suffix.into_iter().collect::<String>())
}

/// `n` distinct valid drafts covering every position and status.
pub fn generated_drafts(n: usize) -> Vec<WorkerDraft> {
    (0..n)
        .map(|i| {
            let birthday = date(1970, 1, 1)
                .checked_add_days(Days::new(i as u64 * 97))
                .expect("date in range");
            WorkerDraft {
                name: letters(i),
                coordinates: Coordinates {
                    x: (i % 400) as i32,
                    y: -((i % 900) as i32),
                },
                salary: 100.0 + i as f64 * 12.5,
                position: Position::ALL[i % Position::ALL.len()],
                status: Status::ALL[i % Status::ALL.len()],
                person: Person {
                    birthday,
                    height: 150 + (i % 100) as u32,
                    passport_id: format!("{:06}", 100_000 + i),
                    location: Location {
                        x: i as f32 * 0.5,
                        y: i as i64 * 1_000,
                        z: -(i as i32),
                        name: format!("Site{}", letters(i)),
                    },
                },
            }
        })
        .collect()
}

/// A saved collection file inside a temporary directory.
pub struct TempCollection {
    _temp: TempDir,
    path: PathBuf,
}

impl TempCollection {
    pub fn new(drafts: Vec<WorkerDraft>) -> Self {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = temp.path().join("workers.xml");
        let store = WorkerStore::from_drafts(drafts);
        save_workers(&path, store.workers()).expect("save collection");
        Self { _temp: temp, path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Write an extra file next to the collection and return its path.
    pub fn write_file(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.path.with_file_name(name);
        fs::write(&path, contents).expect("write file");
        path
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_names_are_distinct_letters() {
        let drafts = generated_drafts(60);
        let mut names: Vec<_> = drafts.iter().map(|d| d.name.clone()).collect();
        assert!(names.iter().all(|n| n.chars().all(|c| c.is_ascii_alphabetic())));
        names.sort();
        names.dedup();
        assert_eq!(names.len(), 60);
    }

    #[test]
    fn answers_follow_prompt_order() {
        let lines = answers(&draft("Ann"));
        assert_eq!(lines.len(), 13);
        assert_eq!(lines[0], "Ann");
        assert_eq!(lines[3], "1500.5");
        assert_eq!(lines[6], "1990-04-12");
    }
}
