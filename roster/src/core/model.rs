//! Worker records and the value types they are built from.
//!
//! Types here carry no I/O. Equality is structural; the "natural" orderings
//! used by `sort` and `print_field_ascending_person` are exposed as explicit
//! comparison methods so that structural equality and ordering never disagree.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Local, NaiveDate};

use crate::error::CommandError;

/// Date format used by prompts and by the persisted XML.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Coordinates {
    pub x: i32,
    pub y: i32,
}

impl fmt::Display for Coordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "X:{} Y:{}", self.x, self.y)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Location {
    pub x: f32,
    pub y: i64,
    pub z: i32,
    pub name: String,
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}, {}, {})", self.name, self.x, self.y, self.z)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Person {
    pub birthday: NaiveDate,
    pub height: u32,
    pub passport_id: String,
    pub location: Location,
}

impl Person {
    /// Natural order: by birthday.
    pub fn natural_cmp(&self, other: &Person) -> Ordering {
        self.birthday.cmp(&other.birthday)
    }
}

impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Birthday: {}, Height: {}cm, Passport ID: {}, Location: {}",
            self.birthday.format(DATE_FORMAT),
            self.height,
            self.passport_id,
            self.location
        )
    }
}

/// Declares a fieldless enum with upper-snake-case names, case-insensitive
/// parsing and a `names()` listing in declaration order.
macro_rules! named_enum {
    ($(#[$meta:meta])* $name:ident { $($variant:ident => $text:literal),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub fn as_str(self) -> &'static str {
                match self {
                    $($name::$variant => $text),+
                }
            }

            /// Comma-separated list of accepted names, in declaration order.
            pub fn names() -> String {
                Self::ALL
                    .iter()
                    .map(|value| value.as_str())
                    .collect::<Vec<_>>()
                    .join(", ")
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = CommandError;

            fn from_str(raw: &str) -> Result<Self, Self::Err> {
                let wanted = raw.trim();
                Self::ALL
                    .iter()
                    .copied()
                    .find(|value| value.as_str().eq_ignore_ascii_case(wanted))
                    .ok_or_else(|| CommandError::InvalidEnumValue {
                        kind: stringify!($name),
                        value: wanted.to_string(),
                        expected: Self::names(),
                    })
            }
        }
    };
}

named_enum! {
    Position {
        Director => "DIRECTOR",
        HeadOfDivision => "HEAD_OF_DIVISION",
        HeadOfDepartment => "HEAD_OF_DEPARTMENT",
        ManagerOfCleaning => "MANAGER_OF_CLEANING",
    }
}

named_enum! {
    /// Ordered by declaration; "greater than" comparisons use this order.
    Status {
        Hired => "HIRED",
        RecommendedForPromotion => "RECOMMENDED_FOR_PROMOTION",
        Regular => "REGULAR",
        Probation => "PROBATION",
    }
}

/// Every worker field that is collected from input or read from a file.
///
/// `id` and `creation_date` are owned by the store and never part of a draft.
#[derive(Debug, Clone, PartialEq)]
pub struct WorkerDraft {
    pub name: String,
    pub coordinates: Coordinates,
    pub salary: f64,
    pub position: Position,
    pub status: Status,
    pub person: Person,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Worker {
    pub id: u32,
    pub name: String,
    pub coordinates: Coordinates,
    pub creation_date: DateTime<Local>,
    pub salary: f64,
    pub position: Position,
    pub status: Status,
    pub person: Person,
}

impl Worker {
    pub fn from_draft(id: u32, creation_date: DateTime<Local>, draft: WorkerDraft) -> Self {
        Self {
            id,
            name: draft.name,
            coordinates: draft.coordinates,
            creation_date,
            salary: draft.salary,
            position: draft.position,
            status: draft.status,
            person: draft.person,
        }
    }

    /// The persisted part of the record.
    pub fn to_draft(&self) -> WorkerDraft {
        WorkerDraft {
            name: self.name.clone(),
            coordinates: self.coordinates,
            salary: self.salary,
            position: self.position,
            status: self.status,
            person: self.person.clone(),
        }
    }

    /// Natural order: lexicographic by name.
    pub fn natural_cmp(&self, other: &Worker) -> Ordering {
        self.name.cmp(&other.name)
    }
}

impl fmt::Display for Worker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Worker [id={}, name={}, coordinates={}, creationDate={}, salary={}, position={}, status={}, person={}]",
            self.id,
            self.name,
            self.coordinates,
            self.creation_date.format("%Y-%m-%d %H:%M:%S"),
            self.salary,
            self.position,
            self.status,
            self.person
        )
    }
}
