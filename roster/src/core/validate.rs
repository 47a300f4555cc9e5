//! Field validators shared by the interactive prompter and the XML loader.
//!
//! Every function takes the raw (already trimmed) text of one field and
//! returns the typed value or the reason it was rejected. None of them print.

use std::sync::LazyLock;

use chrono::{Local, NaiveDate};
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::core::model::{Coordinates, DATE_FORMAT, Location};
use crate::error::ValidationError;

static NAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z]+$").expect("valid name regex"));

/// Domain bounds for numeric and fixed-width fields.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct FieldLimits {
    /// Inclusive upper bound for a person's height.
    pub max_height: u32,
    /// Exact number of digits in a passport id.
    pub passport_digits: usize,
    /// Inclusive upper bound for coordinate x.
    pub max_coordinate_x: i32,
    /// Exclusive lower bound for coordinate y.
    pub min_coordinate_y: i32,
}

impl Default for FieldLimits {
    fn default() -> Self {
        Self {
            max_height: 350,
            passport_digits: 6,
            max_coordinate_x: 468,
            min_coordinate_y: -922,
        }
    }
}

pub fn name(raw: &str) -> Result<String, ValidationError> {
    if raw.is_empty() {
        return Err(ValidationError::Empty("name"));
    }
    if !NAME_RE.is_match(raw) {
        return Err(format_error("name", "letters only", raw));
    }
    Ok(raw.to_string())
}

pub fn coordinate_x(raw: &str, limits: &FieldLimits) -> Result<i32, ValidationError> {
    let x = integer::<i32>("coordinate x", raw)?;
    if x > limits.max_coordinate_x {
        return Err(out_of_range(
            "coordinate x",
            format!("must be at most {}", limits.max_coordinate_x),
            x,
        ));
    }
    Ok(x)
}

pub fn coordinate_y(raw: &str, limits: &FieldLimits) -> Result<i32, ValidationError> {
    let y = integer::<i32>("coordinate y", raw)?;
    if y <= limits.min_coordinate_y {
        return Err(out_of_range(
            "coordinate y",
            format!("must be greater than {}", limits.min_coordinate_y),
            y,
        ));
    }
    Ok(y)
}

pub fn coordinates(x: &str, y: &str, limits: &FieldLimits) -> Result<Coordinates, ValidationError> {
    Ok(Coordinates {
        x: coordinate_x(x, limits)?,
        y: coordinate_y(y, limits)?,
    })
}

pub fn salary(raw: &str) -> Result<f64, ValidationError> {
    if raw.is_empty() {
        return Err(ValidationError::Empty("salary"));
    }
    let salary: f64 = raw
        .parse()
        .map_err(|_| format_error("salary", "a number", raw))?;
    if !salary.is_finite() || salary <= 0.0 {
        return Err(out_of_range("salary", "must be greater than 0".into(), salary));
    }
    Ok(salary)
}

/// Birthday in `yyyy-MM-dd`, not later than today.
pub fn birthday(raw: &str) -> Result<NaiveDate, ValidationError> {
    birthday_relative_to(raw, Local::now().date_naive())
}

fn birthday_relative_to(raw: &str, today: NaiveDate) -> Result<NaiveDate, ValidationError> {
    if raw.is_empty() {
        return Err(ValidationError::Empty("birthday"));
    }
    let date = NaiveDate::parse_from_str(raw, DATE_FORMAT)
        .map_err(|_| format_error("birthday", "a date in yyyy-MM-dd format", raw))?;
    if date > today {
        return Err(out_of_range("birthday", "must not be in the future".into(), raw));
    }
    Ok(date)
}

pub fn height(raw: &str, limits: &FieldLimits) -> Result<u32, ValidationError> {
    let height = integer::<i64>("height", raw)?;
    if height <= 0 || height > i64::from(limits.max_height) {
        return Err(out_of_range(
            "height",
            format!("must be between 1 and {}", limits.max_height),
            height,
        ));
    }
    // Bounded by max_height above.
    Ok(height as u32)
}

pub fn passport_id(raw: &str, limits: &FieldLimits) -> Result<String, ValidationError> {
    if raw.is_empty() {
        return Err(ValidationError::Empty("passport id"));
    }
    if raw.len() != limits.passport_digits || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ValidationError::Format {
            field: "passport id",
            expected: "a fixed-length string of digits",
            value: format!("{} (need {} digits)", raw, limits.passport_digits),
        });
    }
    Ok(raw.to_string())
}

pub fn location_x(raw: &str) -> Result<f32, ValidationError> {
    if raw.is_empty() {
        return Err(ValidationError::Empty("location x"));
    }
    let x: f32 = raw
        .parse()
        .map_err(|_| format_error("location x", "a number", raw))?;
    if !x.is_finite() {
        return Err(format_error("location x", "a finite number", raw));
    }
    Ok(x)
}

pub fn location_y(raw: &str) -> Result<i64, ValidationError> {
    integer::<i64>("location y", raw)
}

pub fn location_z(raw: &str) -> Result<i32, ValidationError> {
    integer::<i32>("location z", raw)
}

pub fn location_name(raw: &str) -> Result<String, ValidationError> {
    if raw.is_empty() {
        return Err(ValidationError::Empty("location name"));
    }
    Ok(raw.to_string())
}

pub fn location(x: &str, y: &str, z: &str, name: &str) -> Result<Location, ValidationError> {
    Ok(Location {
        x: location_x(x)?,
        y: location_y(y)?,
        z: location_z(z)?,
        name: location_name(name)?,
    })
}

fn integer<T: std::str::FromStr>(field: &'static str, raw: &str) -> Result<T, ValidationError> {
    if raw.is_empty() {
        return Err(ValidationError::Empty(field));
    }
    raw.parse().map_err(|_| format_error(field, "an integer", raw))
}

fn format_error(field: &'static str, expected: &'static str, raw: &str) -> ValidationError {
    ValidationError::Format {
        field,
        expected,
        value: raw.to_string(),
    }
}

fn out_of_range(field: &'static str, constraint: String, value: impl ToString) -> ValidationError {
    ValidationError::OutOfRange {
        field,
        constraint,
        value: value.to_string(),
    }
}
