//! Field-by-field prompting for new worker records.
//!
//! The prompter reads from whichever [`InputSource`] it is handed. An
//! interactive field is re-asked until a valid value arrives. In script mode
//! an invalid value fails the field at once, and running out of input fails
//! it with [`CommandError::DataExhausted`]; either way the whole draft is
//! aborted, so a command never applies a half-built record.

use std::io::Write;

use crate::core::model::{Coordinates, Location, Person, Position, Status, WorkerDraft};
use crate::core::validate::{self, FieldLimits};
use crate::error::CommandError;
use crate::io::input::InputSource;

pub struct Prompter<'a> {
    input: &'a mut InputSource,
    out: &'a mut dyn Write,
    err: &'a mut dyn Write,
    limits: &'a FieldLimits,
}

impl<'a> Prompter<'a> {
    pub fn new(
        input: &'a mut InputSource,
        out: &'a mut dyn Write,
        err: &'a mut dyn Write,
        limits: &'a FieldLimits,
    ) -> Self {
        Self {
            input,
            out,
            err,
            limits,
        }
    }

    /// Collect a complete worker: name, coordinates, salary, position,
    /// status, then the nested person.
    pub fn worker_draft(&mut self) -> Result<WorkerDraft, CommandError> {
        Ok(WorkerDraft {
            name: self.name()?,
            coordinates: self.coordinates()?,
            salary: self.salary()?,
            position: self.position()?,
            status: self.status()?,
            person: self.person()?,
        })
    }

    pub fn name(&mut self) -> Result<String, CommandError> {
        self.ask("name", "Enter name", |raw| Ok(validate::name(raw)?))
    }

    pub fn coordinates(&mut self) -> Result<Coordinates, CommandError> {
        let limits = self.limits;
        let x = self.ask(
            "coordinate x",
            &format!("Enter coordinate X (integer, <= {})", limits.max_coordinate_x),
            |raw| Ok(validate::coordinate_x(raw, limits)?),
        )?;
        let y = self.ask(
            "coordinate y",
            &format!("Enter coordinate Y (integer, > {})", limits.min_coordinate_y),
            |raw| Ok(validate::coordinate_y(raw, limits)?),
        )?;
        Ok(Coordinates { x, y })
    }

    pub fn salary(&mut self) -> Result<f64, CommandError> {
        self.ask("salary", "Enter salary (> 0)", |raw| Ok(validate::salary(raw)?))
    }

    pub fn position(&mut self) -> Result<Position, CommandError> {
        self.ask(
            "position",
            &format!("Choose position [{}]", Position::names()),
            |raw| raw.parse(),
        )
    }

    pub fn status(&mut self) -> Result<Status, CommandError> {
        self.ask(
            "status",
            &format!("Choose status [{}]", Status::names()),
            |raw| raw.parse(),
        )
    }

    pub fn person(&mut self) -> Result<Person, CommandError> {
        let limits = self.limits;
        let birthday = self.ask("birthday", "Enter birthday (yyyy-MM-dd)", |raw| {
            Ok(validate::birthday(raw)?)
        })?;
        let height = self.ask(
            "height",
            &format!("Enter height (1..={})", limits.max_height),
            |raw| Ok(validate::height(raw, limits)?),
        )?;
        let passport_id = self.ask(
            "passport id",
            &format!("Enter passport id ({} digits)", limits.passport_digits),
            |raw| Ok(validate::passport_id(raw, limits)?),
        )?;
        Ok(Person {
            birthday,
            height,
            passport_id,
            location: self.location()?,
        })
    }

    pub fn location(&mut self) -> Result<Location, CommandError> {
        let x = self.ask("location x", "Enter location x (float)", |raw| {
            Ok(validate::location_x(raw)?)
        })?;
        let y = self.ask("location y", "Enter location y (long)", |raw| {
            Ok(validate::location_y(raw)?)
        })?;
        let z = self.ask("location z", "Enter location z (integer)", |raw| {
            Ok(validate::location_z(raw)?)
        })?;
        let name = self.ask("location name", "Enter location name", |raw| {
            Ok(validate::location_name(raw)?)
        })?;
        Ok(Location { x, y, z, name })
    }

    /// Yes/no question. Scripts cannot answer, so script mode always agrees.
    pub fn confirm(&mut self, question: &str) -> Result<bool, CommandError> {
        if self.input.is_script() {
            return Ok(true);
        }
        let answer = self.line("confirmation", &format!("{question} [y/n]"))?;
        Ok(answer.eq_ignore_ascii_case("y") || answer.eq_ignore_ascii_case("yes"))
    }

    /// One free-form trimmed line.
    pub fn line(&mut self, field: &'static str, label: &str) -> Result<String, CommandError> {
        self.ask(field, label, |raw| Ok(raw.to_string()))
    }

    fn ask<T, F>(&mut self, field: &'static str, label: &str, parse: F) -> Result<T, CommandError>
    where
        F: Fn(&str) -> Result<T, CommandError>,
    {
        loop {
            write!(self.out, "{label}: ")?;
            self.out.flush()?;
            let Some(line) = self.input.next_line()? else {
                writeln!(self.out)?;
                return Err(CommandError::DataExhausted { field });
            };
            if self.input.is_script() {
                writeln!(self.out, "{line}")?;
            }
            match parse(line.trim()) {
                Ok(value) => return Ok(value),
                Err(err) if self.input.is_script() => return Err(err),
                Err(err) => writeln!(self.err, "Error: {err}")?,
            }
        }
    }
}
