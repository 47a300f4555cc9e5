//! Collection file: fixed-schema XML.
//!
//! ```xml
//! <workers>
//!   <worker>
//!     <name/> <coordinates><x/><y/></coordinates> <salary/> <position/> <status/>
//!     <person>
//!       <birthday/> <height/> <passportID/>
//!       <location><x/><y/><z/><name/></location>
//!     </person>
//!   </worker>
//! </workers>
//! ```
//!
//! `id` and `creationDate` are not persisted; they are assigned on load.
//! Records are validated with the same rules as interactive input, and a
//! single bad record rejects the whole file.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result, anyhow};
use quick_xml::se::Serializer;
use serde::{Deserialize, Serialize};

use crate::core::model::{DATE_FORMAT, Person, Worker, WorkerDraft};
use crate::core::validate::{self, FieldLimits};

const XML_DECLARATION: &str = r#"<?xml version="1.0" encoding="UTF-8"?>"#;

#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(rename = "workers")]
struct WorkersDoc {
    #[serde(rename = "worker", default)]
    workers: Vec<WorkerXml>,
}

#[derive(Debug, Serialize, Deserialize)]
struct WorkerXml {
    name: String,
    coordinates: CoordinatesXml,
    salary: String,
    position: String,
    status: String,
    person: PersonXml,
}

#[derive(Debug, Serialize, Deserialize)]
struct CoordinatesXml {
    x: String,
    y: String,
}

#[derive(Debug, Serialize, Deserialize)]
struct PersonXml {
    birthday: String,
    height: String,
    #[serde(rename = "passportID")]
    passport_id: String,
    location: LocationXml,
}

#[derive(Debug, Serialize, Deserialize)]
struct LocationXml {
    x: String,
    y: String,
    z: String,
    name: String,
}

impl From<&Worker> for WorkerXml {
    fn from(worker: &Worker) -> Self {
        let person = &worker.person;
        Self {
            name: worker.name.clone(),
            coordinates: CoordinatesXml {
                x: worker.coordinates.x.to_string(),
                y: worker.coordinates.y.to_string(),
            },
            salary: worker.salary.to_string(),
            position: worker.position.to_string(),
            status: worker.status.to_string(),
            person: PersonXml {
                birthday: person.birthday.format(DATE_FORMAT).to_string(),
                height: person.height.to_string(),
                passport_id: person.passport_id.clone(),
                location: LocationXml {
                    x: person.location.x.to_string(),
                    y: person.location.y.to_string(),
                    z: person.location.z.to_string(),
                    name: person.location.name.clone(),
                },
            },
        }
    }
}

impl WorkerXml {
    fn into_draft(self, limits: &FieldLimits) -> Result<WorkerDraft> {
        let person = self.person;
        let location = person.location;
        Ok(WorkerDraft {
            name: validate::name(self.name.trim())?,
            coordinates: validate::coordinates(
                self.coordinates.x.trim(),
                self.coordinates.y.trim(),
                limits,
            )?,
            salary: validate::salary(self.salary.trim())?,
            position: self.position.parse()?,
            status: self.status.parse()?,
            person: Person {
                birthday: validate::birthday(person.birthday.trim())?,
                height: validate::height(person.height.trim(), limits)?,
                passport_id: validate::passport_id(person.passport_id.trim(), limits)?,
                location: validate::location(
                    location.x.trim(),
                    location.y.trim(),
                    location.z.trim(),
                    location.name.trim(),
                )?,
            },
        })
    }
}

/// Render workers as the collection document.
pub fn to_xml(workers: &[Worker]) -> Result<String> {
    let doc = WorkersDoc {
        workers: workers.iter().map(WorkerXml::from).collect(),
    };
    let mut body = String::new();
    let mut ser = Serializer::new(&mut body);
    ser.indent(' ', 2);
    doc.serialize(ser).context("serialize workers xml")?;

    let mut payload = String::with_capacity(XML_DECLARATION.len() + body.len() + 2);
    payload.push_str(XML_DECLARATION);
    payload.push('\n');
    payload.push_str(&body);
    payload.push('\n');
    Ok(payload)
}

/// Parse and validate a collection document into drafts, in file order.
pub fn from_xml(raw: &str, limits: &FieldLimits) -> Result<Vec<WorkerDraft>> {
    let doc: WorkersDoc = quick_xml::de::from_str(raw).context("parse workers xml")?;
    doc.workers
        .into_iter()
        .enumerate()
        .map(|(index, worker)| {
            worker
                .into_draft(limits)
                .with_context(|| format!("invalid worker #{}", index + 1))
        })
        .collect()
}

pub fn save_workers(path: &Path, workers: &[Worker]) -> Result<()> {
    let payload = to_xml(workers)?;
    fs::write(path, payload).with_context(|| format!("write {}", path.display()))
}

pub fn load_workers(path: &Path, limits: &FieldLimits) -> Result<Vec<WorkerDraft>> {
    if !path.is_file() {
        return Err(anyhow!("{} not found", path.display()));
    }
    let raw = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    from_xml(&raw, limits).with_context(|| format!("load {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::store::WorkerStore;
    use crate::test_support::{draft, generated_drafts};

    fn round_trip(drafts: Vec<WorkerDraft>) {
        let store = WorkerStore::from_drafts(drafts.clone());
        let temp = tempfile::tempdir().expect("tempdir");
        let path = temp.path().join("workers.xml");
        save_workers(&path, store.workers()).expect("save");
        let loaded = load_workers(&path, &FieldLimits::default()).expect("load");
        assert_eq!(loaded, drafts);
    }

    #[test]
    fn round_trip_empty_collection() {
        round_trip(Vec::new());
    }

    #[test]
    fn round_trip_single_worker() {
        round_trip(vec![draft("Ann")]);
    }

    #[test]
    fn round_trip_fifty_workers() {
        round_trip(generated_drafts(50));
    }

    #[test]
    fn writes_expected_schema() {
        let store = WorkerStore::from_drafts([draft("Ann")]);
        let xml = to_xml(store.workers()).expect("xml");
        assert!(xml.starts_with(XML_DECLARATION));
        for tag in [
            "<workers>",
            "<worker>",
            "<name>Ann</name>",
            "<coordinates>",
            "<salary>",
            "<position>",
            "<status>",
            "<birthday>",
            "<height>",
            "<passportID>",
            "<location>",
            "<z>",
        ] {
            assert!(xml.contains(tag), "missing {tag} in:\n{xml}");
        }
        assert!(!xml.contains("<id>"));
        assert!(!xml.contains("creationDate"));
    }

    #[test]
    fn accepts_lowercase_enum_values() {
        let raw = r#"<workers><worker>
            <name>Ann</name><coordinates><x>1</x><y>2</y></coordinates>
            <salary>10.5</salary><position>director</position><status>hired</status>
            <person><birthday>1990-01-02</birthday><height>170</height>
            <passportID>123456</passportID>
            <location><x>1.5</x><y>2</y><z>3</z><name>Depot</name></location>
            </person></worker></workers>"#;
        let drafts = from_xml(raw, &FieldLimits::default()).expect("parse");
        assert_eq!(drafts.len(), 1);
        assert_eq!(drafts[0].name, "Ann");
        assert_eq!(drafts[0].person.location.name, "Depot");
    }

    #[test]
    fn rejects_out_of_domain_record() {
        let store = WorkerStore::from_drafts([draft("Ann")]);
        let xml = to_xml(store.workers())
            .expect("xml")
            .replace("<passportID>", "<passportID>9");
        let err = from_xml(&xml, &FieldLimits::default()).expect_err("must fail");
        assert!(format!("{:#}", err).contains("invalid worker #1"));
    }

    #[test]
    fn missing_file_is_an_error() {
        let temp = tempfile::tempdir().expect("tempdir");
        let err = load_workers(&temp.path().join("nope.xml"), &FieldLimits::default())
            .expect_err("must fail");
        assert!(err.to_string().contains("not found"));
    }
}
