//! In-memory worker collection.
//!
//! The store owns the id sequence: ids are assigned on insertion and
//! renumbered to a contiguous `1..=N` after every removal, so that id-based
//! commands keep addressing the same positions a user just saw in `show`.

use std::collections::BTreeMap;

use chrono::{DateTime, Local};

use crate::core::model::{Person, Status, Worker, WorkerDraft};
use crate::error::CommandError;

#[derive(Debug, Clone)]
pub struct WorkerStore {
    workers: Vec<Worker>,
    next_id: u32,
    initialized_at: DateTime<Local>,
}

/// Summary printed by `info`.
#[derive(Debug, Clone, PartialEq)]
pub struct StoreInfo {
    pub element_type: &'static str,
    pub initialized_at: DateTime<Local>,
    pub len: usize,
}

impl Default for WorkerStore {
    fn default() -> Self {
        Self::new()
    }
}

impl WorkerStore {
    pub fn new() -> Self {
        Self {
            workers: Vec::new(),
            next_id: 0,
            initialized_at: Local::now(),
        }
    }

    /// Build a store from drafts in order, assigning ids `1..=N`.
    pub fn from_drafts(drafts: impl IntoIterator<Item = WorkerDraft>) -> Self {
        let mut store = Self::new();
        for draft in drafts {
            store.add(draft);
        }
        store
    }

    pub fn workers(&self) -> &[Worker] {
        &self.workers
    }

    pub fn len(&self) -> usize {
        self.workers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.workers.is_empty()
    }

    pub fn get(&self, id: u32) -> Option<&Worker> {
        self.workers.iter().find(|worker| worker.id == id)
    }

    pub fn info(&self) -> StoreInfo {
        StoreInfo {
            element_type: "Worker",
            initialized_at: self.initialized_at,
            len: self.workers.len(),
        }
    }

    /// Append a worker built from `draft`; returns its id.
    pub fn add(&mut self, draft: WorkerDraft) -> u32 {
        self.next_id += 1;
        let id = self.next_id;
        self.workers.push(Worker::from_draft(id, Local::now(), draft));
        id
    }

    /// Append iff the collection is empty or `draft.salary` is strictly below
    /// the current minimum salary.
    pub fn add_if_smaller_salary(&mut self, draft: WorkerDraft) -> bool {
        let accept = match self.min_salary() {
            None => true,
            Some(min) => draft.salary < min,
        };
        if accept {
            self.add(draft);
        }
        accept
    }

    pub fn min_salary(&self) -> Option<f64> {
        self.workers
            .iter()
            .map(|worker| worker.salary)
            .min_by(f64::total_cmp)
    }

    /// Empty the collection and restart the id sequence at 1.
    pub fn clear(&mut self) {
        self.workers.clear();
        self.next_id = 0;
    }

    /// Stable sort by natural order (name).
    pub fn sort(&mut self) {
        self.workers.sort_by(Worker::natural_cmp);
    }

    /// Remove every worker whose name sorts before `pivot.name`; returns how
    /// many were removed.
    pub fn remove_greater(&mut self, pivot: &WorkerDraft) -> usize {
        let before = self.workers.len();
        self.workers
            .retain(|worker| pivot.name.as_str() <= worker.name.as_str());
        let removed = before - self.workers.len();
        self.update_all_ids();
        removed
    }

    /// Workers whose status is strictly after `status` (case-insensitive name).
    pub fn filter_greater_than_status(&self, status: &str) -> Result<Vec<&Worker>, CommandError> {
        let status: Status = status.parse()?;
        Ok(self
            .workers
            .iter()
            .filter(|worker| worker.status > status)
            .collect())
    }

    /// Counts per observed status, in status order.
    pub fn count_by_status(&self) -> BTreeMap<Status, usize> {
        let mut counts = BTreeMap::new();
        for worker in &self.workers {
            *counts.entry(worker.status).or_insert(0) += 1;
        }
        counts
    }

    /// Persons of all workers, ascending by birthday.
    pub fn persons_ascending(&self) -> Vec<&Person> {
        let mut persons: Vec<&Person> = self.workers.iter().map(|worker| &worker.person).collect();
        persons.sort_by(|a, b| a.natural_cmp(b));
        persons
    }

    pub fn remove_by_id(&mut self, id: u32) -> Result<Worker, CommandError> {
        let index = self.index_of(id)?;
        let removed = self.workers.remove(index);
        self.update_all_ids();
        Ok(removed)
    }

    /// Replace the fields of worker `id`, keeping its id and creation date.
    pub fn update_by_id(&mut self, id: u32, draft: WorkerDraft) -> Result<(), CommandError> {
        let index = self.index_of(id)?;
        let creation_date = self.workers[index].creation_date;
        self.workers[index] = Worker::from_draft(id, creation_date, draft);
        Ok(())
    }

    pub fn ensure_exists(&self, id: u32) -> Result<(), CommandError> {
        self.index_of(id).map(|_| ())
    }

    /// Renumber `1..=N` in current list order and realign the sequence.
    pub fn update_all_ids(&mut self) {
        for (index, worker) in self.workers.iter_mut().enumerate() {
            worker.id = index as u32 + 1;
        }
        self.next_id = self.workers.len() as u32;
    }

    fn index_of(&self, id: u32) -> Result<usize, CommandError> {
        self.workers
            .iter()
            .position(|worker| worker.id == id)
            .ok_or(CommandError::NotFound(id))
    }
}
