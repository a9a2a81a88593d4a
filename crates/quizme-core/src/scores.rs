//! Append-only log of practice scores.

use crate::model::ScoreRecord;

#[derive(Debug, Default)]
pub struct ScoreLog {
    records: Vec<ScoreRecord>,
}

impl ScoreLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, record: ScoreRecord) {
        self.records.push(record);
    }

    /// All records in append order.
    pub fn records(&self) -> &[ScoreRecord] {
        &self.records
    }

    /// Drop every record. Returns whether the log is now empty.
    pub fn clear(&mut self) -> bool {
        self.records.clear();
        self.records.is_empty()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
