//! Where finished updates go
//!
//! The engine calls `commit` once per operation, after the update has been
//! applied to the in-memory unit. Storage is someone else's problem.

use serde::{Deserialize, Serialize};

use super::update::UnitUpdate;
use crate::core::{Result, UnitId};

pub trait CommitSink {
    fn commit(&mut self, unit: UnitId, update: &UnitUpdate);
}

/// Discards every commit
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl CommitSink for NullSink {
    fn commit(&mut self, _unit: UnitId, _update: &UnitUpdate) {}
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JournalEntry {
    pub unit: UnitId,
    pub update: UnitUpdate,
}

/// In-memory log of commits, in order
#[derive(Debug, Clone, Default)]
pub struct Journal {
    entries: Vec<JournalEntry>,
}

impl Journal {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> &[JournalEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn last(&self) -> Option<&JournalEntry> {
        self.entries.last()
    }

    /// One JSON object per line
    pub fn to_json_lines(&self) -> Result<String> {
        let mut out = String::new();
        for entry in &self.entries {
            out.push_str(&serde_json::to_string(entry)?);
            out.push('\n');
        }
        Ok(out)
    }
}

impl CommitSink for Journal {
    fn commit(&mut self, unit: UnitId, update: &UnitUpdate) {
        self.entries.push(JournalEntry {
            unit,
            update: update.clone(),
        });
    }
}
