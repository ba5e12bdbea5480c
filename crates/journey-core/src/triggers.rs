//! Trigger notes and relapse history.
//!
//! Trigger records are kept most-recent-first. Relapse records are
//! append-only and are written once per confirmed relapse.

use chrono::{DateTime, Local, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{Result, ValidationError};
use crate::storage::{keys, KvStore};

/// A free-text note about a circumstance that preceded a (near-)relapse.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TriggerRecord {
    pub id: String,
    /// Older relapse-flow entries stored the note as `reason`.
    #[serde(alias = "reason")]
    pub note: String,
    #[serde(alias = "date")]
    pub created_at: DateTime<Utc>,
    #[serde(default = "default_day_label", alias = "day")]
    pub day_label: String,
}

fn default_day_label() -> String {
    "Day 1".into()
}

/// One confirmed relapse.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RelapseRecord {
    pub id: String,
    #[serde(alias = "date")]
    pub created_at: DateTime<Utc>,
    pub reason: String,
}

impl RelapseRecord {
    /// Calendar day of the relapse in local time.
    pub fn local_date(&self) -> chrono::NaiveDate {
        self.created_at.with_timezone(&Local).date_naive()
    }
}

/// Next id strictly greater than every existing one.
fn next_id<'a>(now: DateTime<Utc>, existing: impl Iterator<Item = &'a str>) -> String {
    let newest = existing.filter_map(|id| id.parse::<i64>().ok()).max();
    let stamp = now.timestamp_millis();
    match newest {
        Some(newest) if newest >= stamp => (newest + 1).to_string(),
        _ => stamp.to_string(),
    }
}

/// Trigger records, most recent first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TriggerLog {
    records: Vec<TriggerRecord>,
}

impl TriggerLog {
    /// Load and re-sort by creation time, newest first.
    pub fn load<S: KvStore>(store: &S) -> Result<Self> {
        let mut records: Vec<TriggerRecord> =
            store.get_json(keys::TRIGGER_RECORDS)?.unwrap_or_default();
        records.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(Self { records })
    }

    pub fn save<S: KvStore>(&self, store: &S) -> Result<()> {
        store.set_json(keys::TRIGGER_RECORDS, &self.records)
    }

    pub fn records(&self) -> &[TriggerRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Prepend a new note. Blank notes are rejected.
    pub fn record(
        &mut self,
        note: &str,
        day_label: &str,
        now: DateTime<Utc>,
    ) -> Result<&TriggerRecord> {
        let note = note.trim();
        if note.is_empty() {
            return Err(ValidationError::EmptyNote.into());
        }
        let id = next_id(now, self.records.iter().map(|r| r.id.as_str()));
        self.records.insert(
            0,
            TriggerRecord {
                id,
                note: note.to_string(),
                created_at: now,
                day_label: day_label.to_string(),
            },
        );
        Ok(&self.records[0])
    }

    /// Remove one record by id. Returns false if it was not present.
    pub fn delete(&mut self, id: &str) -> bool {
        let before = self.records.len();
        self.records.retain(|r| r.id != id);
        self.records.len() != before
    }

    /// Remove every record, returning how many were dropped.
    pub fn clear_all(&mut self) -> usize {
        let count = self.records.len();
        self.records.clear();
        count
    }
}

/// Append-only relapse history, oldest first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RelapseHistory {
    records: Vec<RelapseRecord>,
}

impl RelapseHistory {
    pub fn load<S: KvStore>(store: &S) -> Result<Self> {
        Ok(Self {
            records: store.get_json(keys::RELAPSE_HISTORY)?.unwrap_or_default(),
        })
    }

    pub fn save<S: KvStore>(&self, store: &S) -> Result<()> {
        store.set_json(keys::RELAPSE_HISTORY, &self.records)
    }

    pub fn records(&self) -> &[RelapseRecord] {
        &self.records
    }

    /// Append a relapse. A blank reason is replaced by `default_reason`.
    pub fn append(
        &mut self,
        reason: &str,
        default_reason: &str,
        now: DateTime<Utc>,
    ) -> &RelapseRecord {
        let reason = match reason.trim() {
            "" => default_reason.to_string(),
            r => r.to_string(),
        };
        let id = next_id(now, self.records.iter().map(|r| r.id.as_str()));
        self.records.push(RelapseRecord {
            id,
            created_at: now,
            reason,
        });
        &self.records[self.records.len() - 1]
    }

    /// Whether any relapse happened on the given local day.
    pub fn relapsed_on(&self, date: chrono::NaiveDate) -> bool {
        self.records.iter().any(|r| r.local_date() == date)
    }
}
