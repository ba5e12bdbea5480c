//! Progress calendar: per-day snapshots, summary statistics and month grids.

use std::collections::BTreeMap;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::{Result, ValidationError};
use crate::storage::{keys, KvStore};

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Snapshot of one calendar day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DayProgress {
    /// `YYYY-MM-DD`
    pub date: String,
    #[serde(default, alias = "habits")]
    pub habits_completed: BTreeMap<String, bool>,
    #[serde(default)]
    pub relapsed: bool,
}

impl DayProgress {
    pub fn new(date: NaiveDate, habits_completed: BTreeMap<String, bool>, relapsed: bool) -> Self {
        Self {
            date: date.format(DATE_FORMAT).to_string(),
            habits_completed,
            relapsed,
        }
    }
}

/// Summary over a list of day snapshots.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressStats {
    pub total_days: usize,
    pub clean_days: usize,
    pub relapses: usize,
    /// Longest run of consecutive clean records in list order.
    pub best_streak: usize,
}

/// Aggregate a list of records.
///
/// Runs are counted in list order; date gaps between records do not break a
/// run.
pub fn stats(records: &[DayProgress]) -> ProgressStats {
    let mut out = ProgressStats {
        total_days: records.len(),
        ..Default::default()
    };
    let mut run = 0;
    for day in records {
        if day.relapsed {
            out.relapses += 1;
            run = 0;
        } else {
            out.clean_days += 1;
            run += 1;
            out.best_streak = out.best_streak.max(run);
        }
    }
    out
}

/// Display color of a calendar cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CellColor {
    /// No snapshot for the day
    Neutral,
    /// Relapsed that day
    Alert,
    /// Clean day
    Success,
}

/// One day of a month grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayCell {
    pub day: u32,
    pub date: String,
    pub progress: Option<DayProgress>,
}

impl DayCell {
    pub fn color(&self) -> CellColor {
        match &self.progress {
            None => CellColor::Neutral,
            Some(p) if p.relapsed => CellColor::Alert,
            Some(_) => CellColor::Success,
        }
    }
}

/// Grid cells for a month: `None` padding for the weekday of the 1st
/// (Sunday = 0), then one cell per day of the month.
///
/// `month` is 1-based.
pub fn month_grid(year: i32, month: u32, records: &[DayProgress]) -> Result<Vec<Option<DayCell>>> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)
        .ok_or(ValidationError::InvalidMonth { year, month })?;
    let padding = first.weekday().num_days_from_sunday() as usize;

    let mut cells: Vec<Option<DayCell>> = vec![None; padding];
    let mut date = first;
    while date.month() == month {
        let key = date.format(DATE_FORMAT).to_string();
        let progress = records.iter().find(|r| r.date == key).cloned();
        cells.push(Some(DayCell {
            day: date.day(),
            date: key,
            progress,
        }));
        match date.succ_opt() {
            Some(next) => date = next,
            None => break,
        }
    }
    Ok(cells)
}

/// Stored snapshots, kept sorted by date with at most one per date.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProgressLog {
    records: Vec<DayProgress>,
}

impl ProgressLog {
    pub fn load<S: KvStore>(store: &S) -> Result<Self> {
        let mut records: Vec<DayProgress> =
            store.get_json(keys::PROGRESS_DATA)?.unwrap_or_default();
        records.sort_by(|a, b| a.date.cmp(&b.date));
        Ok(Self { records })
    }

    pub fn save<S: KvStore>(&self, store: &S) -> Result<()> {
        store.set_json(keys::PROGRESS_DATA, &self.records)
    }

    pub fn records(&self) -> &[DayProgress] {
        &self.records
    }

    /// Insert or replace the snapshot for `day.date`.
    ///
    /// A relapse already recorded for the date is kept.
    pub fn upsert(&mut self, mut day: DayProgress) {
        match self.records.binary_search_by(|r| r.date.cmp(&day.date)) {
            Ok(index) => {
                day.relapsed |= self.records[index].relapsed;
                self.records[index] = day;
            }
            Err(index) => self.records.insert(index, day),
        }
    }

    pub fn stats(&self) -> ProgressStats {
        stats(&self.records)
    }
}
