//! Habit ledger: the daily checklist.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{Result, ValidationError};
use crate::storage::{keys, KvStore};

/// Ids of the seeded habits, which cannot be deleted.
pub const DEFAULT_HABIT_IDS: [&str; 3] = ["namaz", "workout", "coldshower"];

/// A user-trackable daily task with its own completion streak.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Habit {
    pub id: String,
    pub name: String,
    pub enabled: bool,
    pub streak: u32,
    pub completed_today: bool,
}

impl Habit {
    fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            enabled: true,
            streak: 0,
            completed_today: false,
        }
    }

    pub fn is_default(&self) -> bool {
        DEFAULT_HABIT_IDS.contains(&self.id.as_str())
    }
}

/// Ordered list of habits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HabitLedger {
    habits: Vec<Habit>,
}

impl Default for HabitLedger {
    fn default() -> Self {
        Self {
            habits: vec![
                Habit::new("namaz", "Namaz (5 times)"),
                Habit::new("workout", "Workout"),
                Habit::new("coldshower", "Cold Shower"),
            ],
        }
    }
}

impl HabitLedger {
    /// Load the stored ledger, or the default habits if none is stored.
    pub fn load<S: KvStore>(store: &S) -> Result<Self> {
        Ok(store.get_json(keys::HABITS)?.unwrap_or_default())
    }

    /// Persist the default habits if no ledger is stored yet.
    ///
    /// Returns true when the defaults were written.
    pub fn seed_defaults<S: KvStore>(store: &S) -> Result<bool> {
        if store.get(keys::HABITS)?.is_some() {
            return Ok(false);
        }
        Self::default().save(store)?;
        tracing::info!("seeded default habits");
        Ok(true)
    }

    pub fn save<S: KvStore>(&self, store: &S) -> Result<()> {
        store.set_json(keys::HABITS, self)
    }

    pub fn habits(&self) -> &[Habit] {
        &self.habits
    }

    pub fn get(&self, id: &str) -> Option<&Habit> {
        self.habits.iter().find(|h| h.id == id)
    }

    fn get_mut(&mut self, id: &str) -> Result<&mut Habit> {
        self.habits
            .iter_mut()
            .find(|h| h.id == id)
            .ok_or_else(|| ValidationError::UnknownHabit { id: id.to_string() }.into())
    }

    /// Flip the enabled flag, leaving streak and completion untouched.
    pub fn toggle_enabled(&mut self, id: &str) -> Result<&Habit> {
        let habit = self.get_mut(id)?;
        habit.enabled = !habit.enabled;
        Ok(habit)
    }

    /// Flip today's completion; marking adds one to the streak and
    /// unmarking takes it back (never below zero).
    pub fn toggle_completion(&mut self, id: &str) -> Result<&Habit> {
        let habit = self.get_mut(id)?;
        habit.completed_today = !habit.completed_today;
        habit.streak = if habit.completed_today {
            habit.streak.saturating_add(1)
        } else {
            habit.streak.saturating_sub(1)
        };
        Ok(habit)
    }

    pub fn rename(&mut self, id: &str, name: &str) -> Result<&Habit> {
        let name = name.trim();
        if name.is_empty() {
            return Err(ValidationError::EmptyName.into());
        }
        let habit = self.get_mut(id)?;
        habit.name = name.to_string();
        Ok(habit)
    }

    /// Append a new enabled habit with a fresh time-based id.
    pub fn add(&mut self, name: &str, now: DateTime<Utc>) -> Result<&Habit> {
        let name = name.trim();
        if name.is_empty() {
            return Err(ValidationError::EmptyName.into());
        }
        let mut stamp = now.timestamp_millis();
        while self.get(&stamp.to_string()).is_some() {
            stamp += 1;
        }
        self.habits.push(Habit::new(stamp.to_string(), name));
        Ok(&self.habits[self.habits.len() - 1])
    }

    /// Delete a user-added habit. The seeded habits are refused.
    pub fn remove(&mut self, id: &str) -> Result<Habit> {
        if DEFAULT_HABIT_IDS.contains(&id) {
            return Err(ValidationError::ProtectedHabit { id: id.to_string() }.into());
        }
        let index = self
            .habits
            .iter()
            .position(|h| h.id == id)
            .ok_or_else(|| ValidationError::UnknownHabit { id: id.to_string() })?;
        Ok(self.habits.remove(index))
    }

    pub fn reset_streak(&mut self, id: &str) -> Result<&Habit> {
        let habit = self.get_mut(id)?;
        habit.streak = 0;
        habit.completed_today = false;
        Ok(habit)
    }

    /// Clear every habit's completion flag for a new day.
    pub fn start_new_day(&mut self) {
        for habit in &mut self.habits {
            habit.completed_today = false;
        }
    }

    /// Today's completion flags of the enabled habits.
    pub fn completion_map(&self) -> BTreeMap<String, bool> {
        self.habits
            .iter()
            .filter(|h| h.enabled)
            .map(|h| (h.id.clone(), h.completed_today))
            .collect()
    }

    pub fn summary(&self) -> HabitSummary {
        let enabled: Vec<&Habit> = self.habits.iter().filter(|h| h.enabled).collect();
        let completed = enabled.iter().filter(|h| h.completed_today).count();
        let ratio = if enabled.is_empty() {
            0.0
        } else {
            completed as f64 / enabled.len() as f64
        };
        HabitSummary {
            enabled: enabled.len(),
            completed,
            completion_ratio: ratio,
        }
    }
}

/// Completion of the enabled habits for today.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HabitSummary {
    pub enabled: usize,
    pub completed: usize,
    /// `completed / enabled`, 0 when nothing is enabled.
    pub completion_ratio: f64,
}
