//! Application session: the single owner of all persisted state.
//!
//! A `Session` is constructed once at startup and handed by reference to
//! whatever front end drives it. Every mutator takes `&mut self`, updates the
//! in-memory copy, then writes it through to the store before returning, so
//! writes to one key never overlap within a process. A failed write leaves
//! the in-memory copy as mutated until the next [`Session::refresh`].

use chrono::{DateTime, Local, NaiveDate, Timelike, Utc};
use serde::Serialize;

use crate::calendar::{self, DayCell, DayProgress, ProgressLog, ProgressStats};
use crate::challenge::{ChallengeSnapshot, ChallengeState};
use crate::error::Result;
use crate::habits::{Habit, HabitLedger, HabitSummary};
use crate::quotes::{Quote, QuoteRotation, DAILY_QUOTES};
use crate::storage::{keys, Config, Database, KvStore};
use crate::theme::Theme;
use crate::triggers::{RelapseHistory, RelapseRecord, TriggerLog, TriggerRecord};

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Records written by a confirmed relapse.
#[derive(Debug, Clone, Serialize)]
pub struct RelapseOutcome {
    pub trigger: Option<TriggerRecord>,
    pub relapse: RelapseRecord,
}

pub struct Session<S: KvStore = Database> {
    store: S,
    config: Config,
    challenge: ChallengeState,
    habits: HabitLedger,
    triggers: TriggerLog,
    relapses: RelapseHistory,
    progress: ProgressLog,
    quotes: QuoteRotation,
}

impl Session<Database> {
    /// Open the default on-disk store and configuration.
    pub fn open_default(now: DateTime<Local>) -> Result<Self> {
        let db = Database::open()?;
        let config = Config::load_or_default();
        Self::open(db, config, now)
    }
}

impl<S: KvStore> Session<S> {
    /// Load every component, seeding defaults and closing any finished day.
    pub fn open(store: S, config: Config, now: DateTime<Local>) -> Result<Self> {
        HabitLedger::seed_defaults(&store)?;
        let mut session = Self {
            challenge: ChallengeState::load(&store)?,
            habits: HabitLedger::load(&store)?,
            triggers: TriggerLog::load(&store)?,
            relapses: RelapseHistory::load(&store)?,
            progress: ProgressLog::load(&store)?,
            quotes: QuoteRotation::load(&store)?,
            store,
            config,
        };
        session.roll_over(now)?;
        Ok(session)
    }

    /// Re-read everything from the store, discarding in-memory copies.
    pub fn refresh(&mut self, now: DateTime<Local>) -> Result<()> {
        self.challenge = ChallengeState::load(&self.store)?;
        self.habits = HabitLedger::load(&self.store)?;
        self.triggers = TriggerLog::load(&self.store)?;
        self.relapses = RelapseHistory::load(&self.store)?;
        self.progress = ProgressLog::load(&self.store)?;
        self.quotes = QuoteRotation::load(&self.store)?;
        self.roll_over(now)?;
        Ok(())
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Close the previous day if the calendar date has moved on.
    ///
    /// The closed day is snapshotted from the habit ledger and relapse
    /// history, and today's completion flags are cleared. Days with no
    /// running challenge and no relapse are not recorded. Returns the date
    /// that was closed.
    pub fn roll_over(&mut self, now: DateTime<Local>) -> Result<Option<NaiveDate>> {
        let today = now.date_naive();
        let last = self
            .store
            .get(keys::LAST_ROLLOVER_DATE)?
            .and_then(|raw| NaiveDate::parse_from_str(&raw, DATE_FORMAT).ok());

        let closed = match last {
            Some(last) if last < today => {
                let relapsed = self.relapses.relapsed_on(last);
                if self.challenge.active || relapsed {
                    let snapshot =
                        DayProgress::new(last, self.habits.completion_map(), relapsed);
                    self.progress.upsert(snapshot);
                    self.progress.save(&self.store)?;
                } else {
                    tracing::debug!(closed = %last, "no challenge running, day not recorded");
                }
                self.habits.start_new_day();
                self.habits.save(&self.store)?;
                tracing::info!(closed = %last, "day rolled over");
                Some(last)
            }
            Some(_) => return Ok(None),
            None => None,
        };
        self.store
            .set(keys::LAST_ROLLOVER_DATE, &today.format(DATE_FORMAT).to_string())?;
        Ok(closed)
    }

    // Challenge

    pub fn challenge(&self) -> &ChallengeState {
        &self.challenge
    }

    pub fn start_challenge(&mut self, now: DateTime<Local>) -> Result<ChallengeSnapshot> {
        let now = now.with_timezone(&Utc);
        self.challenge.start(&self.store, now)?;
        Ok(self.challenge_snapshot(now))
    }

    pub fn challenge_snapshot(&self, now: DateTime<Utc>) -> ChallengeSnapshot {
        self.challenge
            .snapshot(now, self.config.challenge.ring_target_days)
    }

    /// Log a confirmed relapse and reset the challenge.
    ///
    /// The trigger note (if any), the relapse record and today's calendar
    /// snapshot are all durably written before the challenge flags are
    /// cleared, so an interruption never loses the start time unlogged.
    pub fn confirm_relapse(&mut self, note: &str, now: DateTime<Local>) -> Result<RelapseOutcome> {
        let now_utc = now.with_timezone(&Utc);

        let trigger = if note.trim().is_empty() {
            None
        } else {
            let label = self.challenge.day_label(now_utc);
            let record = self.triggers.record(note, &label, now_utc)?.clone();
            self.triggers.save(&self.store)?;
            Some(record)
        };

        let relapse = self
            .relapses
            .append(note, &self.config.relapse.default_reason, now_utc)
            .clone();
        self.relapses.save(&self.store)?;

        self.progress.upsert(DayProgress::new(
            now.date_naive(),
            self.habits.completion_map(),
            true,
        ));
        self.progress.save(&self.store)?;

        self.challenge.relapse(&self.store)?;
        Ok(RelapseOutcome { trigger, relapse })
    }

    pub fn relapses(&self) -> &[RelapseRecord] {
        self.relapses.records()
    }

    // Habits

    pub fn habits(&self) -> &[Habit] {
        self.habits.habits()
    }

    pub fn habit_summary(&self) -> HabitSummary {
        self.habits.summary()
    }

    pub fn toggle_habit_completion(&mut self, id: &str) -> Result<Habit> {
        let habit = self.habits.toggle_completion(id)?.clone();
        self.habits.save(&self.store)?;
        Ok(habit)
    }

    pub fn toggle_habit_enabled(&mut self, id: &str) -> Result<Habit> {
        let habit = self.habits.toggle_enabled(id)?.clone();
        self.habits.save(&self.store)?;
        Ok(habit)
    }

    pub fn rename_habit(&mut self, id: &str, name: &str) -> Result<Habit> {
        let habit = self.habits.rename(id, name)?.clone();
        self.habits.save(&self.store)?;
        Ok(habit)
    }

    pub fn add_habit(&mut self, name: &str, now: DateTime<Local>) -> Result<Habit> {
        let habit = self.habits.add(name, now.with_timezone(&Utc))?.clone();
        self.habits.save(&self.store)?;
        Ok(habit)
    }

    pub fn remove_habit(&mut self, id: &str) -> Result<Habit> {
        let habit = self.habits.remove(id)?;
        self.habits.save(&self.store)?;
        Ok(habit)
    }

    pub fn reset_habit_streak(&mut self, id: &str) -> Result<Habit> {
        let habit = self.habits.reset_streak(id)?.clone();
        self.habits.save(&self.store)?;
        Ok(habit)
    }

    // Triggers

    pub fn triggers(&self) -> &[TriggerRecord] {
        self.triggers.records()
    }

    pub fn record_trigger(&mut self, note: &str, now: DateTime<Local>) -> Result<TriggerRecord> {
        let now = now.with_timezone(&Utc);
        let label = self.challenge.day_label(now);
        let record = self.triggers.record(note, &label, now)?.clone();
        self.triggers.save(&self.store)?;
        Ok(record)
    }

    /// Returns false if no record had that id.
    pub fn delete_trigger(&mut self, id: &str) -> Result<bool> {
        if !self.triggers.delete(id) {
            return Ok(false);
        }
        self.triggers.save(&self.store)?;
        Ok(true)
    }

    pub fn clear_triggers(&mut self) -> Result<usize> {
        let removed = self.triggers.clear_all();
        self.triggers.save(&self.store)?;
        Ok(removed)
    }

    // Calendar

    pub fn progress(&self) -> &[DayProgress] {
        self.progress.records()
    }

    pub fn calendar_stats(&self) -> ProgressStats {
        self.progress.stats()
    }

    pub fn month_grid(&self, year: i32, month: u32) -> Result<Vec<Option<DayCell>>> {
        calendar::month_grid(year, month, self.progress.records())
    }

    // Quotes

    pub fn quote_of_the_day(&mut self, now: DateTime<Local>) -> Result<(usize, &'static Quote)> {
        let index = self
            .quotes
            .quote_for_today(&self.store, now.date_naive(), DAILY_QUOTES.len())?;
        Ok((index, &DAILY_QUOTES[index]))
    }

    pub fn next_quote(&mut self) -> Result<(usize, &'static Quote)> {
        let index = self.quotes.advance_manually(&self.store, DAILY_QUOTES.len())?;
        Ok((index, &DAILY_QUOTES[index]))
    }

    pub fn theme(&self, now: DateTime<Local>) -> Theme {
        Theme::for_hour(now.hour(), &self.config.theme)
    }
}
