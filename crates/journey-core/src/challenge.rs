//! Challenge tracker: the current clean-streak attempt.
//!
//! A challenge is a start timestamp plus an active flag. Elapsed time, the
//! milestone tier and the progress-ring fill are derived on every render and
//! never stored.

use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::storage::{keys, KvStore};

const SECOND_MS: i64 = 1000;
const MINUTE_MS: i64 = 60 * SECOND_MS;
const HOUR_MS: i64 = 60 * MINUTE_MS;
const DAY_MS: i64 = 24 * HOUR_MS;

/// Persisted challenge state.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChallengeState {
    pub active: bool,
    /// Meaningful only while `active`.
    pub started_at: Option<DateTime<Utc>>,
}

/// Time since the challenge started, each unit reduced from the previous.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Elapsed {
    pub days: i64,
    pub hours: i64,
    pub minutes: i64,
    pub seconds: i64,
}

impl Elapsed {
    /// Split a millisecond span into days/hours/minutes/seconds.
    ///
    /// Negative spans (start in the future after a clock change) clamp to zero.
    pub fn from_millis(ms: i64) -> Self {
        let ms = ms.max(0);
        Self {
            days: ms / DAY_MS,
            hours: (ms % DAY_MS) / HOUR_MS,
            minutes: (ms % HOUR_MS) / MINUTE_MS,
            seconds: (ms % MINUTE_MS) / SECOND_MS,
        }
    }

    /// `HH:MM:SS` of the sub-day remainder.
    pub fn clock(&self) -> String {
        format!("{:02}:{:02}:{:02}", self.hours, self.minutes, self.seconds)
    }
}

/// Presentation tier reached after a number of clean days.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Milestone {
    Starter,
    Beginner,
    Warrior,
    Champion,
    Master,
}

impl Milestone {
    pub fn for_days(days: i64) -> Self {
        match days {
            d if d >= 90 => Milestone::Master,
            d if d >= 30 => Milestone::Champion,
            d if d >= 7 => Milestone::Warrior,
            d if d >= 1 => Milestone::Beginner,
            _ => Milestone::Starter,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Milestone::Starter => "Starter",
            Milestone::Beginner => "Beginner",
            Milestone::Warrior => "Warrior",
            Milestone::Champion => "Champion",
            Milestone::Master => "Master",
        }
    }
}

/// Encouragement line for the current day count.
pub fn motivation(days: i64) -> &'static str {
    match days {
        d if d <= 0 => "Your journey begins now!",
        d if d < 7 => "Building momentum...",
        d if d < 30 => "Forming new habits!",
        d if d < 90 => "Transformation in progress!",
        _ => "You're unstoppable!",
    }
}

/// Fraction of the progress ring to fill, `min(days / target, 1)`.
pub fn ring_fill(days: i64, target_days: u32) -> f64 {
    if target_days == 0 {
        return 1.0;
    }
    (days.max(0) as f64 / target_days as f64).min(1.0)
}

/// Parse a stored start time.
///
/// RFC 3339 is canonical; bare epoch-millisecond strings written by older
/// builds are still accepted.
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        return Some(ts.with_timezone(&Utc));
    }
    raw.parse::<i64>()
        .ok()
        .and_then(|ms| Utc.timestamp_millis_opt(ms).single())
}

/// Render-ready view of the running challenge.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChallengeSnapshot {
    pub active: bool,
    pub started_at: Option<DateTime<Utc>>,
    pub elapsed: Option<Elapsed>,
    pub clock: Option<String>,
    /// Whole days expressed as hours (`days * 24`).
    pub total_hours: Option<i64>,
    pub weeks: Option<i64>,
    pub milestone: Option<Milestone>,
    pub motivation: Option<String>,
    pub ring_fill: f64,
}

impl ChallengeState {
    /// Read the challenge flags from the store.
    ///
    /// An active flag without a parseable timestamp loads as active with no
    /// start time so the caller can offer a fresh start.
    pub fn load<S: KvStore>(store: &S) -> Result<Self> {
        let active = store.get(keys::HAS_STARTED_CHALLENGE)?.as_deref() == Some("true");
        let started_at = match store.get(keys::CHALLENGE_START_TIME)? {
            Some(raw) => {
                let parsed = parse_timestamp(&raw);
                if parsed.is_none() {
                    tracing::warn!(value = %raw, "unparseable challenge start time");
                }
                parsed
            }
            None => None,
        };
        Ok(Self { active, started_at })
    }

    /// Begin (or restart) a challenge at `now`.
    pub fn start<S: KvStore>(&mut self, store: &S, now: DateTime<Utc>) -> Result<()> {
        self.active = true;
        self.started_at = Some(now);
        store.set(keys::CHALLENGE_START_TIME, &now.to_rfc3339())?;
        store.set(keys::HAS_STARTED_CHALLENGE, "true")?;
        tracing::info!(started_at = %now, "challenge started");
        Ok(())
    }

    /// Clear the challenge. Log the relapse before calling this.
    pub fn relapse<S: KvStore>(&mut self, store: &S) -> Result<()> {
        self.active = false;
        self.started_at = None;
        store.remove(keys::HAS_STARTED_CHALLENGE)?;
        store.remove(keys::CHALLENGE_START_TIME)?;
        tracing::info!("challenge reset");
        Ok(())
    }

    /// Elapsed time at `now`, `None` without an active start.
    pub fn elapsed(&self, now: DateTime<Utc>) -> Option<Elapsed> {
        if !self.active {
            return None;
        }
        let started_at = self.started_at?;
        Some(Elapsed::from_millis((now - started_at).num_milliseconds()))
    }

    /// Label for records created at `now`, e.g. `Day 3`.
    pub fn day_label(&self, now: DateTime<Utc>) -> String {
        let day = self.elapsed(now).map(|e| e.days + 1).unwrap_or(1);
        format!("Day {day}")
    }

    pub fn snapshot(&self, now: DateTime<Utc>, ring_target_days: u32) -> ChallengeSnapshot {
        let elapsed = self.elapsed(now);
        let days = elapsed.map(|e| e.days).unwrap_or(0);
        ChallengeSnapshot {
            active: self.active,
            started_at: self.started_at,
            elapsed,
            clock: elapsed.map(|e| e.clock()),
            total_hours: elapsed.map(|e| e.days * 24),
            weeks: elapsed.map(|e| e.days / 7),
            milestone: elapsed.map(|e| Milestone::for_days(e.days)),
            motivation: elapsed.map(|e| motivation(e.days).to_string()),
            ring_fill: ring_fill(days, ring_target_days),
        }
    }
}
