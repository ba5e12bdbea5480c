//! # NoFap Journey Core Library
//!
//! This library provides the core bookkeeping for the NoFap Journey habit
//! tracker. It follows a CLI-first philosophy: every operation is available
//! through the standalone `journey` binary, and any GUI is a thin layer over
//! the same library.
//!
//! ## Architecture
//!
//! - **Storage**: SQLite-backed key-value store and TOML-based configuration
//! - **Challenge**: start timestamp, elapsed time and milestone tiers
//! - **Habits**: daily checklist with per-habit streaks
//! - **Triggers**: trigger notes and the append-only relapse history
//! - **Calendar**: per-day snapshots, statistics and month grids
//! - **Quotes**: one quote per calendar day
//!
//! ## Key Components
//!
//! - [`Session`]: owns the store and every component's in-memory copy
//! - [`Database`]: key-value persistence
//! - [`Config`]: application configuration management

pub mod calendar;
pub mod challenge;
pub mod error;
pub mod habits;
pub mod quotes;
pub mod resources;
pub mod session;
pub mod storage;
pub mod theme;
pub mod triggers;

pub use calendar::{CellColor, DayCell, DayProgress, ProgressLog, ProgressStats};
pub use challenge::{ChallengeSnapshot, ChallengeState, Elapsed, Milestone};
pub use error::{ConfigError, CoreError, StorageError, ValidationError};
pub use habits::{Habit, HabitLedger, HabitSummary, DEFAULT_HABIT_IDS};
pub use quotes::{Quote, QuoteRotation};
pub use resources::Resource;
pub use session::{RelapseOutcome, Session};
pub use storage::{Config, Database, KvStore};
pub use theme::Theme;
pub use triggers::{RelapseHistory, RelapseRecord, TriggerLog, TriggerRecord};
