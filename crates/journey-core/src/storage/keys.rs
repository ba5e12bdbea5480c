//! Key space of the persisted store.

/// `"true"` while a challenge is running, absent otherwise.
pub const HAS_STARTED_CHALLENGE: &str = "hasStartedChallenge";
/// RFC 3339 start timestamp (legacy values may be epoch milliseconds).
pub const CHALLENGE_START_TIME: &str = "challengeStartTime";
/// JSON array of habits.
pub const HABITS: &str = "habits";
/// JSON array of trigger records.
pub const TRIGGER_RECORDS: &str = "triggerRecords";
/// JSON array of relapse records.
pub const RELAPSE_HISTORY: &str = "relapseHistory";
/// JSON array of per-day progress snapshots.
pub const PROGRESS_DATA: &str = "progressData";
/// `YYYY-MM-DD` of the last daily quote rotation.
pub const LAST_QUOTE_DATE: &str = "lastQuoteDate";
/// Integer index into the daily quote list.
pub const CURRENT_QUOTE_INDEX: &str = "currentQuoteIndex";
/// `YYYY-MM-DD` of the last day closed by the snapshot writer.
pub const LAST_ROLLOVER_DATE: &str = "lastRolloverDate";
