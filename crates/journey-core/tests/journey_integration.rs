//! Integration tests for a multi-day journey against an on-disk store.

use chrono::{DateTime, Duration, Local, TimeZone};
use journey_core::{CellColor, Config, Database, KvStore, Session};
use tempfile::TempDir;

fn morning(day: u32) -> DateTime<Local> {
    Local.with_ymd_and_hms(2026, 7, day, 9, 0, 0).unwrap()
}

#[test]
fn test_week_of_progress_fills_calendar() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("journey.db");

    {
        let db = Database::open_at(&path).unwrap();
        let mut session = Session::open(db, Config::default(), morning(1)).unwrap();
        session.start_challenge(morning(1)).unwrap();
        session.toggle_habit_completion("namaz").unwrap();
    }

    // Days 2..=4: reopen each morning, closing the previous day.
    for day in 2..=4 {
        let db = Database::open_at(&path).unwrap();
        let mut session = Session::open(db, Config::default(), morning(day)).unwrap();
        assert!(session.habits().iter().all(|h| !h.completed_today));
        if day == 3 {
            session
                .confirm_relapse("", morning(day) + Duration::hours(12))
                .unwrap();
            session.start_challenge(morning(day) + Duration::hours(13)).unwrap();
        }
        session.toggle_habit_completion("workout").unwrap();
    }

    let db = Database::open_at(&path).unwrap();
    let session = Session::open(db, Config::default(), morning(5)).unwrap();

    let dates: Vec<&str> = session.progress().iter().map(|d| d.date.as_str()).collect();
    assert_eq!(
        dates,
        vec!["2026-07-01", "2026-07-02", "2026-07-03", "2026-07-04"]
    );
    let stats = session.calendar_stats();
    assert_eq!(stats.total_days, 4);
    assert_eq!(stats.relapses, 1);
    assert_eq!(stats.clean_days, 3);
    assert_eq!(stats.best_streak, 2);

    let cells = session.month_grid(2026, 7).unwrap();
    let colors: Vec<CellColor> = cells.iter().flatten().map(|c| c.color()).collect();
    assert_eq!(colors[0], CellColor::Success);
    assert_eq!(colors[2], CellColor::Alert);
    assert_eq!(colors[4], CellColor::Neutral);

    assert_eq!(session.relapses().len(), 1);
    assert_eq!(session.relapses()[0].reason, "No reason provided");
    assert!(session.challenge().active);

    let workout = session.habits().iter().find(|h| h.id == "workout").unwrap();
    assert_eq!(workout.streak, 3);
}

#[test]
fn test_corrupt_values_do_not_block_open() {
    let db = Database::open_memory().unwrap();
    db.set("habits", "not json").unwrap();
    db.set("triggerRecords", "[{").unwrap();
    db.set("currentQuoteIndex", "seven").unwrap();

    let mut session = Session::open(db, Config::default(), morning(1)).unwrap();
    assert_eq!(session.habits().len(), 3);
    assert!(session.triggers().is_empty());
    let (index, _) = session.quote_of_the_day(morning(1)).unwrap();
    assert_eq!(index, 0);
}
