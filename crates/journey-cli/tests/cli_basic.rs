//! Basic CLI E2E tests.
//!
//! Tests invoke the built binary against a temporary data directory and
//! verify its outputs.

mod common;

use common::{
    assert_contains, parse_json, run_cli_failure, run_cli_success, run_cli_with_input,
};
use tempfile::TempDir;

#[test]
fn test_habit_list_seeds_defaults() {
    let dir = TempDir::new().unwrap();
    let out = parse_json(&run_cli_success(dir.path(), &["habit", "list"]));
    let habits = out["habits"].as_array().unwrap();
    assert_eq!(habits.len(), 3);
    assert_eq!(habits[0]["id"], "namaz");
    assert_eq!(out["summary"]["enabled"], 3);
}

#[test]
fn test_habit_complete_toggles_streak() {
    let dir = TempDir::new().unwrap();
    let on = parse_json(&run_cli_success(dir.path(), &["habit", "complete", "workout"]));
    assert_eq!(on["streak"], 1);
    assert_eq!(on["completedToday"], true);
    let off = parse_json(&run_cli_success(dir.path(), &["habit", "complete", "workout"]));
    assert_eq!(off["streak"], 0);
}

#[test]
fn test_habit_remove_default_is_refused() {
    let dir = TempDir::new().unwrap();
    let (_, stderr, _) = run_cli_failure(dir.path(), &["habit", "remove", "namaz", "--yes"]);
    assert_contains(&stderr, "cannot be deleted");
}

#[test]
fn test_habit_add_then_remove() {
    let dir = TempDir::new().unwrap();
    let added = parse_json(&run_cli_success(dir.path(), &["habit", "add", "Read Quran"]));
    let id = added["id"].as_str().unwrap().to_string();
    let out = run_cli_success(dir.path(), &["habit", "remove", &id, "--yes"]);
    assert_contains(&out, "Habit deleted");
    let list = parse_json(&run_cli_success(dir.path(), &["habit", "list"]));
    assert_eq!(list["habits"].as_array().unwrap().len(), 3);
}

#[test]
fn test_challenge_start_and_status() {
    let dir = TempDir::new().unwrap();
    let started = parse_json(&run_cli_success(dir.path(), &["challenge", "start"]));
    assert_eq!(started["active"], true);
    let status = parse_json(&run_cli_success(dir.path(), &["challenge", "status"]));
    assert_eq!(status["active"], true);
    assert_eq!(status["elapsed"]["days"], 0);
    assert_eq!(status["milestone"], "starter");
}

#[test]
fn test_challenge_watch_stops_after_ticks() {
    let dir = TempDir::new().unwrap();
    run_cli_success(dir.path(), &["challenge", "start"]);
    let out = run_cli_success(dir.path(), &["challenge", "watch", "--ticks", "2"]);
    let clock_lines: Vec<&str> = out.lines().filter(|l| l.starts_with("Day 0 ")).collect();
    assert_eq!(clock_lines.len(), 2, "{out}");
}

#[test]
fn test_challenge_watch_without_challenge() {
    let dir = TempDir::new().unwrap();
    let out = run_cli_success(dir.path(), &["challenge", "watch", "--ticks", "1"]);
    assert_contains(&out, "No active challenge");
}

#[test]
fn test_challenge_relapse_logs_and_resets() {
    let dir = TempDir::new().unwrap();
    run_cli_success(dir.path(), &["challenge", "start"]);
    let outcome = parse_json(&run_cli_success(
        dir.path(),
        &["challenge", "relapse", "--note", "late night", "--yes"],
    ));
    assert_eq!(outcome["trigger"]["note"], "late night");
    assert_eq!(outcome["relapse"]["reason"], "late night");

    let status = parse_json(&run_cli_success(dir.path(), &["challenge", "status"]));
    assert_eq!(status["active"], false);
    let triggers = parse_json(&run_cli_success(dir.path(), &["trigger", "list"]));
    assert_eq!(triggers.as_array().unwrap().len(), 1);
    let history = parse_json(&run_cli_success(dir.path(), &["relapse", "history"]));
    assert_eq!(history.as_array().unwrap().len(), 1);
    let stats = parse_json(&run_cli_success(dir.path(), &["calendar", "stats"]));
    assert_eq!(stats["relapses"], 1);
}

#[test]
fn test_trigger_add_delete_clear() {
    let dir = TempDir::new().unwrap();
    let record = parse_json(&run_cli_success(dir.path(), &["trigger", "add", "boredom"]));
    let id = record["id"].as_str().unwrap().to_string();
    run_cli_success(dir.path(), &["trigger", "add", "stress"]);
    let out = run_cli_success(dir.path(), &["trigger", "delete", &id, "--yes"]);
    assert_contains(&out, "Trigger deleted");
    let out = run_cli_success(dir.path(), &["trigger", "clear", "--yes"]);
    assert_contains(&out, "Cleared 1");
}

#[test]
fn test_trigger_clear_declined_keeps_records() {
    let dir = TempDir::new().unwrap();
    run_cli_success(dir.path(), &["trigger", "add", "boredom"]);
    let (stdout, stderr, code) = run_cli_with_input(dir.path(), &["trigger", "clear"], "n\n");
    assert_eq!(code, 0, "{stderr}");
    assert_contains(&stdout, "cancelled");
    assert_contains(&stderr, "[y/N]");
    let triggers = parse_json(&run_cli_success(dir.path(), &["trigger", "list"]));
    assert_eq!(triggers.as_array().unwrap().len(), 1);
}

#[test]
fn test_trigger_clear_confirmed_on_prompt() {
    let dir = TempDir::new().unwrap();
    run_cli_success(dir.path(), &["trigger", "add", "boredom"]);
    let (stdout, _, code) = run_cli_with_input(dir.path(), &["trigger", "clear"], "y\n");
    assert_eq!(code, 0);
    assert_contains(&stdout, "Cleared 1");
}

#[test]
fn test_trigger_add_rejects_blank_note() {
    let dir = TempDir::new().unwrap();
    run_cli_failure(dir.path(), &["trigger", "add", "   "]);
}

#[test]
fn test_calendar_month_grid() {
    let dir = TempDir::new().unwrap();
    let grid = parse_json(&run_cli_success(
        dir.path(),
        &["calendar", "month", "--year", "2026", "--month", "4"],
    ));
    let cells = grid.as_array().unwrap();
    assert_eq!(cells.iter().filter(|c| c.is_null()).count(), 3);
    assert_eq!(cells.iter().filter(|c| !c.is_null()).count(), 30);
    run_cli_failure(dir.path(), &["calendar", "month", "--year", "2026", "--month", "13"]);
}

#[test]
fn test_quote_today_is_stable() {
    let dir = TempDir::new().unwrap();
    let first = parse_json(&run_cli_success(dir.path(), &["quote", "today"]));
    let second = parse_json(&run_cli_success(dir.path(), &["quote", "today"]));
    assert_eq!(first["index"], second["index"]);
    let next = parse_json(&run_cli_success(dir.path(), &["quote", "next"]));
    let after = parse_json(&run_cli_success(dir.path(), &["quote", "today"]));
    assert_eq!(next["index"], after["index"]);
}

#[test]
fn test_quote_list_shows_daily_rotation() {
    let dir = TempDir::new().unwrap();
    let list = parse_json(&run_cli_success(dir.path(), &["quote", "list"]));
    let quotes = list.as_array().unwrap();
    assert_eq!(quotes.len(), 7);
    assert_eq!(quotes[0]["index"], 0);
    assert_eq!(quotes[6]["reference"], "Quran 2:222");
}

#[test]
fn test_config_reset_requires_confirmation() {
    let dir = TempDir::new().unwrap();
    run_cli_success(dir.path(), &["config", "set", "challenge.ring_target_days", "30"]);
    let (stdout, _, _) = run_cli_with_input(dir.path(), &["config", "reset"], "\n");
    assert_contains(&stdout, "cancelled");
    run_cli_success(dir.path(), &["config", "reset", "--yes"]);
    let out = run_cli_success(dir.path(), &["config", "get", "challenge.ring_target_days"]);
    assert_eq!(out.trim(), "90");
}

#[test]
fn test_resource_list_and_mailto() {
    let dir = TempDir::new().unwrap();
    let list = parse_json(&run_cli_success(dir.path(), &["resource", "list"]));
    assert!(list.as_array().unwrap().len() >= 10);
    let link = run_cli_success(dir.path(), &["resource", "request-feature", "--print"]);
    assert!(link.starts_with("mailto:"));
}

#[test]
fn test_config_get_set() {
    let dir = TempDir::new().unwrap();
    let out = run_cli_success(dir.path(), &["config", "get", "theme.night_starts_hour"]);
    assert_eq!(out.trim(), "18");
    run_cli_success(dir.path(), &["config", "set", "challenge.ring_target_days", "30"]);
    let out = run_cli_success(dir.path(), &["config", "get", "challenge.ring_target_days"]);
    assert_eq!(out.trim(), "30");
    run_cli_failure(dir.path(), &["config", "set", "theme.night_starts_hour", "25"]);
}

#[test]
fn test_theme() {
    let dir = TempDir::new().unwrap();
    let out = run_cli_success(dir.path(), &["theme"]);
    assert!(out.contains("light") || out.contains("dark"));
}
