pub mod calendar;
pub mod challenge;
pub mod config;
pub mod habit;
pub mod quote;
pub mod relapse;
pub mod resource;
pub mod theme;
pub mod trigger;

use std::io::{BufRead, Write};

use chrono::Local;
use journey_core::Session;

pub type CmdResult = Result<(), Box<dyn std::error::Error>>;

/// Open the on-disk session as of now.
pub fn open_session() -> Result<Session, Box<dyn std::error::Error>> {
    Ok(Session::open_default(Local::now())?)
}

/// Ask for confirmation of a destructive action unless `--yes` was given.
pub fn confirm(prompt: &str, assume_yes: bool) -> Result<bool, std::io::Error> {
    if assume_yes {
        return Ok(true);
    }
    eprint!("{prompt} [y/N] ");
    std::io::stderr().flush()?;
    let mut answer = String::new();
    std::io::stdin().lock().read_line(&mut answer)?;
    Ok(matches!(answer.trim(), "y" | "Y" | "yes" | "YES"))
}

pub fn print_json<T: serde::Serialize>(value: &T) -> CmdResult {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
