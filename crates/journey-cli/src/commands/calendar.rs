use chrono::{Datelike, Local};
use clap::Subcommand;
use serde::Serialize;

use super::{open_session, print_json, CmdResult};

#[derive(Subcommand)]
pub enum CalendarAction {
    /// Total, clean and relapse day counts plus best streak
    Stats,
    /// Month grid (defaults to the current month)
    Month {
        #[arg(long)]
        year: Option<i32>,
        /// 1-12
        #[arg(long)]
        month: Option<u32>,
    },
}

#[derive(Serialize)]
struct GridCell {
    day: u32,
    date: String,
    color: journey_core::CellColor,
    relapsed: Option<bool>,
}

pub fn run(action: CalendarAction) -> CmdResult {
    let session = open_session()?;

    match action {
        CalendarAction::Stats => print_json(&session.calendar_stats())?,
        CalendarAction::Month { year, month } => {
            let today = Local::now().date_naive();
            let cells = session.month_grid(
                year.unwrap_or(today.year()),
                month.unwrap_or(today.month()),
            )?;
            let grid: Vec<Option<GridCell>> = cells
                .into_iter()
                .map(|cell| {
                    cell.map(|c| GridCell {
                        day: c.day,
                        color: c.color(),
                        relapsed: c.progress.as_ref().map(|p| p.relapsed),
                        date: c.date,
                    })
                })
                .collect();
            print_json(&grid)?;
        }
    }
    Ok(())
}
