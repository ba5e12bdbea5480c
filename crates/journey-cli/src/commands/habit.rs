//! Habit checklist commands for CLI.

use chrono::Local;
use clap::Subcommand;
use serde::Serialize;

use super::{confirm, open_session, print_json, CmdResult};

#[derive(Subcommand)]
pub enum HabitAction {
    /// List habits with today's completion summary
    List,
    /// Add a new habit
    Add {
        /// Habit name
        name: String,
    },
    /// Rename a habit
    Rename {
        /// Habit ID
        id: String,
        /// New name
        name: String,
    },
    /// Enable or disable a habit
    Toggle {
        /// Habit ID
        id: String,
    },
    /// Mark or unmark a habit as done today
    Complete {
        /// Habit ID
        id: String,
    },
    /// Reset a habit's streak to zero
    Reset {
        /// Habit ID
        id: String,
    },
    /// Delete a user-added habit
    Remove {
        /// Habit ID
        id: String,
        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },
}

#[derive(Serialize)]
struct HabitList<'a> {
    habits: &'a [journey_core::Habit],
    summary: journey_core::HabitSummary,
}

pub fn run(action: HabitAction) -> CmdResult {
    let mut session = open_session()?;

    match action {
        HabitAction::List => {
            print_json(&HabitList {
                habits: session.habits(),
                summary: session.habit_summary(),
            })?;
        }
        HabitAction::Add { name } => {
            let habit = session.add_habit(&name, Local::now())?;
            print_json(&habit)?;
        }
        HabitAction::Rename { id, name } => {
            print_json(&session.rename_habit(&id, &name)?)?;
        }
        HabitAction::Toggle { id } => {
            print_json(&session.toggle_habit_enabled(&id)?)?;
        }
        HabitAction::Complete { id } => {
            print_json(&session.toggle_habit_completion(&id)?)?;
        }
        HabitAction::Reset { id } => {
            print_json(&session.reset_habit_streak(&id)?)?;
        }
        HabitAction::Remove { id, yes } => {
            if !confirm(&format!("Delete habit '{id}'?"), yes)? {
                println!("cancelled");
                return Ok(());
            }
            let removed = session.remove_habit(&id)?;
            println!("Habit deleted: {}", removed.id);
        }
    }
    Ok(())
}
