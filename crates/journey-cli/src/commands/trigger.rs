use chrono::Local;
use clap::Subcommand;

use super::{confirm, open_session, print_json, CmdResult};

#[derive(Subcommand)]
pub enum TriggerAction {
    /// List trigger records, newest first
    List,
    /// Record a trigger note
    Add {
        /// What happened
        note: String,
    },
    /// Delete one trigger record
    Delete {
        /// Record ID
        id: String,
        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },
    /// Delete every trigger record
    Clear {
        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },
}

pub fn run(action: TriggerAction) -> CmdResult {
    let mut session = open_session()?;

    match action {
        TriggerAction::List => print_json(&session.triggers())?,
        TriggerAction::Add { note } => {
            let record = session.record_trigger(&note, Local::now())?;
            print_json(&record)?;
        }
        TriggerAction::Delete { id, yes } => {
            if !confirm("Are you sure you want to delete this trigger record?", yes)? {
                println!("cancelled");
                return Ok(());
            }
            if session.delete_trigger(&id)? {
                println!("Trigger deleted: {id}");
            } else {
                println!("Trigger not found: {id}");
            }
        }
        TriggerAction::Clear { yes } => {
            if !confirm(
                "Are you sure you want to delete all trigger records? This cannot be undone.",
                yes,
            )? {
                println!("cancelled");
                return Ok(());
            }
            let removed = session.clear_triggers()?;
            println!("Cleared {removed} trigger records");
        }
    }
    Ok(())
}
