use clap::Subcommand;

use super::{open_session, print_json, CmdResult};

#[derive(Subcommand)]
pub enum RelapseAction {
    /// Print every recorded relapse, oldest first
    History,
}

pub fn run(action: RelapseAction) -> CmdResult {
    let session = open_session()?;

    match action {
        RelapseAction::History => print_json(&session.relapses())?,
    }
    Ok(())
}
