use chrono::Local;
use clap::Subcommand;
use journey_core::quotes::{DAILY_QUOTES, MOTIVATIONAL_LINES, RECOVERY_QUOTES};
use serde::Serialize;

use super::{open_session, print_json, CmdResult};

#[derive(Subcommand)]
pub enum QuoteAction {
    /// Today's quote
    Today,
    /// Advance to the next quote
    Next,
    /// Every quote in the daily rotation, with its index
    List,
    /// Recovery quotes and motivational lines
    Recovery,
}

#[derive(Serialize)]
struct Shown<'a> {
    index: usize,
    #[serde(flatten)]
    quote: &'a journey_core::Quote,
}

#[derive(Serialize)]
struct Recovery {
    quotes: &'static [journey_core::Quote],
    motivation: &'static [&'static str],
}

pub fn run(action: QuoteAction) -> CmdResult {
    match action {
        QuoteAction::Today => {
            let mut session = open_session()?;
            let (index, quote) = session.quote_of_the_day(Local::now())?;
            print_json(&Shown { index, quote })?;
        }
        QuoteAction::Next => {
            let mut session = open_session()?;
            let (index, quote) = session.next_quote()?;
            print_json(&Shown { index, quote })?;
        }
        QuoteAction::List => {
            let all: Vec<Shown<'_>> = DAILY_QUOTES
                .iter()
                .enumerate()
                .map(|(index, quote)| Shown { index, quote })
                .collect();
            print_json(&all)?;
        }
        QuoteAction::Recovery => print_json(&Recovery {
            quotes: RECOVERY_QUOTES,
            motivation: MOTIVATIONAL_LINES,
        })?,
    }
    Ok(())
}
