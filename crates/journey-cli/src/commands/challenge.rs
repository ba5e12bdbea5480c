use std::time::Duration;

use chrono::{Local, Utc};
use clap::Subcommand;
use journey_core::{Session, Theme};

use super::{confirm, open_session, print_json, CmdResult};

#[derive(Subcommand)]
pub enum ChallengeAction {
    /// Start (or restart) the challenge now
    Start,
    /// Print elapsed time, milestone and progress as JSON
    Status,
    /// Re-print the elapsed clock every second until Ctrl-C
    Watch {
        /// Stop after this many one-second ticks
        #[arg(long)]
        ticks: Option<u64>,
    },
    /// Record a relapse and reset the challenge
    Relapse {
        /// What triggered it (optional)
        #[arg(long, default_value = "")]
        note: String,
        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },
}

pub fn run(action: ChallengeAction) -> CmdResult {
    let mut session = open_session()?;

    match action {
        ChallengeAction::Start => {
            let snapshot = session.start_challenge(Local::now())?;
            print_json(&snapshot)?;
        }
        ChallengeAction::Status => {
            print_json(&session.challenge_snapshot(Utc::now()))?;
        }
        ChallengeAction::Watch { ticks } => {
            if !session.challenge().active {
                println!("No active challenge. Run 'journey challenge start'.");
                return Ok(());
            }
            let runtime = tokio::runtime::Runtime::new()?;
            runtime.block_on(watch(&session, ticks));
        }
        ChallengeAction::Relapse { note, yes } => {
            if !confirm(
                "Are you sure you want to reset your progress? This will restart your challenge from day 0.",
                yes,
            )? {
                println!("cancelled");
                return Ok(());
            }
            let outcome = session.confirm_relapse(&note, Local::now())?;
            print_json(&outcome)?;
            eprintln!("Every setback is a setup for a comeback. Let's start fresh!");
        }
    }
    Ok(())
}

/// Elapsed display on a one-second timer, theme re-check on a one-minute
/// timer. Both timers are dropped when the loop exits.
async fn watch(session: &Session, ticks: Option<u64>) {
    let mut clock = tokio::time::interval(Duration::from_secs(1));
    let mut theme_check = tokio::time::interval(Duration::from_secs(60));
    let mut theme: Option<Theme> = None;
    let mut remaining = ticks;

    loop {
        tokio::select! {
            _ = clock.tick() => {
                let snap = session.challenge_snapshot(Utc::now());
                if let (Some(elapsed), Some(milestone)) = (snap.elapsed, snap.milestone) {
                    println!(
                        "Day {} {} [{}] {:.0}%",
                        elapsed.days,
                        elapsed.clock(),
                        milestone.label(),
                        snap.ring_fill * 100.0
                    );
                }
                if let Some(left) = remaining.as_mut() {
                    *left = left.saturating_sub(1);
                    if *left == 0 {
                        break;
                    }
                }
            }
            _ = theme_check.tick() => {
                let current = session.theme(Local::now());
                if theme != Some(current) {
                    tracing::debug!(?current, "theme changed");
                    println!("Theme: {}", current.name());
                    theme = Some(current);
                }
            }
            _ = tokio::signal::ctrl_c() => break,
        }
    }
}
