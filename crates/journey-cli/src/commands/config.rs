use clap::Subcommand;
use journey_core::{Config, ConfigError};

use super::{confirm, print_json, CmdResult};

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Print one setting, e.g. `theme.night_starts_hour`
    Get { key: String },
    /// Change one setting; hours must be 0-23, ring target at least 1
    Set { key: String, value: String },
    /// Print every setting as JSON
    List,
    /// Restore theme, challenge, relapse and contact defaults
    Reset {
        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },
}

pub fn run(action: ConfigAction) -> CmdResult {
    let mut config = Config::load()?;

    match action {
        ConfigAction::Get { key } => {
            let value = config.get(&key).ok_or(ConfigError::UnknownKey(key))?;
            println!("{value}");
        }
        ConfigAction::Set { key, value } => {
            config.set(&key, &value)?;
            tracing::info!(%key, %value, "setting changed");
            println!("{key} = {value}");
        }
        ConfigAction::List => print_json(&config)?,
        ConfigAction::Reset { yes } => {
            if !confirm("Restore all settings to their defaults?", yes)? {
                println!("cancelled");
                return Ok(());
            }
            Config::default().save()?;
            println!("settings restored to defaults");
        }
    }
    Ok(())
}
