use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "journey", version, about = "NoFap Journey CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Challenge progress and relapse reset
    Challenge {
        #[command(subcommand)]
        action: commands::challenge::ChallengeAction,
    },
    /// Daily habit checklist
    Habit {
        #[command(subcommand)]
        action: commands::habit::HabitAction,
    },
    /// Trigger records
    Trigger {
        #[command(subcommand)]
        action: commands::trigger::TriggerAction,
    },
    /// Relapse history
    Relapse {
        #[command(subcommand)]
        action: commands::relapse::RelapseAction,
    },
    /// Progress calendar and statistics
    Calendar {
        #[command(subcommand)]
        action: commands::calendar::CalendarAction,
    },
    /// Daily inspiration and recovery quotes
    Quote {
        #[command(subcommand)]
        action: commands::quote::QuoteAction,
    },
    /// Recovery guide, exercises and community links
    Resource {
        #[command(subcommand)]
        action: commands::resource::ResourceAction,
    },
    /// Current light/dark theme
    Theme,
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env("JOURNEY_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    init_tracing();

    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Challenge { action } => commands::challenge::run(action),
        Commands::Habit { action } => commands::habit::run(action),
        Commands::Trigger { action } => commands::trigger::run(action),
        Commands::Relapse { action } => commands::relapse::run(action),
        Commands::Calendar { action } => commands::calendar::run(action),
        Commands::Quote { action } => commands::quote::run(action),
        Commands::Resource { action } => commands::resource::run(action),
        Commands::Theme => commands::theme::run(),
        Commands::Config { action } => commands::config::run(action),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
