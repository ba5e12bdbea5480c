use clap::Subcommand;
use journey_core::{resources, Config};

use super::{print_json, CmdResult};

#[derive(Subcommand)]
pub enum ResourceAction {
    /// List the built-in links
    List,
    /// Open a link in the default browser
    Open {
        /// Resource ID (see `resource list`)
        id: String,
    },
    /// Compose a feature-request email
    RequestFeature {
        /// Print the mailto link instead of opening it
        #[arg(long)]
        print: bool,
    },
}

pub fn run(action: ResourceAction) -> CmdResult {
    match action {
        ResourceAction::List => print_json(&resources::RESOURCES)?,
        ResourceAction::Open { id } => {
            let resource = resources::find(&id)?;
            resources::open_link(resource.url)?;
            println!("Opened {}", resource.title);
        }
        ResourceAction::RequestFeature { print } => {
            let config = Config::load_or_default();
            let link = resources::feature_request_mailto(&config.contact);
            if print {
                println!("{link}");
            } else {
                resources::open_link(&link)?;
            }
        }
    }
    Ok(())
}
