use chrono::{Local, Timelike};
use journey_core::{Config, Theme};

use super::{print_json, CmdResult};

pub fn run() -> CmdResult {
    let config = Config::load_or_default();
    print_json(&Theme::for_hour(Local::now().hour(), &config.theme))
}
