//! Day/night appearance switching.

use serde::{Deserialize, Serialize};

use crate::storage::ThemeConfig;

/// Light or dark appearance, chosen by hour of day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub fn name(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// Dark between `night_starts_hour` and `night_ends_hour`, wrapping midnight.
    pub fn for_hour(hour: u32, config: &ThemeConfig) -> Self {
        let night = if config.night_starts_hour >= config.night_ends_hour {
            hour >= config.night_starts_hour || hour < config.night_ends_hour
        } else {
            hour >= config.night_starts_hour && hour < config.night_ends_hour
        };
        if night {
            Theme::Dark
        } else {
            Theme::Light
        }
    }
}
