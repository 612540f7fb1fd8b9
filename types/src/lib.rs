//! Shared configuration types for the DS3 randomizer
//!
//! Serializable option types shared between the boss data crate
//! (ds3-rando-core) and whatever host drives the randomizer.

use serde::{Deserialize, Serialize};

/// Settings that decide where Yhorm may be placed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlacementOptions {
    /// Allow DLC bosses as placement targets
    #[serde(default)]
    pub enable_dlc: bool,

    /// Storm Ruler is shuffled with the other weapons. When false it stays
    /// in its vanilla spot.
    #[serde(default = "default_true")]
    pub randomize_weapons: bool,
}

impl Default for PlacementOptions {
    fn default() -> Self {
        Self {
            enable_dlc: false,
            randomize_weapons: true,
        }
    }
}

fn default_true() -> bool {
    true
}
