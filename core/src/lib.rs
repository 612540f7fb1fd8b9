//! Dark Souls III boss encounter data for the item randomizer
//!
//! A fixed, ordered table of boss fights, the locations each one gates, and
//! the default Yhorm placement derived from it.
//!
//! Call [`init`] once at startup. It builds the lookup indexes and resolves
//! the default Yhorm placement, returning [`RegistryError`] if the bundled
//! data is broken. Skipping it only defers that check to the first read of
//! [`DEFAULT_YHORM_LOCATION`], which then panics instead.
//!
//! ```
//! let yhorm = ds3_rando_core::init().expect("boss data failed integrity check");
//! assert_eq!(yhorm.region, "Profaned Capital");
//! ```

pub mod config;
pub mod error;
pub mod game_data;

pub use config::{load_options, parse_options};
pub use ds3_rando_types::PlacementOptions;
pub use error::{ConfigError, RegistryError};
pub use game_data::*;
