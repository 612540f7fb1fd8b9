mod boss_data;
mod bosses;
mod placement;

pub use boss_data::BOSS_DATA;
pub use bosses::{
    all_bosses, base_game_bosses, bosses_in_region, bosses_unlocking, default_yhorm_location,
    dlc_bosses, find_bosses_named, find_unique_boss, init, lookup_boss, lookup_boss_by_flag,
    regions, split_location, BossInfo, DEFAULT_YHORM_LOCATION, YHORM_NAME,
};
pub use placement::{is_valid_yhorm_location, yhorm_candidates};
