//! Which encounters can hold Yhorm for a given set of options
//!
//! Only filters candidates. Picking one is left to the caller.

use ds3_rando_types::PlacementOptions;

use super::boss_data::BOSS_DATA;
use super::bosses::BossInfo;

/// Check if Yhorm may replace this boss.
///
/// DLC fights are off the table unless DLC is enabled. Without randomized
/// weapons Storm Ruler stays in its vanilla spot, so Yhorm can't sit in any
/// fight that comes before it.
pub fn is_valid_yhorm_location(boss: &BossInfo, options: &PlacementOptions) -> bool {
    if boss.dlc && !options.enable_dlc {
        return false;
    }
    if boss.before_storm_ruler && !options.randomize_weapons {
        return false;
    }
    true
}

/// Bosses Yhorm may replace, in traversal order
pub fn yhorm_candidates(
    options: &PlacementOptions,
) -> impl Iterator<Item = &'static BossInfo> + '_ {
    BOSS_DATA
        .iter()
        .filter(move |boss| is_valid_yhorm_location(boss, options))
}
