//! Boss encounter registry
//!
//! Read-only lookups over [`BOSS_DATA`] plus the default Yhorm placement.
//! Everything here is built once from static data and never mutated, so it
//! can be read from any thread.

use hashbrown::HashMap;
use std::sync::LazyLock;

use super::boss_data::BOSS_DATA;
use crate::error::RegistryError;

/// Name of the boss whose vanilla arena is the fallback Yhorm placement
pub const YHORM_NAME: &str = "Yhorm the Giant";

/// Lazy-initialized lookup of encounter ID → boss
static BOSS_LOOKUP: LazyLock<HashMap<i64, &'static BossInfo>> = LazyLock::new(|| {
    let mut map = HashMap::with_capacity(BOSS_DATA.len());
    for boss in BOSS_DATA {
        if map.insert(boss.id, boss).is_some() {
            tracing::warn!(id = boss.id, name = boss.name, "duplicate boss id in data");
        }
    }
    tracing::debug!(count = map.len(), "built boss id index");
    map
});

/// Lazy-initialized lookup of defeat flag → boss. First-phase encounters have
/// no flag and are not indexed.
static FLAG_LOOKUP: LazyLock<HashMap<i64, &'static BossInfo>> = LazyLock::new(|| {
    let mut map = HashMap::new();
    for boss in BOSS_DATA {
        let Some(flag) = boss.flag else { continue };
        if map.insert(flag, boss).is_some() {
            tracing::warn!(flag, name = boss.name, "duplicate defeat flag in data");
        }
    }
    tracing::debug!(count = map.len(), "built defeat flag index");
    map
});

/// Where Yhorm sits when boss placement isn't randomized.
///
/// Panics on first access if the data doesn't contain exactly one boss named
/// [`YHORM_NAME`]. Call [`init`] at startup to surface that as an error
/// instead.
pub static DEFAULT_YHORM_LOCATION: LazyLock<&'static BossInfo> =
    LazyLock::new(|| match find_unique_boss(YHORM_NAME) {
        Ok(boss) => {
            tracing::debug!(region = boss.region, id = boss.id, "resolved default Yhorm location");
            boss
        }
        Err(err) => {
            tracing::error!(error = %err, "boss data failed integrity check");
            panic!("{err}");
        }
    });

/// A single boss fight, or one phase of a multi-phase fight
#[derive(Debug)]
pub struct BossInfo {
    pub name: &'static str,
    /// Region this is the boss of
    pub region: &'static str,
    /// The game's ID for this particular encounter
    pub id: i64,
    /// Event flag set when the boss is defeated. `None` for first phases.
    pub flag: Option<i64>,
    pub dlc: bool,
    /// True if the fight comes before Storm Ruler can be picked up in vanilla
    pub before_storm_ruler: bool,
    /// Locations that can't be reached until this boss is dead
    pub locations: phf::Set<&'static str>,
}

impl BossInfo {
    /// Returns true unless this is an intermediate phase
    pub fn is_final_phase(&self) -> bool {
        self.flag.is_some()
    }

    /// Check if defeating this boss unlocks the given location
    pub fn unlocks(&self, location: &str) -> bool {
        self.locations.contains(location)
    }

    /// Unlocked locations in lexical order
    pub fn sorted_locations(&self) -> Vec<&'static str> {
        let mut locations: Vec<_> = self.locations.iter().copied().collect();
        locations.sort_unstable();
        locations
    }
}

/// Split a location name into its area code and description
/// (e.g., "PC: Soul of Yhorm the Giant" → ("PC", "Soul of Yhorm the Giant"))
pub fn split_location(location: &str) -> Option<(&str, &str)> {
    let (area, description) = location.split_once(": ")?;
    let valid_area = !area.is_empty()
        && area
            .chars()
            .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit());
    if !valid_area || description.trim().is_empty() {
        return None;
    }
    Some((area, description))
}

/// All encounters in traversal order
pub fn all_bosses() -> &'static [BossInfo] {
    BOSS_DATA
}

/// Lookup boss info by encounter ID
pub fn lookup_boss(id: i64) -> Option<&'static BossInfo> {
    BOSS_LOOKUP.get(&id).copied()
}

/// Lookup the boss whose defeat sets the given event flag
pub fn lookup_boss_by_flag(flag: i64) -> Option<&'static BossInfo> {
    FLAG_LOOKUP.get(&flag).copied()
}

/// All encounters with the given name, in traversal order
pub fn find_bosses_named(name: &str) -> impl Iterator<Item = &'static BossInfo> + '_ {
    BOSS_DATA.iter().filter(move |boss| boss.name == name)
}

/// All encounters belonging to a region, in traversal order
pub fn bosses_in_region(region: &str) -> impl Iterator<Item = &'static BossInfo> + '_ {
    BOSS_DATA.iter().filter(move |boss| boss.region == region)
}

/// All encounters that gate the given location
pub fn bosses_unlocking(location: &str) -> impl Iterator<Item = &'static BossInfo> + '_ {
    BOSS_DATA.iter().filter(move |boss| boss.unlocks(location))
}

/// Distinct regions in the order they're first reached
pub fn regions() -> Vec<&'static str> {
    let mut regions: Vec<&'static str> = Vec::new();
    for boss in BOSS_DATA {
        if !regions.contains(&boss.region) {
            regions.push(boss.region);
        }
    }
    regions
}

pub fn dlc_bosses() -> impl Iterator<Item = &'static BossInfo> {
    BOSS_DATA.iter().filter(|boss| boss.dlc)
}

pub fn base_game_bosses() -> impl Iterator<Item = &'static BossInfo> {
    BOSS_DATA.iter().filter(|boss| !boss.dlc)
}

/// Find the one boss with the given name.
///
/// Fails if the name is missing or shared by several encounters.
pub fn find_unique_boss(name: &str) -> Result<&'static BossInfo, RegistryError> {
    find_unique_in(BOSS_DATA, name)
}

pub(crate) fn find_unique_in<'a>(
    data: &'a [BossInfo],
    name: &str,
) -> Result<&'a BossInfo, RegistryError> {
    let mut matches = data.iter().filter(|boss| boss.name == name);
    let first = matches.next().ok_or_else(|| RegistryError::MissingBoss {
        name: name.to_string(),
    })?;
    let extra = matches.count();
    if extra > 0 {
        return Err(RegistryError::DuplicateBoss {
            name: name.to_string(),
            count: extra + 1,
        });
    }
    Ok(first)
}

/// The fallback Yhorm placement. See [`DEFAULT_YHORM_LOCATION`].
pub fn default_yhorm_location() -> &'static BossInfo {
    *DEFAULT_YHORM_LOCATION
}

/// Build every index and resolve the default Yhorm location up front.
///
/// Hosts should call this once at startup so a broken data table fails
/// there, as an error, rather than as a panic on first use.
pub fn init() -> Result<&'static BossInfo, RegistryError> {
    find_unique_boss(YHORM_NAME)?;
    LazyLock::force(&BOSS_LOOKUP);
    LazyLock::force(&FLAG_LOOKUP);
    Ok(*LazyLock::force(&DEFAULT_YHORM_LOCATION))
}

#[cfg(test)]
mod tests {
    use super::*;
    use hashbrown::HashSet;
    use phf::phf_set;

    const PHASE_ONE_BOSSES: [&str; 4] = [
        "King of the Storm",
        "Lothric, Younger Prince",
        "Sister Friede",
        "Slave Knight Gael 1",
    ];

    #[test]
    fn test_registry_size_is_pinned() {
        assert_eq!(all_bosses().len(), 29);
    }

    #[test]
    fn test_declaration_order() {
        let order: Vec<_> = all_bosses().iter().map(|b| (b.id, b.name)).collect();
        assert_eq!(
            order,
            [
                (4000800, "Iudex Gundyr"),
                (3000800, "Vordt of the Boreal Valley"),
                (3100800, "Curse-rotted Greatwood"),
                (3300850, "Crystal Sage"),
                (3500800, "Deacons of the Deep"),
                (3300801, "Abyss Watchers"),
                (3800800, "High Lord Wolnir"),
                (3700850, "Pontiff Sulyvahn"),
                (3800830, "Old Demon King"),
                (3900800, "Yhorm the Giant"),
                (3700800, "Aldrich, Devourer of Gods"),
                (3000899, "Dancer of the Boreal Valley"),
                (3010800, "Dragonslayer Armour"),
                (3000830, "Consumed King Oceiros"),
                (4000830, "Champion Gundyr"),
                (3200800, "Ancient Wyvern"),
                (3200850, "King of the Storm"),
                (3200851, "Nameless King"),
                (3410830, "Lothric, Younger Prince"),
                (3410832, "Lorian, Elder Prince"),
                (4500860, "Champion's Gravetender and Gravetender Greatwolf"),
                (4500801, "Sister Friede"),
                (4500800, "Blackflame Friede"),
                (5000801, "Demon Prince"),
                (5100800, "Halflight, Spear of the Church"),
                (5100850, "Darkeater Midir"),
                (5110801, "Slave Knight Gael 1"),
                (5110800, "Slave Knight Gael 2"),
                (4100800, "Lords of Cinder"),
            ]
        );
    }

    #[test]
    fn test_order_is_stable_across_reads() {
        let first: Vec<_> = all_bosses().iter().map(|b| b.id).collect();
        let second: Vec<_> = all_bosses().iter().map(|b| b.id).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_records_are_well_formed() {
        for boss in all_bosses() {
            assert!(!boss.name.trim().is_empty(), "empty name for id {}", boss.id);
            assert!(!boss.region.trim().is_empty(), "empty region for {}", boss.name);
            assert!(boss.id > 0, "bad id for {}", boss.name);
            assert!(!boss.locations.is_empty(), "{} unlocks nothing", boss.name);
        }
    }

    #[test]
    fn test_locations_follow_area_code_convention() {
        for boss in all_bosses() {
            for location in boss.locations.iter() {
                assert!(
                    split_location(location).is_some(),
                    "{} has malformed location {:?}",
                    boss.name,
                    location
                );
            }
        }
    }

    #[test]
    fn test_split_location() {
        assert_eq!(
            split_location("PW1: Valorheart - boss drop"),
            Some(("PW1", "Valorheart - boss drop"))
        );
        assert_eq!(split_location("Valorheart"), None);
        assert_eq!(split_location(": Valorheart"), None);
        assert_eq!(split_location("pw1: Valorheart"), None);
        assert_eq!(split_location("PW1: "), None);
    }

    #[test]
    fn test_phase_one_bosses_have_no_flag() {
        let flagless: HashSet<_> = all_bosses()
            .iter()
            .filter(|b| b.flag.is_none())
            .map(|b| b.name)
            .collect();
        let expected: HashSet<_> = PHASE_ONE_BOSSES.into_iter().collect();
        assert_eq!(flagless, expected);

        for boss in all_bosses() {
            assert_eq!(boss.is_final_phase(), !PHASE_ONE_BOSSES.contains(&boss.name));
        }
    }

    #[test]
    fn test_yhorm_is_unique_and_default() {
        assert_eq!(find_bosses_named(YHORM_NAME).count(), 1);
        let yhorm = find_unique_boss(YHORM_NAME).expect("Yhorm should be present");
        assert!(std::ptr::eq(yhorm, default_yhorm_location()));
        assert!(std::ptr::eq(yhorm, *DEFAULT_YHORM_LOCATION));
        assert_eq!(yhorm.region, "Profaned Capital");
        assert_eq!(yhorm.id, 3900800);
        assert_eq!(yhorm.flag, Some(13900800));
        assert!(yhorm.unlocks("PC: Soul of Yhorm the Giant"));
    }

    #[test]
    fn test_init_returns_default_location() {
        let yhorm = init().expect("bundled data should be valid");
        assert!(std::ptr::eq(yhorm, default_yhorm_location()));
    }

    #[test]
    fn test_default_location_shared_across_threads() {
        let expected = default_yhorm_location() as *const BossInfo as usize;
        std::thread::scope(|s| {
            let handles: Vec<_> = (0..4)
                .map(|_| s.spawn(|| default_yhorm_location() as *const BossInfo as usize))
                .collect();
            for handle in handles {
                assert_eq!(handle.join().unwrap(), expected);
            }
        });
    }

    static BROKEN_DATA: &[BossInfo] = &[
        BossInfo {
            name: "Twin",
            region: "Somewhere",
            id: 1,
            flag: Some(10),
            dlc: false,
            before_storm_ruler: false,
            locations: phf_set! {"XX: First"},
        },
        BossInfo {
            name: "Twin",
            region: "Somewhere Else",
            id: 2,
            flag: Some(20),
            dlc: false,
            before_storm_ruler: false,
            locations: phf_set! {"XX: Second"},
        },
    ];

    #[test]
    fn test_unique_lookup_rejects_missing_name() {
        let err = find_unique_in(BROKEN_DATA, YHORM_NAME).unwrap_err();
        assert!(matches!(err, RegistryError::MissingBoss { ref name } if name == YHORM_NAME));
    }

    #[test]
    fn test_unique_lookup_rejects_duplicates() {
        let err = find_unique_in(BROKEN_DATA, "Twin").unwrap_err();
        assert!(matches!(err, RegistryError::DuplicateBoss { count: 2, .. }));
        assert_eq!(err.to_string(), "expected exactly one boss named Twin, found 2");
    }

    #[test]
    fn test_lookup_by_id_and_flag() {
        assert_eq!(all_bosses().iter().map(|b| b.id).collect::<HashSet<_>>().len(), 29);
        for boss in all_bosses() {
            assert!(std::ptr::eq(lookup_boss(boss.id).unwrap(), boss));
            if let Some(flag) = boss.flag {
                assert!(std::ptr::eq(lookup_boss_by_flag(flag).unwrap(), boss));
            }
        }
        assert_eq!(lookup_boss(5110800).map(|b| b.name), Some("Slave Knight Gael 2"));
        assert_eq!(lookup_boss_by_flag(4500800).map(|b| b.name), Some("Blackflame Friede"));
        assert!(lookup_boss(0).is_none());
        assert!(lookup_boss_by_flag(0).is_none());
    }

    #[test]
    fn test_bosses_in_region() {
        let grand_archives: Vec<_> = bosses_in_region("Grand Archives").map(|b| b.name).collect();
        assert_eq!(grand_archives, ["Lothric, Younger Prince", "Lorian, Elder Prince"]);
        assert_eq!(bosses_in_region("Ringed City End").count(), 2);
        assert_eq!(bosses_in_region("Firelink Shrine").count(), 0);
    }

    #[test]
    fn test_regions_first_seen_order() {
        let regions = regions();
        assert_eq!(regions.len(), 26);
        assert_eq!(regions[0], "Cemetery of Ash");
        assert_eq!(regions[regions.len() - 1], "Kiln of the First Flame");
    }

    #[test]
    fn test_shared_locations_list_every_gate() {
        let gates: Vec<_> =
            bosses_unlocking("FS: Hawkwood's Shield - gravestone after Hawkwood leaves")
                .map(|b| b.name)
                .collect();
        assert_eq!(
            gates,
            [
                "Curse-rotted Greatwood",
                "Crystal Sage",
                "Deacons of the Deep",
                "Abyss Watchers",
            ]
        );
        assert_eq!(bosses_unlocking("XX: Nowhere").count(), 0);
    }

    #[test]
    fn test_dlc_split() {
        assert_eq!(dlc_bosses().count(), 8);
        assert_eq!(base_game_bosses().count(), 21);
        assert!(dlc_bosses().all(|b| !b.before_storm_ruler));
    }

    #[test]
    fn test_sorted_locations() {
        let yhorm = default_yhorm_location();
        assert_eq!(
            yhorm.sorted_locations(),
            [
                "PC: Cinders of a Lord - Yhorm the Giant",
                "PC: Siegbräu - Siegward after killing boss",
                "PC: Soul of Yhorm the Giant",
            ]
        );
    }
}
