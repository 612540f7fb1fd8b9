//! Dark Souls III boss encounter data
//!
//! Records are listed in full-game traversal order. Consumers reason about
//! progression from this order, so entries must never be reordered.
//!
//! The static randomizer splits some fights into one encounter per phase.
//! Each phase can hold Yhorm on its own, so every phase gets a record; only
//! the final phase carries a defeat flag.

use phf::phf_set;

use super::bosses::BossInfo;

pub static BOSS_DATA: &[BossInfo] = &[
    // ─────────────────────────────────────────────────────────────────────────
    // Base game
    // ─────────────────────────────────────────────────────────────────────────
    BossInfo {
        name: "Iudex Gundyr",
        region: "Cemetery of Ash",
        id: 4000800,
        flag: Some(14000800),
        dlc: false,
        before_storm_ruler: true,
        locations: phf_set! {"CA: Coiled Sword - boss drop"},
    },
    BossInfo {
        name: "Vordt of the Boreal Valley",
        region: "High Wall of Lothric",
        id: 3000800,
        flag: Some(13000800),
        dlc: false,
        before_storm_ruler: true,
        locations: phf_set! {"HWL: Soul of Boreal Valley Vordt"},
    },
    BossInfo {
        name: "Curse-rotted Greatwood",
        region: "Undead Settlement",
        id: 3100800,
        flag: Some(13100800),
        dlc: false,
        before_storm_ruler: false,
        locations: phf_set! {
            "US: Soul of the Rotted Greatwood",
            "US: Transposing Kiln - boss drop",
            "US: Wargod Wooden Shield - Pit of Hollows",
            "FS: Hawkwood's Shield - gravestone after Hawkwood leaves",
            "FS: Sunset Shield - by grave after killing Hodrick w/Sirris",
            "US: Sunset Helm - Pit of Hollows after killing Hodrick w/Sirris",
            "US: Sunset Armor - pit of hollows after killing Hodrick w/Sirris",
            "US: Sunset Gauntlets - pit of hollows after killing Hodrick w/Sirris",
            "US: Sunset Leggings - pit of hollows after killing Hodrick w/Sirris",
            "FS: Sunless Talisman - Sirris, kill GA boss",
            "FS: Sunless Veil - shop, Sirris quest, kill GA boss",
            "FS: Sunless Armor - shop, Sirris quest, kill GA boss",
            "FS: Sunless Gauntlets - shop, Sirris quest, kill GA boss",
            "FS: Sunless Leggings - shop, Sirris quest, kill GA boss",
        },
    },
    BossInfo {
        name: "Crystal Sage",
        region: "Road of Sacrifices",
        id: 3300850,
        flag: Some(13300850),
        dlc: false,
        before_storm_ruler: false,
        locations: phf_set! {
            "RS: Soul of a Crystal Sage",
            "FS: Sage's Big Hat - shop after killing RS boss",
            "FS: Hawkwood's Shield - gravestone after Hawkwood leaves",
        },
    },
    BossInfo {
        name: "Deacons of the Deep",
        region: "Cathedral of the Deep",
        id: 3500800,
        flag: Some(13500800),
        dlc: false,
        before_storm_ruler: false,
        locations: phf_set! {
            "CD: Soul of the Deacons of the Deep",
            "CD: Small Doll - boss drop",
            "CD: Archdeacon White Crown - boss room after killing boss",
            "CD: Archdeacon Holy Garb - boss room after killing boss",
            "CD: Archdeacon Skirt - boss room after killing boss",
            // Anri and Horace stay in Road of Sacrifices until Deacons falls
            "IBV: Ring of the Evil Eye - Anri",
            "FS: Hawkwood's Shield - gravestone after Hawkwood leaves",
            "SL: Llewellyn Shield - Horace drop",
            "FS: Executioner Helm - shop after killing Horace",
            "FS: Executioner Armor - shop after killing Horace",
            "FS: Executioner Gauntlets - shop after killing Horace",
            "FS: Executioner Leggings - shop after killing Horace",
        },
    },
    BossInfo {
        name: "Abyss Watchers",
        region: "Farron Keep",
        id: 3300801,
        flag: Some(13300800),
        dlc: false,
        before_storm_ruler: true,
        locations: phf_set! {
            "FK: Soul of the Blood of the Wolf",
            "FK: Cinders of a Lord - Abyss Watcher",
            "FS: Undead Legion Helm - shop after killing FK boss",
            "FS: Undead Legion Armor - shop after killing FK boss",
            "FS: Undead Legion Gauntlet - shop after killing FK boss",
            "FS: Undead Legion Leggings - shop after killing FK boss",
            "FS: Farron Ring - Hawkwood",
            "FS: Hawkwood's Shield - gravestone after Hawkwood leaves",
        },
    },
    BossInfo {
        name: "High Lord Wolnir",
        region: "Catacombs of Carthus",
        id: 3800800,
        flag: Some(13800800),
        dlc: false,
        before_storm_ruler: true,
        locations: phf_set! {
            "CC: Soul of High Lord Wolnir",
            "FS: Wolnir's Crown - shop after killing CC boss",
            "CC: Homeward Bone - Irithyll bridge",
            "CC: Pontiff's Right Eye - Irithyll bridge, miniboss drop",
        },
    },
    BossInfo {
        name: "Pontiff Sulyvahn",
        region: "Irithyll of the Boreal Valley",
        id: 3700850,
        flag: Some(13700800),
        dlc: false,
        before_storm_ruler: false,
        locations: phf_set! {"IBV: Soul of Pontiff Sulyvahn"},
    },
    BossInfo {
        name: "Old Demon King",
        region: "Smouldering Lake",
        id: 3800830,
        flag: Some(13800830),
        dlc: false,
        before_storm_ruler: false,
        locations: phf_set! {"SL: Soul of the Old Demon King"},
    },
    BossInfo {
        name: "Yhorm the Giant",
        region: "Profaned Capital",
        id: 3900800,
        flag: Some(13900800),
        dlc: false,
        before_storm_ruler: false,
        locations: phf_set! {
            "PC: Soul of Yhorm the Giant",
            "PC: Cinders of a Lord - Yhorm the Giant",
            "PC: Siegbräu - Siegward after killing boss",
        },
    },
    BossInfo {
        name: "Aldrich, Devourer of Gods",
        region: "Anor Londo",
        id: 3700800,
        flag: Some(13700850),
        dlc: false,
        before_storm_ruler: false,
        locations: phf_set! {
            "AL: Soul of Aldrich",
            "AL: Cinders of a Lord - Aldrich",
            "FS: Smough's Helm - shop after killing AL boss",
            "FS: Smough's Armor - shop after killing AL boss",
            "FS: Smough's Gauntlets - shop after killing AL boss",
            "FS: Smough's Leggings - shop after killing AL boss",
            "AL: Sun Princess Ring - dark cathedral, after boss",
            "FS: Leonhard's Garb - shop after killing Leonhard",
            "FS: Leonhard's Gauntlets - shop after killing Leonhard",
            "FS: Leonhard's Trousers - shop after killing Leonhard",
        },
    },
    BossInfo {
        name: "Dancer of the Boreal Valley",
        region: "Lothric Castle Entrance",
        id: 3000899,
        flag: Some(13000890),
        dlc: false,
        before_storm_ruler: false,
        locations: phf_set! {
            "HWL: Soul of the Dancer",
            "FS: Dancer's Crown - shop after killing LC entry boss",
            "FS: Dancer's Armor - shop after killing LC entry boss",
            "FS: Dancer's Gauntlets - shop after killing LC entry boss",
            "FS: Dancer's Leggings - shop after killing LC entry boss",
        },
    },
    BossInfo {
        name: "Dragonslayer Armour",
        region: "Lothric Castle End",
        id: 3010800,
        flag: Some(13010800),
        dlc: false,
        before_storm_ruler: false,
        locations: phf_set! {
            "LC: Soul of Dragonslayer Armour",
            "FS: Morne's Helm - shop after killing Eygon or LC boss",
            "FS: Morne's Armor - shop after killing Eygon or LC boss",
            "FS: Morne's Gauntlets - shop after killing Eygon or LC boss",
            "FS: Morne's Leggings - shop after killing Eygon or LC boss",
            "LC: Titanite Chunk - down stairs after boss",
        },
    },
    BossInfo {
        name: "Consumed King Oceiros",
        region: "Consumed King's Garden",
        id: 3000830,
        flag: Some(13000830),
        dlc: false,
        before_storm_ruler: false,
        locations: phf_set! {
            "CKG: Soul of Consumed Oceiros",
            "CKG: Titanite Scale - tomb, chest #1",
            "CKG: Titanite Scale - tomb, chest #2",
            "CKG: Drakeblood Helm - tomb, after killing AP mausoleum NPC",
            "CKG: Drakeblood Armor - tomb, after killing AP mausoleum NPC",
            "CKG: Drakeblood Gauntlets - tomb, after killing AP mausoleum NPC",
            "CKG: Drakeblood Leggings - tomb, after killing AP mausoleum NPC",
        },
    },
    BossInfo {
        name: "Champion Gundyr",
        region: "Untended Graves",
        id: 4000830,
        flag: Some(14000830),
        dlc: false,
        before_storm_ruler: false,
        locations: phf_set! {
            "UG: Soul of Champion Gundyr",
            "FS: Gundyr's Helm - shop after killing UG boss",
            "FS: Gundyr's Armor - shop after killing UG boss",
            "FS: Gundyr's Gauntlets - shop after killing UG boss",
            "FS: Gundyr's Leggings - shop after killing UG boss",
            "UG: Hornet Ring - environs, right of main path after killing FK boss",
            "UG: Chaos Blade - environs, left of shrine",
            "UG: Blacksmith Hammer - shrine, Andre's room",
            "UG: Eyes of a Fire Keeper - shrine, Irina's room",
            "UG: Coiled Sword Fragment - shrine, dead bonfire",
            "UG: Soul of a Crestfallen Knight - environs, above shrine entrance",
            "UG: Life Ring+3 - shrine, behind big throne",
            "UG: Ring of Steel Protection+1 - environs, behind bell tower",
            "FS: Ring of Sacrifice - Yuria shop",
            "UG: Ember - shop",
            "UG: Priestess Ring - shop",
            "UG: Wolf Knight Helm - shop after killing FK boss",
            "UG: Wolf Knight Armor - shop after killing FK boss",
            "UG: Wolf Knight Gauntlets - shop after killing FK boss",
            "UG: Wolf Knight Leggings - shop after killing FK boss",
        },
    },
    BossInfo {
        name: "Ancient Wyvern",
        region: "Archdragon Peak Fort",
        id: 3200800,
        flag: Some(13200800),
        dlc: false,
        before_storm_ruler: false,
        locations: phf_set! {"AP: Dragon Head Stone - fort, boss drop"},
    },
    // Nameless King, phase 1
    BossInfo {
        name: "King of the Storm",
        region: "Archdragon Peak End",
        id: 3200850,
        flag: None,
        dlc: false,
        before_storm_ruler: false,
        locations: phf_set! {
            "AP: Soul of the Nameless King",
            "FS: Golden Crown - shop after killing AP boss",
            "FS: Dragonscale Armor - shop after killing AP boss",
            "FS: Golden Bracelets - shop after killing AP boss",
            "FS: Dragonscale Waistcloth - shop after killing AP boss",
            "AP: Titanite Slab - plaza",
            "AP: Covetous Gold Serpent Ring+2 - plaza",
            "AP: Dragonslayer Helm - plaza",
            "AP: Dragonslayer Armor - plaza",
            "AP: Dragonslayer Gauntlets - plaza",
            "AP: Dragonslayer Leggings - plaza",
        },
    },
    BossInfo {
        name: "Nameless King",
        region: "Archdragon Peak",
        id: 3200851,
        flag: Some(13200850),
        dlc: false,
        before_storm_ruler: false,
        locations: phf_set! {
            "AP: Soul of the Nameless King",
            "FS: Golden Crown - shop after killing AP boss",
            "FS: Dragonscale Armor - shop after killing AP boss",
            "FS: Golden Bracelets - shop after killing AP boss",
            "FS: Dragonscale Waistcloth - shop after killing AP boss",
            "AP: Titanite Slab - plaza",
            "AP: Covetous Gold Serpent Ring+2 - plaza",
            "AP: Dragonslayer Helm - plaza",
            "AP: Dragonslayer Armor - plaza",
            "AP: Dragonslayer Gauntlets - plaza",
            "AP: Dragonslayer Leggings - plaza",
        },
    },
    // Twin Princes, phase 1
    BossInfo {
        name: "Lothric, Younger Prince",
        region: "Grand Archives",
        id: 3410830,
        flag: None,
        dlc: false,
        before_storm_ruler: false,
        locations: phf_set! {
            "GA: Soul of the Twin Princes",
            "GA: Cinders of a Lord - Lothric Prince",
            "FS: Lorian's Helm - shop after killing GA boss",
            "FS: Lorian's Armor - shop after killing GA boss",
            "FS: Lorian's Gauntlets - shop after killing GA boss",
            "FS: Lorian's Leggings - shop after killing GA boss",
        },
    },
    BossInfo {
        name: "Lorian, Elder Prince",
        region: "Grand Archives",
        id: 3410832,
        flag: Some(13410830),
        dlc: false,
        before_storm_ruler: false,
        locations: phf_set! {
            "GA: Soul of the Twin Princes",
            "GA: Cinders of a Lord - Lothric Prince",
            "FS: Lorian's Helm - shop after killing GA boss",
            "FS: Lorian's Armor - shop after killing GA boss",
            "FS: Lorian's Gauntlets - shop after killing GA boss",
            "FS: Lorian's Leggings - shop after killing GA boss",
        },
    },
    // ─────────────────────────────────────────────────────────────────────────
    // Ashes of Ariandel
    // ─────────────────────────────────────────────────────────────────────────
    BossInfo {
        name: "Champion's Gravetender and Gravetender Greatwolf",
        region: "Painted World of Ariandel Lower",
        id: 4500860,
        flag: Some(14500860),
        dlc: true,
        before_storm_ruler: false,
        locations: phf_set! {"PW1: Valorheart - boss drop"},
    },
    // Friede, phase 1
    BossInfo {
        name: "Sister Friede",
        region: "Painted World of Ariandel End",
        id: 4500801,
        flag: None,
        dlc: true,
        before_storm_ruler: false,
        locations: phf_set! {
            "PW2: Soul of Sister Friede",
            "PW2: Titanite Slab - boss drop",
            "PW1: Titanite Slab - Corvian",
            "FS: Ordained Hood - shop after killing PW2 boss",
            "FS: Ordained Dress - shop after killing PW2 boss",
            "FS: Ordained Trousers - shop after killing PW2 boss",
        },
    },
    BossInfo {
        name: "Blackflame Friede",
        region: "Painted World of Ariandel End",
        id: 4500800,
        flag: Some(4500800),
        dlc: true,
        before_storm_ruler: false,
        locations: phf_set! {
            "PW2: Soul of Sister Friede",
            "PW1: Titanite Slab - Corvian",
            "FS: Ordained Hood - shop after killing PW2 boss",
            "FS: Ordained Dress - shop after killing PW2 boss",
            "FS: Ordained Trousers - shop after killing PW2 boss",
        },
    },
    // ─────────────────────────────────────────────────────────────────────────
    // The Ringed City
    // ─────────────────────────────────────────────────────────────────────────
    BossInfo {
        name: "Demon Prince",
        region: "Dreg Heap",
        id: 5000801,
        flag: Some(15000800),
        dlc: true,
        before_storm_ruler: false,
        locations: phf_set! {
            "DH: Soul of the Demon Prince",
            "DH: Small Envoy Banner - boss drop",
        },
    },
    BossInfo {
        name: "Halflight, Spear of the Church",
        region: "Ringed City Midway",
        id: 5100800,
        flag: Some(15100800),
        dlc: true,
        before_storm_ruler: false,
        locations: phf_set! {
            "RC: Titanite Slab - mid boss drop",
            "RC: Titanite Slab - ashes, NPC drop",
            "RC: Titanite Slab - ashes, mob drop",
            "RC: Filianore's Spear Ornament - mid boss drop",
            "RC: Crucifix of the Mad King - ashes, NPC drop",
            "RC: Shira's Crown - Shira's room after killing ashes NPC",
            "RC: Shira's Armor - Shira's room after killing ashes NPC",
            "RC: Shira's Gloves - Shira's room after killing ashes NPC",
            "RC: Shira's Trousers - Shira's room after killing ashes NPC",
        },
    },
    BossInfo {
        name: "Darkeater Midir",
        region: "Ringed City Hidden",
        id: 5100850,
        flag: Some(15100850),
        dlc: true,
        before_storm_ruler: false,
        locations: phf_set! {
            "RC: Soul of Darkeater Midir",
            "RC: Spears of the Church - hidden boss drop",
        },
    },
    // Gael, phase 1. The ashes drops are reachable before the fight starts,
    // but once it is triggered it has to be won first.
    BossInfo {
        name: "Slave Knight Gael 1",
        region: "Ringed City End",
        id: 5110801,
        flag: None,
        dlc: true,
        before_storm_ruler: false,
        locations: phf_set! {
            "RC: Soul of Slave Knight Gael",
            "RC: Blood of the Dark Soul - end boss drop",
            "RC: Titanite Slab - ashes, mob drop",
            "RC: Titanite Slab - ashes, NPC drop",
            "RC: Sacred Chime of Filianore - ashes, NPC drop",
            "RC: Crucifix of the Mad King - ashes, NPC drop",
            "RC: Shira's Crown - Shira's room after killing ashes NPC",
            "RC: Shira's Armor - Shira's room after killing ashes NPC",
            "RC: Shira's Gloves - Shira's room after killing ashes NPC",
            "RC: Shira's Trousers - Shira's room after killing ashes NPC",
        },
    },
    BossInfo {
        name: "Slave Knight Gael 2",
        region: "Ringed City End",
        id: 5110800,
        flag: Some(15110800),
        dlc: true,
        before_storm_ruler: false,
        locations: phf_set! {
            "RC: Soul of Slave Knight Gael",
            "RC: Blood of the Dark Soul - end boss drop",
            "RC: Titanite Slab - ashes, mob drop",
            "RC: Titanite Slab - ashes, NPC drop",
            "RC: Sacred Chime of Filianore - ashes, NPC drop",
            "RC: Crucifix of the Mad King - ashes, NPC drop",
            "RC: Shira's Crown - Shira's room after killing ashes NPC",
            "RC: Shira's Armor - Shira's room after killing ashes NPC",
            "RC: Shira's Gloves - Shira's room after killing ashes NPC",
            "RC: Shira's Trousers - Shira's room after killing ashes NPC",
        },
    },
    // ─────────────────────────────────────────────────────────────────────────
    // Finale
    // ─────────────────────────────────────────────────────────────────────────
    BossInfo {
        name: "Lords of Cinder",
        region: "Kiln of the First Flame",
        id: 4100800,
        flag: Some(14100800),
        dlc: false,
        before_storm_ruler: false,
        locations: phf_set! {"KFF: Soul of the Lords"},
    },
];
