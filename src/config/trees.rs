// src/config/trees.rs
//! Known troop upgrade paths per faction.
//!
//! Each path is an ordered promotion sequence. Paths share their lower
//! troops, so a name can appear in several of them.

pub type Path = &'static [&'static str];

#[derive(Clone, Copy, Debug)]
pub struct FactionTree {
    /// Faction key, also the wiki's faction label.
    pub faction: &'static str,
    /// Culture name used for the culture id.
    pub culture: &'static str,
    pub common: &'static [Path],
    pub noble: &'static [Path],
}

impl FactionTree {
    /// Common paths, then noble paths.
    pub fn paths(&self) -> impl Iterator<Item = Path> + '_ {
        self.common.iter().chain(self.noble.iter()).copied()
    }
}

pub const FACTIONS: &[FactionTree] = &[
    FactionTree {
        faction: "Aserai",
        culture: "Aserai",
        common: &[
            &["Aserai Recruit", "Aserai Tribesman", "Aserai Footman", "Aserai Infantry", "Aserai Veteran Infantry"],
            &["Aserai Recruit", "Aserai Tribesman", "Aserai Skirmisher", "Aserai Veteran Skirmisher", "Aserai Master Skirmisher"],
            &["Aserai Recruit", "Aserai Mameluke Soldier", "Aserai Mameluke Axeman", "Aserai Mameluke Cavalry", "Aserai Mameluke Heavy Cavalry"],
            &["Aserai Recruit", "Aserai Mameluke Soldier", "Aserai Mameluke Regular", "Aserai Mameluke Cavalry", "Aserai Mameluke Heavy Cavalry"],
            &["Aserai Recruit", "Aserai Tribesman", "Aserai Light Archer", "Aserai Archer", "Aserai Master Archer"],
        ],
        noble: &[
            &["Aserai Youth", "Aserai Tribal Horseman", "Aserai Faris", "Aserai Veteran Faris", "Aserai Vanguard Faris"],
        ],
    },
    FactionTree {
        faction: "Battania",
        culture: "Battanian",
        common: &[
            &["Battanian Recruit", "Battanian Clanwarrior", "Battanian Trained Warrior", "Battanian Picked Warrior", "Battanian Veteran Warrior"],
            &["Battanian Recruit", "Battanian Wood Runner", "Battanian Raider", "Battanian Scout", "Battanian Veteran Scout"],
            &["Battanian Recruit", "Battanian Clanwarrior", "Battanian Woodrunner", "Battanian Skirmisher", "Battanian Veteran Skirmisher"],
            &["Battanian Recruit", "Battanian Trained Warrior", "Battanian Oathsworn", "Battanian Hero"],
        ],
        noble: &[
            &["Battanian Highborn Youth", "Battanian Highborn Warrior", "Battanian Hero", "Battanian Fian", "Battanian Fian Champion"],
        ],
    },
    FactionTree {
        faction: "Empire",
        culture: "Imperial",
        common: &[
            &["Imperial Recruit", "Imperial Infantryman", "Imperial Trained Infantryman", "Imperial Legionary", "Imperial Veteran Legionary", "Imperial Palatine Guard"],
            &["Imperial Recruit", "Imperial Infantryman", "Imperial Trained Infantryman", "Imperial Menavliaton", "Imperial Elite Menavliaton"],
            &["Imperial Recruit", "Imperial Infantryman", "Imperial Archer", "Imperial Veteran Archer", "Imperial Master Archer"],
            &["Imperial Recruit", "Imperial Infantryman", "Imperial Crossbowman", "Imperial Sergeant Crossbowman"],
        ],
        noble: &[
            &["Imperial Vigla Recruit", "Imperial Equite", "Imperial Heavy Horseman", "Imperial Cataphract", "Imperial Elite Cataphract"],
            &["Imperial Vigla Recruit", "Imperial Bucellarii", "Imperial Bucellarii Heavy Cavalry"],
        ],
    },
    FactionTree {
        faction: "Khuzait",
        culture: "Khuzait",
        common: &[
            &["Khuzait Nomad", "Khuzait Tribal Warrior", "Khuzait Spearman", "Khuzait Lancer"],
            &["Khuzait Nomad", "Khuzait Tribal Warrior", "Khuzait Hunter", "Khuzait Marksman", "Khuzait Master Archer"],
            &["Khuzait Nomad", "Khuzait Raider", "Khuzait Horse Archer", "Khuzait Horse Archer", "Khuzait Heavy Horse Archer"],
        ],
        noble: &[
            &["Khuzait Noble's Son", "Khuzait Qanqli", "Khuzait Torguud", "Khuzait Kheshig", "Khuzait Khan's Guard"],
            &["Khuzait Noble's Son", "Khuzait Darkhan", "Khuzait Heavy Lancer"],
        ],
    },
    FactionTree {
        faction: "Sturgia",
        culture: "Sturgian",
        common: &[
            &["Sturgian Recruit", "Sturgian Warrior", "Sturgian Soldier", "Sturgian Spearman", "Sturgian Ulfhednar", "Sturgian Shock Warrior"],
            &["Sturgian Recruit", "Sturgian Woodsman", "Sturgian Hunter", "Sturgian Veteran Bowman"],
            &["Sturgian Recruit", "Sturgian Warrior", "Sturgian Hardened Brigand", "Sturgian Brigand"],
            &["Sturgian Recruit", "Sturgian Warrior", "Sturgian Soldier", "Sturgian Axeman", "Sturgian Heavy Axeman"],
        ],
        noble: &[
            &["Sturgian Warrior Son", "Varyag", "Varyag Veteran", "Sturgian Druzhinnik", "Sturgian Druzhinnik Champion"],
        ],
    },
    FactionTree {
        faction: "Vlandia",
        culture: "Vlandian",
        common: &[
            &["Vlandian Recruit", "Vlandian Footman", "Vlandian Infantry", "Vlandian Voulgier"],
            &["Vlandian Recruit", "Vlandian Levy Crossbowman", "Vlandian Crossbowman", "Vlandian Hardened Crossbowman", "Vlandian Sharpshooter"],
        ],
        noble: &[
            &["Vlandian Squire", "Vlandian Gallant", "Vlandian Knight", "Vlandian Champion", "Vlandian Banner Knight"],
        ],
    },
];
