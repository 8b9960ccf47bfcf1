// src/config/keywords.rs

/// Name keywords per tier, most specific category first.
pub const TIER_KEYWORDS: &[(u8, &[&str])] = &[
    (6, &["champion", "elite", "master", "khan's guard", "banner knight"]),
    (5, &["veteran", "heavy", "sergeant", "cataphract", "druzhinnik"]),
    (4, &["trained", "regular", "picked", "hardened", "legionary"]),
    (3, &["warrior", "soldier", "archer", "cavalry", "footman", "infantry"]),
    (2, &["tribesman", "woodsman", "skirmisher", "hunter", "raider"]),
    (1, &["recruit", "levy", "nomad", "youth", "son"]),
];

pub const DEFAULT_TIER: u8 = 1;

/// Page marker word after `tier-`.
pub const TIER_WORDS: &[(&str, u8)] = &[
    ("one", 1),
    ("two", 2),
    ("three", 3),
    ("four", 4),
    ("five", 5),
    ("six", 6),
];

/// Daily wage by tier, used when the page states none.
pub const TIER_WAGES: &[(u8, u32)] = &[(1, 2), (2, 4), (3, 8), (4, 12), (5, 18), (6, 25)];

pub const DEFAULT_WAGE: u32 = 2;

pub const MOUNTED_KEYWORDS: &[&str] = &[
    "cavalry", "horseman", "horse archer", "lancer", "knight",
    "cataphract", "faris", "mameluke", "equite", "bucellarii",
    "druzhinnik", "kheshig", "darkhan", "mounted",
];

/// Equipment table row label → link slot.
pub const EQUIPMENT_SLOTS: &[(&str, &str)] = &[
    ("weapons", "weapon"),
    ("weapon", "weapon"),
    ("shield", "shield"),
    ("head armor", "head_armor"),
    ("shoulder armor", "shoulder_armor"),
    ("body armor", "body_armor"),
    ("hand armor", "hand_armor"),
    ("leg armor", "leg_armor"),
    ("foot armor", "foot_armor"),
    ("mount", "horse"),
    ("mount harness", "horse_harness"),
];

pub const ATTRIBUTES: &[&str] = &["Vigor", "Control", "Endurance", "Cunning", "Social", "Intelligence"];

/// (name, is_combat_skill, attribute_id)
pub const SKILLS: &[(&str, bool, u32)] = &[
    ("One Handed", true, 1), ("Two Handed", true, 1), ("Polearm", true, 1),
    ("Bow", true, 2), ("Crossbow", true, 2), ("Throwing", true, 2),
    ("Riding", true, 3), ("Athletics", true, 3),
    ("Tactics", false, 4), ("Scouting", false, 4), ("Roguery", false, 4),
    ("Charm", false, 5), ("Leadership", false, 5), ("Trade", false, 5),
    ("Steward", false, 6), ("Medicine", false, 6), ("Engineering", false, 6),
];
