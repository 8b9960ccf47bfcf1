// src/config/aliases.rs

/// Generic wiki names → a concrete item already in the map.
pub const GENERIC_ALIASES: &[(&str, &str)] = &[
    ("Horse", "Hunter"),
    ("Bow", "Hunting Bow"),
    ("Sword", "Iron Arming Sword"),
    ("Spear", "Simple Spear"),
    ("Axe", "Hatchet"),
    ("Mace", "Club"),
];

/// Wiki name → game data name, curated by hand.
///
/// `None` and self-mapped entries are still awaiting a lookup in the game
/// data; they resolve through approximate matching.
pub const CURATED_ALIASES: &[(&str, Option<&str>)] = &[
    // Battanian equipment
    ("Highland Spiked Club", Some("Highland Spiked Club")),
    ("Highland Villager Tunic", Some("Belted Tunic")),
    ("Highland Tunic", Some("Light Tunic")),
    ("Tasseled Highland Cloak", None),
    ("Highland Furred Cloak", None),
    // Common armor variations
    ("Wrapped Shoes", Some("Wrapped Shoes")),
    ("Rough Tied Boots", Some("Rough Tied Boots")),
    ("Buttoned Leather Bracers", Some("Buttoned Leather Bracers")),
];
