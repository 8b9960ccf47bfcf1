// src/sql/troops.rs
//! Troop database dump: troops, fixed attribute and skill tables,
//! upgrade paths and equipment links.

use crate::config::keywords::{ATTRIBUTES, SKILLS};
use crate::core::sanitize::sql_quote;
use crate::scrape::ScrapeResult;

use super::{insert_header, sql_bool, values_body};

const BANNER: &str = "-- ===========================================";
const NO_EQUIPMENT: &str = "-- (No equipment data found)\n";

pub fn generate_sql(result: &ScrapeResult) -> String {
    let mut out: Vec<String> = vec![
        s!(BANNER),
        s!("-- Mount & Blade II: Bannerlord Troops Database"),
        join!(BANNER, "\n"),
    ];

    let troops: Vec<String> = result
        .troops
        .iter()
        .map(|t| sql_row!(t.troop_id, sql_quote(&t.name), t.tier, t.wage, sql_bool(t.is_mounted), t.culture_id))
        .collect();
    section(
        &mut out,
        "Troops",
        &["troop_id", "name", "tier", "wage", "is_mounted", "culture_id"],
        &troops,
    );

    let attributes: Vec<String> = ATTRIBUTES
        .iter()
        .enumerate()
        .map(|(i, a)| sql_row!(i + 1, sql_quote(a), "'Base character attribute'"))
        .collect();
    section(&mut out, "Attributes", &["attribute_id", "name", "description"], &attributes);

    let skills: Vec<String> = SKILLS
        .iter()
        .enumerate()
        .map(|(i, &(name, combat, attr))| {
            sql_row!(i + 1, sql_quote(name), sql_quote(&format!("{name} skill")), sql_bool(combat), attr)
        })
        .collect();
    section(
        &mut out,
        "Skills",
        &["skill_id", "name", "description", "is_combat_skill", "attribute_id"],
        &skills,
    );

    let upgrades: Vec<String> = result
        .upgrade_paths
        .iter()
        .map(|u| sql_row!(u.base_troop_id, u.upgraded_troop_id, u.xp_cost))
        .collect();
    section(
        &mut out,
        "Troop_Upgrade_Paths",
        &["base_troop_id", "upgraded_troop_id", "xp_cost"],
        &upgrades,
    );

    // BTreeSet iteration is already (troop_id, item_id, slot) order.
    let links: Vec<String> = result
        .equipment
        .iter()
        .map(|l| sql_row!(l.troop_id, l.item_id, sql_quote(&l.slot)))
        .collect();
    out.push(s!("-- Troop_Equipment_Junction Table"));
    out.push(insert_header("Troop_Equipment_Junction", &["troop_id", "item_id", "slot"]));
    if links.is_empty() {
        out.push(s!(NO_EQUIPMENT));
    } else {
        out.push(join!(&values_body(&links), "\n"));
    }

    out.join("\n")
}

fn section(out: &mut Vec<String>, table: &str, columns: &[&str], rows: &[String]) {
    out.push(format!("-- {table} Table"));
    out.push(insert_header(table, columns));
    out.push(join!(&values_body(rows), "\n"));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scrape::{EquipmentLink, Troop, UpgradeEdge};

    fn sample() -> ScrapeResult {
        let mut r = ScrapeResult::default();
        let culture_id = r.cultures.get_or_create("Sturgian");
        for (id, name) in [(1, "Sturgian Recruit"), (2, "Sturgian Warrior's Son")] {
            r.troops.push(Troop {
                name: s!(name),
                tier: id as u8,
                wage: 2 * id,
                is_mounted: id == 2,
                faction: s!("Sturgia"),
                troop_id: id,
                culture_id,
            });
        }
        r.upgrade_paths.push(UpgradeEdge { base_troop_id: 1, upgraded_troop_id: 2, xp_cost: 100 });
        r
    }

    #[test]
    fn troops_and_upgrades() {
        let sql = generate_sql(&sample());
        assert!(sql.starts_with(
            "-- ===========================================\n\
             -- Mount & Blade II: Bannerlord Troops Database\n\
             -- ===========================================\n\n\
             -- Troops Table\n\
             INSERT INTO Troops (troop_id, name, tier, wage, is_mounted, culture_id) VALUES\n  \
             (1, 'Sturgian Recruit', 1, 2, 0, 1),\n  \
             (2, 'Sturgian Warrior''s Son', 2, 4, 1, 1);\n\n"
        ));
        assert!(sql.contains("  (1, 'Vigor', 'Base character attribute'),\n"));
        assert!(sql.contains("  (6, 'Intelligence', 'Base character attribute');\n"));
        assert!(sql.contains("  (1, 'One Handed', 'One Handed skill', 1, 1),\n"));
        assert!(sql.contains("  (17, 'Engineering', 'Engineering skill', 0, 6);\n"));
        assert!(sql.contains(
            "INSERT INTO Troop_Upgrade_Paths (base_troop_id, upgraded_troop_id, xp_cost) VALUES\n  (1, 2, 100);\n"
        ));
        assert!(sql.ends_with(
            "INSERT INTO Troop_Equipment_Junction (troop_id, item_id, slot) VALUES\n-- (No equipment data found)\n"
        ));
    }

    #[test]
    fn equipment_sorted_and_unique() {
        let mut r = sample();
        for (troop_id, item_id) in [(2, 9), (1, 5), (2, 9), (1, 3)] {
            r.equipment.insert(EquipmentLink { troop_id, item_id, slot: s!("armors") });
        }
        let sql = generate_sql(&r);
        assert!(sql.ends_with(
            "VALUES\n  (1, 3, 'armors'),\n  (1, 5, 'armors'),\n  (2, 9, 'armors');\n"
        ));
    }
}
