// src/scrape/upgrades.rs
use std::collections::{HashMap, HashSet};

use crate::config::trees::FactionTree;

use super::model::{Troop, UpgradeEdge};

/// XP cost of the step out of position `i` in a path.
fn xp_cost(i: usize) -> u32 {
    (i as u32 + 1) * 100
}

/// Consecutive pairs of every path whose troops were both scraped.
/// Each (base, upgraded) pair is emitted once; the first cost seen wins.
pub fn build_upgrade_paths(trees: &[FactionTree], troops: &[Troop]) -> Vec<UpgradeEdge> {
    let ids: HashMap<&str, u32> = troops.iter().map(|t| (t.name.as_str(), t.troop_id)).collect();
    let mut seen = HashSet::new();
    let mut edges = Vec::new();

    for path in trees.iter().flat_map(|t| t.paths()) {
        for (i, pair) in path.windows(2).enumerate() {
            let (Some(&base), Some(&upgraded)) = (ids.get(pair[0]), ids.get(pair[1])) else {
                continue;
            };
            if seen.insert((base, upgraded)) {
                edges.push(UpgradeEdge {
                    base_troop_id: base,
                    upgraded_troop_id: upgraded,
                    xp_cost: xp_cost(i),
                });
            }
        }
    }
    edges
}

#[cfg(test)]
mod tests {
    use super::*;

    fn troop(name: &str, id: u32) -> Troop {
        Troop {
            name: s!(name),
            tier: 1,
            wage: 2,
            is_mounted: false,
            faction: s!("Test"),
            troop_id: id,
            culture_id: 1,
        }
    }

    fn edge(b: u32, u: u32, xp: u32) -> UpgradeEdge {
        UpgradeEdge { base_troop_id: b, upgraded_troop_id: u, xp_cost: xp }
    }

    #[test]
    fn consecutive_pairs_once() {
        let tree = FactionTree {
            faction: "Test",
            culture: "Testish",
            common: &[&["A", "B", "C"], &["A", "B", "C"]],
            noble: &[],
        };
        let troops = [troop("A", 1), troop("B", 2), troop("C", 3)];
        assert_eq!(
            build_upgrade_paths(&[tree], &troops),
            vec![edge(1, 2, 100), edge(2, 3, 200)]
        );
    }

    #[test]
    fn missing_troop_breaks_the_chain() {
        let tree = FactionTree {
            faction: "Test",
            culture: "Testish",
            common: &[&["A", "B", "C", "D"]],
            noble: &[],
        };
        let troops = [troop("A", 1), troop("C", 2), troop("D", 3)];
        assert_eq!(build_upgrade_paths(&[tree], &troops), vec![edge(2, 3, 300)]);
    }

    #[test]
    fn shared_prefix_keeps_first_cost() {
        let tree = FactionTree {
            faction: "Test",
            culture: "Testish",
            common: &[&["A", "B"]],
            noble: &[&["X", "A", "B"]],
        };
        let troops = [troop("A", 1), troop("B", 2), troop("X", 3)];
        assert_eq!(
            build_upgrade_paths(&[tree], &troops),
            vec![edge(1, 2, 100), edge(3, 1, 100)]
        );
    }
}
