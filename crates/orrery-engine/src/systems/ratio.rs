//! Display-ratio annotation: "Nx the next one down".
//!
//! Runs once per build, after layout. The sun and planets rank in one
//! ladder; moons rank per parent planet and are never compared across
//! chains.

use std::cmp::Ordering;

use crate::api::types::NodeId;
use crate::core::galaxy::GalaxyState;
use crate::core::node::NodeKind;

/// Annotate size ratios, next-entity symbols, and sun multipliers.
pub fn annotate(galaxy: &mut GalaxyState) {
    let sun_weight = galaxy.sun().map(|s| s.weight).unwrap_or(0.0);

    let mut top: Vec<(NodeId, f64, String)> = galaxy
        .iter()
        .filter(|n| matches!(n.kind, NodeKind::Sun | NodeKind::Planet))
        .map(|n| (n.id.clone(), n.weight, n.symbol.clone()))
        .collect();
    apply_ladder(galaxy, &mut top);

    let planet_ids: Vec<NodeId> = galaxy.planets().map(|p| p.id.clone()).collect();
    for pid in planet_ids {
        let mut group: Vec<(NodeId, f64, String)> = galaxy
            .moons_of(&pid)
            .map(|n| (n.id.clone(), n.weight, n.symbol.clone()))
            .collect();
        apply_ladder(galaxy, &mut group);
    }

    for node in galaxy.iter_mut() {
        if node.kind != NodeKind::Sun {
            node.sun_multiplier = if node.weight > 0.0 {
                Some(sun_weight / node.weight)
            } else {
                None
            };
        }
    }
}

/// Sort one ranking scope descending and write each entry's ratio to the
/// next-smaller entry. The smallest gets None, as does anything whose
/// next-smaller weight is not positive.
fn apply_ladder(galaxy: &mut GalaxyState, entries: &mut Vec<(NodeId, f64, String)>) {
    entries.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal));
    for i in 0..entries.len() {
        let (ratio, symbol) = match entries.get(i + 1) {
            Some((_, next_weight, next_symbol)) if *next_weight > 0.0 => (
                Some(entries[i].1 / *next_weight),
                Some(next_symbol.clone()),
            ),
            _ => (None, None),
        };
        if let Some(node) = galaxy.get_mut(&entries[i].0) {
            node.size_ratio = ratio;
            node.next_symbol = symbol;
        }
    }
}
