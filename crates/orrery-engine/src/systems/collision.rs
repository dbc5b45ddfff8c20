//! Scoped moon collision resolution.
//!
//! Moons are the only bodies that collide. Each moon is checked against
//! every other moon (strong push when they share a parent planet, weak
//! across chains) and against its own parent planet (always strong).
//! The response is radial only: the orbit radius grows, the angle is
//! untouched, and the stretch is clamped so decay can always bring the
//! moon home. Positions and radii stay fixed during one pass, so the
//! one-sided per-moon response is order-independent; the counterpart
//! gets its own push on its own turn.

use std::collections::HashMap;

use glam::DVec2;

use crate::api::config::GalaxyConfig;
use crate::api::types::NodeId;
use crate::core::galaxy::GalaxyState;

struct MoonView {
    id: NodeId,
    pos: DVec2,
    radius: f64,
    parent: Option<NodeId>,
}

/// One all-pairs resolution pass over the moons. O(moons²); a spatial
/// partition replacement must keep the same/cross-parent asymmetry.
pub fn resolve_moon_collisions(state: &mut GalaxyState, config: &GalaxyConfig) {
    let moons: Vec<MoonView> = state
        .moons()
        .map(|m| MoonView {
            id: m.id.clone(),
            pos: m.pos,
            radius: m.radius,
            parent: m.parent.clone(),
        })
        .collect();
    if moons.is_empty() {
        return;
    }

    let planets: HashMap<NodeId, (DVec2, f64)> = state
        .planets()
        .map(|p| (p.id.clone(), (p.pos, p.radius)))
        .collect();

    for moon in &moons {
        let base = match state.base_orbit(&moon.id) {
            Some(b) => b,
            None => continue,
        };
        let limit = base * config.max_orbit_stretch;

        let mut pushes: Vec<f64> = Vec::new();

        for other in &moons {
            if other.id == moon.id {
                continue;
            }
            let min_dist = moon.radius + other.radius + config.collision_padding;
            let dist = (moon.pos - other.pos).length();
            if dist < min_dist {
                let strength = if moon.parent == other.parent {
                    config.same_parent_strength
                } else {
                    config.cross_parent_strength
                };
                pushes.push((min_dist - dist) * config.collision_push_factor * strength);
            }
        }

        if let Some((planet_pos, planet_radius)) =
            moon.parent.as_ref().and_then(|p| planets.get(p))
        {
            let min_dist = moon.radius + planet_radius + config.collision_padding;
            let dist = (moon.pos - *planet_pos).length();
            if dist < min_dist {
                pushes.push(
                    (min_dist - dist) * config.collision_push_factor * config.same_parent_strength,
                );
            }
        }

        if pushes.is_empty() {
            continue;
        }
        if let Some(node) = state.get_mut(&moon.id) {
            // Clamp after every addition so simultaneous hits cannot
            // overshoot the stretch limit
            for push in pushes {
                node.orbit_radius = (node.orbit_radius + push).min(limit);
                node.glow = (node.glow + config.glow_on_hit).min(1.0);
            }
        }
    }
}
