//! Deterministic tick integration.
//!
//! One tick advances every orbiting body in parent-before-child order:
//! planets around the origin, moons around their planets' fresh
//! positions, meteorites around their moons'. Orbits pushed off base by
//! collisions decay back a fixed fraction per tick, and positions are
//! assigned directly from orbit geometry; velocity never integrates.

use std::collections::HashMap;

use glam::DVec2;

use crate::api::config::GalaxyConfig;
use crate::api::types::NodeId;
use crate::core::galaxy::GalaxyState;
use crate::core::node::{Node, NodeKind};
use crate::systems::{collision, layout};

/// Glow below this is treated as fully faded.
const GLOW_EPSILON: f64 = 1e-3;

/// Advance the whole galaxy by `dt` seconds. A zero `dt` moves nothing
/// and changes no orbit, but still applies one glow decay step.
pub fn tick_galaxy(state: &mut GalaxyState, dt: f64, config: &GalaxyConfig) {
    if dt != 0.0 {
        {
            let (nodes, bases) = state.nodes_and_bases();

            advance_ring(nodes, bases, NodeKind::Planet, &HashMap::new(), dt, config);

            let planet_centers = center_cache(nodes, NodeKind::Planet);
            advance_ring(nodes, bases, NodeKind::Moon, &planet_centers, dt, config);

            let moon_centers = center_cache(nodes, NodeKind::Moon);
            advance_ring(nodes, bases, NodeKind::Meteorite, &moon_centers, dt, config);
        }

        collision::resolve_moon_collisions(state, config);
    }

    for node in state.iter_mut() {
        node.glow *= 1.0 - config.glow_decay;
        if node.glow < GLOW_EPSILON {
            node.glow = 0.0;
        }
    }

    // The sun never drifts, whatever upstream mutation happened
    for node in state.iter_mut() {
        if node.kind == NodeKind::Sun {
            node.pos = DVec2::ZERO;
            node.vel = DVec2::ZERO;
        }
    }
}

/// Advance one kind: rotate, decay the orbit toward base, place.
fn advance_ring(
    nodes: &mut [Node],
    bases: &HashMap<NodeId, f64>,
    kind: NodeKind,
    centers: &HashMap<NodeId, DVec2>,
    dt: f64,
    config: &GalaxyConfig,
) {
    for node in nodes.iter_mut().filter(|n| n.kind == kind) {
        node.orbit_angle = layout::wrap_angle(node.orbit_angle + node.angular_velocity * dt);

        if let Some(&base) = bases.get(&node.id) {
            if node.orbit_radius > base {
                let excess = (node.orbit_radius - base) * (1.0 - config.orbit_decay);
                node.orbit_radius = if excess < config.orbit_snap_epsilon {
                    base
                } else {
                    base + excess
                };
            }
        }

        let center = node
            .parent
            .as_ref()
            .and_then(|p| centers.get(p).copied())
            .unwrap_or(DVec2::ZERO);
        node.pos = layout::orbit_position(center, node.orbit_radius, node.orbit_angle);
    }
}

fn center_cache(nodes: &[Node], kind: NodeKind) -> HashMap<NodeId, DVec2> {
    nodes
        .iter()
        .filter(|n| n.kind == kind)
        .map(|n| (n.id.clone(), n.pos))
        .collect()
}
