//! Render handoff: flatten the galaxy into a per-body instance buffer.

pub mod instance;

pub use instance::{BodyInstance, InstanceBuffer};

use crate::core::galaxy::GalaxyState;
use crate::core::node::NodeKind;

fn kind_code(kind: NodeKind) -> f32 {
    match kind {
        NodeKind::Sun => 0.0,
        NodeKind::Planet => 1.0,
        NodeKind::Moon => 2.0,
        NodeKind::Meteorite => 3.0,
    }
}

/// Rebuild the instance buffer from the current galaxy state. Bodies come
/// out in spawn order (sun first, then each planet with its moons and
/// meteorites), which doubles as a stable draw order.
pub fn build_instance_buffer(state: &GalaxyState, buffer: &mut InstanceBuffer) {
    buffer.clear();
    let sun_weight = state.sun().map(|s| s.weight).unwrap_or(0.0);

    for node in state.iter() {
        let weight_scale = if sun_weight > 0.0 {
            (node.weight / sun_weight) as f32
        } else {
            0.0
        };
        buffer.push(BodyInstance {
            x: node.pos.x as f32,
            y: node.pos.y as f32,
            radius: node.radius as f32,
            kind: kind_code(node.kind),
            glow: node.glow as f32,
            orbit_radius: node.orbit_radius as f32,
            orbit_angle: node.orbit_angle as f32,
            weight_scale,
        });
    }
}
