use crate::api::types::NodeId;
use glam::DVec2;

/// Body kind in the galaxy hierarchy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    Sun,
    Planet,
    Moon,
    Meteorite,
}

/// Fat Node: one struct for every body kind, optional fields unused where
/// a kind doesn't need them. Simplicity over ECS purity.
#[derive(Debug, Clone)]
pub struct Node {
    /// Stable identifier.
    pub id: NodeId,
    pub kind: NodeKind,
    /// Weak reference to the parent body. None for Sun and Planets;
    /// a Planet id for Moons; a Moon id for Meteorites.
    pub parent: Option<NodeId>,
    /// Position in world space.
    pub pos: DVec2,
    /// Velocity. Vestigial for the deterministic kinds; stays zero.
    pub vel: DVec2,
    /// Visual radius (> 0).
    pub radius: f64,
    /// Display color, opaque passthrough from the snapshot.
    pub color: String,
    /// Current orbit radius around the parent center (>= 0).
    pub orbit_radius: f64,
    /// Orbit angle, wrapped to [0, 2π).
    pub orbit_angle: f64,
    /// Signed angular velocity in rad/s.
    pub angular_velocity: f64,
    /// Resolved metric weight (>= 0).
    pub weight: f64,
    /// Vestigial; mirrors weight.
    pub mass: f64,
    /// Collision glow in [0, 1], decays toward 0 each tick.
    pub glow: f64,
    /// Display name, passthrough.
    pub label: String,
    /// Ticker symbol, passthrough.
    pub symbol: String,
    /// Weight ratio to the next-smaller sibling in the same ranking scope.
    pub size_ratio: Option<f64>,
    /// Symbol of that next-smaller sibling.
    pub next_symbol: Option<String>,
    /// How many of this body fit in the sun, by weight.
    pub sun_multiplier: Option<f64>,
}

impl Node {
    /// Create a node of the given kind at the origin with zeroed dynamics.
    pub fn new(id: NodeId, kind: NodeKind) -> Self {
        Self {
            id,
            kind,
            parent: None,
            pos: DVec2::ZERO,
            vel: DVec2::ZERO,
            radius: 1.0,
            color: String::new(),
            orbit_radius: 0.0,
            orbit_angle: 0.0,
            angular_velocity: 0.0,
            weight: 0.0,
            mass: 0.0,
            glow: 0.0,
            label: String::new(),
            symbol: String::new(),
            size_ratio: None,
            next_symbol: None,
            sun_multiplier: None,
        }
    }

    // -- Builder pattern --

    pub fn with_parent(mut self, parent: NodeId) -> Self {
        self.parent = Some(parent);
        self
    }

    pub fn with_pos(mut self, pos: DVec2) -> Self {
        self.pos = pos;
        self
    }

    pub fn with_radius(mut self, radius: f64) -> Self {
        self.radius = radius;
        self
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = color.into();
        self
    }

    pub fn with_orbit(mut self, radius: f64, angle: f64, angular_velocity: f64) -> Self {
        self.orbit_radius = radius;
        self.orbit_angle = angle;
        self.angular_velocity = angular_velocity;
        self
    }

    pub fn with_weight(mut self, weight: f64) -> Self {
        self.weight = weight;
        self.mass = weight;
        self
    }

    pub fn with_label(mut self, label: impl Into<String>, symbol: impl Into<String>) -> Self {
        self.label = label.into();
        self.symbol = symbol.into();
        self
    }

    /// Whether this node orbits a parent body rather than the origin.
    pub fn has_parent(&self) -> bool {
        self.parent.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_chains_compose() {
        let node = Node::new(NodeId::new("ethereum"), NodeKind::Planet)
            .with_pos(DVec2::new(150.0, 0.0))
            .with_radius(24.0)
            .with_color("#627eea")
            .with_orbit(150.0, 1.0, 0.25)
            .with_weight(5.8e10)
            .with_label("Ethereum", "ETH");

        assert_eq!(node.kind, NodeKind::Planet);
        assert!(node.parent.is_none());
        assert!((node.orbit_radius - 150.0).abs() < 1e-10);
        assert!((node.mass - node.weight).abs() < 1e-10);
        assert_eq!(node.symbol, "ETH");
        assert_eq!(node.vel, DVec2::ZERO);
    }

    #[test]
    fn with_parent_marks_orbiting_child() {
        let moon = Node::new(NodeId::scoped("ethereum", "0xabc"), NodeKind::Moon)
            .with_parent(NodeId::new("ethereum"));
        assert!(moon.has_parent());
        assert_eq!(moon.parent.as_ref().map(|p| p.as_str()), Some("ethereum"));
    }
}
