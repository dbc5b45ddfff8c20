use std::collections::HashMap;

use crate::api::types::NodeId;
use crate::core::node::{Node, NodeKind};

/// The full simulation state: flat node storage plus the base-orbit table.
/// Flat Vec with linear id lookup; sized for hundreds of bodies, not
/// millions. Owning the base-orbit table here (instead of module state)
/// lets independent galaxies coexist in one process.
pub struct GalaxyState {
    nodes: Vec<Node>,
    /// Undisturbed target orbit radius per node, recorded at creation.
    /// Collision pushes decay back to these values.
    base_orbits: HashMap<NodeId, f64>,
    /// Snapshot fetch time (unix seconds) this galaxy was built from.
    pub timestamp: u64,
}

impl GalaxyState {
    pub fn new() -> Self {
        Self {
            nodes: Vec::with_capacity(256),
            base_orbits: HashMap::new(),
            timestamp: 0,
        }
    }

    /// Add a node, recording its creation-time orbit radius as the base.
    pub fn spawn(&mut self, node: Node) {
        self.base_orbits.insert(node.id.clone(), node.orbit_radius);
        self.nodes.push(node);
    }

    /// Get a reference to a node by id.
    pub fn get(&self, id: &NodeId) -> Option<&Node> {
        self.nodes.iter().find(|n| &n.id == id)
    }

    /// Get a mutable reference to a node by id.
    pub fn get_mut(&mut self, id: &NodeId) -> Option<&mut Node> {
        self.nodes.iter_mut().find(|n| &n.id == id)
    }

    /// The recorded base orbit radius for a node, if any.
    pub fn base_orbit(&self, id: &NodeId) -> Option<f64> {
        self.base_orbits.get(id).copied()
    }

    /// Iterate over all nodes.
    pub fn iter(&self) -> impl Iterator<Item = &Node> {
        self.nodes.iter()
    }

    /// Iterate over all nodes mutably.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Node> {
        self.nodes.iter_mut()
    }

    /// Split borrow: the mutable node slice alongside the read-only
    /// base-orbit table, for passes that decay orbits while walking nodes.
    pub fn nodes_and_bases(&mut self) -> (&mut [Node], &HashMap<NodeId, f64>) {
        (&mut self.nodes, &self.base_orbits)
    }

    // -- Typed views --

    /// The sun. Every built galaxy has exactly one.
    pub fn sun(&self) -> Option<&Node> {
        self.nodes.iter().find(|n| n.kind == NodeKind::Sun)
    }

    pub fn planets(&self) -> impl Iterator<Item = &Node> {
        self.nodes.iter().filter(|n| n.kind == NodeKind::Planet)
    }

    pub fn moons(&self) -> impl Iterator<Item = &Node> {
        self.nodes.iter().filter(|n| n.kind == NodeKind::Moon)
    }

    pub fn meteorites(&self) -> impl Iterator<Item = &Node> {
        self.nodes.iter().filter(|n| n.kind == NodeKind::Meteorite)
    }

    /// Moons whose parent is the given planet.
    pub fn moons_of<'a>(&'a self, planet_id: &'a NodeId) -> impl Iterator<Item = &'a Node> {
        self.nodes
            .iter()
            .filter(move |n| n.kind == NodeKind::Moon && n.parent.as_ref() == Some(planet_id))
    }

    /// Number of nodes.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the galaxy holds no nodes.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Drop every node and base-orbit record, keeping capacity.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.base_orbits.clear();
        self.timestamp = 0;
    }
}

impl Default for GalaxyState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::DVec2;

    #[test]
    fn spawn_and_get() {
        let mut galaxy = GalaxyState::new();
        let id = NodeId::new("ethereum");
        galaxy.spawn(
            Node::new(id.clone(), NodeKind::Planet).with_pos(DVec2::new(150.0, 0.0)),
        );
        let n = galaxy.get(&id).unwrap();
        assert_eq!(n.pos, DVec2::new(150.0, 0.0));
    }

    #[test]
    fn spawn_records_base_orbit() {
        let mut galaxy = GalaxyState::new();
        let id = NodeId::new("solana");
        galaxy.spawn(Node::new(id.clone(), NodeKind::Planet).with_orbit(220.0, 0.5, 0.2));
        assert!((galaxy.base_orbit(&id).unwrap() - 220.0).abs() < 1e-10);
    }

    #[test]
    fn typed_views_filter_by_kind() {
        let mut galaxy = GalaxyState::new();
        galaxy.spawn(Node::new(NodeId::new("root"), NodeKind::Sun));
        galaxy.spawn(Node::new(NodeId::new("ethereum"), NodeKind::Planet));
        galaxy.spawn(Node::new(NodeId::new("solana"), NodeKind::Planet));
        galaxy.spawn(
            Node::new(NodeId::scoped("ethereum", "0xa"), NodeKind::Moon)
                .with_parent(NodeId::new("ethereum")),
        );
        galaxy.spawn(
            Node::new(NodeId::scoped("solana", "mintb"), NodeKind::Moon)
                .with_parent(NodeId::new("solana")),
        );

        assert_eq!(galaxy.sun().unwrap().id.as_str(), "root");
        assert_eq!(galaxy.planets().count(), 2);
        assert_eq!(galaxy.moons().count(), 2);
        assert_eq!(galaxy.meteorites().count(), 0);

        let eth = NodeId::new("ethereum");
        let eth_moons: Vec<_> = galaxy.moons_of(&eth).collect();
        assert_eq!(eth_moons.len(), 1);
        assert_eq!(eth_moons[0].id.as_str(), "ethereum:0xa");
    }

    #[test]
    fn clear_resets_everything() {
        let mut galaxy = GalaxyState::new();
        galaxy.timestamp = 1766001234;
        galaxy.spawn(Node::new(NodeId::new("root"), NodeKind::Sun));
        galaxy.clear();
        assert!(galaxy.is_empty());
        assert_eq!(galaxy.timestamp, 0);
        assert!(galaxy.base_orbit(&NodeId::new("root")).is_none());
    }
}
