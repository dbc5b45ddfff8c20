//! Orbit geometry and visual sizing.
//!
//! Planets ladder outward from the sun, moons slot into concentric rings
//! around their planet, meteorites ride tight orbits around moons. All
//! randomness (initial angles, jitter, speeds) comes from the caller's
//! seeded Rng, so one seed reproduces one galaxy exactly.

use std::f64::consts::TAU;

use glam::DVec2;

use crate::api::config::GalaxyConfig;
use crate::api::snapshot::TokenEntity;
use crate::api::types::NodeId;
use crate::core::node::{Node, NodeKind};
use crate::core::rng::Rng;
use crate::systems::weight;

/// Wrap an angle into [0, 2π).
pub fn wrap_angle(angle: f64) -> f64 {
    let wrapped = angle % TAU;
    if wrapped < 0.0 {
        wrapped + TAU
    } else {
        wrapped
    }
}

/// Position on a circular orbit around a center.
pub fn orbit_position(center: DVec2, orbit_radius: f64, angle: f64) -> DVec2 {
    center + orbit_radius * DVec2::new(angle.cos(), angle.sin())
}

// ── Planets ──────────────────────────────────────────────────────────

/// Planet visual radius by the √-area law: area proportional to the
/// weight share of the sun. Kept exact (no log substitution) because
/// ratio displays assume area-proportionality.
pub fn planet_radius(weight: f64, sun_weight: f64, config: &GalaxyConfig) -> f64 {
    if weight <= 0.0 || sun_weight <= 0.0 {
        return config.min_planet_radius;
    }
    let raw = config.sun_radius * (weight / sun_weight).sqrt();
    raw.clamp(config.min_planet_radius, config.max_planet_radius)
}

/// Orbit radius for a planet of the given rank (0 = heaviest).
pub fn planet_orbit_radius(rank: usize, config: &GalaxyConfig) -> f64 {
    config.base_planet_orbit + rank as f64 * config.planet_orbit_step
}

/// Angular velocity at the given orbit. Farther planets move slower,
/// by the configured falloff exponent.
pub fn planet_angular_velocity(orbit_radius: f64, config: &GalaxyConfig) -> f64 {
    let falloff = (config.base_planet_orbit / orbit_radius).powf(config.orbit_falloff);
    config.base_angular_velocity * falloff
}

/// Assign orbit geometry, size, and initial position to a planet node.
pub fn layout_planet(
    node: &mut Node,
    rank: usize,
    sun_weight: f64,
    config: &GalaxyConfig,
    rng: &mut Rng,
) {
    let orbit_radius = planet_orbit_radius(rank, config);
    node.orbit_radius = orbit_radius;
    node.orbit_angle = rng.next_angle();
    node.angular_velocity = planet_angular_velocity(orbit_radius, config);
    node.radius = planet_radius(node.weight, sun_weight, config);
    node.pos = orbit_position(DVec2::ZERO, orbit_radius, node.orbit_angle);
}

// ── Moons ────────────────────────────────────────────────────────────

/// Ring and slot for the moon at the given rank index.
pub fn moon_ring_slot(index: usize, config: &GalaxyConfig) -> (usize, usize) {
    let slots = config.slots_per_ring.max(1);
    (index / slots, index % slots)
}

/// Moon visual radius: log10 market cap normalized against the local
/// (same-planet) span, mapped into the moon band, then hard-capped at a
/// fraction of the parent's radius. A degenerate span maps to the band
/// midpoint.
pub fn moon_radius(
    market_cap: f64,
    local_lo: f64,
    local_hi: f64,
    parent_radius: f64,
    config: &GalaxyConfig,
) -> f64 {
    let span = local_hi - local_lo;
    let t = if span > 1e-9 {
        ((log_cap(market_cap) - local_lo) / span).clamp(0.0, 1.0)
    } else {
        0.5
    };
    let raw = config.min_moon_radius + t * (config.max_moon_radius - config.min_moon_radius);
    raw.min(config.moon_radius_cap_ratio * parent_radius)
}

/// log10 of a market cap, floored so caps at or below 1 map to 0.
pub fn log_cap(market_cap: f64) -> f64 {
    market_cap.max(1.0).log10()
}

/// Build moon nodes for one planet from its already-cut token slice
/// (ranked by descending market cap). Ring slotting spreads them over
/// concentric rings; the per-planet phase offset keeps rings of
/// different planets out of sync.
pub fn layout_moons(
    planet: &Node,
    planet_rank: usize,
    tokens: &[TokenEntity],
    config: &GalaxyConfig,
    rng: &mut Rng,
) -> Vec<Node> {
    if tokens.is_empty() {
        return Vec::new();
    }

    let slots = config.slots_per_ring.max(1);
    let phase = planet_rank as f64 * config.planet_phase_step;

    let local_lo = tokens
        .iter()
        .map(|t| log_cap(weight::token_weight(t)))
        .fold(f64::INFINITY, f64::min);
    let local_hi = tokens
        .iter()
        .map(|t| log_cap(weight::token_weight(t)))
        .fold(f64::NEG_INFINITY, f64::max);

    let mut moons = Vec::with_capacity(tokens.len());
    for (index, token) in tokens.iter().enumerate() {
        let (ring, slot) = moon_ring_slot(index, config);

        let ring_base =
            planet.radius + config.base_moon_orbit + ring as f64 * config.moon_ring_step;
        let orbit_radius =
            ring_base + rng.range_f64(-config.radial_jitter, config.radial_jitter);

        let angle = wrap_angle(
            slot as f64 * (TAU / slots as f64)
                + rng.range_f64(-config.angle_jitter, config.angle_jitter)
                + phase,
        );

        // Ring parity alternates direction so adjacent rings counter-rotate
        let speed = rng.range_f64(config.min_moon_speed, config.max_moon_speed);
        let angular_velocity = if ring % 2 == 0 { speed } else { -speed };

        let cap = weight::token_weight(token);
        let id = NodeId::scoped(planet.id.as_str(), &token.contract_address);
        let node = Node::new(id, NodeKind::Moon)
            .with_parent(planet.id.clone())
            .with_orbit(orbit_radius, angle, angular_velocity)
            .with_radius(moon_radius(cap, local_lo, local_hi, planet.radius, config))
            .with_weight(cap)
            .with_color(token.color.clone())
            .with_label(token.name.clone(), token.symbol.clone())
            .with_pos(orbit_position(planet.pos, orbit_radius, angle));
        moons.push(node);
    }
    moons
}

// ── Meteorites ───────────────────────────────────────────────────────

/// Build meteorite nodes for one planet's overflow tokens, round-robin
/// parented onto that planet's freshly created moons. No moons, no
/// meteorites.
pub fn layout_meteorites(
    chain_id: &str,
    moons: &[Node],
    tokens: &[TokenEntity],
    config: &GalaxyConfig,
    rng: &mut Rng,
) -> Vec<Node> {
    if moons.is_empty() || tokens.is_empty() {
        return Vec::new();
    }

    let mut meteorites = Vec::with_capacity(tokens.len());
    for (index, token) in tokens.iter().enumerate() {
        let parent = &moons[index % moons.len()];

        let orbit_radius = config.meteorite_orbit
            + rng.range_f64(-config.meteorite_orbit_jitter, config.meteorite_orbit_jitter);
        let angle = rng.next_angle();
        let speed = rng.range_f64(config.min_meteorite_speed, config.max_meteorite_speed);
        let angular_velocity = speed * rng.next_sign();

        let id = NodeId::scoped(chain_id, &token.contract_address);
        let node = Node::new(id, NodeKind::Meteorite)
            .with_parent(parent.id.clone())
            .with_orbit(orbit_radius, angle, angular_velocity)
            .with_radius(rng.range_f64(config.min_meteorite_radius, config.max_meteorite_radius))
            .with_weight(weight::token_weight(token))
            .with_color(token.color.clone())
            .with_label(token.name.clone(), token.symbol.clone())
            .with_pos(orbit_position(parent.pos, orbit_radius, angle));
        meteorites.push(node);
    }
    meteorites
}
