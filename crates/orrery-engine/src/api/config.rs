/// Configuration for galaxy layout and simulation. All distances are in
/// world units, angles in radians, angular velocities in rad/s, and decay
/// rates are per-tick fractions.
#[derive(Debug, Clone)]
pub struct GalaxyConfig {
    // ── Sun & planets ──────────────────────────────────────────────

    /// Visual radius of the sun. Fixed regardless of weight (default: 60).
    pub sun_radius: f64,
    /// Clamp bounds for planet visual radius (default: 8..40).
    pub min_planet_radius: f64,
    pub max_planet_radius: f64,
    /// Orbit radius of the heaviest planet (default: 150).
    pub base_planet_orbit: f64,
    /// Orbit spacing between consecutive planet ranks (default: 70).
    pub planet_orbit_step: f64,
    /// Angular velocity of a planet at the base orbit (default: 0.25).
    pub base_angular_velocity: f64,
    /// Exponent of the (base/orbit) speed falloff; larger = outer planets
    /// slow down harder (default: 1.5).
    pub orbit_falloff: f64,

    // ── Moons ──────────────────────────────────────────────────────

    /// Tokens per planet promoted to moons (default: 8).
    pub max_moons_per_planet: usize,
    /// Tokens per planet kept as meteorites after the moon cut (default: 6).
    pub max_meteorites_per_planet: usize,
    /// Moons per concentric ring (default: 4).
    pub slots_per_ring: usize,
    /// Clearance between a planet's surface and its first moon ring
    /// (default: 30).
    pub base_moon_orbit: f64,
    /// Radial spacing between moon rings (default: 26).
    pub moon_ring_step: f64,
    /// Clamp bounds for moon visual radius before the parent-ratio cap
    /// (default: 4..14).
    pub min_moon_radius: f64,
    pub max_moon_radius: f64,
    /// Hard cap on moon radius as a fraction of the parent planet's radius
    /// (default: 0.2).
    pub moon_radius_cap_ratio: f64,
    /// Moon angular speed magnitude band; sign alternates by ring parity
    /// (default: 0.3..0.9).
    pub min_moon_speed: f64,
    pub max_moon_speed: f64,
    /// Angular jitter applied to each moon's slot angle, ± (default: 0.15).
    pub angle_jitter: f64,
    /// Radial jitter applied to each moon's ring radius, ± (default: 4).
    pub radial_jitter: f64,
    /// Per-planet phase offset between moon rings of consecutive planet
    /// ranks. Golden-angle-like so rings never line up across planets
    /// (default: 2.399963).
    pub planet_phase_step: f64,

    // ── Meteorites ─────────────────────────────────────────────────

    /// Orbit radius around the parent moon (default: 12 ± 3 jitter).
    pub meteorite_orbit: f64,
    pub meteorite_orbit_jitter: f64,
    /// Meteorite visual radius band (default: 1.5..3.5).
    pub min_meteorite_radius: f64,
    pub max_meteorite_radius: f64,
    /// Meteorite angular speed magnitude band, random sign
    /// (default: 1.5..3.0).
    pub min_meteorite_speed: f64,
    pub max_meteorite_speed: f64,

    // ── Collision & decay ──────────────────────────────────────────

    /// Extra clearance added to the sum of radii in the overlap test
    /// (default: 6).
    pub collision_padding: f64,
    /// Base fraction of the overlap converted into radial push
    /// (default: 0.25).
    pub collision_push_factor: f64,
    /// Push multiplier for same-parent moon pairs and moon-vs-own-planet
    /// (default: 1.5).
    pub same_parent_strength: f64,
    /// Push multiplier for cross-parent moon pairs (default: 0.3).
    pub cross_parent_strength: f64,
    /// Orbit radius never exceeds this multiple of the recorded base
    /// (default: 1.5).
    pub max_orbit_stretch: f64,
    /// Per-tick fraction of the above-base orbit excess that decays away
    /// (default: 0.08).
    pub orbit_decay: f64,
    /// Excess below this snaps the orbit back to base exactly
    /// (default: 1e-6).
    pub orbit_snap_epsilon: f64,
    /// Per-tick fraction of glow that decays away (default: 0.06).
    pub glow_decay: f64,
    /// Glow added on each collision, saturating at 1 (default: 0.5).
    pub glow_on_hit: f64,

    // ── Weights ────────────────────────────────────────────────────

    /// The root entity has no TVL of its own; in TVL mode its weight is
    /// market_cap scaled by this ratio (default: 0.1).
    pub root_tvl_proxy: f64,
}

impl Default for GalaxyConfig {
    fn default() -> Self {
        Self {
            sun_radius: 60.0,
            min_planet_radius: 8.0,
            max_planet_radius: 40.0,
            base_planet_orbit: 150.0,
            planet_orbit_step: 70.0,
            base_angular_velocity: 0.25,
            orbit_falloff: 1.5,
            max_moons_per_planet: 8,
            max_meteorites_per_planet: 6,
            slots_per_ring: 4,
            base_moon_orbit: 30.0,
            moon_ring_step: 26.0,
            min_moon_radius: 4.0,
            max_moon_radius: 14.0,
            moon_radius_cap_ratio: 0.2,
            min_moon_speed: 0.3,
            max_moon_speed: 0.9,
            angle_jitter: 0.15,
            radial_jitter: 4.0,
            planet_phase_step: 2.399963,
            meteorite_orbit: 12.0,
            meteorite_orbit_jitter: 3.0,
            min_meteorite_radius: 1.5,
            max_meteorite_radius: 3.5,
            min_meteorite_speed: 1.5,
            max_meteorite_speed: 3.0,
            collision_padding: 6.0,
            collision_push_factor: 0.25,
            same_parent_strength: 1.5,
            cross_parent_strength: 0.3,
            max_orbit_stretch: 1.5,
            orbit_decay: 0.08,
            orbit_snap_epsilon: 1e-6,
            glow_decay: 0.06,
            glow_on_hit: 0.5,
            root_tvl_proxy: 0.1,
        }
    }
}
