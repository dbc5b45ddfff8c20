//! Headless galaxy demo.
//!
//! Builds a galaxy from a bundled market snapshot, drives it through the
//! fixed-timestep loop for a few simulated seconds, and logs what the layout
//! and integrator are doing. Pass a metric mode as the first argument
//! (`tvl`, `market_cap`, `volume_24h`, `change_24h`); anything else runs
//! with the TVL default.

use orrery_engine::{
    build_galaxy, build_instance_buffer, tick_galaxy, FixedTimestep, GalaxyConfig, GalaxyState,
    InstanceBuffer, MarketSnapshot, MetricMode, Rng,
};

const SNAPSHOT_JSON: &str = include_str!("../data/snapshot.json");

/// Engine tick rate; the demo frame rate is deliberately coarser so the
/// accumulator has to fan one frame out into several ticks.
const TICK_DT: f64 = 1.0 / 60.0;
const FRAME_DT: f64 = 1.0 / 30.0;
const SIM_SECONDS: f64 = 12.0;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let snapshot = match MarketSnapshot::from_json(SNAPSHOT_JSON) {
        Ok(snapshot) => snapshot,
        Err(err) => {
            log::error!("bundled snapshot fixture is invalid: {}", err);
            std::process::exit(1);
        }
    };

    let mode = std::env::args()
        .nth(1)
        .map(|arg| MetricMode::parse(&arg))
        .unwrap_or_default();

    let config = GalaxyConfig::default();
    let mut rng = Rng::new(7);
    let mut galaxy = build_galaxy(&snapshot, mode, &config, &mut rng);

    log::info!(
        "built galaxy by {}: sun {} over {} planets, {} moons, {} meteorites",
        mode.as_str(),
        galaxy.sun().map(|s| s.symbol.as_str()).unwrap_or("?"),
        galaxy.planets().count(),
        galaxy.moons().count(),
        galaxy.meteorites().count(),
    );
    dump_hierarchy(&galaxy);

    let mut timestep = FixedTimestep::new(TICK_DT);
    let mut buffer = InstanceBuffer::new();
    let mut simulated = 0.0;
    let mut next_report = 1.0;

    while simulated < SIM_SECONDS {
        let steps = timestep.accumulate(FRAME_DT);
        for _ in 0..steps {
            tick_galaxy(&mut galaxy, timestep.dt(), &config);
        }
        build_instance_buffer(&galaxy, &mut buffer);
        simulated += FRAME_DT;

        if simulated + 1e-9 >= next_report {
            report_second(&galaxy, &buffer, next_report);
            next_report += 1.0;
        }
    }

    log::info!("simulation done after {:.0}s simulated", SIM_SECONDS);
    dump_hierarchy(&galaxy);
}

/// One line per simulated second: where the heaviest planet is, how many
/// bodies still glow from collisions, and the instance count handed to a
/// would-be renderer.
fn report_second(galaxy: &GalaxyState, buffer: &InstanceBuffer, second: f64) {
    let glowing = galaxy.iter().filter(|node| node.glow > 0.0).count();
    if let Some(planet) = galaxy.planets().next() {
        log::info!(
            "t={:>2.0}s  {} at ({:>7.1}, {:>7.1})  orbit {:>6.1}  glowing {}  instances {}",
            second,
            planet.symbol,
            planet.pos.x,
            planet.pos.y,
            planet.orbit_radius,
            glowing,
            buffer.instance_count(),
        );
    }
}

fn dump_hierarchy(galaxy: &GalaxyState) {
    for planet in galaxy.planets() {
        let over_base = galaxy
            .base_orbit(&planet.id)
            .map(|base| planet.orbit_radius - base)
            .unwrap_or(0.0);
        log::info!(
            "  {:<5} weight {:>14.0}  r {:>4.1}  orbit {:>6.1} ({:+.2} over base)",
            planet.symbol,
            planet.weight,
            planet.radius,
            planet.orbit_radius,
            over_base,
        );
        for moon in galaxy.moons_of(&planet.id) {
            let meteorites = galaxy
                .meteorites()
                .filter(|m| m.parent.as_ref() == Some(&moon.id))
                .count();
            log::info!(
                "    {:<6} r {:>4.1}  orbit {:>5.1}  glow {:.2}  meteorites {}",
                moon.symbol,
                moon.radius,
                moon.orbit_radius,
                moon.glow,
                meteorites,
            );
        }
    }
}
