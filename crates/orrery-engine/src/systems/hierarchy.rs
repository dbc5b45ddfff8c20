//! Hierarchy construction: one weighted snapshot in, one galaxy out.
//!
//! The root and every chain compete for the sun spot by resolved weight;
//! the winner is pinned at the origin and everything else ladders outward
//! as planets, with each chain-planet's token list cut into moons and
//! meteorites. Rebuilds are from scratch; nothing carries over.

use std::cmp::Ordering;

use crate::api::config::GalaxyConfig;
use crate::api::snapshot::{MarketSnapshot, TokenEntity};
use crate::api::types::{MetricMode, NodeId};
use crate::core::galaxy::GalaxyState;
use crate::core::node::{Node, NodeKind};
use crate::core::rng::Rng;
use crate::systems::{layout, ratio, weight};

/// Display identity assigned to the root entity; the wire format carries
/// only its metrics.
const ROOT_ID: &str = "root";
const ROOT_LABEL: &str = "Root";
const ROOT_SYMBOL: &str = "ROOT";

struct Candidate<'a> {
    id: String,
    label: String,
    symbol: String,
    color: String,
    weight: f64,
    tokens: Option<&'a [TokenEntity]>,
}

/// Build a fresh galaxy from a snapshot under the given metric mode.
pub fn build_galaxy(
    snapshot: &MarketSnapshot,
    mode: MetricMode,
    config: &GalaxyConfig,
    rng: &mut Rng,
) -> GalaxyState {
    let metrics_ok = weight::finite_metrics(snapshot);
    debug_assert!(metrics_ok, "snapshot contains non-finite metrics");
    if !metrics_ok {
        log::warn!("snapshot carries non-finite metrics, treating them as zero weight");
    }

    let mut candidates = Vec::with_capacity(snapshot.chains.len() + 1);
    candidates.push(Candidate {
        id: ROOT_ID.to_string(),
        label: ROOT_LABEL.to_string(),
        symbol: ROOT_SYMBOL.to_string(),
        color: String::new(),
        weight: weight::root_weight(&snapshot.root, mode, config),
        tokens: None,
    });
    for chain in &snapshot.chains {
        candidates.push(Candidate {
            id: chain.id.clone(),
            label: chain.name.clone(),
            symbol: chain.symbol.clone(),
            color: chain.color.clone(),
            weight: weight::chain_weight(chain, mode),
            tokens: Some(&chain.tokens),
        });
    }

    // Stable sort: equal weights keep snapshot order, so an all-zero
    // snapshot ranks root first then chains as delivered.
    candidates.sort_by(|a, b| b.weight.partial_cmp(&a.weight).unwrap_or(Ordering::Equal));

    let mut galaxy = GalaxyState::new();
    galaxy.timestamp = snapshot.fetched_at;

    let sun_weight = candidates[0].weight;
    {
        let sun = &candidates[0];
        galaxy.spawn(
            Node::new(NodeId::new(sun.id.clone()), NodeKind::Sun)
                .with_radius(config.sun_radius)
                .with_weight(sun.weight)
                .with_color(sun.color.clone())
                .with_label(sun.label.clone(), sun.symbol.clone()),
        );
    }

    for (rank, cand) in candidates[1..].iter().enumerate() {
        let mut planet = Node::new(NodeId::new(cand.id.clone()), NodeKind::Planet)
            .with_weight(cand.weight)
            .with_color(cand.color.clone())
            .with_label(cand.label.clone(), cand.symbol.clone());
        layout::layout_planet(&mut planet, rank, sun_weight, config, rng);

        let (moons, meteorites) = match cand.tokens {
            Some(tokens) if !tokens.is_empty() => cut_and_layout(
                &planet, rank, tokens, config, rng,
            ),
            _ => (Vec::new(), Vec::new()),
        };

        galaxy.spawn(planet);
        for moon in moons {
            galaxy.spawn(moon);
        }
        for meteorite in meteorites {
            galaxy.spawn(meteorite);
        }
    }

    ratio::annotate(&mut galaxy);

    log::debug!(
        "galaxy built: {} nodes ({} planets, {} moons, {} meteorites), mode={}, t={}",
        galaxy.len(),
        galaxy.planets().count(),
        galaxy.moons().count(),
        galaxy.meteorites().count(),
        mode.as_str(),
        galaxy.timestamp
    );

    galaxy
}

/// Rank one planet's tokens by market cap, cut moons then meteorites,
/// drop the rest.
fn cut_and_layout(
    planet: &Node,
    rank: usize,
    tokens: &[TokenEntity],
    config: &GalaxyConfig,
    rng: &mut Rng,
) -> (Vec<Node>, Vec<Node>) {
    let mut ranked = tokens.to_vec();
    ranked.sort_by(|a, b| {
        weight::token_weight(b)
            .partial_cmp(&weight::token_weight(a))
            .unwrap_or(Ordering::Equal)
    });

    let moon_cut = ranked.len().min(config.max_moons_per_planet);
    let meteorite_cut = (moon_cut + config.max_meteorites_per_planet).min(ranked.len());

    let moons = layout::layout_moons(planet, rank, &ranked[..moon_cut], config, rng);
    let meteorites = layout::layout_meteorites(
        planet.id.as_str(),
        &moons,
        &ranked[moon_cut..meteorite_cut],
        config,
        rng,
    );
    (moons, meteorites)
}
