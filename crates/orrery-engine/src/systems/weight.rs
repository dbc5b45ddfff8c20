//! Metric-mode weight resolution.
//!
//! Weights are the single scalar everything downstream ranks and sizes by.
//! They are never NaN and never negative; bad metrics collapse to 0 here
//! instead of poisoning layout math.

use crate::api::config::GalaxyConfig;
use crate::api::snapshot::{ChainEntity, MarketSnapshot, RootMetrics, TokenEntity};
use crate::api::types::MetricMode;

/// Clamp a raw metric to a usable weight: non-finite and negative → 0.
pub fn sanitize(value: f64) -> f64 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        0.0
    }
}

/// Weight of a chain entity under the active mode. Change24h ranks by
/// magnitude, not direction.
pub fn chain_weight(chain: &ChainEntity, mode: MetricMode) -> f64 {
    let raw = match mode {
        MetricMode::Tvl => chain.tvl,
        MetricMode::MarketCap => chain.market_cap,
        MetricMode::Volume24h => chain.volume_24h,
        MetricMode::Change24h => chain.change_24h.abs(),
    };
    sanitize(raw)
}

/// Weight of the root entity. It has no TVL natively; in TVL mode its
/// market cap scaled by the configured proxy ratio stands in.
pub fn root_weight(root: &RootMetrics, mode: MetricMode, config: &GalaxyConfig) -> f64 {
    let raw = match mode {
        MetricMode::Tvl => root.market_cap * config.root_tvl_proxy,
        MetricMode::MarketCap => root.market_cap,
        MetricMode::Volume24h => root.volume_24h,
        MetricMode::Change24h => root.change_24h.abs(),
    };
    sanitize(raw)
}

/// Weight of a token. Tokens rank and size by market cap in every mode.
pub fn token_weight(token: &TokenEntity) -> f64 {
    sanitize(token.market_cap)
}

/// Whether every numeric metric in the snapshot is finite. Build entry
/// asserts this in debug; release degrades through `sanitize` instead.
pub fn finite_metrics(snapshot: &MarketSnapshot) -> bool {
    let root_ok = [
        snapshot.root.price,
        snapshot.root.change_24h,
        snapshot.root.market_cap,
        snapshot.root.volume_24h,
        snapshot.root.dominance,
    ]
    .iter()
    .all(|v| v.is_finite());

    root_ok
        && snapshot.chains.iter().all(|c| {
            [c.tvl, c.market_cap, c.volume_24h, c.change_24h]
                .iter()
                .all(|v| v.is_finite())
                && c.tokens.iter().all(|t| {
                    [t.price, t.change_24h, t.volume_24h, t.liquidity, t.market_cap]
                        .iter()
                        .all(|v| v.is_finite())
                })
        })
}
