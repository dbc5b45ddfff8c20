use serde::{Deserialize, Serialize};

/// Stable identifier for a body in the galaxy.
/// Chains use their chain id verbatim; tokens are namespaced as
/// `"{chain_id}:{contract}"` so the same contract address on two chains
/// cannot collide in id-keyed tables.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub String);

impl NodeId {
    pub fn new(id: impl Into<String>) -> Self {
        NodeId(id.into())
    }

    /// Id for a token scoped under its parent chain.
    pub fn scoped(chain_id: &str, contract: &str) -> Self {
        NodeId(format!("{}:{}", chain_id, contract))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Which snapshot metric drives body weights (and therefore sizes and ranks).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MetricMode {
    Tvl,
    MarketCap,
    // rename_all never inserts an underscore before a digit; spell these
    // out so the serde form matches parse/as_str
    #[serde(rename = "volume_24h")]
    Volume24h,
    #[serde(rename = "change_24h")]
    Change24h,
}

impl MetricMode {
    /// Parse a UI-facing mode string. Unknown strings fall back to TVL
    /// rather than erroring so a stale frontend cannot wedge the engine.
    pub fn parse(s: &str) -> MetricMode {
        match s {
            "tvl" => MetricMode::Tvl,
            "market_cap" => MetricMode::MarketCap,
            "volume_24h" => MetricMode::Volume24h,
            "change_24h" => MetricMode::Change24h,
            _ => MetricMode::Tvl,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            MetricMode::Tvl => "tvl",
            MetricMode::MarketCap => "market_cap",
            MetricMode::Volume24h => "volume_24h",
            MetricMode::Change24h => "change_24h",
        }
    }
}

impl Default for MetricMode {
    fn default() -> Self {
        MetricMode::Tvl
    }
}
