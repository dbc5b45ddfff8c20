//! Market snapshot input model.
//!
//! The snapshot arrives as validated JSON from the upstream data-fetch
//! collaborator (camelCase wire names). The engine parses it and nothing
//! more: no network I/O, no caching, no schema validation beyond what
//! serde enforces. Malformed numeric fields are upstream's to reject.

use serde::{Deserialize, Serialize};

/// One weighted market snapshot: the root entity plus its sibling chains,
/// each with an ordered token list.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketSnapshot {
    pub root: RootMetrics,
    pub chains: Vec<ChainEntity>,
    /// Upstream fetch time (unix seconds). Becomes the galaxy timestamp;
    /// the engine never reads a clock.
    #[serde(default)]
    pub fetched_at: u64,
}

/// Metrics of the root entity. It has no TVL of its own and no display
/// identity in the wire format; the builder assigns fixed ones.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RootMetrics {
    pub price: f64,
    pub change_24h: f64,
    pub market_cap: f64,
    pub volume_24h: f64,
    pub dominance: f64,
}

/// A chain entity (planet candidate) with its ranked token list.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChainEntity {
    pub id: String,
    pub name: String,
    pub symbol: String,
    pub color: String,
    pub tvl: f64,
    pub market_cap: f64,
    pub volume_24h: f64,
    pub change_24h: f64,
    /// Ordered by descending market cap upstream; the layout re-sorts
    /// stably anyway before cutting moons from meteorites.
    #[serde(default)]
    pub tokens: Vec<TokenEntity>,
}

/// A token under a chain (moon or meteorite candidate).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenEntity {
    pub symbol: String,
    pub name: String,
    pub contract_address: String,
    pub price: f64,
    pub change_24h: f64,
    pub volume_24h: f64,
    pub liquidity: f64,
    pub market_cap: f64,
    pub color: String,
}

impl MarketSnapshot {
    /// Parse a snapshot from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SNAPSHOT_JSON: &str = r##"{
        "root": {
            "price": 64250.0,
            "change24h": 1.8,
            "marketCap": 1200000000000.0,
            "volume24h": 32000000000.0,
            "dominance": 52.4
        },
        "chains": [
            {
                "id": "ethereum",
                "name": "Ethereum",
                "symbol": "ETH",
                "color": "#627eea",
                "tvl": 58000000000.0,
                "marketCap": 390000000000.0,
                "volume24h": 15000000000.0,
                "change24h": -0.7,
                "tokens": [
                    {
                        "symbol": "LINK",
                        "name": "Chainlink",
                        "contractAddress": "0x514910771af9ca656af840dff83e8264ecf986ca",
                        "price": 14.2,
                        "change24h": 3.1,
                        "volume24h": 420000000.0,
                        "liquidity": 180000000.0,
                        "marketCap": 8900000000.0,
                        "color": "#2a5ada"
                    }
                ]
            },
            {
                "id": "solana",
                "name": "Solana",
                "symbol": "SOL",
                "color": "#14f195",
                "tvl": 4800000000.0,
                "marketCap": 81000000000.0,
                "volume24h": 3100000000.0,
                "change24h": 4.4
            }
        ],
        "fetchedAt": 1766001234
    }"##;

    #[test]
    fn parses_full_snapshot() {
        let snap = MarketSnapshot::from_json(SNAPSHOT_JSON).unwrap();
        assert_eq!(snap.chains.len(), 2);
        assert_eq!(snap.fetched_at, 1766001234);
        assert!((snap.root.dominance - 52.4).abs() < 1e-10);

        let eth = &snap.chains[0];
        assert_eq!(eth.id, "ethereum");
        assert_eq!(eth.symbol, "ETH");
        // Hash-prefixed hex colors must survive the fixture literal intact
        assert_eq!(eth.color, "#627eea");
        assert_eq!(eth.tokens.len(), 1);
        assert_eq!(eth.tokens[0].symbol, "LINK");
        assert_eq!(eth.tokens[0].color, "#2a5ada");
        assert!((eth.tokens[0].market_cap - 8.9e9).abs() < 1.0);
    }

    #[test]
    fn missing_tokens_default_to_empty() {
        let snap = MarketSnapshot::from_json(SNAPSHOT_JSON).unwrap();
        assert!(snap.chains[1].tokens.is_empty());
    }

    #[test]
    fn missing_fetched_at_defaults_to_zero() {
        let json = r#"{
            "root": {"price": 1.0, "change24h": 0.0, "marketCap": 10.0,
                     "volume24h": 2.0, "dominance": 50.0},
            "chains": []
        }"#;
        let snap = MarketSnapshot::from_json(json).unwrap();
        assert_eq!(snap.fetched_at, 0);
        assert!(snap.chains.is_empty());
    }

    #[test]
    fn malformed_json_is_an_error() {
        assert!(MarketSnapshot::from_json("{\"root\": null}").is_err());
        assert!(MarketSnapshot::from_json("not json").is_err());
    }

    #[test]
    fn snapshot_round_trips() {
        let snap = MarketSnapshot::from_json(SNAPSHOT_JSON).unwrap();
        let json = serde_json::to_string(&snap).unwrap();
        let back = MarketSnapshot::from_json(&json).unwrap();
        assert_eq!(back.chains[0].tokens[0].contract_address,
                   snap.chains[0].tokens[0].contract_address);
        assert!((back.root.market_cap - snap.root.market_cap).abs() < 1e-3);
    }
}
