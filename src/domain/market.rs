use chrono::{DateTime, Utc};
use serde::Deserialize;

/// One asset row as delivered by the CoinGecko `/coins/markets` endpoint.
///
/// Field names mirror the upstream JSON. Every numeric field is optional:
/// the API reports `null` for assets it has no data for, and that must never
/// fail a whole snapshot.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AssetQuote {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub symbol: String,
    #[serde(default)]
    pub name: String,
    /// Icon URL reported by the API.
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub current_price: Option<f64>,
    #[serde(default)]
    pub total_volume: Option<f64>,
    #[serde(default)]
    pub market_cap_rank: Option<u32>,
    #[serde(default)]
    pub price_change_percentage_1h_in_currency: Option<f64>,
    #[serde(default)]
    pub price_change_percentage_24h: Option<f64>,
    #[serde(default)]
    pub price_change_percentage_7d_in_currency: Option<f64>,
    #[serde(default)]
    pub sparkline_in_7d: Option<SparklineSeries>,
}

/// 7-day hourly price series attached to a quote when `sparkline=true`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SparklineSeries {
    #[serde(default)]
    pub price: Vec<Option<f64>>,
}

impl AssetQuote {
    /// 24h percentage change with the API's `null` coalesced to zero.
    pub fn change_24h(&self) -> f64 {
        self.price_change_percentage_24h.unwrap_or(0.0)
    }

    /// Historical price samples, or an empty slice when the API sent none.
    pub fn sparkline_prices(&self) -> &[Option<f64>] {
        self.sparkline_in_7d
            .as_ref()
            .map(|s| s.price.as_slice())
            .unwrap_or(&[])
    }
}

/// One complete fetched set of asset quotes at a point in time.
/// Quote order is the API's ranking order and is never re-sorted.
#[derive(Debug, Clone, Default)]
pub struct MarketSnapshot {
    pub quotes: Vec<AssetQuote>,
    pub fetched_at: DateTime<Utc>,
}

impl MarketSnapshot {
    pub fn new(quotes: Vec<AssetQuote>) -> Self {
        Self {
            quotes,
            fetched_at: Utc::now(),
        }
    }

    /// Case-insensitive substring filter over name and symbol.
    /// An empty (or all-whitespace) query returns everything in order.
    pub fn filter<'a>(&'a self, query: &str) -> Vec<&'a AssetQuote> {
        let q = query.trim().to_lowercase();
        if q.is_empty() {
            return self.quotes.iter().collect();
        }
        self.quotes
            .iter()
            .filter(|m| m.name.to_lowercase().contains(&q) || m.symbol.to_lowercase().contains(&q))
            .collect()
    }
}

/// Current refresh lifecycle state. Exactly one is live at any time.
#[derive(Debug, Clone, Default)]
pub enum RefreshState {
    /// Startup state, before the first fetch has completed either way.
    #[default]
    Loading,
    Ready(MarketSnapshot),
    Failed(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quote(name: &str, symbol: &str) -> AssetQuote {
        AssetQuote {
            name: name.to_string(),
            symbol: symbol.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn filter_matches_symbol_case_insensitively() {
        let snapshot = MarketSnapshot::new(vec![
            quote("Bitcoin", "btc"),
            quote("Ethereum", "eth"),
        ]);

        let hits = snapshot.filter("ETH");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name, "Ethereum");
    }

    #[test]
    fn filter_matches_name_substring() {
        let snapshot = MarketSnapshot::new(vec![
            quote("Bitcoin", "btc"),
            quote("Bitcoin Cash", "bch"),
            quote("Ethereum", "eth"),
        ]);

        let hits = snapshot.filter("bitco");
        assert_eq!(hits.len(), 2);
        assert_eq!(hits[0].symbol, "btc");
        assert_eq!(hits[1].symbol, "bch");
    }

    #[test]
    fn empty_query_returns_everything_in_order() {
        let snapshot = MarketSnapshot::new(vec![
            quote("Bitcoin", "btc"),
            quote("Ethereum", "eth"),
        ]);

        let all = snapshot.filter("");
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].name, "Bitcoin");
        assert_eq!(all[1].name, "Ethereum");

        // Whitespace-only behaves like empty.
        assert_eq!(snapshot.filter("   ").len(), 2);
    }

    #[test]
    fn quote_deserializes_with_nulls_and_gaps() {
        let json = r#"{
            "id": "bitcoin",
            "symbol": "btc",
            "name": "Bitcoin",
            "image": "https://assets.coingecko.com/coins/images/1/large/bitcoin.png",
            "current_price": 57210.4,
            "total_volume": null,
            "market_cap_rank": 1,
            "price_change_percentage_24h": null,
            "sparkline_in_7d": { "price": [1.0, null, 3.0] }
        }"#;

        let q: AssetQuote = serde_json::from_str(json).unwrap();
        assert_eq!(q.id, "bitcoin");
        assert_eq!(q.current_price, Some(57210.4));
        assert_eq!(q.total_volume, None);
        assert_eq!(q.change_24h(), 0.0);
        assert_eq!(q.price_change_percentage_1h_in_currency, None);
        assert_eq!(q.sparkline_prices(), &[Some(1.0), None, Some(3.0)]);
    }

    #[test]
    fn quote_deserializes_from_minimal_object() {
        let q: AssetQuote = serde_json::from_str("{}").unwrap();
        assert!(q.name.is_empty());
        assert_eq!(q.change_24h(), 0.0);
        assert!(q.sparkline_prices().is_empty());
    }
}
