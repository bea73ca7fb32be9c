//! CoinGecko Market Data Source
//!
//! Polls the public `/coins/markets` endpoint for the top assets by market
//! cap, including the 7-day sparkline series and the 1h/24h/7d percentage
//! changes used by the dashboard cards.

use crate::config::Config;
use crate::domain::errors::FeedError;
use crate::domain::market::{AssetQuote, MarketSnapshot};
use crate::domain::ports::MarketDataSource;
use crate::infrastructure::http_client_factory::HttpClientFactory;
use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, info};
use url::Url;

pub struct CoinGeckoMarketSource {
    client: Client,
    markets_url: Url,
}

impl CoinGeckoMarketSource {
    pub fn new(config: &Config) -> Result<Self> {
        let markets_url = markets_url(
            &config.api_base_url,
            &config.vs_currency,
            config.per_page,
            &config.locale,
        )?;

        Ok(Self {
            client: HttpClientFactory::create_client(),
            markets_url,
        })
    }

    async fn fetch_internal(&self) -> Result<MarketSnapshot, FeedError> {
        debug!("CoinGeckoMarketSource: GET {}", self.markets_url);

        let response = self.client.get(self.markets_url.clone()).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FeedError::UpstreamStatus {
                status: status.as_u16(),
            });
        }

        let payload = response.json::<serde_json::Value>().await?;
        let quotes = decode_markets(payload);

        info!("CoinGeckoMarketSource: Fetched {} quotes", quotes.len());

        Ok(MarketSnapshot::new(quotes))
    }
}

#[async_trait]
impl MarketDataSource for CoinGeckoMarketSource {
    async fn fetch_markets(&self) -> Result<MarketSnapshot> {
        Ok(self.fetch_internal().await?)
    }
}

/// Builds the markets query URL. Query parameter order matches what the
/// CoinGecko docs show for this endpoint.
fn markets_url(base_url: &str, vs_currency: &str, per_page: u32, locale: &str) -> Result<Url> {
    let endpoint = format!("{}/coins/markets", base_url.trim_end_matches('/'));
    let mut url = Url::parse(&endpoint)
        .with_context(|| format!("Invalid CoinGecko base URL: {}", base_url))?;

    url.query_pairs_mut()
        .append_pair("vs_currency", vs_currency)
        .append_pair("order", "market_cap_desc")
        .append_pair("per_page", &per_page.to_string())
        .append_pair("page", "1")
        .append_pair("sparkline", "true")
        .append_pair("price_change_percentage", "1h,24h,7d")
        .append_pair("locale", locale);

    Ok(url)
}

/// Decodes the response body into quotes. The endpoint normally returns a
/// JSON array; anything else (rate-limit error objects, for instance) decodes
/// to an empty list, and malformed elements inside an otherwise good array
/// are skipped rather than failing the whole poll.
fn decode_markets(payload: serde_json::Value) -> Vec<AssetQuote> {
    match payload {
        serde_json::Value::Array(items) => items
            .into_iter()
            .filter_map(|item| serde_json::from_value::<AssetQuote>(item).ok())
            .collect(),
        _ => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_markets_url_query_pairs() {
        let url = markets_url("https://api.coingecko.com/api/v3", "eur", 20, "es").unwrap();

        assert_eq!(url.path(), "/api/v3/coins/markets");

        let pairs: Vec<(String, String)> = url
            .query_pairs()
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect();

        assert_eq!(
            pairs,
            vec![
                ("vs_currency".to_string(), "eur".to_string()),
                ("order".to_string(), "market_cap_desc".to_string()),
                ("per_page".to_string(), "20".to_string()),
                ("page".to_string(), "1".to_string()),
                ("sparkline".to_string(), "true".to_string()),
                ("price_change_percentage".to_string(), "1h,24h,7d".to_string()),
                ("locale".to_string(), "es".to_string()),
            ]
        );
    }

    #[test]
    fn test_markets_url_tolerates_trailing_slash() {
        let url = markets_url("http://localhost:9200/api/v3/", "usd", 5, "en").unwrap();
        assert_eq!(url.path(), "/api/v3/coins/markets");
    }

    #[test]
    fn test_decode_markets_array() {
        let payload = json!([
            {
                "id": "bitcoin",
                "symbol": "btc",
                "name": "Bitcoin",
                "current_price": 58231.12,
                "market_cap_rank": 1,
                "price_change_percentage_24h": -1.2,
                "sparkline_in_7d": { "price": [57000.0, null, 58231.12] }
            },
            {
                "id": "ethereum",
                "symbol": "eth",
                "name": "Ethereum"
            }
        ]);

        let quotes = decode_markets(payload);

        assert_eq!(quotes.len(), 2);
        assert_eq!(quotes[0].id, "bitcoin");
        assert_eq!(quotes[0].sparkline_prices().len(), 3);
        assert_eq!(quotes[1].id, "ethereum");
        assert_eq!(quotes[1].current_price, None);
    }

    #[test]
    fn test_decode_markets_skips_malformed_elements() {
        let payload = json!([
            { "id": "bitcoin", "symbol": "btc", "name": "Bitcoin" },
            42,
            { "id": 7 },
            { "id": "ethereum", "symbol": "eth", "name": "Ethereum" }
        ]);

        let quotes = decode_markets(payload);

        assert_eq!(quotes.len(), 2);
        assert_eq!(quotes[0].id, "bitcoin");
        assert_eq!(quotes[1].id, "ethereum");
    }

    #[test]
    fn test_decode_markets_non_array_is_empty() {
        let payload = json!({ "status": { "error_code": 429 } });
        assert!(decode_markets(payload).is_empty());

        assert!(decode_markets(json!("throttled")).is_empty());
        assert!(decode_markets(serde_json::Value::Null).is_empty());
    }
}
