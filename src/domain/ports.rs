use crate::domain::market::MarketSnapshot;
use anyhow::Result;
use async_trait::async_trait;

/// Anything able to produce the current market snapshot on demand.
///
/// The refresh scheduler only knows this port; production wires the
/// CoinGecko client behind it, tests and mock mode wire an in-process fake.
#[async_trait]
pub trait MarketDataSource: Send + Sync {
    async fn fetch_markets(&self) -> Result<MarketSnapshot>;
}
