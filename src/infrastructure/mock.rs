use crate::domain::market::{AssetQuote, MarketSnapshot, SparklineSeries};
use crate::domain::ports::MarketDataSource;
use anyhow::Result;
use async_trait::async_trait;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;
use tracing::info;

/// Assets the mock serves: (id, symbol, name, base price in EUR).
const CATALOG: [(&str, &str, &str, f64); 20] = [
    ("bitcoin", "btc", "Bitcoin", 96000.0),
    ("ethereum", "eth", "Ethereum", 3400.0),
    ("tether", "usdt", "Tether", 0.92),
    ("ripple", "xrp", "XRP", 2.1),
    ("binancecoin", "bnb", "BNB", 640.0),
    ("solana", "sol", "Solana", 210.0),
    ("usd-coin", "usdc", "USDC", 0.92),
    ("cardano", "ada", "Cardano", 0.85),
    ("dogecoin", "doge", "Dogecoin", 0.31),
    ("tron", "trx", "TRON", 0.23),
    ("avalanche-2", "avax", "Avalanche", 40.0),
    ("chainlink", "link", "Chainlink", 21.0),
    ("polkadot", "dot", "Polkadot", 6.4),
    ("litecoin", "ltc", "Litecoin", 98.0),
    ("shiba-inu", "shib", "Shiba Inu", 0.00002),
    ("uniswap", "uni", "Uniswap", 12.5),
    ("stellar", "xlm", "Stellar", 0.38),
    ("monero", "xmr", "Monero", 190.0),
    ("cosmos", "atom", "Cosmos", 6.1),
    ("aave", "aave", "Aave", 260.0),
];

const SERIES_LEN: u64 = 50;

/// Deterministic market source for offline development. Prices follow a
/// per-asset sine wave whose window slides forward one step per fetch, so
/// every poll produces visibly different cards and sparklines without any
/// network access.
pub struct MockMarketSource {
    tick: AtomicU64,
}

impl MockMarketSource {
    pub fn new() -> Self {
        Self {
            tick: AtomicU64::new(0),
        }
    }
}

impl Default for MockMarketSource {
    fn default() -> Self {
        Self::new()
    }
}

fn wave(base: f64, seed: u64, step: u64) -> f64 {
    let amplitude = 0.02 + 0.015 * (seed % 5) as f64;
    base * (1.0 + amplitude * (((seed * 7 + step) as f64) * 0.35).sin())
}

fn percent_change(current: f64, reference: f64) -> f64 {
    (current - reference) / reference * 100.0
}

#[async_trait]
impl MarketDataSource for MockMarketSource {
    async fn fetch_markets(&self) -> Result<MarketSnapshot> {
        let tick = self.tick.fetch_add(1, Ordering::Relaxed);

        // Small artificial latency so the loading state is visible in mock mode
        tokio::time::sleep(Duration::from_millis(150)).await;

        let quotes: Vec<AssetQuote> = CATALOG
            .iter()
            .enumerate()
            .map(|(rank, &(id, symbol, name, base))| {
                let seed = rank as u64 + 1;
                let last = tick + SERIES_LEN - 1;
                let price = wave(base, seed, last);

                // The series spans 7 days, so 24h is about 7 steps back
                let change_1h = percent_change(price, wave(base, seed, last - 1));
                let change_24h = percent_change(price, wave(base, seed, last - 7));
                let change_7d = percent_change(price, wave(base, seed, tick));

                let series: Vec<Option<f64>> = (0..SERIES_LEN)
                    .map(|step| Some(wave(base, seed, tick + step)))
                    .collect();

                AssetQuote {
                    id: id.to_string(),
                    symbol: symbol.to_string(),
                    name: name.to_string(),
                    image: String::new(),
                    current_price: Some(price),
                    market_cap_rank: Some(rank as u32 + 1),
                    total_volume: Some(base * 2_000_000.0 / (rank as f64 + 1.0)),
                    price_change_percentage_1h_in_currency: Some(change_1h),
                    price_change_percentage_24h: Some(change_24h),
                    price_change_percentage_7d_in_currency: Some(change_7d),
                    sparkline_in_7d: Some(SparklineSeries {
                        price: series,
                    }),
                }
            })
            .collect();

        info!(
            "MockMarketSource: Serving {} simulated quotes (tick {})",
            quotes.len(),
            tick
        );

        Ok(MarketSnapshot::new(quotes))
    }
}
