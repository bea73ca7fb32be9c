pub mod coingecko;
pub mod http_client_factory;
pub mod mock;

pub use coingecko::CoinGeckoMarketSource;
pub use mock::MockMarketSource;
