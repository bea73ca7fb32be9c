use reqwest::Client;

pub struct HttpClientFactory;

impl HttpClientFactory {
    /// Creates the shared HTTP client.
    ///
    /// No request timeout and no retry layer: a failed poll surfaces as an
    /// error banner and the next scheduled tick tries again.
    pub fn create_client() -> Client {
        Client::builder()
            .pool_max_idle_per_host(5)
            .user_agent(concat!("criptoflash/", env!("CARGO_PKG_VERSION")))
            .build()
            .unwrap_or_else(|_| Client::new())
    }
}
