use async_trait::async_trait;
use reqwest::StatusCode;
use tracing::{debug, instrument};

use crate::core::{FetchError, RateFeed, RateTable};

const USER_AGENT: &str = concat!("floatfx/", env!("CARGO_PKG_VERSION"));

// FloatRatesProvider implementation for RateFeed
pub struct FloatRatesProvider {
    base_url: String,
}

impl FloatRatesProvider {
    pub fn new(base_url: &str) -> Self {
        FloatRatesProvider {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Daily table URL for `base_code`; the code is lowercased, nothing else.
    pub fn daily_url(&self, base_code: &str) -> String {
        format!("{}/daily/{}.json", self.base_url, base_code.to_lowercase())
    }
}

#[async_trait]
impl RateFeed for FloatRatesProvider {
    #[instrument(
        name = "FloatRatesFetch",
        skip(self),
        fields(base = %base_code)
    )]
    async fn fetch_rates(&self, base_code: &str) -> Result<RateTable, FetchError> {
        let url = self.daily_url(base_code);
        debug!("Requesting rate table from {}", url);

        let network_error = |source| FetchError::Network {
            url: url.clone(),
            source,
        };

        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .map_err(network_error)?;
        let response = client.get(&url).send().await.map_err(network_error)?;

        debug!(response = ?response, "Received FloatRates response");

        let status = response.status();
        if status != StatusCode::OK {
            return Err(FetchError::UpstreamStatus {
                url: url.clone(),
                status,
            });
        }

        let text = response.text().await.map_err(network_error)?;

        let rates: RateTable = serde_json::from_str(&text)
            .map_err(|source| FetchError::Decode { url: url.clone(), source })?;

        debug!("Decoded {} rates for {}", rates.len(), base_code);
        Ok(rates)
    }
}
