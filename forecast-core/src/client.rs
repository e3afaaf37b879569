use std::fmt::Debug;

use async_trait::async_trait;
use reqwest::{Client, Url};
use tracing::debug;

use crate::{
    config::Config,
    error::FetchError,
    model::{Forecast, RawResponse},
};

/// Hosted forecast service. Overridable through the config file for
/// self-hosted deployments.
pub const DEFAULT_ENDPOINT: &str = "https://api.cityforecast.dev/v1/forecast";

const API_KEY_HEADER: &str = "x-api-key";

/// Source of forecasts for a city.
///
/// One call, one network round trip, one outcome. Implementations do not
/// retry and do not marshal the result anywhere: the caller awaits the
/// future on whatever task or event loop it owns.
#[async_trait]
pub trait ForecastProvider: Send + Sync + Debug {
    async fn fetch_forecast(&self, city: &str) -> Result<Vec<Forecast>, FetchError>;
}

/// HTTP client for the forecast service.
///
/// Cheap to clone; clones share the underlying connection pool.
#[derive(Debug, Clone)]
pub struct ForecastClient {
    api_key: String,
    endpoint: Url,
    http: Client,
}

impl ForecastClient {
    /// Client against the hosted service.
    pub fn new(api_key: String) -> Result<Self, FetchError> {
        Self::with_endpoint(api_key, DEFAULT_ENDPOINT)
    }

    /// Client against an explicit endpoint. Fails before any I/O when the
    /// endpoint is not a valid URL.
    pub fn with_endpoint(api_key: String, endpoint: &str) -> Result<Self, FetchError> {
        let endpoint =
            Url::parse(endpoint).map_err(|err| FetchError::InvalidUrl(err.to_string()))?;

        Ok(Self { api_key, endpoint, http: Client::new() })
    }
}

#[async_trait]
impl ForecastProvider for ForecastClient {
    async fn fetch_forecast(&self, city: &str) -> Result<Vec<Forecast>, FetchError> {
        let res = self
            .http
            .get(self.endpoint.clone())
            .query(&[("city", city)])
            .header(API_KEY_HEADER, self.api_key.as_str())
            .send()
            .await?;

        let status = res.status();
        let body = res.text().await?;

        debug!(%status, body = %truncate_body(&body), "forecast service response");

        if !status.is_success() {
            return Err(FetchError::Status { status, body: truncate_body(&body) });
        }

        if body.trim().is_empty() {
            return Err(FetchError::NoData);
        }

        let raw: RawResponse = serde_json::from_str(&body)?;
        Ok(raw.into_forecasts())
    }
}

/// Construct a client from the on-disk config.
pub fn client_from_config(config: &Config) -> anyhow::Result<ForecastClient> {
    let api_key = config.api_key.as_deref().ok_or_else(|| {
        anyhow::anyhow!(
            "No API key configured.\n\
             Hint: run `forecast configure` and enter your API key."
        )
    })?;

    let endpoint = config.endpoint.as_deref().unwrap_or(DEFAULT_ENDPOINT);

    Ok(ForecastClient::with_endpoint(api_key.to_owned(), endpoint)?)
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    if body.len() > MAX { format!("{}...", &body[..MAX]) } else { body.to_string() }
}
