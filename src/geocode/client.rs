use std::time::Duration;

use log::debug;
use reqwest::Client;

use crate::config::PromptConfig;
use crate::utils::PromptError;

use super::types::{is_zip_query, DirectMatch, LocationResult, ZipResponse};

/// Client for the OpenWeatherMap geocoding endpoints.
///
/// Pure network read: no retries, no caching. Endpoint, credential, default
/// country and timeout all come from the config so tests can point it at a
/// stub server.
pub struct GeocodeClient {
    http: Client,
    base_url: String,
    api_key: Option<String>,
    default_country: String,
}

impl GeocodeClient {
    pub fn new(config: &PromptConfig) -> Result<Self, PromptError> {
        let http = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| PromptError::Transport(e.to_string()))?;

        Ok(Self {
            http,
            base_url: config.geo_base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
            default_country: config.default_country.clone(),
        })
    }

    /// Resolve a free-text query into a location.
    ///
    /// Credential and input validation happen before any request is issued.
    pub async fn geocode(&self, query: &str) -> Result<LocationResult, PromptError> {
        let q = query.trim();
        if q.is_empty() {
            return Err(PromptError::EmptyQuery);
        }
        let key = self.api_key.as_deref().ok_or(PromptError::MissingApiKey)?;

        if is_zip_query(q) {
            self.lookup_zip(q, key).await
        } else {
            self.lookup_direct(q, key).await
        }
    }

    async fn lookup_zip(&self, code: &str, key: &str) -> Result<LocationResult, PromptError> {
        // A query that already carries a country passes through unchanged
        let zip_param = if code.contains(',') {
            code.to_string()
        } else {
            format!("{},{}", code, self.default_country)
        };

        let url = format!("{}/zip", self.base_url);
        debug!("ZIP lookup for {zip_param}");

        let response = self
            .http
            .get(&url)
            .query(&[("zip", zip_param.as_str()), ("appid", key)])
            .send()
            .await?
            .error_for_status()?;

        let body: ZipResponse = response.json().await?;

        let (Some(lat), Some(lon)) = (body.lat, body.lon) else {
            return Err(PromptError::NoResult);
        };

        Ok(LocationResult {
            label: body.label(code),
            latitude: lat,
            longitude: lon,
            raw_query: code.to_string(),
        })
    }

    async fn lookup_direct(&self, q: &str, key: &str) -> Result<LocationResult, PromptError> {
        let url = format!("{}/direct", self.base_url);
        debug!("Free-form lookup for {q}");

        let response = self
            .http
            .get(&url)
            .query(&[("q", q), ("limit", "1"), ("appid", key)])
            .send()
            .await?
            .error_for_status()?;

        let matches: Vec<DirectMatch> = response.json().await?;
        let first = matches.into_iter().next().ok_or(PromptError::NoResult)?;

        // A match without coordinates is useless to the widget
        let (Some(lat), Some(lon)) = (first.lat, first.lon) else {
            return Err(PromptError::NoResult);
        };

        Ok(LocationResult {
            label: first.label(q),
            latitude: lat,
            longitude: lon,
            raw_query: q.to_string(),
        })
    }
}
