// --- File: crates/gobarber_scheduling/src/service.rs ---
//! GoBarber API gateway implementation.
//!
//! This module provides an implementation of the `ProviderCatalog` and
//! `AvailabilityGateway` traits on top of the backend's REST API.

use gobarber_common::services::{AvailabilityGateway, BoxFuture, ProviderCatalog};
use gobarber_common::{create_client, join_url, AvailabilitySlot, Provider, HTTP_CLIENT};
use gobarber_config::ApiConfig;
use reqwest::{Client, Url};
use serde::de::DeserializeOwned;
use tracing::{debug, info};

use crate::error::SchedulingError;

/// Client for the GoBarber REST API.
///
/// One instance serves both reads the booking screen needs: the provider list
/// and a provider's day availability.
#[derive(Clone)]
pub struct ApiClient {
    /// HTTP client used for every request
    client: Client,

    /// Root of the API, e.g. `http://localhost:3333`
    base_url: String,

    /// Path of the provider listing, relative to `base_url`
    providers_path: String,
}

impl ApiClient {
    /// Creates a client on top of the shared HTTP client.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: HTTP_CLIENT.clone(),
            base_url: base_url.into(),
            providers_path: "providers".to_string(),
        }
    }

    /// Creates a client from the `[api]` configuration section.
    ///
    /// # Errors
    ///
    /// Returns `SchedulingError::Config` if the base URL is blank, or
    /// `SchedulingError::Request` if the HTTP client cannot be built.
    pub fn from_config(config: &ApiConfig) -> Result<Self, SchedulingError> {
        if config.base_url.trim().is_empty() {
            return Err(SchedulingError::Config(
                "api.base_url must not be empty".to_string(),
            ));
        }

        let client = create_client(config.timeout_secs, true)?;
        Ok(Self {
            client,
            base_url: config.base_url.clone(),
            providers_path: config.providers_path.clone(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// URL of the provider listing.
    pub fn providers_url(&self) -> String {
        join_url(&self.base_url, &self.providers_path)
    }

    /// URL of a provider's day availability (query parameters not included).
    ///
    /// The provider id is opaque and is percent-encoded as a single path segment.
    pub fn day_availability_url(&self, provider_id: &str) -> Result<Url, SchedulingError> {
        let mut url = Url::parse(&self.providers_url())
            .map_err(|e| SchedulingError::Config(format!("invalid api.base_url: {}", e)))?;
        url.path_segments_mut()
            .map_err(|_| SchedulingError::Config("api.base_url cannot hold a path".to_string()))?
            .pop_if_empty()
            .push(provider_id)
            .push("day-availability");
        Ok(url)
    }

    /// Issues a GET and decodes the JSON body.
    ///
    /// Non-2xx statuses and undecodable bodies are errors; nothing is retried.
    async fn get_json<T: DeserializeOwned>(
        &self,
        url: &str,
        query: &[(&str, String)],
    ) -> Result<T, SchedulingError> {
        debug!("GET {} {:?}", url, query);
        let response = self.client.get(url).query(query).send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(SchedulingError::UnexpectedStatus {
                status: status.as_u16(),
                url: url.to_string(),
                body,
            });
        }

        let bytes = response.bytes().await?;
        serde_json::from_slice(&bytes)
            .map_err(|e| SchedulingError::MalformedResponse(format!("{}: {}", url, e)))
    }
}

impl ProviderCatalog for ApiClient {
    type Error = SchedulingError;

    /// Retrieves the providers a client can book with.
    ///
    /// # Errors
    ///
    /// Returns a `SchedulingError` if the request fails, the backend answers
    /// with a non-success status, or any entry lacks `id`, `name` or `avatar_url`.
    fn fetch_providers(&self) -> BoxFuture<'_, Vec<Provider>, Self::Error> {
        Box::pin(async move {
            let providers: Vec<Provider> = self.get_json(&self.providers_url(), &[]).await?;
            info!("Fetched {} providers", providers.len());
            Ok(providers)
        })
    }
}

impl AvailabilityGateway for ApiClient {
    type Error = SchedulingError;

    /// Retrieves the hour-by-hour availability of a provider on one day.
    ///
    /// Calls `GET providers/{provider_id}/day-availability?year=&month=&day=`.
    ///
    /// # Errors
    ///
    /// Besides transport and status failures, a response containing an hour
    /// outside `[0, 23]` is rejected as malformed.
    fn fetch_availability(
        &self,
        provider_id: &str,
        year: i32,
        month: u32,
        day: u32,
    ) -> BoxFuture<'_, Vec<AvailabilitySlot>, Self::Error> {
        let url = self.day_availability_url(provider_id);

        Box::pin(async move {
            let url = url?;
            let query = [
                ("year", year.to_string()),
                ("month", month.to_string()),
                ("day", day.to_string()),
            ];
            let slots: Vec<AvailabilitySlot> = self.get_json(url.as_str(), &query).await?;

            if let Some(bad) = slots.iter().find(|slot| !slot.is_valid_hour()) {
                return Err(SchedulingError::MalformedResponse(format!(
                    "hour {} is outside of a day",
                    bad.hour
                )));
            }

            debug!(
                "Fetched {} slots for {} on {}-{:02}-{:02}",
                slots.len(),
                url,
                year,
                month,
                day
            );
            Ok(slots)
        })
    }
}
