// --- File: crates/gobarber_scheduling/src/session.rs ---
//! Drives a [`SchedulingState`] against the two gateways.

use std::future::Future;
use std::sync::Arc;

use chrono::NaiveDate;
use gobarber_common::services::{AvailabilityGateway, ProviderCatalog};
use gobarber_common::{log_error, log_result};
use gobarber_config::AppConfig;
use tracing::info;

use crate::error::SchedulingError;
use crate::service::ApiClient;
use crate::state::{
    today, AvailabilityRequest, AvailabilityResponse, RouteParams, SchedulingOptions,
    SchedulingState,
};

/// One open booking screen: its state plus the gateways it reads from.
///
/// The `select_*` methods run the resulting fetch to completion. Callers that
/// let fetches overlap use the state's transitions together with
/// [`BookingSession::dispatch`] and [`BookingSession::complete`].
pub struct BookingSession<C, G> {
    catalog: Arc<C>,
    gateway: Arc<G>,
    state: SchedulingState,
}

impl<C, G> BookingSession<C, G>
where
    C: ProviderCatalog + 'static,
    G: AvailabilityGateway + 'static,
{
    /// Opens a session: builds the initial state, loads the provider catalog
    /// and the initial day's availability.
    ///
    /// # Errors
    ///
    /// Only a blank `provider_id` fails; gateway failures leave empty lists.
    pub async fn start(
        catalog: Arc<C>,
        gateway: Arc<G>,
        provider_id: &str,
        today: NaiveDate,
        options: SchedulingOptions,
    ) -> Result<Self, SchedulingError> {
        let (state, initial) = SchedulingState::new(provider_id, today, options)?;
        let mut session = Self {
            catalog,
            gateway,
            state,
        };

        session.load_providers().await;
        session.run(initial).await;
        Ok(session)
    }

    /// Fetches the provider catalog; a failure leaves the list empty.
    ///
    /// Returns the number of providers now shown.
    pub async fn load_providers(&mut self) -> usize {
        let providers = match self.catalog.fetch_providers().await {
            Ok(providers) => providers,
            Err(e) => {
                log_error(&e, "Failed to fetch providers");
                Vec::new()
            }
        };
        info!("Loaded {} providers", providers.len());
        self.state.set_providers(providers);
        self.state.providers().len()
    }

    pub fn state(&self) -> &SchedulingState {
        &self.state
    }

    /// Mutable access for callers that drive transitions themselves.
    pub fn state_mut(&mut self) -> &mut SchedulingState {
        &mut self.state
    }

    /// Selects a provider and refreshes availability. Returns whether new availability was applied.
    pub async fn select_provider(&mut self, provider_id: &str) -> bool {
        match self.state.select_provider(provider_id) {
            Some(request) => self.run(request).await,
            None => false,
        }
    }

    /// Selects a date and refreshes availability. Returns whether new availability was applied.
    pub async fn select_date(&mut self, date: NaiveDate) -> bool {
        match self.state.select_date(date) {
            Some(request) => self.run(request).await,
            None => false,
        }
    }

    pub fn toggle_date_picker(&mut self) -> bool {
        self.state.toggle_date_picker()
    }

    pub fn select_hour(&mut self, hour: u8) {
        self.state.select_hour(hour);
    }

    /// Re-runs the fetch for the current provider and date, e.g. after a failure.
    pub async fn refresh(&mut self) -> bool {
        let request = self.state.reissue();
        self.run(request).await
    }

    /// Starts a fetch without borrowing the session, so it can be spawned or
    /// raced against later transitions.
    pub fn dispatch(
        &self,
        request: AvailabilityRequest,
    ) -> impl Future<Output = AvailabilityResponse> + Send + 'static {
        let gateway = Arc::clone(&self.gateway);
        async move { request.execute(gateway.as_ref()).await }
    }

    /// Feeds a fetch completion back; stale completions are ignored.
    pub fn complete(&mut self, response: AvailabilityResponse) -> bool {
        self.state.apply_availability(response)
    }

    async fn run(&mut self, request: AvailabilityRequest) -> bool {
        let response = self.dispatch(request).await;
        self.complete(response)
    }
}

impl BookingSession<ApiClient, ApiClient> {
    /// Opens a session against the configured backend, starting today.
    pub async fn connect(config: &AppConfig, route: &RouteParams) -> Result<Self, SchedulingError> {
        let provider_id = route.require_provider()?;
        let client = log_result(
            ApiClient::from_config(&config.api),
            "API client configured",
            "Invalid API configuration",
        )?;
        let client = Arc::new(client);
        Self::start(
            Arc::clone(&client),
            client,
            provider_id,
            today(),
            SchedulingOptions::from(&config.scheduling),
        )
        .await
    }
}
