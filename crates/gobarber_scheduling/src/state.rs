// --- File: crates/gobarber_scheduling/src/state.rs ---
//! Selection state of the booking screen.
//!
//! `SchedulingState` is an explicit struct owned by one screen instance. Every
//! user action is a transition method; transitions that change the
//! `(provider, date)` pair hand back an [`AvailabilityRequest`] that the caller
//! runs against an [`AvailabilityGateway`]. The completion is fed back through
//! [`SchedulingState::apply_availability`], which only accepts the response to
//! the most recently issued request.

use chrono::{Datelike, Local, NaiveDate, NaiveDateTime};
use gobarber_common::services::AvailabilityGateway;
use gobarber_common::{log_error, AvailabilitySlot, Provider};
use gobarber_config::SchedulingConfig;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::error::SchedulingError;
use crate::logic::{FormattedSlot, PartitionCache, PeriodSlots};

/// Today's date on the local wall clock.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Navigation parameters the booking screen is opened with.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct RouteParams {
    #[serde(rename = "providerID")]
    pub provider_id: Option<String>,
}

impl RouteParams {
    pub fn new(provider_id: impl Into<String>) -> Self {
        Self {
            provider_id: Some(provider_id.into()),
        }
    }

    /// The provider the screen starts with; a missing or blank id is a precondition violation.
    pub fn require_provider(&self) -> Result<&str, SchedulingError> {
        match self.provider_id.as_deref().map(str::trim) {
            Some(id) if !id.is_empty() => Ok(id),
            _ => Err(SchedulingError::MissingProvider),
        }
    }
}

/// Behaviour switches of the scheduling screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SchedulingOptions {
    /// Close the date picker when a date is picked.
    pub auto_dismiss_date_picker: bool,
}

impl Default for SchedulingOptions {
    fn default() -> Self {
        Self {
            auto_dismiss_date_picker: true,
        }
    }
}

impl From<&SchedulingConfig> for SchedulingOptions {
    fn from(config: &SchedulingConfig) -> Self {
        Self {
            auto_dismiss_date_picker: config.auto_dismiss_date_picker,
        }
    }
}

/// The `(provider, date)` pair availability is fetched for.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct AvailabilityKey {
    pub provider_id: String,
    pub date: NaiveDate,
}

impl AvailabilityKey {
    pub fn new(provider_id: impl Into<String>, date: NaiveDate) -> Self {
        Self {
            provider_id: provider_id.into(),
            date,
        }
    }

    pub fn year(&self) -> i32 {
        self.date.year()
    }

    /// 1-based month
    pub fn month(&self) -> u32 {
        self.date.month()
    }

    pub fn day(&self) -> u32 {
        self.date.day()
    }
}

/// A fetch issued by a state transition, tagged with its sequence number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AvailabilityRequest {
    seq: u64,
    key: AvailabilityKey,
}

impl AvailabilityRequest {
    pub fn seq(&self) -> u64 {
        self.seq
    }

    pub fn key(&self) -> &AvailabilityKey {
        &self.key
    }

    /// Runs the request once against `gateway`.
    ///
    /// A failed fetch is logged and turned into an empty slot list carrying the
    /// error message; it is never retried.
    pub async fn execute<G>(self, gateway: &G) -> AvailabilityResponse
    where
        G: AvailabilityGateway + ?Sized,
    {
        let result = gateway
            .fetch_availability(
                &self.key.provider_id,
                self.key.year(),
                self.key.month(),
                self.key.day(),
            )
            .await;

        match result {
            Ok(slots) => self.respond(slots),
            Err(e) => {
                log_error(&e, "Failed to fetch availability");
                self.fail(e.to_string())
            }
        }
    }

    /// Completes the request with the given slots.
    pub fn respond(&self, slots: Vec<AvailabilitySlot>) -> AvailabilityResponse {
        AvailabilityResponse {
            seq: self.seq,
            key: self.key.clone(),
            slots,
            error: None,
        }
    }

    /// Completes the request as failed: no slots, error kept for the presentation layer.
    pub fn fail(&self, message: impl Into<String>) -> AvailabilityResponse {
        AvailabilityResponse {
            seq: self.seq,
            key: self.key.clone(),
            slots: Vec::new(),
            error: Some(message.into()),
        }
    }
}

/// The completion of an [`AvailabilityRequest`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AvailabilityResponse {
    pub seq: u64,
    pub key: AvailabilityKey,
    pub slots: Vec<AvailabilitySlot>,
    pub error: Option<String>,
}

/// What a booking submission needs from the current selection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BookingDraft {
    pub provider_id: String,
    pub date: NaiveDate,
    pub hour: u8,
    /// Local wall-clock start of the appointment
    pub starts_at: NaiveDateTime,
}

/// Everything the presentation layer renders, in one value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SchedulingView {
    pub providers: Vec<Provider>,
    pub selected_provider_id: String,
    pub selected_date: NaiveDate,
    pub date_picker_open: bool,
    pub morning: Vec<FormattedSlot>,
    pub afternoon: Vec<FormattedSlot>,
    pub selected_hour: u8,
    pub loading: bool,
    pub error: Option<String>,
}

/// Selection state of one booking screen.
#[derive(Debug)]
pub struct SchedulingState {
    provider_id: String,
    date: NaiveDate,
    hour: u8,
    date_picker_open: bool,
    options: SchedulingOptions,

    providers: Vec<Provider>,
    availability: Vec<AvailabilitySlot>,
    last_error: Option<String>,
    partition: PartitionCache,

    last_seq: u64,
    pending: Option<AvailabilityRequest>,
}

impl SchedulingState {
    /// Creates the initial state and the request for the initial availability.
    ///
    /// The date starts at `today`, the hour at 0 and the picker closed.
    ///
    /// # Errors
    ///
    /// `SchedulingError::MissingProvider` if `provider_id` is blank.
    pub fn new(
        provider_id: &str,
        today: NaiveDate,
        options: SchedulingOptions,
    ) -> Result<(Self, AvailabilityRequest), SchedulingError> {
        let provider_id = provider_id.trim();
        if provider_id.is_empty() {
            return Err(SchedulingError::MissingProvider);
        }

        let mut state = Self {
            provider_id: provider_id.to_string(),
            date: today,
            hour: 0,
            date_picker_open: false,
            options,
            providers: Vec::new(),
            availability: Vec::new(),
            last_error: None,
            partition: PartitionCache::new(),
            last_seq: 0,
            pending: None,
        };
        let initial = state.issue_request();
        Ok((state, initial))
    }

    /// Creates the initial state from the screen's navigation parameters.
    pub fn from_route(
        route: &RouteParams,
        today: NaiveDate,
        options: SchedulingOptions,
    ) -> Result<(Self, AvailabilityRequest), SchedulingError> {
        Self::new(route.require_provider()?, today, options)
    }

    fn issue_request(&mut self) -> AvailabilityRequest {
        self.last_seq += 1;
        let request = AvailabilityRequest {
            seq: self.last_seq,
            key: self.current_key(),
        };
        debug!(
            "Issued availability request #{} for provider {} on {}",
            request.seq, request.key.provider_id, request.key.date
        );
        self.pending = Some(request.clone());
        request
    }

    /// Drops the slots shown for the previous `(provider, date)` pair.
    fn clear_availability(&mut self) {
        self.availability.clear();
        self.last_error = None;
        self.partition.refresh(&self.availability);
    }

    // --- Transitions ---

    /// Selects a provider. Date and hour are kept.
    ///
    /// Returns the refetch to run, or `None` when the provider did not change
    /// or `provider_id` is blank.
    pub fn select_provider(&mut self, provider_id: &str) -> Option<AvailabilityRequest> {
        let provider_id = provider_id.trim();
        if provider_id.is_empty() {
            debug!("Ignoring selection of a blank provider id");
            return None;
        }
        if self.provider_id == provider_id {
            return None;
        }
        self.provider_id = provider_id.to_string();
        self.clear_availability();
        Some(self.issue_request())
    }

    /// Selects a date, closing the picker when configured to auto-dismiss.
    ///
    /// Returns the refetch to run, or `None` when the date did not change.
    pub fn select_date(&mut self, date: NaiveDate) -> Option<AvailabilityRequest> {
        if self.options.auto_dismiss_date_picker {
            self.date_picker_open = false;
        }
        if self.date == date {
            return None;
        }
        self.date = date;
        self.clear_availability();
        Some(self.issue_request())
    }

    /// Flips the date picker's visibility and returns the new value.
    pub fn toggle_date_picker(&mut self) -> bool {
        self.date_picker_open = !self.date_picker_open;
        self.date_picker_open
    }

    /// Selects an hour.
    ///
    /// The hour is not checked against the current availability: the
    /// presentation layer only offers enabled slots. See [`Self::is_hour_available`].
    pub fn select_hour(&mut self, hour: u8) {
        if !self.is_hour_available(hour) {
            debug!("Hour {} selected while not marked available", hour);
        }
        self.hour = hour;
    }

    /// Applies a fetch completion if it answers the latest request for the current key.
    ///
    /// The availability list is replaced, never merged. Returns whether the
    /// response was applied; stale responses leave the state untouched.
    pub fn apply_availability(&mut self, response: AvailabilityResponse) -> bool {
        let is_latest = self
            .pending
            .as_ref()
            .is_some_and(|pending| pending.seq == response.seq);
        if !is_latest || response.key != self.current_key() {
            debug!(
                "Discarding stale availability response #{} (latest #{})",
                response.seq, self.last_seq
            );
            return false;
        }

        if let Some(error) = &response.error {
            warn!(
                "Availability for provider {} on {} unavailable: {}",
                response.key.provider_id, response.key.date, error
            );
        } else {
            info!(
                "Applied {} availability slots for provider {} on {}",
                response.slots.len(),
                response.key.provider_id,
                response.key.date
            );
        }

        self.pending = None;
        self.availability = response.slots;
        self.last_error = response.error;
        self.partition.refresh(&self.availability);
        true
    }

    /// Issues a fresh request for the current provider and date, superseding any pending one.
    pub fn reissue(&mut self) -> AvailabilityRequest {
        self.issue_request()
    }

    /// Replaces the provider choices.
    pub fn set_providers(&mut self, providers: Vec<Provider>) {
        self.providers = providers;
    }

    // --- Read side ---

    pub fn providers(&self) -> &[Provider] {
        &self.providers
    }

    pub fn selected_provider_id(&self) -> &str {
        &self.provider_id
    }

    /// The selected provider, if it is part of the fetched catalog.
    pub fn selected_provider(&self) -> Option<&Provider> {
        self.providers.iter().find(|p| p.id == self.provider_id)
    }

    pub fn is_provider_selected(&self, provider_id: &str) -> bool {
        self.provider_id == provider_id
    }

    pub fn selected_date(&self) -> NaiveDate {
        self.date
    }

    pub fn selected_hour(&self) -> u8 {
        self.hour
    }

    pub fn is_date_picker_open(&self) -> bool {
        self.date_picker_open
    }

    pub fn options(&self) -> SchedulingOptions {
        self.options
    }

    /// The last accepted raw availability list.
    pub fn availability(&self) -> &[AvailabilitySlot] {
        &self.availability
    }

    /// Error message of the last accepted fetch, if it failed.
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    pub fn periods(&self) -> &PeriodSlots {
        self.partition.current()
    }

    pub fn morning(&self) -> &[FormattedSlot] {
        &self.partition.current().morning
    }

    pub fn afternoon(&self) -> &[FormattedSlot] {
        &self.partition.current().afternoon
    }

    pub fn current_key(&self) -> AvailabilityKey {
        AvailabilityKey::new(self.provider_id.clone(), self.date)
    }

    /// The request whose completion is still awaited, if any.
    pub fn pending_request(&self) -> Option<&AvailabilityRequest> {
        self.pending.as_ref()
    }

    pub fn is_loading(&self) -> bool {
        self.pending.is_some()
    }

    pub fn is_hour_available(&self, hour: u8) -> bool {
        self.availability
            .iter()
            .any(|slot| slot.hour == hour && slot.available)
    }

    /// The selection as it would be submitted, or `None` if the hour is not a valid hour of day.
    pub fn booking_draft(&self) -> Option<BookingDraft> {
        let starts_at = self.date.and_hms_opt(u32::from(self.hour), 0, 0)?;
        Some(BookingDraft {
            provider_id: self.provider_id.clone(),
            date: self.date,
            hour: self.hour,
            starts_at,
        })
    }

    pub fn view(&self) -> SchedulingView {
        SchedulingView {
            providers: self.providers.clone(),
            selected_provider_id: self.provider_id.clone(),
            selected_date: self.date,
            date_picker_open: self.date_picker_open,
            morning: self.morning().to_vec(),
            afternoon: self.afternoon().to_vec(),
            selected_hour: self.hour,
            loading: self.is_loading(),
            error: self.last_error.clone(),
        }
    }
}
