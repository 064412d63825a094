// --- File: crates/gobarber_common/src/services.rs ---
//! Gateway abstractions for the GoBarber backend.
//!
//! The scheduling core talks to the backend only through these traits, so the
//! HTTP implementation can be swapped for an in-memory one in tests.

use std::error::Error as StdError;
use std::future::Future;
use std::pin::Pin;

use crate::models::{AvailabilitySlot, Provider};

/// Type alias for a boxed future that returns a Result
pub type BoxFuture<'a, T, E> = Pin<Box<dyn Future<Output = Result<T, E>> + Send + 'a>>;

/// Source of the providers a client can book with.
pub trait ProviderCatalog: Send + Sync {
    /// Error type returned by catalog operations.
    type Error: StdError + Send + Sync + 'static;

    /// Fetch the selectable providers, in the order the backend lists them.
    fn fetch_providers(&self) -> BoxFuture<'_, Vec<Provider>, Self::Error>;
}

/// Source of the hour-by-hour availability of a provider on a given day.
pub trait AvailabilityGateway: Send + Sync {
    /// Error type returned by gateway operations.
    type Error: StdError + Send + Sync + 'static;

    /// Fetch one day's availability.
    ///
    /// `month` is 1-based (1-12) and `day` is the day of month (1-31).
    /// The call is a pure read and may be repeated freely.
    fn fetch_availability(
        &self,
        provider_id: &str,
        year: i32,
        month: u32,
        day: u32,
    ) -> BoxFuture<'_, Vec<AvailabilitySlot>, Self::Error>;
}
