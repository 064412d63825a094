// --- File: crates/gobarber_scheduling/src/lib.rs ---
// Declare modules within this crate
pub mod error;
pub mod logic;
#[cfg(test)]
mod logic_proptest;
#[cfg(test)]
mod logic_test;
pub mod service;
pub mod session;
pub mod state;

pub use error::SchedulingError;
pub use logic::{
    format_hour_label, partition_by_period, FormattedSlot, PartitionCache, Period, PeriodSlots,
};
pub use service::ApiClient;
pub use session::BookingSession;
pub use state::{
    today, AvailabilityKey, AvailabilityRequest, AvailabilityResponse, BookingDraft, RouteParams,
    SchedulingOptions, SchedulingState, SchedulingView,
};
