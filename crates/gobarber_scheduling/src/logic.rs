// --- File: crates/gobarber_scheduling/src/logic.rs ---
//! Period partitioning of a day's availability.
//!
//! The raw `{hour, available}` list returned by the gateway is split into a
//! morning and an afternoon bucket, each slot carrying the `HH:00` label shown
//! on the hour buttons.

use gobarber_common::AvailabilitySlot;
use serde::Serialize;
use tracing::debug;

/// First hour that belongs to the afternoon.
pub const AFTERNOON_START_HOUR: u8 = 12;

/// Display grouping of the hours of a day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Period {
    Morning,
    Afternoon,
}

impl Period {
    /// The period an hour belongs to: hours before noon are morning, the rest afternoon.
    pub fn of(hour: u8) -> Self {
        if hour < AFTERNOON_START_HOUR {
            Period::Morning
        } else {
            Period::Afternoon
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Period::Morning => "morning",
            Period::Afternoon => "afternoon",
        }
    }
}

/// An availability slot annotated with its display label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormattedSlot {
    pub hour: u8,
    pub available: bool,
    /// Zero-padded hour followed by `:00`, e.g. `"09:00"`
    pub label: String,
}

impl From<&AvailabilitySlot> for FormattedSlot {
    fn from(slot: &AvailabilitySlot) -> Self {
        Self {
            hour: slot.hour,
            available: slot.available,
            label: format_hour_label(slot.hour),
        }
    }
}

/// The two buckets rendered by the hour picker.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PeriodSlots {
    pub morning: Vec<FormattedSlot>,
    pub afternoon: Vec<FormattedSlot>,
}

impl PeriodSlots {
    pub fn get(&self, period: Period) -> &[FormattedSlot] {
        match period {
            Period::Morning => &self.morning,
            Period::Afternoon => &self.afternoon,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.morning.is_empty() && self.afternoon.is_empty()
    }

    pub fn len(&self) -> usize {
        self.morning.len() + self.afternoon.len()
    }
}

/// Formats an hour of day as `HH:00`.
pub fn format_hour_label(hour: u8) -> String {
    format!("{:02}:00", hour)
}

/// Splits a day's availability into morning and afternoon.
///
/// Input order is kept inside each bucket; the gateway's order is trusted and
/// nothing is sorted or de-duplicated here.
pub fn partition_by_period(availability: &[AvailabilitySlot]) -> PeriodSlots {
    let mut periods = PeriodSlots::default();
    for slot in availability {
        let formatted = FormattedSlot::from(slot);
        match Period::of(slot.hour) {
            Period::Morning => periods.morning.push(formatted),
            Period::Afternoon => periods.afternoon.push(formatted),
        }
    }
    periods
}

/// Memoized [`partition_by_period`]: recomputes only when the slot list differs
/// from the one the cached partition was built from.
#[derive(Debug, Default)]
pub struct PartitionCache {
    input: Vec<AvailabilitySlot>,
    output: PeriodSlots,
    recomputations: usize,
}

impl PartitionCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the partition of `availability`, reusing the cached one when the input is unchanged.
    pub fn refresh(&mut self, availability: &[AvailabilitySlot]) -> &PeriodSlots {
        if self.recomputations == 0 || self.input != availability {
            self.input = availability.to_vec();
            self.output = partition_by_period(availability);
            self.recomputations += 1;
            debug!(
                "Partitioned {} slots: {} morning, {} afternoon",
                availability.len(),
                self.output.morning.len(),
                self.output.afternoon.len()
            );
        }
        &self.output
    }

    /// The most recently computed partition.
    pub fn current(&self) -> &PeriodSlots {
        &self.output
    }

    /// How many times the partition has actually been computed.
    pub fn recomputations(&self) -> usize {
        self.recomputations
    }
}
