// --- File: crates/gobarber_common/src/models.rs ---

// Data structures shared between the gateways and the scheduling core.
// Field names follow the backend's JSON (`avatar_url`, `hour`, `available`).

use serde::{Deserialize, Serialize};

/// A selectable service professional.
///
/// Immutable once fetched; identity is `id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Provider {
    /// Opaque unique identifier
    pub id: String,
    /// Display name
    pub name: String,
    /// Avatar image reference
    pub avatar_url: String,
}

/// Highest hour of day a slot can carry.
pub const LAST_HOUR: u8 = 23;

/// One hour of a calendar day, bookable or not, for a given provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AvailabilitySlot {
    /// Hour of day in `[0, 23]`
    pub hour: u8,
    pub available: bool,
}

impl AvailabilitySlot {
    pub fn new(hour: u8, available: bool) -> Self {
        Self { hour, available }
    }

    /// Whether the hour lies within a day.
    pub fn is_valid_hour(&self) -> bool {
        self.hour <= LAST_HOUR
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_provider_uses_backend_field_names() {
        let json = r#"{"id":"p1","name":"Ana","avatar_url":"https://cdn/ana.png"}"#;
        let provider: Provider = serde_json::from_str(json).unwrap();

        assert_eq!(provider.id, "p1");
        assert_eq!(provider.avatar_url, "https://cdn/ana.png");
    }

    #[test]
    fn test_provider_missing_field_is_an_error() {
        let json = r#"{"id":"p1","name":"Ana"}"#;
        assert!(serde_json::from_str::<Provider>(json).is_err());
    }

    #[test]
    fn test_slot_hour_bounds() {
        assert!(AvailabilitySlot::new(0, true).is_valid_hour());
        assert!(AvailabilitySlot::new(23, false).is_valid_hour());
        assert!(!AvailabilitySlot::new(24, true).is_valid_hour());
    }

    #[test]
    fn test_negative_hour_fails_to_deserialize() {
        assert!(serde_json::from_str::<AvailabilitySlot>(r#"{"hour":-1,"available":true}"#).is_err());
    }
}
