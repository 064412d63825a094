// --- File: crates/gobarber_common/src/lib.rs ---

// Declare modules within this crate
pub mod error; // Error handling
pub mod http; // HTTP utilities
pub mod logging; // Logging utilities
pub mod models; // Wire data structures
pub mod services; // Gateway abstractions

// Re-export error types and utilities for easier access
pub use error::{config_error, external_service_error, GoBarberError};

// Re-export HTTP utilities for easier access
pub use http::{
    client::{create_client, HTTP_CLIENT},
    join_url,
};

// Re-export logging utilities for easier access
pub use logging::{init, init_from_config, init_with_level, log_error, log_result, parse_level};

pub use models::{AvailabilitySlot, Provider};
pub use services::{AvailabilityGateway, BoxFuture, ProviderCatalog};
