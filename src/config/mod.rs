//! Configuration module for the prayer-times application.

// Can all be private now because we have a public re-export.
mod api_key;
mod debug;
mod services;

// Re-export commonly used items
pub use api_key::{API_KEY_ENV, ApiKey, ConfigError};
pub use debug::DF;
pub use services::{PrayerServiceConfig, SERVICES, ServicesConfig};
