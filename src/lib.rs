#![allow(clippy::collapsible_if)]

// Core modules
pub mod app;
pub mod compass;
pub mod config;
pub mod data;
pub mod domain;
pub mod sensors;
mod ui;
pub mod utils;

// Re-export commonly used types outside of crate (for prayer_cli.rs)
pub use app::{App, ErrorKind, SessionError};
pub use compass::CompassAngles;
pub use config::ApiKey;
pub use data::{PrayerDataFetcher, ReqwestClient};
pub use domain::{CoordinateError, Coordinates, PrayerName, PrayerSession};

// CLI argument parsing
use clap::Parser;

#[derive(Parser, Debug, Clone, Default)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Latitude to use instead of a device fix (native builds have no geolocation)
    #[arg(long, allow_hyphen_values = true, requires = "lon")]
    pub lat: Option<f64>,
    /// Longitude to use instead of a device fix
    #[arg(long, allow_hyphen_values = true, requires = "lat")]
    pub lon: Option<f64>,
}

impl Cli {
    /// `Ok(None)` when no position was given.
    pub fn coordinates(&self) -> Result<Option<Coordinates>, CoordinateError> {
        match (self.lat, self.lon) {
            (Some(lat), Some(lon)) => Coordinates::new(lat, lon).map(Some),
            _ => Ok(None),
        }
    }
}

/// Main application entry point - creates the GUI app
pub fn run_app(cc: &eframe::CreationContext<'_>, args: Cli) -> App {
    App::new(cc, args)
}
