//! Core library for the `weather` CLI.
//!
//! This crate defines:
//! - Configuration handling
//! - The geocoding and forecast seams plus their HTTP implementations
//! - The weather-code lookup table
//! - The pipeline tying them together and the printable report
//!
//! It is used by `weather-cli`, but can also be reused by other binaries or services.

pub mod condition;
pub mod config;
pub mod error;
pub mod model;
pub mod pipeline;
pub mod provider;
pub mod report;

pub use config::{Config, Endpoints};
pub use error::{NetworkError, PipelineError, Stage, WeatherError};
pub use model::{Coordinate, WeatherReading};
pub use pipeline::Pipeline;
pub use provider::{Geocoder, NominatimGeocoder, OpenMeteoFetcher, WeatherFetcher};
pub use report::Report;
