use async_trait::async_trait;
use reqwest::Client;
use std::fmt::Debug;
use tracing::debug;

use crate::{
    Config, Coordinate, WeatherReading,
    error::{NetworkError, WeatherError},
};

pub mod nominatim;
pub mod open_meteo;

pub use nominatim::NominatimGeocoder;
pub use open_meteo::OpenMeteoFetcher;

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Turns a place name into coordinates.
#[async_trait]
pub trait Geocoder: Send + Sync + Debug {
    async fn resolve(&self, city: &str) -> Result<Coordinate, WeatherError>;
}

/// Fetches current conditions for a coordinate.
#[async_trait]
pub trait WeatherFetcher: Send + Sync + Debug {
    async fn fetch(
        &self,
        location_name: &str,
        coord: Coordinate,
    ) -> Result<WeatherReading, WeatherError>;
}

/// Build the HTTP client shared by both stages.
pub fn build_client(config: &Config) -> Result<Client, WeatherError> {
    let client = Client::builder()
        .timeout(config.timeout())
        .user_agent(USER_AGENT)
        .build()?;

    Ok(client)
}

/// Issue a single GET and return the body of a successful response.
pub(crate) async fn get_text(
    http: &Client,
    url: &str,
    query: &[(&str, String)],
) -> Result<String, WeatherError> {
    debug!(url, ?query, "sending request");

    let res = http.get(url).query(query).send().await?;

    let status = res.status();
    let body = res.text().await?;

    debug!(url, %status, bytes = body.len(), "received response");

    if !status.is_success() {
        return Err(NetworkError::Status { status, body: truncate_body(&body) }.into());
    }

    Ok(body)
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    if body.chars().count() > MAX {
        format!("{}...", body.chars().take(MAX).collect::<String>())
    } else {
        body.to_string()
    }
}
