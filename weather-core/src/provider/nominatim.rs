use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, info};

use crate::{Coordinate, error::WeatherError};

use super::{Geocoder, get_text};

/// Geocoder backed by a Nominatim-compatible `/search` endpoint.
#[derive(Debug, Clone)]
pub struct NominatimGeocoder {
    url: String,
    http: Client,
}

impl NominatimGeocoder {
    pub fn new(http: Client, url: impl Into<String>) -> Self {
        Self { url: url.into(), http }
    }
}

#[derive(Debug, Deserialize)]
struct Place {
    lat: Decimal,
    lon: Decimal,
    #[serde(default)]
    display_name: Option<String>,
}

/// Nominatim encodes coordinates as strings; other services use plain numbers.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum Decimal {
    Number(f64),
    Text(String),
}

impl Decimal {
    fn to_f64(&self, field: &'static str) -> Result<f64, WeatherError> {
        let value = match self {
            Decimal::Number(n) => *n,
            Decimal::Text(s) => s.trim().parse::<f64>().map_err(|e| {
                WeatherError::parse("geocoding response", format!("{field} {s:?}: {e}"))
            })?,
        };

        if !value.is_finite() {
            return Err(WeatherError::parse(
                "geocoding response",
                format!("{field} is not a finite number"),
            ));
        }

        Ok(value)
    }
}

#[async_trait]
impl Geocoder for NominatimGeocoder {
    async fn resolve(&self, city: &str) -> Result<Coordinate, WeatherError> {
        let query = [
            ("q", city.to_string()),
            ("format", "json".to_string()),
            ("limit", "1".to_string()),
        ];

        let body = get_text(&self.http, &self.url, &query).await?;

        let places: Vec<Place> = serde_json::from_str(&body)
            .map_err(|e| WeatherError::parse("geocoding response", e))?;

        let place = places
            .into_iter()
            .next()
            .ok_or_else(|| WeatherError::NotFound { city: city.to_string() })?;

        let coord = Coordinate::new(place.lat.to_f64("lat")?, place.lon.to_f64("lon")?);

        if let Some(name) = &place.display_name {
            debug!(city, matched = %name, "geocoding match");
        }
        info!(city, latitude = coord.latitude, longitude = coord.longitude, "resolved city");

        Ok(coord)
    }
}
