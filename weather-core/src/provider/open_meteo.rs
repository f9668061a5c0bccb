use async_trait::async_trait;
use chrono::NaiveDateTime;
use reqwest::Client;
use serde::Deserialize;
use tracing::{info, warn};

use crate::{Coordinate, WeatherReading, error::WeatherError};

use super::{WeatherFetcher, get_text};

/// Open-Meteo reports local time without seconds, e.g. `2024-05-01T14:00`.
const TIME_FORMAT: &str = "%Y-%m-%dT%H:%M";

/// Current-conditions fetcher backed by the Open-Meteo forecast API.
#[derive(Debug, Clone)]
pub struct OpenMeteoFetcher {
    url: String,
    http: Client,
}

impl OpenMeteoFetcher {
    pub fn new(http: Client, url: impl Into<String>) -> Self {
        Self { url: url.into(), http }
    }
}

#[derive(Debug, Deserialize)]
struct OmResponse {
    current_weather: OmCurrentWeather,
}

#[derive(Debug, Deserialize)]
struct OmCurrentWeather {
    temperature: f64,
    weathercode: i32,
    #[serde(default)]
    time: Option<String>,
}

fn parse_time(raw: &str) -> Option<NaiveDateTime> {
    match NaiveDateTime::parse_from_str(raw, TIME_FORMAT) {
        Ok(t) => Some(t),
        Err(e) => {
            warn!(time = raw, error = %e, "ignoring unparseable observation time");
            None
        }
    }
}

#[async_trait]
impl WeatherFetcher for OpenMeteoFetcher {
    async fn fetch(
        &self,
        location_name: &str,
        coord: Coordinate,
    ) -> Result<WeatherReading, WeatherError> {
        let query = [
            ("latitude", coord.latitude.to_string()),
            ("longitude", coord.longitude.to_string()),
            ("current_weather", "true".to_string()),
        ];

        let body = get_text(&self.http, &self.url, &query).await?;

        let parsed: OmResponse = serde_json::from_str(&body)
            .map_err(|e| WeatherError::parse("forecast response", e))?;

        let current = parsed.current_weather;
        let observed_at = current.time.as_deref().and_then(parse_time);

        info!(
            location = location_name,
            temperature = current.temperature,
            code = current.weathercode,
            "fetched current weather"
        );

        Ok(WeatherReading {
            location_name: location_name.to_string(),
            temperature_c: current.temperature,
            condition_code: current.weathercode,
            observed_at,
        })
    }
}
