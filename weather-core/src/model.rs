use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self { latitude, longitude }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherReading {
    /// Name as requested by the caller; the forecast endpoint does not return one.
    pub location_name: String,
    pub temperature_c: f64,
    pub condition_code: i32,
    /// Local time of the observation, when the provider reports it.
    pub observed_at: Option<NaiveDateTime>,
}
