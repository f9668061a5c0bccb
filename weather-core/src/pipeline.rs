use tracing::debug;

use crate::{
    Config,
    error::{PipelineError, Stage, WeatherError},
    provider::{Geocoder, NominatimGeocoder, OpenMeteoFetcher, WeatherFetcher, build_client},
    report::Report,
};

/// Geocode → forecast → describe, strictly in that order.
#[derive(Debug)]
pub struct Pipeline {
    geocoder: Box<dyn Geocoder>,
    fetcher: Box<dyn WeatherFetcher>,
}

impl Pipeline {
    pub fn new(geocoder: Box<dyn Geocoder>, fetcher: Box<dyn WeatherFetcher>) -> Self {
        Self { geocoder, fetcher }
    }

    /// Construct the pipeline against the endpoints named in `config`.
    pub fn from_config(config: &Config) -> Result<Self, WeatherError> {
        let http = build_client(config)?;

        Ok(Self::new(
            Box::new(NominatimGeocoder::new(http.clone(), &config.endpoints.geocoding_url)),
            Box::new(OpenMeteoFetcher::new(http, &config.endpoints.forecast_url)),
        ))
    }

    /// `city` must already be validated as non-empty.
    pub async fn run(&self, city: &str) -> Result<Report, PipelineError> {
        debug!(city, "running weather pipeline");

        let coord = self
            .geocoder
            .resolve(city)
            .await
            .map_err(|e| PipelineError::new(Stage::Geocoding, e))?;

        let reading = self
            .fetcher
            .fetch(city, coord)
            .await
            .map_err(|e| PipelineError::new(Stage::Forecast, e))?;

        Ok(Report::new(reading))
    }
}
