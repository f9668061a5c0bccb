use reqwest::StatusCode;
use std::{error::Error as StdError, fmt};
use thiserror::Error;

/// Render an error followed by every `source()` below it, joined with `: `.
pub fn error_chain(err: &(dyn StdError + 'static)) -> String {
    let mut out = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        let text = cause.to_string();
        if !out.contains(&text) {
            out.push_str(": ");
            out.push_str(&text);
        }
        source = cause.source();
    }
    out
}

/// Failure while talking to a remote endpoint.
#[derive(Debug, Error)]
pub enum NetworkError {
    /// The request never produced a response (DNS, connect, timeout, TLS, ...).
    #[error("request failed: {}", error_chain(.0))]
    Transport(#[from] reqwest::Error),

    /// The endpoint answered with a non-2xx status.
    #[error("unexpected status {status}: {body}")]
    Status { status: StatusCode, body: String },
}

/// Error taxonomy shared by the geocoding and forecast stages.
#[derive(Debug, Error)]
pub enum WeatherError {
    #[error("network error: {0}")]
    Network(#[from] NetworkError),

    #[error("no coordinates found for {city}")]
    NotFound { city: String },

    #[error("failed to parse {context}: {reason}")]
    Parse { context: &'static str, reason: String },
}

impl WeatherError {
    pub fn parse(context: &'static str, reason: impl fmt::Display) -> Self {
        Self::Parse { context, reason: reason.to_string() }
    }

    /// HTTP status carried by a non-success response, if any.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::Network(NetworkError::Status { status, .. }) => Some(*status),
            _ => None,
        }
    }

    pub fn is_network(&self) -> bool {
        matches!(self, Self::Network(_))
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    pub fn is_parse(&self) -> bool {
        matches!(self, Self::Parse { .. })
    }
}

impl From<reqwest::Error> for WeatherError {
    fn from(err: reqwest::Error) -> Self {
        Self::Network(NetworkError::Transport(err))
    }
}

/// Pipeline stage an error originated from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Geocoding,
    Forecast,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Stage::Geocoding => "geocoding",
            Stage::Forecast => "forecast",
        })
    }
}

#[derive(Debug, Error)]
#[error("{stage} failed: {source}")]
pub struct PipelineError {
    pub stage: Stage,
    #[source]
    pub source: WeatherError,
}

impl PipelineError {
    pub fn new(stage: Stage, source: WeatherError) -> Self {
        Self { stage, source }
    }
}
