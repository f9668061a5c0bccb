use anyhow::{Context, Result, anyhow, bail};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
    time::Duration,
};
use tracing::info;

pub const DEFAULT_CITY: &str = "Berlin";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;
pub const DEFAULT_GEOCODING_URL: &str = "https://nominatim.openstreetmap.org/search";
pub const DEFAULT_FORECAST_URL: &str = "https://api.open-meteo.com/v1/forecast";

/// Remote endpoints used by the pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Endpoints {
    pub geocoding_url: String,
    pub forecast_url: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            geocoding_url: DEFAULT_GEOCODING_URL.to_string(),
            forecast_url: DEFAULT_FORECAST_URL.to_string(),
        }
    }
}

/// Top-level configuration stored on disk.
///
/// Example TOML:
/// ```toml
/// city = "Hamburg"
/// timeout_secs = 5
///
/// [endpoints]
/// geocoding_url = "https://nominatim.openstreetmap.org/search"
/// forecast_url = "https://api.open-meteo.com/v1/forecast"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Default city used when none is given on the command line.
    pub city: Option<String>,

    /// Per-request timeout in seconds.
    pub timeout_secs: u64,

    pub endpoints: Endpoints,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            city: None,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            endpoints: Endpoints::default(),
        }
    }
}

impl Config {
    /// Per-request timeout. `timeout_secs = 0` falls back to [`DEFAULT_TIMEOUT_SECS`].
    pub fn timeout(&self) -> Duration {
        match self.timeout_secs {
            0 => Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            secs => Duration::from_secs(secs),
        }
    }

    pub fn set_city(&mut self, city: impl Into<String>) {
        self.city = Some(city.into());
    }

    /// Pick the city to query: explicit value first, then the configured
    /// default, then [`DEFAULT_CITY`].
    pub fn resolve_city(&self, explicit: Option<&str>) -> Result<String> {
        let city = explicit
            .or(self.city.as_deref())
            .unwrap_or(DEFAULT_CITY)
            .trim();

        if city.is_empty() {
            bail!("City is required. Set it in the config file or pass it as an argument.");
        }

        Ok(city.to_string())
    }

    /// Load config from the platform config directory, or return defaults if it doesn't exist yet.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_file_path()?)
    }

    /// Load config from an explicit path. A missing file yields defaults.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            info!(path = %path.display(), "no configuration file found, using defaults");
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let cfg: Config = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(cfg)
    }

    /// Save config to the platform config directory.
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_file_path()?)
    }

    /// Save config to `path`, creating parent directories as needed.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let toml =
            toml::to_string_pretty(self).context("Failed to serialize configuration to TOML")?;

        fs::write(path, toml)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("dev", "weather-task", "weather-cli")
            .ok_or_else(|| anyhow!("Could not determine platform config directory"))?;

        Ok(dirs.config_dir().join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_point_at_public_endpoints() {
        let cfg = Config::default();

        assert_eq!(cfg.city, None);
        assert_eq!(cfg.timeout(), Duration::from_secs(10));
        assert_eq!(cfg.endpoints.geocoding_url, DEFAULT_GEOCODING_URL);
        assert_eq!(cfg.endpoints.forecast_url, DEFAULT_FORECAST_URL);
    }

    #[test]
    fn zero_timeout_uses_default() {
        let cfg = Config { timeout_secs: 0, ..Config::default() };
        assert_eq!(cfg.timeout(), Duration::from_secs(DEFAULT_TIMEOUT_SECS));

        let cfg = Config { timeout_secs: 3, ..Config::default() };
        assert_eq!(cfg.timeout(), Duration::from_secs(3));
    }

    #[test]
    fn explicit_city_wins_over_configured_default() {
        let mut cfg = Config::default();
        cfg.set_city("Hamburg");

        assert_eq!(cfg.resolve_city(Some("Munich")).unwrap(), "Munich");
        assert_eq!(cfg.resolve_city(None).unwrap(), "Hamburg");
    }

    #[test]
    fn falls_back_to_builtin_city() {
        let cfg = Config::default();
        assert_eq!(cfg.resolve_city(None).unwrap(), DEFAULT_CITY);
    }

    #[test]
    fn blank_city_is_rejected() {
        let mut cfg = Config::default();
        cfg.set_city("   ");

        let err = cfg.resolve_city(None).unwrap_err();
        assert!(err.to_string().contains("City is required"));

        let err = Config::default().resolve_city(Some("")).unwrap_err();
        assert!(err.to_string().contains("City is required"));
    }

    #[test]
    fn partial_toml_keeps_remaining_defaults() {
        let cfg: Config = toml::from_str(
            r#"
            city = "Paris"

            [endpoints]
            forecast_url = "http://localhost:8080/v1/forecast"
            "#,
        )
        .expect("valid toml");

        assert_eq!(cfg.city.as_deref(), Some("Paris"));
        assert_eq!(cfg.timeout_secs, DEFAULT_TIMEOUT_SECS);
        assert_eq!(cfg.endpoints.geocoding_url, DEFAULT_GEOCODING_URL);
        assert_eq!(cfg.endpoints.forecast_url, "http://localhost:8080/v1/forecast");
    }

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = Config::load_from(&dir.path().join("absent.toml")).unwrap();

        assert_eq!(cfg, Config::default());
    }

    #[derive(Clone, Default)]
    struct CapturedLogs(std::sync::Arc<std::sync::Mutex<Vec<u8>>>);

    impl std::io::Write for CapturedLogs {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn missing_file_is_logged() {
        let logs = CapturedLogs::default();
        let writer = logs.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::INFO)
            .with_ansi(false)
            .with_writer(move || writer.clone())
            .finish();

        let dir = tempfile::tempdir().unwrap();
        tracing::subscriber::with_default(subscriber, || {
            Config::load_from(&dir.path().join("absent.toml")).unwrap();
        });

        let output = String::from_utf8(logs.0.lock().unwrap().clone()).unwrap();
        assert!(output.contains("no configuration file found, using defaults"), "{output}");
    }

    #[test]
    fn save_then_load_preserves_settings() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let mut cfg = Config::default();
        cfg.set_city("Vienna");
        cfg.timeout_secs = 3;
        cfg.save_to(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded, cfg);
    }

    #[test]
    fn invalid_file_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "timeout_secs = \"soon\"").unwrap();

        let err = Config::load_from(&path).unwrap_err();
        assert!(err.to_string().contains("Failed to parse config file"));
    }
}
