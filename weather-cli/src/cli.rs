use anyhow::Context;
use clap::{ArgAction, Parser, Subcommand};
use inquire::{Text, required};
use std::{
    io::{self, Write},
    path::{Path, PathBuf},
    process::ExitCode,
};
use tracing::debug;
use weather_core::{Config, Pipeline, config::DEFAULT_CITY};

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "weather", version, about = "Current weather for a city")]
pub struct Cli {
    /// Config file to use instead of the one in the platform config directory.
    #[arg(long, global = true, env = "WEATHER_CONFIG")]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug). RUST_LOG takes precedence.
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Interactively set the default city.
    Configure,

    /// Show current weather for a city.
    #[command(alias = "print")]
    Show {
        /// City name; falls back to the configured default.
        #[arg(short, long, env = "WEATHER_CITY")]
        city: Option<String>,
    },
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<ExitCode> {
        let config = match &self.config {
            Some(path) => Config::load_from(path)?,
            None => Config::load()?,
        };

        match self.command {
            Command::Configure => configure(config, self.config.as_deref()),
            Command::Show { city } => show(&config, city.as_deref(), &mut io::stdout()).await,
        }
    }
}

fn configure(mut config: Config, path: Option<&Path>) -> anyhow::Result<ExitCode> {
    let current = config.city.clone().unwrap_or_else(|| DEFAULT_CITY.to_string());

    let city = Text::new("Default city:")
        .with_default(&current)
        .with_validator(required!("City must not be empty"))
        .prompt()
        .context("Failed to read default city")?;

    config.set_city(city.trim());

    let path = match path {
        Some(path) => {
            config.save_to(path)?;
            path.to_path_buf()
        }
        None => {
            config.save()?;
            Config::config_file_path()?
        }
    };

    println!("Saved default city '{}' to {}", city.trim(), path.display());
    Ok(ExitCode::SUCCESS)
}

/// Run the pipeline and write the report to `out`. Nothing reaches `out` unless both stages succeed.
async fn show(
    config: &Config,
    city: Option<&str>,
    out: &mut impl Write,
) -> anyhow::Result<ExitCode> {
    let city = config.resolve_city(city)?;
    let pipeline = Pipeline::from_config(config)?;

    match pipeline.run(&city).await {
        Ok(report) => {
            writeln!(out, "{report}").context("Failed to write weather report")?;
            Ok(ExitCode::SUCCESS)
        }
        Err(err) => {
            debug!(stage = %err.stage, city = %city, "pipeline aborted");
            eprintln!("Error fetching weather: {err}");
            Ok(ExitCode::FAILURE)
        }
    }
}
