use clap::{Parser, Subcommand};
use forecast_core::{Config, FetchState, ForecastProvider, client_from_config};

use crate::render;

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "forecast", version, about = "City forecast CLI")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Store the forecast service API key in the local config file.
    Configure,

    /// Fetch and display the multi-day forecast for a city.
    Show {
        /// City name; prompted interactively when omitted.
        city: Option<String>,
    },
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        match self.command {
            Command::Configure => configure(),
            Command::Show { city } => show(city).await,
        }
    }
}

fn configure() -> anyhow::Result<()> {
    let mut config = Config::load()?;

    let api_key = inquire::Password::new("API key:")
        .with_display_mode(inquire::PasswordDisplayMode::Masked)
        .without_confirmation()
        .prompt()?;

    config.set_api_key(api_key);
    config.save()?;

    println!("Saved configuration to {}", Config::config_file_path()?.display());
    Ok(())
}

async fn show(city: Option<String>) -> anyhow::Result<()> {
    let config = Config::load()?;
    let client = client_from_config(&config)?;

    let city = match city {
        Some(city) => city,
        None => inquire::Text::new("City name:").prompt()?,
    };

    let mut state = FetchState::default();
    state.apply(client.fetch_forecast(&city).await);

    render::render_state(&state);

    if state.is_failure() {
        std::process::exit(1);
    }

    Ok(())
}
