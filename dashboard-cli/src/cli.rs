use anyhow::{Context, Result};
use chrono::Local;
use clap::{Parser, Subcommand};
use dashboard_core::{ApiClient, Config, HourlyPlaceholders, load_dashboard};
use inquire::Text;

use crate::render::DashboardText;

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "weather-dashboard", version, about = "Weather dashboard in the terminal")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Set the backend URL, default city and other cities interactively.
    ///
    /// With `--add-city` or `--remove-city` only the other-cities list is
    /// edited and no prompts are shown.
    Configure {
        /// Add a city to the other-cities list (repeatable).
        #[arg(long = "add-city", value_name = "CITY")]
        add: Vec<String>,

        /// Remove a city from the other-cities list (repeatable).
        #[arg(long = "remove-city", value_name = "CITY")]
        remove: Vec<String>,
    },

    /// Show the dashboard for a city.
    Show {
        /// City name; defaults to the configured city.
        city: Option<String>,

        /// Print the view model as JSON instead of text.
        #[arg(long)]
        json: bool,

        /// Override the configured backend URL for this run.
        #[arg(long)]
        api_url: Option<String>,
    },
}

impl Cli {
    pub async fn run(self) -> Result<()> {
        match self.command {
            Command::Configure { add, remove } if !add.is_empty() || !remove.is_empty() => {
                edit_cities(&add, &remove)
            }
            Command::Configure { .. } => configure(),
            Command::Show { city, json, api_url } => show(city, json, api_url).await,
        }
    }
}

fn configure() -> Result<()> {
    let mut config = Config::load()?;

    let api_url = Text::new("Backend API URL:")
        .with_default(&config.api_url)
        .prompt()
        .context("Failed to read API URL")?;
    config.set_api_url(&api_url)?;

    let city = Text::new("Default city:")
        .with_default(&config.default_city)
        .prompt()
        .context("Failed to read default city")?;
    if !city.trim().is_empty() {
        config.default_city = city.trim().to_string();
    }

    let current_siblings = config.sibling_cities.join(", ");
    let siblings = Text::new("Other cities (comma separated):")
        .with_default(&current_siblings)
        .prompt()
        .context("Failed to read other cities")?;
    config.sibling_cities.clear();
    for city in siblings.split(',') {
        config.add_sibling_city(city);
    }

    config.save()?;
    println!("Saved configuration to {}", Config::config_file_path()?.display());

    Ok(())
}

fn edit_cities(add: &[String], remove: &[String]) -> Result<()> {
    let mut config = Config::load()?;

    if apply_city_edits(&mut config, add, remove) {
        config.save()?;
    }
    println!("Other cities: {}", config.sibling_cities.join(", "));

    Ok(())
}

/// Removals run before additions. Returns whether the list changed.
fn apply_city_edits(config: &mut Config, add: &[String], remove: &[String]) -> bool {
    let mut changed = false;
    for city in remove {
        changed |= config.remove_sibling_city(city);
    }
    for city in add {
        changed |= config.add_sibling_city(city);
    }
    changed
}

/// Trimmed city argument, or the configured default when it is absent or blank.
fn resolve_city(arg: Option<String>, default_city: &str) -> String {
    match arg.as_deref().map(str::trim) {
        Some(city) if !city.is_empty() => city.to_string(),
        _ => default_city.to_string(),
    }
}

async fn show(city: Option<String>, json: bool, api_url: Option<String>) -> Result<()> {
    let mut config = Config::load()?;
    if let Some(url) = api_url {
        config.set_api_url(&url)?;
    }

    let city = resolve_city(city, &config.default_city);
    let client = ApiClient::from_config(&config)?;
    tracing::debug!("Loading dashboard for {city} from {}", client.base_url());

    let view = load_dashboard(
        &client,
        &city,
        &config.sibling_cities,
        &Local::now(),
        &HourlyPlaceholders::default(),
    )
    .await;

    if json {
        let out = serde_json::to_string_pretty(&view).context("Failed to serialize dashboard")?;
        println!("{out}");
    } else {
        print!("{}", DashboardText(&view));
    }

    Ok(())
}
