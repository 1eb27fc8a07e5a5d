//! Geocoding CLI
//!
//! Command-line interface for address lookups, reverse lookups and street
//! view embeds.

#![allow(clippy::print_stdout)]

mod settings;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use geocoding::{GeoClient, GoogleGeoClient, StreetView};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::settings::Overrides;

/// Geocoding CLI
#[derive(Debug, Parser)]
#[command(name = "geocoding-cli")]
#[command(author, version, about = "Google Maps geocoding from the command line", long_about = None)]
struct Cli {
    /// Verbosity level
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Configuration file (default: ./geocoding.toml if present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Map API key
    #[arg(long, env = "GEOCODING_API_KEY", global = true, hide_env_values = true)]
    key: Option<String>,

    /// Response language
    #[arg(long, global = true)]
    language: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Look up an address
    ///
    /// Prints every matching location as JSON.
    /// Example: geocoding-cli locate "1600 Amphitheatre Parkway, Mountain View, CA"
    Locate {
        /// Free-form address
        query: String,
    },

    /// Look up the addresses at a coordinate pair
    ///
    /// Example: geocoding-cli reverse 33.998671 -118.075926
    Reverse {
        /// Latitude in degrees
        #[arg(allow_negative_numbers = true)]
        latitude: f64,

        /// Longitude in degrees
        #[arg(allow_negative_numbers = true)]
        longitude: f64,
    },

    /// Print the street view embed tag for a location
    StreetView {
        /// Latitude in degrees
        #[arg(allow_negative_numbers = true)]
        latitude: f64,

        /// Longitude in degrees
        #[arg(allow_negative_numbers = true)]
        longitude: f64,

        /// Embed width in pixels
        #[arg(long, default_value = "425")]
        width: u32,

        /// Embed height in pixels
        #[arg(long, default_value = "240")]
        height: u32,
    },
}

/// Determine log filter level from verbosity count
const fn log_filter_from_verbosity(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = log_filter_from_verbosity(cli.verbose);

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(filter))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = settings::load(
        cli.config.as_deref(),
        Overrides {
            api_key: cli.key,
            language: cli.language,
        },
    )?;

    match cli.command {
        Commands::Locate { query } => {
            let client = GoogleGeoClient::new(config)?;
            let addresses = client.locate(&query).await?;
            println!("{}", serde_json::to_string_pretty(&addresses)?);
        },

        Commands::Reverse {
            latitude,
            longitude,
        } => {
            let client = GoogleGeoClient::new(config)?;
            let addresses = client.reverse_locate(latitude, longitude).await?;
            println!("{}", serde_json::to_string_pretty(&addresses)?);
        },

        Commands::StreetView {
            latitude,
            longitude,
            width,
            height,
        } => {
            let street_view = StreetView::new(config)?;
            match street_view.embed(latitude, longitude, width, height).await? {
                Some(html) => println!("{html}"),
                None => println!("No street view panorama near {latitude},{longitude}"),
            }
        },
    }

    Ok(())
}
