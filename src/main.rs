use anyhow::Context;
use bimap_directions::{
    sdk::config::MapsConfig,
    sdk::routing::{
        polyline, Coordinate, DirectionsPipeline, GoogleMapsProvider, PlaceId, PlaceSearch,
    },
    sdk::util::log::init_logging,
};
use clap::{Parser, Subcommand};
use serde::Serialize;

/// Terminal front end for the directions pipeline
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Resolve a coordinate to a place identifier
    Resolve {
        #[arg(long, allow_hyphen_values = true)]
        lat: f64,
        #[arg(long, allow_hyphen_values = true)]
        lon: f64,
    },

    /// Fetch the raw driving route between two place identifiers
    Route {
        #[arg(long)]
        origin: String,
        #[arg(long)]
        destination: String,
    },

    /// Driving path from a coordinate to a place identifier
    Directions {
        #[arg(long, allow_hyphen_values = true)]
        lat: f64,
        #[arg(long, allow_hyphen_values = true)]
        lon: f64,
        /// Destination place identifier (e.g. from `search`)
        #[arg(long)]
        destination: String,
    },

    /// Look up a free-text address
    Search {
        query: String,
    },

    /// Decode an encoded polyline (no network access)
    Decode {
        encoded: String,
    },
}

fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn config() -> anyhow::Result<MapsConfig> {
    let config = MapsConfig::from_env().context("Maps credential is not configured")?;
    log::debug!("Using Maps endpoint {}", config.base_url);
    Ok(config)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    if let Err(e) = init_logging() {
        eprintln!("Keeping the existing logger: {}", e);
    }

    let cli = Cli::parse();

    match cli.command {
        Command::Resolve { lat, lon } => {
            let place = DirectionsPipeline::google(config()?)
                .resolve(Coordinate::new(lat, lon)?)
                .await?;
            print_json(&place)?;
        }
        Command::Route {
            origin,
            destination,
        } => {
            let route = DirectionsPipeline::google(config()?)
                .fetch_route(&PlaceId::new(origin), &PlaceId::new(destination))
                .await?;
            if let Some(summary) = route.summary() {
                log::info!(
                    "Route: {:.1} km, {:.2} hrs",
                    summary.distance_km,
                    summary.duration_hours
                );
            }
            print_json(&route)?;
        }
        Command::Directions {
            lat,
            lon,
            destination,
        } => {
            let path = DirectionsPipeline::google(config()?)
                .directions_to_search_result(Coordinate::new(lat, lon)?, &PlaceId::new(destination))
                .await?;
            log::info!("Route has {} points", path.len());
            print_json(&path)?;
        }
        Command::Search { query } => {
            let result = GoogleMapsProvider::new(config()?).search(&query).await?;
            log::info!("Found {} ({})", result.name, result.coordinate);
            print_json(&result)?;
        }
        // Offline, needs no credential.
        Command::Decode { encoded } => {
            let points = polyline::decode(&encoded).context("Not a valid encoded polyline")?;
            print_json(&points)?;
        }
    }

    Ok(())
}
