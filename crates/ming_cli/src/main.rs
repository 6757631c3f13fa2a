use std::path::PathBuf;
use std::process::ExitCode;

use chrono::DateTime;
use clap::{Parser, Subcommand};

use ming_base::Location;
use ming_config::Config;
use ming_rs::Ming;
use ming_texts::Language;

#[derive(Parser)]
#[command(name = "ming", about = "Chinese calendar and name-analysis CLI")]
struct Cli {
    /// Path to a TOML config file
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Data directory holding the dictionaries (overrides config)
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,
    /// Report language: simplified, traditional, or english
    #[arg(long, global = true)]
    language: Option<String>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Calendar report for an instant at a location
    Calendar {
        /// UTC datetime (YYYY-MM-DDThh:mm:ssZ)
        #[arg(long)]
        date: String,
        /// Latitude in degrees, north positive
        #[arg(long)]
        lat: f64,
        /// Longitude in degrees, east positive
        #[arg(long)]
        lon: f64,
    },
    /// Full name report for a birth instant at a location
    Rank {
        /// Family name in Chinese characters
        #[arg(long)]
        family: String,
        /// Given name in Chinese characters
        #[arg(long)]
        given: String,
        /// Middle name, usually empty for Chinese names
        #[arg(long, default_value = "")]
        middle: String,
        /// Birth UTC datetime (YYYY-MM-DDThh:mm:ssZ)
        #[arg(long)]
        date: String,
        /// Latitude in degrees, north positive
        #[arg(long)]
        lat: f64,
        /// Longitude in degrees, east positive
        #[arg(long)]
        lon: f64,
    },
}

fn parse_timestamp(date: &str) -> Result<i64, String> {
    DateTime::parse_from_rfc3339(date)
        .map(|d| d.timestamp())
        .map_err(|e| format!("invalid datetime <{date}>: {e}"))
}

fn load_config(cli: &Cli) -> Result<Config, String> {
    let mut config = match &cli.config {
        Some(path) => Config::from_file(path).map_err(|e| e.to_string())?,
        None => Config::from_env(),
    };
    if let Some(dir) = &cli.data_dir {
        config.data_dir = dir.clone();
    }
    if let Some(code) = &cli.language {
        config.language = Language::parse(code);
    }
    Ok(config)
}

fn run(cli: Cli) -> Result<String, String> {
    let config = load_config(&cli)?;
    let language = config.language;

    match cli.command {
        Commands::Calendar { date, lat, lon } => {
            let timestamp = parse_timestamp(&date)?;
            let location = Location {
                latitude: lat,
                longitude: lon,
            };
            // Calendar conversion needs message texts but no dictionaries;
            // load them if the data directory is usable, otherwise fall
            // back to raw indexes.
            let ming = Ming::new(config).unwrap_or_else(|_| Ming::empty());
            ming.calendar_json(timestamp, location, language)
                .map_err(|e| e.to_string())
        }
        Commands::Rank {
            family,
            given,
            middle,
            date,
            lat,
            lon,
        } => {
            let timestamp = parse_timestamp(&date)?;
            let location = Location {
                latitude: lat,
                longitude: lon,
            };
            let ming = Ming::new(config).map_err(|e| e.to_string())?;
            ming.rank_json(language, &family, &middle, &given, timestamp, location)
                .map_err(|e| e.to_string())
        }
    }
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match run(cli) {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Err(message) => {
            eprintln!("error: {message}");
            ExitCode::FAILURE
        }
    }
}
