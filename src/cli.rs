use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

pub mod commands;

use commands::{inspect_dataset, serve};

#[derive(Parser)]
#[command(name = "phoenix-climate")]
#[command(about = "Phoenix Climate Data web server and dataset tools")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the web server
    Serve {
        /// Optional TOML configuration file
        ///
        /// Values are layered as: built-in defaults, this file, then
        /// PHOENIX_* environment variables, then the flags below.
        #[arg(short, long, env = "PHOENIX_CONFIG")]
        config: Option<PathBuf>,

        /// Bind address for the web server
        ///
        /// Format: IP:PORT (e.g., 0.0.0.0:3000, 127.0.0.1:8080)
        #[arg(short, long)]
        bind_address: Option<String>,

        /// CSV file served at /temperature_data.csv
        #[arg(short, long)]
        dataset_path: Option<PathBuf>,

        /// Directory containing the built frontend bundle
        #[arg(short, long)]
        static_dir: Option<PathBuf>,
    },
    /// Parse a temperature CSV and log a monthly summary
    ///
    /// Expected columns: Date, Max Temperature, Min Temperature,
    /// Avg Temperature (short "Max Temp" style names are accepted).
    InspectDataset {
        /// Path to the CSV file
        #[arg(short, long)]
        path: PathBuf,
    },
}

impl Cli {
    pub async fn run(self) -> Result<()> {
        match self.command {
            Commands::Serve {
                config,
                bind_address,
                dataset_path,
                static_dir,
            } => {
                let mut settings = crate::config::ServerSettings::load(config.as_deref())?;
                if let Some(bind_address) = bind_address {
                    settings.bind_address = bind_address;
                }
                if let Some(dataset_path) = dataset_path {
                    settings.dataset_path = dataset_path;
                }
                if let Some(static_dir) = static_dir {
                    settings.static_dir = static_dir;
                }
                serve(&settings).await?;
            }
            Commands::InspectDataset { path } => {
                inspect_dataset(&path).await?;
            }
        }
        Ok(())
    }
}
