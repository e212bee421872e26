use std::path::PathBuf;

use anyhow::Context;
use chrono::Utc;
use clap::Parser;
use sunpaper_core::{Config, Coordinate, choose_wallpaper, provider_from_config};
use tracing::info;

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(
    name = "sunpaper",
    version,
    about = "Select a wallpaper based on the sun's position (UTC) for a location",
    allow_negative_numbers = true
)]
pub struct Cli {
    /// Latitude of the location in decimal degrees.
    pub latitude: f64,

    /// Longitude of the location in decimal degrees.
    pub longitude: f64,

    /// Read configuration from this file instead of the platform config dir.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Print only the wallpaper name (e.g. "noon") instead of its media path.
    #[arg(long)]
    pub name_only: bool,
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        let config = match &self.config {
            Some(path) => Config::load_from(path)?,
            None => Config::load()?,
        };

        let now = Utc::now();
        info!("Current UTC time: {now}");

        let coordinate = Coordinate::new(self.latitude, self.longitude);
        let provider = provider_from_config(&config)?;

        let times = provider
            .fetch(coordinate)
            .await
            .with_context(|| format!("Failed to retrieve sun times for {coordinate}"))?;

        let wallpaper = choose_wallpaper(now, &times);
        info!("Selected wallpaper: {wallpaper}");

        if self.name_only {
            println!("{wallpaper}");
        } else {
            println!("{}", wallpaper.path(&config.media_dir).display());
        }

        Ok(())
    }
}
