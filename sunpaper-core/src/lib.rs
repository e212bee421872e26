//! Core library for the `sunpaper` CLI.
//!
//! This crate defines:
//! - Configuration handling
//! - Abstraction over sun-times providers (sunrise-sunset.org)
//! - Shared domain models and the wallpaper classifier
//!
//! It is used by `sunpaper-cli`, but can also be reused by other binaries or services.

pub mod classify;
pub mod config;
pub mod error;
pub mod model;
pub mod provider;

pub use classify::choose_wallpaper;
pub use config::{ApiConfig, Config};
pub use error::SunTimesError;
pub use model::{Coordinate, SolarTimes, WallpaperKind};
pub use provider::{SunTimesProvider, provider_from_config};
