use crate::{
    Config,
    error::SunTimesError,
    model::{Coordinate, SolarTimes},
    provider::sunrise_sunset::SunriseSunsetProvider,
};
use async_trait::async_trait;
use std::fmt::Debug;

pub mod sunrise_sunset;

/// Source of today's sunrise and sunset for a location.
#[async_trait]
pub trait SunTimesProvider: Send + Sync + Debug {
    async fn fetch(&self, coordinate: Coordinate) -> Result<SolarTimes, SunTimesError>;
}

/// Construct the provider described by `config`.
pub fn provider_from_config(config: &Config) -> Result<Box<dyn SunTimesProvider>, SunTimesError> {
    let provider = SunriseSunsetProvider::new(config.api.base_url.clone(), config.api.timeout())?;
    Ok(Box::new(provider))
}
