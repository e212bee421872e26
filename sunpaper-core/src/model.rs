use chrono::{DateTime, Duration, Utc};
use std::{
    fmt,
    path::{Path, PathBuf},
};

use crate::error::SunTimesError;

/// A caller-supplied location in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self { latitude, longitude }
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.latitude, self.longitude)
    }
}

/// Today's sunrise and sunset for one location, both in UTC.
///
/// Construction guarantees `sunrise < sunset`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SolarTimes {
    sunrise: DateTime<Utc>,
    sunset: DateTime<Utc>,
}

impl SolarTimes {
    pub fn new(sunrise: DateTime<Utc>, sunset: DateTime<Utc>) -> Result<Self, SunTimesError> {
        if sunrise >= sunset {
            return Err(SunTimesError::InvalidDay { sunrise, sunset });
        }
        Ok(Self { sunrise, sunset })
    }

    pub fn sunrise(&self) -> DateTime<Utc> {
        self.sunrise
    }

    pub fn sunset(&self) -> DateTime<Utc> {
        self.sunset
    }

    pub fn day_length(&self) -> Duration {
        self.sunset - self.sunrise
    }

    /// Midpoint between sunrise and sunset.
    pub fn solar_noon(&self) -> DateTime<Utc> {
        self.sunrise + self.day_length() / 2
    }
}

/// The six wallpapers, one per period of the day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WallpaperKind {
    Night,
    Sunrise,
    Morning,
    Noon,
    Evening,
    Sunset,
}

impl WallpaperKind {
    const EXTENSION: &'static str = "png";

    pub fn as_str(&self) -> &'static str {
        match self {
            WallpaperKind::Night => "night",
            WallpaperKind::Sunrise => "sunrise",
            WallpaperKind::Morning => "morning",
            WallpaperKind::Noon => "noon",
            WallpaperKind::Evening => "evening",
            WallpaperKind::Sunset => "sunset",
        }
    }

    pub const fn all() -> &'static [WallpaperKind] {
        &[
            WallpaperKind::Night,
            WallpaperKind::Sunrise,
            WallpaperKind::Morning,
            WallpaperKind::Noon,
            WallpaperKind::Evening,
            WallpaperKind::Sunset,
        ]
    }

    /// Image file name, e.g. `noon.png`.
    pub fn file_name(&self) -> String {
        format!("{}.{}", self.as_str(), Self::EXTENSION)
    }

    /// Location of the image inside `media_dir`.
    pub fn path(&self, media_dir: &Path) -> PathBuf {
        media_dir.join(self.file_name())
    }
}

impl fmt::Display for WallpaperKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
