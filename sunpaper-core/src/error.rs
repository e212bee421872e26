use chrono::{DateTime, Utc};
use thiserror::Error;

/// Failures while obtaining today's sunrise and sunset.
#[derive(Error, Debug)]
pub enum SunTimesError {
    /// Transport failure, timeout or a non-success HTTP status.
    #[error("Failed to fetch sun times: {0}")]
    Fetch(String),

    /// The payload did not have the expected shape.
    #[error("Invalid sun times response: {0}")]
    Response(String),

    /// A timestamp field was present but not ISO-8601.
    #[error("Failed to parse {field} timestamp '{value}': {source}")]
    Parse {
        field: &'static str,
        value: String,
        #[source]
        source: chrono::ParseError,
    },

    /// Sunrise is not strictly before sunset (polar day or night).
    #[error("Sunrise ({sunrise}) is not before sunset ({sunset}); no day to classify")]
    InvalidDay {
        sunrise: DateTime<Utc>,
        sunset: DateTime<Utc>,
    },
}
