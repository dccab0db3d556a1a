use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::FetchError;

/// A single current-weather observation, constructed fresh per fetch and
/// never mutated afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherRecord {
    /// Display location, e.g. "Tokyo, JP".
    pub location: String,
    /// Whole degrees Celsius in both live and mock mode.
    pub temperature_c: i32,
    /// Free-text condition, e.g. "clear sky".
    pub description: String,
    pub humidity_pct: u8,
    pub wind_speed_mps: f64,
    /// When this record was produced, not the provider's observation time.
    pub captured_at: DateTime<Utc>,
}

/// Outcome of any public fetch operation. `Ok` carries a fully formed
/// record; `Err` carries the classified cause and nothing else.
pub type FetchResult = Result<WeatherRecord, FetchError>;
