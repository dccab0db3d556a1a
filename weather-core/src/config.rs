use std::env;

/// Environment variable supplying the OpenWeather API key.
pub const API_KEY_ENV: &str = "OPENWEATHER_API_KEY";

/// Sentinel key value that historically meant "no real credential".
const DEMO_SENTINEL: &str = "demo";

/// How weather is fetched, decided once at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    /// Query the OpenWeather API with the given key.
    Live { api_key: String },
    /// Synthesize data locally; never touches the network.
    Mock,
}

impl Mode {
    /// Resolve the mode from the `OPENWEATHER_API_KEY` environment variable.
    /// An unset, empty, or literal `"demo"` key selects mock mode.
    pub fn from_env() -> Self {
        Self::from_key(env::var(API_KEY_ENV).ok().as_deref())
    }

    pub fn from_key(key: Option<&str>) -> Self {
        match key {
            Some(k) if !k.is_empty() && k != DEMO_SENTINEL => Mode::Live {
                api_key: k.to_string(),
            },
            _ => Mode::Mock,
        }
    }

    pub fn is_mock(&self) -> bool {
        matches!(self, Mode::Mock)
    }
}
