use async_trait::async_trait;
use chrono::Utc;
use reqwest::Url;
use serde::Deserialize;
use tracing::debug;

use crate::error::FetchError;
use crate::http::HttpClient;
use crate::model::{FetchResult, WeatherRecord};

use super::WeatherSource;

const DEFAULT_BASE_URL: &str = "https://api.openweathermap.org";
const WEATHER_PATH: &str = "/data/2.5/weather";
const LANG: &str = "en";

/// Live source backed by the OpenWeather current-weather endpoint.
#[derive(Debug, Clone)]
pub struct OpenWeatherSource {
    api_key: String,
    http: HttpClient,
    base_url: String,
}

impl OpenWeatherSource {
    pub fn new(api_key: String) -> Self {
        Self::with_parts(api_key, HttpClient::new(), DEFAULT_BASE_URL.to_string())
    }

    /// Tests point `base_url` at a local mock server and may inject a client
    /// with a shorter timeout.
    pub fn with_parts(api_key: String, http: HttpClient, base_url: String) -> Self {
        Self {
            api_key,
            http,
            base_url,
        }
    }

    fn request_url(&self, city: &str) -> Result<Url, FetchError> {
        Url::parse_with_params(
            &format!("{}{}", self.base_url, WEATHER_PATH),
            &[
                ("q", city),
                ("appid", self.api_key.as_str()),
                ("units", "metric"),
                ("lang", LANG),
            ],
        )
        .map_err(|e| FetchError::Transport(format!("invalid request URL: {e}")))
    }
}

#[derive(Debug, Deserialize)]
struct OwMain {
    temp: f64,
    humidity: u8,
}

#[derive(Debug, Deserialize)]
struct OwWeather {
    description: String,
}

#[derive(Debug, Deserialize)]
struct OwWind {
    speed: f64,
}

#[derive(Debug, Deserialize)]
struct OwSys {
    country: String,
}

#[derive(Debug, Deserialize)]
struct OwCurrentResponse {
    name: String,
    sys: OwSys,
    main: OwMain,
    weather: Vec<OwWeather>,
    wind: OwWind,
}

#[async_trait]
impl WeatherSource for OpenWeatherSource {
    async fn current_weather(&self, city: &str) -> FetchResult {
        let url = self.request_url(city)?;
        debug!(%city, "requesting current weather");

        let body = self.http.get_text(url.as_str()).await?;

        let parsed: OwCurrentResponse =
            serde_json::from_str(&body).map_err(|e| FetchError::Parse(e.to_string()))?;

        // Strict DTOs already reject missing fields; an empty condition list
        // is the one hole serde leaves open.
        let description = parsed
            .weather
            .first()
            .map(|w| w.description.clone())
            .ok_or_else(|| FetchError::Parse("weather condition list is empty".to_string()))?;

        Ok(WeatherRecord {
            location: format!("{}, {}", parsed.name, parsed.sys.country),
            temperature_c: parsed.main.temp.round() as i32,
            description,
            humidity_pct: parsed.main.humidity,
            wind_speed_mps: parsed.wind.speed,
            captured_at: Utc::now(),
        })
    }
}
