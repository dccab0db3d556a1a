use async_trait::async_trait;
use futures::future::join_all;
use std::fmt::Debug;
use tracing::debug;

use crate::config::Mode;
use crate::model::FetchResult;
use crate::provider::{mock::MockSource, openweather::OpenWeatherSource};

pub mod mock;
pub mod openweather;

/// Something that can answer "what's the weather in this city right now".
///
/// Implementations never panic past their boundary: every outcome is a
/// [`FetchResult`].
#[async_trait]
pub trait WeatherSource: Send + Sync + Debug {
    async fn current_weather(&self, city: &str) -> FetchResult;
}

/// Construct the source matching the startup mode.
pub fn source_from_mode(mode: &Mode) -> Box<dyn WeatherSource> {
    match mode {
        Mode::Live { api_key } => {
            debug!("using live OpenWeather source");
            Box::new(OpenWeatherSource::new(api_key.clone()))
        }
        Mode::Mock => {
            debug!("no API key configured, using mock source");
            Box::new(MockSource)
        }
    }
}

/// Fetch several cities concurrently, one independent request each.
///
/// The output has the same length and order as `cities`; one city failing
/// never cancels or affects its siblings.
pub async fn fetch_many(source: &dyn WeatherSource, cities: &[String]) -> Vec<FetchResult> {
    let fetches = cities.iter().map(|city| source.current_weather(city));
    join_all(fetches).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn live_mode_builds_openweather_source() {
        let mode = Mode::Live {
            api_key: "KEY".to_string(),
        };
        let source = source_from_mode(&mode);
        assert!(format!("{source:?}").contains("OpenWeatherSource"));
    }

    #[test]
    fn mock_mode_builds_mock_source() {
        let source = source_from_mode(&Mode::Mock);
        assert!(format!("{source:?}").contains("MockSource"));
    }

    #[tokio::test]
    async fn fetch_many_preserves_input_order() {
        let source = MockSource;
        let cities = vec![
            "tokyo".to_string(),
            "osaka".to_string(),
            "kyoto".to_string(),
        ];

        let results = fetch_many(&source, &cities).await;
        assert_eq!(results.len(), 3);

        let locations: Vec<_> = results
            .iter()
            .map(|r| r.as_ref().unwrap().location.clone())
            .collect();
        assert_eq!(locations, ["Tokyo, JP", "Osaka, JP", "Kyoto, JP"]);
    }

    #[tokio::test]
    async fn fetch_many_of_empty_list_is_empty() {
        let results = fetch_many(&MockSource, &[]).await;
        assert!(results.is_empty());
    }
}
