use async_trait::async_trait;

use crate::mock;
use crate::model::FetchResult;

use super::WeatherSource;

/// Source that synthesizes weather locally. Never touches the network and
/// never fails.
#[derive(Debug, Clone, Copy)]
pub struct MockSource;

#[async_trait]
impl WeatherSource for MockSource {
    async fn current_weather(&self, city: &str) -> FetchResult {
        Ok(mock::generate(city))
    }
}
