//! Core library for the `weather` CLI.
//!
//! This crate defines:
//! - Startup mode selection (live API key vs. local mock data)
//! - The weather-source abstraction and its live/mock implementations
//! - Multi-city concurrent fan-out
//! - Display formatting and clothing advice
//!
//! It is used by `weather-cli`, but can also be reused by other binaries.

pub mod config;
pub mod display;
pub mod error;
pub mod http;
pub mod mock;
pub mod model;
pub mod provider;

pub use config::Mode;
pub use error::FetchError;
pub use model::{FetchResult, WeatherRecord};
pub use provider::{WeatherSource, fetch_many, source_from_mode};
