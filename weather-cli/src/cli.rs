use clap::{Parser, Subcommand};
use tracing::debug;
use weather_core::{FetchResult, Mode, WeatherSource, display, fetch_many, source_from_mode};

const DEMO_CITY: &str = "Tokyo";
const DEMO_CITIES: [&str; 3] = ["Tokyo", "Osaka", "Kyoto"];

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(
    name = "weather",
    version,
    about = "Show current weather and clothing advice",
    after_help = "Runs against the OpenWeather API when OPENWEATHER_API_KEY is set;\n\
                  otherwise (or when the key is the literal \"demo\") mock data is used."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Show weather for one city.
    #[command(alias = "weather")]
    Get {
        /// City name, e.g. "Tokyo".
        city: String,
    },

    /// Show weather for several cities, fetched concurrently.
    Multiple {
        /// City names, one result per city in the same order.
        #[arg(required = true)]
        cities: Vec<String>,
    },
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        let mode = Mode::from_env();
        debug!(mock = mode.is_mock(), "resolved startup mode");
        let source = source_from_mode(&mode);

        match self.command {
            Some(Command::Get { city }) => {
                let result = source.current_weather(&city).await;
                print_result(&city, &result);
            }
            Some(Command::Multiple { cities }) => {
                fetch_and_print_all(source.as_ref(), &cities).await;
            }
            None => demo(source.as_ref()).await,
        }

        Ok(())
    }
}

/// Demonstration sequence for a bare invocation: one fixed city, then a
/// fixed multi-city fan-out.
async fn demo(source: &dyn WeatherSource) {
    println!("=== Single city ===\n");
    let result = source.current_weather(DEMO_CITY).await;
    print_result(DEMO_CITY, &result);

    println!("\n=== Multiple cities ===\n");
    let cities: Vec<String> = DEMO_CITIES.iter().map(|c| c.to_string()).collect();
    fetch_and_print_all(source, &cities).await;
}

async fn fetch_and_print_all(source: &dyn WeatherSource, cities: &[String]) {
    let results = fetch_many(source, cities).await;
    for (city, result) in cities.iter().zip(&results) {
        print_result(city, result);
        println!();
    }
}

/// A failed fetch is reported inline and never aborts the process.
fn print_result(city: &str, result: &FetchResult) {
    match result {
        Ok(record) => {
            println!("{}", display::format_report(record));
            println!("👕 {}", display::clothing_advice(record.temperature_c));
        }
        Err(err) => {
            println!("Could not fetch weather for {city}: {err}");
        }
    }
}
