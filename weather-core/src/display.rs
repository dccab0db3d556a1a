//! Human-friendly output formatting for weather records.

use chrono::Local;

use crate::model::WeatherRecord;

/// Render a record as a fixed multi-line block for the terminal.
///
/// Positive temperatures carry an explicit `+`; the pictogram has three
/// tiers (above 25, above 15, everything colder). Total over all valid
/// records, whatever the field contents.
pub fn format_report(record: &WeatherRecord) -> String {
    let pictogram = if record.temperature_c > 25 {
        "☀️"
    } else if record.temperature_c > 15 {
        "⛅"
    } else {
        "❄️"
    };

    let temperature = format_temperature(record.temperature_c);
    let captured = record
        .captured_at
        .with_timezone(&Local)
        .format("%Y-%m-%d %H:%M:%S");

    format!(
        "📍 {}\n\
         🌡️  {}°C {}\n\
         ☁️  {}\n\
         💧 Humidity: {}%\n\
         💨 Wind: {} m/s\n\
         🕐 Captured: {}",
        record.location,
        temperature,
        pictogram,
        record.description,
        record.humidity_pct,
        record.wind_speed_mps,
        captured,
    )
}

fn format_temperature(temp_c: i32) -> String {
    if temp_c > 0 {
        format!("+{temp_c}")
    } else {
        temp_c.to_string()
    }
}

/// What to wear at a given temperature. Five tiers, checked warmest first,
/// lower bound of each tier inclusive.
pub fn clothing_advice(temp_c: i32) -> &'static str {
    if temp_c >= 25 {
        "T-shirt and shorts weather"
    } else if temp_c >= 20 {
        "Light clothing, maybe bring a thin layer for the evening"
    } else if temp_c >= 15 {
        "A light jacket or sweater is a good idea"
    } else if temp_c >= 10 {
        "Wear a warm jacket"
    } else {
        "Bundle up: winter coat, hat and gloves"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn record(temp_c: i32) -> WeatherRecord {
        WeatherRecord {
            location: "Tokyo, JP".to_string(),
            temperature_c: temp_c,
            description: "clear sky".to_string(),
            humidity_pct: 60,
            wind_speed_mps: 3.5,
            captured_at: Utc::now(),
        }
    }

    #[test]
    fn positive_temperature_gets_explicit_sign() {
        let report = format_report(&record(22));
        assert!(report.contains("+22°C"));
    }

    #[test]
    fn zero_and_negative_temperatures_have_no_plus() {
        assert!(format_report(&record(0)).contains(" 0°C"));
        assert!(format_report(&record(-5)).contains(" -5°C"));
        assert!(!format_report(&record(-5)).contains("+-5"));
    }

    #[test]
    fn report_contains_all_fields() {
        let report = format_report(&record(22));
        assert!(report.contains("Tokyo, JP"));
        assert!(report.contains("clear sky"));
        assert!(report.contains("Humidity: 60%"));
        assert!(report.contains("Wind: 3.5 m/s"));
    }

    #[test]
    fn formatting_is_total_over_odd_records() {
        let mut odd = record(-40);
        odd.description = "☄️ µ-scale \"weather\" — 100% weird\n".to_string();
        odd.humidity_pct = 0;
        odd.wind_speed_mps = 0.0;
        let _ = format_report(&odd);

        odd.humidity_pct = 100;
        odd.temperature_c = 55;
        let _ = format_report(&odd);
    }

    #[test]
    fn clothing_advice_top_tier_starts_at_25() {
        assert_eq!(clothing_advice(25), clothing_advice(30));
        assert_ne!(clothing_advice(24), clothing_advice(25));
    }

    #[test]
    fn clothing_advice_tier_boundaries_are_inclusive_below() {
        assert_eq!(clothing_advice(20), clothing_advice(24));
        assert_eq!(clothing_advice(15), clothing_advice(19));
        assert_eq!(clothing_advice(10), clothing_advice(14));
        assert_ne!(clothing_advice(9), clothing_advice(10));
    }

    #[test]
    fn clothing_advice_bottom_tier_covers_everything_below_10() {
        assert_eq!(clothing_advice(9), clothing_advice(-30));
    }
}
