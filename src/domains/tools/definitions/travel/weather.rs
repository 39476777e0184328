//! Sample weather forecast for a city and date.

use chrono::{Datelike, NaiveDate};
use rand::Rng;
use rand::seq::SliceRandom;
use rmcp::model::CallToolResult;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

use super::super::ToolDefinition;
use super::super::common::{parse_date, require_city, round1};
use crate::domains::tools::ToolError;
use crate::domains::tools::context::ToolContext;
use crate::domains::tools::response::record_result;

#[derive(Debug, Clone, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct TravelWeatherParams {
    /// City to forecast.
    #[serde(default)]
    pub city_name: String,

    /// Forecast date (YYYY-MM-DD).
    #[serde(default)]
    pub date: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct Temperature {
    pub min: i32,
    pub max: i32,
    pub unit: &'static str,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WeatherForecast {
    pub city: String,
    pub date: NaiveDate,
    pub temperature: Temperature,
    pub humidity: u32,
    pub condition: &'static str,
    pub wind_speed: u32,
    pub precipitation: f64,
    pub recommendation: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warning: Option<String>,
}

/// Base temperature (°C) for January through December.
const MONTHLY_BASE_TEMPS: [i32; 12] = [5, 7, 12, 17, 22, 27, 30, 30, 25, 19, 13, 8];

/// Days ahead beyond which a forecast is only indicative.
const FORECAST_HORIZON_DAYS: i64 = 7;

const CONDITIONS: &[&str] = &["Sunny", "Partly Cloudy", "Cloudy", "Rainy", "Snowy"];

const RECOMMENDATIONS: &[&str] = &[
    "An ideal day for travelling",
    "Light rain is possible, take an umbrella",
    "Hot weather, drink plenty of water",
    "Cold weather, dress warmly",
];

pub struct TravelWeatherTool;

impl TravelWeatherTool {
    pub fn forecast<R: Rng + ?Sized>(
        city: &str,
        date: &str,
        today: NaiveDate,
        rng: &mut R,
    ) -> Result<WeatherForecast, ToolError> {
        let city = require_city(city, "City name")?;
        let date = parse_date("date", date)?;

        let warning = ((date - today).num_days() > FORECAST_HORIZON_DAYS).then(|| {
            format!(
                "Forecasts are not available more than {} days ahead; showing general information",
                FORECAST_HORIZON_DAYS
            )
        });

        let base = MONTHLY_BASE_TEMPS[date.month0() as usize];
        let temperature = Temperature {
            min: base - 5 + rng.gen_range(0..5),
            max: base + 5 + rng.gen_range(0..5),
            unit: "Celsius",
        };

        Ok(WeatherForecast {
            city,
            date,
            temperature,
            humidity: rng.gen_range(40..80),
            condition: CONDITIONS.choose(rng).copied().unwrap_or_default(),
            wind_speed: rng.gen_range(5..25),
            precipitation: round1(rng.gen_range(0.0..10.0_f64)),
            recommendation: RECOMMENDATIONS.choose(rng).copied().unwrap_or_default(),
            warning,
        })
    }
}

impl ToolDefinition for TravelWeatherTool {
    const NAME: &'static str = "travel.getWeatherForecast";
    const DESCRIPTION: &'static str = "Returns a weather forecast for a city on a date \
        (YYYY-MM-DD): temperature range, humidity, conditions, wind and precipitation.";

    type Params = TravelWeatherParams;

    #[instrument(skip_all, fields(city = %params.city_name, date = %params.date))]
    fn execute(params: &TravelWeatherParams, ctx: &ToolContext) -> CallToolResult {
        info!("Fetching weather forecast");
        record_result(Self::forecast(
            &params.city_name,
            &params.date,
            ctx.today(),
            &mut ctx.rng(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::tools::response::payload;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 7, 1).unwrap()
    }

    fn forecast(date: &str) -> Result<WeatherForecast, ToolError> {
        TravelWeatherTool::forecast("izmir", date, today(), &mut ToolContext::seeded(8).rng())
    }

    #[test]
    fn test_temperature_follows_month() {
        let july = forecast("2024-07-03").unwrap();
        assert!((25..30).contains(&july.temperature.min));
        assert!((35..40).contains(&july.temperature.max));

        let january = forecast("2025-01-10").unwrap();
        assert!((0..5).contains(&january.temperature.min));
        assert!((10..15).contains(&january.temperature.max));
    }

    #[test]
    fn test_ranges() {
        let weather = forecast("2024-07-02").unwrap();
        assert_eq!(weather.city, "İzmir");
        assert!((40..80).contains(&weather.humidity));
        assert!((5..25).contains(&weather.wind_speed));
        assert!((0.0..=10.0).contains(&weather.precipitation));
        assert!(CONDITIONS.contains(&weather.condition));
    }

    #[test]
    fn test_warning_beyond_horizon() {
        assert!(forecast("2024-07-08").unwrap().warning.is_none());
        assert!(forecast("2024-07-09").unwrap().warning.is_some());
        assert!(forecast("2024-06-01").unwrap().warning.is_none());
    }

    #[test]
    fn test_invalid_inputs() {
        assert!(matches!(
            forecast("2024/07/09"),
            Err(ToolError::InvalidDate { .. })
        ));
        let blank = TravelWeatherTool::forecast(" ", "2024-07-09", today(), &mut ToolContext::seeded(8).rng());
        assert!(matches!(blank, Err(ToolError::MissingArgument(_))));
    }

    #[test]
    fn test_payload_uses_reference_date() {
        let ctx = ToolContext::seeded(8).with_reference_date(today());
        let params = TravelWeatherParams {
            city_name: "Ankara".to_string(),
            date: "2024-08-15".to_string(),
        };
        let result = payload(&TravelWeatherTool::execute(&params, &ctx));
        assert_eq!(result["date"], "2024-08-15");
        assert_eq!(result["temperature"]["unit"], "Celsius");
        assert!(result["warning"].is_string());
        assert!(result["windSpeed"].is_u64());
    }
}
