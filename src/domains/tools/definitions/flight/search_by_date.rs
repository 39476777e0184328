//! Flight search by departure date.

use chrono::NaiveDate;
use rmcp::model::CallToolResult;
use schemars::JsonSchema;
use serde::Deserialize;
use tracing::{info, instrument};

use super::super::ToolDefinition;
use super::super::common::{CURRENCY, format_clock, format_duration, parse_date};
use super::common::{Flight, scheduled_carriers};
use crate::domains::tools::ToolError;
use crate::domains::tools::context::ToolContext;
use crate::domains::tools::response::list_result;

/// Parameters for the date search.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct FlightSearchByDateParams {
    /// Departure date in YYYY-MM-DD format.
    #[schemars(description = "Departure date in YYYY-MM-DD format (e.g. 2024-03-15)")]
    #[serde(default)]
    pub date: String,
}

const SCHEDULE_CITIES: &[&str] = &["İstanbul", "Ankara", "İzmir", "Antalya", "Trabzon", "Adana"];
const SCHEDULE_SIZE: u32 = 8;

/// Lists the day's flights for a given date.
pub struct FlightSearchByDateTool;

impl FlightSearchByDateTool {
    pub fn search(date: &str) -> Result<Vec<Flight>, ToolError> {
        let date = parse_date("date", date)?;
        Ok(Self::daily_schedule(date))
    }

    /// The fixed eight-flight schedule operated on `date`.
    pub fn daily_schedule(date: NaiveDate) -> Vec<Flight> {
        let carriers = scheduled_carriers();
        (0..SCHEDULE_SIZE)
            .map(|i| {
                let idx = i as usize;
                let carrier = &carriers[idx % carriers.len()];
                let departure_hour = 8 + i * 2;
                let minute = (i * 15) % 60;
                Flight {
                    flight_number: format!("{}{:03}", carrier.code, 100 + i),
                    airline: carrier.short_name.to_string(),
                    from: SCHEDULE_CITIES[idx % SCHEDULE_CITIES.len()].to_string(),
                    to: SCHEDULE_CITIES[(idx + 1) % SCHEDULE_CITIES.len()].to_string(),
                    date,
                    departure_time: format_clock(departure_hour, minute),
                    arrival_time: format_clock(departure_hour + 2, minute),
                    price: 150 + i * 50,
                    currency: CURRENCY,
                    duration: Some(format_duration(80 + i * 10)),
                    available: None,
                    aircraft: None,
                }
            })
            .collect()
    }
}

impl ToolDefinition for FlightSearchByDateTool {
    const NAME: &'static str = "flight.searchByDate";
    const DESCRIPTION: &'static str =
        "Lists flights departing on a given date (YYYY-MM-DD). Returns flight number, airline, route, times, price and duration.";

    type Params = FlightSearchByDateParams;

    #[instrument(skip_all, fields(date = %params.date))]
    fn execute(params: &FlightSearchByDateParams, _ctx: &ToolContext) -> CallToolResult {
        info!("Searching flights by date");
        list_result(Self::search(&params.date))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::tools::response::payload;

    fn run(date: &str) -> serde_json::Value {
        let params = FlightSearchByDateParams {
            date: date.to_string(),
        };
        payload(&FlightSearchByDateTool::execute(&params, &ToolContext::new()))
    }

    #[test]
    fn test_search_by_date_returns_eight_flights() {
        let flights = run("2024-03-15");
        let flights = flights.as_array().unwrap();
        assert_eq!(flights.len(), 8);

        for flight in flights {
            for field in ["flightNumber", "airline", "from", "to"] {
                assert!(!flight[field].as_str().unwrap().is_empty(), "{} empty", field);
            }
            assert!(flight["price"].as_u64().unwrap() >= 150);
            assert_eq!(flight["date"], "2024-03-15");
            assert!(flight.get("error").is_none());
        }
    }

    #[test]
    fn test_search_by_date_invalid_format() {
        let flights = run("not-a-date");
        let flights = flights.as_array().unwrap();
        assert_eq!(flights.len(), 1);
        assert!(flights[0]["error"].is_string());
    }

    #[test]
    fn test_search_by_date_missing_argument() {
        let params: FlightSearchByDateParams = serde_json::from_str("{}").unwrap();
        let result = FlightSearchByDateTool::execute(&params, &ToolContext::new());
        assert_eq!(result.is_error, Some(true));
    }

    #[test]
    fn test_daily_schedule_fields() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
        let flights = FlightSearchByDateTool::daily_schedule(date);

        assert_eq!(flights[0].flight_number, "TK100");
        assert_eq!(flights[0].from, "İstanbul");
        assert_eq!(flights[0].to, "Ankara");
        assert_eq!(flights[1].flight_number, "PC101");
        assert_eq!(flights[1].airline, "Pegasus");
        assert_eq!(flights[5].to, "İstanbul");
        assert_eq!(flights[7].departure_time, "22:45");
        assert_eq!(flights[7].arrival_time, "00:45");
        assert_eq!(flights[7].price, 500);
        assert_eq!(flights[7].duration.as_deref(), Some("2h 30m"));
    }
}
