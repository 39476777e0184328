//! Flight search by operating airline.

use chrono::{Days, NaiveDate};
use rmcp::model::CallToolResult;
use schemars::JsonSchema;
use serde::Deserialize;
use tracing::{info, instrument};

use super::super::ToolDefinition;
use super::super::common::{CURRENCY, format_clock, require};
use super::common::{Flight, aircraft_type, airline_code};
use crate::domains::tools::ToolError;
use crate::domains::tools::context::ToolContext;
use crate::domains::tools::response::list_result;

/// Parameters for the airline search.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct FlightSearchByAirlineParams {
    /// Airline name (e.g. "Turkish Airlines", "Pegasus").
    #[serde(default)]
    pub airline_name: String,
}

const NETWORK_CITIES: &[&str] = &["İstanbul", "Ankara", "İzmir", "Antalya", "Trabzon"];
const DEPARTURES: u32 = 6;

/// Lists the upcoming departures of one airline.
pub struct FlightSearchByAirlineTool;

impl FlightSearchByAirlineTool {
    pub fn search(airline: &str, today: NaiveDate) -> Result<Vec<Flight>, ToolError> {
        let airline = require(airline, "Airline name")?;
        Ok(Self::departures(airline, today))
    }

    pub fn departures(airline: &str, today: NaiveDate) -> Vec<Flight> {
        let code = airline_code(airline);
        let aircraft = aircraft_type(airline);

        (0..DEPARTURES)
            .map(|i| {
                let idx = i as usize;
                let departure_hour = 7 + i * 2;
                let minute = (i * 25) % 60;
                Flight {
                    flight_number: format!("{}{:03}", code, 300 + i),
                    airline: airline.to_string(),
                    from: NETWORK_CITIES[idx % NETWORK_CITIES.len()].to_string(),
                    to: NETWORK_CITIES[(idx + 2) % NETWORK_CITIES.len()].to_string(),
                    date: today + Days::new(u64::from(i % 7)),
                    departure_time: format_clock(departure_hour, minute),
                    arrival_time: format_clock(departure_hour + 2, minute),
                    price: 180 + i * 60,
                    currency: CURRENCY,
                    duration: None,
                    available: None,
                    aircraft: Some(aircraft),
                }
            })
            .collect()
    }
}

impl ToolDefinition for FlightSearchByAirlineTool {
    const NAME: &'static str = "flight.searchByAirline";
    const DESCRIPTION: &'static str =
        "Lists upcoming flights operated by the given airline, including aircraft type.";

    type Params = FlightSearchByAirlineParams;

    #[instrument(skip_all, fields(airline = %params.airline_name))]
    fn execute(params: &FlightSearchByAirlineParams, ctx: &ToolContext) -> CallToolResult {
        info!("Searching flights by airline");
        list_result(Self::search(&params.airline_name, ctx.today()))
    }
}
