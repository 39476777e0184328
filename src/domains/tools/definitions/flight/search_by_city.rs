//! Flight search between two cities.

use chrono::{Days, NaiveDate};
use rmcp::model::CallToolResult;
use schemars::JsonSchema;
use serde::Deserialize;
use tracing::{info, instrument};

use super::super::ToolDefinition;
use super::super::common::{CURRENCY, format_clock, format_duration, require_city};
use super::common::{Flight, route_duration_minutes, scheduled_carriers};
use crate::domains::tools::ToolError;
use crate::domains::tools::context::ToolContext;
use crate::domains::tools::response::list_result;

/// Parameters for the city-pair search.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct FlightSearchByCityParams {
    /// Departure city.
    #[serde(default)]
    pub from_city: String,

    /// Arrival city.
    #[serde(default)]
    pub to_city: String,
}

const DEPARTURES: u32 = 5;

/// Lists flights between two cities over the next few days.
pub struct FlightSearchByCityTool;

impl FlightSearchByCityTool {
    pub fn search(from: &str, to: &str, today: NaiveDate) -> Result<Vec<Flight>, ToolError> {
        let what = "Departure and arrival cities";
        let from = require_city(from, what)?;
        let to = require_city(to, what)?;
        Ok(Self::departures(&from, &to, today))
    }

    /// One departure per day starting today.
    pub fn departures(from: &str, to: &str, today: NaiveDate) -> Vec<Flight> {
        let carriers = scheduled_carriers();
        let duration = format_duration(route_duration_minutes(from, to));

        (0..DEPARTURES)
            .map(|i| {
                let carrier = &carriers[i as usize % carriers.len()];
                let departure_hour = 9 + i * 3;
                let minute = (i * 20) % 60;
                Flight {
                    flight_number: format!("{}{:03}", carrier.code, 200 + i),
                    airline: carrier.short_name.to_string(),
                    from: from.to_string(),
                    to: to.to_string(),
                    date: today + Days::new(u64::from(i)),
                    departure_time: format_clock(departure_hour, minute),
                    arrival_time: format_clock(departure_hour + 2, minute),
                    price: 200 + i * 75,
                    currency: CURRENCY,
                    duration: Some(duration.clone()),
                    available: Some(true),
                    aircraft: None,
                }
            })
            .collect()
    }
}

impl ToolDefinition for FlightSearchByCityTool {
    const NAME: &'static str = "flight.searchByCity";
    const DESCRIPTION: &'static str =
        "Lists flights between a departure city and an arrival city for the coming days.";

    type Params = FlightSearchByCityParams;

    #[instrument(skip_all, fields(from = %params.from_city, to = %params.to_city))]
    fn execute(params: &FlightSearchByCityParams, ctx: &ToolContext) -> CallToolResult {
        info!("Searching flights by city pair");
        list_result(Self::search(&params.from_city, &params.to_city, ctx.today()))
    }
}
