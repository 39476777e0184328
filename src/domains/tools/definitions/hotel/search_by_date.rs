//! Hotel availability search for a stay.

use chrono::NaiveDate;
use rand::Rng;
use rmcp::model::CallToolResult;
use schemars::JsonSchema;
use serde::Deserialize;
use tracing::{debug, info, instrument};

use super::super::ToolDefinition;
use super::super::common::{parse_date, require_city};
use super::common::{Hotel, city_hotels};
use crate::domains::tools::ToolError;
use crate::domains::tools::context::ToolContext;
use crate::domains::tools::response::list_result;

/// Parameters for the availability search.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct HotelSearchByDateParams {
    /// City to search in.
    #[serde(default)]
    pub city_name: String,

    /// Check-in date (YYYY-MM-DD).
    #[serde(default)]
    pub check_in_date: String,

    /// Check-out date (YYYY-MM-DD).
    #[serde(default)]
    pub check_out_date: String,
}

/// Chance that a given hotel has rooms for the requested stay.
const AVAILABILITY_RATE: f64 = 0.7;

/// Lists hotels with rooms between two dates.
pub struct HotelSearchByDateTool;

impl HotelSearchByDateTool {
    pub fn search<R: Rng + ?Sized>(
        city: &str,
        check_in: &str,
        check_out: &str,
        rng: &mut R,
    ) -> Result<Vec<Hotel>, ToolError> {
        let city = require_city(city, "City name")?;
        let check_in = parse_date("check-in date", check_in)?;
        let check_out = parse_date("check-out date", check_out)?;
        Self::available(&city, check_in, check_out, rng)
    }

    /// Hotels of `city` with rooms for the stay, tagged with its dates.
    pub fn available<R: Rng + ?Sized>(
        city: &str,
        check_in: NaiveDate,
        check_out: NaiveDate,
        rng: &mut R,
    ) -> Result<Vec<Hotel>, ToolError> {
        if check_out < check_in {
            return Err(ToolError::InvalidDateRange {
                check_in: check_in.to_string(),
                check_out: check_out.to_string(),
            });
        }

        let hotels: Vec<Hotel> = city_hotels(city, rng)
            .into_iter()
            .filter(|_| rng.gen_bool(AVAILABILITY_RATE))
            .map(|hotel| Hotel {
                check_in_date: Some(check_in),
                check_out_date: Some(check_out),
                available: Some(true),
                ..hotel
            })
            .collect();

        debug!(available = hotels.len(), "Availability resolved");
        Ok(hotels)
    }
}

impl ToolDefinition for HotelSearchByDateTool {
    const NAME: &'static str = "hotel.searchByDate";
    const DESCRIPTION: &'static str = "Lists hotels in a city with rooms available between the \
        check-in and check-out dates (YYYY-MM-DD).";

    type Params = HotelSearchByDateParams;

    #[instrument(skip_all, fields(city = %params.city_name, check_in = %params.check_in_date, check_out = %params.check_out_date))]
    fn execute(params: &HotelSearchByDateParams, ctx: &ToolContext) -> CallToolResult {
        info!("Searching hotels by date");
        list_result(Self::search(
            &params.city_name,
            &params.check_in_date,
            &params.check_out_date,
            &mut ctx.rng(),
        ))
    }
}
