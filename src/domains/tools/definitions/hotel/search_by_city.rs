//! Hotel search by city.

use rand::Rng;
use rmcp::model::CallToolResult;
use schemars::JsonSchema;
use serde::Deserialize;
use tracing::{info, instrument};

use super::super::ToolDefinition;
use super::super::common::require_city;
use super::common::{Hotel, city_hotels};
use crate::domains::tools::ToolError;
use crate::domains::tools::context::ToolContext;
use crate::domains::tools::response::list_result;

/// Parameters for the city search.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct HotelSearchByCityParams {
    /// City to search in.
    #[serde(default)]
    pub city_name: String,
}

/// Lists the hotels of a city.
pub struct HotelSearchByCityTool;

impl HotelSearchByCityTool {
    pub fn search<R: Rng + ?Sized>(city: &str, rng: &mut R) -> Result<Vec<Hotel>, ToolError> {
        let city = require_city(city, "City name")?;
        Ok(city_hotels(&city, rng))
    }
}

impl ToolDefinition for HotelSearchByCityTool {
    const NAME: &'static str = "hotel.searchByCity";
    const DESCRIPTION: &'static str =
        "Lists hotels in the given city with rating, nightly price, stars and amenities.";

    type Params = HotelSearchByCityParams;

    #[instrument(skip_all, fields(city = %params.city_name))]
    fn execute(params: &HotelSearchByCityParams, ctx: &ToolContext) -> CallToolResult {
        info!("Searching hotels by city");
        list_result(Self::search(&params.city_name, &mut ctx.rng()))
    }
}
