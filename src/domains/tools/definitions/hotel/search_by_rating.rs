//! Hotel search by minimum guest rating.

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

/// Parameters for the rating search.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct HotelSearchByRatingParams {
    /// City to search in.
    #[serde(default)]
    pub city_name: String,

    /// Minimum guest rating (0-5).
    #[serde(default)]
    pub min_rating: f64,
}

/// Lists hotels rated at or above a threshold.
pub struct HotelSearchByRatingTool;

impl HotelSearchByRatingTool {
    pub fn search<R: Rng + ?Sized>(
        city: &str,
        min_rating: f64,
        rng: &mut R,
    ) -> Result<Vec<Hotel>, ToolError> {
        let city = require_city(city, "City name")?;
        Ok(city_hotels(&city, rng)
            .into_iter()
            .filter(|h| h.rating >= min_rating)
            .collect())
    }
}

impl ToolDefinition for HotelSearchByRatingTool {
    const NAME: &'static str = "hotel.searchByRating";
    const DESCRIPTION: &'static str =
        "Lists hotels in a city whose rating is at or above the given minimum.";

    type Params = HotelSearchByRatingParams;

    #[instrument(skip_all, fields(city = %params.city_name, min_rating = params.min_rating))]
    fn execute(params: &HotelSearchByRatingParams, ctx: &ToolContext) -> CallToolResult {
        info!("Searching hotels by rating");
        list_result(Self::search(&params.city_name, params.min_rating, &mut ctx.rng()))
    }
}
