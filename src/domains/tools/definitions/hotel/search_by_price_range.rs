//! Hotel search by nightly price range.

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

/// Parameters for the price range search.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct HotelSearchByPriceRangeParams {
    /// City to search in.
    #[serde(default)]
    pub city_name: String,

    /// Lowest acceptable nightly price (TL, inclusive).
    #[serde(default)]
    pub min_price: i64,

    /// Highest acceptable nightly price (TL, inclusive).
    #[serde(default = "default_max_price")]
    pub max_price: i64,
}

fn default_max_price() -> i64 {
    i64::MAX
}

/// Lists hotels whose nightly price falls in `[min, max]`.
pub struct HotelSearchByPriceRangeTool;

impl HotelSearchByPriceRangeTool {
    pub fn search<R: Rng + ?Sized>(
        city: &str,
        min_price: i64,
        max_price: i64,
        rng: &mut R,
    ) -> Result<Vec<Hotel>, ToolError> {
        let city = require_city(city, "City name")?;
        let range = min_price..=max_price;
        Ok(city_hotels(&city, rng)
            .into_iter()
            .filter(|h| range.contains(&i64::from(h.price_per_night)))
            .collect())
    }
}

impl ToolDefinition for HotelSearchByPriceRangeTool {
    const NAME: &'static str = "hotel.searchByPriceRange";
    const DESCRIPTION: &'static str =
        "Lists hotels in a city whose nightly price lies within the given range (inclusive).";

    type Params = HotelSearchByPriceRangeParams;

    #[instrument(skip_all, fields(city = %params.city_name, min = params.min_price, max = params.max_price))]
    fn execute(params: &HotelSearchByPriceRangeParams, ctx: &ToolContext) -> CallToolResult {
        info!("Searching hotels by price range");
        list_result(Self::search(
            &params.city_name,
            params.min_price,
            params.max_price,
            &mut ctx.rng(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::tools::response::payload;
    use proptest::prelude::*;

    #[test]
    fn test_price_range_inclusive_bounds() {
        let hotels =
            HotelSearchByPriceRangeTool::search("İstanbul", 150, 300, &mut ToolContext::seeded(1).rng())
                .unwrap();
        let mut prices: Vec<u32> = hotels.iter().map(|h| h.price_per_night).collect();
        prices.sort();
        assert_eq!(prices, vec![150, 250, 300]);
    }

    #[test]
    fn test_inverted_range_is_empty() {
        let hotels =
            HotelSearchByPriceRangeTool::search("Adana", 500, 100, &mut ToolContext::seeded(1).rng())
                .unwrap();
        assert!(hotels.is_empty());
    }

    #[test]
    fn test_max_price_defaults_to_unbounded() {
        let params: HotelSearchByPriceRangeParams =
            serde_json::from_str(r#"{"cityName": "Ankara", "minPrice": 400}"#).unwrap();
        let result = payload(&HotelSearchByPriceRangeTool::execute(&params, &ToolContext::seeded(1)));
        let prices: Vec<u64> = result
            .as_array()
            .unwrap()
            .iter()
            .map(|h| h["pricePerNight"].as_u64().unwrap())
            .collect();
        assert_eq!(prices, vec![450, 600, 750, 450]);
    }

    proptest! {
        #[test]
        fn prop_prices_within_range(
            city in "[a-zA-Z]{1,12}",
            min in 0i64..1000,
            max in 0i64..1000,
            seed in any::<u64>(),
        ) {
            let hotels = HotelSearchByPriceRangeTool::search(
                &city,
                min,
                max,
                &mut ToolContext::seeded(seed).rng(),
            )
            .unwrap();
            for hotel in hotels {
                let price = i64::from(hotel.price_per_night);
                prop_assert!(min <= price && price <= max);
            }
        }
    }
}
