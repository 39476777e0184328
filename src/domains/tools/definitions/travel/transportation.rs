//! Local transport options in a city.

use rmcp::model::CallToolResult;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

use super::super::ToolDefinition;
use super::super::common::require_city;
use crate::domains::tools::ToolError;
use crate::domains::tools::context::ToolContext;
use crate::domains::tools::response::record_result;

#[derive(Debug, Clone, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct TravelTransportationParams {
    /// City to describe.
    #[serde(default)]
    pub city_name: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct PublicTransport {
    pub metro: bool,
    pub bus: bool,
    pub tram: bool,
    pub price: &'static str,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Taxi {
    pub starting_fee: &'static str,
    pub per_km: &'static str,
    pub availability: &'static str,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CarRental {
    pub daily_price: &'static str,
    pub companies: &'static str,
    pub requirement: &'static str,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Rideshare {
    pub uber: &'static str,
    pub bitaksi: &'static str,
    pub price_range: &'static str,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BikeRental {
    pub availability: &'static str,
    pub hourly_price: &'static str,
    pub daily_price: &'static str,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Transportation {
    pub city: String,
    pub public_transport: PublicTransport,
    pub taxi: Taxi,
    pub car_rental: CarRental,
    pub rideshare: Rideshare,
    pub bike_rental: BikeRental,
}

const METRO_CITIES: &[&str] = &["İstanbul", "Ankara"];
const TRAM_CITIES: &[&str] = &["İstanbul"];
const UBER_CITIES: &[&str] = &["İstanbul"];
const BIKE_SHARE_CITIES: &[&str] = &["İstanbul", "Ankara"];

fn availability(cities: &[&str], city: &str, yes: &'static str, no: &'static str) -> &'static str {
    if cities.contains(&city) { yes } else { no }
}

pub struct TravelTransportationTool;

impl TravelTransportationTool {
    pub fn options(city: &str) -> Result<Transportation, ToolError> {
        let city = require_city(city, "City name")?;
        let name = city.as_str();

        Ok(Transportation {
            public_transport: PublicTransport {
                metro: METRO_CITIES.contains(&name),
                bus: true,
                tram: TRAM_CITIES.contains(&name),
                price: "5-15 TL",
            },
            taxi: Taxi {
                starting_fee: "8 TL",
                per_km: "3-5 TL",
                availability: "24/7",
            },
            car_rental: CarRental {
                daily_price: "100-300 TL/day",
                companies: "Avis, Hertz, Budget",
                requirement: "Driving licence and credit card",
            },
            rideshare: Rideshare {
                uber: availability(UBER_CITIES, name, "Available", "Not available"),
                bitaksi: "Available",
                price_range: "Similar to taxi fares",
            },
            bike_rental: BikeRental {
                availability: availability(BIKE_SHARE_CITIES, name, "Available", "Limited"),
                hourly_price: "5-15 TL/hour",
                daily_price: "30-50 TL/day",
            },
            city,
        })
    }
}

impl ToolDefinition for TravelTransportationTool {
    const NAME: &'static str = "travel.getTransportation";
    const DESCRIPTION: &'static str = "Returns local transport options in a city: public \
        transport, taxis, car rental, ride-sharing and bike rental.";

    type Params = TravelTransportationParams;

    #[instrument(skip_all, fields(city = %params.city_name))]
    fn execute(params: &TravelTransportationParams, _ctx: &ToolContext) -> CallToolResult {
        info!("Fetching transportation options");
        record_result(Self::options(&params.city_name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::tools::response::payload;

    #[test]
    fn test_istanbul_has_everything() {
        let options = TravelTransportationTool::options("istanbul").unwrap();
        assert!(options.public_transport.metro);
        assert!(options.public_transport.tram);
        assert_eq!(options.rideshare.uber, "Available");
        assert_eq!(options.bike_rental.availability, "Available");
    }

    #[test]
    fn test_ankara_has_metro_but_no_tram() {
        let options = TravelTransportationTool::options("Ankara").unwrap();
        assert!(options.public_transport.metro);
        assert!(!options.public_transport.tram);
        assert_eq!(options.rideshare.uber, "Not available");
        assert_eq!(options.bike_rental.availability, "Available");
    }

    #[test]
    fn test_other_cities() {
        let options = TravelTransportationTool::options("trabzon").unwrap();
        assert_eq!(options.city, "Trabzon");
        assert!(!options.public_transport.metro);
        assert!(options.public_transport.bus);
        assert_eq!(options.bike_rental.availability, "Limited");
    }

    #[test]
    fn test_payload_shape() {
        let params = TravelTransportationParams {
            city_name: "İzmir".to_string(),
        };
        let result = payload(&TravelTransportationTool::execute(&params, &ToolContext::new()));
        assert_eq!(result["taxi"]["startingFee"], "8 TL");
        assert_eq!(result["publicTransport"]["bus"], true);

        let params = TravelTransportationParams {
            city_name: String::new(),
        };
        let result = payload(&TravelTransportationTool::execute(&params, &ToolContext::new()));
        assert_eq!(result["error"], "City name must be provided");
    }
}
