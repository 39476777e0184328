//! Well-known hotels per city.

use std::collections::BTreeMap;

use rmcp::model::CallToolResult;
use tracing::info;

use super::super::{NoParams, ToolDefinition};
use crate::domains::tools::context::ToolContext;
use crate::domains::tools::response::value_result;

const POPULAR_HOTELS: &[(&str, [&str; 6])] = &[
    (
        "İstanbul",
        [
            "Çırağan Palace Kempinski",
            "Four Seasons Sultanahmet",
            "Swissotel The Bosphorus",
            "Conrad Istanbul",
            "The Ritz Carlton Istanbul",
            "Park Hyatt Istanbul",
        ],
    ),
    (
        "Ankara",
        [
            "JW Marriott Ankara",
            "Sheraton Ankara",
            "Hilton Ankara",
            "Divan Çukurhan",
            "Gordon Hotel Ankara",
            "Best Western Khan Hotel",
        ],
    ),
    (
        "İzmir",
        [
            "Swissotel Büyük Efes",
            "Hilton İzmir",
            "Movenpick Hotel İzmir",
            "Wyndham Grand İzmir",
            "Key Hotel",
            "Park Inn by Radisson İzmir",
        ],
    ),
    (
        "Antalya",
        [
            "Titanic Beach Lara",
            "Delphin Imperial",
            "Concorde De Luxe Resort",
            "Club Hotel Sera",
            "Akra Hotel",
            "Su Hotel",
        ],
    ),
];

pub struct HotelPopularTool;

impl HotelPopularTool {
    pub fn popular() -> BTreeMap<&'static str, &'static [&'static str]> {
        POPULAR_HOTELS
            .iter()
            .map(|(city, hotels)| (*city, hotels.as_slice()))
            .collect()
    }
}

impl ToolDefinition for HotelPopularTool {
    const NAME: &'static str = "hotel.getPopularHotels";
    const DESCRIPTION: &'static str = "Lists popular hotels grouped by city.";

    type Params = NoParams;

    fn execute(_params: &NoParams, _ctx: &ToolContext) -> CallToolResult {
        info!("Listing popular hotels");
        value_result(&Self::popular())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::tools::response::payload;

    #[test]
    fn test_popular_hotels_by_city() {
        let result = payload(&HotelPopularTool::execute(&NoParams::default(), &ToolContext::new()));
        let cities = result.as_object().unwrap();
        assert_eq!(cities.len(), 4);
        for city in ["İstanbul", "Ankara", "İzmir", "Antalya"] {
            assert_eq!(cities[city].as_array().unwrap().len(), 6);
        }
        assert_eq!(cities["Antalya"][5], "Su Hotel");
    }
}
