//! General travel facts about a city.

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
pub struct TravelCityInfoParams {
    /// City to describe.
    #[serde(default)]
    pub city_name: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CityInfo {
    pub name: String,
    pub country: &'static str,
    pub population: &'static str,
    pub airports: &'static [&'static str],
    pub attractions: &'static [&'static str],
    pub best_time_to_visit: &'static str,
    pub average_temperature: &'static str,
    pub currency: &'static str,
    pub time_zone: &'static str,
    pub language: &'static str,
}

fn population(city: &str) -> &'static str {
    match city {
        "İstanbul" => "15.5 million",
        "Ankara" => "5.7 million",
        "İzmir" => "4.4 million",
        "Antalya" => "2.6 million",
        "Bursa" => "3.1 million",
        "Adana" => "2.2 million",
        _ => "Unknown",
    }
}

fn airports(city: &str) -> &'static [&'static str] {
    match city {
        "İstanbul" => &["İstanbul Airport (IST)", "Sabiha Gökçen Airport (SAW)"],
        "Ankara" => &["Esenboğa Airport (ESB)"],
        "İzmir" => &["Adnan Menderes Airport (ADB)"],
        "Antalya" => &["Antalya Airport (AYT)"],
        "Trabzon" => &["Trabzon Airport (TZX)"],
        _ => &["Local airport"],
    }
}

fn attractions(city: &str) -> &'static [&'static str] {
    match city {
        "İstanbul" => &[
            "Hagia Sophia",
            "Sultanahmet Mosque",
            "Grand Bazaar",
            "Galata Tower",
            "Bosphorus Cruise",
        ],
        "Ankara" => &[
            "Anıtkabir",
            "Ankara Castle",
            "Ethnography Museum",
            "Atatürk Forest Farm",
        ],
        "İzmir" => &[
            "Konak Square",
            "Kemeraltı Bazaar",
            "Alsancak",
            "İzmir Clock Tower",
        ],
        "Antalya" => &[
            "Kaleiçi",
            "Düden Waterfalls",
            "Aspendos",
            "Perge",
            "Konyaaltı Beach",
        ],
        _ => &["Local sights"],
    }
}

fn best_time_to_visit(city: &str) -> &'static str {
    match city {
        "İstanbul" => "April-June, September-November",
        "Ankara" | "Trabzon" => "May-October",
        "İzmir" | "Antalya" => "April-November",
        _ => "Spring-Autumn",
    }
}

fn average_temperature(city: &str) -> &'static str {
    match city {
        "İstanbul" => "Annual average: 14°C",
        "Ankara" => "Annual average: 12°C",
        "İzmir" => "Annual average: 17°C",
        "Antalya" => "Annual average: 18°C",
        _ => "Average: 15°C",
    }
}

pub struct TravelCityInfoTool;

impl TravelCityInfoTool {
    pub fn info(city: &str) -> Result<CityInfo, ToolError> {
        let name = require_city(city, "City name")?;
        Ok(CityInfo {
            country: "Türkiye",
            population: population(&name),
            airports: airports(&name),
            attractions: attractions(&name),
            best_time_to_visit: best_time_to_visit(&name),
            average_temperature: average_temperature(&name),
            currency: "Turkish Lira (TL)",
            time_zone: "UTC+3",
            language: "Turkish",
            name,
        })
    }
}

impl ToolDefinition for TravelCityInfoTool {
    const NAME: &'static str = "travel.getCityInfo";
    const DESCRIPTION: &'static str = "Returns travel information about a city: population, \
        airports, attractions, best time to visit and climate.";

    type Params = TravelCityInfoParams;

    #[instrument(skip_all, fields(city = %params.city_name))]
    fn execute(params: &TravelCityInfoParams, _ctx: &ToolContext) -> CallToolResult {
        info!("Fetching city info");
        record_result(Self::info(&params.city_name))
    }
}
