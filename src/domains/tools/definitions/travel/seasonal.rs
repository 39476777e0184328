//! Seasonal travel advice for a city.

use std::fmt;
use std::str::FromStr;

use rand::Rng;
use rand::seq::SliceRandom;
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
pub struct TravelSeasonalParams {
    /// City to describe.
    #[serde(default)]
    pub city_name: String,

    /// Season, in English or Turkish (spring/ilkbahar, summer/yaz,
    /// autumn/sonbahar, winter/kış).
    #[serde(default)]
    pub season: String,
}

/// A season of the year.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Season {
    Spring,
    Summer,
    Autumn,
    Winter,
}

/// Accepted spellings, lower-cased.
const SEASON_NAMES: &[(&str, Season)] = &[
    ("spring", Season::Spring),
    ("ilkbahar", Season::Spring),
    ("summer", Season::Summer),
    ("yaz", Season::Summer),
    ("autumn", Season::Autumn),
    ("fall", Season::Autumn),
    ("sonbahar", Season::Autumn),
    ("winter", Season::Winter),
    ("kış", Season::Winter),
    ("kiş", Season::Winter),
    ("kis", Season::Winter),
];

const ALLOWED_SEASONS: &[&str] = &[
    "spring/ilkbahar",
    "summer/yaz",
    "autumn/sonbahar",
    "winter/kış",
];

impl Season {
    pub fn display_name(self) -> &'static str {
        match self {
            Season::Spring => "Spring",
            Season::Summer => "Summer",
            Season::Autumn => "Autumn",
            Season::Winter => "Winter",
        }
    }

    pub fn packing_tips(self) -> &'static [&'static str] {
        match self {
            Season::Spring => &["Layered clothing", "Light jacket", "Raincoat"],
            Season::Summer => &["Sunscreen", "Hat", "Light clothes"],
            Season::Autumn => &["Jacket", "Boots", "Umbrella"],
            Season::Winter => &["Heavy coat", "Gloves", "Snow boots"],
        }
    }
}

impl FromStr for Season {
    type Err = ToolError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let key = value.trim().to_lowercase();
        SEASON_NAMES
            .iter()
            .find(|(name, _)| *name == key)
            .map(|(_, season)| *season)
            .ok_or_else(|| ToolError::invalid_choice("season", value, ALLOWED_SEASONS))
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SeasonalInfo {
    pub city: String,
    pub season: &'static str,
    pub weather_info: String,
    pub crowd_level: &'static str,
    pub price_level: &'static str,
    pub activities: &'static [&'static str],
    pub packing_tips: &'static [&'static str],
}

const CROWD_LEVELS: &[&str] = &["Quiet", "Moderate", "Busy", "Very Busy"];
const PRICE_LEVELS: &[&str] = &["Low", "Moderate", "High", "Very High"];
const ACTIVITIES: &[&str] = &["Museum visits", "Walking", "Photography", "Local cuisine"];

pub struct TravelSeasonalTool;

impl TravelSeasonalTool {
    pub fn info<R: Rng + ?Sized>(
        city: &str,
        season: &str,
        rng: &mut R,
    ) -> Result<SeasonalInfo, ToolError> {
        let city = require_city(city, "City name")?;
        let season: Season = season.parse()?;

        Ok(SeasonalInfo {
            city,
            season: season.display_name(),
            weather_info: format!(
                "Average temperature this season: {}°C",
                rng.gen_range(15..30)
            ),
            crowd_level: CROWD_LEVELS.choose(rng).copied().unwrap_or_default(),
            price_level: PRICE_LEVELS.choose(rng).copied().unwrap_or_default(),
            activities: ACTIVITIES,
            packing_tips: season.packing_tips(),
        })
    }
}

impl ToolDefinition for TravelSeasonalTool {
    const NAME: &'static str = "travel.getSeasonalInfo";
    const DESCRIPTION: &'static str = "Returns seasonal travel information for a city: weather, \
        crowd and price levels, activities and packing tips. Season may be given in English or \
        Turkish.";

    type Params = TravelSeasonalParams;

    #[instrument(skip_all, fields(city = %params.city_name, season = %params.season))]
    fn execute(params: &TravelSeasonalParams, ctx: &ToolContext) -> CallToolResult {
        info!("Fetching seasonal info");
        record_result(Self::info(&params.city_name, &params.season, &mut ctx.rng()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::tools::response::payload;

    #[test]
    fn test_season_parse_accepts_both_languages() {
        assert_eq!("spring".parse::<Season>().unwrap(), Season::Spring);
        assert_eq!("Ilkbahar".parse::<Season>().unwrap(), Season::Spring);
        assert_eq!("YAZ".parse::<Season>().unwrap(), Season::Summer);
        assert_eq!("Sonbahar".parse::<Season>().unwrap(), Season::Autumn);
        assert_eq!("kış".parse::<Season>().unwrap(), Season::Winter);
        assert_eq!("KIŞ".parse::<Season>().unwrap(), Season::Winter);
        assert_eq!(" Winter ".parse::<Season>().unwrap(), Season::Winter);
    }

    #[test]
    fn test_season_parse_rejects_unknown() {
        let err = "monsoon".parse::<Season>().unwrap_err();
        assert!(matches!(err, ToolError::InvalidChoice { .. }));
        assert!(err.to_string().contains("monsoon"));
    }

    #[test]
    fn test_seasonal_info() {
        let info = TravelSeasonalTool::info("antalya", "yaz", &mut ToolContext::seeded(3).rng()).unwrap();
        assert_eq!(info.city, "Antalya");
        assert_eq!(info.season, "Summer");
        assert_eq!(info.packing_tips, &["Sunscreen", "Hat", "Light clothes"]);
        assert!(CROWD_LEVELS.contains(&info.crowd_level));
        assert!(PRICE_LEVELS.contains(&info.price_level));
        assert!(info.weather_info.ends_with("°C"));
    }

    #[test]
    fn test_invalid_season_payload() {
        let params = TravelSeasonalParams {
            city_name: "Bursa".to_string(),
            season: "rainy".to_string(),
        };
        let result = TravelSeasonalTool::execute(&params, &ToolContext::new());
        assert_eq!(result.is_error, Some(true));
        assert!(payload(&result)["error"].as_str().unwrap().contains("winter/kış"));
    }
}
