//! Daily budget estimate for a city and spending tier.

use std::str::FromStr;

use rmcp::model::CallToolResult;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

use super::super::ToolDefinition;
use super::super::common::{CURRENCY, require_city};
use crate::domains::tools::ToolError;
use crate::domains::tools::context::ToolContext;
use crate::domains::tools::response::record_result;

#[derive(Debug, Clone, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct TravelBudgetParams {
    /// City to estimate for.
    #[serde(default)]
    pub city_name: String,

    /// Spending tier: budget, mid-range or luxury.
    #[serde(default)]
    pub budget_type: String,
}

/// Spending tier of a trip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BudgetTier {
    Budget,
    MidRange,
    Luxury,
}

const TIER_NAMES: &[&str] = &["budget", "mid-range", "luxury"];

impl BudgetTier {
    pub fn as_str(self) -> &'static str {
        match self {
            BudgetTier::Budget => "budget",
            BudgetTier::MidRange => "mid-range",
            BudgetTier::Luxury => "luxury",
        }
    }

    /// Factor applied to the base daily costs.
    pub fn multiplier(self) -> u32 {
        match self {
            BudgetTier::Budget => 1,
            BudgetTier::MidRange => 2,
            BudgetTier::Luxury => 4,
        }
    }

    pub fn tips(self) -> &'static [&'static str] {
        match self {
            BudgetTier::Budget => &["Stay in hostels", "Street food", "Public transport"],
            BudgetTier::MidRange => &["3-4 star hotel", "Local restaurants", "Mixed transport"],
            BudgetTier::Luxury => &["5 star hotel", "Fine dining", "Private transfers"],
        }
    }
}

impl FromStr for BudgetTier {
    type Err = ToolError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_lowercase().as_str() {
            "budget" => Ok(BudgetTier::Budget),
            "mid-range" => Ok(BudgetTier::MidRange),
            "luxury" => Ok(BudgetTier::Luxury),
            _ => Err(ToolError::invalid_choice("budget type", value, TIER_NAMES)),
        }
    }
}

/// Per-day amounts, already formatted with the currency.
#[derive(Debug, Clone, Serialize)]
pub struct DailyBudget {
    pub accommodation: String,
    pub food: String,
    pub transportation: String,
    pub activities: String,
    pub total: String,
}

// Base daily costs for the budget tier.
const ACCOMMODATION: u32 = 100;
const FOOD: u32 = 50;
const TRANSPORTATION: u32 = 20;
const ACTIVITIES: u32 = 30;

impl DailyBudget {
    fn for_tier(tier: BudgetTier) -> Self {
        let amount = |base: u32| format!("{} {}", base * tier.multiplier(), CURRENCY);
        Self {
            accommodation: amount(ACCOMMODATION),
            food: amount(FOOD),
            transportation: amount(TRANSPORTATION),
            activities: amount(ACTIVITIES),
            total: amount(ACCOMMODATION + FOOD + TRANSPORTATION + ACTIVITIES),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetEstimate {
    pub city: String,
    #[serde(rename = "type")]
    pub tier: &'static str,
    pub daily_budget: DailyBudget,
    pub currency: &'static str,
    pub tips: &'static [&'static str],
}

pub struct TravelBudgetTool;

impl TravelBudgetTool {
    pub fn estimate(city: &str, budget_type: &str) -> Result<BudgetEstimate, ToolError> {
        let city = require_city(city, "City name")?;
        let tier: BudgetTier = budget_type.parse()?;

        Ok(BudgetEstimate {
            city,
            tier: tier.as_str(),
            daily_budget: DailyBudget::for_tier(tier),
            currency: CURRENCY,
            tips: tier.tips(),
        })
    }
}

impl ToolDefinition for TravelBudgetTool {
    const NAME: &'static str = "travel.getBudgetEstimate";
    const DESCRIPTION: &'static str = "Estimates the daily travel budget in a city for a \
        spending tier (budget, mid-range or luxury).";

    type Params = TravelBudgetParams;

    #[instrument(skip_all, fields(city = %params.city_name, tier = %params.budget_type))]
    fn execute(params: &TravelBudgetParams, _ctx: &ToolContext) -> CallToolResult {
        info!("Estimating travel budget");
        record_result(Self::estimate(&params.city_name, &params.budget_type))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::tools::response::payload;
    use serde_json::json;

    #[test]
    fn test_tier_parse_is_case_insensitive() {
        assert_eq!("Budget".parse::<BudgetTier>().unwrap(), BudgetTier::Budget);
        assert_eq!("MID-RANGE".parse::<BudgetTier>().unwrap(), BudgetTier::MidRange);
        assert_eq!(" luxury ".parse::<BudgetTier>().unwrap(), BudgetTier::Luxury);
        assert!("cheap".parse::<BudgetTier>().is_err());
    }

    #[test]
    fn test_multipliers() {
        let budget = TravelBudgetTool::estimate("Ankara", "budget").unwrap();
        assert_eq!(budget.daily_budget.total, "200 TL");
        assert_eq!(budget.daily_budget.accommodation, "100 TL");

        let mid = TravelBudgetTool::estimate("Ankara", "mid-range").unwrap();
        assert_eq!(mid.daily_budget.food, "100 TL");
        assert_eq!(mid.daily_budget.total, "400 TL");

        let luxury = TravelBudgetTool::estimate("Ankara", "LUXURY").unwrap();
        assert_eq!(luxury.tier, "luxury");
        assert_eq!(luxury.daily_budget.transportation, "80 TL");
        assert_eq!(luxury.daily_budget.activities, "120 TL");
        assert_eq!(luxury.daily_budget.total, "800 TL");
    }

    #[test]
    fn test_invalid_tier_payload() {
        let params = TravelBudgetParams {
            city_name: "İzmir".to_string(),
            budget_type: "cheap".to_string(),
        };
        let result = TravelBudgetTool::execute(&params, &ToolContext::new());
        assert_eq!(result.is_error, Some(true));
        assert_eq!(
            payload(&result),
            json!({ "error": "Invalid budget type 'cheap'. Allowed values: budget, mid-range, luxury" })
        );
    }

    #[test]
    fn test_payload_shape() {
        let params = TravelBudgetParams {
            city_name: "gaziantep".to_string(),
            budget_type: "Mid-Range".to_string(),
        };
        let result = payload(&TravelBudgetTool::execute(&params, &ToolContext::new()));
        assert_eq!(result["city"], "Gaziantep");
        assert_eq!(result["type"], "mid-range");
        assert_eq!(result["currency"], "TL");
        assert_eq!(result["dailyBudget"]["total"], "400 TL");
        assert_eq!(result["tips"][0], "3-4 star hotel");
    }
}
