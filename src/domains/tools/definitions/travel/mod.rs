//! Travel information tools.
//!
//! City facts, weather, routes, seasons, local transport and daily budgets,
//! assembled from static tables keyed by canonical city name. Unknown cities
//! fall back to generic answers rather than failing.

pub mod budget;
pub mod city_info;
pub mod route;
pub mod seasonal;
pub mod transportation;
pub mod weather;

pub use budget::{BudgetEstimate, BudgetTier, TravelBudgetParams, TravelBudgetTool};
pub use city_info::{CityInfo, TravelCityInfoParams, TravelCityInfoTool};
pub use route::{TravelRoute, TravelRouteParams, TravelRouteTool};
pub use seasonal::{Season, SeasonalInfo, TravelSeasonalParams, TravelSeasonalTool};
pub use transportation::{Transportation, TravelTransportationParams, TravelTransportationTool};
pub use weather::{TravelWeatherParams, TravelWeatherTool, WeatherForecast};
