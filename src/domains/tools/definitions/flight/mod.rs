//! Flight search tools.
//!
//! All flights are synthesized; nothing here talks to a real booking system.
//! - `search_by_date`: a fixed daily schedule for a given date
//! - `search_by_city`: departures between two cities over the coming days
//! - `search_by_airline`: a week of departures for one carrier
//! - `popular_routes` / `airlines`: static catalogues

pub mod airlines;
pub mod common;
pub mod popular_routes;
pub mod search_by_airline;
pub mod search_by_city;
pub mod search_by_date;

pub use airlines::FlightAirlinesTool;
pub use common::{AirlineInfo, Flight};
pub use popular_routes::{FlightPopularRoutesTool, PopularRoute};
pub use search_by_airline::{FlightSearchByAirlineParams, FlightSearchByAirlineTool};
pub use search_by_city::{FlightSearchByCityParams, FlightSearchByCityTool};
pub use search_by_date::{FlightSearchByDateParams, FlightSearchByDateTool};
