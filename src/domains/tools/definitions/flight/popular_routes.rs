//! Popular routes tool.
//!
//! Route list is fixed; daily frequencies and operating carriers are drawn at
//! random on each call.

use rand::Rng;
use rand::seq::SliceRandom;
use rmcp::model::CallToolResult;
use serde::Serialize;

use super::super::common::format_duration;
use super::super::{NoParams, ToolDefinition};
use crate::domains::tools::context::ToolContext;
use crate::domains::tools::response::value_result;

/// A frequently flown city pair.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PopularRoute {
    pub from: &'static str,
    pub to: &'static str,
    pub duration: String,
    pub daily_flights: u32,
    pub airlines: Vec<&'static str>,
}

const POPULAR_ROUTES: &[(&str, &str, u32)] = &[
    ("İstanbul", "Ankara", 90),
    ("İstanbul", "İzmir", 80),
    ("İstanbul", "Antalya", 90),
    ("Ankara", "İzmir", 70),
    ("İstanbul", "Trabzon", 105),
    ("İstanbul", "Adana", 95),
    ("İstanbul", "Gaziantep", 100),
    ("Ankara", "Antalya", 85),
];

const ROUTE_CARRIERS: &[&str] = &["Turkish Airlines", "Pegasus", "AnadoluJet"];
const CARRIERS_PER_ROUTE: usize = 2;

/// Lists the most popular domestic routes.
pub struct FlightPopularRoutesTool;

impl FlightPopularRoutesTool {
    pub fn routes<R: Rng + ?Sized>(rng: &mut R) -> Vec<PopularRoute> {
        POPULAR_ROUTES
            .iter()
            .map(|&(from, to, minutes)| {
                let mut carriers = ROUTE_CARRIERS.to_vec();
                carriers.shuffle(rng);
                carriers.truncate(CARRIERS_PER_ROUTE);

                PopularRoute {
                    from,
                    to,
                    duration: format_duration(minutes),
                    daily_flights: rng.gen_range(5..25),
                    airlines: carriers,
                }
            })
            .collect()
    }
}

impl ToolDefinition for FlightPopularRoutesTool {
    const NAME: &'static str = "flight.getPopularRoutes";
    const DESCRIPTION: &'static str =
        "Lists popular flight routes with duration, daily flight count and operating airlines.";

    type Params = NoParams;

    fn execute(_params: &NoParams, ctx: &ToolContext) -> CallToolResult {
        value_result(&Self::routes(&mut ctx.rng()))
    }
}
