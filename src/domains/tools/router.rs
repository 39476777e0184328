//! Tool Router - builds the rmcp ToolRouter.
//!
//! Each tool knows how to create its own route; this module only lists them.
//! Every route shares the same [`ToolContext`].

use std::sync::Arc;

use rmcp::handler::server::tool::ToolRouter;

use super::context::ToolContext;
use super::definitions::{
    EmployeeListTool, FlightAirlinesTool, FlightPopularRoutesTool, FlightSearchByAirlineTool,
    FlightSearchByCityTool, FlightSearchByDateTool, GreetTool, HotelDetailsTool, HotelPopularTool,
    HotelSearchByCityTool, HotelSearchByDateTool, HotelSearchByPriceRangeTool,
    HotelSearchByRatingTool, SumTool, ToolDefinition, TravelBudgetTool, TravelCityInfoTool,
    TravelRouteTool, TravelSeasonalTool, TravelTransportationTool, TravelWeatherTool,
};

/// Build the tool router with all registered tools.
pub fn build_tool_router<S>(ctx: Arc<ToolContext>) -> ToolRouter<S>
where
    S: Send + Sync + 'static,
{
    ToolRouter::new()
        .with_route(SumTool::create_route(ctx.clone()))
        .with_route(GreetTool::create_route(ctx.clone()))
        .with_route(EmployeeListTool::create_route(ctx.clone()))
        .with_route(FlightSearchByDateTool::create_route(ctx.clone()))
        .with_route(FlightSearchByCityTool::create_route(ctx.clone()))
        .with_route(FlightSearchByAirlineTool::create_route(ctx.clone()))
        .with_route(FlightPopularRoutesTool::create_route(ctx.clone()))
        .with_route(FlightAirlinesTool::create_route(ctx.clone()))
        .with_route(HotelSearchByCityTool::create_route(ctx.clone()))
        .with_route(HotelSearchByRatingTool::create_route(ctx.clone()))
        .with_route(HotelSearchByPriceRangeTool::create_route(ctx.clone()))
        .with_route(HotelDetailsTool::create_route(ctx.clone()))
        .with_route(HotelSearchByDateTool::create_route(ctx.clone()))
        .with_route(HotelPopularTool::create_route(ctx.clone()))
        .with_route(TravelCityInfoTool::create_route(ctx.clone()))
        .with_route(TravelWeatherTool::create_route(ctx.clone()))
        .with_route(TravelRouteTool::create_route(ctx.clone()))
        .with_route(TravelSeasonalTool::create_route(ctx.clone()))
        .with_route(TravelTransportationTool::create_route(ctx.clone()))
        .with_route(TravelBudgetTool::create_route(ctx))
}

#[cfg(test)]
mod tests {
    use super::super::registry::ToolRegistry;
    use super::*;

    struct TestServer {}

    #[test]
    fn test_build_router() {
        let router: ToolRouter<TestServer> = build_tool_router(Arc::new(ToolContext::new()));
        let tools = router.list_all();
        assert_eq!(tools.len(), 20);

        let names: Vec<_> = tools.iter().map(|t| t.name.as_ref()).collect();
        assert!(names.contains(&"sum"));
        assert!(names.contains(&"greet"));
        assert!(names.contains(&"employee.list"));
        assert!(names.contains(&"flight.searchByDate"));
        assert!(names.contains(&"flight.getAirlines"));
        assert!(names.contains(&"hotel.searchByPriceRange"));
        assert!(names.contains(&"hotel.getPopularHotels"));
        assert!(names.contains(&"travel.getWeatherForecast"));
        assert!(names.contains(&"travel.getBudgetEstimate"));
    }

    #[test]
    fn test_every_tool_has_schema_and_description() {
        let router: ToolRouter<TestServer> = build_tool_router(Arc::new(ToolContext::new()));
        for tool in router.list_all() {
            assert!(tool.description.is_some(), "{} has no description", tool.name);
            assert_eq!(
                tool.input_schema.get("type").and_then(|t| t.as_str()),
                Some("object"),
                "{} schema is not an object",
                tool.name
            );
        }
    }

    #[test]
    fn test_registry_matches_router() {
        // Ensure registry and router have the same tools
        let ctx = Arc::new(ToolContext::new());
        let registry = ToolRegistry::new(ctx.clone());
        let registry_names = registry.tool_names();

        let router: ToolRouter<TestServer> = build_tool_router(ctx);
        let router_tools = router.list_all();
        let router_names: Vec<_> = router_tools.iter().map(|t| t.name.as_ref()).collect();

        assert_eq!(registry_names.len(), router_names.len());
        for name in registry_names {
            assert!(router_names.contains(&name));
        }
    }
}
