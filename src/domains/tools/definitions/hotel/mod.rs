//! Hotel search tools.
//!
//! Every search starts from the same per-city inventory (four chain hotels and
//! four local hotels) produced by [`common::city_hotels`], then filters it.

pub mod common;
pub mod details;
pub mod popular;
pub mod search_by_city;
pub mod search_by_date;
pub mod search_by_price_range;
pub mod search_by_rating;

pub use common::Hotel;
pub use details::{HotelDetails, HotelDetailsParams, HotelDetailsTool};
pub use popular::HotelPopularTool;
pub use search_by_city::{HotelSearchByCityParams, HotelSearchByCityTool};
pub use search_by_date::{HotelSearchByDateParams, HotelSearchByDateTool};
pub use search_by_price_range::{HotelSearchByPriceRangeParams, HotelSearchByPriceRangeTool};
pub use search_by_rating::{HotelSearchByRatingParams, HotelSearchByRatingTool};
