//! Detailed record for a single hotel.

use rand::Rng;
use rand::seq::SliceRandom;
use rmcp::model::CallToolResult;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

use super::super::ToolDefinition;
use super::super::common::{CURRENCY, normalize_city, require, round1};
use super::common::random_amenities;
use crate::domains::tools::ToolError;
use crate::domains::tools::context::ToolContext;
use crate::domains::tools::response::record_result;

/// Parameters for the details lookup.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct HotelDetailsParams {
    /// Name of the hotel.
    #[serde(default)]
    pub hotel_name: String,

    /// City the hotel is in. Optional.
    #[serde(default)]
    pub city_name: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomType {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub price_per_night: u32,
    pub capacity: u8,
    pub currency: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct Contact {
    pub phone: String,
    pub email: &'static str,
    pub website: &'static str,
}

/// Full description of one hotel.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HotelDetails {
    pub name: String,
    pub city: Option<String>,
    pub address: String,
    pub rating: f64,
    pub price_per_night: u32,
    pub currency: &'static str,
    pub amenities: Vec<&'static str>,
    pub description: String,
    pub rooms: Vec<RoomType>,
    pub contact: Contact,
    pub checkin_time: &'static str,
    pub checkout_time: &'static str,
}

const DISTRICTS: &[&str] = &["Merkez", "Çankaya", "Beşiktaş", "Kadıköy", "Şişli", "Beyoğlu"];
const STREETS: &[&str] = &[
    "Atatürk Bulvarı",
    "İnönü Caddesi",
    "Cumhuriyet Meydanı",
    "Bağdat Caddesi",
];

const DESCRIPTIONS: &[&str] = &[
    "is a luxury hotel offering comfortable accommodation.",
    "stands out for its modern design and quality service.",
    "is a premium property in the heart of the city.",
    "is a boutique hotel offering an unforgettable stay.",
];

/// (type, nightly price, capacity)
const ROOM_TIERS: &[(&str, u32, u8)] = &[
    ("Standard Room", 250, 2),
    ("Deluxe Room", 350, 2),
    ("Executive Suite", 500, 4),
    ("Presidential Suite", 800, 6),
];

const CONTACT_EMAIL: &str = "info@hotel-example.com";
const CONTACT_WEBSITE: &str = "www.hotel-example.com";
const CHECKIN_TIME: &str = "14:00";
const CHECKOUT_TIME: &str = "12:00";

/// Looks up (generates) the details of a named hotel.
pub struct HotelDetailsTool;

impl HotelDetailsTool {
    pub fn details<R: Rng + ?Sized>(
        hotel_name: &str,
        city: Option<&str>,
        rng: &mut R,
    ) -> Result<HotelDetails, ToolError> {
        let name = require(hotel_name, "Hotel name")?.to_string();
        let city = city
            .map(str::trim)
            .filter(|c| !c.is_empty())
            .map(normalize_city);

        let street = STREETS.choose(rng).copied().unwrap_or_default();
        let district = DISTRICTS.choose(rng).copied().unwrap_or_default();
        let address = match &city {
            Some(city) => format!("{}, {}, {}", street, district, city),
            None => format!("{}, {}", street, district),
        };

        let rating = round1(4.0 + rng.gen_range(0.0..1.0_f64));
        let price_per_night = 200 + rng.gen_range(0..800);
        let amenities = random_amenities(rng);
        let sentence = DESCRIPTIONS.choose(rng).copied().unwrap_or_default();
        let description = format!("{} {}", name, sentence);

        let rooms = ROOM_TIERS
            .iter()
            .map(|&(kind, price_per_night, capacity)| RoomType {
                kind,
                price_per_night,
                capacity,
                currency: CURRENCY,
            })
            .collect();

        Ok(HotelDetails {
            name,
            city,
            address,
            rating,
            price_per_night,
            currency: CURRENCY,
            amenities,
            description,
            rooms,
            contact: random_contact(rng),
            checkin_time: CHECKIN_TIME,
            checkout_time: CHECKOUT_TIME,
        })
    }
}

fn random_contact<R: Rng + ?Sized>(rng: &mut R) -> Contact {
    let phone = format!(
        "+90 {} {} {} {}",
        rng.gen_range(200..500),
        rng.gen_range(100..900),
        rng.gen_range(10..90),
        rng.gen_range(10..90)
    );
    Contact {
        phone,
        email: CONTACT_EMAIL,
        website: CONTACT_WEBSITE,
    }
}

impl ToolDefinition for HotelDetailsTool {
    const NAME: &'static str = "hotel.getHotelDetails";
    const DESCRIPTION: &'static str = "Returns detailed information about a hotel: address, \
        rating, amenities, room types, contact details and check-in/check-out times.";

    type Params = HotelDetailsParams;

    #[instrument(skip_all, fields(hotel = %params.hotel_name))]
    fn execute(params: &HotelDetailsParams, ctx: &ToolContext) -> CallToolResult {
        info!("Fetching hotel details");
        record_result(Self::details(
            &params.hotel_name,
            params.city_name.as_deref(),
            &mut ctx.rng(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::tools::response::payload;

    #[test]
    fn test_details_fixed_fields() {
        let details =
            HotelDetailsTool::details("Hilton Ankara", Some("ankara"), &mut ToolContext::seeded(3).rng())
                .unwrap();
        assert_eq!(details.city.as_deref(), Some("Ankara"));
        assert!(details.address.ends_with(", Ankara"));
        assert!(details.description.starts_with("Hilton Ankara "));
        assert!((4.0..=5.0).contains(&details.rating));
        assert!((200..1000).contains(&details.price_per_night));
        assert_eq!(details.checkin_time, "14:00");
        assert_eq!(details.checkout_time, "12:00");
        assert!(details.contact.phone.starts_with("+90 "));
    }

    #[test]
    fn test_details_room_tiers() {
        let details =
            HotelDetailsTool::details("Su Hotel", None, &mut ToolContext::seeded(3).rng()).unwrap();
        let tiers: Vec<(&str, u32, u8)> = details
            .rooms
            .iter()
            .map(|r| (r.kind, r.price_per_night, r.capacity))
            .collect();
        assert_eq!(tiers, ROOM_TIERS.to_vec());
        assert!(details.city.is_none());
    }

    #[test]
    fn test_blank_hotel_name_is_error() {
        let params = HotelDetailsParams {
            hotel_name: "   ".to_string(),
            city_name: Some("İzmir".to_string()),
        };
        let result = HotelDetailsTool::execute(&params, &ToolContext::new());
        assert_eq!(result.is_error, Some(true));
        assert_eq!(
            payload(&result),
            serde_json::json!({ "error": "Hotel name must be provided" })
        );
    }

    #[test]
    fn test_payload_uses_wire_names() {
        let params: HotelDetailsParams =
            serde_json::from_str(r#"{"hotelName": "Key Hotel", "cityName": "izmir"}"#).unwrap();
        let result = payload(&HotelDetailsTool::execute(&params, &ToolContext::seeded(11)));
        assert_eq!(result["city"], "İzmir");
        assert_eq!(result["checkinTime"], "14:00");
        assert_eq!(result["rooms"][3]["type"], "Presidential Suite");
        assert_eq!(result["contact"]["email"], "info@hotel-example.com");
    }
}
