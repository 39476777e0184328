//! Hotel inventory generator shared by the hotel tools.

use chrono::NaiveDate;
use rand::Rng;
use rand::seq::SliceRandom;
use serde::Serialize;

use super::super::common::{CURRENCY, round1};

/// A generated hotel listing.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Hotel {
    pub name: String,
    pub city: String,
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub rating: f64,
    pub price_per_night: u32,
    pub currency: &'static str,
    pub star_rating: u8,
    pub amenities: Vec<&'static str>,
    pub distance: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub check_in_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub check_out_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub available: Option<bool>,
}

pub const AMENITIES: &[&str] = &[
    "WiFi",
    "Spa",
    "Fitness Center",
    "Pool",
    "Restaurant",
    "Bar",
    "Room Service",
    "Concierge",
    "Valet Parking",
    "Business Center",
    "Conference Rooms",
    "Airport Shuttle",
    "Pet Friendly",
    "AC",
];

const HOTEL_CHAINS: &[&str] = &["Hilton", "Marriott", "Hyatt", "Sheraton"];
const LOCAL_PREFIXES: &[&str] = &["Grand", "Palace", "Boutique", "Central"];

/// Amenities kept for local hotels.
const LOCAL_AMENITY_COUNT: usize = 4;

/// Between six and nine distinct amenities.
pub fn random_amenities<R: Rng + ?Sized>(rng: &mut R) -> Vec<&'static str> {
    let count = rng.gen_range(6..=9);
    AMENITIES.choose_multiple(rng, count).copied().collect()
}

/// The inventory of a (normalized) city: four chain hotels, then four local.
pub fn city_hotels<R: Rng + ?Sized>(city: &str, rng: &mut R) -> Vec<Hotel> {
    let mut hotels = Vec::with_capacity(HOTEL_CHAINS.len() + LOCAL_PREFIXES.len());

    for (i, chain) in HOTEL_CHAINS.iter().enumerate() {
        let step = i as u32;
        hotels.push(Hotel {
            name: format!("{} {}", chain, city),
            city: city.to_string(),
            kind: "Chain Hotel",
            rating: round1(4.0 + rng.gen_range(0.0..1.0_f64)),
            price_per_night: 300 + step * 150,
            currency: CURRENCY,
            star_rating: 4 + (i % 2) as u8,
            amenities: random_amenities(rng),
            distance: format!("{:.1} km", 1.0 + f64::from(step) * 2.5),
            check_in_date: None,
            check_out_date: None,
            available: None,
        });
    }

    for (i, prefix) in LOCAL_PREFIXES.iter().enumerate() {
        let step = i as u32;
        let mut amenities = random_amenities(rng);
        amenities.truncate(LOCAL_AMENITY_COUNT);
        hotels.push(Hotel {
            name: format!("{} Hotel {}", prefix, city),
            city: city.to_string(),
            kind: "Local Hotel",
            rating: round1(3.5 + rng.gen_range(0.0..1.0_f64)),
            price_per_night: 150 + step * 100,
            currency: CURRENCY,
            star_rating: 3 + (i % 2) as u8,
            amenities,
            distance: format!("{:.1} km", 0.5 + f64::from(step) * 1.8),
            check_in_date: None,
            check_out_date: None,
            available: None,
        });
    }

    hotels
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::tools::context::ToolContext;

    #[test]
    fn test_city_hotels_inventory() {
        let hotels = city_hotels("Ankara", &mut ToolContext::seeded(1).rng());
        assert_eq!(hotels.len(), 8);

        let (chains, locals) = hotels.split_at(4);
        assert!(chains.iter().all(|h| h.kind == "Chain Hotel"));
        assert!(locals.iter().all(|h| h.kind == "Local Hotel"));
        assert_eq!(chains[0].name, "Hilton Ankara");
        assert_eq!(locals[0].name, "Grand Hotel Ankara");

        assert!(chains.iter().all(|h| (4.0..=5.0).contains(&h.rating)));
        assert!(locals.iter().all(|h| (3.5..=4.5).contains(&h.rating)));
        assert!(chains.iter().all(|h| (6..=9).contains(&h.amenities.len())));
        assert!(locals.iter().all(|h| h.amenities.len() == 4));

        assert_eq!(chains[3].price_per_night, 750);
        assert_eq!(locals[3].price_per_night, 450);
        assert_eq!(chains[1].star_rating, 5);
        assert_eq!(locals[2].star_rating, 3);
        assert_eq!(chains[1].distance, "3.5 km");
        assert_eq!(locals[3].distance, "5.9 km");
    }

    #[test]
    fn test_random_amenities_are_distinct() {
        let mut rng = ToolContext::seeded(5).rng();
        for _ in 0..20 {
            let mut amenities = random_amenities(&mut rng);
            let len = amenities.len();
            amenities.sort();
            amenities.dedup();
            assert_eq!(amenities.len(), len);
        }
    }
}
