//! Records and lookup tables shared by the flight tools.

use chrono::NaiveDate;
use serde::Serialize;

/// A synthesized flight.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Flight {
    pub flight_number: String,
    pub airline: String,
    pub from: String,
    pub to: String,
    pub date: NaiveDate,
    pub departure_time: String,
    pub arrival_time: String,
    pub price: u32,
    pub currency: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub available: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aircraft: Option<&'static str>,
}

/// An entry of the airline catalogue.
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AirlineInfo {
    pub name: &'static str,
    pub code: &'static str,
    pub turkish_name: &'static str,
    /// Name printed on generated flights.
    #[serde(skip)]
    pub short_name: &'static str,
}

pub const AIRLINES: &[AirlineInfo] = &[
    AirlineInfo {
        name: "Turkish Airlines",
        code: "TK",
        turkish_name: "Türk Hava Yolları",
        short_name: "Turkish Airlines",
    },
    AirlineInfo {
        name: "Pegasus Airlines",
        code: "PC",
        turkish_name: "Pegasus Hava Yolları",
        short_name: "Pegasus",
    },
    AirlineInfo {
        name: "AnadoluJet",
        code: "AJ",
        turkish_name: "AnadoluJet",
        short_name: "AnadoluJet",
    },
    AirlineInfo {
        name: "SunExpress",
        code: "XQ",
        turkish_name: "SunExpress",
        short_name: "SunExpress",
    },
    AirlineInfo {
        name: "Onur Air",
        code: "8Q",
        turkish_name: "Onur Air",
        short_name: "Onur Air",
    },
    AirlineInfo {
        name: "AtlasGlobal",
        code: "KK",
        turkish_name: "AtlasGlobal",
        short_name: "AtlasGlobal",
    },
];

/// Carriers that operate the generated daily schedules.
pub fn scheduled_carriers() -> &'static [AirlineInfo] {
    &AIRLINES[..4]
}

/// Code used for carriers missing from the catalogue.
pub const UNKNOWN_AIRLINE_CODE: &str = "XX";

/// Resolve an airline name, short name, Turkish name or code to its IATA code.
pub fn airline_code(name: &str) -> &'static str {
    let key = name.trim().to_lowercase();
    AIRLINES
        .iter()
        .find(|a| {
            a.name.to_lowercase() == key
                || a.short_name.to_lowercase() == key
                || a.turkish_name.to_lowercase() == key
                || a.code.eq_ignore_ascii_case(&key)
        })
        .map(|a| a.code)
        .unwrap_or(UNKNOWN_AIRLINE_CODE)
}

const AIRCRAFT_TYPES: &[&str] = &["Boeing 737", "Airbus A320", "Boeing 777", "Airbus A330"];

/// Pick an aircraft type from a stable hash of the airline name.
pub fn aircraft_type(airline: &str) -> &'static str {
    let hash = airline
        .bytes()
        .fold(0u32, |h, b| h.wrapping_mul(31).wrapping_add(u32::from(b)));
    AIRCRAFT_TYPES[hash as usize % AIRCRAFT_TYPES.len()]
}

/// Block times in minutes for known city pairs, either direction.
const ROUTE_DURATIONS: &[(&str, &str, u32)] = &[
    ("İstanbul", "Ankara", 90),
    ("İstanbul", "İzmir", 80),
    ("İstanbul", "Antalya", 90),
    ("Ankara", "İzmir", 70),
    ("İstanbul", "Trabzon", 105),
];

pub const DEFAULT_ROUTE_MINUTES: u32 = 95;

/// Flight time between two canonical city names.
pub fn route_duration_minutes(from: &str, to: &str) -> u32 {
    ROUTE_DURATIONS
        .iter()
        .find(|(a, b, _)| (*a == from && *b == to) || (*a == to && *b == from))
        .map(|(_, _, minutes)| *minutes)
        .unwrap_or(DEFAULT_ROUTE_MINUTES)
}
