//! Domains module containing business logic organized by bounded contexts.
//!
//! The travel server exposes tools only; each tool topic (flight, hotel,
//! travel, ...) lives under `tools::definitions`.

pub mod tools;
