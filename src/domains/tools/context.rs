//! Shared, read-only context handed to every tool.
//!
//! Tools never reach for a global RNG or the wall clock directly. They ask the
//! context, which lets tests (and `MCP_SAMPLE_SEED` / `MCP_REFERENCE_DATE`)
//! make generated responses reproducible.

use chrono::{Local, NaiveDate};
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::core::config::SamplingConfig;

/// Random source and reference date for sample data generation.
#[derive(Debug, Clone, Default)]
pub struct ToolContext {
    seed: Option<u64>,
    reference_date: Option<NaiveDate>,
}

impl ToolContext {
    /// Context drawing from OS entropy and the local clock.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a context from the sampling section of the configuration.
    pub fn from_config(config: &SamplingConfig) -> Self {
        Self {
            seed: config.seed,
            reference_date: config.reference_date,
        }
    }

    /// Context whose every `rng()` starts from the same seed.
    pub fn seeded(seed: u64) -> Self {
        Self {
            seed: Some(seed),
            reference_date: None,
        }
    }

    /// Pin the date returned by [`today`](Self::today).
    pub fn with_reference_date(mut self, date: NaiveDate) -> Self {
        self.reference_date = Some(date);
        self
    }

    /// A fresh generator for one call.
    ///
    /// Generators are never shared between calls.
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }

    /// The date relative schedules and forecast horizons are measured from.
    pub fn today(&self) -> NaiveDate {
        self.reference_date.unwrap_or_else(|| Local::now().date_naive())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    #[test]
    fn test_seeded_context_repeats() {
        let ctx = ToolContext::seeded(7);
        let mut first = ctx.rng();
        let mut second = ctx.rng();
        for _ in 0..5 {
            assert_eq!(first.gen_range(0..1000u32), second.gen_range(0..1000u32));
        }
    }

    #[test]
    fn test_reference_date_is_pinned() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
        let ctx = ToolContext::new().with_reference_date(date);
        assert_eq!(ctx.today(), date);
    }

    #[test]
    fn test_from_config() {
        let config = SamplingConfig {
            seed: Some(1),
            reference_date: NaiveDate::from_ymd_opt(2025, 1, 1),
        };
        let ctx = ToolContext::from_config(&config);
        assert_eq!(ctx.today(), NaiveDate::from_ymd_opt(2025, 1, 1).unwrap());
    }
}
