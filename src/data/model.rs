//! Rate provider response shapes

use crate::error::{Result, XeError};
use crate::trend;
use crate::types::{OrderedRateSequence, Rate, RateObservation, RateSeries};
use serde::{Deserialize, Serialize};

/// Rates for a single date
///
/// ```json
/// {"rates": {"EUR": 1.163061177}, "base": "GBP", "date": "2019-11-22"}
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LatestRates {
    pub rates: RateObservation,
    pub base: String,
    pub date: String,
}

impl LatestRates {
    /// Rate of `currency` against the base
    pub fn rate(&self, currency: &str) -> Result<Rate> {
        self.rates
            .get(currency)
            .copied()
            .ok_or_else(|| XeError::MissingRate {
                currency: currency.to_string(),
                context: format!("latest {} rates of {}", self.base, self.date),
            })
    }
}

/// Rates over a date range, keyed by date
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoricalRates {
    pub rates: RateSeries,
    pub base: String,
    pub start_at: String,
    pub end_at: String,
}

impl HistoricalRates {
    /// Observations in date order
    pub fn sequence(&self) -> OrderedRateSequence {
        trend::order(&self.rates)
    }

    pub fn is_empty(&self) -> bool {
        self.rates.is_empty()
    }
}
