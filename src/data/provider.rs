//! Rate provider seam and an in-memory implementation

use super::model::{HistoricalRates, LatestRates};
use super::window::HistoryWindow;
use crate::error::{Result, XeError};
use hashbrown::HashMap;
use std::fs;
use std::path::Path;

/// Source of latest and historical rates quoted against a base currency
pub trait RateProvider: Send + Sync {
    /// Latest rates of `symbols` per one unit of `base`
    fn latest_rates(&self, base: &str, symbols: &[&str]) -> Result<LatestRates>;

    /// Rates of `symbols` per one unit of `base` for each date in `window`
    fn historical_rates(
        &self,
        base: &str,
        symbols: &[&str],
        window: &HistoryWindow,
    ) -> Result<HistoricalRates>;
}

/// Provider serving pre-loaded responses, keyed by base currency.
///
/// Responses are returned as stored, whatever symbols or window are asked for.
#[derive(Debug, Clone, Default)]
pub struct InMemoryRateProvider {
    latest: HashMap<String, LatestRates>,
    historical: HashMap<String, HistoricalRates>,
}

impl InMemoryRateProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a latest-rates response under its base currency
    pub fn add_latest(&mut self, rates: LatestRates) {
        self.latest.insert(rates.base.to_uppercase(), rates);
    }

    /// Store a historical response under its base currency
    pub fn add_historical(&mut self, rates: HistoricalRates) {
        self.historical.insert(rates.base.to_uppercase(), rates);
    }

    /// Load a latest-rates JSON document and a historical JSON document
    pub fn from_json_files(latest: &Path, historical: &Path) -> Result<Self> {
        let mut provider = Self::new();
        provider.add_latest(serde_json::from_str(&fs::read_to_string(latest)?)?);
        provider.add_historical(serde_json::from_str(&fs::read_to_string(historical)?)?);
        log::debug!(
            "Loaded rate fixtures from {} and {}",
            latest.display(),
            historical.display()
        );
        Ok(provider)
    }

    pub fn bases(&self) -> Vec<String> {
        let mut bases: Vec<String> = self
            .latest
            .keys()
            .chain(self.historical.keys())
            .cloned()
            .collect();
        bases.sort_unstable();
        bases.dedup();
        bases
    }
}

impl RateProvider for InMemoryRateProvider {
    fn latest_rates(&self, base: &str, _symbols: &[&str]) -> Result<LatestRates> {
        self.latest
            .get(&base.to_uppercase())
            .cloned()
            .ok_or_else(|| XeError::DataError(format!("No latest rates for base {}", base)))
    }

    fn historical_rates(
        &self,
        base: &str,
        _symbols: &[&str],
        _window: &HistoryWindow,
    ) -> Result<HistoricalRates> {
        self.historical
            .get(&base.to_uppercase())
            .cloned()
            .ok_or_else(|| XeError::DataError(format!("No historical rates for base {}", base)))
    }
}
