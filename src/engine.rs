//! Stateless trend engine: orders a series, fits the trend, recommends

use crate::signal::Signal;
use crate::trend::{self, MissingRatePolicy, Slope, Slopes};
use crate::types::{OrderedRateSequence, RateObservation, RateSeries};
use serde::{Deserialize, Serialize};

/// Configuration for the trend engine
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Treatment of observations lacking the requested currency
    #[serde(default)]
    pub missing_rate_policy: MissingRatePolicy,
}

/// Trend and recommendation for one currency
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrencyTrend {
    pub currency: String,
    pub slope: Slope,
    pub signal: Signal,
}

/// Per-currency trends over one series
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendReport {
    /// Number of dated observations in the series
    pub observations: usize,
    pub first_date: Option<String>,
    pub last_date: Option<String>,
    pub trends: Vec<CurrencyTrend>,
}

/// Trend engine. Holds no state between calls and is safe to share.
#[derive(Debug, Clone, Copy, Default)]
pub struct TrendEngine {
    config: EngineConfig,
}

impl TrendEngine {
    /// Create a new trend engine
    pub fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Chronologically ordered observations of `series`
    pub fn order(&self, series: &RateSeries) -> OrderedRateSequence {
        trend::order(series)
    }

    /// Slope of `currency` over an ordered sequence
    pub fn slope(&self, sequence: &[RateObservation], currency: &str) -> Slope {
        trend::slope_with_policy(sequence, currency, self.config.missing_rate_policy)
    }

    /// Slopes of several currencies over an ordered sequence
    pub fn slopes<S: AsRef<str>>(&self, sequence: &[RateObservation], currencies: &[S]) -> Slopes {
        currencies
            .iter()
            .map(|c| (c.as_ref().to_string(), self.slope(sequence, c.as_ref())))
            .collect()
    }

    /// Signal for `currency` over an ordered sequence
    pub fn classify(&self, sequence: &[RateObservation], currency: &str) -> Signal {
        Signal::from_slope(self.slope(sequence, currency))
    }

    /// Order `series` and classify the trend of `currency`
    pub fn recommend(&self, series: &RateSeries, currency: &str) -> Signal {
        let sequence = self.order(series);
        log::debug!(
            "Recommending on {} over {} observations",
            currency,
            sequence.len()
        );
        let signal = self.classify(&sequence, currency);
        log::debug!("{} trend signal: {}", currency, signal);
        signal
    }

    /// Reciprocal rates of a single observation
    pub fn invert(&self, obs: &RateObservation) -> RateObservation {
        trend::invert(obs)
    }

    /// Slopes and signals for `currencies` over `series`
    pub fn trend_report<S: AsRef<str>>(&self, series: &RateSeries, currencies: &[S]) -> TrendReport {
        let dates = trend::ordered_dates(series);
        let sequence = self.order(series);

        let trends = currencies
            .iter()
            .map(|c| {
                let slope = self.slope(&sequence, c.as_ref());
                CurrencyTrend {
                    currency: c.as_ref().to_string(),
                    slope,
                    signal: Signal::from_slope(slope),
                }
            })
            .collect();

        TrendReport {
            observations: sequence.len(),
            first_date: dates.first().cloned(),
            last_date: dates.last().cloned(),
            trends,
        }
    }
}
