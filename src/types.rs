//! Core rate types

use hashbrown::HashMap;

/// Currency code, e.g. `"EUR"`
pub type CurrencyCode = String;

/// ISO-8601 date key (`YYYY-MM-DD`)
pub type DateKey = String;

/// Exchange rate: units of the target currency per one unit of the base
pub type Rate = f64;

/// Rates for a single date, keyed by currency code
pub type RateObservation = HashMap<CurrencyCode, Rate>;

/// Observations keyed by date. Iteration order carries no meaning.
pub type RateSeries = HashMap<DateKey, RateObservation>;

/// Observations in chronological order, index 0 being the earliest date
pub type OrderedRateSequence = Vec<RateObservation>;

/// Build an observation from `(code, rate)` pairs
pub fn observation<I, S>(pairs: I) -> RateObservation
where
    I: IntoIterator<Item = (S, Rate)>,
    S: Into<CurrencyCode>,
{
    pairs.into_iter().map(|(code, rate)| (code.into(), rate)).collect()
}
