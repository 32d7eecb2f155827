//! Conversion advice: current rate plus a trend-based recommendation

use crate::currency::{normalize_code, Currency};
use crate::data::{HistoricalRates, HistoryWindow, LatestRates, RateProvider};
use crate::engine::TrendEngine;
use crate::error::{Result, XeError};
use crate::signal::Signal;
use serde::{Deserialize, Serialize};

pub const ERR_DECODE_PARAMS: &str = "invalid query parameter - currency must be provided";
pub const ERR_CONVERT: &str = "error converting currency";
pub const ERR_ROUTE_NOT_FOUND: &str = "route not found";

/// Successful conversion advice
///
/// ```json
/// {"from":"USD","to":"EUR","rate":1.163061177,"recommendation":"convert"}
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConvertResponse {
    pub from: String,
    pub to: String,
    pub rate: f64,
    pub recommendation: Signal,
}

/// Error body returned in place of a [`ConvertResponse`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    /// Client-facing body for `err`. Internal detail is not exposed.
    pub fn from_error(err: &XeError) -> Self {
        let message = match err {
            XeError::InvalidParameter(_) => ERR_DECODE_PARAMS,
            _ => ERR_CONVERT,
        };
        Self {
            error: message.to_string(),
        }
    }

    pub fn route_not_found() -> Self {
        Self {
            error: ERR_ROUTE_NOT_FOUND.to_string(),
        }
    }

    /// HTTP status matching `err`
    pub fn status_code(err: &XeError) -> u16 {
        match err {
            XeError::InvalidParameter(_) => 400,
            _ => 500,
        }
    }
}

/// Combines a rate provider with the trend engine
pub struct Advisor<P> {
    provider: P,
    engine: TrendEngine,
    target: Currency,
    lookback_days: u32,
}

impl<P: RateProvider> Advisor<P> {
    pub fn new(provider: P, engine: TrendEngine, target: Currency, lookback_days: u32) -> Self {
        Self {
            provider,
            engine,
            target,
            lookback_days,
        }
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// Current rate from `currency` to the target and whether to convert now.
    ///
    /// History covers the configured look-back window ending today.
    pub fn convert(&self, currency: &str) -> Result<ConvertResponse> {
        let currency = normalize_code(currency)?;
        let symbols = [self.target.code()];

        let latest = self.provider.latest_rates(&currency, &symbols)?;
        let window = HistoryWindow::ending_today(self.lookback_days)?;
        let historical = self.provider.historical_rates(&currency, &symbols, &window)?;

        advise(&self.engine, self.target, &currency, &latest, &historical)
    }
}

/// Build advice for `currency` from already fetched rates
pub fn advise(
    engine: &TrendEngine,
    target: Currency,
    currency: &str,
    latest: &LatestRates,
    historical: &HistoricalRates,
) -> Result<ConvertResponse> {
    let currency = normalize_code(currency)?;
    let rate = latest.rate(target.code())?;

    log::debug!(
        "Advising {} -> {} at {} over {}..{}",
        currency,
        target,
        rate,
        historical.start_at,
        historical.end_at
    );
    let recommendation = engine.recommend(&historical.rates, target.code());

    Ok(ConvertResponse {
        from: currency,
        to: target.code().to_string(),
        rate,
        recommendation,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::InMemoryRateProvider;
    use crate::types::{observation, RateSeries};

    fn latest(rates: &[(&str, f64)]) -> LatestRates {
        LatestRates {
            rates: observation(rates.iter().copied()),
            base: "USD".to_string(),
            date: "2019-11-22".to_string(),
        }
    }

    fn historical(points: &[(&str, f64)]) -> HistoricalRates {
        let rates: RateSeries = points
            .iter()
            .map(|(date, rate)| (date.to_string(), observation([("EUR", *rate)])))
            .collect();
        HistoricalRates {
            rates,
            base: "USD".to_string(),
            start_at: "2019-11-21".to_string(),
            end_at: "2019-11-22".to_string(),
        }
    }

    fn provider(latest_rates: LatestRates, history: HistoricalRates) -> InMemoryRateProvider {
        let mut provider = InMemoryRateProvider::new();
        provider.add_latest(latest_rates);
        provider.add_historical(history);
        provider
    }

    #[test]
    fn test_convert_happy_path() {
        let advisor = Advisor::new(
            provider(
                latest(&[("EUR", 1.163061177)]),
                historical(&[("2019-11-22", 1.163061177), ("2019-11-21", 1.1689343994)]),
            ),
            TrendEngine::default(),
            Currency::EUR,
            7,
        );

        let resp = advisor.convert("usd").unwrap();
        assert_eq!(
            serde_json::to_string(&resp).unwrap(),
            r#"{"from":"USD","to":"EUR","rate":1.163061177,"recommendation":"convert"}"#
        );
    }

    #[test]
    fn test_convert_missing_currency_param() {
        let advisor = Advisor::new(
            InMemoryRateProvider::new(),
            TrendEngine::default(),
            Currency::EUR,
            7,
        );

        let err = advisor.convert("  ").unwrap_err();
        assert_eq!(ErrorResponse::status_code(&err), 400);
        assert_eq!(
            serde_json::to_string(&ErrorResponse::from_error(&err)).unwrap(),
            r#"{"error":"invalid query parameter - currency must be provided"}"#
        );
    }

    #[test]
    fn test_convert_rejects_malformed_currency() {
        let advisor = Advisor::new(
            provider(
                latest(&[("EUR", 1.163061177)]),
                historical(&[("2019-11-22", 1.163061177)]),
            ),
            TrendEngine::default(),
            Currency::EUR,
            7,
        );

        for input in ["US", "USD&symbols=JPY", "12$"] {
            let err = advisor.convert(input).unwrap_err();
            assert!(matches!(err, XeError::InvalidParameter(_)), "accepted {:?}", input);
            assert_eq!(ErrorResponse::status_code(&err), 400);
            assert_eq!(ErrorResponse::from_error(&err).error, ERR_DECODE_PARAMS);
        }
    }

    #[test]
    fn test_convert_latest_rate_unavailable() {
        let advisor = Advisor::new(
            InMemoryRateProvider::new(),
            TrendEngine::default(),
            Currency::EUR,
            7,
        );

        let err = advisor.convert("USD").unwrap_err();
        assert_eq!(ErrorResponse::status_code(&err), 500);
        assert_eq!(ErrorResponse::from_error(&err).error, ERR_CONVERT);
    }

    #[test]
    fn test_advise_missing_target_rate() {
        let err = advise(
            &TrendEngine::default(),
            Currency::EUR,
            "USD",
            &latest(&[("NON_EXISTENT_RATE", 1.163061177)]),
            &historical(&[]),
        )
        .unwrap_err();

        assert!(matches!(err, XeError::MissingRate { .. }));
        assert_eq!(ErrorResponse::from_error(&err).error, ERR_CONVERT);
    }

    #[test]
    fn test_advise_flat_history_is_neutral() {
        let resp = advise(
            &TrendEngine::default(),
            Currency::EUR,
            "USD",
            &latest(&[("EUR", 1.163061177)]),
            &historical(&[("2019-11-21", 1.163061177), ("2019-11-22", 1.163061177)]),
        )
        .unwrap();

        assert_eq!(resp.recommendation, Signal::Neutral);
        assert_eq!(
            serde_json::to_value(&resp).unwrap()["recommendation"],
            "neutral"
        );
    }

    #[test]
    fn test_route_not_found_body() {
        assert_eq!(
            serde_json::to_string(&ErrorResponse::route_not_found()).unwrap(),
            r#"{"error":"route not found"}"#
        );
    }
}
