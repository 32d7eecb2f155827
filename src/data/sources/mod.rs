//! External rate source integrations
//!
//! - exchangeratesapi.io: latest and historical reference rates

pub mod exchangerates;

pub use exchangerates::{history_query, latest_query, RetryPolicy, EXCHANGE_RATES_BASE_URL};

#[cfg(feature = "async")]
pub use exchangerates::ExchangeRatesClient;
