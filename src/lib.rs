//! # rusty-xe
//!
//! Foreign-exchange trend estimation and convert/hold recommendations.
//!
//! Given a date-keyed series of exchange-rate observations, rusty-xe orders the
//! series chronologically, fits a least-squares line to one currency's rates
//! and turns the direction of that line into a recommendation: convert now
//! while the rate is falling, wait while it is rising.
//!
//! ## Example
//!
//! ```rust
//! use rusty_xe::prelude::*;
//!
//! let mut series = RateSeries::new();
//! series.insert("2019-11-15".to_string(), observation([("EUR", 1.1674060238)]));
//! series.insert("2019-11-22".to_string(), observation([("EUR", 1.163061177)]));
//! series.insert("2019-11-18".to_string(), observation([("EUR", 1.1719207782)]));
//!
//! let engine = TrendEngine::default();
//! assert_eq!(engine.recommend(&series, "EUR"), Signal::Convert);
//! ```

pub mod advisor;
pub mod config;
pub mod currency;
pub mod data;
pub mod engine;
pub mod error;
pub mod signal;
pub mod trend;
pub mod types;

pub mod prelude {
    //! Commonly used types and traits
    pub use crate::advisor::{advise, Advisor, ConvertResponse, ErrorResponse};
    pub use crate::config::Config;
    pub use crate::currency::Currency;
    pub use crate::data::{HistoricalRates, HistoryWindow, InMemoryRateProvider, LatestRates, RateProvider};
    pub use crate::engine::{EngineConfig, TrendEngine, TrendReport};
    pub use crate::error::{Result, XeError};
    pub use crate::signal::Signal;
    pub use crate::trend::{MissingRatePolicy, Slope, Slopes};
    pub use crate::types::*;
}
