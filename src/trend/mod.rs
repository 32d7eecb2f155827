//! Trend estimation over date-keyed rate series
//!
//! # Components
//!
//! - **ordering**: linearizes a [`RateSeries`](crate::types::RateSeries) by date
//! - **regression**: least-squares slope of one currency against time index
//! - **inverse**: reciprocal rates for a single observation
//!
//! # Example
//!
//! ```rust
//! use rusty_xe::trend::{order, slope, classify};
//! use rusty_xe::types::{observation, RateSeries};
//! use rusty_xe::signal::Signal;
//!
//! let mut series = RateSeries::new();
//! series.insert("2019-11-19".to_string(), observation([("EUR", 1.17)]));
//! series.insert("2019-11-18".to_string(), observation([("EUR", 1.18)]));
//! series.insert("2019-11-20".to_string(), observation([("EUR", 1.16)]));
//!
//! let sequence = order(&series);
//! assert!(slope(&sequence, "EUR").value().unwrap() < 0.0);
//! assert_eq!(classify(&sequence, "EUR"), Signal::Convert);
//! ```

pub mod inverse;
pub mod ordering;
pub mod regression;

pub use inverse::invert;
pub use ordering::{order, ordered_dates};
pub use regression::{classify, slope, slope_with_policy, slopes, MissingRatePolicy, Slope, Slopes};
