//! Rate data: provider response shapes, query windows and rate sources
//!
//! # Components
//!
//! - **model**: `LatestRates` / `HistoricalRates` as delivered by the provider
//! - **window**: look-back date windows for historical queries
//! - **provider**: the `RateProvider` seam and an in-memory implementation
//! - **sources**: exchangeratesapi.io URL building and async client

pub mod model;
pub mod provider;
pub mod sources;
pub mod window;

pub use model::{HistoricalRates, LatestRates};
pub use provider::{InMemoryRateProvider, RateProvider};
pub use window::{HistoryWindow, DEFAULT_LOOKBACK_DAYS};
