//! Look-back date windows for historical rate queries

use crate::error::{Result, XeError};
use chrono::{Days, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Days of history behind each recommendation
pub const DEFAULT_LOOKBACK_DAYS: u32 = 7;

const ISO_DATE: &str = "%Y-%m-%d";

/// Inclusive date range of a historical query
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryWindow {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl HistoryWindow {
    /// Window of `days` days ending on `end`
    pub fn ending(end: NaiveDate, days: u32) -> Result<Self> {
        let start = end
            .checked_sub_days(Days::new(u64::from(days)))
            .ok_or_else(|| {
                XeError::InvalidParameter(format!("{} days before {} is out of range", days, end))
            })?;
        Ok(Self { start, end })
    }

    /// Window of `days` days ending on the current UTC date
    pub fn ending_today(days: u32) -> Result<Self> {
        Self::ending(Utc::now().date_naive(), days)
    }

    /// Parse a window from `YYYY-MM-DD` bounds
    pub fn parse(start: &str, end: &str) -> Result<Self> {
        let parse = |s: &str| {
            NaiveDate::parse_from_str(s, ISO_DATE)
                .map_err(|e| XeError::InvalidParameter(format!("Invalid date {}: {}", s, e)))
        };
        let window = Self {
            start: parse(start)?,
            end: parse(end)?,
        };
        if window.start > window.end {
            return Err(XeError::InvalidParameter(format!(
                "Window start {} is after end {}",
                start, end
            )));
        }
        Ok(window)
    }

    pub fn start_at(&self) -> String {
        self.start.format(ISO_DATE).to_string()
    }

    pub fn end_at(&self) -> String {
        self.end.format(ISO_DATE).to_string()
    }

    pub fn days(&self) -> i64 {
        (self.end - self.start).num_days()
    }
}
