//! Currency codes and the fixed currencies the recommendation works against

use crate::error::{Result, XeError};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Currencies the advisor quotes into or reports trends for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Currency {
    EUR,
    GBP,
    USD,
}

impl Currency {
    /// Currency every recommendation converts into
    pub const TARGET: Currency = Currency::EUR;

    /// Currencies covered by trend reports
    pub const TRACKED: [Currency; 2] = [Currency::GBP, Currency::USD];

    pub fn code(&self) -> &'static str {
        match self {
            Currency::EUR => "EUR",
            Currency::GBP => "GBP",
            Currency::USD => "USD",
        }
    }

    /// Codes of the tracked currencies
    pub fn tracked_codes() -> Vec<String> {
        Self::TRACKED.iter().map(|c| c.code().to_string()).collect()
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Upper-cased ISO 4217 code from user input.
///
/// Anything other than three ASCII letters is rejected, so the result is safe
/// to place in a query string or use as a rate key.
pub fn normalize_code(code: &str) -> Result<String> {
    let code = code.trim();
    if code.is_empty() {
        return Err(XeError::InvalidParameter("currency must be provided".to_string()));
    }
    if code.len() != 3 || !code.bytes().all(|b| b.is_ascii_alphabetic()) {
        return Err(XeError::InvalidParameter(format!(
            "currency must be a 3-letter code, got {:?}",
            code
        )));
    }
    Ok(code.to_ascii_uppercase())
}
