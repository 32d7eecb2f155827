//! Chronological ordering of rate series

use crate::types::{OrderedRateSequence, RateSeries};

/// Date keys of `series` in ascending string order.
///
/// For equal-length `YYYY-MM-DD` keys this is chronological order. Other key
/// shapes are compared as raw strings.
pub fn ordered_dates(series: &RateSeries) -> Vec<String> {
    let mut dates: Vec<String> = series.keys().cloned().collect();
    dates.sort_unstable();
    dates
}

/// Linearize `series` into observations ordered by date, earliest first.
///
/// Every entry appears exactly once; an empty series yields an empty sequence.
pub fn order(series: &RateSeries) -> OrderedRateSequence {
    ordered_dates(series)
        .iter()
        .filter_map(|date| series.get(date).cloned())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::observation;

    fn sample_series() -> RateSeries {
        let mut series = RateSeries::new();
        series.insert("2019-11-21".to_string(), observation([("USD", 1.1091), ("GBP", 0.85548)]));
        series.insert("2019-11-15".to_string(), observation([("USD", 1.1034), ("GBP", 0.8566)]));
        series.insert("2019-11-22".to_string(), observation([("USD", 1.1058), ("GBP", 0.8598)]));
        series.insert("2019-11-20".to_string(), observation([("USD", 1.1059), ("GBP", 0.85715)]));
        series.insert("2019-11-19".to_string(), observation([("USD", 1.1077), ("GBP", 0.85573)]));
        series.insert("2019-11-18".to_string(), observation([("USD", 1.1061), ("GBP", 0.8533)]));
        series
    }

    #[test]
    fn test_order_sorts_by_date() {
        let sequence = order(&sample_series());

        let expected = vec![
            observation([("USD", 1.1034), ("GBP", 0.8566)]),
            observation([("USD", 1.1061), ("GBP", 0.8533)]),
            observation([("USD", 1.1077), ("GBP", 0.85573)]),
            observation([("USD", 1.1059), ("GBP", 0.85715)]),
            observation([("USD", 1.1091), ("GBP", 0.85548)]),
            observation([("USD", 1.1058), ("GBP", 0.8598)]),
        ];
        assert_eq!(sequence, expected);
    }

    #[test]
    fn test_ordered_dates() {
        let dates = ordered_dates(&sample_series());
        assert_eq!(dates.first().map(String::as_str), Some("2019-11-15"));
        assert_eq!(dates.last().map(String::as_str), Some("2019-11-22"));
        assert_eq!(dates.len(), 6);
    }

    #[test]
    fn test_order_empty() {
        assert!(order(&RateSeries::new()).is_empty());
    }

    #[test]
    fn test_order_raw_string_comparison() {
        // Mixed-length keys fall back to plain string order
        let mut series = RateSeries::new();
        series.insert("2019-1-5".to_string(), observation([("EUR", 2.0)]));
        series.insert("2019-01-10".to_string(), observation([("EUR", 1.0)]));

        let sequence = order(&series);
        assert_eq!(sequence[0]["EUR"], 1.0);
        assert_eq!(sequence[1]["EUR"], 2.0);
    }
}
