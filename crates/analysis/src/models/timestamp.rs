use chrono::{DateTime, NaiveDate};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::round::lenient;

/// Seconds plus sub-second nanoseconds, as stored by Firestore. Both the
/// plain and the underscore-prefixed wire spellings are accepted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Timestamp {
    #[serde(
        default,
        alias = "_seconds",
        deserialize_with = "lenient",
        skip_serializing_if = "Option::is_none"
    )]
    pub seconds: Option<f64>,
    #[serde(
        default,
        alias = "_nanoseconds",
        deserialize_with = "lenient",
        skip_serializing_if = "Option::is_none"
    )]
    pub nanoseconds: Option<f64>,
}

impl Timestamp {
    pub fn new(seconds: f64, nanoseconds: f64) -> Self {
        Self {
            seconds: Some(seconds),
            nanoseconds: Some(nanoseconds),
        }
    }

    /// Milliseconds since the epoch, truncated toward zero. `None` without a
    /// seconds component or when the instant does not fit in an `i64`.
    pub fn as_millis(&self) -> Option<i64> {
        let seconds = self.seconds?;
        let nanos = self.nanoseconds.unwrap_or(0.0);
        let millis = (seconds * 1000.0 + nanos / 1_000_000.0).trunc();

        if !millis.is_finite() || millis < i64::MIN as f64 || millis >= i64::MAX as f64 {
            return None;
        }
        Some(millis as i64)
    }

    /// UTC calendar date of this instant. `None` when unresolvable.
    pub fn to_date(&self) -> Option<NaiveDate> {
        DateTime::from_timestamp_millis(self.as_millis()?).map(|dt| dt.date_naive())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_millis_combines_components() {
        let ts = Timestamp::new(1_672_531_200.0, 999_999_999.0);
        assert_eq!(ts.as_millis(), Some(1_672_531_200_999));
    }

    #[test]
    fn test_fractional_seconds_truncate_to_millis() {
        let ts = Timestamp::new(1_672_531_200.5, 0.0);
        assert_eq!(ts.as_millis(), Some(1_672_531_200_500));
        assert_eq!(ts.to_date(), NaiveDate::from_ymd_opt(2023, 1, 1));
    }

    #[test]
    fn test_missing_nanoseconds_default_to_zero() {
        let ts = Timestamp {
            seconds: Some(10.0),
            nanoseconds: None,
        };
        assert_eq!(ts.as_millis(), Some(10_000));
    }

    #[test]
    fn test_missing_seconds_is_unresolvable() {
        let ts = Timestamp {
            seconds: None,
            nanoseconds: Some(5.0),
        };
        assert_eq!(ts.as_millis(), None);
        assert_eq!(ts.to_date(), None);
    }

    #[test]
    fn test_to_date() {
        let ts = Timestamp::new(1_672_531_200.0, 0.0);
        assert_eq!(ts.to_date(), NaiveDate::from_ymd_opt(2023, 1, 1));
    }

    #[test]
    fn test_out_of_range_is_unresolvable() {
        assert_eq!(Timestamp::new(f64::MAX, 0.0).as_millis(), None);
        assert_eq!(Timestamp::new(9.0e15, 0.0).to_date(), None);
    }

    #[test]
    fn test_wire_forms() {
        let ts: Timestamp =
            serde_json::from_value(json!({ "_seconds": 1_672_531_200, "_nanoseconds": 0 }))
                .unwrap();
        assert_eq!(ts, Timestamp::new(1_672_531_200.0, 0.0));

        let ts: Timestamp =
            serde_json::from_value(json!({ "seconds": 1_672_531_200.5 })).unwrap();
        assert_eq!(ts.seconds, Some(1_672_531_200.5));
    }
}
