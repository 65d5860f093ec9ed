use crate::types::into_utc_trait::IntoUtcDateTime;
use chrono::{DateTime, SecondsFormat, Utc};

/// A possibly open-ended time range for filtering observations.
///
/// Both ends are inclusive. Rendered as the `datetime` query parameter of the
/// metObs API: `from/to`, `from/..`, `../to`, or omitted when fully open.
/// Whole seconds render without a fraction; sub-second parts are kept.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use dmi_open_data::TimeInterval;
///
/// let christmas = TimeInterval::between(
///     NaiveDate::from_ymd_opt(2020, 12, 20).unwrap(),
///     NaiveDate::from_ymd_opt(2020, 12, 24).unwrap(),
/// );
/// assert_eq!(
///     christmas.to_query_value().as_deref(),
///     Some("2020-12-20T00:00:00Z/2020-12-24T00:00:00Z")
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TimeInterval {
    pub from: Option<DateTime<Utc>>,
    pub to: Option<DateTime<Utc>>,
}

impl TimeInterval {
    pub fn between(from: impl IntoUtcDateTime, to: impl IntoUtcDateTime) -> Self {
        Self {
            from: Some(from.into_utc()),
            to: Some(to.into_utc()),
        }
    }

    pub fn since(from: impl IntoUtcDateTime) -> Self {
        Self {
            from: Some(from.into_utc()),
            to: None,
        }
    }

    pub fn until(to: impl IntoUtcDateTime) -> Self {
        Self {
            from: None,
            to: Some(to.into_utc()),
        }
    }

    pub fn contains(&self, instant: DateTime<Utc>) -> bool {
        self.from.map_or(true, |from| from <= instant)
            && self.to.map_or(true, |to| instant <= to)
    }

    pub fn to_query_value(&self) -> Option<String> {
        let bound = |dt: Option<DateTime<Utc>>| {
            dt.map(|dt| dt.to_rfc3339_opts(SecondsFormat::AutoSi, true))
                .unwrap_or_else(|| "..".to_string())
        };
        match (self.from, self.to) {
            (None, None) => None,
            (from, to) => Some(format!("{}/{}", bound(from), bound(to))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn dec(day: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2020, 12, day, 0, 0, 0).unwrap()
    }

    #[test]
    fn test_query_values() {
        assert_eq!(TimeInterval::default().to_query_value(), None);
        assert_eq!(
            TimeInterval::since(dec(20)).to_query_value().as_deref(),
            Some("2020-12-20T00:00:00Z/..")
        );
        assert_eq!(
            TimeInterval::until(dec(24)).to_query_value().as_deref(),
            Some("../2020-12-24T00:00:00Z")
        );
        assert_eq!(
            TimeInterval::between(dec(20), dec(24))
                .to_query_value()
                .as_deref(),
            Some("2020-12-20T00:00:00Z/2020-12-24T00:00:00Z")
        );
    }

    #[test]
    fn test_query_value_keeps_sub_seconds() {
        let to = dec(24) + Duration::milliseconds(900);
        assert_eq!(
            TimeInterval::until(to).to_query_value().as_deref(),
            Some("../2020-12-24T00:00:00.900Z")
        );
        let from = dec(20) + Duration::microseconds(1);
        assert_eq!(
            TimeInterval::between(from, to).to_query_value().as_deref(),
            Some("2020-12-20T00:00:00.000001Z/2020-12-24T00:00:00.900Z")
        );
    }

    #[test]
    fn test_contains_is_inclusive() {
        let interval = TimeInterval::between(dec(20), dec(24));
        assert!(interval.contains(dec(20)));
        assert!(interval.contains(dec(22)));
        assert!(interval.contains(dec(24)));
        assert!(!interval.contains(dec(25)));
        assert!(!interval.contains(dec(19)));

        assert!(TimeInterval::since(dec(20)).contains(dec(31)));
        assert!(!TimeInterval::until(dec(24)).contains(dec(31)));
        assert!(TimeInterval::default().contains(dec(1)));
    }
}
