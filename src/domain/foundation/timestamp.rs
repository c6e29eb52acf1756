//! Timestamp value object for immutable points in time.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// A point in time, always UTC.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Timestamp(DateTime<Utc>);

impl Timestamp {
    pub fn now() -> Self {
        Self(Utc::now())
    }

    pub fn from_datetime(dt: DateTime<Utc>) -> Self {
        Self(dt)
    }

    pub fn as_datetime(&self) -> &DateTime<Utc> {
        &self.0
    }

    /// Calendar date of this instant in UTC.
    pub fn date(&self) -> NaiveDate {
        self.0.date_naive()
    }

    /// Today's calendar date in UTC.
    pub fn today() -> NaiveDate {
        Utc::now().date_naive()
    }

    pub fn is_before(&self, other: &Timestamp) -> bool {
        self.0 < other.0
    }

    pub fn is_after(&self, other: &Timestamp) -> bool {
        self.0 > other.0
    }
}

impl Default for Timestamp {
    fn default() -> Self {
        Self::now()
    }
}

impl From<DateTime<Utc>> for Timestamp {
    fn from(dt: DateTime<Utc>) -> Self {
        Self(dt)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn ordering_follows_time() {
        let earlier = Timestamp::from_datetime(Utc.with_ymd_and_hms(2025, 1, 1, 9, 0, 0).unwrap());
        let later = Timestamp::from_datetime(Utc.with_ymd_and_hms(2025, 1, 2, 9, 0, 0).unwrap());
        assert!(earlier.is_before(&later));
        assert!(later.is_after(&earlier));
        assert!(earlier < later);
    }

    #[test]
    fn date_drops_time_of_day() {
        let ts = Timestamp::from_datetime(Utc.with_ymd_and_hms(2025, 3, 10, 23, 59, 0).unwrap());
        assert_eq!(ts.date(), NaiveDate::from_ymd_opt(2025, 3, 10).unwrap());
    }

    #[test]
    fn serializes_as_rfc3339() {
        let ts = Timestamp::from_datetime(Utc.with_ymd_and_hms(2025, 1, 15, 9, 30, 0).unwrap());
        let json = serde_json::to_string(&ts).unwrap();
        assert_eq!(json, "\"2025-01-15T09:30:00Z\"");
    }
}
