//! Report-local time handling
//!
//! Printed documents stamp dates and generation times in the reporting
//! timezone rather than UTC.

use chrono::{DateTime, NaiveDate, Utc};
use chrono_tz::Tz;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::str::FromStr;

/// Date layout used on printed documents
pub const PRINT_DATE_FORMAT: &str = "%d/%m/%Y";

/// Timestamp layout used in generation metadata
pub const PRINT_STAMP_FORMAT: &str = "%d/%m/%Y %H:%M:%S";

/// Timezone wrapper for report-local timestamps
///
/// Wraps chrono_tz::Tz with custom serialization support.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timezone(pub Tz);

impl Serialize for Timezone {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.0.name())
    }
}

impl<'de> Deserialize<'de> for Timezone {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Tz::from_str(&s)
            .map(Timezone)
            .map_err(|_| serde::de::Error::custom(format!("Invalid timezone: {}", s)))
    }
}

impl Timezone {
    pub fn new(tz: Tz) -> Self {
        Self(tz)
    }

    /// Converts a UTC datetime to the local timezone
    pub fn to_local(&self, utc: DateTime<Utc>) -> DateTime<Tz> {
        utc.with_timezone(&self.0)
    }

    /// Formats an instant as a report-local timestamp
    pub fn stamp(&self, utc: DateTime<Utc>) -> String {
        self.to_local(utc).format(PRINT_STAMP_FORMAT).to_string()
    }
}

impl Default for Timezone {
    fn default() -> Self {
        Self(chrono_tz::Asia::Jakarta)
    }
}

/// Formats a calendar date for print display
pub fn display_date(date: NaiveDate) -> String {
    date.format(PRINT_DATE_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_stamp_uses_local_offset() {
        let tz = Timezone::default();
        let utc = Utc.with_ymd_and_hms(2024, 3, 1, 17, 30, 0).unwrap();
        // Jakarta is UTC+7
        assert_eq!(tz.stamp(utc), "02/03/2024 00:30:00");
    }

    #[test]
    fn test_display_date() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 5).unwrap();
        assert_eq!(display_date(date), "05/01/2024");
    }

    #[test]
    fn test_timezone_serde_round_trip() {
        let tz = Timezone::new(chrono_tz::Asia::Singapore);
        let json = serde_json::to_string(&tz).unwrap();
        assert_eq!(json, "\"Asia/Singapore\"");

        let back: Timezone = serde_json::from_str(&json).unwrap();
        assert_eq!(back, tz);
    }

    #[test]
    fn test_invalid_timezone_rejected() {
        let result: Result<Timezone, _> = serde_json::from_str("\"Mars/Olympus\"");
        assert!(result.is_err());
    }
}
