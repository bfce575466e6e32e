// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Shared helpers for date/time formatting.
//!
//! All date keys are derived from UTC. The device that schedules a dose
//! and the device that views it may sit in different local time zones,
//! so UTC is the single "today" anchor for adherence matching. Caveat:
//! users far west of UTC see the day roll over in their evening.

use chrono::{DateTime, Utc};

/// Format a UTC timestamp as the dashboard's `DD/MM/YYYY` date key.
pub fn format_date_key(date: DateTime<Utc>) -> String {
    date.format("%d/%m/%Y").to_string()
}

/// Today's date key in UTC.
pub fn today_utc() -> String {
    format_date_key(Utc::now())
}

/// Format a UTC timestamp as an `HH:MM` clock time.
pub fn format_clock_time(date: DateTime<Utc>) -> String {
    date.format("%H:%M").to_string()
}

/// Millisecond Unix timestamp, used as the id of locally synthesized
/// entries when the API is unreachable.
pub fn timestamp_ms(date: DateTime<Utc>) -> i64 {
    date.timestamp_millis()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_date_key_has_leading_zeros() {
        let date = Utc.with_ymd_and_hms(2024, 3, 5, 8, 7, 0).unwrap();
        assert_eq!(format_date_key(date), "05/03/2024");
    }

    #[test]
    fn test_clock_time_is_two_digit() {
        let date = Utc.with_ymd_and_hms(2024, 3, 5, 8, 7, 0).unwrap();
        assert_eq!(format_clock_time(date), "08:07");
    }

    #[test]
    fn test_timestamp_ms_matches_epoch() {
        let date = Utc.with_ymd_and_hms(2024, 3, 15, 0, 0, 0).unwrap();
        assert_eq!(timestamp_ms(date), 1_710_460_800_000);
    }
}
