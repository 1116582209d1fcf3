//! Countdown arithmetic over rental windows.
//!
//! Durations are plain day counts (a "month" is whatever the duration table
//! says it is), so there is no calendar logic here: the end of a rental is
//! always `start + days * 86400` seconds.

use chrono::{DateTime, Duration, Utc};

pub const SECONDS_PER_DAY: u64 = 24 * 3600;
const SECONDS_PER_HOUR: u64 = 3600;
const SECONDS_PER_MINUTE: u64 = 60;

/// Label shown once a countdown has run out
pub const EXPIRED_LABEL: &str = "Waktu Habis";

/// Instant at which a rental started at `start` for `duration_days` runs out
pub fn end_instant(start: DateTime<Utc>, duration_days: u32) -> DateTime<Utc> {
    let delta = Duration::seconds(i64::from(duration_days) * SECONDS_PER_DAY as i64);
    start
        .checked_add_signed(delta)
        .unwrap_or(DateTime::<Utc>::MAX_UTC)
}

/// Whole seconds left until the end instant, clamped at zero
pub fn seconds_remaining(start: DateTime<Utc>, duration_days: u32, now: DateTime<Utc>) -> u64 {
    let left = end_instant(start, duration_days)
        .signed_duration_since(now)
        .num_seconds();
    left.max(0) as u64
}

/// A remaining-time value split into display units
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Countdown {
    pub days: u64,
    pub hours: u64,
    pub minutes: u64,
    pub seconds: u64,
}

impl Countdown {
    pub fn from_seconds(total: u64) -> Self {
        Self {
            days: total / SECONDS_PER_DAY,
            hours: (total % SECONDS_PER_DAY) / SECONDS_PER_HOUR,
            minutes: (total % SECONDS_PER_HOUR) / SECONDS_PER_MINUTE,
            seconds: total % SECONDS_PER_MINUTE,
        }
    }

    pub fn total_seconds(&self) -> u64 {
        self.days * SECONDS_PER_DAY
            + self.hours * SECONDS_PER_HOUR
            + self.minutes * SECONDS_PER_MINUTE
            + self.seconds
    }
}

/// Render remaining seconds as `"{d}h {h}j {m}m {s}s"` (hari, jam, menit, sekon)
pub fn format_countdown(seconds: u64) -> String {
    if seconds == 0 {
        return EXPIRED_LABEL.to_string();
    }
    let c = Countdown::from_seconds(seconds);
    format!("{}h {}j {}m {}s", c.days, c.hours, c.minutes, c.seconds)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn start() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 1, 8, 30, 0).unwrap()
    }

    #[test]
    fn test_end_instant_is_plain_day_arithmetic() {
        let end = end_instant(start(), 30);
        assert_eq!(end, Utc.with_ymd_and_hms(2024, 3, 31, 8, 30, 0).unwrap());

        // 2024 is a leap year, "1 Tahun" is still exactly 365 days
        let year = end_instant(start(), 365);
        assert_eq!(year, Utc.with_ymd_and_hms(2025, 3, 1, 8, 30, 0).unwrap());
    }

    #[test]
    fn test_full_window_at_start() {
        for days in [1u32, 3, 7, 30, 365, 1095] {
            assert_eq!(
                seconds_remaining(start(), days, start()),
                u64::from(days) * SECONDS_PER_DAY
            );
        }
    }

    #[test]
    fn test_clamped_after_end() {
        let end = end_instant(start(), 3);
        assert_eq!(seconds_remaining(start(), 3, end), 0);
        assert_eq!(seconds_remaining(start(), 3, end + Duration::seconds(1)), 0);
        assert_eq!(seconds_remaining(start(), 3, end + Duration::days(400)), 0);
    }

    #[test]
    fn test_partial_seconds_floor() {
        let now = end_instant(start(), 1) - Duration::milliseconds(1500);
        assert_eq!(seconds_remaining(start(), 1, now), 1);

        let now = end_instant(start(), 1) - Duration::milliseconds(500);
        assert_eq!(seconds_remaining(start(), 1, now), 0);
    }

    #[test]
    fn test_format_expired() {
        assert_eq!(format_countdown(0), EXPIRED_LABEL);
    }

    #[test]
    fn test_format_decomposition() {
        assert_eq!(
            Countdown::from_seconds(90061),
            Countdown { days: 1, hours: 1, minutes: 1, seconds: 1 }
        );
        assert_eq!(format_countdown(90061), "1h 1j 1m 1s");
        assert_eq!(format_countdown(59), "0h 0j 0m 59s");
        assert_eq!(format_countdown(7 * SECONDS_PER_DAY), "7h 0j 0m 0s");
    }

    #[test]
    fn test_decomposition_loses_nothing() {
        for total in [1u64, 59, 60, 3599, 3600, 86399, 86400, 90061, 1_234_567, 94_608_000] {
            assert_eq!(Countdown::from_seconds(total).total_seconds(), total);
        }
    }
}
