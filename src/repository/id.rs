use chrono::{DateTime, Utc};

/// Creation-time ids: epoch milliseconds, bumped so that every id is
/// strictly greater than the last one handed out (or loaded).
#[derive(Debug, Clone, Default)]
pub struct IdGenerator {
    last: u64,
}

impl IdGenerator {
    pub fn seeded(existing: impl IntoIterator<Item = u64>) -> Self {
        Self {
            last: existing.into_iter().max().unwrap_or(0),
        }
    }

    pub fn next(&mut self, now: DateTime<Utc>) -> u64 {
        let millis = now.timestamp_millis().max(0) as u64;
        let id = millis.max(self.last.saturating_add(1));
        self.last = id;
        id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_ids_strictly_increase_within_same_millisecond() {
        let now = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let mut ids = IdGenerator::default();

        let a = ids.next(now);
        let b = ids.next(now);
        let c = ids.next(now);
        assert_eq!(a, now.timestamp_millis() as u64);
        assert!(a < b && b < c);
    }

    #[test]
    fn test_seeded_past_loaded_ids() {
        let now = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let future = now.timestamp_millis() as u64 + 10_000;
        let mut ids = IdGenerator::seeded([3, future, 9]);
        assert_eq!(ids.next(now), future + 1);
    }
}
