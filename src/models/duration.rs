// Rental duration presets offered by the input form
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DurationOption {
    pub label: &'static str,
    pub days: u32,
}

/// Fixed label -> day count table. "Bulan" and "Tahun" are flat 30 and 365
/// days, not calendar months or years.
pub const DURATION_OPTIONS: [DurationOption; 14] = [
    DurationOption { label: "3 Hari", days: 3 },
    DurationOption { label: "1 Minggu", days: 7 },
    DurationOption { label: "2 Minggu", days: 14 },
    DurationOption { label: "3 Minggu", days: 21 },
    DurationOption { label: "4 Minggu", days: 28 },
    DurationOption { label: "5 Minggu", days: 35 },
    DurationOption { label: "1 Bulan", days: 30 },
    DurationOption { label: "2 Bulan", days: 60 },
    DurationOption { label: "3 Bulan", days: 90 },
    DurationOption { label: "4 Bulan", days: 120 },
    DurationOption { label: "5 Bulan", days: 150 },
    DurationOption { label: "1 Tahun", days: 365 },
    DurationOption { label: "2 Tahun", days: 730 },
    DurationOption { label: "3 Tahun", days: 1095 },
];

/// Preselected duration on a fresh input form
pub const DEFAULT_DURATION_DAYS: u32 = 7;

pub fn days_for_label(label: &str) -> Option<u32> {
    DURATION_OPTIONS
        .iter()
        .find(|opt| opt.label.eq_ignore_ascii_case(label.trim()))
        .map(|opt| opt.days)
}

pub fn label_for_days(days: u32) -> Option<&'static str> {
    DURATION_OPTIONS
        .iter()
        .find(|opt| opt.days == days)
        .map(|opt| opt.label)
}
