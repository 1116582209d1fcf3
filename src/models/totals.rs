use serde::Serialize;

/// Revenue and activity figures shown on the dashboard and finance pages
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Totals {
    pub total_revenue: u64,
    pub cash_revenue: u64,
    pub transfer_revenue: u64,
    pub active_count: usize,
}
