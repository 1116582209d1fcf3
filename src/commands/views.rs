// Read-only page snapshots: dashboard, countdown, finance and admin tables
use super::require_admin;
use crate::error::AppResult;
use crate::models::{Rental, RentalId, RentalStatus, Totals};
use crate::state::SharedState;
use crate::utils::{format_countdown, format_rupiah};
use chrono::{DateTime, Local, NaiveDate, Utc};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RentalRow {
    pub id: RentalId,
    pub customer_name: String,
    pub item_type: String,
    pub duration_days: u32,
    pub price: String,
    pub payment_method: &'static str,
    pub status: RentalStatus,
}

impl From<&Rental> for RentalRow {
    fn from(rental: &Rental) -> Self {
        Self {
            id: rental.id,
            customer_name: rental.customer_name.clone(),
            item_type: rental.item_type.clone(),
            duration_days: rental.duration_days,
            price: format_rupiah(rental.price),
            payment_method: rental.payment_method.label(),
            status: rental.status,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardView {
    pub totals: Totals,
    pub recent: Vec<RentalRow>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CountdownRow {
    pub id: RentalId,
    pub customer_name: String,
    pub item_type: String,
    pub duration_days: u32,
    pub seconds_remaining: u64,
    pub countdown: String,
    pub expired: bool,
    pub status: RentalStatus,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TransactionRow {
    pub id: RentalId,
    pub customer_name: String,
    pub item_type: String,
    pub duration_days: u32,
    pub price: String,
    pub payment_method: &'static str,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FinanceView {
    pub totals: Totals,
    pub transactions: Vec<TransactionRow>,
}

fn local_date(instant: DateTime<Utc>) -> NaiveDate {
    instant.with_timezone(&Local).date_naive()
}

/// Totals plus the `limit` newest rentals
pub fn get_dashboard(state: &SharedState, limit: usize) -> DashboardView {
    let guard = state.lock();
    DashboardView {
        totals: guard.totals(),
        recent: guard.rentals().iter().take(limit).map(RentalRow::from).collect(),
    }
}

pub fn get_countdowns(state: &SharedState) -> Vec<CountdownRow> {
    let guard = state.lock();
    let now = guard.now();
    guard
        .rentals()
        .iter()
        .map(|rental| {
            let left = rental.seconds_remaining(now);
            CountdownRow {
                id: rental.id,
                customer_name: rental.customer_name.clone(),
                item_type: rental.item_type.clone(),
                duration_days: rental.duration_days,
                seconds_remaining: left,
                countdown: format_countdown(left),
                expired: left == 0,
                status: rental.status,
            }
        })
        .collect()
}

/// Finance page (admin only)
pub fn get_finance(state: &SharedState) -> AppResult<FinanceView> {
    let guard = state.lock();
    require_admin(&guard, "view finance")?;

    let transactions = guard
        .rentals()
        .iter()
        .map(|rental| TransactionRow {
            id: rental.id,
            customer_name: rental.customer_name.clone(),
            item_type: rental.item_type.clone(),
            duration_days: rental.duration_days,
            price: format_rupiah(rental.price),
            payment_method: rental.payment_method.label(),
            start_date: local_date(rental.start),
            end_date: local_date(rental.end()),
        })
        .collect();

    Ok(FinanceView {
        totals: guard.totals(),
        transactions,
    })
}

/// Admin panel table (admin only)
pub fn get_admin_table(state: &SharedState) -> AppResult<Vec<RentalRow>> {
    let guard = state.lock();
    require_admin(&guard, "view admin panel")?;
    Ok(guard.rentals().iter().map(RentalRow::from).collect())
}
