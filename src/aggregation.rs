// Dashboard totals, recomputed from scratch on every tick and mutation
use crate::models::{PaymentMethod, Rental, Totals};
use chrono::{DateTime, Utc};

pub fn compute_totals(rentals: &[Rental], now: DateTime<Utc>) -> Totals {
    rentals.iter().fold(Totals::default(), |mut totals, rental| {
        totals.total_revenue = totals.total_revenue.saturating_add(rental.price);
        match rental.payment_method {
            PaymentMethod::Cash => {
                totals.cash_revenue = totals.cash_revenue.saturating_add(rental.price)
            }
            PaymentMethod::Transfer => {
                totals.transfer_revenue = totals.transfer_revenue.saturating_add(rental.price)
            }
        }
        if rental.is_active(now) {
            totals.active_count += 1;
        }
        totals
    })
}
