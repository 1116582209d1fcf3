// In-memory rental list, newest first
use super::id::IdGenerator;
use crate::error::{AppError, AppResult};
use crate::models::coerce::parse_amount;
use crate::models::{
    days_for_label, PaymentMethod, Rental, RentalId, RentalInput, RentalPatch, RentalStatus,
};
use chrono::{DateTime, Utc};
use log::debug;

#[derive(Debug, Clone, Default)]
pub struct RentalRepository {
    rentals: Vec<Rental>,
    ids: IdGenerator,
}

impl RentalRepository {
    /// Wrap a previously persisted list (already newest first)
    pub fn new(rentals: Vec<Rental>) -> Self {
        let ids = IdGenerator::seeded(rentals.iter().map(|r| r.id));
        Self { rentals, ids }
    }

    pub fn list(&self) -> &[Rental] {
        &self.rentals
    }

    pub fn get(&self, id: RentalId) -> Option<&Rental> {
        self.rentals.iter().find(|r| r.id == id)
    }

    pub fn len(&self) -> usize {
        self.rentals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rentals.is_empty()
    }

    /// Create a rental from form input and put it at the front of the list.
    ///
    /// Name, item type and price are required; nothing is created when one
    /// is blank. Price and duration that are missing or do not parse become
    /// 0; a duration may also be given as a preset label ("1 Bulan").
    pub fn add(&mut self, input: RentalInput, now: DateTime<Utc>) -> AppResult<Rental> {
        if input.customer_name.trim().is_empty() {
            return Err(AppError::MissingField("nama"));
        }
        if input.item_type.trim().is_empty() {
            return Err(AppError::MissingField("jenis"));
        }
        let price = match input.price.as_deref().map(str::trim) {
            Some(text) if !text.is_empty() => parse_amount(text),
            _ => return Err(AppError::MissingField("harga")),
        };
        let duration_days = input.duration_days.as_deref().map(parse_duration).unwrap_or(0);

        let rental = Rental {
            id: self.ids.next(now),
            customer_name: input.customer_name,
            item_type: input.item_type,
            contact: input.contact.unwrap_or_default(),
            price,
            payment_method: input.payment_method.unwrap_or(PaymentMethod::Cash),
            duration_days,
            start: now,
            status: RentalStatus::Normal,
        };

        self.rentals.insert(0, rental.clone());
        Ok(rental)
    }

    /// Merge `patch` into the matching rental. Returns false (and changes
    /// nothing) for an unknown id.
    pub fn update(&mut self, id: RentalId, patch: RentalPatch) -> bool {
        match self.rentals.iter_mut().find(|r| r.id == id) {
            Some(rental) => {
                patch.apply(rental);
                true
            }
            None => {
                debug!("Ignoring update for unknown rental {}", id);
                false
            }
        }
    }

    /// Remove the matching rental; unknown ids are a no-op
    pub fn delete(&mut self, id: RentalId) -> bool {
        let before = self.rentals.len();
        self.rentals.retain(|r| r.id != id);
        before != self.rentals.len()
    }

    /// Mark every rental whose window has closed as expired, whatever its
    /// current status. Returns how many records changed.
    pub fn recompute_expiry(&mut self, now: DateTime<Utc>) -> usize {
        let mut changed = 0;
        for rental in self
            .rentals
            .iter_mut()
            .filter(|r| r.status != RentalStatus::Expired)
        {
            if rental.seconds_remaining(now) == 0 {
                rental.status = RentalStatus::Expired;
                changed += 1;
            }
        }
        changed
    }
}

fn parse_duration(text: &str) -> u32 {
    days_for_label(text).unwrap_or_else(|| parse_amount(text).min(u64::from(u32::MAX)) as u32)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 10, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_add_builds_normal_rental() {
        let mut repo = RentalRepository::default();
        let rental = repo
            .add(RentalInput::new("Sinta", "Netflix", "50000").duration_days(3), now())
            .unwrap();

        assert_eq!(rental.price, 50000);
        assert_eq!(rental.duration_days, 3);
        assert_eq!(rental.payment_method, PaymentMethod::Cash);
        assert_eq!(rental.status, RentalStatus::Normal);
        assert_eq!(rental.start, now());
        assert_eq!(rental.contact, "");
        assert_eq!(repo.len(), 1);
    }

    #[test]
    fn test_add_prepends() {
        let mut repo = RentalRepository::default();
        let first = repo.add(RentalInput::new("A", "Netflix", 1), now()).unwrap();
        let second = repo.add(RentalInput::new("B", "Spotify", 2), now()).unwrap();

        assert!(second.id > first.id);
        let ids: Vec<_> = repo.list().iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![second.id, first.id]);
    }

    #[test]
    fn test_add_requires_fields() {
        let mut repo = RentalRepository::default();

        let err = repo.add(RentalInput::new("", "Netflix", 1), now()).unwrap_err();
        assert!(matches!(err, AppError::MissingField("nama")));
        let err = repo.add(RentalInput::new(" \t", "Netflix", 1), now()).unwrap_err();
        assert!(matches!(err, AppError::MissingField("nama")));

        let err = repo.add(RentalInput::new("A", "  ", 1), now()).unwrap_err();
        assert!(matches!(err, AppError::MissingField("jenis")));

        let mut input = RentalInput::new("A", "Netflix", 1);
        input.price = Some(String::new());
        let err = repo.add(input, now()).unwrap_err();
        assert!(matches!(err, AppError::MissingField("harga")));

        assert!(repo.is_empty());
    }

    #[test]
    fn test_add_coerces_bad_numbers() {
        let mut repo = RentalRepository::default();
        let rental = repo
            .add(RentalInput::new("A", "Netflix", "lima puluh").duration_days("x"), now())
            .unwrap();
        assert_eq!(rental.price, 0);
        assert_eq!(rental.duration_days, 0);

        let missing = repo.add(RentalInput::new("B", "Netflix", 10), now()).unwrap();
        assert_eq!(missing.duration_days, 0);
        assert!(!missing.is_active(now()));
    }

    #[test]
    fn test_add_accepts_duration_labels() {
        let mut repo = RentalRepository::default();
        let monthly = repo
            .add(RentalInput::new("A", "Netflix", 1).duration_days("1 Bulan"), now())
            .unwrap();
        assert_eq!(monthly.duration_days, 30);

        let yearly = repo
            .add(RentalInput::new("B", "Spotify", 1).duration_days(" 2 tahun "), now())
            .unwrap();
        assert_eq!(yearly.duration_days, 730);

        let numeric = repo.add(RentalInput::new("C", "Canva", 1).duration_days("45"), now()).unwrap();
        assert_eq!(numeric.duration_days, 45);
    }

    #[test]
    fn test_update_and_delete_unknown_ids() {
        let mut repo = RentalRepository::default();
        let rental = repo.add(RentalInput::new("A", "Netflix", 1), now()).unwrap();

        assert!(!repo.update(rental.id + 1, RentalPatch::status(RentalStatus::UnderRepair)));
        assert!(!repo.delete(rental.id + 1));
        assert_eq!(repo.len(), 1);

        assert!(repo.update(rental.id, RentalPatch::status(RentalStatus::UnderRepair)));
        assert_eq!(repo.get(rental.id).unwrap().status, RentalStatus::UnderRepair);

        assert!(repo.delete(rental.id));
        assert!(!repo.delete(rental.id));
        assert!(repo.is_empty());
    }

    #[test]
    fn test_recompute_expiry_overrides_repair_and_is_idempotent() {
        let mut repo = RentalRepository::default();
        let short = repo.add(RentalInput::new("A", "Netflix", 1).duration_days(1), now()).unwrap();
        let long = repo.add(RentalInput::new("B", "Spotify", 1).duration_days(30), now()).unwrap();
        repo.update(short.id, RentalPatch::status(RentalStatus::UnderRepair));

        let later = now() + Duration::days(1) + Duration::seconds(1);
        assert_eq!(repo.recompute_expiry(later), 1);
        let once = repo.list().to_vec();

        assert_eq!(repo.recompute_expiry(later), 0);
        assert_eq!(repo.list(), once.as_slice());

        assert_eq!(repo.get(short.id).unwrap().status, RentalStatus::Expired);
        assert_eq!(repo.get(long.id).unwrap().status, RentalStatus::Normal);
    }

    #[test]
    fn test_recompute_expiry_at_exact_end() {
        let mut repo = RentalRepository::default();
        let rental = repo.add(RentalInput::new("A", "Netflix", 1).duration_days(1), now()).unwrap();

        assert_eq!(repo.recompute_expiry(now() + Duration::seconds(86399)), 0);
        assert_eq!(repo.recompute_expiry(rental.end()), 1);
    }

    #[test]
    fn test_new_seeds_ids_from_loaded_records() {
        let mut repo = RentalRepository::default();
        let rental = repo.add(RentalInput::new("A", "Netflix", 1), now()).unwrap();

        let mut reloaded = RentalRepository::new(repo.list().to_vec());
        let next = reloaded
            .add(RentalInput::new("B", "Netflix", 1), now() - Duration::hours(1))
            .unwrap();
        assert!(next.id > rental.id);
    }
}
