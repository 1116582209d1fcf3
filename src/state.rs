// Process-wide application state: collections, session flag, persistence port
use crate::aggregation::compute_totals;
use crate::error::AppResult;
use crate::models::{Info, InfoId, Rental, RentalId, RentalInput, RentalPatch, Reply, Totals};
use crate::repository::{InfoBoard, RentalRepository};
use crate::session::SessionGate;
use crate::storage::{
    load_list_or_default, load_or_default, save_value, KeyValueStore, INFOS_KEY, LOGGED_IN_KEY, RENTALS_KEY,
};
use crate::utils::{format_rupiah, Clock};
use chrono::{DateTime, Utc};
use log::{debug, info, warn};
use parking_lot::Mutex;
use serde::Serialize;
use std::sync::Arc;

pub type SharedState = Arc<Mutex<AppState>>;

pub struct AppState {
    rentals: RentalRepository,
    infos: InfoBoard,
    session: SessionGate,
    store: Arc<dyn KeyValueStore>,
    clock: Arc<dyn Clock>,
}

impl AppState {
    /// Restore the last snapshot from `store`. Missing or corrupt entries
    /// start out empty (or logged out); unreadable records inside a list
    /// are dropped one by one.
    pub fn load(store: Arc<dyn KeyValueStore>, clock: Arc<dyn Clock>) -> Self {
        let rentals: Vec<Rental> = load_list_or_default(store.as_ref(), RENTALS_KEY);
        let infos: Vec<Info> = load_list_or_default(store.as_ref(), INFOS_KEY);
        let logged_in: bool = load_or_default(store.as_ref(), LOGGED_IN_KEY);

        debug!(
            "Loaded {} rentals, {} infos, logged_in={}",
            rentals.len(),
            infos.len(),
            logged_in
        );

        Self {
            rentals: RentalRepository::new(rentals),
            infos: InfoBoard::new(infos),
            session: SessionGate::new(logged_in),
            store,
            clock,
        }
    }

    pub fn into_shared(self) -> SharedState {
        Arc::new(Mutex::new(self))
    }

    pub fn now(&self) -> DateTime<Utc> {
        self.clock.now()
    }

    pub fn rentals(&self) -> &[Rental] {
        self.rentals.list()
    }

    pub fn rental(&self, id: RentalId) -> Option<&Rental> {
        self.rentals.get(id)
    }

    pub fn infos(&self) -> &[Info] {
        self.infos.list()
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.is_authenticated()
    }

    pub fn totals(&self) -> Totals {
        compute_totals(self.rentals.list(), self.now())
    }

    /// Record a new rental and announce it on the info board
    pub fn add_rental(&mut self, input: RentalInput) -> AppResult<Rental> {
        let now = self.now();
        let rental = self.rentals.add(input, now)?;

        let text = format!(
            "Rental baru: {} ({}) senilai {}.",
            rental.customer_name,
            rental.item_type,
            format_rupiah(rental.price)
        );
        self.infos.post(&text, now);

        info!("Added rental {} for {}", rental.id, rental.customer_name);
        self.persist(RENTALS_KEY, self.rentals.list());
        self.persist(INFOS_KEY, self.infos.list());
        Ok(rental)
    }

    pub fn update_rental(&mut self, id: RentalId, patch: RentalPatch) -> bool {
        let updated = self.rentals.update(id, patch);
        if updated {
            info!("Updated rental {}", id);
            self.persist(RENTALS_KEY, self.rentals.list());
        }
        updated
    }

    pub fn delete_rental(&mut self, id: RentalId) -> bool {
        let deleted = self.rentals.delete(id);
        if deleted {
            info!("Deleted rental {}", id);
            self.persist(RENTALS_KEY, self.rentals.list());
        }
        deleted
    }

    /// Force every rental whose window has closed at `now` to expired
    pub fn recompute_expiry(&mut self, now: DateTime<Utc>) -> usize {
        let changed = self.rentals.recompute_expiry(now);
        if changed > 0 {
            info!("{} rental(s) expired", changed);
            self.persist(RENTALS_KEY, self.rentals.list());
        }
        changed
    }

    /// One periodic pass: expire what has run out, then re-aggregate
    pub fn tick(&mut self) -> Totals {
        let now = self.now();
        self.recompute_expiry(now);
        compute_totals(self.rentals.list(), now)
    }

    pub fn post_info(&mut self, text: &str) -> Option<Info> {
        let posted = self.infos.post(text, self.now());
        if posted.is_some() {
            self.persist(INFOS_KEY, self.infos.list());
        }
        posted
    }

    pub fn reply_info(&mut self, info_id: InfoId, text: &str) -> Option<Reply> {
        let reply = self.infos.reply(info_id, text, self.now());
        if reply.is_some() {
            self.persist(INFOS_KEY, self.infos.list());
        }
        reply
    }

    pub fn login(&mut self, username: &str, password: &str) -> bool {
        let ok = self.session.login(username, password);
        if ok {
            info!("Admin logged in");
            self.persist(LOGGED_IN_KEY, &true);
        } else {
            warn!("Rejected login attempt for {:?}", username);
        }
        ok
    }

    pub fn logout(&mut self) {
        self.session.logout();
        info!("Admin logged out");
        self.persist(LOGGED_IN_KEY, &false);
    }

    // Whole-value write; a failure is logged and the in-memory change stands
    fn persist<T: Serialize + ?Sized>(&self, key: &str, value: &T) {
        if let Err(e) = save_value(self.store.as_ref(), key, &value) {
            warn!("Failed to persist {}: {}", key, e);
        }
    }
}
