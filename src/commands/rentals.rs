// Rental command handlers
use super::require_admin;
use crate::error::AppResult;
use crate::models::{
    DurationOption, Rental, RentalId, RentalInput, RentalPatch, RentalStatus,
    DEFAULT_DURATION_DAYS, DURATION_OPTIONS,
};
use crate::state::SharedState;

/// "Input Data": record a new rental
pub fn add_rental(state: &SharedState, input: RentalInput) -> AppResult<Rental> {
    let mut guard = state.lock();
    require_admin(&guard, "add rental")?;
    guard.add_rental(input)
}

/// Returns `Ok(false)` when no rental has this id
pub fn update_rental(state: &SharedState, id: RentalId, patch: RentalPatch) -> AppResult<bool> {
    let mut guard = state.lock();
    require_admin(&guard, "update rental")?;
    Ok(guard.update_rental(id, patch))
}

/// Status dropdown on the countdown and admin pages
pub fn set_rental_status(
    state: &SharedState,
    id: RentalId,
    status: RentalStatus,
) -> AppResult<bool> {
    update_rental(state, id, RentalPatch::status(status))
}

pub fn delete_rental(state: &SharedState, id: RentalId) -> AppResult<bool> {
    let mut guard = state.lock();
    require_admin(&guard, "delete rental")?;
    Ok(guard.delete_rental(id))
}

pub fn list_rentals(state: &SharedState) -> Vec<Rental> {
    state.lock().rentals().to_vec()
}

pub fn get_duration_options() -> Vec<DurationOption> {
    DURATION_OPTIONS.to_vec()
}

/// Fresh "Input Data" form with the preselected duration filled in
pub fn new_rental_form() -> RentalInput {
    RentalInput {
        duration_days: Some(DEFAULT_DURATION_DAYS.to_string()),
        ..Default::default()
    }
}
