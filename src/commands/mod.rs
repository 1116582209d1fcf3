// Command handlers - one file per domain
//
// These are the actions the dashboard pages invoke. Anything that changes
// rentals or posts announcements requires the admin session.
pub mod auth;
pub mod infos;
pub mod rentals;
pub mod settings;
pub mod views;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

fn require_admin(state: &AppState, action: &'static str) -> AppResult<()> {
    if state.is_authenticated() {
        Ok(())
    } else {
        Err(AppError::Unauthorized(action))
    }
}
