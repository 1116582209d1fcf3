// Admin login command handlers
use crate::error::{AppError, AppResult};
use crate::state::SharedState;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AuthStatus {
    pub is_authenticated: bool,
}

pub fn login(state: &SharedState, username: &str, password: &str) -> AppResult<AuthStatus> {
    if state.lock().login(username, password) {
        Ok(AuthStatus {
            is_authenticated: true,
        })
    } else {
        Err(AppError::InvalidCredentials)
    }
}

pub fn logout(state: &SharedState) -> AuthStatus {
    state.lock().logout();
    AuthStatus {
        is_authenticated: false,
    }
}

pub fn get_auth_status(state: &SharedState) -> AuthStatus {
    AuthStatus {
        is_authenticated: state.lock().is_authenticated(),
    }
}
