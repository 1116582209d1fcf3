//! Admin session gate.
//!
//! One hardcoded credential pair, compared byte for byte. No hashing,
//! lockout or expiry: this only hides the admin pages of a single-operator
//! dashboard and is not a security boundary.

const ADMIN_USERNAME: &str = "Bagas";
const ADMIN_PASSWORD: &str = "9087";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionGate {
    authenticated: bool,
}

impl SessionGate {
    pub fn new(authenticated: bool) -> Self {
        Self { authenticated }
    }

    pub fn is_authenticated(&self) -> bool {
        self.authenticated
    }

    /// Exact, case-sensitive match only. A failed attempt leaves the
    /// current state as it was.
    pub fn login(&mut self, username: &str, password: &str) -> bool {
        if username == ADMIN_USERNAME && password == ADMIN_PASSWORD {
            self.authenticated = true;
            true
        } else {
            false
        }
    }

    pub fn logout(&mut self) {
        self.authenticated = false;
    }
}
