//! Login/register demo records.
//!
//! Explicitly a front-end demo, not a security boundary: records live in
//! localStorage in the clear, there is no hashing, no token, no expiry.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use serde::{Deserialize, Serialize};

/// localStorage key holding the JSON array of registered users.
pub const USERS_KEY: &str = "murn_users";
/// localStorage key holding the current-session record.
pub const SESSION_KEY: &str = "murn_current";

/// A registered user as stored in localStorage.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// The non-authoritative "currently logged in" marker.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub name: String,
    pub email: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RegisterOutcome {
    Registered,
    EmptyField,
    AlreadyRegistered,
}

/// Register a new user, enforcing the unique-email invariant.
///
/// Appends to `users` only on success; the caller persists the list.
pub fn register(
    users: &mut Vec<UserRecord>,
    name: &str,
    email: &str,
    password: &str,
) -> RegisterOutcome {
    let name = name.trim();
    let email = email.trim();
    if name.is_empty() || email.is_empty() || password.is_empty() {
        return RegisterOutcome::EmptyField;
    }
    if users.iter().any(|u| u.email == email) {
        return RegisterOutcome::AlreadyRegistered;
    }
    users.push(UserRecord {
        name: name.to_owned(),
        email: email.to_owned(),
        password: password.to_owned(),
    });
    RegisterOutcome::Registered
}

/// Look up a record matching both email and password exactly.
pub fn login(users: &[UserRecord], email: &str, password: &str) -> Option<Session> {
    let email = email.trim();
    users
        .iter()
        .find(|u| u.email == email && u.password == password)
        .map(|u| Session { name: u.name.clone(), email: u.email.clone() })
}
