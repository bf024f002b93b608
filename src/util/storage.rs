//! localStorage access for the auth demo.
//!
//! Reads the registered-user list and the current session from the
//! browser's local storage. Missing or malformed content is treated as an
//! empty list / absent session rather than an error, and writes that fail
//! (storage disabled, quota) degrade silently. Requires a browser
//! environment; without the `csr` feature everything is empty.

use crate::state::auth::{Session, UserRecord};

#[cfg(feature = "csr")]
use crate::state::auth::{SESSION_KEY, USERS_KEY};

/// Read the registered-user list. Malformed JSON yields an empty list.
pub fn load_users() -> Vec<UserRecord> {
    #[cfg(feature = "csr")]
    {
        read_item(USERS_KEY).map_or_else(Vec::new, |raw| {
            serde_json::from_str(&raw).unwrap_or_default()
        })
    }
    #[cfg(not(feature = "csr"))]
    {
        Vec::new()
    }
}

/// Persist the registered-user list.
pub fn save_users(users: &[UserRecord]) {
    #[cfg(feature = "csr")]
    {
        if let Ok(json) = serde_json::to_string(users) {
            write_item(USERS_KEY, &json);
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = users;
    }
}

/// Read the current-session record, if any.
pub fn load_session() -> Option<Session> {
    #[cfg(feature = "csr")]
    {
        read_item(SESSION_KEY).and_then(|raw| serde_json::from_str(&raw).ok())
    }
    #[cfg(not(feature = "csr"))]
    {
        None
    }
}

/// Persist the current-session record.
pub fn save_session(session: &Session) {
    #[cfg(feature = "csr")]
    {
        if let Ok(json) = serde_json::to_string(session) {
            write_item(SESSION_KEY, &json);
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = session;
    }
}

/// Remove the current-session record.
pub fn clear_session() {
    #[cfg(feature = "csr")]
    {
        if let Ok(Some(storage)) = web_sys::window().map_or(Ok(None), |w| w.local_storage()) {
            let _ = storage.remove_item(SESSION_KEY);
        }
    }
}

#[cfg(feature = "csr")]
fn read_item(key: &str) -> Option<String> {
    let window = web_sys::window()?;
    if let Ok(Some(storage)) = window.local_storage() {
        if let Ok(value) = storage.get_item(key) {
            return value;
        }
    }
    None
}

#[cfg(feature = "csr")]
fn write_item(key: &str, value: &str) {
    if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            let _ = storage.set_item(key, value);
        }
    }
}
