//! Browser localStorage persistence for the session token.
//!
//! SYSTEM CONTEXT
//! ==============
//! The token is the only durable client-side state in the application. This
//! module centralizes the hydrate-only read/write behavior so session code
//! never repeats web-sys glue. Storage never evicts an expired token; expiry
//! is the API's problem.

/// The single localStorage key the application persists.
#[cfg(feature = "hydrate")]
const STORAGE_KEY: &str = "token";

/// Load the persisted session token, if any.
pub fn load() -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten())?;
        storage.get_item(STORAGE_KEY).ok().flatten()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Persist `token`, replacing any previous value.
pub fn save(token: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
            let _ = storage.set_item(STORAGE_KEY, token);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = token;
    }
}

/// Remove the persisted token. Safe to call when nothing is stored.
pub fn clear() {
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
            let _ = storage.remove_item(STORAGE_KEY);
        }
    }
}
