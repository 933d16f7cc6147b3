//! Session token persistence in `localStorage`.
//!
//! TRADE-OFFS
//! ==========
//! Persistence is best-effort browser-only behavior; SSR paths no-op so the
//! server always renders the pending (unknown) session state and hydration
//! stays deterministic.

#[cfg(test)]
#[path = "token_storage_test.rs"]
mod token_storage_test;

#[cfg(feature = "hydrate")]
const STORAGE_KEY: &str = "mcdash_session_token";

#[cfg(feature = "hydrate")]
fn storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

/// Read the stored session token, ignoring blank values.
pub fn read() -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        let value = storage()?.get_item(STORAGE_KEY).ok().flatten()?;
        normalize(&value)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Persist the session token for later visits.
pub fn write(token: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = storage() {
            let _ = storage.set_item(STORAGE_KEY, token);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = token;
    }
}

/// Remove the stored session token.
pub fn clear() {
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = storage() {
            let _ = storage.remove_item(STORAGE_KEY);
        }
    }
}

#[cfg(any(test, feature = "hydrate"))]
fn normalize(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_owned())
}
