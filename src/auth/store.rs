//! Durable persistence for the session token + profile pair.
//!
//! Two opaque key–value entries in browser localStorage. The trait only
//! exposes a paired write and a paired clear, so a token without a profile
//! (or the reverse) can never be produced through it; anything that slips in
//! from outside is classified and discarded by the manager's bootstrap.

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

#[cfg(feature = "hydrate")]
const TOKEN_KEY: &str = "classdesk_token";
#[cfg(feature = "hydrate")]
const PROFILE_KEY: &str = "classdesk_teacher";

/// Storage seam for the session manager.
pub trait SessionStore {
    /// Raw stored values: `(token, serialized profile)`.
    fn read(&self) -> (Option<String>, Option<String>);
    /// Persist both entries together.
    fn write(&self, token: &str, profile_json: &str);
    /// Remove both entries together.
    fn clear(&self);
}

/// Browser localStorage store. Outside a browser (SSR) every operation is a
/// no-op and reads come back empty.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalSessionStore;

#[cfg(feature = "hydrate")]
fn storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

impl SessionStore for LocalSessionStore {
    fn read(&self) -> (Option<String>, Option<String>) {
        #[cfg(feature = "hydrate")]
        {
            let Some(storage) = storage() else {
                return (None, None);
            };
            (
                storage.get_item(TOKEN_KEY).ok().flatten(),
                storage.get_item(PROFILE_KEY).ok().flatten(),
            )
        }
        #[cfg(not(feature = "hydrate"))]
        {
            (None, None)
        }
    }

    fn write(&self, token: &str, profile_json: &str) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(storage) = storage() {
                let _ = storage.set_item(TOKEN_KEY, token);
                let _ = storage.set_item(PROFILE_KEY, profile_json);
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (token, profile_json);
        }
    }

    fn clear(&self) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(storage) = storage() {
                let _ = storage.remove_item(TOKEN_KEY);
                let _ = storage.remove_item(PROFILE_KEY);
            }
        }
    }
}

/// In-memory store for tests and non-browser hosts.
#[derive(Clone, Debug, Default)]
pub struct MemorySessionStore {
    entries: std::sync::Arc<std::sync::Mutex<(Option<String>, Option<String>)>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed raw entries directly, bypassing the paired write. Lets tests
    /// stage the partial or corrupt states bootstrap has to discard.
    pub fn seed(&self, token: Option<&str>, profile_json: Option<&str>) {
        if let Ok(mut entries) = self.entries.lock() {
            *entries = (
                token.map(ToOwned::to_owned),
                profile_json.map(ToOwned::to_owned),
            );
        }
    }

    pub fn is_empty(&self) -> bool {
        self.entries
            .lock()
            .map(|entries| entries.0.is_none() && entries.1.is_none())
            .unwrap_or(true)
    }
}

impl SessionStore for MemorySessionStore {
    fn read(&self) -> (Option<String>, Option<String>) {
        self.entries
            .lock()
            .map(|entries| entries.clone())
            .unwrap_or((None, None))
    }

    fn write(&self, token: &str, profile_json: &str) {
        if let Ok(mut entries) = self.entries.lock() {
            *entries = (Some(token.to_owned()), Some(profile_json.to_owned()));
        }
    }

    fn clear(&self) {
        if let Ok(mut entries) = self.entries.lock() {
            *entries = (None, None);
        }
    }
}
