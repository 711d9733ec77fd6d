use std::sync::Mutex;

use anyhow::{Context, Result};
use keyring::Entry;
use tracing::warn;

const SERVICE_NAME: &str = "careportal";

/// Key under which the bearer token is stored. One opaque string, no schema.
const TOKEN_KEY: &str = "api-token";

/// Persisted credential backing store.
///
/// Exactly one opaque bearer-token string lives behind this trait. It is the
/// only way the rest of the application can touch the persisted credential;
/// every implementation is owned by the session store, which keeps the
/// "token present implies authenticated" bookkeeping in one place.
pub trait CredentialStore {
    /// Read the stored token, if any.
    fn load(&self) -> Result<Option<String>>;

    /// Persist the token, replacing any previous one.
    fn store(&self, token: &str) -> Result<()>;

    /// Remove the stored token. Removing an absent token is not an error.
    fn clear(&self) -> Result<()>;
}

/// Token storage in the OS keychain via `keyring`.
pub struct KeyringStore;

impl KeyringStore {
    fn entry() -> Result<Entry> {
        Entry::new(SERVICE_NAME, TOKEN_KEY).context("Failed to create keyring entry")
    }

    /// Check whether the OS keychain is usable on this system.
    pub fn available() -> bool {
        match Entry::new(SERVICE_NAME, TOKEN_KEY) {
            Ok(entry) => !matches!(entry.get_password(), Err(keyring::Error::PlatformFailure(_))),
            Err(e) => {
                warn!(error = %e, "OS keychain unavailable");
                false
            }
        }
    }
}

impl CredentialStore for KeyringStore {
    fn load(&self) -> Result<Option<String>> {
        match Self::entry()?.get_password() {
            Ok(token) => Ok(Some(token)),
            Err(keyring::Error::NoEntry) => Ok(None),
            Err(e) => Err(e).context("Failed to read token from keychain"),
        }
    }

    fn store(&self, token: &str) -> Result<()> {
        Self::entry()?
            .set_password(token)
            .context("Failed to store token in keychain")
    }

    fn clear(&self) -> Result<()> {
        match Self::entry()?.delete_credential() {
            Ok(()) | Err(keyring::Error::NoEntry) => Ok(()),
            Err(e) => Err(e).context("Failed to delete token from keychain"),
        }
    }
}

/// In-memory token storage. Used when the OS keychain is unavailable
/// (the session then lasts only as long as the process) and by tests
/// that need isolated stores.
#[derive(Default)]
pub struct MemoryStore {
    token: Mutex<Option<String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Construct a store pre-seeded with a token.
    #[cfg(test)]
    pub fn with_token(token: &str) -> Self {
        Self {
            token: Mutex::new(Some(token.to_string())),
        }
    }
}

impl CredentialStore for MemoryStore {
    fn load(&self) -> Result<Option<String>> {
        Ok(self.token.lock().unwrap_or_else(|e| e.into_inner()).clone())
    }

    fn store(&self, token: &str) -> Result<()> {
        *self.token.lock().unwrap_or_else(|e| e.into_inner()) = Some(token.to_string());
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        *self.token.lock().unwrap_or_else(|e| e.into_inner()) = None;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store_round_trip() {
        let store = MemoryStore::new();
        assert_eq!(store.load().unwrap(), None);

        store.store("abc123").unwrap();
        assert_eq!(store.load().unwrap().as_deref(), Some("abc123"));

        store.store("def456").unwrap();
        assert_eq!(store.load().unwrap().as_deref(), Some("def456"));
    }

    #[test]
    fn test_memory_store_clear_is_idempotent() {
        let store = MemoryStore::with_token("abc123");
        store.clear().unwrap();
        assert_eq!(store.load().unwrap(), None);
        // Clearing an already-empty store succeeds
        store.clear().unwrap();
        assert_eq!(store.load().unwrap(), None);
    }
}
