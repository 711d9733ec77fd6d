//! Authentication module: session state and credential storage.
//!
//! This module provides:
//! - `SessionStore`: the single source of truth for "is this client
//!   authenticated", with a watch-channel subscription interface
//! - `CredentialStore`: the only access path to the persisted bearer token,
//!   with keychain-backed and in-memory implementations

pub mod credentials;
pub mod store;

pub use credentials::{CredentialStore, KeyringStore, MemoryStore};
pub use store::{Session, SessionStore, StartupPolicy};
