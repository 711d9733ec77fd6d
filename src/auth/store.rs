//! The session store: single source of truth for "is this client
//! authenticated".
//!
//! Screens never touch the credential backing store directly. They read
//! [`Session`] snapshots (or subscribe to changes via a watch channel) and
//! mutate state only through [`SessionStore::login`] and
//! [`SessionStore::logout`]. The store is dependency-injected with its
//! backing store so tests construct isolated instances.

use tokio::sync::watch;
use tracing::{debug, warn};

use super::credentials::CredentialStore;

/// Immutable snapshot of the authentication state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    /// Whether this client currently holds a credential.
    pub authenticated: bool,
    /// Account email, once known. Left unresolved after a cold start until
    /// the profile screen fetches it from `/users/me`.
    pub email: Option<String>,
    /// True until the one-time startup credential check has completed.
    /// While set, `authenticated == false` is not a final answer and must
    /// not trigger a redirect.
    pub checking: bool,
}

impl Session {
    /// State at process start, before the credential check has run.
    fn startup() -> Self {
        Self {
            authenticated: false,
            email: None,
            checking: true,
        }
    }

    /// State after a logout (and the shape `startup` settles into when no
    /// credential is found).
    fn signed_out() -> Self {
        Self {
            authenticated: false,
            email: None,
            checking: false,
        }
    }
}

/// What `initialize` does with a persisted token.
///
/// The only implemented policy trusts presence: a stored token means the
/// user is logged in, with no network round-trip at startup. Stale tokens
/// are detected lazily, as a 401 from the first protected call. An eager
/// variant that validates against `/users/me` at startup would trade
/// startup latency for earlier detection; nothing else in the store would
/// change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StartupPolicy {
    #[default]
    TrustTokenPresence,
}

/// A token that is empty, all-whitespace, or contains control characters
/// cannot be a bearer token the API issued; treat it like no token at all.
pub fn token_is_well_formed(token: &str) -> bool {
    !token.trim().is_empty() && !token.chars().any(char::is_control)
}

pub struct SessionStore {
    creds: Box<dyn CredentialStore>,
    policy: StartupPolicy,
    tx: watch::Sender<Session>,
}

impl SessionStore {
    pub fn new(creds: Box<dyn CredentialStore>) -> Self {
        Self::with_policy(creds, StartupPolicy::default())
    }

    pub fn with_policy(creds: Box<dyn CredentialStore>, policy: StartupPolicy) -> Self {
        let (tx, _rx) = watch::channel(Session::startup());
        Self { creds, policy, tx }
    }

    /// Run the one-time startup credential check.
    ///
    /// Reads the backing store; a well-formed token flips `authenticated`
    /// on (email stays unresolved). Always ends with `checking = false`,
    /// whatever happens. Makes no network call. Idempotent: a second call
    /// over the same backing-store content lands in the same state.
    pub fn initialize(&self) {
        let token = match self.creds.load() {
            Ok(token) => token,
            Err(e) => {
                warn!(error = %e, "Failed to read credential store, treating as signed out");
                None
            }
        };

        let authenticated = match self.policy {
            StartupPolicy::TrustTokenPresence => {
                token.as_deref().map(token_is_well_formed).unwrap_or(false)
            }
        };
        debug!(authenticated, "Startup credential check complete");

        self.tx.send_modify(|session| {
            session.authenticated = authenticated;
            if !authenticated {
                session.email = None;
            }
            session.checking = false;
        });
    }

    /// Record a successful login: persist the token and publish the
    /// authenticated snapshot. Only called with the token from a
    /// successful login response; an empty token is refused.
    pub fn login(&self, token: &str, email: &str) {
        debug_assert!(token_is_well_formed(token), "login requires a real token");
        if !token_is_well_formed(token) {
            warn!("Refusing to store a malformed token");
            return;
        }

        // Persist first so `authenticated == true` never races ahead of the
        // backing store. A write failure leaves an in-memory-only session
        // that lasts until the process exits.
        if let Err(e) = self.creds.store(token) {
            warn!(error = %e, "Failed to persist token; session will not survive restart");
        }

        self.tx.send_replace(Session {
            authenticated: true,
            email: Some(email.to_string()),
            checking: false,
        });
    }

    /// Discard the session: remove the persisted token and reset the
    /// snapshot in a single publish, so no observer sees one cleared
    /// without the other. Never fails from the caller's point of view.
    pub fn logout(&self) {
        if let Err(e) = self.creds.clear() {
            warn!(error = %e, "Failed to clear credential store during logout");
        }
        self.tx.send_replace(Session::signed_out());
    }

    /// Publish the identity resolved lazily via `/users/me`.
    pub fn set_email(&self, email: &str) {
        self.tx.send_modify(|session| {
            session.email = Some(email.to_string());
        });
    }

    /// The stored bearer token, if a well-formed one exists. This is the
    /// sanctioned path for handing the token to the API client; nothing
    /// else reads the backing store.
    pub fn token(&self) -> Option<String> {
        self.creds
            .load()
            .ok()
            .flatten()
            .filter(|t| token_is_well_formed(t))
    }

    /// Owned copy of the current snapshot.
    pub fn snapshot(&self) -> Session {
        self.tx.borrow().clone()
    }

    /// Subscribe to snapshot changes. Every mutation is published, so a
    /// consumer re-reads whenever the receiver reports a change.
    pub fn subscribe(&self) -> watch::Receiver<Session> {
        self.tx.subscribe()
    }
}
