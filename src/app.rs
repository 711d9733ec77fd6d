//! Application state management for the CarePortal TUI.
//!
//! This module contains the `App` struct tying together the session store,
//! the API client, the current route, and per-screen form state, plus the
//! route gate that keeps the profile screen behind authentication.

use std::time::{Duration, Instant};

use anyhow::Result;
use tracing::{error, info, warn};

use crate::api::{ApiClient, ApiError, LoginResponse, UserProfile};
use crate::auth::{CredentialStore, KeyringStore, MemoryStore, Session, SessionStore};
use crate::config::Config;

// ============================================================================
// Constants
// ============================================================================

/// Maximum length for email input.
/// 254 chars is the RFC 5321 ceiling for an address.
const MAX_EMAIL_LENGTH: usize = 254;

/// Maximum length for password input.
/// 128 chars accommodates password managers and passphrases.
const MAX_PASSWORD_LENGTH: usize = 128;

/// Minimum password length accepted by the signup form.
/// Matches the backend's own minimum so the round trip is not wasted.
const MIN_PASSWORD_LENGTH: usize = 6;

/// Maximum length for a pasted verification link.
const MAX_LINK_LENGTH: usize = 2048;

/// How long the signup success notice is shown before returning to login.
const SIGNUP_REDIRECT_DELAY: Duration = Duration::from_secs(2);

/// Notice shown on the login screen after a forced logout.
const SESSION_EXPIRED_NOTICE: &str = "Session expired. Please log in again.";

// ============================================================================
// Routes and the gate
// ============================================================================

/// Top-level screens
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Login,
    SignUp,
    ConfirmEmail,
    Profile,
}

impl Route {
    /// Get the display title for this screen.
    pub fn title(&self) -> &'static str {
        match self {
            Route::Login => "Log In",
            Route::SignUp => "Create Account",
            Route::ConfirmEmail => "Confirm Email",
            Route::Profile => "Profile",
        }
    }

    /// Whether the screen requires an authenticated session.
    pub fn is_protected(&self) -> bool {
        matches!(self, Route::Profile)
    }
}

/// Outcome of evaluating the route gate for one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateDecision {
    /// Render the screen.
    Allow,
    /// The startup credential check has not finished; show a neutral
    /// loading state and decide nothing.
    Defer,
    /// Not authenticated on a protected screen: hard-redirect to login.
    RedirectToLogin,
}

/// Decide whether `route` is reachable under `session`. Pure function,
/// re-evaluated whenever the session changes. Never redirects while the
/// startup check is still running.
pub fn gate(session: &Session, route: Route) -> GateDecision {
    if !route.is_protected() {
        return GateDecision::Allow;
    }
    if session.checking {
        return GateDecision::Defer;
    }
    if session.authenticated {
        GateDecision::Allow
    } else {
        GateDecision::RedirectToLogin
    }
}

// ============================================================================
// Per-screen state
// ============================================================================

/// Which form element has keyboard focus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldFocus {
    Email,
    Password,
    Submit,
}

impl FieldFocus {
    pub fn next(&self) -> Self {
        match self {
            FieldFocus::Email => FieldFocus::Password,
            FieldFocus::Password => FieldFocus::Submit,
            FieldFocus::Submit => FieldFocus::Email,
        }
    }

    pub fn prev(&self) -> Self {
        match self {
            FieldFocus::Email => FieldFocus::Submit,
            FieldFocus::Password => FieldFocus::Email,
            FieldFocus::Submit => FieldFocus::Password,
        }
    }
}

#[derive(Debug, Default)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
    pub focus: FieldFocus,
    pub error: Option<String>,
    /// Informational banner (post-signup, post-forced-logout)
    pub notice: Option<String>,
}

#[derive(Debug, Default)]
pub struct SignUpForm {
    pub email: String,
    pub password: String,
    pub focus: FieldFocus,
    pub error: Option<String>,
    pub success: Option<String>,
    /// When set, the app returns to the login screen at this instant
    pub redirect_at: Option<Instant>,
}

/// Result of parsing a pasted verification link
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfirmOutcome {
    Verified,
    Invalid(String),
}

#[derive(Debug, Default)]
pub struct ConfirmForm {
    pub link: String,
    pub outcome: Option<ConfirmOutcome>,
}

#[derive(Debug, Default)]
pub struct ProfileView {
    /// An identity fetch is in flight
    pub loading: bool,
    /// The one-per-entry identity fetch has completed (either way)
    pub loaded: bool,
    pub error: Option<String>,
}

/// All per-screen state. Rebuilt wholesale on a hard redirect so nothing
/// tied to the old session survives.
#[derive(Debug)]
pub struct Pages {
    pub login: LoginForm,
    pub signup: SignUpForm,
    pub confirm: ConfirmForm,
    pub profile: ProfileView,
}

impl Pages {
    pub fn new(last_email: Option<String>) -> Self {
        let mut login = LoginForm::default();
        if let Some(email) = last_email {
            login.email = email;
            login.focus = FieldFocus::Password;
        }
        Self {
            login,
            signup: SignUpForm::default(),
            confirm: ConfirmForm::default(),
            profile: ProfileView::default(),
        }
    }
}

impl Default for FieldFocus {
    fn default() -> Self {
        FieldFocus::Email
    }
}

// ============================================================================
// Input validation
// ============================================================================

/// Whether a typed character may be appended to an email field.
pub fn can_add_email_char(current_len: usize, c: char) -> bool {
    current_len < MAX_EMAIL_LENGTH && !c.is_control() && !c.is_whitespace()
}

/// Whether a typed character may be appended to a password field.
pub fn can_add_password_char(current_len: usize, c: char) -> bool {
    current_len < MAX_PASSWORD_LENGTH && !c.is_control()
}

/// Whether a typed character may be appended to the verification-link field.
pub fn can_add_link_char(current_len: usize, c: char) -> bool {
    current_len < MAX_LINK_LENGTH && !c.is_control() && !c.is_whitespace()
}

/// Extract the access token from a verification link. The token rides in
/// the URL fragment (`https://host/confirm#access_token=...&type=signup`),
/// which never reaches any server; the landing page parses it locally.
pub fn extract_confirmation_token(link: &str) -> Option<String> {
    let (_, fragment) = link.split_once('#')?;
    for pair in fragment.split('&') {
        let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
        if key == "access_token" && !value.is_empty() {
            return Some(value.to_string());
        }
    }
    None
}

// ============================================================================
// Main application struct
// ============================================================================

/// Main application state container
pub struct App {
    pub config: Config,
    pub api: ApiClient,
    pub auth: SessionStore,
    pub route: Route,
    pub pages: Pages,
    pub quitting: bool,
}

impl App {
    /// Create a new application instance. The startup credential check
    /// completes here, before the first frame is drawn, so no gate
    /// decision ever runs against an unchecked session.
    pub fn new() -> Result<Self> {
        let config = match Config::load() {
            Ok(c) => c,
            Err(e) => {
                warn!(error = %e, "Failed to load config, using defaults");
                Config::default()
            }
        };

        let creds: Box<dyn CredentialStore> = if KeyringStore::available() {
            Box::new(KeyringStore)
        } else {
            warn!("OS keychain unavailable; session will not survive restart");
            Box::new(MemoryStore::new())
        };

        Self::with_store(config, creds)
    }

    /// Create an application over an explicit credential store.
    pub fn with_store(config: Config, creds: Box<dyn CredentialStore>) -> Result<Self> {
        let mut api = ApiClient::new(config.api_base_url())?;
        let auth = SessionStore::new(creds);
        auth.initialize();

        let session = auth.snapshot();
        if session.authenticated {
            if let Some(token) = auth.token() {
                api.set_token(token);
            }
        }

        let route = if session.authenticated {
            Route::Profile
        } else {
            Route::Login
        };
        info!(authenticated = session.authenticated, "Session check complete");

        Ok(Self {
            pages: Pages::new(config.last_email.clone()),
            config,
            api,
            auth,
            route,
            quitting: false,
        })
    }

    // =========================================================================
    // Navigation
    // =========================================================================

    pub fn navigate(&mut self, route: Route) {
        self.route = route;
    }

    /// The hard redirect: discard every screen's state and land on login.
    /// Used after logout and by the gate, so nothing tied to the old
    /// session can leak into the next one.
    fn hard_redirect_to_login(&mut self, notice: Option<String>) {
        self.pages = Pages::new(self.config.last_email.clone());
        self.pages.login.notice = notice;
        self.route = Route::Login;
    }

    /// Re-evaluate the gate for the current route and act on it.
    pub fn apply_gate(&mut self) {
        if gate(&self.auth.snapshot(), self.route) == GateDecision::RedirectToLogin {
            self.hard_redirect_to_login(None);
        }
    }

    /// Per-frame housekeeping: the signup success redirect timer and the
    /// lazy profile fetch.
    pub async fn tick(&mut self) {
        if self.route == Route::SignUp {
            if let Some(at) = self.pages.signup.redirect_at {
                if Instant::now() >= at {
                    self.pages.signup.redirect_at = None;
                    let notice = self.pages.signup.success.take();
                    self.pages.login.notice = notice;
                    self.navigate(Route::Login);
                }
            }
        }

        if self.route == Route::Profile
            && gate(&self.auth.snapshot(), self.route) == GateDecision::Allow
            && !self.pages.profile.loaded
            && !self.pages.profile.loading
        {
            self.load_profile().await;
        }

        self.apply_gate();
    }

    // =========================================================================
    // Login
    // =========================================================================

    /// Submit the login form. Awaited inline; at most one call in flight.
    pub async fn attempt_login(&mut self) {
        let email = self.pages.login.email.trim().to_string();
        let password = self.pages.login.password.clone();

        if email.is_empty() || password.is_empty() {
            self.pages.login.error = Some("Email and password are required.".to_string());
            return;
        }

        self.pages.login.error = None;
        self.pages.login.notice = None;
        let result = self.api.login(&email, &password).await;
        self.finish_login(email, result);
    }

    /// Apply the outcome of a login call. Split from `attempt_login` so the
    /// outcome handling is testable without a network.
    pub fn finish_login(&mut self, form_email: String, result: Result<LoginResponse, ApiError>) {
        match result {
            Ok(resp) => {
                // Prefer the identity the server echoed back; older
                // deployments omit it, so fall back to the form value.
                let identity = resp.email.unwrap_or(form_email);
                self.auth.login(&resp.access_token, &identity);
                self.api.set_token(resp.access_token);

                self.config.last_email = Some(identity);
                if let Err(e) = self.config.save() {
                    warn!(error = %e, "Failed to save config");
                }

                self.pages.login.password.clear();
                self.pages.profile = ProfileView::default();
                self.navigate(Route::Profile);
                info!("Login successful");
            }
            Err(ApiError::Unauthorized) => {
                self.pages.login.error = Some("Invalid email or password.".to_string());
            }
            Err(e) => {
                error!(error = %e, "Login failed");
                self.pages.login.error = Some(e.user_message());
            }
        }
    }

    // =========================================================================
    // Signup
    // =========================================================================

    pub async fn attempt_signup(&mut self) {
        let email = self.pages.signup.email.trim().to_string();
        let password = self.pages.signup.password.clone();

        if email.is_empty() || password.is_empty() {
            self.pages.signup.error = Some("Email and password are required.".to_string());
            return;
        }
        if password.len() < MIN_PASSWORD_LENGTH {
            self.pages.signup.error = Some(format!(
                "Password must be at least {} characters.",
                MIN_PASSWORD_LENGTH
            ));
            return;
        }

        self.pages.signup.error = None;
        let result = self.api.register(&email, &password).await;
        self.finish_signup(result);
    }

    /// Apply the outcome of a register call. The session store is never
    /// touched here: signing up does not sign you in.
    pub fn finish_signup(&mut self, result: Result<(), ApiError>) {
        match result {
            Ok(()) => {
                self.pages.signup.success = Some(
                    "Account created. Check your email for a verification link.".to_string(),
                );
                self.pages.signup.email.clear();
                self.pages.signup.password.clear();
                self.pages.signup.redirect_at = Some(Instant::now() + SIGNUP_REDIRECT_DELAY);
                info!("Registration successful");
            }
            Err(e) => {
                error!(error = %e, "Registration failed");
                self.pages.signup.error = Some(e.user_message());
            }
        }
    }

    // =========================================================================
    // Email confirmation
    // =========================================================================

    /// Parse the pasted verification link and record the outcome.
    pub fn submit_confirmation_link(&mut self) {
        let outcome = if self.pages.confirm.link.trim().is_empty() {
            ConfirmOutcome::Invalid("No verification link provided.".to_string())
        } else if extract_confirmation_token(&self.pages.confirm.link).is_some() {
            ConfirmOutcome::Verified
        } else {
            ConfirmOutcome::Invalid("No verification token found in that link.".to_string())
        };
        self.pages.confirm.outcome = Some(outcome);
    }

    // =========================================================================
    // Profile
    // =========================================================================

    /// Fetch the identity behind the stored token. This is where a stale
    /// persisted token is finally detected, as a 401.
    pub async fn load_profile(&mut self) {
        self.pages.profile.loading = true;
        let result = self.api.me().await;
        self.finish_profile_load(result);
    }

    /// Apply the outcome of the identity fetch.
    pub fn finish_profile_load(&mut self, result: Result<UserProfile, ApiError>) {
        self.pages.profile.loading = false;
        self.pages.profile.loaded = true;

        match result {
            Ok(profile) => {
                self.auth.set_email(&profile.email);
                self.pages.profile.error = None;
            }
            Err(ApiError::Unauthorized) => {
                warn!("Stored token rejected, forcing logout");
                self.force_logout();
            }
            Err(e) => {
                error!(error = %e, "Failed to load profile");
                self.pages.profile.error = Some(e.user_message());
            }
        }
    }

    /// Allow the user to retry a failed (non-401) identity fetch.
    pub fn retry_profile_load(&mut self) {
        self.pages.profile = ProfileView::default();
    }

    // =========================================================================
    // Logout
    // =========================================================================

    /// User-initiated logout: clear session and credential, then hard
    /// redirect to login.
    pub fn logout(&mut self) {
        self.auth.logout();
        self.api.clear_token();
        self.hard_redirect_to_login(None);
        info!("Logged out");
    }

    /// Logout forced by a rejected token; same mechanics, plus a notice on
    /// the login screen explaining what happened.
    fn force_logout(&mut self) {
        self.auth.logout();
        self.api.clear_token();
        self.hard_redirect_to_login(Some(SESSION_EXPIRED_NOTICE.to_string()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_app(creds: MemoryStore) -> App {
        App::with_store(Config::default(), Box::new(creds)).expect("app builds")
    }

    fn checked_session(authenticated: bool) -> Session {
        Session {
            authenticated,
            email: None,
            checking: false,
        }
    }

    // -------------------------------------------------------------------------
    // Gate
    // -------------------------------------------------------------------------

    #[test]
    fn test_gate_allows_public_routes_regardless_of_session() {
        let checking = Session {
            authenticated: false,
            email: None,
            checking: true,
        };
        for route in [Route::Login, Route::SignUp, Route::ConfirmEmail] {
            assert_eq!(gate(&checking, route), GateDecision::Allow);
            assert_eq!(gate(&checked_session(false), route), GateDecision::Allow);
        }
    }

    #[test]
    fn test_gate_never_redirects_while_checking() {
        for authenticated in [true, false] {
            let session = Session {
                authenticated,
                email: None,
                checking: true,
            };
            assert_eq!(gate(&session, Route::Profile), GateDecision::Defer);
        }
    }

    #[test]
    fn test_gate_decides_protected_route_after_check() {
        assert_eq!(
            gate(&checked_session(true), Route::Profile),
            GateDecision::Allow
        );
        assert_eq!(
            gate(&checked_session(false), Route::Profile),
            GateDecision::RedirectToLogin
        );
    }

    // -------------------------------------------------------------------------
    // Startup routing
    // -------------------------------------------------------------------------

    #[test]
    fn test_cold_start_with_token_lands_on_profile() {
        let app = test_app(MemoryStore::with_token("abc123"));
        assert_eq!(app.route, Route::Profile);
        assert!(app.auth.snapshot().authenticated);
        assert!(!app.auth.snapshot().checking);
    }

    #[test]
    fn test_cold_start_without_token_lands_on_login() {
        let app = test_app(MemoryStore::new());
        assert_eq!(app.route, Route::Login);
        assert!(!app.auth.snapshot().authenticated);
    }

    // -------------------------------------------------------------------------
    // Login outcomes
    // -------------------------------------------------------------------------

    #[test]
    fn test_successful_login_persists_token_and_navigates() {
        let mut app = test_app(MemoryStore::new());
        app.finish_login(
            "alice@x.com".to_string(),
            Ok(LoginResponse {
                access_token: "abc123".to_string(),
                email: None,
            }),
        );

        assert_eq!(app.auth.token().as_deref(), Some("abc123"));
        let session = app.auth.snapshot();
        assert!(session.authenticated);
        assert_eq!(session.email.as_deref(), Some("alice@x.com"));
        assert_eq!(app.route, Route::Profile);
        assert!(app.pages.login.password.is_empty());
    }

    #[test]
    fn test_login_prefers_server_echoed_identity() {
        let mut app = test_app(MemoryStore::new());
        app.finish_login(
            "typo@x.com".to_string(),
            Ok(LoginResponse {
                access_token: "abc123".to_string(),
                email: Some("alice@x.com".to_string()),
            }),
        );
        assert_eq!(app.auth.snapshot().email.as_deref(), Some("alice@x.com"));
    }

    #[test]
    fn test_rejected_login_shows_bad_credentials_message() {
        let mut app = test_app(MemoryStore::new());
        app.finish_login("alice@x.com".to_string(), Err(ApiError::Unauthorized));

        assert_eq!(
            app.pages.login.error.as_deref(),
            Some("Invalid email or password.")
        );
        assert!(!app.auth.snapshot().authenticated);
        assert_eq!(app.route, Route::Login);
    }

    #[test]
    fn test_unreachable_host_shows_distinct_message() {
        let mut app = test_app(MemoryStore::new());
        app.finish_login("alice@x.com".to_string(), Err(ApiError::Unreachable));

        assert_eq!(
            app.pages.login.error.as_deref(),
            Some("Cannot connect to the server. Check your internet connection.")
        );
    }

    // -------------------------------------------------------------------------
    // Signup outcomes
    // -------------------------------------------------------------------------

    #[test]
    fn test_signup_rejection_detail_shown_verbatim_without_session_change() {
        let mut app = test_app(MemoryStore::new());
        let before = app.auth.snapshot();

        app.finish_signup(Err(ApiError::Rejected(
            "Email already registered".to_string(),
        )));

        assert_eq!(
            app.pages.signup.error.as_deref(),
            Some("Email already registered")
        );
        assert_eq!(app.auth.snapshot(), before);
        assert_eq!(app.auth.token(), None);
    }

    #[test]
    fn test_signup_success_schedules_login_redirect() {
        let mut app = test_app(MemoryStore::new());
        app.pages.signup.email = "alice@x.com".to_string();
        app.pages.signup.password = "hunter22".to_string();

        app.finish_signup(Ok(()));

        assert!(app.pages.signup.success.is_some());
        assert!(app.pages.signup.redirect_at.is_some());
        assert!(app.pages.signup.email.is_empty());
        assert!(app.pages.signup.password.is_empty());
        // Signing up does not sign you in
        assert!(!app.auth.snapshot().authenticated);
    }

    #[tokio::test]
    async fn test_signup_redirect_fires_after_delay() {
        let mut app = test_app(MemoryStore::new());
        app.navigate(Route::SignUp);
        app.pages.signup.success = Some("Account created.".to_string());
        app.pages.signup.redirect_at = Some(Instant::now() - Duration::from_millis(1));

        app.tick().await;

        assert_eq!(app.route, Route::Login);
        assert_eq!(app.pages.login.notice.as_deref(), Some("Account created."));
    }

    // -------------------------------------------------------------------------
    // Profile outcomes
    // -------------------------------------------------------------------------

    #[test]
    fn test_profile_success_publishes_identity() {
        let mut app = test_app(MemoryStore::with_token("abc123"));
        app.finish_profile_load(Ok(UserProfile {
            email: "alice@x.com".to_string(),
        }));

        assert_eq!(app.auth.snapshot().email.as_deref(), Some("alice@x.com"));
        assert!(app.pages.profile.loaded);
        assert_eq!(app.pages.profile.error, None);
    }

    #[test]
    fn test_profile_401_forces_logout_and_redirect() {
        let mut app = test_app(MemoryStore::with_token("stale"));
        assert_eq!(app.route, Route::Profile);

        app.finish_profile_load(Err(ApiError::Unauthorized));

        assert_eq!(app.auth.token(), None);
        assert!(!app.auth.snapshot().authenticated);
        assert_eq!(app.route, Route::Login);
        assert_eq!(
            app.pages.login.notice.as_deref(),
            Some("Session expired. Please log in again.")
        );
    }

    #[test]
    fn test_profile_other_failure_keeps_session() {
        let mut app = test_app(MemoryStore::with_token("abc123"));
        app.finish_profile_load(Err(ApiError::ServerError("boom".to_string())));

        assert!(app.auth.snapshot().authenticated);
        assert_eq!(app.route, Route::Profile);
        assert_eq!(
            app.pages.profile.error.as_deref(),
            Some("Something went wrong. Please try again.")
        );
    }

    // -------------------------------------------------------------------------
    // Logout
    // -------------------------------------------------------------------------

    #[test]
    fn test_logout_discards_screen_state() {
        let mut app = test_app(MemoryStore::with_token("abc123"));
        app.pages.signup.email = "draft@x.com".to_string();
        app.pages.confirm.link = "https://x/confirm#access_token=t".to_string();

        app.logout();

        assert_eq!(app.route, Route::Login);
        assert_eq!(app.auth.token(), None);
        assert!(app.pages.signup.email.is_empty());
        assert!(app.pages.confirm.link.is_empty());
    }

    #[tokio::test]
    async fn test_gate_redirects_unauthenticated_profile_on_tick() {
        let mut app = test_app(MemoryStore::new());
        app.navigate(Route::Profile);
        // Mark the profile as already loaded so tick exercises only the gate
        app.pages.profile.loaded = true;

        app.tick().await;

        assert_eq!(app.route, Route::Login);
    }

    // -------------------------------------------------------------------------
    // Confirmation link parsing
    // -------------------------------------------------------------------------

    #[test]
    fn test_extract_confirmation_token() {
        assert_eq!(
            extract_confirmation_token(
                "https://app.example.com/confirm#access_token=tok123&type=signup"
            )
            .as_deref(),
            Some("tok123")
        );
        assert_eq!(
            extract_confirmation_token("https://app.example.com/confirm#foo=1&access_token=t")
                .as_deref(),
            Some("t")
        );
    }

    #[test]
    fn test_extract_confirmation_token_missing() {
        // No fragment at all
        assert_eq!(
            extract_confirmation_token("https://app.example.com/confirm"),
            None
        );
        // Fragment without a token
        assert_eq!(
            extract_confirmation_token("https://app.example.com/confirm#type=signup"),
            None
        );
        // Empty token value
        assert_eq!(
            extract_confirmation_token("https://app.example.com/confirm#access_token="),
            None
        );
    }

    #[test]
    fn test_submit_confirmation_link_outcomes() {
        let mut app = test_app(MemoryStore::new());

        app.pages.confirm.link = "https://x/confirm#access_token=tok".to_string();
        app.submit_confirmation_link();
        assert_eq!(app.pages.confirm.outcome, Some(ConfirmOutcome::Verified));

        app.pages.confirm.link = "https://x/confirm".to_string();
        app.submit_confirmation_link();
        assert!(matches!(
            app.pages.confirm.outcome,
            Some(ConfirmOutcome::Invalid(_))
        ));
    }

    // -------------------------------------------------------------------------
    // Input validation
    // -------------------------------------------------------------------------

    #[test]
    fn test_can_add_email_char() {
        assert!(can_add_email_char(0, 'a'));
        assert!(can_add_email_char(253, '@'));
        assert!(!can_add_email_char(254, 'a'));
        assert!(!can_add_email_char(0, ' '));
        assert!(!can_add_email_char(0, '\n'));
    }

    #[test]
    fn test_can_add_password_char() {
        assert!(can_add_password_char(0, 'a'));
        assert!(can_add_password_char(127, '!'));
        assert!(can_add_password_char(0, ' '));
        assert!(!can_add_password_char(128, 'a'));
        assert!(!can_add_password_char(0, '\x00'));
    }
}
