//! Session manager: the single source of truth for "who is logged in".
//!
//! An explicit, constructible state-holder injected into the view tree via
//! Leptos context, rather than ambient global state. It owns the reactive
//! [`SessionState`], the bearer token, and the persisted token + profile
//! pair, and it mediates every credential-bearing network call so that an
//! authorization-rejected response anywhere forces the same local logout.
//!
//! DESIGN
//! ======
//! Generic over [`AuthApi`] and [`SessionStore`] so the browser wires in
//! `RemoteApi` + `LocalSessionStore` while native tests drive the manager
//! with fakes. In-memory state and persisted state move in lockstep: every
//! transition that writes one writes the other.

#[cfg(test)]
#[path = "mod_test.rs"]
mod mod_test;

pub mod store;

use std::sync::{Arc, Mutex};

use leptos::prelude::*;

use crate::net::api::{ApiError, AuthApi, RemoteApi};
use crate::net::types::{
    AuthResponse, DashboardData, LoginRequest, PasswordResetRequest, ProfileUpdate,
    RegisterRequest, Teacher,
};
use crate::state::session::SessionState;
use store::{LocalSessionStore, SessionStore};

/// The session manager wired to the live backend and browser storage.
pub type Session = SessionManager<RemoteApi, LocalSessionStore>;

type UnauthorizedHandler = Box<dyn Fn() + Send + Sync>;

/// Owner of the authentication state for the running application instance.
pub struct SessionManager<A, S> {
    state: ArcRwSignal<SessionState>,
    token: Arc<Mutex<Option<String>>>,
    api: Arc<A>,
    store: Arc<S>,
    on_unauthorized: Arc<Mutex<Option<UnauthorizedHandler>>>,
}

// Manual impl: `derive(Clone)` would require `A: Clone` and `S: Clone`.
impl<A, S> Clone for SessionManager<A, S> {
    fn clone(&self) -> Self {
        Self {
            state: self.state.clone(),
            token: Arc::clone(&self.token),
            api: Arc::clone(&self.api),
            store: Arc::clone(&self.store),
            on_unauthorized: Arc::clone(&self.on_unauthorized),
        }
    }
}

impl Session {
    /// Manager backed by the REST API and localStorage.
    pub fn new_browser() -> Self {
        Self::new(RemoteApi, LocalSessionStore)
    }
}

impl<A: AuthApi, S: SessionStore> SessionManager<A, S> {
    pub fn new(api: A, store: S) -> Self {
        Self {
            state: ArcRwSignal::new(SessionState::default()),
            token: Arc::new(Mutex::new(None)),
            api: Arc::new(api),
            store: Arc::new(store),
            on_unauthorized: Arc::new(Mutex::new(None)),
        }
    }

    /// Reactive session state for the view tree.
    pub fn state(&self) -> ArcRwSignal<SessionState> {
        self.state.clone()
    }

    /// Register the callback fired when an authenticated call is rejected
    /// by the server and the session is forcibly ended.
    pub fn set_unauthorized_handler(&self, handler: impl Fn() + Send + Sync + 'static) {
        if let Ok(mut slot) = self.on_unauthorized.lock() {
            *slot = Some(Box::new(handler));
        }
    }

    /// Restore a persisted session, once, at startup. No network traffic:
    /// a well-formed stored pair is trusted until the first rejected call.
    pub fn bootstrap(&self) {
        if !self.state.get_untracked().is_bootstrapping() {
            return;
        }
        match self.store.read() {
            (Some(token), Some(profile_json)) => {
                match serde_json::from_str::<Teacher>(&profile_json) {
                    Ok(teacher) => {
                        self.set_token(Some(token));
                        self.state.update(|s| s.authenticated(teacher));
                    }
                    Err(_) => self.discard_persisted("Stored session was invalid"),
                }
            }
            (None, None) => self.state.update(SessionState::signed_out),
            _ => self.discard_persisted("Stored session was incomplete"),
        }
    }

    pub async fn login(&self, req: &LoginRequest) -> Result<(), ApiError> {
        self.begin()?;
        match self.api.login(req).await {
            Ok(auth) => {
                self.establish(auth);
                Ok(())
            }
            Err(err) => {
                let message = err.message_or("Could not sign in").to_owned();
                self.state.update(|s| s.rejected(message));
                Err(err)
            }
        }
    }

    /// Create an account. Never authenticates; returns the new teacher id so
    /// the caller can route to the verification step.
    pub async fn register(&self, req: &RegisterRequest) -> Result<String, ApiError> {
        self.begin()?;
        match self.api.register(req).await {
            Ok(created) => {
                self.state.update(SessionState::settled);
                Ok(created.teacher_id)
            }
            Err(err) => {
                let message = err.message_or("Could not create the account").to_owned();
                self.state.update(|s| s.rejected(message));
                Err(err)
            }
        }
    }

    /// Submit the out-of-band verification code. Success behaves like login.
    pub async fn verify_code(&self, email: &str, code: &str) -> Result<(), ApiError> {
        self.begin()?;
        match self.api.verify_code(email, code).await {
            Ok(auth) => {
                self.establish(auth);
                Ok(())
            }
            Err(err) => {
                let message = err.message_or("Could not verify the code").to_owned();
                self.state.update(|s| s.rejected(message));
                Err(err)
            }
        }
    }

    pub async fn resend_verification(&self, email: &str) -> Result<(), ApiError> {
        let result = self.api.resend_verification(email).await;
        self.report(result, "Could not send a new verification code")
    }

    pub async fn request_password_reset(&self, email: &str) -> Result<(), ApiError> {
        let result = self.api.request_password_reset(email).await;
        self.report(result, "Could not request a password reset")
    }

    pub async fn confirm_password_reset(
        &self,
        req: &PasswordResetRequest,
    ) -> Result<(), ApiError> {
        let result = self.api.confirm_password_reset(req).await;
        self.report(result, "Could not reset the password")
    }

    /// End the session. The remote sign-out is best effort: local state and
    /// storage are cleared no matter what the server says.
    pub async fn logout(&self) {
        if let Some(token) = self.token() {
            let _ = self.api.sign_out(&token).await;
        }
        self.store.clear();
        self.set_token(None);
        self.state.update(SessionState::signed_out);
    }

    pub fn clear_error(&self) {
        self.state.update(SessionState::clear_error);
    }

    /// The dashboard aggregate, via the uniform authorization guard.
    pub async fn dashboard(&self) -> Result<DashboardData, ApiError> {
        let token = self.require_token()?;
        let result = self.api.fetch_dashboard(&token).await;
        self.guard(result)
    }

    pub async fn profile(&self) -> Result<Teacher, ApiError> {
        let token = self.require_token()?;
        let result = self.api.fetch_profile(&token).await;
        self.guard(result)
    }

    /// Update the profile and keep the persisted copy in lockstep.
    pub async fn update_profile(&self, update: &ProfileUpdate) -> Result<Teacher, ApiError> {
        let token = self.require_token()?;
        let result = self.api.update_profile(&token, update).await;
        let teacher = self.guard(result)?;
        if let Ok(json) = serde_json::to_string(&teacher) {
            self.store.write(&token, &json);
        }
        self.state.update(|s| s.authenticated(teacher.clone()));
        Ok(teacher)
    }

    /// Raise the pending flag, rejecting a second mutating operation while
    /// one is already in flight.
    fn begin(&self) -> Result<(), ApiError> {
        if self.state.get_untracked().is_loading() {
            return Err(ApiError::Busy);
        }
        self.state.update(SessionState::begin);
        Ok(())
    }

    /// Persist and adopt a fresh token + profile pair.
    fn establish(&self, auth: AuthResponse) {
        if let Ok(json) = serde_json::to_string(&auth.teacher) {
            self.store.write(&auth.token, &json);
        }
        self.set_token(Some(auth.token));
        self.state.update(|s| s.authenticated(auth.teacher));
    }

    /// Fire-and-report: a failure surfaces in `error` without touching the
    /// authentication phase.
    fn report(&self, result: Result<(), ApiError>, fallback: &str) -> Result<(), ApiError> {
        if let Err(err) = &result {
            let message = err.message_or(fallback).to_owned();
            self.state.update(|s| s.failed(message));
        }
        result
    }

    /// Uniform authorization-loss rule for credential-bearing calls.
    fn guard<T>(&self, result: Result<T, ApiError>) -> Result<T, ApiError> {
        if let Err(err) = &result {
            if err.is_unauthorized() {
                self.force_sign_out();
            }
        }
        result
    }

    fn force_sign_out(&self) {
        self.store.clear();
        self.set_token(None);
        self.state.update(SessionState::signed_out);
        if let Ok(slot) = self.on_unauthorized.lock() {
            if let Some(handler) = slot.as_ref() {
                handler();
            }
        }
    }

    fn discard_persisted(&self, message: &str) {
        self.store.clear();
        self.set_token(None);
        self.state.update(|s| s.rejected(message.to_owned()));
    }

    fn require_token(&self) -> Result<String, ApiError> {
        self.token().ok_or(ApiError::Unauthorized { message: None })
    }

    fn token(&self) -> Option<String> {
        self.token.lock().ok().and_then(|token| token.clone())
    }

    fn set_token(&self, value: Option<String>) {
        if let Ok(mut token) = self.token.lock() {
            *token = value;
        }
    }
}
