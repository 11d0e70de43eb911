use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use futures::executor::{LocalPool, block_on};
use futures::task::LocalSpawnExt;

use super::store::MemorySessionStore;
use super::*;

fn teacher() -> Teacher {
    Teacher {
        id: "1".to_owned(),
        name: "A".to_owned(),
        email: "a@b.com".to_owned(),
        is_verified: true,
        phone: None,
        specialization: None,
    }
}

fn auth_ok() -> AuthResponse {
    AuthResponse {
        token: "T".to_owned(),
        teacher: teacher(),
    }
}

fn creds() -> LoginRequest {
    LoginRequest {
        email: "a@b.com".to_owned(),
        password: "secret".to_owned(),
    }
}

/// Scripted backend double. Plain fields configure each behavior; the call
/// counter proves when no network traffic happened.
#[derive(Default)]
struct FakeApi {
    login_error: Option<ApiError>,
    login_hangs: bool,
    op_error: Option<ApiError>,
    sign_out_fails: bool,
    revoke_token: bool,
    calls: AtomicUsize,
}

impl FakeApi {
    fn count(&self) {
        self.calls.fetch_add(1, Ordering::SeqCst);
    }

    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl AuthApi for FakeApi {
    async fn login(
        &self,
        _req: &crate::net::types::LoginRequest,
    ) -> Result<AuthResponse, ApiError> {
        self.count();
        if self.login_hangs {
            futures::future::pending::<()>().await;
        }
        match &self.login_error {
            Some(err) => Err(err.clone()),
            None => Ok(auth_ok()),
        }
    }

    async fn register(
        &self,
        _req: &crate::net::types::RegisterRequest,
    ) -> Result<crate::net::types::RegisteredTeacher, ApiError> {
        self.count();
        Ok(crate::net::types::RegisteredTeacher {
            teacher_id: "1".to_owned(),
        })
    }

    async fn verify_code(&self, _email: &str, _code: &str) -> Result<AuthResponse, ApiError> {
        self.count();
        Ok(auth_ok())
    }

    async fn resend_verification(&self, _email: &str) -> Result<(), ApiError> {
        self.count();
        match &self.op_error {
            Some(err) => Err(err.clone()),
            None => Ok(()),
        }
    }

    async fn request_password_reset(&self, _email: &str) -> Result<(), ApiError> {
        self.count();
        match &self.op_error {
            Some(err) => Err(err.clone()),
            None => Ok(()),
        }
    }

    async fn confirm_password_reset(
        &self,
        _req: &crate::net::types::PasswordResetRequest,
    ) -> Result<(), ApiError> {
        self.count();
        match &self.op_error {
            Some(err) => Err(err.clone()),
            None => Ok(()),
        }
    }

    async fn sign_out(&self, _token: &str) -> Result<(), ApiError> {
        self.count();
        if self.sign_out_fails {
            Err(ApiError::Network("unreachable".to_owned()))
        } else {
            Ok(())
        }
    }

    async fn fetch_profile(&self, _token: &str) -> Result<Teacher, ApiError> {
        self.count();
        if self.revoke_token {
            Err(ApiError::Unauthorized { message: None })
        } else {
            Ok(teacher())
        }
    }

    async fn update_profile(
        &self,
        _token: &str,
        _update: &crate::net::types::ProfileUpdate,
    ) -> Result<Teacher, ApiError> {
        self.count();
        if self.revoke_token {
            Err(ApiError::Unauthorized { message: None })
        } else {
            Ok(teacher())
        }
    }

    async fn fetch_dashboard(&self, _token: &str) -> Result<DashboardData, ApiError> {
        self.count();
        if self.revoke_token {
            Err(ApiError::Unauthorized { message: None })
        } else {
            Ok(DashboardData::default())
        }
    }
}

fn manager(api: FakeApi) -> SessionManager<FakeApi, MemorySessionStore> {
    SessionManager::new(api, MemorySessionStore::new())
}

fn seeded_manager(api: FakeApi) -> SessionManager<FakeApi, MemorySessionStore> {
    let store = MemorySessionStore::new();
    let json = serde_json::to_string(&teacher()).expect("serializable profile");
    store.seed(Some("T"), Some(&json));
    SessionManager::new(api, store)
}

// =============================================================
// Bootstrap
// =============================================================

#[test]
fn bootstrap_with_empty_store_is_unauthenticated() {
    let m = manager(FakeApi::default());
    m.bootstrap();
    let state = m.state.get_untracked();
    assert!(!state.is_authenticated());
    assert!(!state.is_loading());
    assert!(state.error().is_none());
}

#[test]
fn bootstrap_restores_a_valid_session_without_network_calls() {
    let m = seeded_manager(FakeApi::default());
    m.bootstrap();
    let state = m.state.get_untracked();
    assert!(state.is_authenticated());
    assert_eq!(state.teacher(), Some(&teacher()));
    assert_eq!(m.api.calls(), 0);
}

#[test]
fn bootstrap_discards_a_token_without_a_profile() {
    let m = manager(FakeApi::default());
    m.store.seed(Some("T"), None);
    m.bootstrap();
    let state = m.state.get_untracked();
    assert!(!state.is_authenticated());
    assert!(state.error().is_some());
    assert!(m.store.is_empty());
}

#[test]
fn bootstrap_discards_a_profile_without_a_token() {
    let m = manager(FakeApi::default());
    let json = serde_json::to_string(&teacher()).expect("serializable profile");
    m.store.seed(None, Some(&json));
    m.bootstrap();
    assert!(!m.state.get_untracked().is_authenticated());
    assert!(m.store.is_empty());
}

#[test]
fn bootstrap_discards_an_unparsable_profile() {
    let m = manager(FakeApi::default());
    m.store.seed(Some("T"), Some("not json"));
    m.bootstrap();
    let state = m.state.get_untracked();
    assert!(!state.is_authenticated());
    assert!(state.error().is_some());
    assert!(m.store.is_empty());
}

#[test]
fn bootstrap_is_never_re_entered() {
    let m = manager(FakeApi::default());
    m.bootstrap();
    // A session persisted after startup must not be picked up by a second
    // bootstrap call.
    let json = serde_json::to_string(&teacher()).expect("serializable profile");
    m.store.seed(Some("T"), Some(&json));
    m.bootstrap();
    assert!(!m.state.get_untracked().is_authenticated());
}

// =============================================================
// Login / logout
// =============================================================

#[test]
fn login_then_logout_restores_the_initial_unauthenticated_state() {
    let m = manager(FakeApi::default());
    m.bootstrap();
    let initial = m.state.get_untracked();

    block_on(m.login(&creds())).expect("login succeeds");
    assert!(m.state.get_untracked().is_authenticated());
    assert!(!m.store.is_empty());

    block_on(m.logout());
    assert_eq!(m.state.get_untracked(), initial);
    assert!(m.store.is_empty());
    assert!(m.token().is_none());
}

#[test]
fn successful_login_persists_token_and_profile_together() {
    let m = manager(FakeApi::default());
    m.bootstrap();
    block_on(m.login(&creds())).expect("login succeeds");
    let (token, profile) = m.store.read();
    assert_eq!(token.as_deref(), Some("T"));
    let stored: Teacher =
        serde_json::from_str(&profile.expect("profile present")).expect("profile parses");
    assert_eq!(stored, teacher());
}

#[test]
fn failed_login_surfaces_the_server_message() {
    let m = manager(FakeApi {
        login_error: Some(ApiError::Unauthorized {
            message: Some("Invalid credentials".to_owned()),
        }),
        ..FakeApi::default()
    });
    m.bootstrap();
    let err = block_on(m.login(&creds())).expect_err("login fails");
    assert!(err.is_unauthorized());
    let state = m.state.get_untracked();
    assert!(!state.is_authenticated());
    assert!(!state.is_loading());
    assert_eq!(state.error(), Some("Invalid credentials"));
    assert!(m.store.is_empty());
}

#[test]
fn failed_login_without_a_server_message_uses_the_fallback() {
    let m = manager(FakeApi {
        login_error: Some(ApiError::Network("timeout".to_owned())),
        ..FakeApi::default()
    });
    m.bootstrap();
    let _ = block_on(m.login(&creds()));
    assert_eq!(m.state.get_untracked().error(), Some("Could not sign in"));
}

#[test]
fn a_second_login_while_one_is_pending_is_rejected() {
    let m = manager(FakeApi {
        login_hangs: true,
        ..FakeApi::default()
    });
    m.bootstrap();

    let mut pool = LocalPool::new();
    let spawner = pool.spawner();
    let first = m.clone();
    spawner
        .spawn_local(async move {
            let _ = first.login(&creds()).await;
        })
        .expect("spawn first login");
    pool.run_until_stalled();
    assert!(m.state.get_untracked().is_loading());

    let err = pool
        .run_until(m.login(&creds()))
        .expect_err("second login rejected");
    assert_eq!(err, ApiError::Busy);
    assert_eq!(m.api.calls(), 1);
}

#[test]
fn logout_clears_locally_even_when_the_remote_call_fails() {
    let m = manager(FakeApi {
        sign_out_fails: true,
        ..FakeApi::default()
    });
    m.bootstrap();
    block_on(m.login(&creds())).expect("login succeeds");
    block_on(m.logout());
    assert!(!m.state.get_untracked().is_authenticated());
    assert!(m.store.is_empty());
    assert!(m.token().is_none());
}

// =============================================================
// Registration and verification
// =============================================================

#[test]
fn register_never_authenticates() {
    let m = manager(FakeApi::default());
    m.bootstrap();
    let id = block_on(m.register(&crate::net::types::RegisterRequest {
        name: "A".to_owned(),
        email: "a@b.com".to_owned(),
        password: "secret".to_owned(),
        phone: None,
        specialization: None,
    }))
    .expect("register succeeds");
    assert_eq!(id, "1");
    let state = m.state.get_untracked();
    assert!(!state.is_authenticated());
    assert!(!state.is_loading());
    assert!(m.store.is_empty());
}

#[test]
fn verify_code_success_behaves_like_login() {
    let m = manager(FakeApi::default());
    m.bootstrap();
    block_on(m.verify_code("a@b.com", "123456")).expect("verification succeeds");
    let state = m.state.get_untracked();
    assert!(state.is_authenticated());
    assert_eq!(state.teacher(), Some(&teacher()));
    assert!(state.error().is_none());
    assert_eq!(m.store.read().0.as_deref(), Some("T"));
}

#[test]
fn resend_failure_keeps_the_authentication_phase() {
    let m = manager(FakeApi {
        op_error: Some(ApiError::Server {
            status: 500,
            message: Some("SMTP down".to_owned()),
        }),
        ..FakeApi::default()
    });
    m.bootstrap();
    block_on(m.login(&creds())).expect("login succeeds");
    let err = block_on(m.resend_verification("a@b.com")).expect_err("resend fails");
    assert!(!err.is_unauthorized());
    let state = m.state.get_untracked();
    assert!(state.is_authenticated());
    assert_eq!(state.error(), Some("SMTP down"));
}

#[test]
fn password_reset_operations_do_not_mutate_authentication() {
    let m = manager(FakeApi::default());
    m.bootstrap();
    block_on(m.request_password_reset("a@b.com")).expect("request succeeds");
    block_on(m.confirm_password_reset(&PasswordResetRequest {
        email: "a@b.com".to_owned(),
        code: "123456".to_owned(),
        new_password: "secret2".to_owned(),
    }))
    .expect("confirm succeeds");
    assert!(!m.state.get_untracked().is_authenticated());
}

// =============================================================
// Authorization loss
// =============================================================

#[test]
fn unauthorized_dashboard_read_forces_local_logout() {
    let m = manager(FakeApi {
        revoke_token: true,
        ..FakeApi::default()
    });
    m.bootstrap();
    block_on(m.login(&creds())).expect("login succeeds");

    let fired = Arc::new(AtomicBool::new(false));
    let flag = Arc::clone(&fired);
    m.set_unauthorized_handler(move || flag.store(true, Ordering::SeqCst));

    let err = block_on(m.dashboard()).expect_err("dashboard rejected");
    assert!(err.is_unauthorized());
    assert!(!m.state.get_untracked().is_authenticated());
    assert!(m.store.is_empty());
    assert!(m.token().is_none());
    assert!(fired.load(Ordering::SeqCst));
}

#[test]
fn bootstrapped_session_is_torn_down_on_first_rejected_call() {
    // Trust-on-read: the restored session is valid until the server says no.
    let m = seeded_manager(FakeApi {
        revoke_token: true,
        ..FakeApi::default()
    });
    m.bootstrap();
    assert!(m.state.get_untracked().is_authenticated());
    let _ = block_on(m.profile());
    assert!(!m.state.get_untracked().is_authenticated());
    assert!(m.store.is_empty());
}

#[test]
fn successful_profile_update_keeps_storage_in_lockstep() {
    let m = manager(FakeApi::default());
    m.bootstrap();
    block_on(m.login(&creds())).expect("login succeeds");
    let updated = block_on(m.update_profile(&crate::net::types::ProfileUpdate {
        name: Some("B".to_owned()),
        ..crate::net::types::ProfileUpdate::default()
    }))
    .expect("update succeeds");
    let (token, profile) = m.store.read();
    assert_eq!(token.as_deref(), Some("T"));
    let stored: Teacher =
        serde_json::from_str(&profile.expect("profile present")).expect("profile parses");
    assert_eq!(stored, updated);
}

// =============================================================
// Errors
// =============================================================

#[test]
fn clear_error_is_idempotent() {
    let m = manager(FakeApi {
        login_error: Some(ApiError::Server {
            status: 500,
            message: None,
        }),
        ..FakeApi::default()
    });
    m.bootstrap();
    let _ = block_on(m.login(&creds()));
    assert!(m.state.get_untracked().error().is_some());
    m.clear_error();
    let after_first = m.state.get_untracked();
    m.clear_error();
    assert_eq!(m.state.get_untracked(), after_first);
    assert!(after_first.error().is_none());
}
