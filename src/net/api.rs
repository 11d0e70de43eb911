//! Remote authentication and dashboard service client.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net` against the
//! platform backend. Server-side (SSR): stubs returning errors since these
//! endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every call resolves to `Result<_, ApiError>`. A 401 response becomes
//! [`ApiError::Unauthorized`] so the session manager can apply its uniform
//! forced-logout rule; other non-success responses become
//! [`ApiError::Server`] carrying the backend's `message` verbatim.

#![allow(clippy::unused_async)]

use thiserror::Error;

use super::types::{
    AuthResponse, DashboardData, LoginRequest, PasswordResetRequest, ProfileUpdate,
    RegisterRequest, RegisteredTeacher, Teacher,
};

/// Failure of a remote call, classified for the session manager.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ApiError {
    /// The server rejected the presented token or credentials.
    #[error("{}", message.as_deref().unwrap_or("not authorized"))]
    Unauthorized { message: Option<String> },
    /// Non-success response with the backend's human-readable message.
    #[error("{}", message.as_deref().unwrap_or("request failed"))]
    Server { status: u16, message: Option<String> },
    /// The request never reached the server (or the browser is offline).
    #[error("network error: {0}")]
    Network(String),
    /// The response body did not match the expected shape.
    #[error("invalid response: {0}")]
    Decode(String),
    /// A session-mutating operation is already in flight.
    #[error("another request is in flight")]
    Busy,
}

impl ApiError {
    /// The server-provided message if there is one, else `fallback`.
    pub fn message_or<'a>(&'a self, fallback: &'a str) -> &'a str {
        match self {
            Self::Unauthorized { message: Some(m) } | Self::Server { message: Some(m), .. } => m,
            _ => fallback,
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Unauthorized { .. })
    }
}

/// The remote authentication service, as the session manager sees it.
///
/// A trait seam so the manager can be driven in native tests without a
/// browser; [`RemoteApi`] is the live implementation.
pub trait AuthApi {
    async fn login(&self, req: &LoginRequest) -> Result<AuthResponse, ApiError>;
    async fn register(&self, req: &RegisterRequest) -> Result<RegisteredTeacher, ApiError>;
    async fn verify_code(&self, email: &str, code: &str) -> Result<AuthResponse, ApiError>;
    async fn resend_verification(&self, email: &str) -> Result<(), ApiError>;
    async fn request_password_reset(&self, email: &str) -> Result<(), ApiError>;
    async fn confirm_password_reset(&self, req: &PasswordResetRequest) -> Result<(), ApiError>;
    async fn sign_out(&self, token: &str) -> Result<(), ApiError>;
    async fn fetch_profile(&self, token: &str) -> Result<Teacher, ApiError>;
    async fn update_profile(
        &self,
        token: &str,
        update: &ProfileUpdate,
    ) -> Result<Teacher, ApiError>;
    async fn fetch_dashboard(&self, token: &str) -> Result<DashboardData, ApiError>;
}

/// Live client for the platform's teacher REST API.
#[derive(Clone, Copy, Debug, Default)]
pub struct RemoteApi;

#[cfg(feature = "hydrate")]
const BASE: &str = "/api/teacher";

#[cfg(not(feature = "hydrate"))]
fn offline() -> ApiError {
    ApiError::Network("not available on server".to_owned())
}

#[cfg(feature = "hydrate")]
fn bearer(token: &str) -> String {
    format!("Bearer {token}")
}

#[cfg(feature = "hydrate")]
fn net_err(err: gloo_net::Error) -> ApiError {
    ApiError::Network(err.to_string())
}

/// Classify a non-success response, consuming its error body.
#[cfg(feature = "hydrate")]
async fn fail(resp: gloo_net::http::Response) -> ApiError {
    let status = resp.status();
    let message = resp
        .json::<super::types::ErrorBody>()
        .await
        .ok()
        .and_then(|body| body.message);
    if status == 401 {
        ApiError::Unauthorized { message }
    } else {
        ApiError::Server { status, message }
    }
}

/// Unwrap the `{ data: … }` success envelope.
#[cfg(feature = "hydrate")]
async fn decode<T: serde::de::DeserializeOwned>(
    resp: gloo_net::http::Response,
) -> Result<T, ApiError> {
    if !resp.ok() {
        return Err(fail(resp).await);
    }
    resp.json::<super::types::Envelope<T>>()
        .await
        .map(|env| env.data)
        .map_err(|err| ApiError::Decode(err.to_string()))
}

/// Status-only check for commands whose payload we do not care about.
#[cfg(feature = "hydrate")]
async fn accept(resp: gloo_net::http::Response) -> Result<(), ApiError> {
    if resp.ok() { Ok(()) } else { Err(fail(resp).await) }
}

#[cfg(feature = "hydrate")]
async fn post<B, T>(path: &str, body: &B) -> Result<T, ApiError>
where
    B: serde::Serialize,
    T: serde::de::DeserializeOwned,
{
    let resp = gloo_net::http::Request::post(&format!("{BASE}{path}"))
        .json(body)
        .map_err(net_err)?
        .send()
        .await
        .map_err(net_err)?;
    decode(resp).await
}

#[cfg(feature = "hydrate")]
async fn post_command<B: serde::Serialize>(path: &str, body: &B) -> Result<(), ApiError> {
    let resp = gloo_net::http::Request::post(&format!("{BASE}{path}"))
        .json(body)
        .map_err(net_err)?
        .send()
        .await
        .map_err(net_err)?;
    accept(resp).await
}

#[cfg(feature = "hydrate")]
async fn get_authed<T: serde::de::DeserializeOwned>(
    path: &str,
    token: &str,
) -> Result<T, ApiError> {
    let resp = gloo_net::http::Request::get(&format!("{BASE}{path}"))
        .header("Authorization", &bearer(token))
        .send()
        .await
        .map_err(net_err)?;
    decode(resp).await
}

impl AuthApi for RemoteApi {
    async fn login(&self, req: &LoginRequest) -> Result<AuthResponse, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            post("/auth/login", req).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = req;
            Err(offline())
        }
    }

    async fn register(&self, req: &RegisterRequest) -> Result<RegisteredTeacher, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            post("/auth/register", req).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = req;
            Err(offline())
        }
    }

    async fn verify_code(&self, email: &str, code: &str) -> Result<AuthResponse, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let body = super::types::VerifyRequest {
                email: email.to_owned(),
                code: code.to_owned(),
            };
            post("/auth/verify-2fa", &body).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (email, code);
            Err(offline())
        }
    }

    async fn resend_verification(&self, email: &str) -> Result<(), ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let body = super::types::EmailRequest {
                email: email.to_owned(),
            };
            post_command("/auth/resend-verification", &body).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = email;
            Err(offline())
        }
    }

    async fn request_password_reset(&self, email: &str) -> Result<(), ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let body = super::types::EmailRequest {
                email: email.to_owned(),
            };
            post_command("/auth/request-password-reset", &body).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = email;
            Err(offline())
        }
    }

    async fn confirm_password_reset(&self, req: &PasswordResetRequest) -> Result<(), ApiError> {
        #[cfg(feature = "hydrate")]
        {
            post_command("/auth/reset-password", req).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = req;
            Err(offline())
        }
    }

    async fn sign_out(&self, token: &str) -> Result<(), ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let resp = gloo_net::http::Request::post(&format!("{BASE}/auth/logout"))
                .header("Authorization", &bearer(token))
                .send()
                .await
                .map_err(net_err)?;
            accept(resp).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = token;
            Err(offline())
        }
    }

    async fn fetch_profile(&self, token: &str) -> Result<Teacher, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            get_authed("/profile", token).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = token;
            Err(offline())
        }
    }

    async fn update_profile(
        &self,
        token: &str,
        update: &ProfileUpdate,
    ) -> Result<Teacher, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let resp = gloo_net::http::Request::put(&format!("{BASE}/profile"))
                .header("Authorization", &bearer(token))
                .json(update)
                .map_err(net_err)?
                .send()
                .await
                .map_err(net_err)?;
            decode(resp).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (token, update);
            Err(offline())
        }
    }

    async fn fetch_dashboard(&self, token: &str) -> Result<DashboardData, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            get_authed("/dashboard", token).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = token;
            Err(offline())
        }
    }
}
