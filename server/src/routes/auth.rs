//! Auth routes: email access-code sign-in, session lookup, logout, and the
//! extractors that enforce the access gate on API handlers.

use access::{Denial, Role, Session};
use axum::extract::{FromRef, FromRequestParts, State};
use axum::http::StatusCode;
use axum::http::request::Parts;
use axum::response::Json;
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use serde::{Deserialize, Serialize};
use time::Duration;

use crate::error::ApiError;
use crate::services::email_auth::{self, EmailAuthError};
use crate::services::session::{self, SessionUser};
use crate::state::AppState;

pub(crate) const COOKIE_NAME: &str = "session_token";
const SESSION_DAYS: i64 = 30;

fn session_cookie(token: String, secure: bool) -> Cookie<'static> {
    Cookie::build((COOKIE_NAME, token))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .secure(secure)
        .max_age(Duration::days(SESSION_DAYS))
        .build()
}

fn clear_session_cookie(secure: bool) -> Cookie<'static> {
    Cookie::build((COOKIE_NAME, ""))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .secure(secure)
        .max_age(Duration::ZERO)
        .build()
}

/// Run the shared gate policy against an optional signed-in user.
pub(crate) fn check_access(user: Option<&SessionUser>, required_roles: &[Role]) -> Result<(), Denial> {
    let session = user.map_or(Session::Anonymous, SessionUser::session);
    access::authorize(&session, required_roles)
}

// =============================================================================
// EXTRACTORS
// =============================================================================

/// Authenticated user extracted from the session cookie.
/// Use as a handler parameter to require any signed-in role.
pub struct AuthUser {
    pub user: SessionUser,
}

impl<S> FromRequestParts<S> for AuthUser
where
    AppState: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let jar = CookieJar::from_headers(&parts.headers);
        let token = session_token(&jar);
        let user = match token {
            None => None,
            Some(token) => {
                let app_state = AppState::from_ref(state);
                session::validate_session(&app_state.pool, token).await?
            }
        };

        check_access(user.as_ref(), &[])?;
        let user = user.ok_or(Denial::Unauthenticated)?;
        Ok(Self { user })
    }
}

/// Signed-in user holding the `admin` role.
pub struct RequireAdmin(pub AuthUser);

impl<S> FromRequestParts<S> for RequireAdmin
where
    AppState: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let auth = AuthUser::from_request_parts(parts, state).await?;
        if let Err(denial) = check_access(Some(&auth.user), &[Role::Admin]) {
            tracing::warn!(user_id = %auth.user.id, path = %parts.uri.path(), "admin route refused");
            return Err(denial.into());
        }
        Ok(Self(auth))
    }
}

// =============================================================================
// HANDLERS
// =============================================================================

#[derive(Deserialize)]
pub struct RequestCodeBody {
    email: String,
}

#[derive(Debug, Serialize)]
pub struct RequestCodeResponse {
    ok: bool,
    /// Echoed only when outbound email is not configured.
    #[serde(skip_serializing_if = "Option::is_none")]
    code: Option<String>,
}

/// `POST /api/auth/email/request-code`: issue a sign-in code for an email.
pub async fn request_email_code(
    State(state): State<AppState>,
    Json(body): Json<RequestCodeBody>,
) -> Result<Json<RequestCodeResponse>, ApiError> {
    let email = email_auth::normalize_email(&body.email).ok_or(EmailAuthError::InvalidEmail)?;
    state.login_codes.check_and_record(&email)?;

    let code = email_auth::request_access_code(&state.pool, &email).await?;

    let Some(mail) = &state.config.email else {
        tracing::warn!(%email, "email delivery not configured; echoing login code");
        return Ok(Json(RequestCodeResponse { ok: true, code: Some(code) }));
    };
    email_auth::send_access_code_email(&mail.api_key, &mail.from, &email, &code).await?;
    Ok(Json(RequestCodeResponse { ok: true, code: None }))
}

#[derive(Deserialize)]
pub struct VerifyCodeBody {
    email: String,
    code: String,
}

/// `POST /api/auth/email/verify-code`: consume a code, start a session.
pub async fn verify_email_code(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(body): Json<VerifyCodeBody>,
) -> Result<(CookieJar, Json<SessionUser>), ApiError> {
    let promote_admin = state.config.is_admin_email(&body.email);
    let user_id = email_auth::verify_access_code(&state.pool, &body.email, &body.code, promote_admin).await?;

    let token = session::create_session(&state.pool, user_id).await?;
    let user = session::fetch_user(&state.pool, user_id)
        .await?
        .ok_or(ApiError::NotFound)?;

    tracing::info!(user_id = %user.id, role = %user.role, "signed in");
    let jar = jar.add(session_cookie(token, state.config.cookie_secure));
    Ok((jar, Json(user)))
}

/// `GET /api/auth/me`: return current user.
pub async fn me(auth: AuthUser) -> Json<SessionUser> {
    Json(auth.user)
}

/// Session token carried by the request, if any.
fn session_token(jar: &CookieJar) -> Option<&str> {
    jar.get(COOKIE_NAME).map(Cookie::value).filter(|token| !token.is_empty())
}

/// `POST /api/auth/logout`: delete session, clear cookie.
///
/// Always answers 204 with the expired cookie, even for a stale or missing
/// session.
pub async fn logout(State(state): State<AppState>, jar: CookieJar) -> Result<(CookieJar, StatusCode), ApiError> {
    if let Some(token) = session_token(&jar) {
        session::delete_session(&state.pool, token).await?;
    }
    let jar = jar.add(clear_session_cookie(state.config.cookie_secure));
    Ok((jar, StatusCode::NO_CONTENT))
}

#[cfg(test)]
#[path = "auth_test.rs"]
mod tests;
