//! HTTP handler functions for the SafeT API.

use actix_web::cookie::{Cookie, SameSite};
use actix_web::{HttpRequest, HttpResponse, web};
use safet_auth_models::{LoginRequest, SignupRequest};
use safet_safety::parse_coordinate;
use safet_server_models::{
    ApiHealth, LogoutResponse, SafetyQueryParams, SignupResponse, UserResponse,
};

use crate::AppState;
use crate::error::ApiError;

/// Name of the session cookie.
pub const SESSION_COOKIE: &str = "safet_session";

/// `GET /api/health`
pub async fn health() -> HttpResponse {
    HttpResponse::Ok().json(ApiHealth {
        healthy: true,
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// `GET /api/safety`
///
/// Scores the queried point and returns a full `SafetyResult`.
///
/// # Errors
///
/// Returns a 400 if `lat`/`lng` are missing, unparsable, zero, or out of
/// range.
pub async fn safety(
    state: web::Data<AppState>,
    params: web::Query<SafetyQueryParams>,
) -> Result<HttpResponse, ApiError> {
    let coordinate = parse_coordinate(params.lat.as_deref(), params.lng.as_deref())
        .inspect_err(|e| {
            log::debug!(
                "Rejected safety query lat={:?} lng={:?}: {e}",
                params.lat,
                params.lng
            );
        })?;

    let result = safet_safety::assess(
        coordinate,
        params.address.as_deref(),
        state.entropy.as_ref(),
        chrono::Utc::now(),
    );

    Ok(HttpResponse::Ok().json(result))
}

/// `POST /api/auth/signup` and `POST /api/auth/register`
///
/// # Errors
///
/// Returns a 400 for missing fields or a short password, a 409 if the email
/// is taken, and a 500 if a store fails.
pub async fn signup(
    state: web::Data<AppState>,
    body: web::Json<SignupRequest>,
) -> Result<HttpResponse, ApiError> {
    let session = state.auth.signup(body.into_inner())?;
    let cookie = session_cookie(&state, session.token.clone());

    Ok(HttpResponse::Ok().cookie(cookie).json(SignupResponse {
        user: session.user,
        token: session.token,
    }))
}

/// `POST /api/auth/login`
///
/// The session token is delivered only as an `HttpOnly` cookie.
///
/// # Errors
///
/// Returns a 400 for missing fields and a 401 for bad credentials.
pub async fn login(
    state: web::Data<AppState>,
    body: web::Json<LoginRequest>,
) -> Result<HttpResponse, ApiError> {
    let session = state.auth.login(body.into_inner())?;
    let cookie = session_cookie(&state, session.token);

    Ok(HttpResponse::Ok()
        .cookie(cookie)
        .json(UserResponse { user: session.user }))
}

/// `GET /api/auth/me`
///
/// # Errors
///
/// Returns a 401 if no valid session cookie is present.
pub async fn me(state: web::Data<AppState>, req: HttpRequest) -> Result<HttpResponse, ApiError> {
    let token = req
        .cookie(SESSION_COOKIE)
        .ok_or_else(|| ApiError::from(safet_auth::AuthError::NotAuthenticated))?;
    let user = state.auth.current_user(token.value())?;

    Ok(HttpResponse::Ok().json(UserResponse { user }))
}

/// `POST /api/auth/logout`
///
/// Always succeeds; the cookie is expired whether or not a session existed.
///
/// # Errors
///
/// Returns a 500 if the session store fails.
pub async fn logout(
    state: web::Data<AppState>,
    req: HttpRequest,
) -> Result<HttpResponse, ApiError> {
    if let Some(token) = req.cookie(SESSION_COOKIE) {
        state.auth.logout(token.value())?;
    }

    let mut removal = Cookie::build(SESSION_COOKIE, "").path("/").finish();
    removal.make_removal();

    Ok(HttpResponse::Ok()
        .cookie(removal)
        .json(LogoutResponse { success: true }))
}

fn session_cookie(state: &AppState, token: String) -> Cookie<'static> {
    Cookie::build(SESSION_COOKIE, token)
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .secure(state.secure_cookies)
        .finish()
}
