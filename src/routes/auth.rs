use std::sync::Arc;

use axum::{
    Json, Router,
    extract::State,
    http::{HeaderValue, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use serde::Deserialize;

use crate::{
    auth::{Claims, TokenBundle},
    error::AppError,
    middleware::guards::SESSION_COOKIE,
    response::{ApiResult, JsonApiResponse},
    services::{ServiceContext, auth_service::AuthService},
    state::AppState,
};

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Deserialize)]
pub struct SessionRequest {
    pub session_token: String,
}

#[derive(Debug, serde::Serialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub session_token: String,
    pub token_type: &'static str,
    pub expires_in: usize,
}

impl From<TokenBundle> for TokenResponse {
    fn from(bundle: TokenBundle) -> Self {
        Self {
            access_token: bundle.access_token,
            session_token: bundle.session_token,
            token_type: bundle.token_type,
            expires_in: bundle.expires_in,
        }
    }
}

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/login", post(login))
        .route("/refresh", post(refresh))
        .route("/logout", post(logout))
        .route("/me", get(me))
        .with_state(state)
}

async fn login(
    State(state): State<Arc<AppState>>,
    Json(body): Json<LoginRequest>,
) -> Result<Response, AppError> {
    let bundle = auth_from_state(state.as_ref())
        .login(&body.email, &body.password)
        .await?;
    bundle_response(bundle)
}

async fn refresh(
    State(state): State<Arc<AppState>>,
    Json(body): Json<SessionRequest>,
) -> Result<Response, AppError> {
    let bundle = auth_from_state(state.as_ref())
        .refresh(&body.session_token)
        .await?;
    bundle_response(bundle)
}

async fn logout(
    State(state): State<Arc<AppState>>,
    Json(body): Json<SessionRequest>,
) -> Result<Response, AppError> {
    auth_from_state(state.as_ref())
        .logout(&body.session_token)
        .await?;
    let mut response = JsonApiResponse::ok(serde_json::Value::Null)?.into_response();
    response
        .headers_mut()
        .insert(header::SET_COOKIE, clear_session_cookie()?);
    Ok(response)
}

async fn me(claims: Claims) -> ApiResult<Claims> {
    JsonApiResponse::ok(claims)
}

/// The access token travels both in the body (for API clients) and in the
/// `session` cookie (for the console).
fn bundle_response(bundle: TokenBundle) -> Result<Response, AppError> {
    let cookie = session_cookie(&bundle.access_token, bundle.expires_in)?;
    let mut response = JsonApiResponse::ok(TokenResponse::from(bundle))?.into_response();
    response.headers_mut().insert(header::SET_COOKIE, cookie);
    Ok(response)
}

fn session_cookie(access_token: &str, max_age: usize) -> Result<HeaderValue, AppError> {
    HeaderValue::from_str(&format!(
        "{SESSION_COOKIE}={access_token}; Path=/; HttpOnly; SameSite=Lax; Max-Age={max_age}"
    ))
    .map_err(|err| AppError::internal_with_source("Cookie encoding failed", err))
}

fn clear_session_cookie() -> Result<HeaderValue, AppError> {
    HeaderValue::from_str(&format!(
        "{SESSION_COOKIE}=; Path=/; HttpOnly; SameSite=Lax; Max-Age=0"
    ))
    .map_err(|err| AppError::internal_with_source("Cookie encoding failed", err))
}

fn auth_from_state(state: &AppState) -> AuthService {
    ServiceContext::from_state(state).auth(&state.jwt)
}
