use std::{marker::PhantomData, sync::Arc};

use axum::{
    extract::{FromRequestParts, Request, State},
    http::header,
    middleware::Next,
    response::{IntoResponse, Response},
};

use crate::{
    auth::{Claims, RequiredRole, Role, jwt::decode_token},
    error::AppError,
    state::AppState,
};

pub const SESSION_COOKIE: &str = "session";

/// Auth guard: validate the access token and return its claims. The token is
/// taken from `Authorization: Bearer` or, for the console's cookie flow, from
/// the `session` cookie.
impl FromRequestParts<Arc<AppState>> for Claims {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut axum::http::request::Parts,
        state: &Arc<AppState>,
    ) -> Result<Self, Self::Rejection> {
        if let Some(claims) = parts.extensions.get::<Claims>().cloned() {
            return Ok(claims);
        }

        let token = bearer_token(&parts.headers)
            .or_else(|| cookie_value(&parts.headers, SESSION_COOKIE))
            .ok_or_else(|| AppError::unauthorized("Missing access token"))?;

        let claims = decode_token(&state.jwt, &token)?;

        parts.extensions.insert(claims.clone());
        Ok(claims)
    }
}

fn bearer_token(headers: &axum::http::HeaderMap) -> Option<String> {
    headers
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .map(str::to_string)
}

fn cookie_value(headers: &axum::http::HeaderMap, name: &str) -> Option<String> {
    let cookies = headers.get(header::COOKIE)?.to_str().ok()?;
    cookies.split(';').find_map(|pair| {
        let (key, value) = pair.trim().split_once('=')?;
        (key == name).then(|| value.to_string())
    })
}

pub struct AuthRoleGuard<R: RequiredRole> {
    pub claims: Claims,
    _marker: PhantomData<R>,
}

impl<R> FromRequestParts<Arc<AppState>> for AuthRoleGuard<R>
where
    R: RequiredRole,
{
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut axum::http::request::Parts,
        state: &Arc<AppState>,
    ) -> Result<Self, Self::Rejection> {
        let claims = Claims::from_request_parts(parts, state).await?;

        if !claims.roles.iter().any(|role| role == &R::required()) {
            return Err(AppError::forbidden("Missing required role"));
        }

        Ok(Self {
            claims,
            _marker: PhantomData,
        })
    }
}

/// Router-level role gate, used to protect whole admin sub-routers via
/// `middleware::from_fn_with_state`. Individual handlers use
/// [`AuthRoleGuard`] instead.
pub async fn require_admin(
    State(state): State<Arc<AppState>>,
    req: Request,
    next: Next,
) -> Response {
    require_role(state, Role::Admin, req, next).await
}

async fn require_role(
    state: Arc<AppState>,
    required: Role,
    req: Request,
    next: Next,
) -> Response {
    let (mut parts, body) = req.into_parts();
    let claims = match Claims::from_request_parts(&mut parts, &state).await {
        Ok(claims) => claims,
        Err(err) => return err.into_response(),
    };

    if !claims.roles.iter().any(|role| role == &required) {
        return AppError::forbidden("Missing required role").into_response();
    }

    next.run(Request::from_parts(parts, body)).await
}

#[cfg(test)]
mod tests {
    use axum::http::{HeaderMap, HeaderValue, header};

    use super::{SESSION_COOKIE, bearer_token, cookie_value};

    #[test]
    fn extracts_bearer_tokens() {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::AUTHORIZATION,
            HeaderValue::from_static("Bearer abc.def.ghi"),
        );
        assert_eq!(bearer_token(&headers), Some("abc.def.ghi".to_string()));

        headers.insert(header::AUTHORIZATION, HeaderValue::from_static("Basic xyz"));
        assert_eq!(bearer_token(&headers), None);
    }

    #[test]
    fn extracts_session_cookie_among_others() {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::COOKIE,
            HeaderValue::from_static("theme=dark; session=tok-123; lang=en"),
        );
        assert_eq!(
            cookie_value(&headers, SESSION_COOKIE),
            Some("tok-123".to_string())
        );
        assert_eq!(cookie_value(&headers, "missing"), None);
    }
}
