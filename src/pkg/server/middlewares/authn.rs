use std::sync::Arc;

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};
use axum_extra::extract::CookieJar;

use crate::{
    conf::settings,
    pkg::{
        internal::auth::{AuthedUser, Session, SESSION_COOKIE},
        server::state::AppState,
    },
    prelude::{AppError, Result},
};

/// Resolves the session cookie into the request's identity, if any.
pub async fn identify(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response> {
    let jar = CookieJar::from_headers(request.headers());
    let mut current: Option<Arc<AuthedUser>> = None;
    if let Some(cookie) = jar.get(SESSION_COOKIE).filter(|c| !c.value().is_empty()) {
        current = Session::authenticate(&state, cookie.value())
            .await?
            .map(Arc::new);
    }
    request.extensions_mut().insert(current);
    Ok(next.run(request).await)
}

/// Bounces anonymous requests to the login page.
pub async fn require_user(mut request: Request, next: Next) -> Response {
    let current = request
        .extensions()
        .get::<Option<Arc<AuthedUser>>>()
        .cloned()
        .flatten();
    match current {
        Some(user) => {
            request.extensions_mut().insert(user);
            next.run(request).await
        }
        None => {
            tracing::warn!("session missing, redirecting to login");
            Redirect::to("/login").into_response()
        }
    }
}

/// Independent gate for the admin subtree; stays closed while no token is configured.
pub async fn require_admin(request: Request, next: Next) -> Result<Response> {
    let presented = request
        .headers()
        .get("x-admin-token")
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default();
    if settings.admin_token.is_empty() || presented != settings.admin_token {
        tracing::warn!("admin token missing or wrong, access denied");
        return Err(AppError::Unauthorized);
    }
    Ok(next.run(request).await)
}
