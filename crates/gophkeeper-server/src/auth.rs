//! The request-identity interceptor (C10, `spec.md` §4.7).
//!
//! [`require_bearer_token`] is installed as an `axum::middleware::from_fn_with_state`
//! layer scoped to the secret-service route subtree only (see
//! `server::Server::build_app`) — `SignUp`/`SignIn`/`VerifyToken` are public
//! per `spec.md` §4.7 and live on a sibling route tree this middleware never
//! sees, so there's no path-based public/non-public split here to collide
//! with a secret name. On success the validated `user_id` is attached to the
//! request's extensions — the "immutable per-request identity bag" called
//! out in `spec.md` §9 — and handlers read it back out through the
//! [`AuthedUser`] extractor, which itself fails `Unauthenticated` if the
//! extension was never inserted (the one axum request type covers both the
//! streaming and non-streaming interceptor flavors `spec.md` §4.7 calls for,
//! since there is no separate streaming transport here).

use axum::{
    extract::{FromRequestParts, Request, State},
    http::request::Parts,
    middleware::Next,
    response::Response,
};

use crate::error::ServerError;
use crate::state::AppState;

/// The authenticated caller's identity, injected by [`require_bearer_token`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuthedUser(pub i64);

impl<S> FromRequestParts<S> for AuthedUser
where
    S: Send + Sync,
{
    type Rejection = ServerError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<AuthedUser>()
            .copied()
            .ok_or_else(|| ServerError::Unauthenticated("no identity in request context".into()))
    }
}

/// The auth interceptor: validates the `authorization: Bearer <token>`
/// header and injects [`AuthedUser`] into the request before invoking the
/// next handler. Every route this middleware is layered on requires a
/// token — the public/non-public split happens at the routing level
/// (`server::Server::build_app`), not here.
pub async fn require_bearer_token(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, ServerError> {
    let header = req
        .headers()
        .get(axum::http::header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .unwrap_or("");

    let token = header.strip_prefix("Bearer ").unwrap_or(header).trim();
    if token.is_empty() {
        return Err(ServerError::Unauthenticated("empty token".to_string()));
    }

    let payload = state.tokens.validate(token)?;
    req.extensions_mut().insert(AuthedUser(payload.user_id));

    Ok(next.run(req).await)
}
