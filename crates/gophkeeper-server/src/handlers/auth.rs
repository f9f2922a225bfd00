//! `AuthService` handlers (C8, `spec.md` §4.6): register, sign-in,
//! verify-token. SignUp/SignIn are NOT transactional across the user store
//! and the token manager — a durably-committed user survives a subsequent
//! token-minting failure and can retry via SignIn (`spec.md` §4.6).

use axum::{extract::State, Json};
use gophkeeper_proto::{
    SignInRequest, SignInResponse, SignUpRequest, SignUpResponse, VerifyTokenRequest,
    VerifyTokenResponse,
};
use validator::Validate;

use crate::error::{ServerError, ServerResult};
use crate::state::AppState;

pub async fn register(
    State(state): State<AppState>,
    Json(req): Json<SignUpRequest>,
) -> ServerResult<Json<SignUpResponse>> {
    req.validate()?;

    let password_hash = state.hasher.hash(&req.password);
    let user = state.users.put_user(&req.email, &password_hash).await?;
    let access_token = state.tokens.create(user.id)?;

    tracing::info!(user_id = user.id, "registered user");
    Ok(Json(SignUpResponse { access_token }))
}

pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<SignInRequest>,
) -> ServerResult<Json<SignInResponse>> {
    req.validate()?;

    let password_hash = state.hasher.hash(&req.password);
    let user = state
        .users
        .get_user(&req.email, &password_hash)
        .await
        .map_err(|err| match err {
            gophkeeper_db::Error::UserNotFound => {
                ServerError::Unauthenticated("invalid email or password".to_string())
            }
            other => other.into(),
        })?;
    let access_token = state.tokens.create(user.id)?;

    Ok(Json(SignInResponse { access_token }))
}

pub async fn verify(
    State(state): State<AppState>,
    Json(req): Json<VerifyTokenRequest>,
) -> ServerResult<Json<VerifyTokenResponse>> {
    if req.access_token.trim().is_empty() {
        return Err(ServerError::Unauthenticated("empty token".to_string()));
    }

    let payload = state.tokens.validate(&req.access_token)?;
    Ok(Json(VerifyTokenResponse {
        user_id: payload.user_id,
    }))
}
