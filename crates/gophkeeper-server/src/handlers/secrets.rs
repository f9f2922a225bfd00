//! `SecretService` handlers (C9, `spec.md` §4.6). `user_id` is always drawn
//! from the request context via [`AuthedUser`], never from the request body
//! — this is what makes the cross-user isolation invariant (`spec.md` §8,
//! S5) hold by construction.

use axum::{
    extract::{Path, State},
    Json,
};
use gophkeeper_proto::{
    CreateSecretRequest, CreateSecretResponse, DeleteSecretResponse, GetSecretResponse,
    ListSecretsResponse, SecretSummary, UpdateSecretRequest, UpdateSecretResponse,
};
use validator::Validate;

use crate::auth::AuthedUser;
use crate::error::{ServerError, ServerResult};
use crate::state::AppState;

pub async fn get_secret(
    State(state): State<AppState>,
    AuthedUser(owner_id): AuthedUser,
    Path(name): Path<String>,
) -> ServerResult<Json<GetSecretResponse>> {
    if name.is_empty() {
        return Err(ServerError::InvalidArgument("name must not be empty".into()));
    }

    let secret = state.secrets.get(owner_id, &name).await?;
    Ok(Json(GetSecretResponse {
        name: secret.name,
        content: secret.content,
        version: secret.version,
    }))
}

pub async fn create_secret(
    State(state): State<AppState>,
    AuthedUser(owner_id): AuthedUser,
    Json(req): Json<CreateSecretRequest>,
) -> ServerResult<Json<CreateSecretResponse>> {
    req.validate()?;
    if !req.validate_content() {
        return Err(ServerError::InvalidArgument("content must not be empty".into()));
    }

    let secret = state.secrets.create(owner_id, &req.name, req.content).await?;
    Ok(Json(CreateSecretResponse {
        name: secret.name,
        version: secret.version,
    }))
}

pub async fn update_secret(
    State(state): State<AppState>,
    AuthedUser(owner_id): AuthedUser,
    Path(name): Path<String>,
    Json(req): Json<UpdateSecretRequest>,
) -> ServerResult<Json<UpdateSecretResponse>> {
    if name.is_empty() {
        return Err(ServerError::InvalidArgument("name must not be empty".into()));
    }
    if !req.validate_content() {
        return Err(ServerError::InvalidArgument("content must not be empty".into()));
    }

    let secret = state.secrets.update(owner_id, &name, req.content).await?;
    Ok(Json(UpdateSecretResponse {
        name: secret.name,
        version: secret.version,
    }))
}

pub async fn delete_secret(
    State(state): State<AppState>,
    AuthedUser(owner_id): AuthedUser,
    Path(name): Path<String>,
) -> ServerResult<Json<DeleteSecretResponse>> {
    if name.is_empty() {
        return Err(ServerError::InvalidArgument("name must not be empty".into()));
    }

    state.secrets.delete(owner_id, &name).await?;
    Ok(Json(DeleteSecretResponse { name }))
}

pub async fn list_secrets(
    State(state): State<AppState>,
    AuthedUser(owner_id): AuthedUser,
) -> ServerResult<Json<ListSecretsResponse>> {
    let secrets = state
        .secrets
        .list(owner_id)
        .await?
        .into_iter()
        .map(|s| SecretSummary {
            name: s.name,
            content: s.content,
            version: s.version,
        })
        .collect();

    Ok(Json(ListSecretsResponse { secrets }))
}
