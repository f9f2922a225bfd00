//! Shared server state (`spec.md` §5): the database handle, stores, token
//! manager and hasher, all read-only after startup except the database
//! pool's internal locking.

use std::sync::Arc;

use gophkeeper_crypto::Hasher;
use gophkeeper_db::{Database, SecretStore, UserStore};
use gophkeeper_token::TokenManager;

use crate::config::ServerConfig;
use crate::error::ServerResult;

#[derive(Clone)]
pub struct AppState {
    pub users: Arc<UserStore>,
    pub secrets: Arc<SecretStore>,
    pub tokens: Arc<TokenManager>,
    pub hasher: Arc<Hasher>,
}

impl AppState {
    pub fn new(config: &ServerConfig) -> ServerResult<Self> {
        let db = Database::open(&config.database_url)
            .map_err(|err| crate::error::ServerError::Internal(err.to_string()))?;

        let tokens = TokenManager::new(config.auth_key.as_bytes(), config.auth_expiration())
            .map_err(|err| crate::error::ServerError::Internal(err.to_string()))?;

        let hasher = Hasher::new(config.hasher_key.as_bytes())
            .map_err(|err| crate::error::ServerError::Internal(err.to_string()))?;

        Ok(Self {
            users: Arc::new(UserStore::new(db.clone())),
            secrets: Arc::new(SecretStore::new(db)),
            tokens: Arc::new(tokens),
            hasher: Arc::new(hasher),
        })
    }
}
