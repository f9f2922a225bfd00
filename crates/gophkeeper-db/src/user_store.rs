//! Durable user directory (C6).

use rusqlite::OptionalExtension;

use crate::database::Database;
use crate::error::{Error, Result};
use crate::models::User;

/// Operations on the `users` table. `email` is unique; `password_hash` is
/// never inspected, only compared for exact equality.
pub struct UserStore {
    db: Database,
}

impl UserStore {
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    /// Inserts `(email, password_hash)`, returning the user with its
    /// assigned `id`. Fails with [`Error::UserConflict`] on a duplicate
    /// email.
    pub async fn put_user(&self, email: &str, password_hash: &str) -> Result<User> {
        let email = email.to_string();
        let password_hash = password_hash.to_string();
        self.db
            .with_conn(move |conn| {
                conn.query_row(
                    "INSERT INTO users (email, password_hash) VALUES (?1, ?2) RETURNING id",
                    (&email, &password_hash),
                    |row| row.get::<_, i64>(0),
                )
                .map(|id| User {
                    id,
                    email,
                    password_hash,
                })
            })
            .await
            .map_err(|err| match err {
                Error::Sqlite(rusqlite::Error::SqliteFailure(e, _))
                    if e.code == rusqlite::ErrorCode::ConstraintViolation =>
                {
                    Error::UserConflict
                }
                other => other,
            })
    }

    /// Looks up a user by the exact `(email, password_hash)` pair. Fails
    /// with [`Error::UserNotFound`] on a miss.
    pub async fn get_user(&self, email: &str, password_hash: &str) -> Result<User> {
        let email = email.to_string();
        let password_hash = password_hash.to_string();
        let found = self
            .db
            .with_conn(move |conn| {
                conn.query_row(
                    "SELECT id FROM users WHERE email = ?1 AND password_hash = ?2",
                    (&email, &password_hash),
                    |row| row.get::<_, i64>(0),
                )
                .optional()
                .map(|id| (id, email, password_hash))
            })
            .await?;

        match found {
            (Some(id), email, password_hash) => Ok(User {
                id,
                email,
                password_hash,
            }),
            (None, ..) => Err(Error::UserNotFound),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn store() -> UserStore {
        UserStore::new(Database::open(":memory:").unwrap())
    }

    #[tokio::test]
    async fn put_then_get_round_trips() {
        let store = store().await;
        let created = store.put_user("alice@x", "deadbeef").await.unwrap();
        assert!(created.id > 0);

        let fetched = store.get_user("alice@x", "deadbeef").await.unwrap();
        assert_eq!(fetched, created);
    }

    #[tokio::test]
    async fn duplicate_email_conflicts() {
        let store = store().await;
        store.put_user("alice@x", "hash1").await.unwrap();
        let err = store.put_user("alice@x", "hash2").await.unwrap_err();
        assert!(matches!(err, Error::UserConflict));
    }

    #[tokio::test]
    async fn wrong_password_hash_not_found() {
        let store = store().await;
        store.put_user("alice@x", "correct-hash").await.unwrap();
        let err = store.get_user("alice@x", "wrong-hash").await.unwrap_err();
        assert!(matches!(err, Error::UserNotFound));
    }

    #[tokio::test]
    async fn unknown_email_not_found() {
        let store = store().await;
        let err = store.get_user("nobody@x", "hash").await.unwrap_err();
        assert!(matches!(err, Error::UserNotFound));
    }
}
