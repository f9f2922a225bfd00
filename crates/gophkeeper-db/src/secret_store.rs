//! Durable, per-owner secret storage with version stamps (C7).

use rusqlite::OptionalExtension;
use uuid::Uuid;

use crate::database::Database;
use crate::error::{Error, Result};
use crate::models::Secret;

/// Operations on the `secrets` table. Every mutation mints a fresh random
/// 128-bit `version`; two successful mutations never produce the same one.
pub struct SecretStore {
    db: Database,
}

impl SecretStore {
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    /// Looks up a secret scoped to its owner. Fails with
    /// [`Error::SecretNotFound`] if no row matches `(owner_id, name)` —
    /// including when the name exists under a different owner, so a lookup
    /// never distinguishes "doesn't exist" from "someone else's".
    pub async fn get(&self, owner_id: i64, name: &str) -> Result<Secret> {
        let name = name.to_string();
        let found = self
            .db
            .with_conn(move |conn| {
                conn.query_row(
                    "SELECT content, version FROM secrets WHERE owner_id = ?1 AND name = ?2",
                    (owner_id, &name),
                    |row| Ok((row.get::<_, Vec<u8>>(0)?, row.get::<_, String>(1)?)),
                )
                .optional()
                .map(|row| (row, name))
            })
            .await?;

        match found {
            (Some((content, version)), name) => Ok(Secret {
                owner_id,
                name,
                content,
                version,
            }),
            (None, _) => Err(Error::SecretNotFound),
        }
    }

    /// Inserts a new secret, minting its first version. Fails with
    /// [`Error::SecretConflict`] if `(owner_id, name)` already exists.
    pub async fn create(&self, owner_id: i64, name: &str, content: Vec<u8>) -> Result<Secret> {
        let name = name.to_string();
        let version = Uuid::new_v4().to_string();
        let content_clone = content.clone();
        let version_clone = version.clone();
        let name_clone = name.clone();

        self.db
            .with_conn(move |conn| {
                conn.execute(
                    "INSERT INTO secrets (owner_id, name, content, version) \
                     VALUES (?1, ?2, ?3, ?4)",
                    (owner_id, &name_clone, &content_clone, &version_clone),
                )
            })
            .await
            .map(|_| Secret {
                owner_id,
                name,
                content,
                version,
            })
            .map_err(|err| match err {
                Error::Sqlite(rusqlite::Error::SqliteFailure(e, _))
                    if e.code == rusqlite::ErrorCode::ConstraintViolation =>
                {
                    Error::SecretConflict
                }
                other => other,
            })
    }

    /// Overwrites `content` for an existing `(owner_id, name)` row and
    /// atomically stamps a fresh version. Fails with
    /// [`Error::SecretNotFound`] if no row matched.
    pub async fn update(&self, owner_id: i64, name: &str, content: Vec<u8>) -> Result<Secret> {
        let name = name.to_string();
        let version = Uuid::new_v4().to_string();
        let content_clone = content.clone();
        let version_clone = version.clone();
        let name_clone = name.clone();

        let rows_changed = self
            .db
            .with_conn(move |conn| {
                conn.execute(
                    "UPDATE secrets SET content = ?1, version = ?2 \
                     WHERE owner_id = ?3 AND name = ?4",
                    (&content_clone, &version_clone, owner_id, &name_clone),
                )
            })
            .await?;

        if rows_changed == 0 {
            return Err(Error::SecretNotFound);
        }

        Ok(Secret {
            owner_id,
            name,
            content,
            version,
        })
    }

    /// Deletes a secret. Idempotent: deleting a secret that doesn't exist
    /// (or already was deleted) succeeds as a no-op (canonical choice for
    /// the Open Question in `spec.md` §9).
    pub async fn delete(&self, owner_id: i64, name: &str) -> Result<()> {
        let name = name.to_string();
        self.db
            .with_conn(move |conn| {
                conn.execute(
                    "DELETE FROM secrets WHERE owner_id = ?1 AND name = ?2",
                    (owner_id, &name),
                )
            })
            .await?;
        Ok(())
    }

    /// Lists every secret owned by `owner_id`, including `content` (the
    /// canonical "self-contained sync" choice in `spec.md` §4.5/§9). Order
    /// is unspecified.
    pub async fn list(&self, owner_id: i64) -> Result<Vec<Secret>> {
        self.db
            .with_conn(move |conn| {
                let mut stmt = conn.prepare(
                    "SELECT name, content, version FROM secrets WHERE owner_id = ?1",
                )?;
                let rows = stmt
                    .query_map((owner_id,), |row| {
                        Ok(Secret {
                            owner_id,
                            name: row.get(0)?,
                            content: row.get(1)?,
                            version: row.get(2)?,
                        })
                    })?
                    .collect::<rusqlite::Result<Vec<_>>>()?;
                Ok(rows)
            })
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::user_store::UserStore;

    async fn stores() -> (UserStore, SecretStore) {
        let db = Database::open(":memory:").unwrap();
        (UserStore::new(db.clone()), SecretStore::new(db))
    }

    #[tokio::test]
    async fn create_then_get_round_trips() {
        let (users, secrets) = stores().await;
        let owner = users.put_user("alice@x", "hash").await.unwrap().id;

        let created = secrets.create(owner, "gmail", b"ENC1".to_vec()).await.unwrap();
        let fetched = secrets.get(owner, "gmail").await.unwrap();
        assert_eq!(fetched, created);
    }

    #[tokio::test]
    async fn duplicate_name_conflicts() {
        let (users, secrets) = stores().await;
        let owner = users.put_user("alice@x", "hash").await.unwrap().id;

        secrets.create(owner, "gmail", b"ENC1".to_vec()).await.unwrap();
        let err = secrets.create(owner, "gmail", b"ENC2".to_vec()).await.unwrap_err();
        assert!(matches!(err, Error::SecretConflict));
    }

    #[tokio::test]
    async fn update_mints_new_version() {
        let (users, secrets) = stores().await;
        let owner = users.put_user("alice@x", "hash").await.unwrap().id;

        let v1 = secrets.create(owner, "n", b"C1".to_vec()).await.unwrap();
        let v2 = secrets.update(owner, "n", b"C2".to_vec()).await.unwrap();
        assert_ne!(v1.version, v2.version);

        let fetched = secrets.get(owner, "n").await.unwrap();
        assert_eq!(fetched.content, b"C2");
        assert_eq!(fetched.version, v2.version);
    }

    #[tokio::test]
    async fn update_missing_secret_not_found() {
        let (users, secrets) = stores().await;
        let owner = users.put_user("alice@x", "hash").await.unwrap().id;
        let err = secrets.update(owner, "missing", b"C".to_vec()).await.unwrap_err();
        assert!(matches!(err, Error::SecretNotFound));
    }

    #[tokio::test]
    async fn delete_is_idempotent() {
        let (users, secrets) = stores().await;
        let owner = users.put_user("alice@x", "hash").await.unwrap().id;
        secrets.create(owner, "n", b"C".to_vec()).await.unwrap();

        secrets.delete(owner, "n").await.unwrap();
        secrets.delete(owner, "n").await.unwrap();

        let err = secrets.get(owner, "n").await.unwrap_err();
        assert!(matches!(err, Error::SecretNotFound));
    }

    #[tokio::test]
    async fn cross_user_isolation() {
        let (users, secrets) = stores().await;
        let alice = users.put_user("alice@x", "hash").await.unwrap().id;
        let bob = users.put_user("bob@x", "hash").await.unwrap().id;

        secrets.create(alice, "s", b"alice-secret".to_vec()).await.unwrap();

        let err = secrets.get(bob, "s").await.unwrap_err();
        assert!(matches!(err, Error::SecretNotFound));
    }

    #[tokio::test]
    async fn list_returns_all_owner_secrets_with_content() {
        let (users, secrets) = stores().await;
        let owner = users.put_user("alice@x", "hash").await.unwrap().id;
        secrets.create(owner, "a", b"A".to_vec()).await.unwrap();
        secrets.create(owner, "b", b"B".to_vec()).await.unwrap();

        let mut listed = secrets.list(owner).await.unwrap();
        listed.sort_by(|a, b| a.name.cmp(&b.name));
        assert_eq!(listed.len(), 2);
        assert_eq!(listed[0].name, "a");
        assert_eq!(listed[0].content, b"A");
        assert_eq!(listed[1].name, "b");
    }
}
