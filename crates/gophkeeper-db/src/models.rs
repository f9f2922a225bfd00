/// A registered user: `email` is unique, `password_hash` is a hex digest
/// from `gophkeeper_crypto::Hasher`, never the cleartext password.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: i64,
    pub email: String,
    pub password_hash: String,
}

/// A stored secret: `content` is opaque ciphertext the store never inspects.
/// `version` is a 128-bit random identifier, stamped fresh on every
/// successful create/update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Secret {
    pub owner_id: i64,
    pub name: String,
    pub content: Vec<u8>,
    pub version: String,
}
