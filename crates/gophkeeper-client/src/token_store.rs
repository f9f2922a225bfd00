//! Local bearer-token persistence (C5, `spec.md` §4.8 config key `token`).
//!
//! Grounded in the teacher's `ah-credentials::storage` directory layout: a
//! single file under the platform config directory, `0600`-permissioned on
//! unix so other local users can't read a live session token.

use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Persists a single bearer token to `<config_dir>/gophkeeper/token`.
pub struct TokenStore {
    path: PathBuf,
}

impl TokenStore {
    /// The default location: the platform's config directory (`dirs::config_dir`)
    /// joined with `gophkeeper/token`.
    pub fn default_path() -> Result<PathBuf> {
        let mut dir = dirs::config_dir().ok_or_else(|| {
            Error::Io(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                "no platform config directory available",
            ))
        })?;
        dir.push("gophkeeper");
        Ok(dir.join("token"))
    }

    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Opens the store at [`TokenStore::default_path`].
    pub fn open_default() -> Result<Self> {
        Ok(Self::new(Self::default_path()?))
    }

    /// Loads the stored token, if any. Returns `None` rather than an error
    /// when the file doesn't exist (no prior `login`).
    pub fn load(&self) -> Result<Option<String>> {
        match std::fs::read_to_string(&self.path) {
            Ok(contents) => Ok(Some(contents.trim().to_string())),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    /// Writes `token`, creating the parent directory if needed and
    /// restricting the file to owner read/write on unix.
    pub fn save(&self, token: &str) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&self.path, token)?;
        restrict_permissions(&self.path)?;
        Ok(())
    }

    /// Removes the stored token (`auth logout`). Not an error if there was
    /// none.
    pub fn clear(&self) -> Result<()> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err.into()),
        }
    }
}

#[cfg(unix)]
fn restrict_permissions(path: &Path) -> Result<()> {
    use std::os::unix::fs::PermissionsExt;
    let mut perms = std::fs::metadata(path)?.permissions();
    perms.set_mode(0o600);
    std::fs::set_permissions(path, perms)?;
    Ok(())
}

#[cfg(not(unix))]
fn restrict_permissions(_path: &Path) -> Result<()> {
    Ok(())
}
