//! Local-filesystem asset store.
//!
//! Uploaded icon/image files are written under a single configured root
//! directory and addressed by their generated stored name (see
//! `stockroom_core::naming`). Every read and write validates the name
//! against the traversal guard before touching the filesystem, so no
//! operation can escape the root.
//!
//! Asset writes are deliberately not transactional with record writes: the
//! service layer stores the asset first and persists the record second, so
//! a crash in between leaves an orphaned file rather than a record pointing
//! at a missing asset. Orphans are never cleaned up here.

use std::path::{Path, PathBuf};

use stockroom_core::naming::is_safe_stored_name;

/// Errors raised by the asset store.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// The storage root could not be created or is not a directory.
    /// Fatal: startup must abort when `init` fails.
    #[error("Could not initialize storage root {path}: {source}")]
    Init {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// An asset write failed (disk full, permissions, ...).
    #[error("Could not store asset '{name}': {source}")]
    Write {
        name: String,
        #[source]
        source: std::io::Error,
    },

    /// An asset read failed for a reason other than absence.
    #[error("Could not read asset '{name}': {source}")]
    Read {
        name: String,
        #[source]
        source: std::io::Error,
    },

    /// A read of a stored name that does not exist under the root.
    #[error("Asset not found: '{name}'")]
    NotFound { name: String },

    /// A name that failed the traversal guard.
    #[error("Invalid stored asset name: '{name}'")]
    InvalidName { name: String },
}

/// Filesystem-backed blob store rooted at a configured directory.
#[derive(Debug, Clone)]
pub struct AssetStore {
    root: PathBuf,
}

impl AssetStore {
    /// Create a store handle for `root`. Does not touch the filesystem;
    /// call [`AssetStore::init`] before first use.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// The configured storage root.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Idempotently ensure the storage root exists.
    ///
    /// Safe to call on every process start. Fails if the path cannot be
    /// created or already exists as something other than a directory.
    pub async fn init(&self) -> Result<(), StorageError> {
        tokio::fs::create_dir_all(&self.root)
            .await
            .map_err(|source| StorageError::Init {
                path: self.root.clone(),
                source,
            })?;
        tracing::debug!(root = %self.root.display(), "Asset store initialized");
        Ok(())
    }

    /// Write `bytes` under the root at `stored_name`, overwriting any
    /// existing asset with the same name (idempotent write).
    pub async fn store(&self, stored_name: &str, bytes: &[u8]) -> Result<(), StorageError> {
        let path = self.path_of(stored_name)?;
        tokio::fs::write(&path, bytes)
            .await
            .map_err(|source| StorageError::Write {
                name: stored_name.to_string(),
                source,
            })?;
        tracing::debug!(name = stored_name, size = bytes.len(), "Stored asset");
        Ok(())
    }

    /// Read the full content of the asset at `stored_name`.
    pub async fn resolve(&self, stored_name: &str) -> Result<Vec<u8>, StorageError> {
        let path = self.path_of(stored_name)?;
        match tokio::fs::read(&path).await {
            Ok(bytes) => Ok(bytes),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Err(StorageError::NotFound {
                name: stored_name.to_string(),
            }),
            Err(source) => Err(StorageError::Read {
                name: stored_name.to_string(),
                source,
            }),
        }
    }

    /// Whether an asset with `stored_name` exists under the root.
    pub async fn exists(&self, stored_name: &str) -> Result<bool, StorageError> {
        let path = self.path_of(stored_name)?;
        Ok(tokio::fs::try_exists(&path).await.unwrap_or(false))
    }

    /// Validate `stored_name` and join it onto the root.
    ///
    /// Fails with [`StorageError::InvalidName`] for names that could escape
    /// the root. The returned path is not checked for existence.
    pub fn path_of(&self, stored_name: &str) -> Result<PathBuf, StorageError> {
        if !is_safe_stored_name(stored_name) {
            return Err(StorageError::InvalidName {
                name: stored_name.to_string(),
            });
        }
        Ok(self.root.join(stored_name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stockroom_core::naming::stored_asset_name;
    use uuid::Uuid;

    fn temp_store() -> (tempfile::TempDir, AssetStore) {
        let dir = tempfile::tempdir().unwrap();
        let store = AssetStore::new(dir.path().join("uploads"));
        (dir, store)
    }

    #[tokio::test]
    async fn init_is_idempotent() {
        let (_dir, store) = temp_store();
        store.init().await.unwrap();
        store.init().await.unwrap();
        assert!(store.root().is_dir());
    }

    #[tokio::test]
    async fn init_fails_when_root_is_a_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("occupied");
        std::fs::write(&path, b"not a directory").unwrap();

        let store = AssetStore::new(&path);
        let err = store.init().await.unwrap_err();
        assert!(matches!(err, StorageError::Init { .. }));
    }

    #[tokio::test]
    async fn store_then_resolve_round_trips() {
        let (_dir, store) = temp_store();
        store.init().await.unwrap();

        let name = stored_asset_name("icon.png", Uuid::new_v4());
        store.store(&name, b"binary-bytes").await.unwrap();

        let bytes = store.resolve(&name).await.unwrap();
        assert_eq!(bytes, b"binary-bytes");
    }

    #[tokio::test]
    async fn store_overwrites_existing_asset() {
        let (_dir, store) = temp_store();
        store.init().await.unwrap();

        store.store("a.png", b"first").await.unwrap();
        store.store("a.png", b"second").await.unwrap();
        assert_eq!(store.resolve("a.png").await.unwrap(), b"second");
    }

    #[tokio::test]
    async fn resolve_missing_asset_is_not_found() {
        let (_dir, store) = temp_store();
        store.init().await.unwrap();

        let err = store.resolve("missing.png").await.unwrap_err();
        assert!(matches!(err, StorageError::NotFound { .. }));
    }

    #[tokio::test]
    async fn traversal_names_are_rejected() {
        let (_dir, store) = temp_store();
        store.init().await.unwrap();

        for name in ["../escape.png", "a/b.png", "", ".."] {
            let err = store.store(name, b"x").await.unwrap_err();
            assert!(matches!(err, StorageError::InvalidName { .. }), "{name}");
            let err = store.resolve(name).await.unwrap_err();
            assert!(matches!(err, StorageError::InvalidName { .. }), "{name}");
        }
    }

    #[test]
    fn path_of_joins_under_the_root() {
        let store = AssetStore::new("/srv/uploads");
        let path = store.path_of("a1b2.png").unwrap();
        assert_eq!(path, Path::new("/srv/uploads/a1b2.png"));

        let err = store.path_of("../a1b2.png").unwrap_err();
        assert!(matches!(err, StorageError::InvalidName { .. }));
    }

    #[tokio::test]
    async fn exists_reports_presence() {
        let (_dir, store) = temp_store();
        store.init().await.unwrap();

        assert!(!store.exists("x.png").await.unwrap());
        store.store("x.png", b"data").await.unwrap();
        assert!(store.exists("x.png").await.unwrap());
    }
}
