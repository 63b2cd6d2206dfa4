//! Object store abstraction and its local filesystem implementation.

use async_trait::async_trait;
use attribution_core::{Error, Result};
use std::io::ErrorKind;
use std::path::{Component, Path, PathBuf};
use tracing::debug;

/// Whole-object access under string keys.
///
/// Implemented by `LocalObjectStore` for real runs and by in-memory mocks in
/// tests.
#[async_trait]
pub trait ObjectStore: Send + Sync {
    /// Reads an object. A missing key is a `Storage` error.
    async fn get(&self, key: &str) -> Result<Vec<u8>>;

    /// Writes an object, replacing any existing one.
    async fn put(&self, key: &str, body: Vec<u8>) -> Result<()>;

    /// Copies an object to a new key.
    async fn copy(&self, from: &str, to: &str) -> Result<()>;

    /// Deletes an object. Deleting a missing key is not an error.
    async fn delete(&self, key: &str) -> Result<()>;
}

/// Object store backed by a directory; keys are relative paths under it.
#[derive(Debug, Clone)]
pub struct LocalObjectStore {
    root: PathBuf,
}

impl LocalObjectStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Resolves a key to a path, refusing keys that escape the root.
    fn path(&self, key: &str) -> Result<PathBuf> {
        let relative = Path::new(key);
        let escapes = relative
            .components()
            .any(|c| !matches!(c, Component::Normal(_) | Component::CurDir));
        if key.is_empty() || escapes {
            return Err(Error::storage(format!("invalid object key: {key:?}")));
        }
        Ok(self.root.join(relative))
    }

    async fn ensure_parent(path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
        Ok(())
    }
}

#[async_trait]
impl ObjectStore for LocalObjectStore {
    async fn get(&self, key: &str) -> Result<Vec<u8>> {
        let path = self.path(key)?;
        match tokio::fs::read(&path).await {
            Ok(body) => {
                debug!(key, bytes = body.len(), "Read object");
                Ok(body)
            }
            Err(e) if e.kind() == ErrorKind::NotFound => {
                Err(Error::storage(format!("object not found: {key}")))
            }
            Err(e) => Err(e.into()),
        }
    }

    async fn put(&self, key: &str, body: Vec<u8>) -> Result<()> {
        let path = self.path(key)?;
        Self::ensure_parent(&path).await?;
        let bytes = body.len();
        tokio::fs::write(&path, body).await?;
        debug!(key, bytes, "Wrote object");
        Ok(())
    }

    async fn copy(&self, from: &str, to: &str) -> Result<()> {
        let source = self.path(from)?;
        let target = self.path(to)?;
        Self::ensure_parent(&target).await?;
        match tokio::fs::copy(&source, &target).await {
            Ok(bytes) => {
                debug!(from, to, bytes, "Copied object");
                Ok(())
            }
            Err(e) if e.kind() == ErrorKind::NotFound => {
                Err(Error::storage(format!("object not found: {from}")))
            }
            Err(e) => Err(e.into()),
        }
    }

    async fn delete(&self, key: &str) -> Result<()> {
        let path = self.path(key)?;
        match tokio::fs::remove_file(&path).await {
            Ok(()) => {
                debug!(key, "Deleted object");
                Ok(())
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}
