//! [`FileStore`] — the JSON-file implementation of [`DreamStore`].

use std::{
  io::ErrorKind,
  path::{Path, PathBuf},
  sync::Arc,
};

use hourglass_core::{
  dream::{self, Dream, NewDream},
  store::DreamStore,
};

use crate::{Error, Result};

/// A dream list stored as a pretty-printed JSON array in a single file.
///
/// Entries are read and rewritten as whole JSON objects; only a file that is
/// not an array of objects is reported as [`Error::Malformed`].
///
/// Every mutation is a full read-modify-write with no locking: two concurrent
/// writers can both read the same list and the later write wins. Cloning is
/// cheap — the path is reference-counted.
#[derive(Debug, Clone)]
pub struct FileStore {
  path: Arc<PathBuf>,
}

impl FileStore {
  /// Use the file at `path`. The file need not exist yet; it is created on
  /// the first mutation.
  pub fn new(path: impl Into<PathBuf>) -> Self {
    Self {
      path: Arc::new(path.into()),
    }
  }

  pub fn path(&self) -> &Path { &self.path }

  async fn load(&self) -> Result<Vec<Dream>> {
    let bytes = match tokio::fs::read(self.path()).await {
      Ok(bytes) => bytes,
      Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
      Err(source) => {
        return Err(Error::Read {
          path: self.path().to_path_buf(),
          source,
        });
      }
    };
    serde_json::from_slice(&bytes).map_err(|source| Error::Malformed {
      path: self.path().to_path_buf(),
      source,
    })
  }

  async fn save(&self, dreams: &[Dream]) -> Result<()> {
    let bytes = serde_json::to_vec_pretty(dreams)?;
    tokio::fs::write(self.path(), bytes)
      .await
      .map_err(|source| Error::Write {
        path: self.path().to_path_buf(),
        source,
      })
  }
}

impl DreamStore for FileStore {
  type Error = Error;

  async fn list(&self) -> Result<Vec<Dream>> {
    let dreams = self.load().await?;
    tracing::debug!(path = ?self.path(), count = dreams.len(), "loaded dreams");
    Ok(dreams)
  }

  async fn add(&self, text: NewDream) -> Result<Vec<Dream>> {
    let mut dreams = self.load().await?;
    let added = dream::push(&mut dreams, text);
    self.save(&dreams).await?;
    tracing::info!(id = ?added.id(), "added dream");
    Ok(dreams)
  }

  async fn remove(&self, id: i64) -> Result<Vec<Dream>> {
    let mut dreams = self.load().await?;
    let removed = dream::remove(&mut dreams, id);
    self.save(&dreams).await?;
    tracing::info!(id, removed, "removed dream");
    Ok(dreams)
  }
}
