//! [`MemoryStore`] — an in-process [`DreamStore`].

use std::{convert::Infallible, sync::Arc};

use hourglass_core::{
  dream::{self, Dream, NewDream},
  store::DreamStore,
};
use tokio::sync::Mutex;

/// A dream list held in memory. Contents are lost when the last clone is
/// dropped.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
  dreams: Arc<Mutex<Vec<Dream>>>,
}

impl MemoryStore {
  pub fn new() -> Self { Self::default() }

  /// Start from an existing list, e.g. to seed a test.
  pub fn with_dreams(dreams: Vec<Dream>) -> Self {
    Self {
      dreams: Arc::new(Mutex::new(dreams)),
    }
  }
}

impl DreamStore for MemoryStore {
  type Error = Infallible;

  async fn list(&self) -> Result<Vec<Dream>, Infallible> {
    Ok(self.dreams.lock().await.clone())
  }

  async fn add(&self, text: NewDream) -> Result<Vec<Dream>, Infallible> {
    let mut dreams = self.dreams.lock().await;
    dream::push(&mut dreams, text);
    Ok(dreams.clone())
  }

  async fn remove(&self, id: i64) -> Result<Vec<Dream>, Infallible> {
    let mut dreams = self.dreams.lock().await;
    dream::remove(&mut dreams, id);
    Ok(dreams.clone())
  }
}
