//! The `DreamStore` trait.
//!
//! The trait is implemented by storage backends (e.g.
//! `hourglass-store-file`). The HTTP layer depends on this abstraction, not on
//! any concrete backend.

use std::future::Future;

use crate::dream::{Dream, NewDream};

/// Abstraction over the backing storage of the dream list.
///
/// Every mutation returns the full list as it stands afterwards. Backends are
/// not required to serialise concurrent mutations.
pub trait DreamStore: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  /// Return every stored dream, or an empty list if nothing has been stored
  /// yet.
  fn list(
    &self,
  ) -> impl Future<Output = Result<Vec<Dream>, Self::Error>> + Send + '_;

  /// Append a dream under the next free id and persist the list.
  fn add(
    &self,
    text: NewDream,
  ) -> impl Future<Output = Result<Vec<Dream>, Self::Error>> + Send + '_;

  /// Remove every dream with `id` and persist the list. Removing an unknown
  /// id is not an error.
  fn remove(
    &self,
    id: i64,
  ) -> impl Future<Output = Result<Vec<Dream>, Self::Error>> + Send + '_;
}
