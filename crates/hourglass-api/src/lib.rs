//! JSON REST API for the Hourglass dream list.
//!
//! Exposes an axum [`Router`] backed by any [`hourglass_core::store::DreamStore`].
//!
//! # Mounting
//!
//! ```rust,ignore
//! .nest("/api", hourglass_api::api_router(store.clone()))
//! ```

pub mod dreams;
pub mod error;

use std::sync::Arc;

use axum::{Router, routing::get};
use hourglass_core::store::DreamStore;

pub use error::ApiError;

/// Build the API router for `store`.
///
/// The returned `Router<()>` can be nested into any parent router regardless
/// of its own state type.
pub fn api_router<S>(store: Arc<S>) -> Router<()>
where
  S: DreamStore + 'static,
{
  Router::new()
    .route(
      "/dreams",
      get(dreams::list::<S>)
        .post(dreams::create::<S>)
        .delete(dreams::remove::<S>),
    )
    .with_state(store)
}
