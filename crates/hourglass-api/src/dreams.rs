//! Handlers for the `/dreams` endpoint.
//!
//! | Method   | Path      | Notes |
//! |----------|-----------|-------|
//! | `GET`    | `/dreams` | Full list |
//! | `POST`   | `/dreams` | Body: `{"text":"..."}`; returns the updated list |
//! | `DELETE` | `/dreams` | Body: `{"id":0}`; returns the updated list |
//!
//! A missing, blank or unparsable payload is answered with `200 []` and
//! leaves the store untouched.

use std::sync::Arc;

use axum::{Json, extract::State};
use bytes::Bytes;
use hourglass_core::{
  dream::{Dream, NewDream},
  store::DreamStore,
};
use serde::{Deserialize, de::DeserializeOwned};

use crate::error::ApiError;

/// Parse a JSON body, treating anything unparsable as an empty payload.
fn lenient<T: DeserializeOwned + Default>(body: &Bytes) -> T {
  serde_json::from_slice(body).unwrap_or_default()
}

// ─── List ─────────────────────────────────────────────────────────────────────

/// `GET /dreams`
pub async fn list<S>(
  State(store): State<Arc<S>>,
) -> Result<Json<Vec<Dream>>, ApiError>
where
  S: DreamStore,
{
  let dreams = store.list().await.map_err(ApiError::store)?;
  Ok(Json(dreams))
}

// ─── Create ───────────────────────────────────────────────────────────────────

#[derive(Debug, Default, Deserialize)]
pub struct CreateBody {
  pub text: Option<String>,
}

/// `POST /dreams` — body: `{"text":"..."}`
pub async fn create<S>(
  State(store): State<Arc<S>>,
  body: Bytes,
) -> Result<Json<Vec<Dream>>, ApiError>
where
  S: DreamStore,
{
  let body: CreateBody = lenient(&body);
  let Some(text) = body.text.as_deref().and_then(NewDream::parse) else {
    tracing::warn!("rejected dream with blank or missing text");
    return Ok(Json(Vec::new()));
  };

  let dreams = store.add(text).await.map_err(ApiError::store)?;
  Ok(Json(dreams))
}

// ─── Delete ───────────────────────────────────────────────────────────────────

#[derive(Debug, Default, Deserialize)]
pub struct DeleteBody {
  pub id: Option<i64>,
}

/// `DELETE /dreams` — body: `{"id":0}`
pub async fn remove<S>(
  State(store): State<Arc<S>>,
  body: Bytes,
) -> Result<Json<Vec<Dream>>, ApiError>
where
  S: DreamStore,
{
  let body: DeleteBody = lenient(&body);
  let Some(id) = body.id else {
    tracing::warn!("rejected dream deletion without an id");
    return Ok(Json(Vec::new()));
  };

  let dreams = store.remove(id).await.map_err(ApiError::store)?;
  Ok(Json(dreams))
}
