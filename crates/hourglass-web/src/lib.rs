//! The Hourglass web service.
//!
//! Serves the estimator page at `/` and mounts the dream list API from
//! [`hourglass_api`] under `/api`.

pub mod estimator;
pub mod form;
pub mod page;

use std::{
  path::{Path, PathBuf},
  sync::Arc,
};

use axum::{Router, routing::get};
use hourglass_core::store::DreamStore;
use serde::Deserialize;
use tower_http::trace::TraceLayer;

// ─── Configuration ────────────────────────────────────────────────────────────

/// Runtime server configuration.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ServerConfig {
  pub host:        String,
  pub port:        u16,
  /// JSON file holding the dream list. A leading `~/` is expanded.
  pub dreams_path: PathBuf,
}

impl ServerConfig {
  /// Layer built-in defaults, the TOML file at `path` (if it exists) and
  /// `HOURGLASS_*` environment variables, in that order.
  pub fn load(path: &Path) -> Result<Self, config::ConfigError> {
    config::Config::builder()
      .set_default("host", "0.0.0.0")?
      .set_default("port", 5001)?
      .set_default("dreams_path", "dreams.json")?
      .add_source(config::File::from(path.to_path_buf()).required(false))
      .add_source(config::Environment::with_prefix("HOURGLASS"))
      .build()?
      .try_deserialize()
  }

  pub fn address(&self) -> String { format!("{}:{}", self.host, self.port) }

  /// `dreams_path` with a leading `~/` replaced by `$HOME`.
  pub fn resolved_dreams_path(&self) -> PathBuf {
    if let Ok(rest) = self.dreams_path.strip_prefix("~")
      && let Ok(home) = std::env::var("HOME")
    {
      return PathBuf::from(home).join(rest);
    }
    self.dreams_path.clone()
  }
}

// ─── Router ───────────────────────────────────────────────────────────────────

/// Build the full application router over `store`.
pub fn router<S>(store: Arc<S>) -> Router
where
  S: DreamStore + 'static,
{
  Router::new()
    .route("/", get(estimator::index).post(estimator::submit))
    .nest("/api", hourglass_api::api_router(store))
    .layer(TraceLayer::new_for_http())
}

// ─── Integration tests ────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
  use super::*;

  use axum::{
    body::Body,
    http::{Request, StatusCode, header},
    response::Response,
  };
  use chrono::{Days, Local};
  use hourglass_core::quotes::QUOTES;
  use hourglass_store_file::MemoryStore;
  use tower::ServiceExt as _;

  async fn oneshot_raw(
    method:       &str,
    uri:          &str,
    content_type: &str,
    body:         &str,
  ) -> Response {
    let req = Request::builder()
      .method(method)
      .uri(uri)
      .header(header::CONTENT_TYPE, content_type)
      .body(Body::from(body.to_string()))
      .unwrap();
    router(Arc::new(MemoryStore::new())).oneshot(req).await.unwrap()
  }

  async fn post_form(body: &str) -> String {
    let resp =
      oneshot_raw("POST", "/", "application/x-www-form-urlencoded", body).await;
    assert_eq!(resp.status(), StatusCode::OK);
    text(resp).await
  }

  async fn text(resp: Response) -> String {
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
  }

  /// A birthdate exactly `years` 365-day blocks before today.
  fn birthdate_for_age(years: u64) -> String {
    let today = Local::now().date_naive();
    (today - Days::new(years * 365)).format("%Y-%m-%d").to_string()
  }

  fn contains_quote(html: &str) -> bool {
    QUOTES.iter().any(|q| html.contains(q))
  }

  // ── GET / ───────────────────────────────────────────────────────────────────

  #[tokio::test]
  async fn index_renders_form_and_a_quote() {
    let resp = oneshot_raw("GET", "/", "text/plain", "").await;
    assert_eq!(resp.status(), StatusCode::OK);
    let ct = resp.headers().get(header::CONTENT_TYPE).unwrap().to_str().unwrap();
    assert!(ct.starts_with("text/html"), "Content-Type: {ct}");
    let html = text(resp).await;
    assert!(html.contains("<form"));
    assert!(contains_quote(&html));
    assert!(!html.contains(r#"id="result""#));
  }

  // ── POST / ──────────────────────────────────────────────────────────────────

  #[tokio::test]
  async fn worked_example() {
    let body = format!(
      "my_birthdate={}&my_gender=male&parent_age=70&parent_gender=female\
       &visits=2&stay=3&hours=5",
      birthdate_for_age(40)
    );
    let html = post_form(&body).await;
    assert!(html.contains(r#"id="me-age">40<"#), "{html}");
    assert!(html.contains(r#"id="me-years">41<"#));
    assert!(html.contains(r#"id="parent-years">17<"#));
    assert!(html.contains(r#"id="together-years">17<"#));
    assert!(html.contains(r#"id="together-days">102<"#));
    assert!(html.contains(r#"id="together-hours">510<"#));
    assert!(contains_quote(&html));
  }

  #[tokio::test]
  async fn relations_are_skipped_or_defaulted() {
    let body = format!(
      "my_birthdate={}&my_gender=female&parent_age=60&parent_gender=male\
       &relation_name%5B%5D=Ada&relation_age%5B%5D=8\
       &relation_daily_hours%5B%5D=oops&relation_leave_age%5B%5D=\
       &relation_name%5B%5D=+&relation_age%5B%5D=3\
       &relation_daily_hours%5B%5D=1&relation_leave_age%5B%5D=18\
       &relation_name%5B%5D=Bob&relation_age%5B%5D=old\
       &relation_daily_hours%5B%5D=1&relation_leave_age%5B%5D=18",
      birthdate_for_age(30)
    );
    let html = post_form(&body).await;
    assert_eq!(html.matches(r#"class="relation""#).count(), 1, "{html}");
    assert!(html.contains("<td>Ada</td><td>8</td><td>10</td><td>3650</td><td>0.0</td>"));
    assert!(!html.contains("Bob"));
  }

  #[tokio::test]
  async fn absurd_visit_numbers_still_render_a_result() {
    let body = format!(
      "my_birthdate={}&my_gender=male&parent_age=-9223372036854775808\
       &parent_gender=female&visits=9999999999&stay=9999999999&hours=5",
      birthdate_for_age(40)
    );
    let html = post_form(&body).await;
    assert!(html.contains(r#"id="result""#), "{html}");
    assert!(html.contains(&format!(r#"id="parent-hours">{}<"#, i64::MAX)));
    assert!(html.contains(&format!(r#"id="together-days">{}<"#, i64::MAX)));
  }

  #[tokio::test]
  async fn missing_fields_render_error() {
    let html = post_form("my_gender=male").await;
    assert!(html.contains(r#"id="error""#));
    assert!(!html.contains(r#"id="result""#));
    assert!(contains_quote(&html));
  }

  #[tokio::test]
  async fn invalid_date_renders_error() {
    let html = post_form(
      "my_birthdate=yesterday&my_gender=male&parent_age=70&parent_gender=female",
    )
    .await;
    assert!(html.contains(r#"id="error""#));
    assert!(html.contains("yesterday"));
  }

  #[tokio::test]
  async fn non_form_body_renders_error() {
    let resp = oneshot_raw("POST", "/", "application/json", "{}").await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert!(text(resp).await.contains(r#"id="error""#));
  }

  // ── /api ────────────────────────────────────────────────────────────────────

  #[tokio::test]
  async fn dream_api_is_mounted() {
    let resp = oneshot_raw("GET", "/api/dreams", "application/json", "").await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(text(resp).await, "[]");
  }

  // ── Config ──────────────────────────────────────────────────────────────────

  #[test]
  fn missing_config_file_falls_back_to_defaults() {
    let cfg = ServerConfig::load(Path::new("does-not-exist.toml")).unwrap();
    assert_eq!(cfg.host, "0.0.0.0");
    assert_eq!(cfg.port, 5001);
    assert_eq!(cfg.dreams_path, PathBuf::from("dreams.json"));
  }

  #[test]
  fn config_file_overrides_defaults() {
    let path = std::env::temp_dir()
      .join(format!("hourglass-config-{}.toml", std::process::id()));
    std::fs::write(&path, "port = 8080\ndreams_path = \"/srv/dreams.json\"\n")
      .unwrap();
    let cfg = ServerConfig::load(&path);
    let _ = std::fs::remove_file(&path);

    let cfg = cfg.unwrap();
    assert_eq!(cfg.host, "0.0.0.0");
    assert_eq!(cfg.port, 8080);
    assert_eq!(cfg.dreams_path, PathBuf::from("/srv/dreams.json"));
  }

  #[test]
  fn tilde_in_dreams_path_is_expanded() {
    let Ok(home) = std::env::var("HOME") else { return };
    let cfg = ServerConfig {
      host:        "127.0.0.1".into(),
      port:        5001,
      dreams_path: PathBuf::from("~/dreams.json"),
    };
    assert_eq!(cfg.resolved_dreams_path(), PathBuf::from(home).join("dreams.json"));
    assert_eq!(cfg.address(), "127.0.0.1:5001");
  }

  #[test]
  fn plain_dreams_path_is_untouched() {
    let cfg = ServerConfig {
      host:        "0.0.0.0".into(),
      port:        5001,
      dreams_path: PathBuf::from("data/dreams.json"),
    };
    assert_eq!(cfg.resolved_dreams_path(), PathBuf::from("data/dreams.json"));
  }
}
