//! Handlers for the estimator page.
//!
//! | Method | Path | Notes |
//! |--------|------|-------|
//! | `GET`  | `/`  | Empty form |
//! | `POST` | `/`  | urlencoded form; renders the result or an error message |

use axum::{
  Form,
  extract::rejection::FormRejection,
  response::Html,
};
use chrono::Local;
use hourglass_core::{estimate::estimate, quotes};

use crate::{
  form::raw_estimate,
  page::{Outcome, render},
};

/// `GET /`
pub async fn index() -> Html<String> {
  Html(render(quotes::random(), Outcome::Blank))
}

/// `POST /`
///
/// A body that is not a urlencoded form is treated as an empty one, so it
/// ends up reported as missing fields like any other input fault.
pub async fn submit(
  form: Result<Form<Vec<(String, String)>>, FormRejection>,
) -> Html<String> {
  let quote = quotes::random();
  let pairs = form.map(|Form(pairs)| pairs).unwrap_or_default();
  let today = Local::now().date_naive();

  match raw_estimate(pairs).parse(today) {
    Ok(input) => {
      let result = estimate(&input);
      tracing::info!(
        relations = result.relations.len(),
        together_years = result.together.years,
        "computed estimate"
      );
      Html(render(quote, Outcome::Result(&result)))
    }
    Err(e) => {
      tracing::warn!(error = %e, "rejected estimator input");
      Html(render(quote, Outcome::Error(&e.to_string())))
    }
  }
}
