//! Error types for `hourglass-core`.

use thiserror::Error;

/// A fault in the estimator's input.
///
/// The web layer shows the `Display` text of any variant as one message; the
/// variants exist so callers and tests can tell the faults apart.
#[derive(Debug, Error, PartialEq)]
pub enum Error {
  #[error("your birthdate or gender is missing")]
  MissingSubject,

  #[error("your parent's age or gender is missing")]
  MissingRelated,

  #[error("invalid date {0:?}: expected YYYY-MM-DD")]
  InvalidDate(String),

  #[error("invalid number for {field}: {value:?}")]
  InvalidNumber { field: &'static str, value: String },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
