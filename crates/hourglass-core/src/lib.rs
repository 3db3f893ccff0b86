//! Core types and arithmetic for Hourglass.
//!
//! This crate is deliberately free of HTTP and filesystem dependencies. The
//! estimator is a handful of pure functions; the dream list is described by
//! the [`store::DreamStore`] trait and implemented elsewhere.

pub mod dream;
pub mod error;
pub mod estimate;
pub mod gender;
pub mod input;
pub mod quotes;
pub mod relation;
pub mod store;

pub use error::{Error, Result};
