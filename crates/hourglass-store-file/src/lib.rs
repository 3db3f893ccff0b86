//! Storage backends for the Hourglass dream list.
//!
//! [`FileStore`] keeps the list as one JSON array on disk and rewrites the
//! whole file on every mutation. [`MemoryStore`] keeps it in process memory
//! and is mainly useful in tests.

mod file;
mod memory;

pub mod error;

pub use error::{Error, Result};
pub use file::FileStore;
pub use memory::MemoryStore;
