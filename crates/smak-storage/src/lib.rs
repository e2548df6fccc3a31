//! Storage abstraction for the Smak front controller.
//!
//! This crate provides a [`Storage`] trait for abstracting template, shell and
//! navigation file access from the underlying backend. This enables:
//!
//! - **Unit testing** of routing and rendering without touching the real filesystem
//! - **Clean separation** between resolution logic and I/O operations
//!
//! # Architecture
//!
//! The crate provides:
//! - [`Storage`] trait with `read()` and `exists()` methods
//! - [`FsStorage`] implementation rooted at the site directory
//! - [`MockStorage`] for testing (behind `mock` feature flag)
//!
//! # Example
//!
//! ```ignore
//! use std::path::PathBuf;
//! use smak_storage::{FsStorage, Storage};
//!
//! let storage = FsStorage::new(PathBuf::from("site"));
//! if storage.exists("tpl/about.tpl") {
//!     let body = storage.read("tpl/about.tpl")?;
//! }
//! ```

mod fs;
#[cfg(feature = "mock")]
mod mock;
mod storage;

pub use fs::FsStorage;
#[cfg(feature = "mock")]
pub use mock::MockStorage;
pub use storage::{Storage, StorageError, StorageErrorKind, normalize_key};
