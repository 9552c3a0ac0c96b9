//! tcoperon Common Library
#![deny(clippy::unwrap_used, clippy::expect_used)]
//!
//! Shared error handling and logging setup for the tcoperon workspace.
//!
//! # Overview
//!
//! - **Error Handling**: the [`TcError`] taxonomy and the [`Result`] alias
//! - **Logging**: tracing subscriber configuration (console, file, or both)
//!
//! # Example
//!
//! ```no_run
//! use tcoperon_common::{Result, TcError};
//!
//! fn open_table(path: &str) -> Result<std::fs::File> {
//!     std::fs::File::open(path).map_err(|e| TcError::io(path, e))
//! }
//! ```

pub mod error;
pub mod logging;

// Re-export commonly used types
pub use error::{Result, TcError};
