//! Structured I/O errors.
//!
//! This module defines the error vocabulary of I/O-adjacent code:
//!
//! - [`ErrorKind`]: a closed set of portable failure categories
//! - [`PlatformError`]: one raw operating system error code, captured at the
//!   moment of failure and decoded into an [`ErrorKind`]
//! - [`IoError`]: the error returned by syscall wrappers, which knows its kind,
//!   its raw OS code (if any) and how to render itself
//!
//! Syscall-adjacent code returns [`io::Result`](Result) so the raw OS code is
//! preserved. Higher layers convert into a [`Report`](crate::Report) with `?`
//! and attach context as the error crosses layer boundaries.
//!
//! # Examples
//!
//! ```
//! use violet::{
//!     io::{self, ErrorKind, IoError},
//!     prelude::*,
//! };
//!
//! fn read_config(path: &str) -> io::Result<String> {
//!     std::fs::read_to_string(path).map_err(IoError::from)
//! }
//!
//! fn load() -> Result<String, Report> {
//!     let config = read_config("/does/not/exist/xyzzy")
//!         .context("while loading the configuration")?;
//!     Ok(config)
//! }
//!
//! let report = load().unwrap_err();
//! assert_eq!(report.node_count(), 2);
//! assert_eq!(
//!     report.root_cause().and_then(|frame| frame.downcast_ref::<IoError>()).map(IoError::kind),
//!     Some(ErrorKind::NotFound)
//! );
//! ```

mod error;
mod error_kind;
mod platform;

pub use self::{
    error::IoError,
    error_kind::ErrorKind,
    platform::{PlatformError, RawOsError},
};

/// A [`Result`](core::result::Result) type alias where the error is
/// [`IoError`].
pub type Result<T> = core::result::Result<T, IoError>;
