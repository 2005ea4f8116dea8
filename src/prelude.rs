//! Commonly used items for convenient importing.
//!
//! ```
//! use violet::prelude::*;
//!
//! fn divide(a: i32, b: i32) -> Result<i32, Report> {
//!     if b == 0 {
//!         bail!("cannot divide by zero");
//!     }
//!     Ok(a / b)
//! }
//!
//! assert_eq!(divide(10, 2).unwrap(), 5);
//! assert_eq!(divide(1, 0).unwrap_err().to_string(), "cannot divide by zero");
//! ```
//!
//! The prelude includes:
//!
//! - **[`Report`]**: the error chain
//! - **[`ResultExt`]** and **[`OptionExt`]**: context on `Result` and `Option`
//! - **[`report!`]** and **[`bail!`]**: creating and returning reports
//! - **[`handlers`]**: the built-in payload handlers
//! - **[`Any`]**: re-exported from `core::any`

pub use core::any::Any;

pub use crate::{
    Report, bail, handlers, option_ext::OptionExt, report, result_ext::ResultExt,
};
