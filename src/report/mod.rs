//! The [`Report`] error chain and its frames.
//!
//! A report starts from a root cause and collects context as it travels up
//! through the layers of a program:
//!
//! ```
//! use violet::prelude::*;
//!
//! fn save() -> Result<(), Report> {
//!     Err(report!("disk full [/dev/sda1]"))
//! }
//!
//! fn run() -> Result<(), Report> {
//!     save().context("while trying to save `user_data.json`")?;
//!     Ok(())
//! }
//!
//! let report = run().unwrap_err();
//! let messages: Vec<String> = report.iter().map(|frame| frame.to_string()).collect();
//! assert_eq!(
//!     messages,
//!     ["while trying to save `user_data.json`", "disk full [/dev/sda1]"]
//! );
//! ```

mod frame;
mod iter;
mod owned;
mod print;

pub use self::{frame::ReportFrame, iter::Frames, owned::Report, print::FormattingOptions};
