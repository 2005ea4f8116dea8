//! Turning a missing `Option` value into a [`Report`].
//!
//! When an `Option` is `None`, the methods of [`OptionExt`] create a report
//! whose root cause is a [`NoneError`] naming the type of the missing value.
//!
//! ```
//! use violet::{option_ext::OptionExt, prelude::*};
//!
//! fn lookup(key: &str) -> Option<u32> {
//!     None
//! }
//!
//! let report = lookup("retries").context("while reading `retries`").unwrap_err();
//! assert_eq!(report.node_count(), 2);
//! assert_eq!(
//!     report.root_cause().unwrap().to_string(),
//!     "expected a value of type `u32`, found none"
//! );
//! ```

use core::fmt;

use crate::{Report, handlers::PayloadHandler};

/// The root cause of a report created from a `None` value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display, derive_more::Error)]
#[display("expected a value of type `{type_name}`, found none")]
pub struct NoneError {
    type_name: &'static str,
}

impl NoneError {
    /// Creates a `NoneError` for a missing `T`.
    #[must_use]
    pub fn new<T: ?Sized>() -> Self {
        Self {
            type_name: core::any::type_name::<T>(),
        }
    }

    /// Returns the type name of the missing value.
    #[must_use]
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }
}

/// Extension methods that turn `None` into a [`Report`].
pub trait OptionExt<V> {
    /// Converts `None` into a report whose only frame is a [`NoneError`].
    #[track_caller]
    fn ok_or_report(self) -> Result<V, Report>;

    /// Converts `None` into a report with `context` pushed on top of a
    /// [`NoneError`].
    #[track_caller]
    fn context<C>(self, context: C) -> Result<V, Report>
    where
        C: fmt::Display + fmt::Debug + Send + Sync + 'static;

    /// Like [`context`](OptionExt::context), computing the context only when
    /// the value is missing.
    #[track_caller]
    fn with_context<C, F>(self, context: F) -> Result<V, Report>
    where
        F: FnOnce() -> C,
        C: fmt::Display + fmt::Debug + Send + Sync + 'static;

    /// Like [`context`](OptionExt::context), rendering the context with the
    /// handler `H`.
    #[track_caller]
    fn context_custom<H, C>(self, context: C) -> Result<V, Report>
    where
        C: Send + Sync + 'static,
        H: PayloadHandler<C>;
}

impl<V> OptionExt<V> for Option<V> {
    #[inline]
    fn ok_or_report(self) -> Result<V, Report> {
        match self {
            Some(v) => Ok(v),
            None => Err(Report::from(NoneError::new::<V>())),
        }
    }

    #[inline]
    fn context<C>(self, context: C) -> Result<V, Report>
    where
        C: fmt::Display + fmt::Debug + Send + Sync + 'static,
    {
        match self {
            Some(v) => Ok(v),
            None => Err(Report::from(NoneError::new::<V>()).context(context)),
        }
    }

    #[inline]
    fn with_context<C, F>(self, context: F) -> Result<V, Report>
    where
        F: FnOnce() -> C,
        C: fmt::Display + fmt::Debug + Send + Sync + 'static,
    {
        match self {
            Some(v) => Ok(v),
            None => Err(Report::from(NoneError::new::<V>()).context(context())),
        }
    }

    #[inline]
    fn context_custom<H, C>(self, context: C) -> Result<V, Report>
    where
        C: Send + Sync + 'static,
        H: PayloadHandler<C>,
    {
        match self {
            Some(v) => Ok(v),
            None => Err(Report::from(NoneError::new::<V>()).context_custom::<H, C>(context)),
        }
    }
}
