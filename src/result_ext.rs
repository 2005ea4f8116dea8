use core::fmt;

use crate::{Report, handlers::PayloadHandler};

mod sealed {
    pub trait Sealed {}

    impl<A, E> Sealed for Result<A, E> {}
}

/// Extension methods that attach context to the error of a [`Result`] as it
/// crosses a layer boundary.
///
/// The error is first converted into a [`Report`] (for any `E` with
/// `Report: From<E>`, which covers every error type and `Report` itself), then
/// the context is pushed on top. The root frame created from `E` and the
/// pushed context both record the caller's location.
///
/// ```
/// use violet::prelude::*;
///
/// fn read_config(path: &str) -> Result<String, Report> {
///     let config = std::fs::read_to_string(path)
///         .with_context(|| format!("while reading `{path}`"))?;
///     Ok(config)
/// }
///
/// let report = read_config("/does/not/exist/xyzzy").unwrap_err();
/// assert_eq!(report.to_string(), "while reading `/does/not/exist/xyzzy`");
/// assert_eq!(report.node_count(), 2);
/// ```
pub trait ResultExt<T, E>: sealed::Sealed {
    /// Converts the error into a [`Report`] without adding context.
    #[track_caller]
    fn into_report(self) -> Result<T, Report>;

    /// Pushes `context` on top of the error.
    #[track_caller]
    fn context<C>(self, context: C) -> Result<T, Report>
    where
        C: fmt::Display + fmt::Debug + Send + Sync + 'static;

    /// Pushes the context returned by `context` on top of the error. The
    /// closure only runs if the result is an error.
    #[track_caller]
    fn with_context<C, F>(self, context: F) -> Result<T, Report>
    where
        F: FnOnce() -> C,
        C: fmt::Display + fmt::Debug + Send + Sync + 'static;

    /// Pushes `context` on top of the error, rendered by the handler `H`.
    #[track_caller]
    fn context_custom<H, C>(self, context: C) -> Result<T, Report>
    where
        C: Send + Sync + 'static,
        H: PayloadHandler<C>;
}

impl<T, E> ResultExt<T, E> for Result<T, E>
where
    Report: From<E>,
{
    #[inline]
    fn into_report(self) -> Result<T, Report> {
        match self {
            Ok(v) => Ok(v),
            Err(error) => Err(Report::from(error)),
        }
    }

    #[inline]
    fn context<C>(self, context: C) -> Result<T, Report>
    where
        C: fmt::Display + fmt::Debug + Send + Sync + 'static,
    {
        match self {
            Ok(v) => Ok(v),
            Err(error) => Err(Report::from(error).context(context)),
        }
    }

    #[inline]
    fn with_context<C, F>(self, context: F) -> Result<T, Report>
    where
        F: FnOnce() -> C,
        C: fmt::Display + fmt::Debug + Send + Sync + 'static,
    {
        match self {
            Ok(v) => Ok(v),
            Err(error) => Err(Report::from(error).context(context())),
        }
    }

    #[inline]
    fn context_custom<H, C>(self, context: C) -> Result<T, Report>
    where
        C: Send + Sync + 'static,
        H: PayloadHandler<C>,
    {
        match self {
            Ok(v) => Ok(v),
            Err(error) => Err(Report::from(error).context_custom::<H, C>(context)),
        }
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::ToString;
    use core::panic::Location;

    use super::*;
    use crate::{
        handlers,
        io::{ErrorKind, IoError},
    };

    #[test]
    fn test_context_on_error() {
        let result: Result<(), IoError> = Err(IoError::from_kind(ErrorKind::NotFound));
        let report = result.context("while opening").unwrap_err();
        assert_eq!(report.node_count(), 2);
        assert_eq!(report.to_string(), "while opening");
        assert_eq!(
            report
                .root_cause()
                .and_then(|frame| frame.downcast_ref::<IoError>())
                .map(IoError::kind),
            Some(ErrorKind::NotFound)
        );
    }

    #[test]
    fn test_context_on_report() {
        let result: Result<(), Report> = Err(Report::new("a"));
        let report = result.context("b").unwrap_err();
        assert_eq!(report.node_count(), 2);
    }

    #[test]
    fn test_ok_is_untouched() {
        let mut called = false;
        let result: Result<u8, IoError> = Ok(1);
        let value = result
            .with_context(|| {
                called = true;
                "unused"
            })
            .unwrap();
        assert_eq!(value, 1);
        assert!(!called);
    }

    #[test]
    fn test_locations() {
        let result: Result<(), IoError> = Err(IoError::from_kind(ErrorKind::Other));
        let here = Location::caller().line() + 1;
        let report = result.context_custom::<handlers::Any, _>(()).unwrap_err();
        assert_eq!(report.current_context().unwrap().location().line(), here);
        assert_eq!(report.root_cause().unwrap().location().line(), here);

        let result: Result<(), IoError> = Err(IoError::from_kind(ErrorKind::Other));
        let here = Location::caller().line() + 1;
        let report = result.into_report().unwrap_err();
        assert_eq!(report.node_count(), 1);
        assert_eq!(report.root_cause().unwrap().location().line(), here);
    }
}
