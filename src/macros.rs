/// Macro to create a [`Report`](crate::Report).
///
/// This macro can be invoked with a format string or with a payload value.
///
/// ## Using a format string
///
/// When the first argument is a literal, the arguments are evaluated as by
/// [`format!()`] and the resulting string becomes the root cause. A format
/// string without arguments is stored as a `&'static str`, without
/// allocating a `String`.
///
/// [`format!()`]: std::format
///
/// ## Using a payload value
///
/// Any other expression becomes the payload of the root cause. The handler
/// that renders it is picked from the payload's type, preferring
/// [`handlers::Error`](crate::handlers::Error), then
/// [`handlers::Display`](crate::handlers::Display), then
/// [`handlers::Any`](crate::handlers::Any).
///
/// # Examples
///
/// ```
/// use std::any::TypeId;
///
/// use violet::prelude::*;
///
/// let report = report!("something broke");
/// assert_eq!(report.current_context().unwrap().type_id(), TypeId::of::<&'static str>());
///
/// let report = report!("something broke: {}", 42);
/// assert_eq!(report.to_string(), "something broke: 42");
/// assert_eq!(report.current_context().unwrap().type_id(), TypeId::of::<String>());
///
/// let report = report!(std::io::Error::from(std::io::ErrorKind::NotFound));
/// assert_eq!(report.to_string(), "entity not found");
///
/// struct Opaque;
/// let report = report!(Opaque);
/// assert!(report.to_string().starts_with("<type "));
/// ```
#[macro_export]
macro_rules! report {
    ($msg:literal $(,)?) => {
        $crate::__private::format_report($crate::__private::format_args!($msg))
    };
    ($context:expr $(,)?) => {
        {
            use $crate::__private::kind::*;
            let context = $context;
            let handler = (&&&Wrap(&context)).handler();
            macro_helper_new_report(handler, context)
        }
    };
    ($fmt:expr, $($arg:tt)*) => {
        $crate::Report::new_custom::<$crate::handlers::Display, _>(
            $crate::__private::format!($fmt, $($arg)*)
        )
    };
}

/// Returns early with an error built by [`report!`].
///
/// `bail!(...)` is equivalent to `return Err(report!(...).into())`, so it can
/// be used in any function whose error type converts from
/// [`Report`](crate::Report).
///
/// # Examples
///
/// ```
/// use violet::prelude::*;
///
/// fn check(value: u32) -> Result<u32, Report> {
///     if value > 10 {
///         bail!("{value} is larger than 10");
///     }
///     Ok(value)
/// }
///
/// assert_eq!(check(3).unwrap(), 3);
/// assert_eq!(check(11).unwrap_err().to_string(), "11 is larger than 10");
/// ```
#[macro_export]
macro_rules! bail {
    ($($args:tt)*) => {
        return $crate::__private::Err($crate::report!($($args)*).into())
    };
}
