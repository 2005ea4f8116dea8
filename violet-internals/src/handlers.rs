//! Handlers that define how the payload of a chain node is formatted.
//!
//! A handler is a zero-sized type implementing [`PayloadHandler`] for some
//! payload type. Its functions are monomorphised into the node's vtable when
//! the node is created, so the node can be formatted later without knowing
//! the payload's type.

/// Trait for implementing the formatting behavior of a node payload.
///
/// # When to Implement
///
/// You typically don't need to implement this trait directly. The violet
/// crate provides built-in handlers (`Error`, `Display`, `Any`) that cover the
/// usual payloads. Implement it when a payload needs a rendering that differs
/// from its own [`Display`](core::fmt::Display) implementation, or when the
/// payload has no such implementation at all.
///
/// # Examples
///
/// ```
/// use violet_internals::handlers::PayloadHandler;
///
/// struct ExitCode(i32);
///
/// struct ExitCodeHandler;
///
/// impl PayloadHandler<ExitCode> for ExitCodeHandler {
///     fn display(value: &ExitCode, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
///         write!(f, "process exited with status {}", value.0)
///     }
///
///     fn debug(value: &ExitCode, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
///         write!(f, "ExitCode({})", value.0)
///     }
/// }
/// ```
pub trait PayloadHandler<C>: 'static {
    /// Formats the payload for human-readable output.
    ///
    /// This is what appears on a frame line when a report is printed.
    fn display(value: &C, formatter: &mut core::fmt::Formatter<'_>) -> core::fmt::Result;

    /// Formats the payload for developer-facing output.
    fn debug(value: &C, formatter: &mut core::fmt::Formatter<'_>) -> core::fmt::Result;
}
