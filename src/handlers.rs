//! Handlers that control how the payload of a report frame is displayed.
//!
//! Every frame of a [`Report`](crate::Report) owns one payload of an arbitrary
//! type. When the frame is created, a handler is picked for that payload and
//! baked into the frame, so the report can render it later without knowing
//! its type.
//!
//! # Built-in Handlers
//!
//! The [`report!`](crate::report!) macro picks the first handler that applies,
//! in this order:
//!
//! 1. [`Error`]: the payload implements [`core::error::Error`]; renders its
//!    `Display` output.
//! 2. [`Display`]: the payload implements [`Display`](core::fmt::Display) and
//!    [`Debug`](core::fmt::Debug); renders its `Display` output.
//! 3. [`Any`]: any other payload; renders a placeholder naming the payload
//!    type, such as `<type my_crate::Opaque@9ae16a3b2f90404f>`.
//!
//! [`Report::new`](crate::Report::new) always uses [`Display`]. Use
//! [`Report::new_custom`](crate::Report::new_custom) to choose a handler
//! explicitly, including your own [`PayloadHandler`] implementation.
//!
//! # Examples
//!
//! ```
//! use violet::{handlers, prelude::*};
//!
//! struct Opaque;
//!
//! let report = Report::new_custom::<handlers::Any, _>(Opaque);
//! assert!(report.to_string().starts_with("<type "));
//!
//! let report = report!(std::fmt::Error);
//! assert_eq!(report.to_string(), "an error occurred when formatting an argument");
//! ```

use core::hash::{Hash, Hasher};

pub use violet_internals::handlers::PayloadHandler;

/// Handler for payloads implementing [`core::error::Error`].
///
/// Delegates to the payload's `Display` and `Debug` implementations.
#[derive(Copy, Clone)]
pub struct Error;

impl<C> PayloadHandler<C> for Error
where
    C: core::error::Error,
{
    fn display(payload: &C, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(payload, f)
    }

    fn debug(payload: &C, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Debug::fmt(payload, f)
    }
}

/// Handler for payloads implementing [`Display`](core::fmt::Display) and
/// [`Debug`](core::fmt::Debug), such as plain messages.
#[derive(Copy, Clone)]
pub struct Display;

impl<C> PayloadHandler<C> for Display
where
    C: core::fmt::Display + core::fmt::Debug,
{
    fn display(payload: &C, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(payload, f)
    }

    fn debug(payload: &C, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Debug::fmt(payload, f)
    }
}

/// Handler for payloads without any formatting support.
///
/// Both `display` and `debug` render `<type NAME@HASH>`, where `NAME` is the
/// payload's [`type_name`](core::any::type_name) and `HASH` is a hash of its
/// [`TypeId`](core::any::TypeId) in lowercase hexadecimal. The hash tells
/// apart types whose names collide, e.g. the same type from two versions of a
/// crate.
#[derive(Copy, Clone)]
pub struct Any;

impl<C: 'static> PayloadHandler<C> for Any {
    fn display(_payload: &C, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "<type {}@{:x}>", core::any::type_name::<C>(), type_hash::<C>())
    }

    fn debug(payload: &C, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        Self::display(payload, f)
    }
}

fn type_hash<C: 'static>() -> u64 {
    let mut hasher = rustc_hash::FxHasher::default();
    core::any::TypeId::of::<C>().hash(&mut hasher);
    hasher.finish()
}
