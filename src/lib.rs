#![deny(
    missing_docs,
    clippy::alloc_instead_of_core,
    clippy::std_instead_of_alloc,
    clippy::std_instead_of_core,
    clippy::missing_safety_doc,
    clippy::undocumented_unsafe_blocks,
    clippy::multiple_unsafe_ops_per_block,
    clippy::as_ptr_cast_mut,
    clippy::ptr_as_ptr,
    rustdoc::invalid_rust_codeblocks,
    rustdoc::broken_intra_doc_links,
    missing_copy_implementations,
    unused_doc_comments
)]
// Make docs.rs generate better docs
#![cfg_attr(docsrs, feature(doc_cfg))]

//! Chained error reports and a portable I/O error taxonomy.
//!
//! ## Overview
//!
//! This crate provides the error vocabulary of the violet extended standard
//! library. It has two halves:
//!
//! - [`io`]: structured errors for syscall-adjacent code. An
//!   [`IoError`](io::IoError) knows its portable [`ErrorKind`](io::ErrorKind),
//!   the raw operating system code it was created from (if any) and how to
//!   describe itself.
//! - [`Report`]: an error chain for application code. A report starts from a
//!   root cause and collects one frame of context per layer it travels
//!   through. Every frame remembers where it was created, and printing a
//!   report lists the root cause first and the contexts in the order they
//!   were added.
//!
//! The two meet at the `?` operator: any error, including
//! [`IoError`](io::IoError), converts into a [`Report`].
//!
//! ## Quick Example
//!
//! ```
//! use violet::{io::{self, IoError}, prelude::*};
//!
//! fn open(path: &str) -> io::Result<std::fs::File> {
//!     std::fs::File::open(path).map_err(IoError::from)
//! }
//!
//! fn load_settings() -> Result<(), Report> {
//!     open("/does/not/exist/xyzzy").context("while loading the settings")?;
//!     Ok(())
//! }
//!
//! if let Err(report) = load_settings() {
//!     report.print();
//! }
//! ```
//!
//! Printing produces output like this on standard error:
//!
//! ```text
//! ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━ Error: ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//! I/O error (system error «2»): No such file or directory [src/main.rs:4:5]
//!     ~> #0: while loading the settings
//! ```
//!
//! ## Handlers
//!
//! A frame can hold a payload of any `Send + Sync + 'static` type. How the
//! payload is displayed is decided when the frame is created, by a
//! [handler](handlers). The [`report!`] macro picks one automatically, using
//! the payload's [`Error`](core::error::Error) implementation if there is one,
//! then its [`Display`](core::fmt::Display) implementation, and falling back
//! to the name of its type.
//!
//! ## Colors
//!
//! Printed reports use colors when the target stream is a terminal that
//! supports them. The process-wide [`ColorChoice`](terminal::ColorChoice)
//! and the `NO_COLOR`, `FORCE_COLOR` and `CLICOLOR_FORCE` environment
//! variables override the detection; see [`terminal::colors_enabled`].
//!
//! ## Features
//!
//! - `tracing`: emit [`tracing`](https://docs.rs/tracing) events when an
//!   operating system error is captured, when a hook is registered and when
//!   printing a report fails.
//! - `warn-write-failure`: print a one-line warning on the target stream the
//!   first time printing a report fails.

extern crate alloc;

#[macro_use]
mod macros;

pub mod handlers;
pub mod hooks;
pub mod io;
pub mod option_ext;
pub mod prelude;
pub mod report;
pub mod sys;
pub mod terminal;

mod result_ext;

pub use self::report::Report;

/// A [`Result`](core::result::Result) type alias where the error defaults to
/// [`Report`].
///
/// ```
/// fn might_fail() -> violet::Result<String> {
///     Ok("success".to_string())
/// }
///
/// fn typed() -> violet::Result<u8, violet::io::IoError> {
///     Err(violet::io::IoError::from_kind(violet::io::ErrorKind::Interrupted))
/// }
/// # assert!(might_fail().is_ok());
/// # assert!(typed().is_err());
/// ```
pub type Result<T, E = Report> = core::result::Result<T, E>;

// Not public API. Referenced by macro-generated code.
#[doc(hidden)]
pub mod __private {
    use alloc::fmt;
    #[doc(hidden)]
    pub use alloc::format;
    #[doc(hidden)]
    pub use core::{format_args, result::Result::Err};

    use crate::Report;

    #[doc(hidden)]
    #[inline]
    #[cold]
    #[track_caller]
    pub fn format_report(args: fmt::Arguments<'_>) -> Report {
        if let Some(message) = args.as_str() {
            Report::new(message)
        } else {
            Report::new(fmt::format(args))
        }
    }

    #[doc(hidden)]
    pub mod kind {
        use crate::{
            Report,
            handlers::{self, PayloadHandler},
        };

        #[doc(hidden)]
        pub struct Wrap<'a, T>(pub &'a T);

        #[doc(hidden)]
        pub trait HandlerErrorKind {
            #[inline(always)]
            fn handler(&self) -> handlers::Error {
                handlers::Error
            }
        }

        impl<C> HandlerErrorKind for &&Wrap<'_, C> where handlers::Error: PayloadHandler<C> {}

        #[doc(hidden)]
        pub trait HandlerDisplayKind {
            #[inline(always)]
            fn handler(&self) -> handlers::Display {
                handlers::Display
            }
        }

        impl<C> HandlerDisplayKind for &Wrap<'_, C> where handlers::Display: PayloadHandler<C> {}

        #[doc(hidden)]
        pub trait HandlerAnyKind {
            #[inline(always)]
            fn handler(&self) -> handlers::Any {
                handlers::Any
            }
        }

        impl<C> HandlerAnyKind for Wrap<'_, C> where handlers::Any: PayloadHandler<C> {}

        #[doc(hidden)]
        #[must_use]
        #[track_caller]
        pub fn macro_helper_new_report<H, C>(_handler: H, context: C) -> Report
        where
            H: PayloadHandler<C>,
            C: Send + Sync + 'static,
        {
            Report::new_custom::<H, C>(context)
        }
    }
}
