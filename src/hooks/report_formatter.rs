//! Hooks that replace the layout of rendered reports.
//!
//! One formatter is active per process. Until another one is registered,
//! reports are laid out by [`DefaultReportFormatter::DEFAULT`].
//!
//! ```
//! use std::fmt;
//!
//! use violet::{
//!     hooks::{
//!         builtin_hooks::report_formatter::DefaultReportFormatter,
//!         report_formatter::{ReportFormatter, register_report_formatter},
//!     },
//!     prelude::*,
//!     report::FormattingOptions,
//! };
//!
//! struct OneLine;
//!
//! impl ReportFormatter for OneLine {
//!     fn format_report(
//!         &self,
//!         report: &Report,
//!         _options: FormattingOptions,
//!         f: &mut fmt::Formatter<'_>,
//!     ) -> fmt::Result {
//!         writeln!(f, "error: {report:#}")
//!     }
//! }
//!
//! register_report_formatter(OneLine);
//! let report = Report::new("a").context("b");
//! assert_eq!(report.render(FormattingOptions::PLAIN), "error: b: a\n");
//!
//! register_report_formatter(DefaultReportFormatter::DEFAULT);
//! ```

use core::fmt;

use triomphe::Arc;
use unsize::CoerceUnsize;

use crate::{
    Report,
    hooks::{builtin_hooks::report_formatter::DefaultReportFormatter, hook_lock::HookLock},
    report::FormattingOptions,
};

type Hook = Arc<dyn ReportFormatter>;

static HOOK: HookLock<Hook> = HookLock::new();

/// Lays out a whole [`Report`] for display.
///
/// The formatter is used by [`Report::render`], [`Report::write_to`],
/// [`Report::print`] and the [`Debug`](fmt::Debug) implementation of
/// [`Report`]. Frames should be rendered with their
/// [`Display`](fmt::Display) implementation so that display overrides apply.
pub trait ReportFormatter: 'static + Send + Sync {
    /// Writes `report` to `formatter`.
    ///
    /// `options` tells whether escape sequences may be emitted and how wide
    /// the output is.
    fn format_report(
        &self,
        report: &Report,
        options: FormattingOptions,
        formatter: &mut fmt::Formatter<'_>,
    ) -> fmt::Result;
}

/// Makes `hook` the process-wide report formatter, replacing the previous one.
pub fn register_report_formatter(hook: impl ReportFormatter) {
    let hook: Hook = Arc::new(hook).unsize(unsize::Coercion!(to dyn ReportFormatter));
    *HOOK.write().get() = Some(hook);
}

pub(crate) fn format_report(
    report: &Report,
    options: FormattingOptions,
    formatter: &mut fmt::Formatter<'_>,
) -> fmt::Result {
    let hook = HOOK.read().get().cloned();
    let hook = hook
        .as_deref()
        .unwrap_or(const { &DefaultReportFormatter::DEFAULT });
    hook.format_report(report, options, formatter)
}
