//! Built-in hooks provided by violet.
//!
//! - **[`report_formatter`]**: the [`DefaultReportFormatter`] layout, used
//!   until another [`ReportFormatter`] is registered.
//!
//! [`DefaultReportFormatter`]: crate::hooks::builtin_hooks::report_formatter::DefaultReportFormatter
//! [`ReportFormatter`]: crate::hooks::report_formatter::ReportFormatter

pub mod report_formatter;
