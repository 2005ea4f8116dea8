use alloc::string::{String, ToString};
use core::fmt;
use std::io::Write;

use crate::{
    Report,
    terminal::{self, StreamSource},
};

/// Columns assumed when the terminal size is unknown.
const FALLBACK_COLUMNS: u16 = 80;

/// How a report is laid out when it is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FormattingOptions {
    /// Whether escape sequences for colors and bold text may be emitted.
    pub colors: bool,
    /// The width of the output, used to size the banner.
    pub columns: u16,
}

impl FormattingOptions {
    /// No colors, 80 columns.
    pub const PLAIN: Self = Self {
        colors: false,
        columns: FALLBACK_COLUMNS,
    };

    /// Resolves the options for printing to `source`: colors follow
    /// [`terminal::colors_enabled`] and the width is the terminal's, or 80
    /// columns when it cannot be queried.
    #[must_use]
    pub fn for_stream(source: StreamSource) -> Self {
        let columns = terminal::query_window(source)
            .ok()
            .map(|window| window.columns)
            .filter(|&columns| columns > 0)
            .unwrap_or(FALLBACK_COLUMNS);

        Self {
            colors: terminal::colors_enabled(source),
            columns,
        }
    }
}

impl Default for FormattingOptions {
    fn default() -> Self {
        Self::PLAIN
    }
}

struct Rendered<'a> {
    report: &'a Report,
    options: FormattingOptions,
}

impl fmt::Display for Rendered<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        crate::hooks::report_formatter::format_report(self.report, self.options, f)
    }
}

impl Report {
    /// Renders the report with the registered
    /// [`ReportFormatter`](crate::hooks::report_formatter::ReportFormatter).
    ///
    /// The output starts with a banner, followed by the root cause with its
    /// source location and then every context in the order it was pushed:
    ///
    /// ```
    /// use violet::{prelude::*, report::FormattingOptions};
    ///
    /// let report = Report::new("disk full").context("while saving");
    /// let rendered = report.render(FormattingOptions::PLAIN);
    ///
    /// let lines: Vec<&str> = rendered.lines().collect();
    /// assert!(lines[0].contains(" Error: "));
    /// assert!(lines[1].starts_with("disk full ["));
    /// assert_eq!(lines[2], "    ~> #0: while saving");
    /// ```
    #[must_use]
    pub fn render(&self, options: FormattingOptions) -> String {
        self.rendered(options).to_string()
    }

    /// Returns a value whose [`Display`](fmt::Display) output is the same as
    /// [`render`](Report::render).
    pub fn rendered(&self, options: FormattingOptions) -> impl fmt::Display + '_ {
        Rendered {
            report: self,
            options,
        }
    }

    /// Writes the rendered report to `writer`.
    ///
    /// # Errors
    ///
    /// Returns the error of the first failed write.
    pub fn write_to<W>(&self, writer: &mut W, options: FormattingOptions) -> std::io::Result<()>
    where
        W: Write + ?Sized,
    {
        write!(writer, "{}", self.rendered(options))?;
        writer.flush()
    }

    /// Prints the report to standard error.
    ///
    /// Equivalent to `print_to(StreamSource::Stderr)`.
    pub fn print(&self) {
        self.print_to(StreamSource::Stderr);
    }

    /// Prints the report to `source`, with colors and width resolved by
    /// [`FormattingOptions::for_stream`].
    ///
    /// Printing never fails: write errors are discarded. With the
    /// `warn-write-failure` feature the first failure in the process
    /// additionally emits a one-line warning on the same stream.
    pub fn print_to(&self, source: StreamSource) {
        let options = FormattingOptions::for_stream(source);
        match source {
            StreamSource::Stdout => self.print_with(&mut std::io::stdout().lock(), source, options),
            StreamSource::Stderr => self.print_with(&mut std::io::stderr().lock(), source, options),
        }
    }

    fn print_with<W>(&self, writer: &mut W, source: StreamSource, options: FormattingOptions)
    where
        W: Write + ?Sized,
    {
        if let Err(error) = self.write_to(writer, options) {
            write_failed(writer, source, &error);
        }
    }
}

/// Reports a failed print on `writer`, the stream the report was going to.
#[cold]
fn write_failed<W>(writer: &mut W, source: StreamSource, error: &std::io::Error)
where
    W: Write + ?Sized,
{
    #[cfg(feature = "tracing")]
    tracing::warn!(?source, %error, "failed to print an error report");
    #[cfg(not(feature = "tracing"))]
    let _ = source;

    #[cfg(feature = "warn-write-failure")]
    {
        use core::sync::atomic::{AtomicBool, Ordering};

        static WARNED: AtomicBool = AtomicBool::new(false);

        if !WARNED.swap(true, Ordering::Relaxed) {
            let _ = writeln!(writer, "warning: failed to print an error report: {error}");
        }
    }
    #[cfg(not(feature = "warn-write-failure"))]
    let _ = writer;

    #[cfg(not(any(feature = "tracing", feature = "warn-write-failure")))]
    let _ = error;
}
