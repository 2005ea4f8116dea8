//! The report layout used when no other formatter is registered.
//!
//! A report rendered by [`DefaultReportFormatter`] looks like this:
//!
//! ```text
//! ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━ Error: ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//! disk full [/dev/sda1] [src/main.rs:12:9]
//!     ~> #0: while trying to save `user_data.json`
//!     ~> #1: while shutting down
//! ```
//!
//! The first line after the banner is the root cause together with the
//! location it was created at. Every later line is one context, in the order
//! the contexts were pushed, numbered from zero.
//!
//! Two presets are provided, [`DefaultReportFormatter::UNICODE`] (the
//! default) and [`DefaultReportFormatter::ASCII`] for outputs that cannot
//! display box-drawing characters:
//!
//! ```
//! use violet::hooks::{
//!     builtin_hooks::report_formatter::DefaultReportFormatter,
//!     report_formatter::register_report_formatter,
//! };
//!
//! register_report_formatter(DefaultReportFormatter::ASCII);
//! ```

use alloc::vec::Vec;
use core::fmt::{self, Write};

use crate::{
    Report,
    hooks::report_formatter::ReportFormatter,
    report::{FormattingOptions, ReportFrame},
    terminal::{Color, Style, Styled},
};

/// The built-in report layout, configurable through its public fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DefaultReportFormatter {
    /// Character repeated on both sides of the banner title.
    pub banner_fill: char,
    /// Text in the middle of the banner.
    pub banner_title: &'static str,
    /// Style of the banner title when colors are enabled.
    pub banner_style: Style,
    /// Text around the `file:line:column` of the root cause.
    pub location: LineFormatting,
    /// Text around the index of a context line.
    pub context_index: LineFormatting,
    /// Style of the context index when colors are enabled.
    pub index_style: Style,
}

impl DefaultReportFormatter {
    /// Box-drawing banner with a bold dark red title.
    pub const UNICODE: Self = Self {
        banner_fill: '━',
        banner_title: " Error: ",
        banner_style: Style::new().fg(Color::Rgb(91, 0, 0)).bold(),
        location: LineFormatting::new(" [", "]"),
        context_index: LineFormatting::new("    ~> #", ": "),
        index_style: Style::new().bold(),
    };

    /// Same layout as [`UNICODE`](Self::UNICODE) with an ASCII banner.
    pub const ASCII: Self = Self {
        banner_fill: '=',
        ..Self::UNICODE
    };

    /// The formatter used when none is registered.
    pub const DEFAULT: Self = Self::UNICODE;

    fn paint<T>(style: Style, value: T, options: FormattingOptions) -> Styled<T> {
        if options.colors {
            style.paint(value)
        } else {
            Style::new().paint(value)
        }
    }

    fn format_banner(
        &self,
        options: FormattingOptions,
        formatter: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        let title_width = self.banner_title.chars().count();
        let fill = usize::from(options.columns).saturating_sub(title_width);
        let left = fill / 2;

        for _ in 0..left {
            formatter.write_char(self.banner_fill)?;
        }
        write!(
            formatter,
            "{}",
            Self::paint(self.banner_style, self.banner_title, options)
        )?;
        for _ in left..fill {
            formatter.write_char(self.banner_fill)?;
        }
        formatter.write_char('\n')
    }

    fn format_root(
        &self,
        frame: ReportFrame<'_>,
        formatter: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        let location = frame.location();
        writeln!(
            formatter,
            "{frame}{}{}:{}:{}{}",
            self.location.prefix,
            location.file(),
            location.line(),
            location.column(),
            self.location.suffix
        )
    }

    fn format_context(
        &self,
        index: usize,
        frame: ReportFrame<'_>,
        options: FormattingOptions,
        formatter: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        writeln!(
            formatter,
            "{}{}{}{frame}",
            self.context_index.prefix,
            Self::paint(self.index_style, index, options),
            self.context_index.suffix
        )
    }
}

impl Default for DefaultReportFormatter {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl ReportFormatter for DefaultReportFormatter {
    fn format_report(
        &self,
        report: &Report,
        options: FormattingOptions,
        formatter: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        self.format_banner(options, formatter)?;

        let frames: Vec<ReportFrame<'_>> = report.iter().collect();
        let mut frames = frames.into_iter().rev();

        let Some(root) = frames.next() else {
            return Ok(());
        };
        self.format_root(root, formatter)?;

        for (index, frame) in frames.enumerate() {
            self.format_context(index, frame, options, formatter)?;
        }
        Ok(())
    }
}

/// Text placed before and after a piece of a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineFormatting {
    /// Text placed before.
    pub prefix: &'static str,
    /// Text placed after.
    pub suffix: &'static str,
}

impl LineFormatting {
    /// Creates a line formatting from its prefix and suffix.
    pub const fn new(prefix: &'static str, suffix: &'static str) -> Self {
        Self { prefix, suffix }
    }
}
