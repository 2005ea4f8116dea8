use core::fmt;

use serial_test::serial;
use violet::{
    hooks::{
        builtin_hooks::report_formatter::{DefaultReportFormatter, LineFormatting},
        display_overrides::{DisplayOverride, register_display_override, remove_display_override},
        report_formatter::{ReportFormatter, register_report_formatter},
    },
    prelude::*,
    report::{FormattingOptions, ReportFrame},
};

#[derive(Debug, thiserror::Error)]
#[error("connection to {host} refused")]
struct Refused {
    host: &'static str,
}

#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("token {_0} expired")]
struct Expired(#[error(not(source))] u64);

/// Prints every frame on its own line, newest first.
struct NewestFirst;

impl ReportFormatter for NewestFirst {
    fn format_report(
        &self,
        report: &Report,
        _options: FormattingOptions,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        for frame in report.iter() {
            writeln!(f, "{frame}")?;
        }
        Ok(())
    }
}

#[test]
#[serial]
fn test_custom_formatter_replaces_layout() {
    register_report_formatter(NewestFirst);

    let report = Report::new(Refused { host: "db" }).context("while connecting");
    assert_eq!(
        report.render(FormattingOptions::PLAIN),
        "while connecting\nconnection to db refused\n"
    );
    assert_eq!(format!("{report:?}"), report.render(FormattingOptions::PLAIN));

    register_report_formatter(DefaultReportFormatter::DEFAULT);
    assert!(report.render(FormattingOptions::PLAIN).contains(" Error: "));
}

#[test]
#[serial]
fn test_ascii_formatter() {
    const ARROWS: DefaultReportFormatter = DefaultReportFormatter {
        context_index: LineFormatting::new("  -> [", "] "),
        ..DefaultReportFormatter::ASCII
    };
    register_report_formatter(ARROWS);

    let report = Report::new("a").context("b");
    let rendered = report.render(FormattingOptions { colors: false, columns: 20 });
    let lines: Vec<&str> = rendered.lines().collect();
    assert_eq!(lines[0], "====== Error: ======");
    assert_eq!(lines[2], "  -> [0] b");

    register_report_formatter(DefaultReportFormatter::DEFAULT);
}

struct Masked;

impl DisplayOverride<Expired> for Masked {
    fn display(
        &self,
        _payload: &Expired,
        frame: ReportFrame<'_>,
        formatter: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        write!(formatter, "token expired ({})", frame.type_name())
    }
}

#[test]
#[serial]
fn test_display_override_applies_to_rendering() {
    let report = Report::new(Expired(42)).context("while authenticating");
    register_display_override::<Expired, _>(Masked);

    let rendered = report.render(FormattingOptions::PLAIN);
    assert!(rendered.contains("token expired (hooks::Expired)"), "{rendered}");
    assert!(!rendered.contains("token 42"));

    let root = report.root_cause().unwrap();
    assert_eq!(root.display_unhooked().to_string(), "token 42 expired");

    assert!(remove_display_override::<Expired>());
    assert!(report.render(FormattingOptions::PLAIN).contains("token 42 expired"));
}

#[test]
#[serial]
fn test_display_override_closure() {
    register_display_override::<Refused, _>(|error: &Refused, f: &mut fmt::Formatter<'_>| {
        write!(f, "refused by {}", error.host)
    });

    let report = Report::new(Refused { host: "cache" });
    assert_eq!(report.to_string(), "refused by cache");
    assert_eq!(format!("{report:#}"), "refused by cache");

    assert!(remove_display_override::<Refused>());
    assert!(!remove_display_override::<Refused>());
    assert_eq!(report.to_string(), "connection to cache refused");
}
