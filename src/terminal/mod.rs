//! Terminal detection and styling.
//!
//! Report printing consults this module to decide whether to emit colors and
//! how wide the error banner should be. The color policy is process-wide:
//!
//! ```
//! use violet::terminal::{self, ColorChoice, StreamSource};
//!
//! terminal::set_color_choice("never".parse().unwrap());
//! assert_eq!(terminal::color_choice(), ColorChoice::Never);
//! assert!(!terminal::colors_enabled(StreamSource::Stderr));
//! # terminal::set_color_choice(ColorChoice::Auto);
//! ```

use core::{
    fmt,
    str::FromStr,
    sync::atomic::{AtomicU8, Ordering},
};
use std::io::IsTerminal;

use alloc::string::{String, ToString};

use crate::io;

mod level;
mod style;

pub use self::{
    level::ColorLevel,
    style::{Color, RESET, Style, Styled},
};

/// Whether reports should be printed with colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ColorChoice {
    /// Always emit colors, unless `NO_COLOR` is set.
    Always,
    /// Never emit colors.
    Never,
    /// Emit colors when the target stream supports them.
    #[default]
    Auto,
}

impl ColorChoice {
    const fn as_str(self) -> &'static str {
        match self {
            ColorChoice::Always => "always",
            ColorChoice::Never => "never",
            ColorChoice::Auto => "auto",
        }
    }

    const fn from_u8(value: u8) -> Self {
        match value {
            0 => ColorChoice::Always,
            1 => ColorChoice::Never,
            _ => ColorChoice::Auto,
        }
    }
}

impl fmt::Display for ColorChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The error returned when parsing a [`ColorChoice`] fails.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("unknown color choice `{input}`, expected one of `always`, `never` or `auto`")]
pub struct ParseColorChoiceError {
    input: String,
}

impl FromStr for ColorChoice {
    type Err = ParseColorChoiceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "always" => Ok(ColorChoice::Always),
            "never" => Ok(ColorChoice::Never),
            "auto" => Ok(ColorChoice::Auto),
            _ => Err(ParseColorChoiceError {
                input: s.to_string(),
            }),
        }
    }
}

static COLOR_CHOICE: AtomicU8 = AtomicU8::new(ColorChoice::Auto as u8);

/// Sets the process-wide color policy.
pub fn set_color_choice(choice: ColorChoice) {
    COLOR_CHOICE.store(choice as u8, Ordering::Relaxed);
}

/// Returns the process-wide color policy. Defaults to [`ColorChoice::Auto`].
pub fn color_choice() -> ColorChoice {
    ColorChoice::from_u8(COLOR_CHOICE.load(Ordering::Relaxed))
}

/// One of the standard output streams.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StreamSource {
    /// The standard output stream.
    Stdout,
    /// The standard error stream.
    Stderr,
}

/// Returns `true` if `source` is connected to a terminal.
pub fn is_tty(source: StreamSource) -> bool {
    match source {
        StreamSource::Stdout => std::io::stdout().is_terminal(),
        StreamSource::Stderr => std::io::stderr().is_terminal(),
    }
}

/// The size of a terminal window, in character cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Window {
    /// Number of columns.
    pub columns: u16,
    /// Number of rows.
    pub rows: u16,
}

/// Queries the size of the terminal that `source` is connected to.
///
/// # Errors
///
/// Fails with the operating system error when `source` is not a terminal,
/// and with [`ErrorKind::Unsupported`](io::ErrorKind::Unsupported) on
/// platforms without a window size query.
#[cfg(unix)]
pub fn query_window(source: StreamSource) -> io::Result<Window> {
    let fd = match source {
        StreamSource::Stdout => libc::STDOUT_FILENO,
        StreamSource::Stderr => libc::STDERR_FILENO,
    };

    let mut size = libc::winsize {
        ws_row: 0,
        ws_col: 0,
        ws_xpixel: 0,
        ws_ypixel: 0,
    };

    // SAFETY: `fd` is a valid descriptor number and `size` is a live
    // `winsize` that `TIOCGWINSZ` writes into.
    let result = unsafe { libc::ioctl(fd, libc::TIOCGWINSZ, &raw mut size) };
    if result == -1 {
        return Err(io::IoError::last_os_error());
    }

    Ok(Window {
        columns: size.ws_col,
        rows: size.ws_row,
    })
}

/// Queries the size of the terminal that `source` is connected to.
///
/// # Errors
///
/// Always fails with [`ErrorKind::Unsupported`](io::ErrorKind::Unsupported)
/// on this platform.
#[cfg(not(unix))]
pub fn query_window(source: StreamSource) -> io::Result<Window> {
    let _ = source;
    Err(io::IoError::from_kind(io::ErrorKind::Unsupported))
}

/// Returns `true` if `NO_COLOR` is set to a non-empty value.
fn no_color() -> bool {
    std::env::var_os("NO_COLOR").is_some_and(|value| !value.is_empty())
}

/// Decides whether output written to `source` should carry colors.
///
/// [`ColorChoice::Never`] and a non-empty `NO_COLOR` always disable colors,
/// [`ColorChoice::Always`] enables them otherwise, and
/// [`ColorChoice::Auto`] defers to [`ColorLevel::detect`].
pub fn colors_enabled(source: StreamSource) -> bool {
    match color_choice() {
        ColorChoice::Never => false,
        _ if no_color() => false,
        ColorChoice::Always => true,
        ColorChoice::Auto => ColorLevel::detect(source).basic,
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::ToString;

    use super::*;

    #[test]
    fn test_color_choice_parse() {
        for choice in [ColorChoice::Always, ColorChoice::Never, ColorChoice::Auto] {
            assert_eq!(choice.to_string().parse::<ColorChoice>(), Ok(choice));
            assert_eq!(ColorChoice::from_u8(choice as u8), choice);
        }

        let error = "sometimes".parse::<ColorChoice>().unwrap_err();
        assert_eq!(
            error.to_string(),
            "unknown color choice `sometimes`, expected one of `always`, `never` or `auto`"
        );
    }

    #[test]
    fn test_default_choice() {
        assert_eq!(ColorChoice::default(), ColorChoice::Auto);
    }

    #[cfg(unix)]
    #[test]
    fn test_query_window_fails_without_terminal() {
        // Test harnesses capture output, so the streams are usually pipes.
        if !is_tty(StreamSource::Stdout) {
            let error = query_window(StreamSource::Stdout).unwrap_err();
            assert!(error.raw_os_error().is_some());
        }
    }
}
