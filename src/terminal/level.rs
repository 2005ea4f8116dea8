use alloc::string::String;

use super::StreamSource;

/// How many colors a terminal stream is able to display.
///
/// Each level implies the levels below it: a stream that supports truecolor
/// also supports 256 colors and the basic 16.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ColorLevel {
    /// The 16 standard ANSI colors.
    pub basic: bool,
    /// The 256-color palette.
    pub ansi256: bool,
    /// 24-bit colors.
    pub truecolor: bool,
}

impl ColorLevel {
    /// A stream that displays no color at all.
    pub const NONE: Self = Self::from_depth(0);

    const fn from_depth(depth: u32) -> Self {
        Self {
            basic: depth >= 1,
            ansi256: depth >= 2,
            truecolor: depth >= 3,
        }
    }

    /// Detects the color level of `source` from the process environment.
    pub fn detect(source: StreamSource) -> Self {
        Self::detect_with(|name| std::env::var(name).ok(), super::is_tty(source))
    }

    /// Detects the color level from the variables returned by `env`, for a
    /// stream whose TTY-ness is `is_tty`.
    ///
    /// Variables are consulted in this order:
    ///
    /// 1. `NO_COLOR` with any non-empty value disables color.
    /// 2. `FORCE_COLOR` selects a level between 0 and 3. An empty value means
    ///    1 and `false` means 0. Otherwise `CLICOLOR_FORCE` with any value
    ///    other than `0` forces basic color. A forced level above zero is
    ///    returned as is.
    /// 3. `TERM=dumb` or a stream that is not a terminal disables color.
    /// 4. `COLORTERM`, `TERM` and `TERM_PROGRAM` select truecolor or 256
    ///    colors.
    /// 5. Basic color if `TERM` is set, if `CLICOLOR` is set to anything other
    ///    than `0`, or if running under CI. No color otherwise.
    pub fn detect_with(env: impl Fn(&str) -> Option<String>, is_tty: bool) -> Self {
        if env("NO_COLOR").is_some_and(|value| !value.is_empty()) {
            return Self::NONE;
        }

        let forced = forced_depth(&env);
        if forced > 0 {
            return Self::from_depth(forced);
        }

        let term = env("TERM").unwrap_or_default();
        if term == "dumb" || !is_tty {
            return Self::NONE;
        }

        let colorterm = env("COLORTERM").unwrap_or_default();
        let term_program = env("TERM_PROGRAM").unwrap_or_default();
        if matches!(colorterm.as_str(), "truecolor" | "24bit")
            || term.ends_with("direct")
            || term.ends_with("truecolor")
            || term_program == "iTerm.app"
        {
            return Self::from_depth(3);
        }

        if term_program == "Apple_Terminal" || term.ends_with("256") || term.ends_with("256color")
        {
            return Self::from_depth(2);
        }

        if env("TERM").is_some()
            || env("CLICOLOR").is_some_and(|value| value != "0")
            || crate::sys::is_ci_with(&env)
        {
            return Self::from_depth(1);
        }

        Self::NONE
    }
}

fn forced_depth(env: &impl Fn(&str) -> Option<String>) -> u32 {
    if let Some(value) = env("FORCE_COLOR") {
        return match value.as_str() {
            "" => 1,
            "false" => 0,
            value => value.parse::<u32>().unwrap_or(1).min(3),
        };
    }

    match env("CLICOLOR_FORCE") {
        Some(value) if value != "0" => 1,
        _ => 0,
    }
}
