//! ANSI escape sequences for colors and text attributes.

use core::fmt;

/// A terminal color.
///
/// The named colors map to the 16 standard ANSI colors; [`Color::Rgb`]
/// emits a 24-bit sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[allow(missing_docs)]
pub enum Color {
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
    BrightBlack,
    BrightRed,
    BrightGreen,
    BrightYellow,
    BrightBlue,
    BrightMagenta,
    BrightCyan,
    BrightWhite,
    Rgb(u8, u8, u8),
}

impl Color {
    /// Writes the SGR parameters selecting this color, without the
    /// surrounding `ESC [` and `m`.
    fn write_parameters(self, foreground: bool, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (normal, bright) = if foreground { (30, 90) } else { (40, 100) };
        let code = match self {
            Color::Black => normal,
            Color::Red => normal + 1,
            Color::Green => normal + 2,
            Color::Yellow => normal + 3,
            Color::Blue => normal + 4,
            Color::Magenta => normal + 5,
            Color::Cyan => normal + 6,
            Color::White => normal + 7,
            Color::BrightBlack => bright,
            Color::BrightRed => bright + 1,
            Color::BrightGreen => bright + 2,
            Color::BrightYellow => bright + 3,
            Color::BrightBlue => bright + 4,
            Color::BrightMagenta => bright + 5,
            Color::BrightCyan => bright + 6,
            Color::BrightWhite => bright + 7,
            Color::Rgb(red, green, blue) => {
                let selector = if foreground { 38 } else { 48 };
                return write!(f, "{selector};2;{red};{green};{blue}");
            }
        };
        write!(f, "{code}")
    }
}

const BOLD: u8 = 1 << 0;
const DIM: u8 = 1 << 1;
const ITALIC: u8 = 1 << 2;
const UNDERLINE: u8 = 1 << 3;
const INVERSE: u8 = 1 << 4;
const STRIKETHROUGH: u8 = 1 << 5;

/// SGR code of every attribute flag, in emission order.
const ATTRIBUTE_CODES: [(u8, u8); 6] = [
    (BOLD, 1),
    (DIM, 2),
    (ITALIC, 3),
    (UNDERLINE, 4),
    (INVERSE, 7),
    (STRIKETHROUGH, 9),
];

/// A set of text attributes plus an optional foreground or background color.
///
/// Styles are cheap `Copy` values built with `const` methods, so they can be
/// declared as constants:
///
/// ```
/// use violet::terminal::{Color, Style};
///
/// const WARNING: Style = Style::new().fg(Color::Yellow).bold();
///
/// assert_eq!(
///     WARNING.paint("careful").to_string(),
///     "\x1b[1m\x1b[33mcareful\x1b[0m"
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Style {
    color: Option<(Color, bool)>,
    attributes: u8,
}

impl Style {
    /// A style without color or attributes.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            color: None,
            attributes: 0,
        }
    }

    /// Sets the foreground color, replacing any previous color.
    #[must_use]
    pub const fn fg(mut self, color: Color) -> Self {
        self.color = Some((color, true));
        self
    }

    /// Sets the background color, replacing any previous color.
    #[must_use]
    pub const fn bg(mut self, color: Color) -> Self {
        self.color = Some((color, false));
        self
    }

    /// Adds the bold attribute.
    #[must_use]
    pub const fn bold(self) -> Self {
        self.with(BOLD)
    }

    /// Adds the dim attribute.
    #[must_use]
    pub const fn dim(self) -> Self {
        self.with(DIM)
    }

    /// Adds the italic attribute.
    #[must_use]
    pub const fn italic(self) -> Self {
        self.with(ITALIC)
    }

    /// Adds the underline attribute.
    #[must_use]
    pub const fn underline(self) -> Self {
        self.with(UNDERLINE)
    }

    /// Adds the inverse attribute.
    #[must_use]
    pub const fn inverse(self) -> Self {
        self.with(INVERSE)
    }

    /// Adds the strikethrough attribute.
    #[must_use]
    pub const fn strikethrough(self) -> Self {
        self.with(STRIKETHROUGH)
    }

    const fn with(mut self, attribute: u8) -> Self {
        self.attributes |= attribute;
        self
    }

    /// Returns `true` if the style has neither color nor attributes.
    #[must_use]
    pub const fn is_plain(&self) -> bool {
        self.color.is_none() && self.attributes == 0
    }

    /// Returns the escape sequences that switch the terminal to this style.
    ///
    /// A plain style yields nothing.
    #[must_use]
    pub const fn prefix(self) -> impl fmt::Display {
        Prefix(self)
    }

    /// Wraps `value` so that it is displayed in this style, followed by a
    /// reset sequence.
    #[must_use]
    pub const fn paint<T>(self, value: T) -> Styled<T> {
        Styled { style: self, value }
    }
}

struct Prefix(Style);

impl fmt::Display for Prefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Style { color, attributes } = self.0;
        for (flag, code) in ATTRIBUTE_CODES {
            if attributes & flag != 0 {
                write!(f, "\x1b[{code}m")?;
            }
        }

        if let Some((color, foreground)) = color {
            f.write_str("\x1b[")?;
            color.write_parameters(foreground, f)?;
            f.write_str("m")?;
        }

        Ok(())
    }
}

/// The escape sequence that resets all styling.
pub const RESET: &str = "\x1b[0m";

/// A value displayed in a [`Style`].
///
/// Plain styles display the value unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Styled<T> {
    style: Style,
    value: T,
}

impl<T> Styled<T> {
    /// Returns the style.
    pub fn style(&self) -> Style {
        self.style
    }

    /// Returns the wrapped value.
    pub fn into_inner(self) -> T {
        self.value
    }
}

impl<T: fmt::Display> fmt::Display for Styled<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.style.is_plain() {
            return fmt::Display::fmt(&self.value, f);
        }

        write!(f, "{}", self.style.prefix())?;
        fmt::Display::fmt(&self.value, f)?;
        f.write_str(RESET)
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::ToString;

    use super::*;

    #[test]
    fn test_named_colors() {
        assert_eq!(Style::new().fg(Color::Red).prefix().to_string(), "\x1b[31m");
        assert_eq!(Style::new().bg(Color::Blue).prefix().to_string(), "\x1b[44m");
        assert_eq!(Style::new().fg(Color::BrightWhite).prefix().to_string(), "\x1b[97m");
        assert_eq!(Style::new().bg(Color::BrightBlack).prefix().to_string(), "\x1b[100m");
    }

    #[test]
    fn test_rgb() {
        assert_eq!(
            Style::new().fg(Color::Rgb(0, 255, 0)).prefix().to_string(),
            "\x1b[38;2;0;255;0m"
        );
        assert_eq!(
            Style::new().bg(Color::Rgb(255, 128, 0)).prefix().to_string(),
            "\x1b[48;2;255;128;0m"
        );
    }

    #[test]
    fn test_attributes() {
        let style = Style::new().underline().bold().italic();
        assert_eq!(style.prefix().to_string(), "\x1b[1m\x1b[3m\x1b[4m");

        let all = Style::new().bold().dim().italic().underline().inverse().strikethrough();
        assert_eq!(
            all.prefix().to_string(),
            "\x1b[1m\x1b[2m\x1b[3m\x1b[4m\x1b[7m\x1b[9m"
        );
    }

    #[test]
    fn test_paint() {
        assert_eq!(Style::new().bold().paint(3).to_string(), "\x1b[1m3\x1b[0m");
        assert_eq!(Style::new().paint("plain").to_string(), "plain");
        assert!(Style::default().is_plain());
        assert!(!Style::new().dim().is_plain());
    }
}
