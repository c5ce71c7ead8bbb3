use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Fallback for empty color specifiers.
pub const FALLBACK_COLOR: &str = "#000000";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

#[derive(Debug, Error)]
#[error("invalid color value for field \"{field}\": \"{value}\"")]
pub struct ColorParseError {
    pub field: String,
    pub value: String,
}

impl Rgb {
    /// Parse the RGB part of a hex color with a field name for error reporting.
    ///
    /// Accepts `RRGGBB`, `RRGGBBAA`, `RGB` and `RGBA`, with or without a
    /// leading `#`. Alpha is read for validation and then dropped.
    ///
    /// # Errors
    ///
    /// Returns `ColorParseError` if the string is not a valid hex color.
    pub fn parse(s: &str, field: &str) -> Result<Self, ColorParseError> {
        let invalid = || ColorParseError {
            field: field.to_owned(),
            value: s.to_owned(),
        };

        let hex = s.strip_prefix('#').unwrap_or(s);
        let digits: Vec<u8> = hex
            .chars()
            .map(|c| c.to_digit(16).and_then(|d| u8::try_from(d).ok()))
            .collect::<Option<_>>()
            .ok_or_else(invalid)?;

        let (r, g, b) = match digits.as_slice() {
            [r1, r2, g1, g2, b1, b2] | [r1, r2, g1, g2, b1, b2, _, _] => {
                (r1 * 16 + r2, g1 * 16 + g2, b1 * 16 + b2)
            }
            [r, g, b] | [r, g, b, _] => (r * 17, g * 17, b * 17),
            _ => return Err(invalid()),
        };
        Ok(Rgb { r, g, b })
    }

    /// Perceptual brightness on a 0–255 scale (`0.299R + 0.587G + 0.114B`).
    pub fn luminance(self) -> f64 {
        (f64::from(self.r) * 299.0 + f64::from(self.g) * 587.0 + f64::from(self.b) * 114.0)
            / 1000.0
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Rgb { r, g, b } = self;
        write!(f, "#{r:02x}{g:02x}{b:02x}")
    }
}

impl FromStr for Rgb {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Rgb::parse(s, "<unknown>")
    }
}

/// Ensure a color specifier carries a leading `#`.
///
/// Empty input maps to [`FALLBACK_COLOR`]. Anything else is passed through
/// untouched apart from the prefix; no validation happens here.
pub fn normalize_color(color: &str) -> String {
    if color.is_empty() {
        FALLBACK_COLOR.to_owned()
    } else if color.starts_with('#') {
        color.to_owned()
    } else {
        format!("#{color}")
    }
}

/// Whether `color` is a 3, 4, 6 or 8 digit hex color, `#` optional.
pub fn is_valid_hex_color(color: &str) -> bool {
    let hex = color.strip_prefix('#').unwrap_or(color);
    matches!(hex.len(), 3 | 4 | 6 | 8) && hex.bytes().all(|b| b.is_ascii_hexdigit())
}

/// Whether `token` is a bare hex token (no `#`) of length 3, 4, 6 or 8.
pub(crate) fn is_bare_hex_token(token: &str) -> bool {
    !token.starts_with('#') && is_valid_hex_color(token)
}
