//! Parse CSS color strings into RGB components.

use std::str::FromStr;

use thiserror::Error;
use tracing::debug;

use crate::{
    color::{Component, Components},
    Color, Space,
};

/// Reasons a string is not a usable color.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorParseError {
    /// Nothing but whitespace was given.
    #[error("empty color string")]
    Empty,
    /// A hex color without 3, 4, 6 or 8 digits.
    #[error("invalid hex length")]
    InvalidLength,
    /// A hex color with something other than hex digits.
    #[error("invalid hex digits")]
    InvalidHex,
    /// A malformed `rgb()` or `rgba()` function.
    #[error("invalid rgb()/rgba() function")]
    InvalidFunc,
    /// A component outside of its allowed range.
    #[error("component out of range")]
    OutOfRange,
    /// Not a known color keyword.
    #[error("unknown color name `{0}`")]
    UnknownName(String),
}

/// Parse a CSS color into RGB components in `[0, 1]`.
///
/// The allowed formats are:
/// * `rgb(r, g, b)`, `rgba(r, g, b, a)` and `rgb(r g b / a)`, with numbers
///   in `[0, 255]` or percentages
/// * `#rgb`, `#rgba`, `#rrggbb` and `#rrggbbaa`
/// * the basic CSS color keywords
///
/// Alpha is validated and then dropped.
pub fn parse(text: &str) -> Result<Components, ColorParseError> {
    let text = text.trim().to_ascii_lowercase();
    if text.is_empty() {
        return Err(ColorParseError::Empty);
    }

    if let Some(hex) = text.strip_prefix('#') {
        return parse_hex(hex);
    }

    if text.starts_with("rgb") {
        let args = function_args(&text, "rgba")
            .or_else(|| function_args(&text, "rgb"))
            .ok_or(ColorParseError::InvalidFunc)?;
        return parse_css_rgb(args);
    }

    parse_name(&text)
}

/// The text between the parentheses of `name(...)`.
fn function_args<'a>(text: &'a str, name: &str) -> Option<&'a str> {
    text.strip_prefix(name)?
        .trim_start()
        .strip_prefix('(')?
        .strip_suffix(')')
}

fn parse_hex(hex: &str) -> Result<Components, ColorParseError> {
    use ColorParseError::*;

    let nibble = |c: u8| -> Result<u8, ColorParseError> {
        match c {
            b'0'..=b'9' => Ok(c - b'0'),
            b'a'..=b'f' => Ok(c - b'a' + 10),
            b'A'..=b'F' => Ok(c - b'A' + 10),
            _ => Err(InvalidHex),
        }
    };

    let bytes = hex.as_bytes();
    let digits = bytes.iter().map(|&b| nibble(b)).collect::<Result<Vec<_>, _>>()?;

    let (r, g, b) = match digits.len() {
        // #rgb and #rgba
        3 | 4 => (digits[0] * 17, digits[1] * 17, digits[2] * 17),
        // #rrggbb and #rrggbbaa
        6 | 8 => (
            digits[0] << 4 | digits[1],
            digits[2] << 4 | digits[3],
            digits[4] << 4 | digits[5],
        ),
        _ => return Err(InvalidLength),
    };

    Ok(from_bytes(r, g, b))
}

/// Parse the arguments of a CSS `rgb()` or `rgba()` function.
///
/// Both the legacy comma separated and the space separated syntax are
/// allowed. The color components must either all be numbers or all be
/// percentages.
fn parse_css_rgb(args: &str) -> Result<Components, ColorParseError> {
    use ColorParseError::*;

    let (channels, alpha): (Vec<&str>, Option<&str>) = if args.contains(',') {
        let mut parts = args.split(',').map(str::trim).collect::<Vec<_>>();
        let alpha = match parts.len() {
            3 => None,
            4 => parts.pop(),
            _ => return Err(InvalidFunc),
        };
        (parts, alpha)
    } else {
        let mut halves = args.splitn(2, '/');
        let channels = halves
            .next()
            .unwrap_or_default()
            .split_whitespace()
            .collect::<Vec<_>>();
        let alpha = halves.next().map(str::trim);
        if channels.len() != 3 {
            return Err(InvalidFunc);
        }
        (channels, alpha)
    };

    let percentages = channels.iter().filter(|c| c.ends_with('%')).count();
    if percentages != 0 && percentages != channels.len() {
        return Err(InvalidFunc);
    }

    let mut rgb = [0.0; 3];
    for (out, token) in rgb.iter_mut().zip(&channels) {
        *out = parse_channel(token)?;
    }

    if let Some(alpha) = alpha {
        parse_alpha(alpha)?;
    }

    Ok(rgb.into())
}

fn parse_number(token: &str) -> Result<Component, ColorParseError> {
    token
        .parse::<Component>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or(ColorParseError::InvalidFunc)
}

/// A color channel as a number in `[0, 255]` or a percentage, normalized.
fn parse_channel(token: &str) -> Result<Component, ColorParseError> {
    let (value, max) = match token.strip_suffix('%') {
        Some(percent) => (parse_number(percent)?, 100.0),
        None => (parse_number(token)?, 255.0),
    };

    if !(0.0..=max).contains(&value) {
        return Err(ColorParseError::OutOfRange);
    }

    Ok(value / max)
}

/// Alpha as a number in `[0, 1]` or a percentage, normalized.
fn parse_alpha(token: &str) -> Result<Component, ColorParseError> {
    let (value, max) = match token.strip_suffix('%') {
        Some(percent) => (parse_number(percent)?, 100.0),
        None => (parse_number(token)?, 1.0),
    };

    if !(0.0..=max).contains(&value) {
        return Err(ColorParseError::OutOfRange);
    }

    Ok(value / max)
}

fn parse_name(name: &str) -> Result<Components, ColorParseError> {
    let (r, g, b) = match name {
        "black" => (0x00, 0x00, 0x00),
        "silver" => (0xc0, 0xc0, 0xc0),
        "gray" | "grey" => (0x80, 0x80, 0x80),
        "white" => (0xff, 0xff, 0xff),
        "maroon" => (0x80, 0x00, 0x00),
        "red" => (0xff, 0x00, 0x00),
        "purple" => (0x80, 0x00, 0x80),
        "fuchsia" | "magenta" => (0xff, 0x00, 0xff),
        "green" => (0x00, 0x80, 0x00),
        "lime" => (0x00, 0xff, 0x00),
        "olive" => (0x80, 0x80, 0x00),
        "yellow" => (0xff, 0xff, 0x00),
        "navy" => (0x00, 0x00, 0x80),
        "blue" => (0x00, 0x00, 0xff),
        "teal" => (0x00, 0x80, 0x80),
        "aqua" | "cyan" => (0x00, 0xff, 0xff),
        "orange" => (0xff, 0xa5, 0x00),
        _ => return Err(ColorParseError::UnknownName(name.to_owned())),
    };

    Ok(from_bytes(r, g, b))
}

fn from_bytes(r: u8, g: u8, b: u8) -> Components {
    Components(r as Component, g as Component, b as Component).map(|c| c / 255.0)
}

impl Color {
    /// Set the color from a CSS color string.
    ///
    /// Returns false and leaves the color untouched if the string could not
    /// be parsed. See [`parse`] for the accepted formats.
    pub fn parse_css(&mut self, text: &str) -> bool {
        match parse(text) {
            Ok(rgb) => {
                self.from_space(Space::Rgb, rgb);
                true
            }
            Err(err) => {
                debug!(text, error = %err, "could not parse color");
                false
            }
        }
    }
}

impl FromStr for Color {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut color = Color::new();
        color.from_space(Space::Rgb, parse(s)?);
        Ok(color)
    }
}
