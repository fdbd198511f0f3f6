//! Stage background colors.
//!
//! Scripts hand the camera a `#RRGGBB` string. The string is kept verbatim so it can be
//! reported back unchanged, and decoded into [`Color`] channels in the range [0.0, 1.0]
//! for the render surface.
//!
//! # Example
//! ```
//! use stagecam::color::HexColor;
//!
//! let bg = HexColor::new("#ff0000");
//! assert_eq!(bg.as_str(), "#ff0000");
//! assert_eq!(bg.channels(), (1.0, 0.0, 0.0));
//! ```

use std::fmt;

pub use rgb::Rgba;

/// The color type used throughout stagecam. RGBA with f32 components in [0.0, 1.0].
pub type Color = Rgba<f32>;

/// <div style="margin:2px 0"><span style="background-color:rgb(0, 0, 0);padding:0 0.7em;margin-right:0.5em;border:1px solid"></span>Black (0, 0, 0)</div>
pub const BLACK: Color = Color::new(0.0, 0.0, 0.0, 1.0);

/// <div style="margin:2px 0"><span style="background-color:rgb(255, 255, 255);padding:0 0.7em;margin-right:0.5em;border:1px solid"></span>White (255, 255, 255)</div>
pub const WHITE: Color = Color::new(1.0, 1.0, 1.0, 1.0);

/// <div style="margin:2px 0"><span style="background-color:rgb(255, 0, 0);padding:0 0.7em;margin-right:0.5em;border:1px solid"></span>Red (255, 0, 0)</div>
pub const RED: Color = Color::new(1.0, 0.0, 0.0, 1.0);

/// A `#RRGGBB` background color as given by a script.
///
/// Decoding never fails: a channel whose two characters hold no hex digit decodes to
/// `NaN`, and the render surface receives it as such.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HexColor {
    text: String,
}

impl Default for HexColor {
    fn default() -> Self {
        HexColor::new("#ffffff")
    }
}

impl HexColor {
    /// Wraps a color string without validating it.
    pub fn new(text: impl Into<String>) -> HexColor {
        HexColor { text: text.into() }
    }

    /// The color exactly as it was set.
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// The decoded `(red, green, blue)` channels.
    ///
    /// Each channel is read from characters `1..3`, `3..5` and `5..7` respectively and
    /// divided by 255.
    pub fn channels(&self) -> (f32, f32, f32) {
        let chars: Vec<char> = self.text.chars().collect();
        let channel = |start: usize| {
            let end = (start + 2).min(chars.len());
            let start = start.min(end);
            let digits: String = chars[start..end].iter().collect();
            (parse_hex_prefix(&digits) / 255.0) as f32
        };

        (channel(1), channel(3), channel(5))
    }

    /// The decoded color, fully opaque.
    pub fn to_color(&self) -> Color {
        let (r, g, b) = self.channels();
        Color::new(r, g, b, 1.0)
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl From<&str> for HexColor {
    fn from(text: &str) -> Self {
        HexColor::new(text)
    }
}

impl From<String> for HexColor {
    fn from(text: String) -> Self {
        HexColor::new(text)
    }
}

/// Parses the longest base-16 prefix of `s`, after leading whitespace, an optional sign
/// and an optional `0x` marker. Returns `NaN` when no digit is found.
fn parse_hex_prefix(s: &str) -> f64 {
    let mut rest = s.trim_start();
    let mut sign = 1.0;

    if let Some(stripped) = rest.strip_prefix('-') {
        sign = -1.0;
        rest = stripped;
    } else if let Some(stripped) = rest.strip_prefix('+') {
        rest = stripped;
    }

    if let Some(stripped) = rest.strip_prefix("0x").or_else(|| rest.strip_prefix("0X")) {
        rest = stripped;
    }

    let mut value: Option<f64> = None;

    for c in rest.chars() {
        match c.to_digit(16) {
            Some(digit) => value = Some(value.unwrap_or(0.0) * 16.0 + digit as f64),
            None => break,
        }
    }

    value.map_or(f64::NAN, |v| sign * v)
}
