//! Loosely-typed block inputs and outputs.
//!
//! Block arguments arrive as whatever the script put in the slot. Numeric slots are
//! coerced the way the host's scripting language coerces with unary plus, so `"12"`,
//! `" 12 "` and `12` are all the number twelve, and anything unparsable becomes `NaN`.

use std::fmt;

/// A value passed to a block.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BlockArg {
    /// A number slot, or a reporter returning a number.
    Number(f64),
    /// A text slot, or a reporter returning text.
    Text(String),
    /// A boolean reporter.
    Bool(bool),
}

impl BlockArg {
    /// Coerces the argument to a number. Never fails.
    pub fn to_number(&self) -> f64 {
        match self {
            BlockArg::Number(n) => *n,
            BlockArg::Bool(b) => {
                if *b {
                    1.0
                } else {
                    0.0
                }
            }
            BlockArg::Text(s) => string_to_number(s),
        }
    }

    /// Coerces the argument to text.
    pub fn to_text(&self) -> String {
        match self {
            BlockArg::Number(n) => number_to_string(*n),
            BlockArg::Bool(b) => b.to_string(),
            BlockArg::Text(s) => s.clone(),
        }
    }
}

impl fmt::Display for BlockArg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_text())
    }
}

impl From<f64> for BlockArg {
    fn from(n: f64) -> Self {
        BlockArg::Number(n)
    }
}

impl From<&str> for BlockArg {
    fn from(s: &str) -> Self {
        BlockArg::Text(s.to_string())
    }
}

impl From<String> for BlockArg {
    fn from(s: String) -> Self {
        BlockArg::Text(s)
    }
}

impl From<bool> for BlockArg {
    fn from(b: bool) -> Self {
        BlockArg::Bool(b)
    }
}

/// A value reported by a block.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BlockValue {
    /// A numeric report.
    Number(f64),
    /// A textual report.
    Text(String),
}

impl BlockValue {
    /// The reported number, if this is a numeric report.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            BlockValue::Number(n) => Some(*n),
            BlockValue::Text(_) => None,
        }
    }

    /// The reported text, if this is a textual report.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            BlockValue::Number(_) => None,
            BlockValue::Text(s) => Some(s),
        }
    }
}

impl fmt::Display for BlockValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BlockValue::Number(n) => f.write_str(&number_to_string(*n)),
            BlockValue::Text(s) => f.write_str(s),
        }
    }
}

fn string_to_number(s: &str) -> f64 {
    let s = s.trim();

    if s.is_empty() {
        return 0.0;
    }

    for (lower, upper, radix) in &[("0x", "0X", 16), ("0o", "0O", 8), ("0b", "0B", 2)] {
        if let Some(body) = s.strip_prefix(*lower).or_else(|| s.strip_prefix(*upper)) {
            return parse_radix(body, *radix);
        }
    }

    match s {
        "Infinity" | "+Infinity" => return f64::INFINITY,
        "-Infinity" => return f64::NEG_INFINITY,
        _ => {}
    }

    // `f64::from_str` also knows `inf` and `nan`, which must not parse here.
    if !s
        .chars()
        .all(|c| c.is_ascii_digit() || matches!(c, '+' | '-' | '.' | 'e' | 'E'))
    {
        return f64::NAN;
    }

    s.parse().unwrap_or(f64::NAN)
}

fn parse_radix(body: &str, radix: u32) -> f64 {
    if body.is_empty() {
        return f64::NAN;
    }

    let mut value = 0.0;

    for c in body.chars() {
        match c.to_digit(radix) {
            Some(digit) => value = value * radix as f64 + digit as f64,
            None => return f64::NAN,
        }
    }

    value
}

fn number_to_string(n: f64) -> String {
    if n.is_nan() {
        return "NaN".to_string();
    }

    if n.is_infinite() {
        let text = if n > 0.0 { "Infinity" } else { "-Infinity" };
        return text.to_string();
    }

    if n == 0.0 {
        // Covers negative zero too.
        return "0".to_string();
    }

    let abs = n.abs();

    if abs >= 1.0e21 || abs < 1.0e-6 {
        let formatted = format!("{:e}", n);
        return match formatted.find('e') {
            Some(pos) if !formatted[pos + 1..].starts_with('-') => {
                format!("{}e+{}", &formatted[..pos], &formatted[pos + 1..])
            }
            _ => formatted,
        };
    }

    format!("{}", n)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn num(s: &str) -> f64 {
        BlockArg::from(s).to_number()
    }

    #[test]
    fn numbers_and_booleans_coerce_directly() {
        assert_eq!(BlockArg::Number(-3.5).to_number(), -3.5);
        assert_eq!(BlockArg::Bool(true).to_number(), 1.0);
        assert_eq!(BlockArg::Bool(false).to_number(), 0.0);
    }

    #[test]
    fn decimal_strings() {
        assert_eq!(num("12"), 12.0);
        assert_eq!(num("  12\n"), 12.0);
        assert_eq!(num("-0.5"), -0.5);
        assert_eq!(num(".5"), 0.5);
        assert_eq!(num("1e3"), 1000.0);
        assert_eq!(num("+7"), 7.0);
    }

    #[test]
    fn empty_string_is_zero() {
        assert_eq!(num(""), 0.0);
        assert_eq!(num("   "), 0.0);
    }

    #[test]
    fn prefixed_integers() {
        assert_eq!(num("0x1F"), 31.0);
        assert_eq!(num("0o17"), 15.0);
        assert_eq!(num("0b101"), 5.0);
        assert!(num("0x").is_nan());
        assert!(num("0xZZ").is_nan());
    }

    #[test]
    fn infinities() {
        assert_eq!(num("Infinity"), f64::INFINITY);
        assert_eq!(num("-Infinity"), f64::NEG_INFINITY);
        assert!(num("inf").is_nan());
        assert!(num("nan").is_nan());
    }

    #[test]
    fn garbage_is_nan() {
        assert!(num("ten").is_nan());
        assert!(num("12px").is_nan());
        assert!(num("1 2").is_nan());
        assert!(num(".").is_nan());
    }

    #[test]
    fn numbers_render_without_trailing_fraction() {
        assert_eq!(BlockArg::Number(15.0).to_text(), "15");
        assert_eq!(BlockArg::Number(-0.0).to_text(), "0");
        assert_eq!(BlockArg::Number(0.25).to_text(), "0.25");
        assert_eq!(BlockArg::Number(f64::NAN).to_text(), "NaN");
        assert_eq!(BlockArg::Number(f64::NEG_INFINITY).to_text(), "-Infinity");
        assert_eq!(BlockArg::Number(1.0e21).to_text(), "1e+21");
        assert_eq!(BlockArg::Number(1.5e-7).to_text(), "1.5e-7");
        assert_eq!(BlockArg::Bool(true).to_text(), "true");
    }

    #[test]
    fn block_values() {
        assert_eq!(BlockValue::Number(370.0).as_number(), Some(370.0));
        assert_eq!(BlockValue::Number(370.0).as_text(), None);
        assert_eq!(BlockValue::Text("World!".into()).as_text(), Some("World!"));
        assert_eq!(BlockValue::Number(370.0).to_string(), "370");
    }
}
