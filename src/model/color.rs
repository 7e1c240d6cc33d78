use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

static HEX_COLOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^#[0-9A-Fa-f]{6}$").expect("valid hex color regex"));

/// Error returned when a string is not a `#RRGGBB` color
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid color \"{0}\": expected #RRGGBB")]
pub struct ColorError(pub String);

/// A `#RRGGBB` hex color. Case is preserved as written.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color(String);

impl Color {
    pub fn parse(s: &str) -> Result<Self, ColorError> {
        let trimmed = s.trim();
        if HEX_COLOR.is_match(trimmed) {
            Ok(Color(trimmed.to_string()))
        } else {
            Err(ColorError(s.to_string()))
        }
    }

    /// Build from a literal already known to be `#RRGGBB` (built-in defaults)
    pub(crate) fn from_static(s: &'static str) -> Self {
        debug_assert!(HEX_COLOR.is_match(s));
        Color(s.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Case-insensitive comparison (`#ffa500` and `#FFA500` name the same color)
    pub fn same_as(&self, other: &Color) -> bool {
        self.0.eq_ignore_ascii_case(&other.0)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for Color {
    type Error = ColorError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Color::parse(&value)
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.0
    }
}

impl std::str::FromStr for Color {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Color::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid() {
        assert_eq!(Color::parse("#3788D8").unwrap().as_str(), "#3788D8");
        assert_eq!(Color::parse(" #ffc107 ").unwrap().as_str(), "#ffc107");
    }

    #[test]
    fn test_parse_invalid() {
        assert!(Color::parse("3788D8").is_err());
        assert!(Color::parse("#378").is_err());
        assert!(Color::parse("#GGGGGG").is_err());
        assert!(Color::parse("").is_err());
    }

    #[test]
    fn test_same_as_ignores_case() {
        let a = Color::parse("#ffa500").unwrap();
        let b = Color::parse("#FFA500").unwrap();
        assert!(a.same_as(&b));
        assert_ne!(a, b);
    }

    #[test]
    fn test_deserialize_rejects_bad_color() {
        let ok: Result<Color, _> = serde_json::from_str("\"#009900\"");
        assert!(ok.is_ok());
        let bad: Result<Color, _> = serde_json::from_str("\"green\"");
        assert!(bad.is_err());
    }
}
