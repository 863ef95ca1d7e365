use std::fmt;
use std::str::FromStr;

use crate::error::ValueError;

/// A `#RGB` or `#RRGGBB` color code, stored uppercased.
///
/// Only the `#` marker and the length are checked. The remaining characters
/// are kept as given (after uppercasing) even if they are not hex digits;
/// documents in the wild rely on that leniency.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct HexColor(String);

impl HexColor {
    /// Fails with [`ValueError::Format`] unless `code` starts with `#` and is
    /// 4 or 7 characters long.
    pub fn new(code: &str) -> Result<Self, ValueError> {
        let len = code.chars().count();
        if !code.starts_with('#') || !(len == 4 || len == 7) {
            return Err(ValueError::Format { code: code.to_owned() });
        }
        // ASCII-only case mapping keeps the character count intact.
        Ok(Self(code.to_ascii_uppercase()))
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for HexColor {
    type Err = ValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<&str> for HexColor {
    type Error = ValueError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl AsRef<str> for HexColor {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<HexColor> for String {
    fn from(color: HexColor) -> String {
        color.0
    }
}
