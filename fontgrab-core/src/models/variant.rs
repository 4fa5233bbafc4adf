//! Variant keys.
//!
//! A variant key identifies one weight/style pair within a family. Its
//! string form is the weight number, suffixed with `i` for italic:
//! `"400"`, `"700i"`.

use std::fmt;
use std::str::FromStr;

use crate::error::CoreError;

/// A parsed variant key: weight plus upright/italic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct VariantKey {
    /// CSS font-weight, e.g. 400.
    pub weight: u32,
    /// Whether this is the italic variant.
    pub italic: bool,
}

impl VariantKey {
    /// Creates a variant key.
    pub fn new(weight: u32, italic: bool) -> Self {
        Self { weight, italic }
    }
}

impl fmt::Display for VariantKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.italic {
            write!(f, "{}i", self.weight)
        } else {
            write!(f, "{}", self.weight)
        }
    }
}

impl FromStr for VariantKey {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (digits, italic) = match s.strip_suffix('i') {
            Some(rest) => (rest, true),
            None => (s, false),
        };
        let weight = digits
            .parse()
            .map_err(|_| CoreError::InvalidVariantKey(s.to_string()))?;
        Ok(Self { weight, italic })
    }
}
