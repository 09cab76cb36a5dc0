//! [`AmountLiteral`] represents a payment amount exactly as written in the source URI.
//!
//! This module holds its type definition and implementations.

use std::fmt::Display;

use serde::{Deserialize, Serialize};

/// A decimal amount kept as the literal taken from the source.
///
/// The value is never parsed into a number: `1.5e18`, `0.000001` and
/// `115792089237316195423570985008687907853269984665640564039457584007913129639935`
/// all survive untouched, whatever their magnitude or notation.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AmountLiteral(pub String);

impl AmountLiteral {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for AmountLiteral {
    fn from(value: &str) -> Self {
        AmountLiteral(value.to_string())
    }
}

impl From<String> for AmountLiteral {
    fn from(value: String) -> Self {
        AmountLiteral(value)
    }
}

impl PartialEq<&str> for AmountLiteral {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl Display for AmountLiteral {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Serialize for AmountLiteral {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for AmountLiteral {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(AmountLiteral(s))
    }
}
