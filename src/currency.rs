//! Currency identifiers

use serde::{Deserialize, Serialize};
use std::fmt;

/// A currency code, e.g. `"USD"`.
///
/// Codes are opaque identifiers: equality is exact string match with no
/// trimming or case folding, so `"usd"` and `"USD"` are distinct currencies.
/// Any token an input file carries is a valid code.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Currency(String);

impl Currency {
    /// Create a currency from a code, as-is
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    /// Get the code as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Currency {
    fn from(code: &str) -> Self {
        Self(code.to_string())
    }
}

impl From<String> for Currency {
    fn from(code: String) -> Self {
        Self(code)
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
