// Fri Oct 16 2026 - Alex

use serde::{Deserialize, Serialize};
use std::fmt;

/// How a type is held by whoever embeds it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Semantics {
    /// Copied inline, no identity, no header.
    Value,
    /// Lives in its own allocation behind a handle and carries an object header.
    Reference,
}

impl Semantics {
    pub fn is_value(self) -> bool {
        matches!(self, Self::Value)
    }

    pub fn is_reference(self) -> bool {
        matches!(self, Self::Reference)
    }
}

impl fmt::Display for Semantics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Value => write!(f, "value"),
            Self::Reference => write!(f, "reference"),
        }
    }
}
