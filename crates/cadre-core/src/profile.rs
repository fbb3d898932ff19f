//! Profile references
//!
//! A profile reference points at externally stored profile content (a
//! content hash such as an IPFS CID). The registry stores and returns it
//! without interpreting it.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque reference to externally stored profile content.
#[derive(
    Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct ProfileRef(String);

impl ProfileRef {
    /// Create a profile reference.
    pub fn new(reference: impl Into<String>) -> Self {
        Self(reference.into())
    }

    /// The empty reference, used for identities with no stored profile.
    pub fn empty() -> Self {
        Self(String::new())
    }

    /// Get the inner reference string.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether this reference points at anything.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for ProfileRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for ProfileRef {
    fn from(reference: String) -> Self {
        Self(reference)
    }
}

impl From<&str> for ProfileRef {
    fn from(reference: &str) -> Self {
        Self(reference.to_string())
    }
}
