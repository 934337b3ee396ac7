//! Remote resource identifiers

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a remote resource.
///
/// The API is not consistent about id types: some payloads carry integers,
/// others strings. `Id` keeps whichever representation the server used so it
/// is sent back unchanged (e.g. as `folder_id` when creating a keyword).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Id {
    /// Integer id
    Number(u64),
    /// String id
    Text(String),
}

impl Id {
    /// True for an empty or whitespace-only string id.
    pub fn is_blank(&self) -> bool {
        match self {
            Id::Number(_) => false,
            Id::Text(s) => s.trim().is_empty(),
        }
    }
}

impl fmt::Display for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Id::Number(n) => write!(f, "{}", n),
            Id::Text(s) => f.write_str(s),
        }
    }
}

impl From<u64> for Id {
    fn from(value: u64) -> Self {
        Id::Number(value)
    }
}

impl From<String> for Id {
    fn from(value: String) -> Self {
        Id::Text(value)
    }
}

impl From<&str> for Id {
    fn from(value: &str) -> Self {
        Id::Text(value.to_string())
    }
}

impl From<&Id> for Id {
    fn from(value: &Id) -> Self {
        value.clone()
    }
}

impl PartialEq<str> for Id {
    fn eq(&self, other: &str) -> bool {
        matches!(self, Id::Text(s) if s == other)
    }
}

impl PartialEq<&str> for Id {
    fn eq(&self, other: &&str) -> bool {
        self == *other
    }
}
