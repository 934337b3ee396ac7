//! Account-level types: the authenticated user and groups

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::Id;

/// The authenticated identity, as returned by `current/`.
///
/// Every call is made with an `(email, apikey)` pair; this payload tells which
/// group (View, in the UI) that user belongs to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrentUser {
    /// Default group of the user
    pub group_id: Id,

    /// Remaining fields, kept verbatim
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A group: an independent segment of an account's plan, made of a set of
/// users and streams. Shown as a "View" in the UI.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Group {
    /// Group id
    pub id: Id,

    /// Display name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Remaining fields, kept verbatim
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
