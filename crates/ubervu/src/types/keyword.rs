//! Keywords (streams)

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::Id;

/// Value of the `type` field for keyword streams.
pub const KEYWORD_TYPE: &str = "keyword";

/// A keyword, a.k.a. stream: the unit of data gathering.
///
/// uberVU gathers social media mentions for the query in `keyword`, computes
/// pre-aggregated metrics and surfaces insights about it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Keyword {
    /// Keyword id
    pub id: Id,

    /// Display name
    #[serde(default)]
    pub name: String,

    /// Query expression, in the uberVU query language. Absent for stream
    /// types that are not query based.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub keyword: Option<String>,

    /// Folder holding the keyword
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub folder_id: Option<Id>,

    /// Stream type, `"keyword"` for keyword streams
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,

    /// Remaining fields, kept verbatim
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Request body for creating a keyword.
///
/// The API expects `name` to carry the query expression as well, so both
/// fields are filled from the query.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewKeyword<'a> {
    /// Display name (the query)
    pub name: &'a str,
    /// Query expression
    pub keyword: &'a str,
    /// Target folder
    pub folder_id: &'a Id,
    /// Always [`KEYWORD_TYPE`]
    #[serde(rename = "type")]
    pub kind: &'static str,
    /// Always `true`, sent as a JSON boolean. Older clients sent the string
    /// `"true"`; the API accepts both.
    pub form: bool,
}

impl<'a> NewKeyword<'a> {
    /// Body for a keyword with the given query in the given folder.
    pub fn new(query: &'a str, folder_id: &'a Id) -> Self {
        Self {
            name: query,
            keyword: query,
            folder_id,
            kind: KEYWORD_TYPE,
            form: true,
        }
    }
}
