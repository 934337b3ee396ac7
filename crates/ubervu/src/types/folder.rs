//! Context folders

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::Id;

/// Name of the predefined company folder.
pub const COMPANY_FOLDER_NAME: &str = "Company";

/// A folder grouping streams within a group.
///
/// Folders name a logical group of streams and, depending on their context
/// type, decide how Signals are computed for the streams they hold. Every
/// group starts with four predefined, non-editable folders: Company,
/// Competitors, Market Terms and Saved Searches.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Folder {
    /// Folder id
    pub id: Id,

    /// Display name
    pub name: String,

    /// Context classification
    #[serde(default)]
    pub context_type: ContextType,

    /// Remaining fields, kept verbatim
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Folder {
    /// The group's predefined company folder.
    pub fn is_default_company(&self) -> bool {
        self.context_type == ContextType::Company && self.name == COMPANY_FOLDER_NAME
    }
}

/// Context type of a folder.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ContextType {
    /// Streams about your own company
    #[serde(rename = "company")]
    Company,
    /// Streams about competitors
    #[serde(rename = "competitors")]
    Competitors,
    /// General terms of the market you operate in
    #[serde(rename = "market-terms")]
    MarketTerms,
    /// Plain searches with no contextual information
    #[serde(rename = "saved-searches")]
    SavedSearches,
    /// Missing or unrecognized context type
    #[default]
    #[serde(other)]
    Other,
}

impl ContextType {
    /// Whether Signals are computed for streams in folders of this type.
    /// Saved searches carry no context, so no Signals are computed for them.
    pub fn has_signals(self) -> bool {
        matches!(
            self,
            ContextType::Company | ContextType::Competitors | ContextType::MarketTerms
        )
    }
}
