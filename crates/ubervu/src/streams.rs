//! Stream workflows
//!
//! Higher-level operations that chain several endpoint calls: resolve the
//! user's default group, look up the relevant folder or keyword in it, then
//! mutate. Steps run strictly in sequence and nothing is rolled back if a
//! later step fails.

use serde_json::Value;
use tracing::{debug, info};

use crate::{
    client::Client,
    error::{Error, Result},
    resources::require_text,
    types::{COMPANY_FOLDER_NAME, Folder, Keyword},
};

/// Create and delete search streams by query.
#[derive(Debug, Clone)]
pub struct Streams {
    client: Client,
}

impl Streams {
    pub(crate) fn new(client: Client) -> Self {
        Self { client }
    }

    /// Add a search stream for `query` to the default company folder of the
    /// user's group.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidRequest`] for an empty query, before any
    /// request is sent. Returns [`Error::NotFound`] if the group has no
    /// folder named "Company" with the company context type; no keyword is
    /// created then.
    pub async fn create(&self, query: &str) -> Result<Keyword> {
        require_text(query, "stream query")?;

        let me = self.client.account().me().await?;
        debug!(group_id = %me.group_id, "Resolved default group");

        let folders = self.client.folders().list(&me.group_id).await?;
        let folder = find_company_folder(&folders.objects).ok_or_else(|| Error::NotFound {
            resource: "folder",
            criteria: format!(
                "context_type == \"company\" && name == \"{}\" in group {}",
                COMPANY_FOLDER_NAME, me.group_id
            ),
        })?;

        let keyword = self
            .client
            .keywords()
            .create(query, query, &folder.id)
            .await?;

        info!(keyword_id = %keyword.id, folder_id = %folder.id, "Created stream");
        Ok(keyword)
    }

    /// Delete the stream whose query is exactly `query` from the user's
    /// group. If several streams share the query, the first one returned by
    /// the server is deleted.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidRequest`] for an empty query and
    /// [`Error::NotFound`] if no stream matches; nothing is deleted then.
    pub async fn delete(&self, query: &str) -> Result<Value> {
        require_text(query, "stream query")?;

        let me = self.client.account().me().await?;
        debug!(group_id = %me.group_id, "Resolved default group");

        let keywords = self.client.keywords().list(&me.group_id).await?;
        let keyword = find_keyword(&keywords.objects, query).ok_or_else(|| Error::NotFound {
            resource: "keyword",
            criteria: format!("keyword == {:?} in group {}", query, me.group_id),
        })?;

        let ack = self.client.keywords().delete(&keyword.id).await?;

        info!(keyword_id = %keyword.id, "Deleted stream");
        Ok(ack)
    }
}

/// First folder that is the group's predefined company folder.
pub fn find_company_folder(folders: &[Folder]) -> Option<&Folder> {
    folders.iter().find(|folder| folder.is_default_company())
}

/// First keyword whose query is exactly `query`. Keywords without a query
/// never match.
pub fn find_keyword<'a>(keywords: &'a [Keyword], query: &str) -> Option<&'a Keyword> {
    keywords
        .iter()
        .find(|keyword| keyword.keyword.as_deref() == Some(query))
}
