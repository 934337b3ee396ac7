//! Keywords (streams) endpoint

use super::{GROUP_PARAM, LIMIT_PARAM, NO_PAGINATION, require_id, require_text};
use crate::{
    client::Client,
    error::Result,
    http::Method,
    types::{Id, Keyword, NewKeyword, ObjectList},
};

/// Keywords, a.k.a. streams.
#[derive(Debug, Clone)]
pub struct Keywords {
    client: Client,
}

impl Keywords {
    pub(crate) fn new(client: Client) -> Self {
        Self { client }
    }

    /// List every keyword of a group, unpaginated, in server order.
    pub async fn list(&self, group_id: impl Into<Id>) -> Result<ObjectList<Keyword>> {
        let group_id = group_id.into();
        require_id(&group_id, "group id")?;

        let request = self
            .client
            .request(Method::GET, "keywords/")?
            .query(LIMIT_PARAM, NO_PAGINATION)
            .query(GROUP_PARAM, group_id.to_string());

        self.client.execute(request).await
    }

    /// Add a keyword with the given query to a folder.
    ///
    /// The query is written in the uberVU query language, which is close to
    /// the Twitter search syntax. The number of keywords a folder can hold is
    /// bounded by the group's limits and the account's business plan.
    ///
    /// `name` is required but not sent: the API stores the query as the
    /// keyword's name.
    pub async fn create(
        &self,
        name: &str,
        query: &str,
        folder_id: impl Into<Id>,
    ) -> Result<Keyword> {
        let folder_id = folder_id.into();
        require_text(name, "keyword name")?;
        require_text(query, "keyword query")?;
        require_id(&folder_id, "folder id")?;

        let request = self
            .client
            .request(Method::POST, "keywords/")?
            .json(&NewKeyword::new(query, &folder_id))?;

        self.client.execute(request).await
    }

    /// Delete a keyword by id, returning the server's acknowledgement
    /// (`Value::Null` when the response has no body).
    pub async fn delete(&self, keyword_id: impl Into<Id>) -> Result<serde_json::Value> {
        let keyword_id = keyword_id.into();
        require_id(&keyword_id, "keyword id")?;

        let request = self
            .client
            .member_request(Method::DELETE, "keywords/", &keyword_id)?;

        self.client.execute_ack(request).await
    }
}
