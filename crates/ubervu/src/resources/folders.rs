//! Folders endpoint

use super::{GROUP_PARAM, LIMIT_PARAM, NO_PAGINATION, require_id};
use crate::{
    client::Client,
    error::Result,
    http::Method,
    types::{Folder, Id, ObjectList},
};

/// Context folders within a group.
#[derive(Debug, Clone)]
pub struct Folders {
    client: Client,
}

impl Folders {
    pub(crate) fn new(client: Client) -> Self {
        Self { client }
    }

    /// List every folder of a group, unpaginated, in server order.
    pub async fn list(&self, group_id: impl Into<Id>) -> Result<ObjectList<Folder>> {
        let group_id = group_id.into();
        require_id(&group_id, "group id")?;

        let request = self
            .client
            .request(Method::GET, "folders/")?
            .query(LIMIT_PARAM, NO_PAGINATION)
            .query(GROUP_PARAM, group_id.to_string());

        self.client.execute(request).await
    }
}
