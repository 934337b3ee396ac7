//! Groups endpoint

use super::{LIMIT_PARAM, NO_PAGINATION};
use crate::{
    client::Client,
    error::Result,
    http::Method,
    types::{Group, ObjectList},
};

/// Groups (Views) accessible to the current user.
#[derive(Debug, Clone)]
pub struct Groups {
    client: Client,
}

impl Groups {
    pub(crate) fn new(client: Client) -> Self {
        Self { client }
    }

    /// List every group accessible to the current user, unpaginated.
    pub async fn list(&self) -> Result<ObjectList<Group>> {
        let request = self
            .client
            .request(Method::GET, "groups/")?
            .query(LIMIT_PARAM, NO_PAGINATION);

        self.client.execute(request).await
    }
}
