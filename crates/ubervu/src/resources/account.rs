//! Current user endpoint

use crate::{client::Client, error::Result, http::Method, types::CurrentUser};

/// Information about the authenticated user.
#[derive(Debug, Clone)]
pub struct Account {
    client: Client,
}

impl Account {
    pub(crate) fn new(client: Client) -> Self {
        Self { client }
    }

    /// Obtain metadata about the currently "logged in" user.
    ///
    /// Every request is made with an `(email, apikey)` pair; use this when you
    /// need more information about that user, such as its group.
    pub async fn me(&self) -> Result<CurrentUser> {
        let request = self.client.request(Method::GET, "current/")?;
        self.client.execute(request).await
    }
}
