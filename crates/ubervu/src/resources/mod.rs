//! API resource endpoints
//!
//! One handle per remote resource. Handles are cheap to create and hold a
//! clone of the [`Client`](crate::Client).

pub mod account;
pub mod folders;
pub mod groups;
pub mod keywords;

pub use account::Account;
pub use folders::Folders;
pub use groups::Groups;
pub use keywords::Keywords;

use crate::{
    error::{Error, Result},
    types::Id,
};

/// Query parameter controlling page size.
pub const LIMIT_PARAM: &str = "limit";

/// Page size that disables pagination. Callers rely on list endpoints
/// returning the complete collection in one response.
pub const NO_PAGINATION: &str = "0";

/// Query parameter scoping a listing to one group.
pub const GROUP_PARAM: &str = "display_group_id";

fn require_id(id: &Id, what: &str) -> Result<()> {
    if id.is_blank() {
        return Err(Error::InvalidRequest(format!("{} cannot be empty", what)));
    }
    Ok(())
}

pub(crate) fn require_text(value: &str, what: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(Error::InvalidRequest(format!("{} cannot be empty", what)));
    }
    Ok(())
}
