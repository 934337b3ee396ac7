//! Types for the uberVU Metrics API
//!
//! Response payloads are decoded into typed structs. Fields the client does
//! not model are kept in each type's `extra` map, so nothing the server sent
//! is lost.

pub mod account;
pub mod folder;
pub mod id;
pub mod keyword;
pub mod list;

pub use account::{CurrentUser, Group};
pub use folder::{COMPANY_FOLDER_NAME, ContextType, Folder};
pub use id::Id;
pub use keyword::{KEYWORD_TYPE, Keyword, NewKeyword};
pub use list::{ListMeta, ObjectList};
