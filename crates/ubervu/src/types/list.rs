//! List envelope shared by every collection endpoint

use serde::{Deserialize, Serialize};

/// Collection response: `{"meta": {...}, "objects": [...]}`.
///
/// `objects` keeps the order the server returned.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObjectList<T> {
    /// Items in server order
    pub objects: Vec<T>,

    /// Paging metadata, if the server sent any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta: Option<ListMeta>,
}

impl<T> ObjectList<T> {
    /// Number of items.
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    /// True when the collection is empty.
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// Iterate over the items in server order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.objects.iter()
    }

    /// Whether the server indicated more pages. With `limit=0` this should
    /// never be the case.
    pub fn has_more(&self) -> bool {
        self.meta.as_ref().is_some_and(|m| m.next.is_some())
    }
}

impl<T> IntoIterator for ObjectList<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.objects.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a ObjectList<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.objects.iter()
    }
}

/// Paging metadata.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListMeta {
    /// Page size (0 means unlimited)
    #[serde(default)]
    pub limit: Option<u64>,
    /// Offset of the first item
    #[serde(default)]
    pub offset: Option<u64>,
    /// Total number of items
    #[serde(default)]
    pub total_count: Option<u64>,
    /// URL of the next page
    #[serde(default)]
    pub next: Option<String>,
    /// URL of the previous page
    #[serde(default)]
    pub previous: Option<String>,
}
