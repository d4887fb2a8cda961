//
//  azure-devops-rest
//  api/common/pagination.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Pagination Types for Azure DevOps List Responses
//!
//! List endpoints return their items either as a bare JSON array or wrapped as
//! `{ "count": n, "value": [...] }`. Endpoints that page their results also send
//! an opaque continuation token in the `x-ms-continuationtoken` response header.
//!
//! # Overview
//!
//! | Type | Purpose |
//! |------|---------|
//! | [`VssJsonCollectionWrapper`] | The `{ count, value }` envelope |
//! | [`PagedList`] | Decoded items plus the continuation token, if any |
//!
//! # Continuation Tokens
//!
//! The library never follows tokens on its own. A caller that wants the next
//! page passes [`PagedList::continuation_token`] back as the `continuation_token`
//! option of the same operation:
//!
//! ```rust,no_run
//! use azure_devops_rest::api::git::{GetRefsOptions, GitClient};
//!
//! async fn all_branches(git: &GitClient) -> Result<Vec<String>, azure_devops_rest::api::ApiError> {
//!     let mut names = Vec::new();
//!     let mut options = GetRefsOptions {
//!         filter: Some("heads/".to_string()),
//!         ..Default::default()
//!     };
//!
//!     loop {
//!         let page = git.get_refs("my-repo", Some("Fabrikam"), &options).await?;
//!         let (refs, token) = page.into_parts();
//!         names.extend(refs.into_iter().filter_map(|r| r.name));
//!
//!         match token {
//!             Some(token) => options.continuation_token = Some(token),
//!             None => break,
//!         }
//!     }
//!     Ok(names)
//! }
//! ```

use std::ops::Deref;

use serde::{Deserialize, Serialize};

/// Response header carrying the token for the next page.
pub const CONTINUATION_TOKEN_HEADER: &str = "x-ms-continuationtoken";

/// The `{ "count": n, "value": [...] }` list envelope.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VssJsonCollectionWrapper<T> {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub count: Option<usize>,

    pub value: Vec<T>,
}

/// One page of results from a paginated list operation.
#[derive(Debug, Clone, PartialEq)]
pub struct PagedList<T> {
    pub items: Vec<T>,

    /// Value of the `x-ms-continuationtoken` header; `None` when absent.
    pub continuation_token: Option<String>,
}

impl<T> PagedList<T> {
    pub fn new(items: Vec<T>, continuation_token: Option<String>) -> Self {
        Self {
            items,
            continuation_token,
        }
    }

    /// Returns `true` if the server signalled another page.
    pub fn has_more(&self) -> bool {
        self.continuation_token.is_some()
    }

    pub fn into_parts(self) -> (Vec<T>, Option<String>) {
        (self.items, self.continuation_token)
    }
}

impl<T> Default for PagedList<T> {
    fn default() -> Self {
        Self::new(Vec::new(), None)
    }
}

impl<T> Deref for PagedList<T> {
    type Target = [T];

    fn deref(&self) -> &[T] {
        &self.items
    }
}

impl<T> IntoIterator for PagedList<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a PagedList<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paged_list_behaves_like_a_slice() {
        let page = PagedList::new(vec![1, 2, 3], Some("abc".to_string()));

        assert_eq!(page.len(), 3);
        assert_eq!(page.first(), Some(&1));
        assert!(page.has_more());
        assert_eq!((&page).into_iter().sum::<i32>(), 6);
    }

    #[test]
    fn test_last_page_has_no_token() {
        let page: PagedList<i32> = PagedList::new(vec![], None);
        assert!(!page.has_more());
        assert_eq!(page.into_parts(), (vec![], None));
    }
}
