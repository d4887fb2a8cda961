//
//  azure-devops-rest
//  api/git/options.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Optional query parameters of the Git operations.

use serde::Serialize;

use super::models::{GitPushSearchCriteria, GitQueryCommitsCriteria, GitVersionDescriptor, VersionControlRecursionType};
use super::pull_requests::GitPullRequestSearchCriteria;

#[derive(Debug, Clone, Serialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct GetRepositoriesOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_links: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_all_urls: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_hidden: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct CreateRepositoryOptions {
    /// Branches to include when forking, e.g. `refs/heads/main`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_ref: Option<String>,
}

#[derive(Debug, Clone, Serialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct GetItemOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scope_path: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub recursion_level: Option<VersionControlRecursionType>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_content_metadata: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub latest_processed_change: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub download: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub version_descriptor: Option<GitVersionDescriptor>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_content: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub resolve_lfs: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub sanitize: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct GetItemsOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scope_path: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub recursion_level: Option<VersionControlRecursionType>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_content_metadata: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub latest_processed_change: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub download: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_links: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub version_descriptor: Option<GitVersionDescriptor>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub zip_for_unix: Option<bool>,
}

/// Options of [`GitClient::get_refs`](super::GitClient::get_refs).
///
/// `filter` is a ref name prefix without `refs/` (`heads/` lists branches).
#[derive(Debug, Clone, Serialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct GetRefsOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_links: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_statuses: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_my_branches: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub latest_statuses_only: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub peel_tags: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter_contains: Option<String>,

    #[serde(rename = "$top", skip_serializing_if = "Option::is_none")]
    pub top: Option<i32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub continuation_token: Option<String>,
}

#[derive(Debug, Clone, Serialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct GetBranchOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_version_descriptor: Option<GitVersionDescriptor>,
}

#[derive(Debug, Clone, Serialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct GetCommitOptions {
    /// Number of changes to include with the commit.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub change_count: Option<i32>,
}

#[derive(Debug, Clone, Serialize, Default)]
pub struct GetCommitsOptions {
    #[serde(rename = "searchCriteria", skip_serializing_if = "Option::is_none")]
    pub search_criteria: Option<GitQueryCommitsCriteria>,

    #[serde(rename = "$skip", skip_serializing_if = "Option::is_none")]
    pub skip: Option<i32>,

    #[serde(rename = "$top", skip_serializing_if = "Option::is_none")]
    pub top: Option<i32>,
}

#[derive(Debug, Clone, Serialize, Default)]
pub struct GetChangesOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top: Option<i32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub skip: Option<i32>,
}

#[derive(Debug, Clone, Serialize, Default)]
pub struct GetPushesOptions {
    #[serde(rename = "$skip", skip_serializing_if = "Option::is_none")]
    pub skip: Option<i32>,

    #[serde(rename = "$top", skip_serializing_if = "Option::is_none")]
    pub top: Option<i32>,

    #[serde(rename = "searchCriteria", skip_serializing_if = "Option::is_none")]
    pub search_criteria: Option<GitPushSearchCriteria>,
}

#[derive(Debug, Clone, Serialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct GetPushOptions {
    /// Number of commits to include; `0` omits them.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_commits: Option<i32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_ref_updates: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct GetBlobOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub download: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub resolve_lfs: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct GetStatusesOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top: Option<i32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub skip: Option<i32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub latest_only: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct GetPullRequestOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_comment_length: Option<i32>,

    #[serde(rename = "$skip", skip_serializing_if = "Option::is_none")]
    pub skip: Option<i32>,

    #[serde(rename = "$top", skip_serializing_if = "Option::is_none")]
    pub top: Option<i32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_commits: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_work_item_refs: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct GetPullRequestsOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search_criteria: Option<GitPullRequestSearchCriteria>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_comment_length: Option<i32>,

    #[serde(rename = "$skip", skip_serializing_if = "Option::is_none")]
    pub skip: Option<i32>,

    #[serde(rename = "$top", skip_serializing_if = "Option::is_none")]
    pub top: Option<i32>,
}

#[derive(Debug, Clone, Serialize, Default)]
pub struct GetThreadsOptions {
    #[serde(rename = "$iteration", skip_serializing_if = "Option::is_none")]
    pub iteration: Option<i32>,

    #[serde(rename = "$baseIteration", skip_serializing_if = "Option::is_none")]
    pub base_iteration: Option<i32>,
}

#[derive(Debug, Clone, Serialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct GetConflictsOptions {
    #[serde(rename = "$skip", skip_serializing_if = "Option::is_none")]
    pub skip: Option<i32>,

    #[serde(rename = "$top", skip_serializing_if = "Option::is_none")]
    pub top: Option<i32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_obsolete: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub exclude_resolved: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub only_resolved: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::git::PullRequestStatus;
    use crate::api::query::to_query_pairs;

    #[test]
    fn test_search_criteria_flatten_with_prefix() {
        let options = GetPullRequestsOptions {
            search_criteria: Some(GitPullRequestSearchCriteria {
                status: Some(PullRequestStatus::Active),
                target_ref_name: Some("refs/heads/main".into()),
                ..Default::default()
            }),
            top: Some(10),
            ..Default::default()
        };

        let mut pairs = to_query_pairs(&options).unwrap();
        pairs.sort();

        assert_eq!(
            pairs,
            vec![
                ("$top".to_string(), "10".to_string()),
                ("searchCriteria.status".to_string(), "active".to_string()),
                ("searchCriteria.targetRefName".to_string(), "refs/heads/main".to_string()),
            ]
        );
    }

    #[test]
    fn test_refs_filter_is_not_a_query_parameter() {
        let options = GetRefsOptions {
            filter: Some("heads/".into()),
            peel_tags: Some(true),
            ..Default::default()
        };

        assert_eq!(
            to_query_pairs(&options).unwrap(),
            vec![("peelTags".to_string(), "true".to_string())]
        );
    }

    #[test]
    fn test_version_descriptor_flattens() {
        let options = GetItemOptions {
            version_descriptor: Some(GitVersionDescriptor::branch("dev")),
            ..Default::default()
        };

        let mut pairs = to_query_pairs(&options).unwrap();
        pairs.sort();

        assert_eq!(
            pairs,
            vec![
                ("versionDescriptor.version".to_string(), "dev".to_string()),
                ("versionDescriptor.versionType".to_string(), "branch".to_string()),
            ]
        );
    }
}
