//
//  azure-devops-rest
//  api/git/models.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Git version control records: repositories, refs, items, commits, pushes,
//! blobs, annotated tags and commit statuses.
//!
//! # Change Types
//!
//! [`VersionControlChangeType`] is a bit-flag value. A renamed and edited file
//! has `EDIT | RENAME`, which the server writes as `"edit, rename"`:
//!
//! ```rust
//! use azure_devops_rest::api::git::VersionControlChangeType;
//!
//! let change = VersionControlChangeType::Edit | VersionControlChangeType::Rename;
//! assert_eq!(change.bits(), 10);
//! assert_eq!(change.to_string(), "edit, rename");
//! assert!(change.contains(VersionControlChangeType::Rename));
//! ```

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::api::common::{
    vss_enum, vss_flags, IdentityRef, ReferenceLinks, ResourceRef, TeamProjectReference,
};

vss_flags! {
    /// Kind of change applied to a version-controlled item.
    pub struct VersionControlChangeType {
        const None = 0 => "none";
        const Add = 1 => "add";
        const Edit = 2 => "edit";
        const Encoding = 4 => "encoding";
        const Rename = 8 => "rename";
        const Delete = 16 => "delete";
        const Undelete = 32 => "undelete";
        const Branch = 64 => "branch";
        const Merge = 128 => "merge";
        const Lock = 256 => "lock";
        const Rollback = 512 => "rollback";
        const SourceRename = 1024 => "sourceRename";
        const TargetRename = 2048 => "targetRename";
        const Property = 4096 => "property";
        const All = 8191 => "all";
    }
}

vss_enum! {
    pub enum GitObjectType {
        Bad = 0 => "bad",
        Commit = 1 => "commit",
        Tree = 2 => "tree",
        Blob = 3 => "blob",
        Tag = 4 => "tag",
        Ext2 = 5 => "ext2",
        OfsDelta = 6 => "ofsDelta",
        RefDelta = 7 => "refDelta",
    }
}

vss_enum! {
    /// How a version string is interpreted.
    pub enum GitVersionType {
        Branch = 0 => "branch",
        Tag = 1 => "tag",
        Commit = 2 => "commit",
    }
}

vss_enum! {
    pub enum GitVersionOptions {
        None = 0 => "none",
        PreviousChange = 1 => "previousChange",
        FirstParent = 2 => "firstParent",
    }
}

vss_enum! {
    /// Depth of an item listing.
    pub enum VersionControlRecursionType {
        None = 0 => "none",
        OneLevel = 1 => "oneLevel",
        OneLevelPlusNestedEmptyFolders = 4 => "oneLevelPlusNestedEmptyFolders",
        Full = 120 => "full",
    }
}

vss_enum! {
    pub enum GitStatusState {
        NotSet = 0 => "notSet",
        Pending = 1 => "pending",
        Succeeded = 2 => "succeeded",
        Failed = 3 => "failed",
        Error = 4 => "error",
        NotApplicable = 5 => "notApplicable",
    }
}

vss_enum! {
    pub enum ItemContentType {
        RawText = 0 => "rawText",
        Base64Encoded = 1 => "base64Encoded",
    }
}

vss_enum! {
    pub enum GitHistoryMode {
        SimplifiedHistory = 0 => "simplifiedHistory",
        FirstParent = 1 => "firstParent",
        FullHistory = 2 => "fullHistory",
        FullHistorySimplifyMerges = 3 => "fullHistorySimplifyMerges",
    }
}

vss_enum! {
    /// Outcome of one ref update.
    pub enum GitRefUpdateStatus {
        Succeeded = 0 => "succeeded",
        ForcePushRequired = 1 => "forcePushRequired",
        StaleOldObjectId = 2 => "staleOldObjectId",
        InvalidRefName = 3 => "invalidRefName",
        Unprocessed = 4 => "unprocessed",
        UnresolvableToCommit = 5 => "unresolvableToCommit",
        WritePermissionRequired = 6 => "writePermissionRequired",
        ManageNotePermissionRequired = 7 => "manageNotePermissionRequired",
        CreateBranchPermissionRequired = 8 => "createBranchPermissionRequired",
        CreateTagPermissionRequired = 9 => "createTagPermissionRequired",
        RejectedByPlugin = 10 => "rejectedByPlugin",
        Locked = 11 => "locked",
        RefNameConflict = 12 => "refNameConflict",
        RejectedByPolicy = 13 => "rejectedByPolicy",
        SucceededNonExistentRef = 14 => "succeededNonExistentRef",
        SucceededCorruptRef = 15 => "succeededCorruptRef",
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct GitRepositoryRef {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub project: Option<TeamProjectReference>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub remote_url: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub ssh_url: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_fork: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct GitRepository {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub project: Option<TeamProjectReference>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_branch: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<u64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub remote_url: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub ssh_url: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub web_url: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_disabled: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_fork: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_in_maintenance: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_repository: Option<GitRepositoryRef>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub valid_remote_urls: Vec<String>,

    #[serde(rename = "_links", skip_serializing_if = "Option::is_none")]
    pub links: Option<ReferenceLinks>,
}

/// Body of a create-repository call.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct GitRepositoryCreateOptions {
    pub name: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub project: Option<TeamProjectReference>,

    /// Set to create a fork.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_repository: Option<GitRepositoryRef>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct GitRef {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub object_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub peeled_object_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub creator: Option<IdentityRef>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_locked: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_locked_by: Option<IdentityRef>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub statuses: Vec<GitStatus>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    #[serde(rename = "_links", skip_serializing_if = "Option::is_none")]
    pub links: Option<ReferenceLinks>,
}

/// One requested ref change. An all-zero object id creates or deletes a ref.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct GitRefUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub old_object_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub new_object_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_locked: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub repository_id: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct GitRefUpdateResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub old_object_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub new_object_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub success: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub update_status: Option<GitRefUpdateStatus>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_locked: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub rejected_by: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_message: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub repository_id: Option<String>,
}

/// Selects a version of the repository (branch, tag or commit).
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct GitVersionDescriptor {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub version_type: Option<GitVersionType>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub version_options: Option<GitVersionOptions>,
}

impl GitVersionDescriptor {
    pub fn branch(name: impl Into<String>) -> Self {
        Self {
            version: Some(name.into()),
            version_type: Some(GitVersionType::Branch),
            version_options: None,
        }
    }

    pub fn commit(id: impl Into<String>) -> Self {
        Self {
            version: Some(id.into()),
            version_type: Some(GitVersionType::Commit),
            version_options: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct FileContentMetadata {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_type: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub encoding: Option<i32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_binary: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_image: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub vs_link: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct GitItem {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub object_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub original_object_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub git_object_type: Option<GitObjectType>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub commit_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub latest_processed_change: Option<Box<GitCommitRef>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_folder: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_sym_link: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_metadata: Option<FileContentMetadata>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    #[serde(rename = "_links", skip_serializing_if = "Option::is_none")]
    pub links: Option<ReferenceLinks>,
}

impl GitItem {
    /// Item reference by path, as used inside push changes.
    pub fn at_path(path: impl Into<String>) -> Self {
        Self {
            path: Some(path.into()),
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ItemContent {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_type: Option<ItemContentType>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct GitChange {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub change_id: Option<i32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub change_type: Option<VersionControlChangeType>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub item: Option<GitItem>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub new_content: Option<ItemContent>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub original_path: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_server_item: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct GitUserDate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<DateTime<Utc>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct GitCommitRef {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub commit_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub tree_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<GitUserDate>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub committer: Option<GitUserDate>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment_truncated: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub change_counts: Option<HashMap<String, i32>>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub changes: Vec<GitChange>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub parents: Vec<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub push: Option<Box<GitPush>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub remote_url: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub statuses: Vec<GitStatus>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub work_items: Vec<ResourceRef>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    #[serde(rename = "_links", skip_serializing_if = "Option::is_none")]
    pub links: Option<ReferenceLinks>,
}

/// A full commit; the server returns the same shape as a commit reference
/// with `treeId` populated.
pub type GitCommit = GitCommitRef;

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct GitCommitChanges {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub change_counts: Option<HashMap<String, i32>>,

    #[serde(default)]
    pub changes: Vec<GitChange>,
}

/// Commit search filters, sent flattened as `searchCriteria.*`.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct GitQueryCommitsCriteria {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub ids: Vec<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub item_version: Option<GitVersionDescriptor>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub compare_version: Option<GitVersionDescriptor>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub from_commit_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub to_commit_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub from_date: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub to_date: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub item_path: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub history_mode: Option<GitHistoryMode>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub exclude_deletes: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_links: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_push_data: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_user_image_url: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_work_items: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_oldest_commits_first: Option<bool>,

    #[serde(rename = "$skip", skip_serializing_if = "Option::is_none")]
    pub skip: Option<i32>,

    #[serde(rename = "$top", skip_serializing_if = "Option::is_none")]
    pub top: Option<i32>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct GitPush {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub push_id: Option<i32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<DateTime<Utc>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub pushed_by: Option<IdentityRef>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub commits: Vec<GitCommitRef>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub ref_updates: Vec<GitRefUpdate>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub repository: Option<GitRepository>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    #[serde(rename = "_links", skip_serializing_if = "Option::is_none")]
    pub links: Option<ReferenceLinks>,
}

/// Push search filters, sent flattened as `searchCriteria.*`.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct GitPushSearchCriteria {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from_date: Option<DateTime<Utc>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub to_date: Option<DateTime<Utc>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub pusher_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub ref_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_links: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_ref_updates: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct GitBlobRef {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub object_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<u64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    #[serde(rename = "_links", skip_serializing_if = "Option::is_none")]
    pub links: Option<ReferenceLinks>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct GitObject {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub object_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub object_type: Option<GitObjectType>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct GitAnnotatedTag {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub object_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub tagged_by: Option<GitUserDate>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub tagged_object: Option<GitObject>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct GitStatusContext {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub genre: Option<String>,
}

/// A status posted against a commit or pull request by an external service.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct GitStatus {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<GitStatusState>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<GitStatusContext>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_url: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_by: Option<IdentityRef>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub creation_date: Option<DateTime<Utc>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_date: Option<DateTime<Utc>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

/// Ahead/behind counts of a branch against a base version.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct GitBranchStats {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub ahead_count: Option<i32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub behind_count: Option<i32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_base_version: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub commit: Option<GitCommitRef>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_change_type_from_server_forms() {
        let change: GitChange = serde_json::from_str(
            r#"{"changeType":"edit, rename","item":{"path":"/README.md","gitObjectType":"blob"}}"#,
        )
        .unwrap();
        let change_type = change.change_type.unwrap();

        assert!(change_type.contains(VersionControlChangeType::Edit));
        assert!(change_type.contains(VersionControlChangeType::Rename));
        assert!(!change_type.contains(VersionControlChangeType::Delete));
        assert_eq!(
            change.item.unwrap().git_object_type,
            Some(GitObjectType::Blob)
        );

        let numeric: VersionControlChangeType = serde_json::from_str("17").unwrap();
        assert_eq!(numeric, VersionControlChangeType::Add | VersionControlChangeType::Delete);
        assert_eq!(numeric.to_string(), "add, delete");
    }

    #[test]
    fn test_all_change_type_is_named() {
        assert_eq!(VersionControlChangeType::All.to_string(), "all");
        assert_eq!(VersionControlChangeType::All.bits(), 8191);
    }

    #[test]
    fn test_repository_round_trip_keeps_declared_fields() {
        let json = r#"{
            "id": "5febef5a-833d-4e14-b9c0-14cb638f91e6",
            "name": "AnotherRepository",
            "url": "https://dev.azure.com/fabrikam/_apis/git/repositories/5febef5a",
            "project": {"id": "6ce954b1", "name": "Fabrikam-Fiber-Git", "state": "wellFormed"},
            "defaultBranch": "refs/heads/main",
            "size": 1024,
            "remoteUrl": "https://dev.azure.com/fabrikam/Fabrikam-Fiber-Git/_git/AnotherRepository"
        }"#;

        let repo: GitRepository = serde_json::from_str(json).unwrap();
        let back = serde_json::to_value(&repo).unwrap();
        let original: serde_json::Value = serde_json::from_str(json).unwrap();

        assert_eq!(back, original);
    }

    #[test]
    fn test_push_body_shape() {
        let push = GitPush {
            ref_updates: vec![GitRefUpdate {
                name: Some("refs/heads/main".into()),
                old_object_id: Some("abc".into()),
                ..Default::default()
            }],
            commits: vec![GitCommitRef {
                comment: Some("Add readme".into()),
                changes: vec![GitChange {
                    change_type: Some(VersionControlChangeType::Add),
                    item: Some(GitItem::at_path("/README.md")),
                    new_content: Some(ItemContent {
                        content: Some("hello".into()),
                        content_type: Some(ItemContentType::RawText),
                    }),
                    ..Default::default()
                }],
                ..Default::default()
            }],
            ..Default::default()
        };

        let json = serde_json::to_value(&push).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "commits": [{
                    "comment": "Add readme",
                    "changes": [{
                        "changeType": "add",
                        "item": {"path": "/README.md"},
                        "newContent": {"content": "hello", "contentType": "rawText"}
                    }]
                }],
                "refUpdates": [{"name": "refs/heads/main", "oldObjectId": "abc"}]
            })
        );
    }
}
