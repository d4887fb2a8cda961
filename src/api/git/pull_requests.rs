//
//  azure-devops-rest
//  api/git/pull_requests.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Pull request records: the request itself, reviewers and votes, comment
//! threads, merge conflicts and attachments.
//!
//! # Reviewer Votes
//!
//! | Vote | Meaning |
//! |------|---------|
//! | `10` | Approved |
//! | `5` | Approved with suggestions |
//! | `0` | No vote |
//! | `-5` | Waiting for author |
//! | `-10` | Rejected |

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::models::{GitCommitRef, GitRepository, GitStatus};
use crate::api::common::{vss_enum, IdentityRef, ReferenceLinks, ResourceRef};

vss_enum! {
    /// Lifecycle state of a pull request.
    pub enum PullRequestStatus {
        NotSet = 0 => "notSet",
        Active = 1 => "active",
        Abandoned = 2 => "abandoned",
        Completed = 3 => "completed",
        All = 4 => "all",
    }
}

vss_enum! {
    /// State of the server-side test merge.
    pub enum PullRequestAsyncStatus {
        NotSet = 0 => "notSet",
        Queued = 1 => "queued",
        Conflicts = 2 => "conflicts",
        Succeeded = 3 => "succeeded",
        RejectedByPolicy = 4 => "rejectedByPolicy",
        Failure = 5 => "failure",
    }
}

vss_enum! {
    pub enum GitPullRequestMergeStrategy {
        NoFastForward = 1 => "noFastForward",
        Squash = 2 => "squash",
        Rebase = 3 => "rebase",
        RebaseMerge = 4 => "rebaseMerge",
    }
}

vss_enum! {
    pub enum PullRequestTimeRangeType {
        Created = 1 => "created",
        Closed = 2 => "closed",
    }
}

vss_enum! {
    pub enum CommentThreadStatus {
        Unknown = 0 => "unknown",
        Active = 1 => "active",
        Fixed = 2 => "fixed",
        WontFix = 3 => "wontFix",
        Closed = 4 => "closed",
        ByDesign = 5 => "byDesign",
        Pending = 6 => "pending",
    }
}

vss_enum! {
    pub enum CommentType {
        Unknown = 0 => "unknown",
        Text = 1 => "text",
        CodeChange = 2 => "codeChange",
        System = 3 => "system",
    }
}

vss_enum! {
    pub enum GitConflictType {
        None = 0 => "none",
        AddAdd = 1 => "addAdd",
        AddRename = 2 => "addRename",
        DeleteEdit = 3 => "deleteEdit",
        DeleteRename = 4 => "deleteRename",
        DirectoryFile = 5 => "directoryFile",
        DirectoryChild = 6 => "directoryChild",
        EditDelete = 7 => "editDelete",
        EditEdit = 8 => "editEdit",
        FileDirectory = 9 => "fileDirectory",
        Rename1to2 = 10 => "rename1to2",
        Rename2to1 = 11 => "rename2to1",
        RenameAdd = 12 => "renameAdd",
        RenameDelete = 13 => "renameDelete",
        RenameRename = 14 => "renameRename",
    }
}

vss_enum! {
    pub enum GitResolutionStatus {
        Unresolved = 0 => "unresolved",
        PartiallyResolved = 1 => "partiallyResolved",
        Resolved = 2 => "resolved",
    }
}

/// A reviewer and their vote.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct IdentityRefWithVote {
    #[serde(flatten)]
    pub identity: IdentityRef,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub vote: Option<i16>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_required: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_flagged: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub has_declined: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub reviewer_url: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub voted_for: Vec<IdentityRefWithVote>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct GitPullRequestCompletionOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub merge_strategy: Option<GitPullRequestMergeStrategy>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub delete_source_branch: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub merge_commit_message: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub transition_work_items: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub bypass_policy: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub bypass_reason: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub auto_complete_ignore_config_ids: Vec<i32>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct WebApiTagDefinition {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct GitPullRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pull_request_id: Option<i32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub code_review_id: Option<i32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<PullRequestStatus>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_by: Option<IdentityRef>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub creation_date: Option<DateTime<Utc>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub closed_date: Option<DateTime<Utc>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub closed_by: Option<IdentityRef>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_ref_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_ref_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub merge_status: Option<PullRequestAsyncStatus>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub merge_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub merge_failure_message: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_draft: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub supports_iterations: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_complete_set_by: Option<IdentityRef>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub completion_options: Option<GitPullRequestCompletionOptions>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_merge_source_commit: Option<GitCommitRef>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_merge_target_commit: Option<GitCommitRef>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_merge_commit: Option<GitCommitRef>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub commits: Vec<GitCommitRef>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub reviewers: Vec<IdentityRefWithVote>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub labels: Vec<WebApiTagDefinition>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub work_item_refs: Vec<ResourceRef>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub repository: Option<GitRepository>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    #[serde(rename = "_links", skip_serializing_if = "Option::is_none")]
    pub links: Option<ReferenceLinks>,
}

/// Pull request filters, sent flattened as `searchCriteria.*`.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct GitPullRequestSearchCriteria {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<PullRequestStatus>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub creator_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub reviewer_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub repository_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_repository_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_ref_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_ref_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_links: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_time: Option<DateTime<Utc>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_time: Option<DateTime<Utc>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub query_time_range_type: Option<PullRequestTimeRangeType>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct CommentPosition {
    pub line: i32,
    pub offset: i32,
}

/// Location of a thread within a file.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct CommentThreadContext {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_path: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub left_file_start: Option<CommentPosition>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub left_file_end: Option<CommentPosition>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub right_file_start: Option<CommentPosition>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub right_file_end: Option<CommentPosition>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_comment_id: Option<i32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<IdentityRef>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment_type: Option<CommentType>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub published_date: Option<DateTime<Utc>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_updated_date: Option<DateTime<Utc>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_content_updated_date: Option<DateTime<Utc>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_deleted: Option<bool>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub users_liked: Vec<IdentityRef>,

    #[serde(rename = "_links", skip_serializing_if = "Option::is_none")]
    pub links: Option<ReferenceLinks>,
}

impl Comment {
    /// A plain text comment, optionally replying to another comment.
    pub fn text(content: impl Into<String>, parent_comment_id: Option<i32>) -> Self {
        Self {
            content: Some(content.into()),
            comment_type: Some(CommentType::Text),
            parent_comment_id,
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct GitPullRequestCommentThread {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<CommentThreadStatus>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub comments: Vec<Comment>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub thread_context: Option<CommentThreadContext>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub properties: Option<Value>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub identities: Option<Value>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_deleted: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub published_date: Option<DateTime<Utc>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_updated_date: Option<DateTime<Utc>>,

    #[serde(rename = "_links", skip_serializing_if = "Option::is_none")]
    pub links: Option<ReferenceLinks>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct GitConflict {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub conflict_id: Option<i32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub conflict_path: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub conflict_type: Option<GitConflictType>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub merge_base_commit: Option<GitCommitRef>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub merge_source_commit: Option<GitCommitRef>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub merge_target_commit: Option<GitCommitRef>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub resolution_status: Option<GitResolutionStatus>,

    /// Resolution payload; its shape depends on the conflict type.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resolution: Option<Value>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub resolved_by: Option<IdentityRef>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub resolved_date: Option<DateTime<Utc>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Attachment {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<IdentityRef>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_hash: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_date: Option<DateTime<Utc>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

/// Status posted against a pull request iteration.
pub type GitPullRequestStatus = GitStatus;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reviewer_flattens_identity() {
        let reviewer: IdentityRefWithVote = serde_json::from_str(
            r#"{"id":"d6245f20","displayName":"Jamal Hartnett","vote":-5,"isRequired":true}"#,
        )
        .unwrap();

        assert_eq!(reviewer.identity.display_name.as_deref(), Some("Jamal Hartnett"));
        assert_eq!(reviewer.vote, Some(-5));

        let json = serde_json::to_value(&reviewer).unwrap();
        assert_eq!(json["id"], "d6245f20");
        assert_eq!(json["vote"], -5);
    }

    #[test]
    fn test_pull_request_status_accepts_both_forms() {
        let by_name: GitPullRequest = serde_json::from_str(r#"{"status":"completed"}"#).unwrap();
        let by_value: GitPullRequest = serde_json::from_str(r#"{"status":3}"#).unwrap();

        assert_eq!(by_name.status, Some(PullRequestStatus::Completed));
        assert_eq!(by_value.status, Some(PullRequestStatus::Completed));
    }

    #[test]
    fn test_text_comment_body() {
        let json = serde_json::to_value(Comment::text("Looks good", Some(1))).unwrap();

        assert_eq!(
            json,
            serde_json::json!({"parentCommentId": 1, "content": "Looks good", "commentType": "text"})
        );
    }
}
