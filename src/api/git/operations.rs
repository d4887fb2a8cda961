//
//  azure-devops-rest
//  api/git/operations.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Long-running server-side Git operations: merges, cherry-picks and reverts.
//!
//! Each create call returns immediately with a status of `queued` or
//! `inProgress`; poll the matching get call until the status is `completed`
//! or `failed`.

use serde::{Deserialize, Serialize};

use super::models::GitRepositoryRef;
use crate::api::common::{vss_enum, ReferenceLinks};

vss_enum! {
    pub enum GitAsyncOperationStatus {
        Queued = 1 => "queued",
        InProgress = 2 => "inProgress",
        Completed = 3 => "completed",
        Failed = 4 => "failed",
        Abandoned = 5 => "abandoned",
    }
}

vss_enum! {
    pub enum GitAsyncRefOperationFailureStatus {
        None = 0 => "none",
        InvalidRefName = 1 => "invalidRefName",
        RefNameConflict = 2 => "refNameConflict",
        CreateBranchPermissionRequired = 3 => "createBranchPermissionRequired",
        WritePermissionRequired = 4 => "writePermissionRequired",
        TargetBranchDeleted = 5 => "targetBranchDeleted",
        GitObjectTooLarge = 6 => "gitObjectTooLarge",
        OperationIndentityNotFound = 7 => "operationIndentityNotFound",
        AsyncOperationNotFound = 8 => "asyncOperationNotFound",
        Other = 9 => "other",
        EmptyCommitterSignature = 10 => "emptyCommitterSignature",
    }
}

/// Parents and message of a server-side merge commit.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct GitMergeParameters {
    #[serde(default)]
    pub parents: Vec<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct GitMergeOperationStatusDetail {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub failure_message: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub merge_commit_id: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct GitMerge {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub merge_operation_id: Option<i32>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub parents: Vec<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<GitAsyncOperationStatus>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub detailed_status: Option<GitMergeOperationStatusDetail>,

    #[serde(rename = "_links", skip_serializing_if = "Option::is_none")]
    pub links: Option<ReferenceLinks>,
}

/// What to cherry-pick or revert, and onto which branch.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct GitAsyncRefOperationParameters {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub generated_ref_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub onto_ref_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub repository: Option<GitRepositoryRef>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<GitAsyncRefOperationSource>,
}

/// Source of a cherry-pick or revert: a pull request or a list of commits.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct GitAsyncRefOperationSource {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pull_request_id: Option<i32>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub commit_list: Vec<GitCommitRefId>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct GitCommitRefId {
    pub commit_id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct GitAsyncRefOperationDetail {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub conflict: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_commit_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub failure_message: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub progress: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<GitAsyncRefOperationFailureStatus>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub timedout: Option<bool>,
}

/// State of a cherry-pick or revert.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct GitAsyncRefOperation {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parameters: Option<GitAsyncRefOperationParameters>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<GitAsyncOperationStatus>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub detailed_status: Option<GitAsyncRefOperationDetail>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    #[serde(rename = "_links", skip_serializing_if = "Option::is_none")]
    pub links: Option<ReferenceLinks>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct GitCherryPick {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cherry_pick_id: Option<i32>,

    #[serde(flatten)]
    pub operation: GitAsyncRefOperation,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct GitRevert {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub revert_id: Option<i32>,

    #[serde(flatten)]
    pub operation: GitAsyncRefOperation,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cherry_pick_reads_flattened_operation() {
        let pick: GitCherryPick = serde_json::from_str(
            r#"{
                "cherryPickId": 42,
                "status": "completed",
                "parameters": {"ontoRefName": "refs/heads/release", "generatedRefName": "refs/heads/pick"},
                "detailedStatus": {"progress": 1.0}
            }"#,
        )
        .unwrap();

        assert_eq!(pick.cherry_pick_id, Some(42));
        assert_eq!(pick.operation.status, Some(GitAsyncOperationStatus::Completed));
        assert_eq!(
            pick.operation.parameters.and_then(|p| p.onto_ref_name).as_deref(),
            Some("refs/heads/release")
        );
    }
}
