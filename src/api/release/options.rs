//
//  azure-devops-rest
//  api/release/options.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Optional query parameters of the release operations.
//!
//! List filters that the server expects as one comma separated value
//! (`tagFilter`, `propertyFilters`, id filters) are declared as
//! `Option<Vec<_>>` and joined on the way out.

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::models::{
    ApprovalStatus, ApprovalType, DeploymentOperationStatus, DeploymentStatus, EnvironmentStatus,
    ReleaseDefinitionExpands, ReleaseDefinitionQueryOrder, ReleaseEnvironmentExpands,
    ReleaseExpands, ReleaseQueryOrder, ReleaseStatus, SingleReleaseExpands,
};
use crate::api::common::PagedList;
use crate::api::query::comma_separated;

#[derive(Debug, Clone, Serialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct GetReleaseDefinitionsOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search_text: Option<String>,

    #[serde(rename = "$expand", skip_serializing_if = "Option::is_none")]
    pub expand: Option<ReleaseDefinitionExpands>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub artifact_type: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub artifact_source_id: Option<String>,

    #[serde(rename = "$top", skip_serializing_if = "Option::is_none")]
    pub top: Option<i32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub continuation_token: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub query_order: Option<ReleaseDefinitionQueryOrder>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_exact_name_match: Option<bool>,

    #[serde(serialize_with = "comma_separated", skip_serializing_if = "Option::is_none")]
    pub tag_filter: Option<Vec<String>>,

    #[serde(serialize_with = "comma_separated", skip_serializing_if = "Option::is_none")]
    pub property_filters: Option<Vec<String>>,

    #[serde(serialize_with = "comma_separated", skip_serializing_if = "Option::is_none")]
    pub definition_id_filter: Option<Vec<String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_deleted: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub search_text_contains_folder_name: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct DeleteReleaseDefinitionOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub force_delete: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct GetReleasesOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub definition_id: Option<i32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub definition_environment_id: Option<i32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub search_text: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_by: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_filter: Option<ReleaseStatus>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub environment_status_filter: Option<EnvironmentStatus>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_created_time: Option<DateTime<Utc>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_created_time: Option<DateTime<Utc>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub query_order: Option<ReleaseQueryOrder>,

    #[serde(rename = "$top", skip_serializing_if = "Option::is_none")]
    pub top: Option<i32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub continuation_token: Option<i32>,

    #[serde(rename = "$expand", skip_serializing_if = "Option::is_none")]
    pub expand: Option<ReleaseExpands>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub artifact_type_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub artifact_version_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_branch_filter: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_deleted: Option<bool>,

    #[serde(serialize_with = "comma_separated", skip_serializing_if = "Option::is_none")]
    pub tag_filter: Option<Vec<String>>,

    #[serde(serialize_with = "comma_separated", skip_serializing_if = "Option::is_none")]
    pub property_filters: Option<Vec<String>>,

    #[serde(serialize_with = "comma_separated", skip_serializing_if = "Option::is_none")]
    pub release_id_filter: Option<Vec<i32>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
}

#[derive(Debug, Clone, Serialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct GetReleaseOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub approval_filters: Option<ApprovalType>,

    #[serde(serialize_with = "comma_separated", skip_serializing_if = "Option::is_none")]
    pub property_filters: Option<Vec<String>>,

    #[serde(rename = "$expand", skip_serializing_if = "Option::is_none")]
    pub expand: Option<SingleReleaseExpands>,

    #[serde(rename = "$topGateRecords", skip_serializing_if = "Option::is_none")]
    pub top_gate_records: Option<i32>,
}

#[derive(Debug, Clone, Serialize, Default)]
pub struct GetReleaseEnvironmentOptions {
    #[serde(rename = "$expand", skip_serializing_if = "Option::is_none")]
    pub expand: Option<ReleaseEnvironmentExpands>,
}

#[derive(Debug, Clone, Serialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct GetApprovalsOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assigned_to_filter: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_filter: Option<ApprovalStatus>,

    #[serde(serialize_with = "comma_separated", skip_serializing_if = "Option::is_none")]
    pub release_ids_filter: Option<Vec<i32>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub type_filter: Option<ApprovalType>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub top: Option<i32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub continuation_token: Option<i32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub query_order: Option<ReleaseQueryOrder>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_my_group_approvals: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct GetDeploymentsOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub definition_id: Option<i32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub definition_environment_id: Option<i32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_by: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_modified_time: Option<DateTime<Utc>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_modified_time: Option<DateTime<Utc>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub deployment_status: Option<DeploymentStatus>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub operation_status: Option<DeploymentOperationStatus>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub latest_attempts_only: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub query_order: Option<ReleaseQueryOrder>,

    #[serde(rename = "$top", skip_serializing_if = "Option::is_none")]
    pub top: Option<i32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub continuation_token: Option<i32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_for: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_started_time: Option<DateTime<Utc>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_started_time: Option<DateTime<Utc>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_branch: Option<String>,
}

#[derive(Debug, Clone, Serialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct GetTaskLogOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_line: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_line: Option<i64>,
}

/// Release, approval and deployment lists take their continuation token back
/// as a number, while the header hands it out as text.
fn numeric_token<T>(page: &PagedList<T>) -> Option<i32> {
    page.continuation_token
        .as_deref()
        .and_then(|token| token.trim().parse().ok())
}

macro_rules! numeric_paging {
    ($($options:ty),+) => {
        $(
            impl $options {
                /// Points these options at the page after `page`.
                ///
                /// Returns `false` when `page` was the last one.
                pub fn advance<T>(&mut self, page: &PagedList<T>) -> bool {
                    self.continuation_token = numeric_token(page);
                    self.continuation_token.is_some()
                }
            }
        )+
    };
}

numeric_paging!(GetReleasesOptions, GetApprovalsOptions, GetDeploymentsOptions);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::query::to_query_pairs;

    #[test]
    fn test_list_filters_are_comma_joined() {
        let options = GetReleasesOptions {
            tag_filter: Some(vec!["prod".into(), "hotfix".into()]),
            release_id_filter: Some(vec![1, 2, 3]),
            expand: Some(ReleaseExpands::Environments | ReleaseExpands::Artifacts),
            ..Default::default()
        };

        let mut pairs = to_query_pairs(&options).unwrap();
        pairs.sort();

        assert_eq!(
            pairs,
            vec![
                ("$expand".to_string(), "environments, artifacts".to_string()),
                ("releaseIdFilter".to_string(), "1,2,3".to_string()),
                ("tagFilter".to_string(), "prod,hotfix".to_string()),
            ]
        );
    }

    #[test]
    fn test_advance_parses_numeric_token() {
        let mut options = GetReleasesOptions::default();

        assert!(options.advance(&PagedList::new(vec![1, 2], Some("17".to_string()))));
        assert_eq!(options.continuation_token, Some(17));

        assert!(!options.advance(&PagedList::<i32>::new(vec![], None)));
        assert_eq!(options.continuation_token, None);
    }

    #[test]
    fn test_advance_stops_on_non_numeric_token() {
        let mut options = GetDeploymentsOptions {
            continuation_token: Some(4),
            ..Default::default()
        };

        assert!(!options.advance(&PagedList::<i32>::new(vec![], Some("abc".to_string()))));
        assert_eq!(options.continuation_token, None);
    }
}
